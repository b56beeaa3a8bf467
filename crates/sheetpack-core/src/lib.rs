//! # sheetpack-core
//!
//! Data model and builders for the sheetpack spreadsheet writer.
//!
//! This crate provides the types a workbook is assembled from:
//! - [`CellValue`] - Cell values (strings, numbers, booleans, dates)
//! - [`CellAddress`] and [`CellRange`] - A1-style references and ranges
//! - [`StyleTable`] - Number formats, fonts, fills, borders and cell formats
//! - [`SheetBuilder`] / [`Sheet`] - Worksheet content
//! - [`Workbook`] - Sheets, styles and document properties
//!
//! Serialization to `.xlsx` lives in `sheetpack-xlsx`.
//!
//! ## Example
//!
//! ```rust
//! use sheetpack_core::{SheetBuilder, Workbook};
//!
//! let mut workbook = Workbook::new();
//!
//! let mut sheet = SheetBuilder::new();
//! sheet.append_row(1)?.append_cell("A", "Hello", 0)?.append_cell("B", 42.0, 0)?;
//! sheet.append_row(3)?.append_cell_at("A3", true, 0)?;
//!
//! workbook.add_sheet(sheet, "Sheet1")?;
//! workbook.validate()?;
//! # Ok::<(), sheetpack_core::Error>(())
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod properties;
pub mod sheet;
pub mod style;
pub mod workbook;

// Re-exports for convenience
pub use cell::{check_date, date_to_serial, CellAddress, CellRange, CellType, CellValue};
pub use column::{resolve_columns, ColumnSpec};
pub use error::{Error, Result};
pub use properties::DocumentProperties;
pub use sheet::{Cell, Row, RowHandle, Sheet, SheetBuilder};
pub use workbook::Workbook;

// Re-export all style types for convenience
pub use style::{
    builtin, Alignment, BorderEdge, BorderLineStyle, BorderSpec, CellFormat, CellFormatFlags,
    Color, FillSpec, FontScheme, FontSpec, HorizontalAlignment, NumberFormat, PatternType,
    StyleTable, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// First number format id available for custom formats
///
/// Ids below this are reserved for built-in formats.
pub const FIRST_CUSTOM_NUM_FMT_ID: u32 = 164;
