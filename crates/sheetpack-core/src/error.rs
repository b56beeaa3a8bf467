//! Error types for sheetpack-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a workbook
///
/// Every variant is reported by the builder call that introduces the
/// violation, so the caller learns the exact failure point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row number out of bounds
    #[error("Row number {0} out of bounds (valid: 1..={1})")]
    RowOutOfBounds(u32, u32),

    /// Column number out of bounds
    #[error("Column number {0} out of bounds (valid: 1..={1})")]
    ColumnOutOfBounds(u32, u16),

    /// Row appended out of order
    #[error("Row {row} appended after row {previous}; rows must be strictly increasing")]
    RowOrder {
        /// Row number that was rejected
        row: u32,
        /// Last row number accepted
        previous: u32,
    },

    /// Cell appended out of column order within a row
    #[error("Cell {column}{row} appended after column {previous}; cells must go left to right")]
    ColumnOrder {
        /// Row number of the owning row
        row: u32,
        /// Column letters that were rejected
        column: String,
        /// Column letters of the last accepted cell
        previous: String,
    },

    /// Full cell reference names a different row than the owning row
    #[error("Cell reference {reference} does not belong to row {row}")]
    RowMismatch {
        /// The offending reference
        reference: String,
        /// Row number of the owning row
        row: u32,
    },

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name (case-insensitive)
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Merge range intersects an existing merge range
    #[error("Merge range {range} overlaps existing merge range {existing}")]
    MergeOverlap {
        /// Range that was rejected
        range: String,
        /// Range already registered
        existing: String,
    },

    /// Column range with min > max or outside the sheet
    #[error("Invalid column range {min}..={max}")]
    InvalidColumnRange {
        /// First column (1-based)
        min: u16,
        /// Last column (1-based)
        max: u16,
    },

    /// Column width that is not a positive finite number
    #[error("Invalid column width: {0}")]
    InvalidColumnWidth(f64),

    /// Style index not present in the cell format table
    #[error("Invalid style index: {0}")]
    InvalidStyleIndex(u32),

    /// Cell format referencing a font/fill/border/number format that does not exist
    #[error("Unknown {kind} id {id}")]
    UnknownStyleComponent {
        /// Which table was referenced
        kind: &'static str,
        /// The id that was not found
        id: u32,
    },

    /// Date before 1900-03-01, where serials disagree with spreadsheet applications
    #[error("Date {0} is before 1900-03-01 and has no reliable serial number")]
    DateOutOfRange(chrono::NaiveDateTime),

    /// Workbook has no sheets
    #[error("Workbook contains no sheets")]
    EmptyWorkbook,
}
