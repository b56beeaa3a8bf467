//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] and [`CellType`] - The value stored in a cell and its tag
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A rectangular range of cells (e.g., "A1:C1")

mod address;
mod value;

pub use address::{CellAddress, CellRange};
pub(crate) use address::{check_col, check_row};
pub use value::{check_date, date_to_serial, CellType, CellValue};
