//! Number format types

use crate::FIRST_CUSTOM_NUM_FMT_ID;

/// A custom number format table entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberFormat {
    /// Format id (>= 164)
    pub id: u32,
    /// Format code (e.g., "DD.MM.YYYY")
    pub code: String,
}

/// Ids of commonly used built-in number formats
///
/// Built-in formats occupy ids 0-163 and are never written to the
/// styles part; cells reference them directly.
pub mod builtin {
    /// General
    pub const GENERAL: u32 = 0;
    /// 0
    pub const INTEGER: u32 = 1;
    /// 0.00
    pub const DECIMAL_2: u32 = 2;
    /// #,##0
    pub const THOUSANDS: u32 = 3;
    /// #,##0.00
    pub const THOUSANDS_DECIMAL_2: u32 = 4;
    /// 0%
    pub const PERCENT: u32 = 9;
    /// 0.00%
    pub const PERCENT_DECIMAL_2: u32 = 10;
    /// m/d/yyyy (locale short date)
    pub const DATE: u32 = 14;
    /// d-mmm-yy
    pub const DATE_D_MMM_YY: u32 = 15;
    /// h:mm
    pub const TIME_H_MM: u32 = 20;
    /// m/d/yyyy h:mm
    pub const DATE_TIME: u32 = 22;
    /// @ (text)
    pub const TEXT: u32 = 49;
}

/// Check whether an id falls in the built-in range
pub fn is_builtin(id: u32) -> bool {
    id < FIRST_CUSTOM_NUM_FMT_ID
}
