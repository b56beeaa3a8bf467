//! Cell value types

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Error, Result};

/// Days from 0001-01-01 (day 1) to 1899-12-30, the serial-number epoch
const SERIAL_EPOCH_DAYS_FROM_CE: i32 = 693_594;

/// The value stored in a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text, written inline (no shared-string table)
    String(String),
    /// Numeric value
    Number(f64),
    /// Boolean value (TRUE/FALSE)
    Boolean(bool),
    /// Date/time, written as a spreadsheet serial number
    Date(NaiveDateTime),
}

/// Type tag derived from a [`CellValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Inline string
    String,
    /// Number
    Number,
    /// Boolean
    Boolean,
    /// Date, stored as a serial number
    Date,
}

impl CellValue {
    /// Get the type tag for this value
    pub fn cell_type(&self) -> CellType {
        match self {
            CellValue::String(_) => CellType::String,
            CellValue::Number(_) => CellType::Number,
            CellValue::Boolean(_) => CellType::Boolean,
            CellValue::Date(_) => CellType::Date,
        }
    }

    /// Get as string, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as number. Dates yield their serial number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Date(dt) => Some(date_to_serial(dt)),
            _ => None,
        }
    }

    /// Get as boolean, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Days from 0001-01-01 to 1900-03-01, the first date with serial 61
const FIRST_SERIAL_DATE_DAYS_FROM_CE: i32 = SERIAL_EPOCH_DAYS_FROM_CE + 61;

/// Convert a date/time to a spreadsheet serial number (1900 date system).
///
/// Whole days count from 1899-12-30; the fraction is the time of day. Serials
/// agree with Excel for every date from 1900-03-01 on. Earlier dates are
/// refused when a cell is appended (see [`check_date`]); for them the result
/// here is unspecified.
pub fn date_to_serial(dt: &NaiveDateTime) -> f64 {
    let days = (dt.date().num_days_from_ce() - SERIAL_EPOCH_DAYS_FROM_CE) as f64;
    let seconds = dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 / 1e9;
    days + seconds / 86_400.0
}

/// Check that a date has a serial number spreadsheet applications agree on
///
/// Fails with [`Error::DateOutOfRange`] before 1900-03-01: earlier serials are
/// negative or fall in the range shifted by the fictitious 1900-02-29.
pub fn check_date(dt: &NaiveDateTime) -> Result<()> {
    if dt.date().num_days_from_ce() < FIRST_SERIAL_DATE_DAYS_FROM_CE {
        return Err(Error::DateOutOfRange(*dt));
    }
    Ok(())
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::Date(dt)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d.and_time(chrono::NaiveTime::MIN))
    }
}
