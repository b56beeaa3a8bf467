//! Tests for packages produced by `XlsxWriter`.

mod cells;
mod file_output;
mod package;
mod report;
mod validation;
