//! End-to-end tests for sheetpack-xlsx.
//!
//! Each test builds the workbook it needs, assembles it into a package and
//! reads the package back with `PackageInspector` to assert on the parts
//! that were written.

mod common;
mod writing;

// Re-export common utilities for submodules
pub use common::*;
