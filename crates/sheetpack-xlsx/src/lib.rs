//! # sheetpack-xlsx
//!
//! XLSX (Office Open XML) package writer for sheetpack.
//!
//! [`XlsxWriter`] turns a validated [`sheetpack_core::Workbook`] into a
//! zip package. [`PackageInspector`] reads a finished package back for
//! structural validation, and [`open_in_viewer`] hands it to a spreadsheet
//! application.

pub mod doc_props;
pub mod error;
pub mod inspect;
pub mod launch;
pub mod logging;
pub mod package;
pub mod styles;
pub mod workbook;
pub mod worksheet;
pub mod writer;
pub mod xml;

pub use error::{XlsxError, XlsxResult};
pub use inspect::{validate_file, InspectedCell, IssueKind, PackageInspector, ValidationIssue};
pub use launch::{open_in_viewer, ViewerCommand};
pub use logging::MemoryLogger;
pub use package::{Compression, ContentTypes, ZipPackageWriter};
pub use writer::{PackageOptions, XlsxWriter};
