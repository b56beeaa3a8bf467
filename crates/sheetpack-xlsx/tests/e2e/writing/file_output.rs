//! Tests for writing packages to disk.

use std::fs;

use crate::{report_workbook, single_cell_workbook};
use sheetpack_core::Workbook;
use sheetpack_xlsx::{PackageInspector, XlsxWriter};
use tempfile::TempDir;

#[test]
fn test_write_file_creates_package() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.xlsx");

    XlsxWriter::new()
        .write_file(&report_workbook(), &path)
        .expect("Failed to write file");

    let mut inspector = PackageInspector::open(&path).expect("Failed to open written file");
    assert!(inspector.read_part("xl/workbook.xml").is_ok());
    // Only the destination remains; the temporary file was renamed over it
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_write_file_replaces_existing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.xlsx");
    fs::write(&path, b"old content").unwrap();

    XlsxWriter::new()
        .write_file(&single_cell_workbook(), &path)
        .unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_failed_write_leaves_destination_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keep.xlsx");
    fs::write(&path, b"previous").unwrap();

    let result = XlsxWriter::new().write_file(&Workbook::new(), &path);

    assert!(result.is_err());
    assert_eq!(fs::read(&path).unwrap(), b"previous");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.xlsx");

    assert!(XlsxWriter::new()
        .write_file(&single_cell_workbook(), &path)
        .is_err());
    assert!(!path.exists());
}
