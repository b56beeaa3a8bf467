//! Tests for package validation.

use std::io::Cursor;

use crate::{assemble, report_workbook, single_cell_workbook};
use pretty_assertions::assert_eq;
use sheetpack_xlsx::{
    validate_file, Compression, IssueKind, MemoryLogger, PackageInspector, XlsxWriter,
    ZipPackageWriter,
};
use tempfile::TempDir;

#[test]
fn test_assembled_packages_are_valid() {
    for workbook in [single_cell_workbook(), report_workbook()] {
        let mut inspector = assemble(&workbook);
        assert_eq!(inspector.validate(), Vec::new());
    }
}

#[test]
fn test_report_logs_nothing_for_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("valid.xlsx");
    XlsxWriter::new().write_file(&report_workbook(), &path).unwrap();

    let logger = MemoryLogger::new();
    assert_eq!(validate_file(&path, &logger), 0);
    assert!(logger.errors().is_empty());
}

#[test]
fn test_hand_built_package_issues() {
    let mut package = ZipPackageWriter::new(Cursor::new(Vec::new()), Compression::Deflated);
    package
        .add_part(
            "_rels/.rels",
            "application/vnd.openxmlformats-package.relationships+xml",
            br#"<Relationships><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#.to_vec(),
        )
        .unwrap();
    let bytes = package.finish().unwrap().into_inner();

    let mut inspector = PackageInspector::from_bytes(bytes).unwrap();
    let issues = inspector.validate();
    let kinds: Vec<IssueKind> = issues.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            IssueKind::MissingPart,
            IssueKind::MissingPart,
            IssueKind::MissingPart,
            IssueKind::Relationship,
        ]
    );
    assert_eq!(issues[3].part, "/_rels/.rels");

    let logger = MemoryLogger::new();
    assert_eq!(inspector.validate_and_report(&logger), 4);
    assert_eq!(
        logger.errors().last().map(String::as_str),
        Some("Total issue count=4")
    );
}

#[test]
fn test_not_a_zip_counts_as_issue() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"definitely not a zip").unwrap();

    let logger = MemoryLogger::new();
    assert_eq!(validate_file(&path, &logger), 1);
    assert_eq!(logger.errors().len(), 1);
}
