//! Tests for package layout and writer options.

use std::io::Cursor;

use crate::{assemble, single_cell_workbook};
use pretty_assertions::assert_eq;
use sheetpack_core::{Error, Workbook};
use sheetpack_xlsx::{Compression, PackageInspector, PackageOptions, XlsxError, XlsxWriter};
use zip::{CompressionMethod, ZipArchive};

#[test]
fn test_part_layout() {
    let inspector = assemble(&single_cell_workbook());
    assert_eq!(
        inspector.part_names(),
        vec![
            "[Content_Types].xml",
            "xl/styles.xml",
            "xl/worksheets/sheet1.xml",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
        ]
    );
}

#[test]
fn test_relationships() {
    let mut inspector = assemble(&single_cell_workbook());

    let root = inspector.read_part("_rels/.rels").unwrap();
    assert!(root.contains(r#"Id="rId1""#));
    assert!(root.contains(r#"Target="xl/workbook.xml""#));
    assert!(root.contains(r#"Target="docProps/core.xml""#));

    let workbook = inspector.read_part("xl/_rels/workbook.xml.rels").unwrap();
    assert!(workbook.contains(r#"Id="rId1""#));
    assert!(workbook.contains(r#"Target="worksheets/sheet1.xml""#));
    assert!(workbook.contains(r#"Id="rId2""#));
    assert!(workbook.contains(r#"Target="styles.xml""#));
}

#[test]
fn test_without_document_properties() {
    let writer = XlsxWriter::with_options(PackageOptions {
        document_properties: false,
        ..PackageOptions::default()
    });
    let bytes = writer.assemble(&single_cell_workbook()).unwrap();
    let mut inspector = PackageInspector::from_bytes(bytes).unwrap();

    let names = inspector.part_names();
    assert!(!names.iter().any(|n| n.starts_with("docProps/")));
    let root = inspector.read_part("_rels/.rels").unwrap();
    assert!(!root.contains("docProps"));
    let content_types = inspector.read_part("[Content_Types].xml").unwrap();
    assert!(!content_types.contains("docProps"));
    assert_eq!(inspector.validate(), Vec::new());
}

#[test]
fn test_stored_compression() {
    let writer = XlsxWriter::with_options(PackageOptions {
        compression: Compression::Stored,
        ..PackageOptions::default()
    });
    let bytes = writer.assemble(&single_cell_workbook()).unwrap();

    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    for i in 0..archive.len() {
        let part = archive.by_index(i).unwrap();
        assert_eq!(part.compression(), CompressionMethod::Stored, "{}", part.name());
    }
}

#[test]
fn test_default_compression_is_deflate() {
    let bytes = XlsxWriter::new().assemble(&single_cell_workbook()).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(
        archive.by_name("xl/workbook.xml").unwrap().compression(),
        CompressionMethod::Deflated
    );
}

#[test]
fn test_empty_workbook_writes_nothing() {
    let workbook = Workbook::new();
    let result = XlsxWriter::new().write(&workbook, Cursor::new(Vec::new()));

    assert!(matches!(result, Err(XlsxError::Core(Error::EmptyWorkbook))));

    let mut buffer = Cursor::new(Vec::new());
    let _ = XlsxWriter::new().write(&workbook, &mut buffer);
    assert!(buffer.get_ref().is_empty());
}

#[test]
fn test_multiple_sheets() {
    let mut workbook = single_cell_workbook();
    workbook
        .add_sheet(sheetpack_core::SheetBuilder::new(), "Empty")
        .unwrap();

    let mut inspector = assemble(&workbook);
    assert_eq!(
        inspector.worksheet_parts().unwrap(),
        vec![
            "xl/worksheets/sheet1.xml".to_string(),
            "xl/worksheets/sheet2.xml".to_string(),
        ]
    );
    assert_eq!(
        inspector.child_elements("xl/worksheets/sheet2.xml").unwrap(),
        vec!["sheetData"]
    );
    let rels = inspector.read_part("xl/_rels/workbook.xml.rels").unwrap();
    assert!(rels.contains(r#"Id="rId3""#));
    assert!(rels.contains(r#"Target="styles.xml""#));
}
