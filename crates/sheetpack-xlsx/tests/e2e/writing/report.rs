//! End-to-end report scenario: styles, merges, filter and column widths.

use crate::{assemble, report_workbook, SHEET1};
use pretty_assertions::assert_eq;

#[test]
fn test_worksheet_element_order() {
    let mut inspector = assemble(&report_workbook());
    let children = inspector.child_elements(SHEET1).expect("Failed to read sheet");

    assert_eq!(
        children,
        vec!["dimension", "cols", "sheetData", "autoFilter", "mergeCells"]
    );
}

#[test]
fn test_worksheet_content() {
    let mut inspector = assemble(&report_workbook());
    let xml = inspector.read_part(SHEET1).unwrap();

    assert!(xml.contains(r#"<dimension ref="A1:C5"/>"#));
    assert!(xml.contains(r#"<col min="1" max="1" width="34" customWidth="1"/>"#));
    assert!(xml.contains(r#"<col min="2" max="2" width="32" customWidth="1"/>"#));
    assert!(xml.contains(r#"<col min="5" max="5" width="30" customWidth="1"/>"#));
    assert!(xml.contains(r#"<autoFilter ref="A3:C5"/>"#));
    assert!(xml.contains(r#"<mergeCell ref="A1:C1"/>"#));

    let cells = inspector.worksheet_cells(SHEET1).unwrap();
    let header: Vec<(&str, Option<u32>)> = cells
        .iter()
        .filter(|c| c.row == Some(3))
        .map(|c| (c.reference.as_str(), c.style))
        .collect();
    assert_eq!(header, vec![("A3", Some(1)), ("B3", Some(1)), ("C3", Some(1))]);

    let requested = cells.iter().find(|c| c.reference == "B4").unwrap();
    assert_eq!(requested.style, Some(2));
    assert_eq!(requested.cell_type, None);
    assert_eq!(requested.value.as_deref(), Some("45306"));

    let text_date = cells.iter().find(|c| c.reference == "B5").unwrap();
    assert_eq!(text_date.cell_type.as_deref(), Some("inlineStr"));
    assert_eq!(text_date.value.as_deref(), Some("2024-02-01"));
}

#[test]
fn test_styles_part() {
    let mut inspector = assemble(&report_workbook());
    assert_eq!(
        inspector.child_elements("xl/styles.xml").unwrap(),
        vec![
            "numFmts",
            "fonts",
            "fills",
            "borders",
            "cellStyleXfs",
            "cellXfs",
            "cellStyles",
            "dxfs",
            "tableStyles",
        ]
    );

    let xml = inspector.read_part("xl/styles.xml").unwrap();
    assert!(xml.contains(r#"<numFmt numFmtId="164" formatCode="mmmm-YY"/>"#));
    assert!(xml.contains(r#"<cellXfs count="3">"#));
    assert!(xml.contains(r#"<fills count="3">"#));
}

#[test]
fn test_workbook_filter_name() {
    let mut inspector = assemble(&report_workbook());
    let xml = inspector.read_part("xl/workbook.xml").unwrap();

    assert!(xml.contains(r#"<sheet name="Report" sheetId="1" r:id="rId1"/>"#));
    assert!(xml.contains(r#"<definedName name="_xlnm._FilterDatabase" localSheetId="0" hidden="1">"#));
    assert!(xml.contains("&apos;Report&apos;!$A$3:$C$5"));
    assert_eq!(
        inspector.worksheet_parts().unwrap(),
        vec!["xl/worksheets/sheet1.xml".to_string()]
    );
}

#[test]
fn test_document_properties() {
    let mut inspector = assemble(&report_workbook());
    let core = inspector.read_part("docProps/core.xml").unwrap();
    assert!(core.contains("<dc:title>My Title</dc:title>"));
    assert!(core.contains("<dc:subject>My Subject</dc:subject>"));
    assert!(core.contains("<dc:creator>Me</dc:creator>"));

    let app = inspector.read_part("docProps/app.xml").unwrap();
    assert!(app.contains("<Company>Tethys</Company>"));
    assert!(app.contains("<vt:lpstr>Report</vt:lpstr>"));
}
