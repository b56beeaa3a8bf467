//! Tests for cell values written to worksheet parts.

use crate::{assemble, single_cell_workbook, SHEET1};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sheetpack_core::{SheetBuilder, Workbook};

#[test]
fn test_inline_string_round_trip() {
    let mut inspector = assemble(&single_cell_workbook());
    let cells = inspector.worksheet_cells(SHEET1).expect("Failed to read cells");

    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].reference, "A1");
    assert_eq!(cells[0].row, Some(1));
    assert_eq!(cells[0].cell_type.as_deref(), Some("inlineStr"));
    assert_eq!(cells[0].value.as_deref(), Some("Test"));
}

#[test]
fn test_value_types() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let mut sheet = SheetBuilder::new();
    sheet
        .append_row(2)
        .unwrap()
        .append_cell("A", 42.0, 0)
        .unwrap()
        .append_cell("B", true, 0)
        .unwrap()
        .append_cell("C", date, 0)
        .unwrap()
        .append_cell("D", f64::NAN, 0)
        .unwrap()
        .append_text("E", "  <padded> & ", 0)
        .unwrap();
    let mut workbook = Workbook::new();
    workbook.add_sheet(sheet, "Types").unwrap();

    let mut inspector = assemble(&workbook);
    let cells = inspector.worksheet_cells(SHEET1).unwrap();
    let summary: Vec<(&str, Option<&str>, Option<&str>)> = cells
        .iter()
        .map(|c| {
            (
                c.reference.as_str(),
                c.cell_type.as_deref(),
                c.value.as_deref(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            ("A2", None, Some("42")),
            ("B2", Some("b"), Some("1")),
            ("C2", None, Some("45306.5")),
            ("D2", Some("e"), Some("#NUM!")),
            ("E2", Some("inlineStr"), Some("  <padded> & ")),
        ]
    );
}

#[test]
fn test_row_gaps_are_kept() {
    let mut sheet = SheetBuilder::new();
    sheet.append_row(1).unwrap().append_text("A", "first", 0).unwrap();
    sheet.append_row(7).unwrap().append_text("C", "last", 0).unwrap();
    let mut workbook = Workbook::new();
    workbook.add_sheet(sheet, "Gaps").unwrap();

    let mut inspector = assemble(&workbook);
    let cells = inspector.worksheet_cells(SHEET1).unwrap();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[1].reference, "C7");
    assert_eq!(cells[1].row, Some(7));

    let xml = inspector.read_part(SHEET1).unwrap();
    assert!(xml.contains(r#"<dimension ref="A1:C7"/>"#));
}

#[test]
fn test_control_characters_are_encoded() {
    let mut sheet = SheetBuilder::new();
    sheet
        .append_row(1)
        .unwrap()
        .append_text("A", "a\u{1}b", 0)
        .unwrap()
        .append_text("B", "_x0041_", 0)
        .unwrap();
    let mut workbook = Workbook::new();
    workbook.add_sheet(sheet, "Control").unwrap();

    let mut inspector = assemble(&workbook);
    let xml = inspector.read_part(SHEET1).unwrap();
    assert!(xml.contains("a_x0001_b"));
    assert!(xml.contains("_x005F_x0041_"));
    assert!(!xml.contains('\u{1}'));

    let cells = inspector.worksheet_cells(SHEET1).unwrap();
    let values: Vec<Option<&str>> = cells.iter().map(|c| c.value.as_deref()).collect();
    assert_eq!(values, vec![Some("a\u{1}b"), Some("_x0041_")]);
    assert!(inspector.validate().is_empty());
}
