//! Common utilities for E2E tests.

use chrono::NaiveDate;
use sheetpack_core::{
    BorderEdge, BorderLineStyle, BorderSpec, CellFormatFlags, Color, DocumentProperties,
    FillSpec, FontSpec, SheetBuilder, StyleTable, Workbook,
};
use sheetpack_xlsx::{PackageInspector, XlsxWriter};

/// Worksheet part of the first sheet
pub const SHEET1: &str = "xl/worksheets/sheet1.xml";

/// Assemble `workbook` with default options and open the result.
pub fn assemble(workbook: &Workbook) -> PackageInspector<std::io::Cursor<Vec<u8>>> {
    let bytes = XlsxWriter::new()
        .assemble(workbook)
        .expect("Failed to assemble workbook");
    PackageInspector::from_bytes(bytes).expect("Failed to open assembled package")
}

/// Workbook with a single sheet holding "Test" at A1.
pub fn single_cell_workbook() -> Workbook {
    let mut workbook = Workbook::new();
    let mut sheet = SheetBuilder::new();
    sheet
        .append_row(1)
        .unwrap()
        .append_text("A", "Test", 0)
        .unwrap();
    workbook.add_sheet(sheet, "Sheet1").unwrap();
    workbook
}

/// A small report: styled header, merged title, auto-filter and column widths.
///
/// Style indices: 1 = bold with bottom border, 2 = month-year date.
pub fn report_workbook() -> Workbook {
    let mut styles = StyleTable::with_default_font(FontSpec::new().with_size(10.0));
    let month_year = styles.add_number_format("mmmm-YY");
    let bold = styles.add_font(FontSpec::new().with_bold(true));
    styles.add_fill(FillSpec::solid(Color::WHITE));
    let bottom = styles.add_border(
        BorderSpec::none().with_bottom(BorderEdge::new(BorderLineStyle::Thin, Color::Auto)),
    );
    let header = styles
        .add_cell_format(0, bold, 0, bottom, CellFormatFlags::new().font().border())
        .unwrap();
    let date = styles
        .add_cell_format(month_year, 0, 0, 0, CellFormatFlags::new().number_format())
        .unwrap();
    assert_eq!((header, date), (1, 2));

    let mut sheet = SheetBuilder::new();
    sheet
        .append_row(1)
        .unwrap()
        .append_text("A", "Some text", 0)
        .unwrap();
    sheet.add_merge_cell("A1:C1").unwrap();

    sheet
        .append_row(3)
        .unwrap()
        .append_text("A", "Project", header)
        .unwrap()
        .append_text("B", "Requested", header)
        .unwrap()
        .append_text("C", "Comment", header)
        .unwrap();

    let requested = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    sheet
        .append_row(4)
        .unwrap()
        .append_text("A", "Alpha", 0)
        .unwrap()
        .append_cell("B", requested, date)
        .unwrap()
        .append_text("C", "on time", 0)
        .unwrap();
    sheet
        .append_row(5)
        .unwrap()
        .append_text("A", "Beta", 0)
        .unwrap()
        .append_text("B", "2024-02-01", 0)
        .unwrap()
        .append_cell("C", 3.5, 0)
        .unwrap();

    sheet.set_auto_filter("A3:C5").unwrap();
    sheet.set_column_width(1, 1, 34.0, 0).unwrap();
    sheet.set_column_width(2, 2, 32.0, 0).unwrap();
    sheet.set_column_width(5, 5, 30.0, 0).unwrap();

    let mut workbook = Workbook::with_styles(styles);
    workbook.add_sheet(sheet, "Report").unwrap();
    workbook.set_properties(
        DocumentProperties::new()
            .with_title("My Title")
            .with_subject("My Subject")
            .with_creator("Me")
            .with_company("Tethys"),
    );
    workbook
}
