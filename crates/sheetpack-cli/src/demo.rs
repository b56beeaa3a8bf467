//! The demo report: a styled, filtered project list

use chrono::NaiveDateTime;
use sheetpack_core::{
    BorderEdge, BorderLineStyle, BorderSpec, CellFormatFlags, Color, DocumentProperties,
    FillSpec, FontSpec, Result, SheetBuilder, StyleTable, Workbook,
};

/// Name of the report's only sheet
pub const SHEET_NAME: &str = "Table1";

/// Build the demo report
///
/// `requested` fills the "Requested" column: once as a native date cell,
/// once as ISO-8601 text.
pub fn build_report(requested: NaiveDateTime) -> Result<Workbook> {
    let styles = report_styles()?;

    let mut sheet = SheetBuilder::new();
    sheet.set_column_width(1, 1, 34.0, 0)?;
    sheet.set_column_width(2, 2, 32.0, 0)?;
    sheet.set_column_width(5, 5, 30.0, 0)?;

    sheet.append_row(1)?.append_text("A", "Some text", 0)?;
    sheet.add_merge_cell("A1:C1")?;

    sheet
        .append_row(3)?
        .append_text("A", "Project", 1)?
        .append_text("B", "Requested", 1)?
        .append_text("C", "Comment", 1)?;

    sheet
        .append_row(4)?
        .append_text("A", "Project A", 0)?
        .append_cell("B", requested, 2)?
        .append_text("C", "Comment", 0)?;

    sheet
        .append_row(5)?
        .append_text("A", "Project B", 0)?
        .append_text("B", requested.format("%Y-%m-%dT%H:%M:%S%.f").to_string(), 2)?
        .append_text("C", "Comment X", 0)?;

    sheet.set_auto_filter("A3:C5")?;

    let mut workbook = Workbook::with_styles(styles);
    workbook.add_sheet(sheet, SHEET_NAME)?;
    workbook.set_properties(
        DocumentProperties::new()
            .with_title("My Title")
            .with_subject("My Subject")
            .with_creator("Me")
            .with_company("Tethys"),
    );
    Ok(workbook)
}

/// Style table of the report
///
/// Cell formats: 0 = Calibri 10 default, 1 = bold Calibri 11 with a bottom
/// border, 2 = month-year date.
fn report_styles() -> Result<StyleTable> {
    let mut styles = StyleTable::with_default_font(FontSpec::new().with_size(10.0));

    let month_year = styles.add_number_format("mmmm-YY");
    styles.add_number_format("DD.MM.YYYY");

    let bold = styles.add_font(FontSpec::new().with_bold(true));

    // Pattern fills none and gray125 are pre-seeded
    styles.add_fill(FillSpec::solid(Color::WHITE));

    let thin = BorderEdge::new(BorderLineStyle::Thin, Color::Indexed(64));
    styles.add_border(BorderSpec::all(BorderLineStyle::Thin, Color::Indexed(64)));
    let bottom =
        styles.add_border(BorderSpec::none().with_bottom(BorderEdge::plain(BorderLineStyle::Thin)));
    styles.add_border(BorderSpec::none().with_left(thin).with_right(thin));

    styles.add_cell_format(0, bold, 0, bottom, CellFormatFlags::new())?;
    styles.add_cell_format(month_year, 0, 0, 0, CellFormatFlags::new().number_format())?;
    Ok(styles)
}
