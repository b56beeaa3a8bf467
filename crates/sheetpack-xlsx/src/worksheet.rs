//! Worksheet part serialization

use sheetpack_core::{date_to_serial, Cell, CellValue, Sheet};

use crate::xml::{escape_xml, format_number, NS_RELATIONSHIPS, NS_SPREADSHEETML, XML_DECLARATION};

/// Package-relative part name of a sheet's worksheet part
pub fn worksheet_part_name(sheet_id: u32) -> String {
    format!("xl/worksheets/sheet{}.xml", sheet_id)
}

/// Serialize a sheet
///
/// The element order is fixed by the schema: dimension, cols, sheetData,
/// autoFilter, mergeCells. Optional elements are left out when empty.
pub fn worksheet_xml(sheet: &Sheet) -> String {
    let mut content = String::from(XML_DECLARATION);
    content.push_str(&format!(
        "\n<worksheet xmlns=\"{}\" xmlns:r=\"{}\">",
        NS_SPREADSHEETML, NS_RELATIONSHIPS
    ));

    if let Some(dimension) = sheet.dimension() {
        content.push_str(&format!("\n    <dimension ref=\"{}\"/>", dimension));
    }

    let columns = sheet.resolved_columns();
    if !columns.is_empty() {
        content.push_str("\n    <cols>");
        for col in &columns {
            content.push_str(&format!(
                "\n        <col min=\"{}\" max=\"{}\" width=\"{}\"",
                col.min,
                col.max,
                format_number(col.width)
            ));
            if col.style_index != 0 {
                content.push_str(&format!(" style=\"{}\"", col.style_index));
            }
            if col.custom_width {
                content.push_str(" customWidth=\"1\"");
            }
            content.push_str("/>");
        }
        content.push_str("\n    </cols>");
    }

    if sheet.rows().is_empty() {
        content.push_str("\n    <sheetData/>");
    } else {
        content.push_str("\n    <sheetData>");
        for row in sheet.rows() {
            if row.is_empty() {
                content.push_str(&format!("\n        <row r=\"{}\"/>", row.index()));
                continue;
            }
            content.push_str(&format!("\n        <row r=\"{}\">", row.index()));
            for cell in row.cells() {
                content.push_str("\n            ");
                write_cell(&mut content, cell);
            }
            content.push_str("\n        </row>");
        }
        content.push_str("\n    </sheetData>");
    }

    if let Some(range) = sheet.auto_filter() {
        content.push_str(&format!("\n    <autoFilter ref=\"{}\"/>", range));
    }

    let merges = sheet.merge_cells();
    if !merges.is_empty() {
        content.push_str(&format!("\n    <mergeCells count=\"{}\">", merges.len()));
        for range in merges {
            content.push_str(&format!("\n        <mergeCell ref=\"{}\"/>", range));
        }
        content.push_str("\n    </mergeCells>");
    }

    content.push_str("\n</worksheet>");
    content
}

fn write_cell(content: &mut String, cell: &Cell) {
    let cell_ref = cell.reference();
    let style_attr = if cell.style_index != 0 {
        format!(" s=\"{}\"", cell.style_index)
    } else {
        String::new()
    };

    match &cell.value {
        CellValue::String(s) => {
            content.push_str(&format!(
                "<c r=\"{}\"{} t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
                cell_ref,
                style_attr,
                escape_xml(s)
            ));
        }
        CellValue::Number(n) if n.is_finite() => {
            content.push_str(&format!(
                "<c r=\"{}\"{}><v>{}</v></c>",
                cell_ref,
                style_attr,
                format_number(*n)
            ));
        }
        CellValue::Number(_) => {
            // NaN and infinities have no numeric representation
            content.push_str(&format!(
                "<c r=\"{}\"{} t=\"e\"><v>#NUM!</v></c>",
                cell_ref, style_attr
            ));
        }
        CellValue::Boolean(b) => {
            content.push_str(&format!(
                "<c r=\"{}\"{} t=\"b\"><v>{}</v></c>",
                cell_ref,
                style_attr,
                if *b { 1 } else { 0 }
            ));
        }
        CellValue::Date(dt) => {
            content.push_str(&format!(
                "<c r=\"{}\"{}><v>{}</v></c>",
                cell_ref,
                style_attr,
                format_number(date_to_serial(dt))
            ));
        }
    }
}
