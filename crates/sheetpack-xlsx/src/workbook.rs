//! Workbook part and relationship parts

use sheetpack_core::{CellAddress, CellRange, Workbook};

use crate::worksheet::worksheet_part_name;
use crate::xml::{
    escape_xml, rel_type, NS_PACKAGE_RELATIONSHIPS, NS_RELATIONSHIPS, NS_SPREADSHEETML,
    XML_DECLARATION,
};

/// Package-relative name of the workbook part
pub const WORKBOOK_PART: &str = "xl/workbook.xml";
/// Package-relative name of the workbook relationships part
pub const WORKBOOK_RELS_PART: &str = "xl/_rels/workbook.xml.rels";
/// Package-relative name of the package relationships part
pub const ROOT_RELS_PART: &str = "_rels/.rels";
/// Package-relative name of the styles part
pub const STYLES_PART: &str = "xl/styles.xml";

/// One relationship entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship id (`rId1`, `rId2`, ...)
    pub id: String,
    /// Relationship type URI
    pub rel_type: &'static str,
    /// Target, relative to the source part's folder
    pub target: String,
}

/// Relationships of one source part, with ids assigned in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty relationship set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its id
    pub fn add<S: Into<String>>(&mut self, rel_type: &'static str, target: S) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            rel_type,
            target: target.into(),
        });
        id
    }

    /// Entries in id order
    pub fn entries(&self) -> &[Relationship] {
        &self.entries
    }

    /// Serialize as a `.rels` part
    pub fn to_xml(&self) -> String {
        let mut content = String::from(XML_DECLARATION);
        content.push_str(&format!("\n<Relationships xmlns=\"{}\">", NS_PACKAGE_RELATIONSHIPS));
        for rel in &self.entries {
            content.push_str(&format!(
                "\n    <Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>",
                rel.id,
                rel.rel_type,
                escape_xml(&rel.target)
            ));
        }
        content.push_str("\n</Relationships>");
        content
    }
}

/// Package-level relationships (`_rels/.rels`)
///
/// The workbook is always `rId1`; document property parts follow when present.
pub fn root_relationships(with_doc_props: bool) -> Relationships {
    let mut rels = Relationships::new();
    rels.add(rel_type::OFFICE_DOCUMENT, WORKBOOK_PART);
    if with_doc_props {
        rels.add(rel_type::CORE_PROPERTIES, crate::doc_props::CORE_PART);
        rels.add(rel_type::EXTENDED_PROPERTIES, crate::doc_props::APP_PART);
    }
    rels
}

/// Workbook relationships (`xl/_rels/workbook.xml.rels`)
///
/// Sheets get `rId1..rIdN` in display order, the styles part gets `rIdN+1`.
pub fn workbook_relationships(workbook: &Workbook) -> Relationships {
    let mut rels = Relationships::new();
    for sheet in workbook.sheets() {
        let part = worksheet_part_name(sheet.id());
        let target = part.trim_start_matches("xl/").to_string();
        rels.add(rel_type::WORKSHEET, target);
    }
    rels.add(rel_type::STYLES, STYLES_PART.trim_start_matches("xl/"));
    rels
}

/// Serialize `xl/workbook.xml`
///
/// Sheet `r:id`s come from `rels`, which must be the set returned by
/// [`workbook_relationships`] for the same workbook.
pub fn workbook_xml(workbook: &Workbook, rels: &Relationships) -> String {
    let mut content = String::from(XML_DECLARATION);
    content.push_str(&format!(
        "\n<workbook xmlns=\"{}\" xmlns:r=\"{}\">\n    <sheets>",
        NS_SPREADSHEETML, NS_RELATIONSHIPS
    ));

    let sheet_rels = rels
        .entries()
        .iter()
        .filter(|r| r.rel_type == rel_type::WORKSHEET);
    for (sheet, rel) in workbook.sheets().iter().zip(sheet_rels) {
        content.push_str(&format!(
            "\n        <sheet name=\"{}\" sheetId=\"{}\" r:id=\"{}\"/>",
            escape_xml(sheet.name()),
            sheet.id(),
            rel.id
        ));
    }
    content.push_str("\n    </sheets>");

    // Spreadsheet applications keep the auto-filter range in a hidden defined name
    let filters: Vec<(usize, String)> = workbook
        .sheets()
        .iter()
        .enumerate()
        .filter_map(|(i, sheet)| {
            sheet
                .auto_filter()
                .map(|range| (i, absolute_reference(sheet.name(), range)))
        })
        .collect();
    if !filters.is_empty() {
        content.push_str("\n    <definedNames>");
        for (local_sheet_id, reference) in filters {
            content.push_str(&format!(
                "\n        <definedName name=\"_xlnm._FilterDatabase\" localSheetId=\"{}\" hidden=\"1\">{}</definedName>",
                local_sheet_id,
                escape_xml(&reference)
            ));
        }
        content.push_str("\n    </definedNames>");
    }

    content.push_str("\n</workbook>");
    content
}

/// `'Sheet'!$A$1:$C$5`
fn absolute_reference(sheet_name: &str, range: &CellRange) -> String {
    let abs = |addr: &CellAddress| {
        format!("${}${}", CellAddress::column_to_letters(addr.col), addr.row)
    };
    format!(
        "'{}'!{}:{}",
        sheet_name.replace('\'', "''"),
        abs(&range.start),
        abs(&range.end)
    )
}
