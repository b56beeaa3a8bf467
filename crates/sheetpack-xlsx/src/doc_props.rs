//! Document property parts (`docProps/core.xml`, `docProps/app.xml`)

use chrono::NaiveDateTime;
use sheetpack_core::{DocumentProperties, Workbook};

use crate::xml::{escape_xml, XML_DECLARATION};

/// Package-relative name of the core properties part
pub const CORE_PART: &str = "docProps/core.xml";
/// Package-relative name of the extended properties part
pub const APP_PART: &str = "docProps/app.xml";

const APPLICATION: &str = "sheetpack";

/// Serialize core properties
///
/// `created` is written as both the creation and modification time when the
/// properties carry no creation time of their own.
pub fn core_xml(props: &DocumentProperties, created: NaiveDateTime) -> String {
    let created = props.created.unwrap_or(created);
    let timestamp = created.format("%Y-%m-%dT%H:%M:%SZ").to_string();

    let mut content = String::from(XML_DECLARATION);
    content.push_str(
        "\n<cp:coreProperties \
         xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
         xmlns:dcterms=\"http://purl.org/dc/terms/\" \
         xmlns:dcmitype=\"http://purl.org/dc/dcmitype/\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">",
    );
    if let Some(title) = &props.title {
        content.push_str(&format!("\n    <dc:title>{}</dc:title>", escape_xml(title)));
    }
    if let Some(subject) = &props.subject {
        content.push_str(&format!("\n    <dc:subject>{}</dc:subject>", escape_xml(subject)));
    }
    if let Some(creator) = &props.creator {
        content.push_str(&format!("\n    <dc:creator>{}</dc:creator>", escape_xml(creator)));
    }
    content.push_str(&format!(
        "\n    <dcterms:created xsi:type=\"dcterms:W3CDTF\">{}</dcterms:created>",
        timestamp
    ));
    content.push_str(&format!(
        "\n    <dcterms:modified xsi:type=\"dcterms:W3CDTF\">{}</dcterms:modified>",
        timestamp
    ));
    content.push_str("\n</cp:coreProperties>");
    content
}

/// Serialize extended (application) properties
pub fn app_xml(workbook: &Workbook) -> String {
    let sheets = workbook.sheets();

    let mut content = String::from(XML_DECLARATION);
    content.push_str(
        "\n<Properties \
         xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" \
         xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">",
    );
    content.push_str(&format!("\n    <Application>{}</Application>", APPLICATION));
    content.push_str(&format!(
        "\n    <HeadingPairs><vt:vector size=\"2\" baseType=\"variant\">\
         <vt:variant><vt:lpstr>Worksheets</vt:lpstr></vt:variant>\
         <vt:variant><vt:i4>{}</vt:i4></vt:variant>\
         </vt:vector></HeadingPairs>",
        sheets.len()
    ));
    content.push_str(&format!(
        "\n    <TitlesOfParts><vt:vector size=\"{}\" baseType=\"lpstr\">",
        sheets.len()
    ));
    for sheet in sheets {
        content.push_str(&format!("<vt:lpstr>{}</vt:lpstr>", escape_xml(sheet.name())));
    }
    content.push_str("</vt:vector></TitlesOfParts>");
    if let Some(company) = &workbook.properties().company {
        content.push_str(&format!("\n    <Company>{}</Company>", escape_xml(company)));
    }
    content.push_str("\n</Properties>");
    content
}
