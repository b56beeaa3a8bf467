//! Package inspection and structural validation
//!
//! [`PackageInspector`] re-opens a finished package to read its parts back
//! and to check the structure spreadsheet applications rely on. It is a
//! collaborator of the writer, not part of it: nothing here is needed to
//! produce a package.

use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use log::{Level, Log};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use sheetpack_core::CellAddress;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{XlsxError, XlsxResult};
use crate::logging::emit;
use crate::package::{ContentTypes, CONTENT_TYPES_PART};
use crate::workbook::{ROOT_RELS_PART, STYLES_PART, WORKBOOK_PART, WORKBOOK_RELS_PART};
use crate::xml::{decode_encoded_chars, is_forbidden_char, rel_type};

/// Parts every spreadsheet package needs
const REQUIRED_PARTS: &[&str] = &[
    CONTENT_TYPES_PART,
    ROOT_RELS_PART,
    WORKBOOK_PART,
    WORKBOOK_RELS_PART,
    STYLES_PART,
];

/// Allowed worksheet children, in schema order
const WORKSHEET_SEQUENCE: &[&str] = &[
    "sheetPr",
    "dimension",
    "sheetViews",
    "sheetFormatPr",
    "cols",
    "sheetData",
    "sheetCalcPr",
    "sheetProtection",
    "protectedRanges",
    "scenarios",
    "autoFilter",
    "sortState",
    "dataConsolidate",
    "customSheetViews",
    "mergeCells",
    "phoneticPr",
    "conditionalFormatting",
    "dataValidations",
    "hyperlinks",
    "printOptions",
    "pageMargins",
    "pageSetup",
    "headerFooter",
    "rowBreaks",
    "colBreaks",
    "customProperties",
    "cellWatches",
    "ignoredErrors",
    "smartTags",
    "drawing",
    "legacyDrawing",
    "legacyDrawingHF",
    "drawingHF",
    "picture",
    "oleObjects",
    "controls",
    "webPublishItems",
    "tableParts",
    "extLst",
];

/// Category of a [`ValidationIssue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// The package itself could not be read
    Package,
    /// A required part is absent
    MissingPart,
    /// A part has no content type
    ContentType,
    /// A relationship points nowhere
    Relationship,
    /// Elements violate the schema's content model
    Schema,
    /// Values contradict each other (e.g., a cell outside its row)
    Semantic,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssueKind::Package => "Package",
            IssueKind::MissingPart => "MissingPart",
            IssueKind::ContentType => "ContentType",
            IssueKind::Relationship => "Relationship",
            IssueKind::Schema => "Schema",
            IssueKind::Semantic => "Semantic",
        };
        f.write_str(name)
    }
}

/// One problem found in a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Human-readable description
    pub description: String,
    /// Issue category
    pub kind: IssueKind,
    /// Offending XML element, when the issue is tied to one
    pub node: Option<String>,
    /// Path to the offending element within its part
    pub path: Option<String>,
    /// Part URI (e.g., "/xl/worksheets/sheet1.xml")
    pub part: String,
}

impl ValidationIssue {
    fn new<D: Into<String>>(kind: IssueKind, description: D, part: &str) -> Self {
        Self {
            description: description.into(),
            kind,
            node: None,
            path: None,
            part: format!("/{}", part.trim_start_matches('/')),
        }
    }

    fn at<N: Into<String>, P: Into<String>>(mut self, node: N, path: P) -> Self {
        self.node = Some(node.into());
        self.path = Some(path.into());
        self
    }
}

/// A cell read back from a worksheet part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedCell {
    /// `r` attribute (e.g., "A1")
    pub reference: String,
    /// `r` attribute of the enclosing row
    pub row: Option<u32>,
    /// `t` attribute (`None` for numbers and dates)
    pub cell_type: Option<String>,
    /// `s` attribute
    pub style: Option<u32>,
    /// Text of `<v>` or of the inline string, with `_xHHHH_` escapes decoded
    pub value: Option<String>,
}

#[derive(Debug, Default)]
struct WorksheetScan {
    rows: Vec<u32>,
    cells: Vec<InspectedCell>,
}

#[derive(Debug)]
struct RelationshipEntry {
    id: String,
    rel_type: String,
    target: String,
    external: bool,
}

/// Read-only view of a finished package
pub struct PackageInspector<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl PackageInspector<File> {
    /// Open a package file
    pub fn open<P: AsRef<Path>>(path: P) -> XlsxResult<Self> {
        Self::new(File::open(path)?)
    }
}

impl PackageInspector<Cursor<Vec<u8>>> {
    /// Inspect an in-memory package
    pub fn from_bytes(bytes: Vec<u8>) -> XlsxResult<Self> {
        Self::new(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> PackageInspector<R> {
    /// Inspect a package read from `reader`
    pub fn new(reader: R) -> XlsxResult<Self> {
        Ok(Self {
            archive: ZipArchive::new(reader)?,
        })
    }

    /// Names of all parts in archive order
    pub fn part_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    /// Check if a part exists
    pub fn has_part(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Read a part as UTF-8 text
    pub fn read_part(&mut self, name: &str) -> XlsxResult<String> {
        let mut file = self.archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => XlsxError::MissingPart(name.to_string()),
            other => XlsxError::Zip(other),
        })?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(content)
    }

    /// Local names of the root element's direct children, in document order
    pub fn child_elements(&mut self, part: &str) -> XlsxResult<Vec<String>> {
        let xml = self.read_part(part)?;
        root_children(&xml)
    }

    /// Cells of a worksheet part in document order
    pub fn worksheet_cells(&mut self, part: &str) -> XlsxResult<Vec<InspectedCell>> {
        let xml = self.read_part(part)?;
        Ok(scan_worksheet(&xml)?.cells)
    }

    /// Worksheet parts referenced by the workbook, in relationship order
    pub fn worksheet_parts(&mut self) -> XlsxResult<Vec<String>> {
        let xml = self.read_part(WORKBOOK_RELS_PART)?;
        Ok(parse_relationships(&xml)?
            .into_iter()
            .filter(|r| !r.external && r.rel_type == rel_type::WORKSHEET)
            .map(|r| resolve_target("xl", &r.target))
            .collect())
    }

    /// Run every structural check and return the issues found
    ///
    /// Never fails: a package that cannot be read yields a
    /// [`IssueKind::Package`] issue instead.
    pub fn validate(&mut self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if let Err(err) = self.collect_issues(&mut issues) {
            issues.push(ValidationIssue::new(
                IssueKind::Package,
                format!("package could not be inspected: {}", err),
                "",
            ));
        }
        issues
    }

    /// Validate and log every issue through `logger`, returning the issue count
    pub fn validate_and_report(&mut self, logger: &dyn Log) -> usize {
        emit(logger, Level::Debug, format_args!("Validating document..."));
        let issues = self.validate();
        report_issues(&issues, logger)
    }

    fn collect_issues(&mut self, issues: &mut Vec<ValidationIssue>) -> XlsxResult<()> {
        let names = self.part_names();

        for required in REQUIRED_PARTS {
            if !self.has_part(required) {
                issues.push(ValidationIssue::new(
                    IssueKind::MissingPart,
                    format!("required part {} is missing", required),
                    required,
                ));
            }
        }

        if self.has_part(CONTENT_TYPES_PART) {
            let content_types = parse_content_types(&self.read_part(CONTENT_TYPES_PART)?)?;
            for name in names.iter().filter(|n| !n.ends_with('/')) {
                if name != CONTENT_TYPES_PART && content_types.content_type_of(name).is_none() {
                    issues.push(ValidationIssue::new(
                        IssueKind::ContentType,
                        format!("part {} has no content type", name),
                        name,
                    ));
                }
            }
        }

        for name in names.iter().filter(|n| n.ends_with(".xml") || n.ends_with(".rels")) {
            let xml = self.read_part(name)?;
            if let Some(c) = xml.chars().find(|c| is_forbidden_char(*c)) {
                issues.push(ValidationIssue::new(
                    IssueKind::Schema,
                    format!("part contains U+{:04X}, which XML does not allow", c as u32),
                    name,
                ));
            }
        }

        if self.has_part(ROOT_RELS_PART) {
            let rels = parse_relationships(&self.read_part(ROOT_RELS_PART)?)?;
            if !rels.iter().any(|r| r.rel_type == rel_type::OFFICE_DOCUMENT) {
                issues.push(ValidationIssue::new(
                    IssueKind::Relationship,
                    "package has no officeDocument relationship",
                    ROOT_RELS_PART,
                ));
            }
            self.check_targets("", &rels, ROOT_RELS_PART, issues);
        }

        let mut worksheet_parts = Vec::new();
        if self.has_part(WORKBOOK_RELS_PART) {
            let rels = parse_relationships(&self.read_part(WORKBOOK_RELS_PART)?)?;
            self.check_targets("xl", &rels, WORKBOOK_RELS_PART, issues);

            if self.has_part(WORKBOOK_PART) {
                for (name, rid) in parse_workbook_sheets(&self.read_part(WORKBOOK_PART)?)? {
                    if !rels.iter().any(|r| r.id == rid) {
                        issues.push(
                            ValidationIssue::new(
                                IssueKind::Relationship,
                                format!("sheet '{}' references unknown relationship {}", name, rid),
                                WORKBOOK_PART,
                            )
                            .at("sheet", format!("/workbook/sheets/sheet[@name='{}']", name)),
                        );
                    }
                }
            }

            worksheet_parts = rels
                .iter()
                .filter(|r| !r.external && r.rel_type == rel_type::WORKSHEET)
                .map(|r| resolve_target("xl", &r.target))
                .filter(|part| self.has_part(part))
                .collect();
        }

        let xf_count = if self.has_part(STYLES_PART) {
            Some(cell_xfs_count(&self.read_part(STYLES_PART)?)?)
        } else {
            None
        };

        for part in &worksheet_parts {
            let xml = self.read_part(part)?;
            check_worksheet_order(&root_children(&xml)?, part, issues);
            check_worksheet_cells(&scan_worksheet(&xml)?, xf_count, part, issues);
        }

        Ok(())
    }

    fn check_targets(
        &self,
        base: &str,
        rels: &[RelationshipEntry],
        part: &str,
        issues: &mut Vec<ValidationIssue>,
    ) {
        for rel in rels.iter().filter(|r| !r.external) {
            let target = resolve_target(base, &rel.target);
            if !self.has_part(&target) {
                issues.push(
                    ValidationIssue::new(
                        IssueKind::Relationship,
                        format!("relationship {} targets missing part {}", rel.id, target),
                        part,
                    )
                    .at(
                        "Relationship",
                        format!("/Relationships/Relationship[@Id='{}']", rel.id),
                    ),
                );
            }
        }
    }
}

/// Open a package file, validate it and log the outcome through `logger`
///
/// Returns the number of issues. A package that cannot be opened counts as
/// one issue.
pub fn validate_file<P: AsRef<Path>>(path: P, logger: &dyn Log) -> usize {
    let path = path.as_ref();
    match PackageInspector::open(path) {
        Ok(mut inspector) => inspector.validate_and_report(logger),
        Err(err) => {
            emit(
                logger,
                Level::Error,
                format_args!("Error validating document {}: {}", path.display(), err),
            );
            1
        }
    }
}

fn report_issues(issues: &[ValidationIssue], logger: &dyn Log) -> usize {
    for (i, issue) in issues.iter().enumerate() {
        emit(logger, Level::Error, format_args!("Error {}", i + 1));
        emit(logger, Level::Error, format_args!("Description: {}", issue.description));
        emit(logger, Level::Error, format_args!("ErrorType: {}", issue.kind));
        emit(
            logger,
            Level::Error,
            format_args!("Node: {}", issue.node.as_deref().unwrap_or("-")),
        );
        emit(
            logger,
            Level::Error,
            format_args!("Path: {}", issue.path.as_deref().unwrap_or("-")),
        );
        emit(logger, Level::Error, format_args!("Part: {}", issue.part));
        emit(logger, Level::Error, format_args!("-------------------------------------------"));
    }
    if !issues.is_empty() {
        emit(logger, Level::Error, format_args!("Total issue count={}", issues.len()));
    }
    issues.len()
}

fn check_worksheet_order(children: &[String], part: &str, issues: &mut Vec<ValidationIssue>) {
    let mut last: Option<(usize, &str)> = None;
    for child in children {
        let path = format!("/worksheet/{}", child);
        match WORKSHEET_SEQUENCE.iter().position(|s| *s == child.as_str()) {
            None => issues.push(
                ValidationIssue::new(
                    IssueKind::Schema,
                    format!("unexpected element <{}> in worksheet", child),
                    part,
                )
                .at(child.as_str(), path),
            ),
            Some(pos) => match last {
                Some((prev, prev_name)) if pos < prev => issues.push(
                    ValidationIssue::new(
                        IssueKind::Schema,
                        format!("element <{}> must come before <{}>", child, prev_name),
                        part,
                    )
                    .at(child.as_str(), path),
                ),
                _ => last = Some((pos, child.as_str())),
            },
        }
    }

    if !children.iter().any(|c| c == "sheetData") {
        issues.push(
            ValidationIssue::new(IssueKind::Schema, "worksheet has no <sheetData>", part)
                .at("worksheet", "/worksheet"),
        );
    }
}

fn check_worksheet_cells(
    scan: &WorksheetScan,
    xf_count: Option<usize>,
    part: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    for pair in scan.rows.windows(2) {
        if pair[1] <= pair[0] {
            issues.push(
                ValidationIssue::new(
                    IssueKind::Semantic,
                    format!("row {} follows row {}", pair[1], pair[0]),
                    part,
                )
                .at("row", format!("/worksheet/sheetData/row[@r='{}']", pair[1])),
            );
        }
    }

    for cell in &scan.cells {
        let path = format!(
            "/worksheet/sheetData/row[@r='{}']/c[@r='{}']",
            cell.row.map_or_else(|| "?".to_string(), |r| r.to_string()),
            cell.reference
        );
        match CellAddress::parse(&cell.reference) {
            Err(_) => issues.push(
                ValidationIssue::new(
                    IssueKind::Semantic,
                    format!("invalid cell reference '{}'", cell.reference),
                    part,
                )
                .at("c", path.clone()),
            ),
            Ok(addr) => {
                if let Some(row) = cell.row {
                    if addr.row != row {
                        issues.push(
                            ValidationIssue::new(
                                IssueKind::Semantic,
                                format!("cell {} is not in row {}", cell.reference, row),
                                part,
                            )
                            .at("c", path.clone()),
                        );
                    }
                }
            }
        }

        if let (Some(style), Some(count)) = (cell.style, xf_count) {
            if style as usize >= count {
                issues.push(
                    ValidationIssue::new(
                        IssueKind::Semantic,
                        format!(
                            "cell {} uses style {} but only {} cell formats exist",
                            cell.reference, style, count
                        ),
                        part,
                    )
                    .at("c", path),
                );
            }
        }
    }
}

/// Resolve a relationship target against the source part's folder
fn resolve_target(base: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn attribute(e: &BytesStart<'_>, name: &[u8]) -> XlsxResult<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn root_children(xml: &str) -> XlsxResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut children = Vec::new();
    let mut depth = 0usize;
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                if depth == 2 {
                    children.push(local_name(&e));
                }
            }
            Event::Empty(e) => {
                if depth == 1 {
                    children.push(local_name(&e));
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(children)
}

fn scan_worksheet(xml: &str) -> XlsxResult<WorksheetScan> {
    let mut reader = Reader::from_str(xml);

    let mut scan = WorksheetScan::default();
    let mut current_row: Option<u32> = None;
    let mut current_cell: Option<InspectedCell> = None;
    let mut in_value = false;

    let start_cell = |e: &BytesStart<'_>, row: Option<u32>| -> XlsxResult<InspectedCell> {
        Ok(InspectedCell {
            reference: attribute(e, b"r")?.unwrap_or_default(),
            row,
            cell_type: attribute(e, b"t")?,
            style: attribute(e, b"s")?.and_then(|s| s.parse().ok()),
            value: None,
        })
    };

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"row" => {
                    current_row = attribute(&e, b"r")?.and_then(|r| r.parse().ok());
                    if let Some(r) = current_row {
                        scan.rows.push(r);
                    }
                }
                b"c" => current_cell = Some(start_cell(&e, current_row)?),
                b"v" | b"t" if current_cell.is_some() => in_value = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"row" => {
                    if let Some(r) = attribute(&e, b"r")?.and_then(|r| r.parse().ok()) {
                        scan.rows.push(r);
                    }
                }
                b"c" => scan.cells.push(start_cell(&e, current_row)?),
                _ => {}
            },
            Event::Text(t) if in_value => {
                if let Some(cell) = current_cell.as_mut() {
                    cell.value
                        .get_or_insert_with(String::new)
                        .push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"v" | b"t" => in_value = false,
                b"c" => {
                    if let Some(mut cell) = current_cell.take() {
                        cell.value = cell.value.map(|v| decode_encoded_chars(&v));
                        scan.cells.push(cell);
                    }
                }
                b"row" => current_row = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(scan)
}

fn parse_relationships(xml: &str) -> XlsxResult<Vec<RelationshipEntry>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut rels = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                rels.push(RelationshipEntry {
                    id: attribute(&e, b"Id")?.unwrap_or_default(),
                    rel_type: attribute(&e, b"Type")?.unwrap_or_default(),
                    target: attribute(&e, b"Target")?.unwrap_or_default(),
                    external: attribute(&e, b"TargetMode")?.as_deref() == Some("External"),
                });
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(rels)
}

fn parse_content_types(xml: &str) -> XlsxResult<ContentTypes> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut defaults = Vec::new();
    let mut overrides = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                let content_type = attribute(&e, b"ContentType")?.unwrap_or_default();
                match e.local_name().as_ref() {
                    b"Default" => {
                        if let Some(ext) = attribute(&e, b"Extension")? {
                            defaults.push((ext, content_type));
                        }
                    }
                    b"Override" => {
                        if let Some(part) = attribute(&e, b"PartName")? {
                            overrides.push((part, content_type));
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(ContentTypes::from_entries(defaults, overrides))
}

/// `(name, r:id)` of every sheet in `xl/workbook.xml`
fn parse_workbook_sheets(xml: &str) -> XlsxResult<Vec<(String, String)>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut sheets = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sheet" => {
                let name = attribute(&e, b"name")?.unwrap_or_default();
                let rid = attribute(&e, b"id")?.unwrap_or_default();
                sheets.push((name, rid));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(sheets)
}

/// Number of `<xf>` entries inside `<cellXfs>`
fn cell_xfs_count(xml: &str) -> XlsxResult<usize> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut in_cell_xfs = false;
    let mut count = 0;
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"cellXfs" => in_cell_xfs = true,
                b"xf" if in_cell_xfs => count += 1,
                _ => {}
            },
            Event::Empty(e) if in_cell_xfs && e.local_name().as_ref() == b"xf" => count += 1,
            Event::End(e) if e.local_name().as_ref() == b"cellXfs" => in_cell_xfs = false,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryLogger;
    use crate::package::{Compression, ZipPackageWriter};
    use crate::xml::content_type;

    const WORKBOOK: &str = r#"<workbook xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="S" sheetId="1" r:id="rId1"/></sheets></workbook>"#;
    const WORKBOOK_RELS: &str = r#"<Relationships><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;
    const ROOT_RELS: &str = r#"<Relationships><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;
    const STYLES: &str = r#"<styleSheet><cellXfs count="2"><xf numFmtId="0"/><xf numFmtId="0"><alignment/></xf></cellXfs></styleSheet>"#;

    fn package(sheet: &str) -> Vec<u8> {
        let mut package = ZipPackageWriter::new(Cursor::new(Vec::new()), Compression::Stored);
        let parts = [
            (ROOT_RELS_PART, content_type::RELATIONSHIPS, ROOT_RELS),
            (WORKBOOK_PART, content_type::WORKBOOK, WORKBOOK),
            (WORKBOOK_RELS_PART, content_type::RELATIONSHIPS, WORKBOOK_RELS),
            (STYLES_PART, content_type::STYLES, STYLES),
            ("xl/worksheets/sheet1.xml", content_type::WORKSHEET, sheet),
        ];
        for (name, ct, body) in parts {
            package.add_part(name, ct, body.as_bytes().to_vec()).unwrap();
        }
        package.finish().unwrap().into_inner()
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("xl", "worksheets/sheet1.xml"), "xl/worksheets/sheet1.xml");
        assert_eq!(resolve_target("xl", "/xl/styles.xml"), "xl/styles.xml");
        assert_eq!(resolve_target("xl/worksheets", "../styles.xml"), "xl/styles.xml");
        assert_eq!(resolve_target("", "xl/workbook.xml"), "xl/workbook.xml");
    }

    #[test]
    fn test_valid_package_has_no_issues() {
        let sheet = r#"<worksheet><sheetData><row r="1"><c r="A1" s="1"><v>1</v></c></row></sheetData></worksheet>"#;
        let mut inspector = PackageInspector::from_bytes(package(sheet)).unwrap();
        assert_eq!(inspector.validate(), Vec::new());
        assert_eq!(
            inspector.worksheet_parts().unwrap(),
            vec!["xl/worksheets/sheet1.xml".to_string()]
        );
    }

    #[test]
    fn test_detects_order_row_and_style_issues() {
        let sheet = r#"<worksheet><sheetData><row r="2"><c r="A3" s="5" t="inlineStr"><is><t>x</t></is></c></row><row r="1"/></sheetData><cols><col min="1" max="1"/></cols><bogus/></worksheet>"#;
        let mut inspector = PackageInspector::from_bytes(package(sheet)).unwrap();
        let issues = inspector.validate();

        let kinds: Vec<(IssueKind, Option<&str>)> = issues
            .iter()
            .map(|i| (i.kind, i.node.as_deref()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (IssueKind::Schema, Some("cols")),
                (IssueKind::Schema, Some("bogus")),
                (IssueKind::Semantic, Some("row")),
                (IssueKind::Semantic, Some("c")),
                (IssueKind::Semantic, Some("c")),
            ]
        );
        assert!(issues.iter().all(|i| i.part == "/xl/worksheets/sheet1.xml"));
        assert_eq!(
            issues[3].path.as_deref(),
            Some("/worksheet/sheetData/row[@r='2']/c[@r='A3']")
        );
    }

    #[test]
    fn test_worksheet_cells() {
        let sheet = r#"<worksheet><sheetData><row r="1"><c r="A1" t="inlineStr"><is><t>Test &amp; more</t></is></c><c r="B1"><v>2.5</v></c><c r="C1" s="1"/></row></sheetData></worksheet>"#;
        let mut inspector = PackageInspector::from_bytes(package(sheet)).unwrap();
        let cells = inspector.worksheet_cells("xl/worksheets/sheet1.xml").unwrap();

        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].reference, "A1");
        assert_eq!(cells[0].cell_type.as_deref(), Some("inlineStr"));
        assert_eq!(cells[0].value.as_deref(), Some("Test & more"));
        assert_eq!(cells[1].value.as_deref(), Some("2.5"));
        assert_eq!(cells[1].cell_type, None);
        assert_eq!(cells[2].style, Some(1));
        assert_eq!(cells[2].value, None);
    }

    #[test]
    fn test_raw_control_character_reported() {
        let sheet = "<worksheet><sheetData><row r=\"1\"><c r=\"A1\" t=\"inlineStr\"><is><t>a\u{1}b</t></is></c></row></sheetData></worksheet>";
        let mut inspector = PackageInspector::from_bytes(package(sheet)).unwrap();
        let issues = inspector.validate();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Schema);
        assert_eq!(issues[0].part, "/xl/worksheets/sheet1.xml");
        assert!(issues[0].description.contains("U+0001"));
    }

    #[test]
    fn test_missing_parts_reported() {
        let mut package = ZipPackageWriter::new(Cursor::new(Vec::new()), Compression::Stored);
        package
            .add_part(WORKBOOK_PART, content_type::WORKBOOK, WORKBOOK.as_bytes().to_vec())
            .unwrap();
        package.add_part("media/x.bin", "application/octet-stream", Vec::new()).unwrap();
        let bytes = package.finish().unwrap().into_inner();

        let mut inspector = PackageInspector::from_bytes(bytes).unwrap();
        let issues = inspector.validate();
        let missing: Vec<&str> = issues
            .iter()
            .filter(|i| i.kind == IssueKind::MissingPart)
            .map(|i| i.part.as_str())
            .collect();
        assert_eq!(
            missing,
            vec!["/_rels/.rels", "/xl/_rels/workbook.xml.rels", "/xl/styles.xml"]
        );
        assert!(issues.iter().all(|i| i.kind != IssueKind::ContentType));
    }

    #[test]
    fn test_report_logs_every_field() {
        let sheet = r#"<worksheet><bogus/><sheetData/></worksheet>"#;
        let mut inspector = PackageInspector::from_bytes(package(sheet)).unwrap();
        let logger = MemoryLogger::new();

        assert_eq!(inspector.validate_and_report(&logger), 1);
        let messages: Vec<String> = logger
            .messages()
            .into_iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, msg)| msg)
            .collect();
        assert_eq!(messages[0], "Error 1");
        assert_eq!(messages[2], "ErrorType: Schema");
        assert_eq!(messages[3], "Node: bogus");
        assert_eq!(messages[5], "Part: /xl/worksheets/sheet1.xml");
        assert_eq!(messages.last().map(String::as_str), Some("Total issue count=1"));
    }

    #[test]
    fn test_validate_file_counts_unreadable_package() {
        let dir = std::env::temp_dir().join("sheetpack-inspect-missing");
        let logger = MemoryLogger::new();
        assert_eq!(validate_file(dir.join("nope.xlsx"), &logger), 1);
        assert!(logger.messages()[0].1.starts_with("Error validating document"));
    }
}
