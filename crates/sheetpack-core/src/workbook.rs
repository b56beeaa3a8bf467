//! Workbook type - owns the sheets and the style table

use ahash::AHashSet;

use crate::error::{Error, Result};
use crate::properties::DocumentProperties;
use crate::sheet::{Sheet, SheetBuilder};
use crate::style::StyleTable;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (spreadsheet document)
///
/// Sheets keep their insertion order, which is also their display order.
/// Build the style table first so cells can reference its indices.
///
/// # Example
///
/// ```rust
/// use sheetpack_core::{CellFormatFlags, FontSpec, SheetBuilder, Workbook};
///
/// let mut workbook = Workbook::new();
/// let bold = workbook.styles_mut().add_font(FontSpec::new().with_bold(true));
/// let header = workbook
///     .styles_mut()
///     .add_cell_format(0, bold, 0, 0, CellFormatFlags::new().font())?;
///
/// let mut sheet = SheetBuilder::new();
/// sheet.append_row(1)?.append_cell("A", "Project", header)?;
/// let id = workbook.add_sheet(sheet, "Report")?;
///
/// assert_eq!(id, 1);
/// assert!(workbook.sheet_by_name("report").is_some());
/// # Ok::<(), sheetpack_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    styles: StyleTable,
    properties: DocumentProperties,
}

impl Workbook {
    /// Create an empty workbook with a default style table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty workbook with the given style table
    pub fn with_styles(styles: StyleTable) -> Self {
        Self {
            styles,
            ..Self::default()
        }
    }

    /// Finish a sheet and append it, returning its id (1, 2, ...)
    ///
    /// Fails if the name is invalid or already used (case-insensitive), or
    /// if any cell or column references a style index the table lacks.
    pub fn add_sheet<S: Into<String>>(&mut self, builder: SheetBuilder, name: S) -> Result<u32> {
        let name = name.into();
        self.validate_sheet_name(&name)?;

        let id = self.sheets.len() as u32 + 1;
        let sheet = builder.build(id, name);
        self.check_sheet_styles(&sheet)?;

        self.sheets.push(sheet);
        Ok(id)
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Sheets in display order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Get a sheet by name (case-insensitive)
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        let name = name.to_lowercase();
        self.sheets.iter().find(|s| s.name().to_lowercase() == name)
    }

    /// Get a sheet by id
    pub fn sheet_by_id(&self, id: u32) -> Option<&Sheet> {
        id.checked_sub(1).and_then(|i| self.sheets.get(i as usize))
    }

    /// Shared style table
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Mutable style table (entries can only be appended)
    pub fn styles_mut(&mut self) -> &mut StyleTable {
        &mut self.styles
    }

    /// Document properties
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Mutable document properties
    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Replace the document properties
    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = properties;
    }

    /// Check every invariant serialization relies on
    ///
    /// The builder calls already enforce these; this re-checks the whole
    /// tree before a package is written.
    pub fn validate(&self) -> Result<()> {
        if self.sheets.is_empty() {
            return Err(Error::EmptyWorkbook);
        }

        let mut seen = AHashSet::with_capacity(self.sheets.len());
        for sheet in &self.sheets {
            if !seen.insert(sheet.name().to_lowercase()) {
                return Err(Error::DuplicateSheetName(sheet.name().to_string()));
            }
            self.check_sheet_styles(sheet)?;

            let merges = sheet.merge_cells();
            for (i, range) in merges.iter().enumerate() {
                if let Some(existing) = merges[..i].iter().find(|m| m.overlaps(range)) {
                    return Err(Error::MergeOverlap {
                        range: range.to_a1_string(),
                        existing: existing.to_a1_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_sheet_styles(&self, sheet: &Sheet) -> Result<()> {
        for cell in sheet.cells() {
            self.styles.check_style_index(cell.style_index)?;
        }
        for column in sheet.columns() {
            self.styles.check_style_index(column.style_index)?;
        }
        Ok(())
    }

    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }
        if name.starts_with('\'') || name.ends_with('\'') {
            return Err(Error::InvalidSheetName(
                "Sheet name cannot begin or end with an apostrophe".into(),
            ));
        }
        if name.eq_ignore_ascii_case("History") {
            return Err(Error::InvalidSheetName("'History' is a reserved sheet name".into()));
        }

        if self.sheet_by_name(name).is_some() {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}
