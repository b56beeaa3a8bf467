//! Cell styling types
//!
//! This module contains the workbook-wide [`StyleTable`] and its entry types:
//! - [`NumberFormat`] - Custom number format codes
//! - [`FontSpec`] - Font settings
//! - [`FillSpec`] - Background fill
//! - [`BorderSpec`] - Cell borders
//! - [`CellFormat`] - A combination of the above, referenced by cells

mod border;
mod cell_format;
mod color;
mod fill;
mod font;
mod number_format;

pub use border::{BorderEdge, BorderLineStyle, BorderSpec};
pub use cell_format::{
    Alignment, CellFormat, CellFormatFlags, HorizontalAlignment, VerticalAlignment,
};
pub use color::Color;
pub use fill::{FillSpec, PatternType};
pub use font::{FontScheme, FontSpec};
pub use number_format::{builtin, is_builtin, NumberFormat};

use crate::error::{Error, Result};
use crate::FIRST_CUSTOM_NUM_FMT_ID;

/// Workbook-wide style table
///
/// Four append-only component tables (number formats, fonts, fills, borders)
/// plus the cell format table whose indices cells hold. Entries are never
/// modified or removed once added, so indices handed out stay valid.
///
/// The table is seeded with the entries every package needs:
/// - font 0: the default font
/// - fill 0: none, fill 1: gray125 (both reserved by spreadsheet applications)
/// - border 0: no borders
/// - cell format 0: the all-default style used by unstyled cells
///
/// Entries are not deduplicated; adding the same font twice yields two ids.
#[derive(Debug, Clone)]
pub struct StyleTable {
    number_formats: Vec<NumberFormat>,
    fonts: Vec<FontSpec>,
    fills: Vec<FillSpec>,
    borders: Vec<BorderSpec>,
    cell_formats: Vec<CellFormat>,
}

impl StyleTable {
    /// Create a style table with the default font (Calibri 11)
    pub fn new() -> Self {
        Self::with_default_font(FontSpec::default())
    }

    /// Create a style table whose font 0 is `font`
    ///
    /// Font 0 is the workbook's body font; unstyled cells render with it.
    pub fn with_default_font(font: FontSpec) -> Self {
        Self {
            number_formats: Vec::new(),
            fonts: vec![font],
            fills: vec![FillSpec::none(), FillSpec::pattern(PatternType::Gray125)],
            borders: vec![BorderSpec::none()],
            cell_formats: vec![CellFormat::default()],
        }
    }

    /// Register a custom number format code, returning its id (164, 165, ...)
    pub fn add_number_format<S: Into<String>>(&mut self, code: S) -> u32 {
        let id = FIRST_CUSTOM_NUM_FMT_ID + self.number_formats.len() as u32;
        self.number_formats.push(NumberFormat {
            id,
            code: code.into(),
        });
        id
    }

    /// Append a font, returning its id
    pub fn add_font(&mut self, font: FontSpec) -> u32 {
        self.fonts.push(font);
        (self.fonts.len() - 1) as u32
    }

    /// Append a fill, returning its id
    pub fn add_fill(&mut self, fill: FillSpec) -> u32 {
        self.fills.push(fill);
        (self.fills.len() - 1) as u32
    }

    /// Append a border, returning its id
    pub fn add_border(&mut self, border: BorderSpec) -> u32 {
        self.borders.push(border);
        (self.borders.len() - 1) as u32
    }

    /// Append a cell format, returning its style index
    ///
    /// Fails if any component id does not exist yet; components must be
    /// added before the cell formats that use them.
    pub fn add_cell_format(
        &mut self,
        num_fmt_id: u32,
        font_id: u32,
        fill_id: u32,
        border_id: u32,
        flags: CellFormatFlags,
    ) -> Result<u32> {
        if !is_builtin(num_fmt_id) && self.number_format(num_fmt_id).is_none() {
            return Err(Error::UnknownStyleComponent {
                kind: "number format",
                id: num_fmt_id,
            });
        }
        check_component("font", font_id, self.fonts.len())?;
        check_component("fill", fill_id, self.fills.len())?;
        check_component("border", border_id, self.borders.len())?;

        self.cell_formats.push(CellFormat {
            num_fmt_id,
            font_id,
            fill_id,
            border_id,
            flags,
        });
        Ok((self.cell_formats.len() - 1) as u32)
    }

    /// Look up a custom number format by id
    pub fn number_format(&self, id: u32) -> Option<&NumberFormat> {
        id.checked_sub(FIRST_CUSTOM_NUM_FMT_ID)
            .and_then(|i| self.number_formats.get(i as usize))
    }

    /// Custom number formats in id order
    pub fn number_formats(&self) -> &[NumberFormat] {
        &self.number_formats
    }

    /// Font table
    pub fn fonts(&self) -> &[FontSpec] {
        &self.fonts
    }

    /// Fill table
    pub fn fills(&self) -> &[FillSpec] {
        &self.fills
    }

    /// Border table
    pub fn borders(&self) -> &[BorderSpec] {
        &self.borders
    }

    /// Cell format table
    pub fn cell_formats(&self) -> &[CellFormat] {
        &self.cell_formats
    }

    /// Get a cell format by style index
    pub fn cell_format(&self, index: u32) -> Option<&CellFormat> {
        self.cell_formats.get(index as usize)
    }

    /// Check that a style index refers to an existing cell format
    pub fn check_style_index(&self, index: u32) -> Result<()> {
        if (index as usize) < self.cell_formats.len() {
            Ok(())
        } else {
            Err(Error::InvalidStyleIndex(index))
        }
    }
}

fn check_component(kind: &'static str, id: u32, len: usize) -> Result<()> {
    if (id as usize) < len {
        Ok(())
    } else {
        Err(Error::UnknownStyleComponent { kind, id })
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}
