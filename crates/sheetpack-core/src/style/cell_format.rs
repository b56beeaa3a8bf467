//! Cell format (`xf`) entries

/// A cell format: one entry of the `cellXfs` table
///
/// A cell's style index is an index into this table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellFormat {
    /// Number format id (built-in 0-163 or custom >= 164)
    pub num_fmt_id: u32,
    /// Index into the font table
    pub font_id: u32,
    /// Index into the fill table
    pub fill_id: u32,
    /// Index into the border table
    pub border_id: u32,
    /// Apply flags and alignment
    pub flags: CellFormatFlags,
}

/// Apply flags and alignment carried by a [`CellFormat`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellFormatFlags {
    /// Write `applyNumberFormat="1"`
    pub apply_number_format: bool,
    /// Write `applyFont="1"`
    pub apply_font: bool,
    /// Write `applyFill="1"`
    pub apply_fill: bool,
    /// Write `applyBorder="1"`
    pub apply_border: bool,
    /// Alignment; writes `applyAlignment="1"` when set
    pub alignment: Option<Alignment>,
}

impl CellFormatFlags {
    /// Flags with nothing applied
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number format apply flag
    pub fn number_format(mut self) -> Self {
        self.apply_number_format = true;
        self
    }

    /// Set the font apply flag
    pub fn font(mut self) -> Self {
        self.apply_font = true;
        self
    }

    /// Set the fill apply flag
    pub fn fill(mut self) -> Self {
        self.apply_fill = true;
        self
    }

    /// Set the border apply flag
    pub fn border(mut self) -> Self {
        self.apply_border = true;
        self
    }

    /// Attach an alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Cell alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    /// Horizontal alignment
    pub horizontal: Option<HorizontalAlignment>,
    /// Vertical alignment
    pub vertical: Option<VerticalAlignment>,
    /// Wrap text
    pub wrap_text: bool,
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Left
    Left,
    /// Center
    Center,
    /// Right
    Right,
    /// Center across selection
    CenterContinuous,
}

impl HorizontalAlignment {
    /// XML attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::CenterContinuous => "centerContinuous",
        }
    }
}

/// Vertical alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Top
    Top,
    /// Center
    Center,
    /// Bottom
    Bottom,
}

impl VerticalAlignment {
    /// XML attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
        }
    }
}
