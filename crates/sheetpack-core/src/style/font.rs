//! Font style types

use super::Color;

/// Font table entry
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font family name (e.g., "Calibri", "Arial")
    pub name: String,
    /// Font size in points
    pub size: f64,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Font color
    pub color: Color,
    /// Font family classification (2 = swiss/sans-serif)
    pub family: Option<u8>,
    /// Theme font scheme this font belongs to
    pub scheme: Option<FontScheme>,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 11.0,
            bold: false,
            italic: false,
            color: Color::Theme(1),
            family: Some(2),
            scheme: Some(FontScheme::Minor),
        }
    }
}

impl FontSpec {
    /// Create a new default font (Calibri 11)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set font size
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Theme font scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontScheme {
    /// Major (headings) theme font
    Major,
    /// Minor (body) theme font
    Minor,
}

impl FontScheme {
    /// XML attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            FontScheme::Major => "major",
            FontScheme::Minor => "minor",
        }
    }
}
