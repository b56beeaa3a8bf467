//! Fill style types

use super::Color;

/// Fill table entry (pattern fill)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FillSpec {
    /// Pattern kind
    pub pattern: PatternType,
    /// Foreground (pattern) color
    pub foreground: Option<Color>,
    /// Background color
    pub background: Option<Color>,
}

impl FillSpec {
    /// No fill
    pub fn none() -> Self {
        Self::default()
    }

    /// Solid fill with the given color
    ///
    /// The background is set to the automatic color, as Excel itself writes it.
    pub fn solid(color: Color) -> Self {
        Self {
            pattern: PatternType::Solid,
            foreground: Some(color),
            background: Some(Color::Auto),
        }
    }

    /// Pattern fill without explicit colors
    pub fn pattern(pattern: PatternType) -> Self {
        Self {
            pattern,
            foreground: None,
            background: None,
        }
    }
}

/// Pattern fill kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    /// No fill
    #[default]
    None,
    /// Solid fill
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    /// Horizontal stripes
    DarkHorizontal,
    /// Vertical stripes
    DarkVertical,
    /// Diagonal stripes (down)
    DarkDown,
    /// Diagonal stripes (up)
    DarkUp,
    /// Grid
    DarkGrid,
    /// Trellis
    DarkTrellis,
    /// Thin horizontal stripes
    LightHorizontal,
    /// Thin vertical stripes
    LightVertical,
    /// Thin diagonal stripes (down)
    LightDown,
    /// Thin diagonal stripes (up)
    LightUp,
    /// Thin grid
    LightGrid,
    /// Thin trellis
    LightTrellis,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}

impl PatternType {
    /// XML `patternType` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::None => "none",
            PatternType::Solid => "solid",
            PatternType::MediumGray => "mediumGray",
            PatternType::DarkGray => "darkGray",
            PatternType::LightGray => "lightGray",
            PatternType::DarkHorizontal => "darkHorizontal",
            PatternType::DarkVertical => "darkVertical",
            PatternType::DarkDown => "darkDown",
            PatternType::DarkUp => "darkUp",
            PatternType::DarkGrid => "darkGrid",
            PatternType::DarkTrellis => "darkTrellis",
            PatternType::LightHorizontal => "lightHorizontal",
            PatternType::LightVertical => "lightVertical",
            PatternType::LightDown => "lightDown",
            PatternType::LightUp => "lightUp",
            PatternType::LightGrid => "lightGrid",
            PatternType::LightTrellis => "lightTrellis",
            PatternType::Gray125 => "gray125",
            PatternType::Gray0625 => "gray0625",
        }
    }
}
