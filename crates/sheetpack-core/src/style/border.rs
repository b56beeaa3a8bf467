//! Border style types

use super::Color;

/// Border table entry
///
/// `None` on a side means no line on that side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BorderSpec {
    /// Left edge
    pub left: Option<BorderEdge>,
    /// Right edge
    pub right: Option<BorderEdge>,
    /// Top edge
    pub top: Option<BorderEdge>,
    /// Bottom edge
    pub bottom: Option<BorderEdge>,
    /// Diagonal line
    pub diagonal: Option<BorderEdge>,
}

impl BorderSpec {
    /// No borders
    pub fn none() -> Self {
        Self::default()
    }

    /// Same line on all four outer edges
    pub fn all(style: BorderLineStyle, color: Color) -> Self {
        let edge = Some(BorderEdge::new(style, color));
        Self {
            left: edge,
            right: edge,
            top: edge,
            bottom: edge,
            diagonal: None,
        }
    }

    /// Set the left edge
    pub fn with_left(mut self, edge: BorderEdge) -> Self {
        self.left = Some(edge);
        self
    }

    /// Set the right edge
    pub fn with_right(mut self, edge: BorderEdge) -> Self {
        self.right = Some(edge);
        self
    }

    /// Set the top edge
    pub fn with_top(mut self, edge: BorderEdge) -> Self {
        self.top = Some(edge);
        self
    }

    /// Set the bottom edge
    pub fn with_bottom(mut self, edge: BorderEdge) -> Self {
        self.bottom = Some(edge);
        self
    }
}

/// A single border side: line style plus optional color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderEdge {
    /// Line style
    pub style: BorderLineStyle,
    /// Line color (`None` leaves the color element out)
    pub color: Option<Color>,
}

impl BorderEdge {
    /// Edge with an explicit color
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self {
            style,
            color: Some(color),
        }
    }

    /// Edge without a color element
    pub fn plain(style: BorderLineStyle) -> Self {
        Self { style, color: None }
    }
}

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineStyle {
    /// No border
    #[default]
    None,
    /// Thin line
    Thin,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
    /// Hair line
    Hair,
    /// Medium dashed
    MediumDashed,
    /// Dash-dot
    DashDot,
    /// Medium dash-dot
    MediumDashDot,
    /// Dash-dot-dot
    DashDotDot,
    /// Medium dash-dot-dot
    MediumDashDotDot,
    /// Slant dash-dot
    SlantDashDot,
}

impl BorderLineStyle {
    /// XML `style` attribute value, `None` for no line
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            BorderLineStyle::None => None,
            BorderLineStyle::Thin => Some("thin"),
            BorderLineStyle::Medium => Some("medium"),
            BorderLineStyle::Thick => Some("thick"),
            BorderLineStyle::Dashed => Some("dashed"),
            BorderLineStyle::Dotted => Some("dotted"),
            BorderLineStyle::Double => Some("double"),
            BorderLineStyle::Hair => Some("hair"),
            BorderLineStyle::MediumDashed => Some("mediumDashed"),
            BorderLineStyle::DashDot => Some("dashDot"),
            BorderLineStyle::MediumDashDot => Some("mediumDashDot"),
            BorderLineStyle::DashDotDot => Some("dashDotDot"),
            BorderLineStyle::MediumDashDotDot => Some("mediumDashDotDot"),
            BorderLineStyle::SlantDashDot => Some("slantDashDot"),
        }
    }
}
