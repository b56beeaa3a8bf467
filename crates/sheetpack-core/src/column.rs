//! Column width specs

/// Width and style for an inclusive range of columns
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// First column (1-based)
    pub min: u16,
    /// Last column (1-based, inclusive)
    pub max: u16,
    /// Width in characters
    pub width: f64,
    /// Column-level style index
    pub style_index: u32,
    /// Width was set explicitly
    pub custom_width: bool,
}

impl ColumnSpec {
    /// Create a custom-width column range
    pub fn new(min: u16, max: u16, width: f64, style_index: u32) -> Self {
        Self {
            min,
            max,
            width,
            style_index,
            custom_width: true,
        }
    }

    /// Check if this range covers a column
    pub fn covers(&self, col: u16) -> bool {
        col >= self.min && col <= self.max
    }

    fn same_settings(&self, other: &ColumnSpec) -> bool {
        self.width == other.width
            && self.style_index == other.style_index
            && self.custom_width == other.custom_width
    }
}

/// Flatten possibly-overlapping specs into ascending, non-overlapping runs
///
/// Where specs overlap, the one registered last wins for each column.
/// Adjacent columns that end up with identical settings are merged into one run.
pub fn resolve_columns(specs: &[ColumnSpec]) -> Vec<ColumnSpec> {
    if specs.is_empty() {
        return Vec::new();
    }

    // Every column where coverage can change
    let mut bounds: Vec<u32> = specs
        .iter()
        .flat_map(|s| [s.min as u32, s.max as u32 + 1])
        .collect();
    bounds.sort_unstable();
    bounds.dedup();

    let mut resolved: Vec<ColumnSpec> = Vec::new();
    for pair in bounds.windows(2) {
        let (start, end) = (pair[0] as u16, (pair[1] - 1) as u16);
        // Segments never straddle a range boundary, so checking `start` suffices
        let Some(winner) = specs.iter().rev().find(|s| s.covers(start)) else {
            continue;
        };

        match resolved.last_mut() {
            Some(prev) if prev.max as u32 + 1 == start as u32 && prev.same_settings(winner) => {
                prev.max = end;
            }
            _ => resolved.push(ColumnSpec {
                min: start,
                max: end,
                ..winner.clone()
            }),
        }
    }
    resolved
}
