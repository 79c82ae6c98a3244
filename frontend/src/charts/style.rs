//! Shared chart styling defaults consumed by every builder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub axis_color: String,
    pub grid_color: String,
    pub font_family: String,
    pub font_size: u32,
    pub background: String,
    pub show_legend: bool,
    pub animate: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            axis_color: "#6B7280".to_string(),
            grid_color: "#E5E7EB".to_string(),
            font_family: "Inter, system-ui, sans-serif".to_string(),
            font_size: 12,
            background: "#FFFFFF".to_string(),
            show_legend: true,
            animate: true,
            width: 800,
            height: 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_stable() {
        let style = ChartStyle::default();
        assert_eq!(style.grid_color, "#E5E7EB");
        assert_eq!(style.width, 800);
        assert!(style.show_legend);
    }
}
