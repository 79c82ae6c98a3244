//! The chart specification handed to the renderer: type, labels, series,
//! styling, axes. Specs are built fresh on every render pass and discarded
//! once the SVG is mounted; a filter change rebuilds everything.

use crate::charts::style::ChartStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
    Radar,
    Scatter,
    Bubble,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    pub log_scale: bool,
    /// Suppressed for the right-hand axis of dual-scale charts so the two
    /// scales do not draw overlapping gridlines.
    pub grid: bool,
}

impl Axis {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            log_scale: false,
            grid: true,
        }
    }

    pub fn log(label: &str) -> Self {
        Self {
            log_scale: true,
            ..Axis::new(label)
        }
    }

    /// Right-hand axis of a dual-scale chart: drawn opposite, no grid.
    pub fn opposite(label: &str) -> Self {
        Self {
            grid: false,
            ..Axis::new(label)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub label: String,
    pub tooltip: String,
    pub color: Option<String>,
}

impl Point {
    pub fn labeled(label: &str, y: f64) -> Self {
        Self {
            x: 0.0,
            y,
            r: 0.0,
            label: label.to_string(),
            tooltip: String::new(),
            color: None,
        }
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            r: 0.0,
            label: String::new(),
            tooltip: String::new(),
            color: None,
        }
    }

    pub fn bubble(x: f64, y: f64, r: f64) -> Self {
        Self { r, ..Point::xy(x, y) }
    }

    pub fn with_tooltip(mut self, tooltip: String) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub points: Vec<Point>,
    /// Plotted against `y_axis_right` when set.
    pub on_right_axis: bool,
}

impl Series {
    pub fn new(name: &str, color: &str, points: Vec<Point>) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            points,
            on_right_axis: false,
        }
    }

    pub fn on_right_axis(mut self) -> Self {
        self.on_right_axis = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Category labels (bar/pie slices) or spoke names (radar).
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub style: ChartStyle,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y_axis_right: Option<Axis>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            labels: Vec::new(),
            series: Vec::new(),
            style: ChartStyle::default(),
            x_axis: Axis::new(""),
            y_axis: Axis::new(""),
            y_axis_right: None,
        }
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_axes(mut self, x: Axis, y: Axis) -> Self {
        self.x_axis = x;
        self.y_axis = y;
        self
    }

    pub fn with_right_axis(mut self, axis: Axis) -> Self {
        self.y_axis_right = Some(axis);
        self
    }
}

/// Rating buckets used for both segment color and tooltip text. The two
/// usages must stay in sync, so this is the only place the thresholds live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    Excellent,
    VeryGood,
    Good,
    Average,
    Poor,
}

impl QualityTier {
    /// Thresholds are inclusive: 8.5 is Excellent, 8.4999 is Very Good.
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 8.5 {
            QualityTier::Excellent
        } else if rating >= 7.5 {
            QualityTier::VeryGood
        } else if rating >= 6.5 {
            QualityTier::Good
        } else if rating >= 5.5 {
            QualityTier::Average
        } else {
            QualityTier::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityTier::Excellent => "Excellent",
            QualityTier::VeryGood => "Very Good",
            QualityTier::Good => "Good",
            QualityTier::Average => "Average",
            QualityTier::Poor => "Poor",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            QualityTier::Excellent => "#10B981",
            QualityTier::VeryGood => "#84CC16",
            QualityTier::Good => "#F59E0B",
            QualityTier::Average => "#F97316",
            QualityTier::Poor => "#EF4444",
        }
    }
}

/// Percentage share of each displayed count against the displayed total
/// (not the full dataset), rounded to one decimal.
pub fn percentage_shares(counts: &[f64]) -> Vec<f64> {
    let total: f64 = counts.iter().sum();
    if total <= 0.0 {
        return vec![0.0; counts.len()];
    }
    counts
        .iter()
        .map(|c| (c / total * 1000.0).round() / 10.0)
        .collect()
}

/// First `n` records after a stable descending sort by `key`. Ties keep the
/// server-provided order. Truncation happens before color assignment, so
/// color index always matches post-truncation position.
pub fn top_n_by<T: Clone, F: Fn(&T) -> f64>(records: &[T], n: usize, key: F) -> Vec<T> {
    let mut sorted: Vec<T> = records.to_vec();
    sorted.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(std::cmp::Ordering::Equal));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_percentage_shares_sum_to_hundred() {
        let shares = percentage_shares(&[50.0, 30.0, 20.0]);
        assert_eq!(shares, vec![50.0, 30.0, 20.0]);
        let total: f64 = shares.iter().sum();
        assert!((total - 100.0).abs() < 0.2);
    }

    #[test]
    fn test_percentage_shares_one_decimal() {
        let shares = percentage_shares(&[1.0, 1.0, 1.0]);
        assert_eq!(shares, vec![33.3, 33.3, 33.3]);
    }

    #[test]
    fn test_percentage_shares_zero_total() {
        assert_eq!(percentage_shares(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_quality_tier_boundaries_inclusive() {
        assert_eq!(QualityTier::from_rating(8.5), QualityTier::Excellent);
        assert_eq!(QualityTier::from_rating(8.4999), QualityTier::VeryGood);
        assert_eq!(QualityTier::from_rating(7.5), QualityTier::VeryGood);
        assert_eq!(QualityTier::from_rating(6.5), QualityTier::Good);
        assert_eq!(QualityTier::from_rating(5.5), QualityTier::Average);
        assert_eq!(QualityTier::from_rating(5.4999), QualityTier::Poor);
    }

    #[test]
    fn test_tier_label_and_color_agree() {
        // Same tier must drive both the color and the tooltip text.
        let tier = QualityTier::from_rating(9.1);
        assert_eq!(tier.label(), "Excellent");
        assert_eq!(tier.color(), "#10B981");
    }

    #[test]
    fn test_top_n_stable_tie_break() {
        let records = vec![("a", 5.0), ("b", 9.0), ("c", 5.0), ("d", 1.0)];
        let top = top_n_by(&records, 3, |r| r.1);
        let names: Vec<_> = top.iter().map(|r| r.0).collect();
        // b first, then the tied a/c in server order.
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_top_n_truncates() {
        let records: Vec<(usize, f64)> = (0..20).map(|i| (i, i as f64)).collect();
        assert_eq!(top_n_by(&records, 10, |r| r.1).len(), 10);
    }

    #[test]
    fn test_dual_axis_spec_suppresses_right_grid() {
        let spec = ChartSpec::new(ChartKind::Bar, "Ratings vs volume")
            .with_axes(Axis::new("Director"), Axis::new("Avg rating"))
            .with_right_axis(Axis::opposite("Games"));
        let right = spec.y_axis_right.expect("right axis");
        assert!(!right.grid);
        assert!(spec.y_axis.grid);
    }
}
