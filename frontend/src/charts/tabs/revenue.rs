//! Revenue demo tab. The figures are hard-coded showcase data, not server
//! payload, so these builders never return `Ok(None)`.

use crate::charts::palette::color_at;
use crate::charts::spec::{Axis, ChartKind, ChartSpec, Point, Series};
use crate::data::DashboardData;

const QUARTERS: &[(&str, f64)] = &[
    ("Q1 2024", 4.2),
    ("Q2 2024", 4.8),
    ("Q3 2024", 5.6),
    ("Q4 2024", 7.1),
    ("Q1 2025", 6.3),
    ("Q2 2025", 6.9),
];

const SEGMENTS: &[(&str, f64)] = &[
    ("Premium sales", 38.0),
    ("In-game purchases", 27.0),
    ("Subscriptions", 19.0),
    ("DLC & expansions", 11.0),
    ("Licensing", 5.0),
];

pub fn quarterly(_data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    let points = QUARTERS
        .iter()
        .map(|(quarter, revenue)| {
            Point::labeled(quarter, *revenue)
                .with_tooltip(format!("{}: ${}M", quarter, revenue))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Line, "Quarterly revenue")
            .with_axes(Axis::new("Quarter"), Axis::new("Revenue ($M)"))
            .with_series(Series::new("Revenue", color_at(0), points)),
    ))
}

pub fn segments(_data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    let labels: Vec<String> = SEGMENTS.iter().map(|(name, _)| name.to_string()).collect();
    let points = SEGMENTS
        .iter()
        .enumerate()
        .map(|(i, (name, share))| {
            Point::labeled(name, *share)
                .with_color(color_at(i))
                .with_tooltip(format!("{}: {}%", name, share))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Doughnut, "Revenue by segment")
            .with_labels(labels)
            .with_axes(Axis::new("Segment"), Axis::new("Share (%)"))
            .with_series(Series::new("Share", color_at(0), points)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_revenue_builders_always_produce_specs() {
        let data = DashboardData::default();
        assert!(quarterly(&data).unwrap().is_some());
        assert!(segments(&data).unwrap().is_some());
    }

    #[test]
    fn test_segment_shares_cover_the_whole() {
        let spec = segments(&DashboardData::default()).unwrap().expect("spec");
        let total: f64 = spec.series[0].points.iter().map(|p| p.y).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_quarterly_in_chronological_order() {
        let spec = quarterly(&DashboardData::default()).unwrap().expect("spec");
        assert_eq!(spec.series[0].points[0].label, "Q1 2024");
        assert_eq!(spec.series[0].points.len(), 6);
    }
}
