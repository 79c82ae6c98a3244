//! Per-tab chart builders. Each builder takes the shared dashboard state
//! and returns `Ok(None)` when its dataset is absent or empty, which the
//! dispatcher turns into the "No data available" placeholder.

pub mod evolution;
pub mod lifecycle;
pub mod operational;
pub mod revenue;
pub mod studio;
pub mod tactical;

use crate::charts::palette::color_at;
use crate::charts::spec::{percentage_shares, Axis, ChartKind, ChartSpec, Point, Series};
use shared::{CategoryCount, CategoryRating, HexbinPoint, LabelValue, ProfileRecord, StreamPoint};

/// Numeric-aware ordering key for period labels, so year buckets sort
/// numerically while "2023-05" style labels fall back to string order.
pub(crate) fn period_order(a: Option<&LabelValue>, b: Option<&LabelValue>) -> std::cmp::Ordering {
    let text = |v: Option<&LabelValue>| v.map(LabelValue::as_text).unwrap_or_default();
    let (ta, tb) = (text(a), text(b));
    match (ta.parse::<f64>(), tb.parse::<f64>()) {
        (Ok(na), Ok(nb)) => na.partial_cmp(&nb).unwrap_or(std::cmp::Ordering::Equal),
        _ => ta.cmp(&tb),
    }
}

/// Bar/pie points for category counts: colors by displayed position,
/// tooltips carrying the share of the displayed total.
pub(crate) fn count_points(records: &[CategoryCount]) -> Vec<Point> {
    let counts: Vec<f64> = records.iter().map(|r| r.count).collect();
    let shares = percentage_shares(&counts);
    records
        .iter()
        .zip(shares)
        .enumerate()
        .map(|(i, (rec, share))| {
            let label = rec.label.clone().unwrap_or_default();
            Point::labeled(&label, rec.count)
                .with_color(color_at(i))
                .with_tooltip(format!("{}: {} ({:.1}%)", label, rec.count, share))
        })
        .collect()
}

/// Dual-scale bar: average rating on the left axis, sample count on a
/// right-hand axis drawn opposite with its grid suppressed.
pub(crate) fn dual_axis_bar(
    title: &str,
    x_label: &str,
    records: &[CategoryRating],
) -> Option<ChartSpec> {
    if records.is_empty() {
        return None;
    }
    let ratings: Vec<Point> = records
        .iter()
        .map(|r| {
            let label = r.label.clone().unwrap_or_default();
            Point::labeled(&label, r.avg_rating)
                .with_tooltip(format!("{}: {:.1} avg rating", label, r.avg_rating))
        })
        .collect();
    let counts: Vec<Point> = records
        .iter()
        .map(|r| {
            let label = r.label.clone().unwrap_or_default();
            Point::labeled(&label, r.count)
                .with_tooltip(format!("{}: {} games", label, r.count))
        })
        .collect();
    Some(
        ChartSpec::new(ChartKind::Bar, title)
            .with_axes(Axis::new(x_label), Axis::new("Average rating"))
            .with_right_axis(Axis::opposite("Games"))
            .with_series(Series::new("Average rating", color_at(0), ratings))
            .with_series(Series::new("Games", color_at(1), counts).on_right_axis()),
    )
}

/// One line series per stream key, points ordered by period.
pub(crate) fn series_by_key(records: &[StreamPoint]) -> Vec<Series> {
    let mut keys: Vec<String> = Vec::new();
    for rec in records {
        if let Some(series) = &rec.series {
            if !keys.contains(series) {
                keys.push(series.clone());
            }
        }
    }
    keys.iter()
        .enumerate()
        .map(|(i, key)| {
            let mut members: Vec<&StreamPoint> = records
                .iter()
                .filter(|r| r.series.as_deref() == Some(key.as_str()))
                .collect();
            members.sort_by(|a, b| period_order(a.period.as_ref(), b.period.as_ref()));
            let points = members
                .iter()
                .map(|m| {
                    let period = m.period.as_ref().map(|p| p.as_text()).unwrap_or_default();
                    Point::labeled(&period, m.value)
                        .with_tooltip(format!("{} / {}: {}", key, period, m.value))
                })
                .collect();
            Series::new(key, color_at(i), points)
        })
        .collect()
}

/// Parallel-coordinates stand-in: one line per record across its metric
/// dimensions. Dimension names come from the union of all records.
pub(crate) fn parallel_chart(title: &str, records: &[ProfileRecord]) -> Option<ChartSpec> {
    if records.is_empty() {
        return None;
    }
    let mut dims: Vec<String> = Vec::new();
    for rec in records {
        for key in rec.metrics.keys() {
            if !dims.contains(key) {
                dims.push(key.clone());
            }
        }
    }
    if dims.is_empty() {
        return None;
    }
    let mut spec = ChartSpec::new(ChartKind::Line, title)
        .with_labels(dims.clone())
        .with_axes(Axis::new("Dimension"), Axis::new("Value"));
    for (i, rec) in records.iter().enumerate() {
        let name = rec.label.clone().unwrap_or_default();
        let points = dims
            .iter()
            .map(|dim| {
                let value = rec.metrics.get(dim).copied().unwrap_or(0.0);
                Point::labeled(dim, value).with_tooltip(format!("{} / {}: {}", name, dim, value))
            })
            .collect();
        spec = spec.with_series(Series::new(&name, color_at(i), points));
    }
    Some(spec)
}

/// Density bins as a bubble chart: bin count drives the radius.
pub(crate) fn hexbin_chart(
    title: &str,
    x_label: &str,
    y_label: &str,
    records: &[HexbinPoint],
) -> Option<ChartSpec> {
    if records.is_empty() {
        return None;
    }
    let points = records
        .iter()
        .map(|b| {
            Point::bubble(b.x, b.y, b.count)
                .with_tooltip(format!("({}, {}): {} games", b.x, b.y, b.count))
        })
        .collect();
    Some(
        ChartSpec::new(ChartKind::Bubble, title)
            .with_axes(Axis::new(x_label), Axis::new(y_label))
            .with_series(Series::new("Density", color_at(0), points)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn cat(label: &str, count: f64) -> CategoryCount {
        CategoryCount {
            label: Some(label.to_string()),
            count,
        }
    }

    #[test]
    fn test_count_points_share_of_displayed_total() {
        let points = count_points(&[cat("A", 50.0), cat("B", 30.0), cat("C", 20.0)]);
        assert_eq!(points[0].tooltip, "A: 50 (50.0%)");
        assert_eq!(points[1].tooltip, "B: 30 (30.0%)");
        assert_eq!(points[2].tooltip, "C: 20 (20.0%)");
    }

    #[test]
    fn test_count_points_colors_follow_displayed_position() {
        let points = count_points(&[cat("A", 1.0), cat("B", 2.0)]);
        assert_eq!(points[0].color.as_deref(), Some(color_at(0)));
        assert_eq!(points[1].color.as_deref(), Some(color_at(1)));
    }

    #[test]
    fn test_dual_axis_bar_structure() {
        let records = vec![CategoryRating {
            label: Some("PC".to_string()),
            avg_rating: 7.8,
            count: 40.0,
        }];
        let spec = dual_axis_bar("Per platform", "Platform", &records).expect("spec");
        assert_eq!(spec.series.len(), 2);
        assert!(spec.series[1].on_right_axis);
        let right = spec.y_axis_right.expect("right axis");
        assert!(!right.grid);
    }

    #[test]
    fn test_dual_axis_bar_empty_is_none() {
        assert_eq!(dual_axis_bar("t", "x", &[]), None);
    }

    #[test]
    fn test_series_by_key_orders_periods_numerically() {
        let records = vec![
            StreamPoint {
                period: Some(LabelValue::Num(2010.0)),
                series: Some("RPG".to_string()),
                value: 4.0,
            },
            StreamPoint {
                period: Some(LabelValue::Num(1998.0)),
                series: Some("RPG".to_string()),
                value: 2.0,
            },
        ];
        let series = series_by_key(&records);
        assert_eq!(series.len(), 1);
        let labels: Vec<_> = series[0].points.iter().map(|p| p.label.clone()).collect();
        assert_eq!(labels, vec!["1998", "2010"]);
        assert_eq!(series[0].points[0].tooltip, "RPG / 1998: 2");
    }

    #[test]
    fn test_parallel_chart_uses_metric_union() {
        let mut m1 = BTreeMap::new();
        m1.insert("output".to_string(), 10.0);
        let mut m2 = BTreeMap::new();
        m2.insert("acclaim".to_string(), 80.0);
        let records = vec![
            ProfileRecord {
                label: Some("A".to_string()),
                metrics: m1,
            },
            ProfileRecord {
                label: Some("B".to_string()),
                metrics: m2,
            },
        ];
        let spec = parallel_chart("Profiles", &records).expect("spec");
        assert_eq!(spec.labels, vec!["output", "acclaim"]);
        assert_eq!(spec.series.len(), 2);
        // Missing dimensions read as zero.
        assert_eq!(spec.series[1].points[0].y, 0.0);
    }
}
