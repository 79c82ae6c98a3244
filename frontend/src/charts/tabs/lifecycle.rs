//! Franchise lifecycle tab: survival curves, activity spans and density.

use crate::charts::palette::color_at;
use crate::charts::spec::{Axis, ChartKind, ChartSpec, Point, Series};
use crate::charts::tabs::{hexbin_chart, parallel_chart, period_order, series_by_key};
use crate::data::DashboardData;

pub fn survival(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.lifecycle_survival.is_empty() {
        return Ok(None);
    }
    let mut sorted = data.lifecycle_survival.clone();
    sorted.sort_by(|a, b| period_order(a.period.as_ref(), b.period.as_ref()));
    let points = sorted
        .iter()
        .map(|p| {
            let period = p.period.as_ref().map(|v| v.as_text()).unwrap_or_default();
            Point::labeled(&period, p.count)
                .with_tooltip(format!("Year {}: {} franchises active", period, p.count))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Line, "Franchise survival")
            .with_axes(Axis::new("Years since debut"), Axis::new("Active franchises"))
            .with_series(Series::new("Active franchises", color_at(0), points)),
    ))
}

/// Ridgeline stand-in: one line per cohort over the shared period axis.
pub fn ridgeline(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.lifecycle_ridgeline.is_empty() {
        return Ok(None);
    }
    let mut spec = ChartSpec::new(ChartKind::Line, "Cohort activity ridges")
        .with_axes(Axis::new("Period"), Axis::new("Releases"));
    for series in series_by_key(&data.lifecycle_ridgeline) {
        spec = spec.with_series(series);
    }
    Ok(Some(spec))
}

/// Activity spans as a bar of span lengths, longest first kept in server
/// order so ties stay stable.
pub fn timeline(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.lifecycle_timeline.is_empty() {
        return Ok(None);
    }
    let points = data
        .lifecycle_timeline
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let label = r.label.clone().unwrap_or_default();
            let span = (r.end - r.start).max(0.0);
            Point::labeled(&label, span)
                .with_color(color_at(i))
                .with_tooltip(format!(
                    "{}: {} to {} ({} years)",
                    label, r.start, r.end, span
                ))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Bar, "Franchise lifespans")
            .with_axes(Axis::new("Franchise"), Axis::new("Years active"))
            .with_series(Series::new("Years active", color_at(0), points)),
    ))
}

pub fn hexbin(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    Ok(hexbin_chart(
        "Age vs rating density",
        "Franchise age",
        "Rating",
        &data.lifecycle_hexbin,
    ))
}

pub fn parallel(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    Ok(parallel_chart("Lifecycle profiles", &data.lifecycle_parallel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn data_from(value: serde_json::Value) -> DashboardData {
        DashboardData::from_payload(serde_json::from_value(value).expect("payload"))
    }

    #[test]
    fn test_survival_sorted_by_period() {
        let data = data_from(json!({
            "lifecycleSurvivalData": [
                {"_id": 10, "count": 12},
                {"_id": 0, "count": 100},
                {"_id": 5, "count": 40}
            ]
        }));
        let spec = survival(&data).unwrap().expect("spec");
        let labels: Vec<_> = spec.series[0].points.iter().map(|p| p.label.clone()).collect();
        assert_eq!(labels, vec!["0", "5", "10"]);
    }

    #[test]
    fn test_ridgeline_one_series_per_cohort() {
        let data = data_from(json!({
            "lifecycleRidgelineData": [
                {"year": 1995, "series": "90s debut", "value": 4},
                {"year": 2005, "series": "00s debut", "value": 7},
                {"year": 2000, "series": "90s debut", "value": 6}
            ]
        }));
        let spec = ridgeline(&data).unwrap().expect("spec");
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].name, "90s debut");
        assert_eq!(spec.series[0].points[0].label, "1995");
    }

    #[test]
    fn test_timeline_span_lengths_never_negative() {
        let data = data_from(json!({
            "lifecycleTimelineData": [
                {"name": "Zelda", "start": 1986, "end": 2023},
                {"name": "Glitch", "start": 2010, "end": 2005}
            ]
        }));
        let spec = timeline(&data).unwrap().expect("spec");
        assert_eq!(spec.series[0].points[0].y, 37.0);
        assert_eq!(spec.series[0].points[1].y, 0.0);
    }

    #[test]
    fn test_hexbin_radius_follows_count() {
        let data = data_from(json!({
            "lifecycleHexbinData": [{"x": 5, "y": 7.5, "count": 30}]
        }));
        let spec = hexbin(&data).unwrap().expect("spec");
        assert_eq!(spec.kind, ChartKind::Bubble);
        assert_eq!(spec.series[0].points[0].r, 30.0);
    }

    #[test]
    fn test_empty_tab_datasets_build_no_specs() {
        let data = data_from(json!({}));
        assert_eq!(survival(&data).unwrap(), None);
        assert_eq!(ridgeline(&data).unwrap(), None);
        assert_eq!(timeline(&data).unwrap(), None);
        assert_eq!(hexbin(&data).unwrap(), None);
        assert_eq!(parallel(&data).unwrap(), None);
    }
}
