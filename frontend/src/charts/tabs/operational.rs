//! Operational intelligence tab: release cadence and rating movement.

use crate::charts::filter::filter_unwanted;
use crate::charts::palette::color_at;
use crate::charts::spec::{Axis, ChartKind, ChartSpec, Point, QualityTier, Series};
use crate::charts::tabs::{dual_axis_bar, period_order};
use crate::data::DashboardData;

/// Seasonal accent for month buckets: Dec-Feb winter, Mar-May spring,
/// Jun-Aug summer, Sep-Nov fall. Non-month labels get the default palette.
fn season_color(month: u32) -> &'static str {
    match month {
        12 | 1 | 2 => "#0EA5E9",
        3..=5 => "#22C55E",
        6..=8 => "#F59E0B",
        9..=11 => "#F97316",
        _ => color_at(0),
    }
}

pub fn rating_trends(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.rating_trends.is_empty() {
        return Ok(None);
    }
    let mut sorted = data.rating_trends.clone();
    sorted.sort_by(|a, b| period_order(a.period.as_ref(), b.period.as_ref()));
    let ratings: Vec<Point> = sorted
        .iter()
        .map(|p| {
            let period = p.period.as_ref().map(|v| v.as_text()).unwrap_or_default();
            Point::labeled(&period, p.rating)
                .with_tooltip(format!("{}: {:.1} avg rating", period, p.rating))
        })
        .collect();
    let volume: Vec<Point> = sorted
        .iter()
        .map(|p| {
            let period = p.period.as_ref().map(|v| v.as_text()).unwrap_or_default();
            Point::labeled(&period, p.count)
                .with_tooltip(format!("{}: {} releases", period, p.count))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Line, "Rating trend vs release volume")
            .with_axes(Axis::new("Period"), Axis::new("Average rating"))
            .with_right_axis(Axis::opposite("Releases"))
            .with_series(Series::new("Average rating", color_at(0), ratings))
            .with_series(Series::new("Releases", color_at(1), volume).on_right_axis()),
    ))
}

pub fn monthly_activity(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.monthly_activity.is_empty() {
        return Ok(None);
    }
    let mut sorted = data.monthly_activity.clone();
    sorted.sort_by(|a, b| period_order(a.period.as_ref(), b.period.as_ref()));
    let points = sorted
        .iter()
        .map(|p| {
            let period = p.period.as_ref().map(|v| v.as_text()).unwrap_or_default();
            let month = period.parse::<u32>().unwrap_or(0);
            Point::labeled(&period, p.count)
                .with_color(season_color(month))
                .with_tooltip(format!("Month {}: {} releases", period, p.count))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Bar, "Release activity by month")
            .with_axes(Axis::new("Month"), Axis::new("Releases"))
            .with_series(Series::new("Releases", color_at(0), points)),
    ))
}

pub fn platform_performance(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    let shown = filter_unwanted(&data.platform_performance);
    Ok(dual_axis_bar("Platform performance", "Platform", &shown))
}

pub fn top_rated_recent(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    let shown = filter_unwanted(&data.top_rated_recent);
    if shown.is_empty() {
        return Ok(None);
    }
    let points = shown
        .iter()
        .map(|g| {
            let title = g.title.clone().unwrap_or_default();
            let tier = QualityTier::from_rating(g.rating);
            let year = g.year.map(|y| y.to_string()).unwrap_or_default();
            Point::labeled(&title, g.rating)
                .with_color(tier.color())
                .with_tooltip(format!("{} ({}): {:.1} ({})", title, year, g.rating, tier.label()))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Bar, "Top rated recent releases")
            .with_axes(Axis::new("Game"), Axis::new("Rating"))
            .with_series(Series::new("Rating", color_at(0), points)),
    ))
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
    fn test_rating_trends_dual_axis_sorted_chronologically() {
        let data = data_from(json!({
            "ratingTrends": [
                {"_id": 2021, "avgRating": 7.2, "count": 40},
                {"_id": 2019, "avgRating": 7.8, "count": 25}
            ]
        }));
        let spec = rating_trends(&data).unwrap().expect("spec");
        assert_eq!(spec.series.len(), 2);
        assert!(spec.series[1].on_right_axis);
        assert_eq!(spec.series[0].points[0].label, "2019");
        assert!(!spec.y_axis_right.as_ref().unwrap().grid);
    }

    #[test]
    fn test_monthly_activity_season_colors() {
        let data = data_from(json!({
            "monthlyActivity": [
                {"month": 1, "count": 10},
                {"month": 4, "count": 12},
                {"month": 7, "count": 8},
                {"month": 10, "count": 15}
            ]
        }));
        let spec = monthly_activity(&data).unwrap().expect("spec");
        let colors: Vec<_> = spec.series[0]
            .points
            .iter()
            .map(|p| p.color.clone().unwrap())
            .collect();
        assert_eq!(colors, vec!["#0EA5E9", "#22C55E", "#F59E0B", "#F97316"]);
    }

    #[test]
    fn test_top_rated_recent_tier_colors() {
        let data = data_from(json!({
            "topRatedRecent": [{"title": "Elden Ring", "rating": 9.0, "startYear": 2022}]
        }));
        let spec = top_rated_recent(&data).unwrap().expect("spec");
        let point = &spec.series[0].points[0];
        assert_eq!(point.color.as_deref(), Some(QualityTier::Excellent.color()));
        assert!(point.tooltip.contains("Excellent"));
    }

    #[test]
    fn test_empty_tab_datasets_build_no_specs() {
        let data = data_from(json!({}));
        assert_eq!(rating_trends(&data).unwrap(), None);
        assert_eq!(monthly_activity(&data).unwrap(), None);
        assert_eq!(platform_performance(&data).unwrap(), None);
        assert_eq!(top_rated_recent(&data).unwrap(), None);
    }
}
