//! Genre evolution tab: long-horizon composition and hierarchy facets.

use crate::charts::palette::color_at;
use crate::charts::spec::{Axis, ChartKind, ChartSpec, Point, Series};
use crate::charts::tabs::{hexbin_chart, parallel_chart, series_by_key};
use crate::data::DashboardData;
use shared::TreePoint;

/// Decade accent for the bubble timeline.
fn decade_color(year: f64) -> &'static str {
    let decade = (year as i64 / 10) * 10;
    match decade {
        ..=1979 => "#6B7280",
        1980 => "#8B5CF6",
        1990 => "#3B82F6",
        2000 => "#10B981",
        2010 => "#F59E0B",
        _ => "#EF4444",
    }
}

pub fn stream(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.evolution_stream.is_empty() {
        return Ok(None);
    }
    let mut spec = ChartSpec::new(ChartKind::Line, "Genre share over time")
        .with_axes(Axis::new("Year"), Axis::new("Releases"));
    for series in series_by_key(&data.evolution_stream) {
        spec = spec.with_series(series);
    }
    Ok(Some(spec))
}

pub fn bubble(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.evolution_bubble.is_empty() {
        return Ok(None);
    }
    let points = data
        .evolution_bubble
        .iter()
        .map(|b| {
            let label = b.label.clone().unwrap_or_default();
            Point::bubble(b.x, b.y, b.r)
                .with_label(&label)
                .with_color(decade_color(b.x))
                .with_tooltip(format!("{} ({}): {:.1}, {} votes", label, b.x as i64, b.y, b.r))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Bubble, "Standout games by era")
            .with_axes(Axis::new("Year"), Axis::new("Rating"))
            .with_series(Series::new("Games", color_at(0), points)),
    ))
}

pub fn hexbin(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    Ok(hexbin_chart(
        "Year vs rating density",
        "Year",
        "Rating",
        &data.evolution_hexbin,
    ))
}

pub fn parallel(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    Ok(parallel_chart("Era profiles", &data.evolution_parallel))
}

/// Hierarchy summarized as a doughnut of the top level: root nodes when any
/// exist, otherwise totals aggregated per parent.
pub fn tree(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.evolution_tree.is_empty() {
        return Ok(None);
    }
    let roots: Vec<&TreePoint> = data
        .evolution_tree
        .iter()
        .filter(|n| n.parent.is_none())
        .collect();
    let slices: Vec<(String, f64)> = if roots.is_empty() {
        let mut parents: Vec<String> = Vec::new();
        for node in &data.evolution_tree {
            if let Some(parent) = &node.parent {
                if !parents.contains(parent) {
                    parents.push(parent.clone());
                }
            }
        }
        parents
            .into_iter()
            .map(|parent| {
                let total: f64 = data
                    .evolution_tree
                    .iter()
                    .filter(|n| n.parent.as_deref() == Some(parent.as_str()))
                    .map(|n| n.value)
                    .sum();
                (parent, total)
            })
            .collect()
    } else {
        roots
            .iter()
            .map(|n| (n.name.clone().unwrap_or_default(), n.value))
            .collect()
    };
    let labels: Vec<String> = slices.iter().map(|(name, _)| name.clone()).collect();
    let points = slices
        .iter()
        .enumerate()
        .map(|(i, (name, value))| {
            Point::labeled(name, *value)
                .with_color(color_at(i))
                .with_tooltip(format!("{}: {} games", name, value))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Doughnut, "Genre family tree")
            .with_labels(labels)
            .with_axes(Axis::new("Family"), Axis::new("Games"))
            .with_series(Series::new("Games", color_at(0), points)),
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
    fn test_stream_groups_by_series_key() {
        let data = data_from(json!({
            "evolutionStreamData": [
                {"year": 2000, "genre": "RPG", "count": 10},
                {"year": 2000, "genre": "Action", "count": 25},
                {"year": 2010, "genre": "RPG", "count": 18}
            ]
        }));
        let spec = stream(&data).unwrap().expect("spec");
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].name, "RPG");
        assert_eq!(spec.series[0].points.len(), 2);
    }

    #[test]
    fn test_bubble_decade_colors() {
        let data = data_from(json!({
            "evolutionBubbleData": [
                {"title": "Doom", "year": 1993, "rating": 8.5, "votes": 900},
                {"title": "Hades", "year": 2020, "rating": 8.9, "votes": 1200}
            ]
        }));
        let spec = bubble(&data).unwrap().expect("spec");
        assert_eq!(spec.series[0].points[0].color.as_deref(), Some("#3B82F6"));
        assert_eq!(spec.series[0].points[1].color.as_deref(), Some("#EF4444"));
    }

    #[test]
    fn test_tree_prefers_root_nodes() {
        let data = data_from(json!({
            "evolutionTreeData": [
                {"name": "RPG", "value": 120},
                {"name": "CRPG", "parent": "RPG", "value": 40}
            ]
        }));
        let spec = tree(&data).unwrap().expect("spec");
        assert_eq!(spec.labels, vec!["RPG"]);
        assert_eq!(spec.series[0].points[0].y, 120.0);
    }

    #[test]
    fn test_tree_aggregates_by_parent_when_no_roots() {
        let data = data_from(json!({
            "evolutionTreeData": [
                {"name": "CRPG", "parent": "RPG", "value": 40},
                {"name": "ARPG", "parent": "RPG", "value": 60},
                {"name": "RTS", "parent": "Strategy", "value": 30}
            ]
        }));
        let spec = tree(&data).unwrap().expect("spec");
        assert_eq!(spec.labels, vec!["RPG", "Strategy"]);
        assert_eq!(spec.series[0].points[0].y, 100.0);
    }

    #[test]
    fn test_empty_tab_datasets_build_no_specs() {
        let data = data_from(json!({}));
        assert_eq!(stream(&data).unwrap(), None);
        assert_eq!(bubble(&data).unwrap(), None);
        assert_eq!(hexbin(&data).unwrap(), None);
        assert_eq!(parallel(&data).unwrap(), None);
        assert_eq!(tree(&data).unwrap(), None);
    }
}
