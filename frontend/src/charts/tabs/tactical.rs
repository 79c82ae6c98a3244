//! Tactical analysis tab: relationship-heavy facets rendered onto the
//! basic chart kinds. Sankey and chord flows become weighted bars, venn
//! regions a doughnut, the country × archetype matrix a bubble grid.

use crate::charts::palette::color_at;
use crate::charts::spec::{Axis, ChartKind, ChartSpec, Point, Series};
use crate::charts::tabs::parallel_chart;
use crate::data::DashboardData;
use shared::FlowLink;

fn link_label(link: &FlowLink) -> String {
    format!(
        "{} → {}",
        link.source.as_deref().unwrap_or_default(),
        link.target.as_deref().unwrap_or_default()
    )
}

pub fn sankey(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.tactical_sankey.is_empty() {
        return Ok(None);
    }
    let points = data
        .tactical_sankey
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let label = link_label(l);
            Point::labeled(&label, l.weight)
                .with_color(color_at(i))
                .with_tooltip(format!("{}: {} games", label, l.weight))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Bar, "Genre to platform flow")
            .with_axes(Axis::new("Flow"), Axis::new("Games"))
            .with_series(Series::new("Games", color_at(0), points)),
    ))
}

pub fn venn(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.tactical_venn.is_empty() {
        return Ok(None);
    }
    let points = data
        .tactical_venn
        .iter()
        .enumerate()
        .map(|(i, o)| {
            let label = o.sets.join(" ∩ ");
            Point::labeled(&label, o.size)
                .with_color(color_at(i))
                .with_tooltip(format!("{}: {} games", label, o.size))
        })
        .collect();
    let labels = data
        .tactical_venn
        .iter()
        .map(|o| o.sets.join(" ∩ "))
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Doughnut, "Genre overlap")
            .with_labels(labels)
            .with_axes(Axis::new("Region"), Axis::new("Games"))
            .with_series(Series::new("Games", color_at(0), points)),
    ))
}

/// Chord flows summed per source: each spoke is a source node, its value
/// the total outbound weight.
pub fn chord(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.tactical_chord.is_empty() {
        return Ok(None);
    }
    let mut sources: Vec<String> = Vec::new();
    for link in &data.tactical_chord {
        if let Some(source) = &link.source {
            if !sources.contains(source) {
                sources.push(source.clone());
            }
        }
    }
    let points = sources
        .iter()
        .map(|source| {
            let outbound: f64 = data
                .tactical_chord
                .iter()
                .filter(|l| l.source.as_deref() == Some(source.as_str()))
                .map(|l| l.weight)
                .sum();
            Point::labeled(source, outbound)
                .with_tooltip(format!("{}: {} outbound", source, outbound))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Radar, "Cross-genre exchange")
            .with_labels(sources)
            .with_series(Series::new("Outbound weight", color_at(0), points)),
    ))
}

/// Dumbbell pairs as two scatter series sharing the category index on x.
pub fn dumbbell(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.tactical_dumbbell.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = data
        .tactical_dumbbell
        .iter()
        .map(|r| r.label.clone().unwrap_or_default())
        .collect();
    let starts = data
        .tactical_dumbbell
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let label = r.label.clone().unwrap_or_default();
            Point::xy(i as f64, r.start)
                .with_label(&label)
                .with_tooltip(format!("{} start: {}", label, r.start))
        })
        .collect();
    let ends = data
        .tactical_dumbbell
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let label = r.label.clone().unwrap_or_default();
            Point::xy(i as f64, r.end)
                .with_label(&label)
                .with_tooltip(format!("{} end: {}", label, r.end))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Scatter, "Then vs now")
            .with_labels(labels)
            .with_axes(Axis::new("Category"), Axis::new("Value"))
            .with_series(Series::new("Start", color_at(0), starts))
            .with_series(Series::new("End", color_at(1), ends)),
    ))
}

/// Marimekko mosaic as a grouped bar: one series per segment, each column's
/// cells expressed as a share of that column's total.
pub fn marimekko(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.tactical_marimekko.is_empty() {
        return Ok(None);
    }
    let mut columns: Vec<String> = Vec::new();
    let mut segments: Vec<String> = Vec::new();
    for cell in &data.tactical_marimekko {
        if let Some(column) = &cell.column {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
        if let Some(segment) = &cell.segment {
            if !segments.contains(segment) {
                segments.push(segment.clone());
            }
        }
    }
    let column_totals: Vec<f64> = columns
        .iter()
        .map(|col| {
            data.tactical_marimekko
                .iter()
                .filter(|c| c.column.as_deref() == Some(col.as_str()))
                .map(|c| c.value)
                .sum()
        })
        .collect();
    let mut spec = ChartSpec::new(ChartKind::Bar, "Market composition")
        .with_labels(columns.clone())
        .with_axes(Axis::new("Segment"), Axis::new("Share (%)"));
    for (si, segment) in segments.iter().enumerate() {
        let points = columns
            .iter()
            .zip(&column_totals)
            .map(|(col, total)| {
                let value: f64 = data
                    .tactical_marimekko
                    .iter()
                    .filter(|c| {
                        c.column.as_deref() == Some(col.as_str())
                            && c.segment.as_deref() == Some(segment.as_str())
                    })
                    .map(|c| c.value)
                    .sum();
                let share = if *total > 0.0 {
                    (value / total * 1000.0).round() / 10.0
                } else {
                    0.0
                };
                Point::labeled(col, share)
                    .with_tooltip(format!("{} / {}: {:.1}%", col, segment, share))
            })
            .collect();
        spec = spec.with_series(Series::new(segment, color_at(si), points));
    }
    Ok(Some(spec))
}

pub fn developer_profiles(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.tactical_developer_profiles.is_empty() {
        return Ok(None);
    }
    let spec = parallel_chart("Developer profiles", &data.tactical_developer_profiles)
        .map(|s| ChartSpec {
            kind: ChartKind::Radar,
            title: "Developer profiles".to_string(),
            ..s
        });
    Ok(spec)
}

/// Country × archetype matrix as a bubble grid: column index on x, row
/// index on y, cell value driving the radius. Always has data because
/// intake substitutes the demo sample when the server sends nothing.
pub fn matrix(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.tactical_matrix.is_empty() {
        return Ok(None);
    }
    let mut rows: Vec<String> = Vec::new();
    let mut cols: Vec<String> = Vec::new();
    for cell in &data.tactical_matrix {
        if let Some(row) = &cell.row {
            if !rows.contains(row) {
                rows.push(row.clone());
            }
        }
        if let Some(col) = &cell.col {
            if !cols.contains(col) {
                cols.push(col.clone());
            }
        }
    }
    let points = data
        .tactical_matrix
        .iter()
        .filter_map(|cell| {
            let row = cell.row.as_deref()?;
            let col = cell.col.as_deref()?;
            let y = rows.iter().position(|r| r == row)? as f64;
            let x = cols.iter().position(|c| c == col)? as f64;
            Some(
                Point::bubble(x, y, cell.value)
                    .with_label(row)
                    .with_tooltip(format!("{} / {}: {} studios", row, col, cell.value)),
            )
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Bubble, "Studio landscape")
            .with_labels(cols)
            .with_axes(Axis::new("Archetype"), Axis::new("Country"))
            .with_series(Series::new("Studios", color_at(0), points)),
    ))
}
