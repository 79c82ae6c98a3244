//! SVG rendering of chart specifications.
//!
//! `chart_html` is pure (spec in, markup out) so every chart kind is
//! testable without a browser. `mount_into` is the only DOM-touching step.

use crate::charts::spec::{ChartKind, ChartSpec, Point, Series};
use shared::{DashboardError, Result};

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Fallback markup for an absent or empty dataset.
pub fn placeholder_html() -> String {
    "<div class=\"no-data\">No data available</div>".to_string()
}

/// Renders a chart specification to self-contained HTML/SVG markup.
pub fn chart_html(spec: &ChartSpec) -> String {
    match spec.kind {
        ChartKind::Bar => bar_chart_html(spec),
        ChartKind::Line => line_chart_html(spec),
        ChartKind::Pie => pie_chart_html(spec, false),
        ChartKind::Doughnut => pie_chart_html(spec, true),
        ChartKind::Radar => radar_chart_html(spec),
        ChartKind::Scatter | ChartKind::Bubble => scatter_chart_html(spec),
    }
}

/// Writes `html` into the container element. Missing targets are an error
/// the dispatcher logs and skips; sibling charts are unaffected.
pub fn mount_into(container_id: &str, html: &str) -> Result<()> {
    let document = gloo_utils::document();
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| DashboardError::MissingContainer(container_id.to_string()))?;
    container.set_inner_html(html);
    Ok(())
}

fn axis_value(point: &Point, log_scale: bool) -> f64 {
    if log_scale {
        (point.y.max(0.0) + 1.0).log10()
    } else {
        point.y
    }
}

fn max_axis_value(series: &[Series], right: bool, log_scale: bool) -> f64 {
    series
        .iter()
        .filter(|s| s.on_right_axis == right)
        .flat_map(|s| s.points.iter())
        .map(|p| axis_value(p, log_scale))
        .fold(0.0, f64::max)
}

fn axis_labels_html(spec: &ChartSpec) -> String {
    let w = spec.style.width;
    let h = spec.style.height;
    let mut out = format!(
        "<g class=\"chart-axes\">\
            <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" class=\"x-axis-label\">{}</text>\
            <text x=\"20\" y=\"{}\" text-anchor=\"middle\" transform=\"rotate(-90, 20, {})\" class=\"y-axis-label\">{}</text>",
        w / 2,
        h - 10,
        escape_html(&spec.x_axis.label),
        h / 2,
        h / 2,
        escape_html(&spec.y_axis.label),
    );
    if let Some(right) = &spec.y_axis_right {
        // Opposite side, no gridlines of its own.
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" transform=\"rotate(90, {}, {})\" class=\"y-axis-label-right\">{}</text>",
            w - 20,
            h / 2,
            w - 20,
            h / 2,
            escape_html(&right.label),
        ));
    }
    out.push_str("</g>");
    out
}

fn grid_html(spec: &ChartSpec) -> String {
    if !spec.y_axis.grid {
        return String::new();
    }
    let w = spec.style.width as f64;
    let h = spec.style.height as f64;
    (1..=4)
        .map(|i| {
            let y = h - 60.0 - (h - 110.0) * (i as f64 / 4.0);
            format!(
                "<line x1=\"50\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{}\" stroke-width=\"1\"/>",
                w - 50.0,
                spec.style.grid_color,
            )
        })
        .collect()
}

fn legend_html(spec: &ChartSpec) -> String {
    if !spec.style.show_legend || spec.series.len() < 2 {
        return String::new();
    }
    let items: String = spec
        .series
        .iter()
        .map(|s| {
            format!(
                "<div class=\"legend-item\">\
                    <span class=\"legend-color\" style=\"background-color: {}\"></span>\
                    <span class=\"legend-label\">{}</span>\
                </div>",
                s.color,
                escape_html(&s.name),
            )
        })
        .collect();
    format!("<div class=\"chart-legend\">{}</div>", items)
}

fn wrapper_html(spec: &ChartSpec, body: String) -> String {
    format!(
        "<div class=\"chart-wrapper\">\
            <h3 class=\"chart-title\">{}</h3>\
            <div class=\"chart-content\">\
                <svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
                    <g class=\"chart-area\">{grid}{axes}{body}</g>\
                </svg>\
                {legend}\
            </div>\
        </div>",
        escape_html(&spec.title),
        w = spec.style.width,
        h = spec.style.height,
        grid = grid_html(spec),
        axes = axis_labels_html(spec),
        body = body,
        legend = legend_html(spec),
    )
}

fn bar_chart_html(spec: &ChartSpec) -> String {
    let w = spec.style.width as f64;
    let h = spec.style.height as f64;
    let plot_h = h - 110.0;
    let baseline = h - 60.0;
    let groups = spec
        .series
        .first()
        .map(|s| s.points.len())
        .unwrap_or(0)
        .max(1);
    let group_w = (w - 100.0) / groups as f64;
    let left_max = max_axis_value(&spec.series, false, spec.y_axis.log_scale).max(f64::MIN_POSITIVE);
    let right_max = max_axis_value(&spec.series, true, false).max(f64::MIN_POSITIVE);
    let series_count = spec.series.len().max(1);
    let bar_w = (group_w * 0.8) / series_count as f64;

    let mut bars = String::new();
    for (si, series) in spec.series.iter().enumerate() {
        for (i, point) in series.points.iter().enumerate() {
            let value = if series.on_right_axis {
                point.y / right_max
            } else {
                axis_value(point, spec.y_axis.log_scale) / left_max
            };
            let bar_h = (value.max(0.0) * plot_h).min(plot_h);
            let x = 50.0 + i as f64 * group_w + group_w * 0.1 + si as f64 * bar_w;
            let y = baseline - bar_h;
            let color = point.color.as_deref().unwrap_or(&series.color);
            let tooltip = if point.tooltip.is_empty() {
                format!("{}: {}", point.label, point.y)
            } else {
                point.tooltip.clone()
            };
            bars.push_str(&format!(
                "<g class=\"bar-group\">\
                    <rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bw:.1}\" height=\"{bh:.1}\" fill=\"{color}\" class=\"bar\">\
                        <title>{title}</title>\
                    </rect>\
                </g>",
                bw = bar_w,
                bh = bar_h,
                color = color,
                title = escape_html(&tooltip),
            ));
            // Category labels come from the first series only.
            if si == 0 {
                bars.push_str(&format!(
                    "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"bar-label\" font-size=\"{}\">{}</text>",
                    50.0 + i as f64 * group_w + group_w / 2.0,
                    baseline + 18.0,
                    spec.style.font_size - 2,
                    escape_html(&point.label),
                ));
            }
        }
    }
    bars.push_str(&format!(
        "<line x1=\"50\" y1=\"{baseline:.1}\" x2=\"{:.1}\" y2=\"{baseline:.1}\" stroke=\"{}\" stroke-width=\"1\"/>",
        w - 50.0,
        spec.style.axis_color,
    ));
    wrapper_html(spec, bars)
}

fn line_path(points: &[Point], max: f64, w: f64, h: f64, log_scale: bool) -> String {
    if points.is_empty() {
        return String::new();
    }
    let plot_h = h - 110.0;
    let baseline = h - 60.0;
    let step = (w - 100.0) / points.len().max(2) as f64;
    let coords: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let value = axis_value(p, log_scale) / max;
            let x = 50.0 + step / 2.0 + i as f64 * step;
            let y = baseline - value.max(0.0) * plot_h;
            format!("{:.1},{:.1}", x, y)
        })
        .collect();
    format!("M {}", coords.join(" L "))
}

fn line_chart_html(spec: &ChartSpec) -> String {
    let w = spec.style.width as f64;
    let h = spec.style.height as f64;
    let left_max = max_axis_value(&spec.series, false, spec.y_axis.log_scale).max(f64::MIN_POSITIVE);
    let right_max = max_axis_value(&spec.series, true, false).max(f64::MIN_POSITIVE);

    let mut body = String::new();
    for series in &spec.series {
        let (max, log_scale) = if series.on_right_axis {
            (right_max, false)
        } else {
            (left_max, spec.y_axis.log_scale)
        };
        let path = line_path(&series.points, max, w, h, log_scale);
        body.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" class=\"line-series\" data-series=\"{}\"/>",
            path,
            series.color,
            escape_html(&series.name),
        ));
        // Point markers carry the tooltips.
        let step = (w - 100.0) / series.points.len().max(2) as f64;
        for (i, p) in series.points.iter().enumerate() {
            let value = axis_value(p, log_scale) / max;
            let x = 50.0 + step / 2.0 + i as f64 * step;
            let y = (h - 60.0) - value.max(0.0) * (h - 110.0);
            let tooltip = if p.tooltip.is_empty() {
                format!("{}: {}", p.label, p.y)
            } else {
                p.tooltip.clone()
            };
            body.push_str(&format!(
                "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"3\" fill=\"{}\"><title>{}</title></circle>",
                series.color,
                escape_html(&tooltip),
            ));
        }
    }
    wrapper_html(spec, body)
}

fn pie_chart_html(spec: &ChartSpec, doughnut: bool) -> String {
    let series = match spec.series.first() {
        Some(s) => s,
        None => return placeholder_html(),
    };
    let w = spec.style.width as f64;
    let h = spec.style.height as f64;
    let cx = w / 2.0;
    let cy = h / 2.0;
    let radius = (w.min(h) / 2.0) * 0.8;
    let total: f64 = series.points.iter().map(|p| p.y.max(0.0)).sum();
    if total <= 0.0 {
        return placeholder_html();
    }

    let mut current_angle = -std::f64::consts::FRAC_PI_2;
    let mut slices = String::new();
    for point in &series.points {
        let slice_angle = (point.y.max(0.0) / total) * 2.0 * std::f64::consts::PI;
        let end_angle = current_angle + slice_angle;
        let color = point.color.as_deref().unwrap_or(&series.color);
        let tooltip = if point.tooltip.is_empty() {
            format!("{}: {}", point.label, point.y)
        } else {
            point.tooltip.clone()
        };
        // A full-turn arc has coincident endpoints and renders nothing, so
        // a slice covering the whole pie is drawn as a circle instead.
        if slice_angle >= 2.0 * std::f64::consts::PI - 1e-9 {
            slices.push_str(&format!(
                "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{r:.1}\" fill=\"{color}\" \
                    class=\"slice\"><title>{title}</title></circle>",
                r = radius,
                title = escape_html(&tooltip),
            ));
            current_angle = end_angle;
            continue;
        }
        let x1 = cx + radius * current_angle.cos();
        let y1 = cy + radius * current_angle.sin();
        let x2 = cx + radius * end_angle.cos();
        let y2 = cy + radius * end_angle.sin();
        let large_arc = if slice_angle > std::f64::consts::PI { 1 } else { 0 };
        slices.push_str(&format!(
            "<path d=\"M {cx:.1},{cy:.1} L {x1:.1},{y1:.1} A {r:.1},{r:.1} 0 {large_arc},1 {x2:.1},{y2:.1} Z\" \
                fill=\"{color}\" class=\"slice\"><title>{title}</title></path>",
            r = radius,
            title = escape_html(&tooltip),
        ));
        current_angle = end_angle;
    }
    if doughnut {
        slices.push_str(&format!(
            "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{:.1}\" fill=\"{}\"/>",
            radius * 0.55,
            spec.style.background,
        ));
    }
    let legend: String = series
        .points
        .iter()
        .map(|p| {
            format!(
                "<div class=\"legend-item\">\
                    <span class=\"legend-color\" style=\"background-color: {}\"></span>\
                    <span class=\"legend-label\">{}</span>\
                </div>",
                p.color.as_deref().unwrap_or(&series.color),
                escape_html(&p.label),
            )
        })
        .collect();
    format!(
        "<div class=\"chart-wrapper\">\
            <h3 class=\"chart-title\">{}</h3>\
            <div class=\"chart-content\">\
                <svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
                    <g class=\"chart-area\">{slices}</g>\
                </svg>\
                <div class=\"chart-legend\">{legend}</div>\
            </div>\
        </div>",
        escape_html(&spec.title),
        w = spec.style.width,
        h = spec.style.height,
    )
}

fn radar_chart_html(spec: &ChartSpec) -> String {
    let axis_count = spec.labels.len();
    if axis_count == 0 || spec.series.is_empty() {
        return placeholder_html();
    }
    let w = spec.style.width as f64;
    let h = spec.style.height as f64;
    let cx = w / 2.0;
    let cy = h / 2.0;
    let radius = (w.min(h) * 0.35).max(1.0);
    let angle_step = 2.0 * std::f64::consts::PI / axis_count as f64;
    let angle_at =
        |i: usize| -> f64 { -std::f64::consts::FRAC_PI_2 + i as f64 * angle_step };

    let mut body = String::new();
    for level in 1..=5 {
        let r = radius * (level as f64 / 5.0);
        let ring: Vec<String> = (0..axis_count)
            .map(|i| format!("{:.1},{:.1}", cx + r * angle_at(i).cos(), cy + r * angle_at(i).sin()))
            .collect();
        body.push_str(&format!(
            "<polygon points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>",
            ring.join(" "),
            spec.style.grid_color,
        ));
    }
    for i in 0..axis_count {
        let x = cx + radius * angle_at(i).cos();
        let y = cy + radius * angle_at(i).sin();
        body.push_str(&format!(
            "<line x1=\"{cx:.1}\" y1=\"{cy:.1}\" x2=\"{x:.1}\" y2=\"{y:.1}\" stroke=\"{}\" stroke-width=\"1\"/>",
            spec.style.grid_color,
        ));
        let lx = cx + radius * 1.15 * angle_at(i).cos();
        let ly = cy + radius * 1.15 * angle_at(i).sin();
        body.push_str(&format!(
            "<text x=\"{lx:.1}\" y=\"{ly:.1}\" text-anchor=\"middle\" class=\"radar-axis-label\">{}</text>",
            escape_html(&spec.labels[i]),
        ));
    }
    // Values are normalized per spoke against the max across all series.
    let spoke_max: Vec<f64> = (0..axis_count)
        .map(|i| {
            spec.series
                .iter()
                .filter_map(|s| s.points.get(i))
                .map(|p| p.y)
                .fold(f64::MIN_POSITIVE, f64::max)
        })
        .collect();
    for series in &spec.series {
        let points: Vec<String> = series
            .points
            .iter()
            .take(axis_count)
            .enumerate()
            .map(|(i, p)| {
                let r = radius * (p.y.max(0.0) / spoke_max[i]).min(1.0);
                format!("{:.1},{:.1}", cx + r * angle_at(i).cos(), cy + r * angle_at(i).sin())
            })
            .collect();
        body.push_str(&format!(
            "<polygon points=\"{}\" opacity=\"0.6\" fill=\"{color}\" fill-opacity=\"0.2\" \
                stroke=\"{color}\" stroke-width=\"2\"><title>{}</title></polygon>",
            points.join(" "),
            escape_html(&series.name),
            color = series.color,
        ));
    }
    let legend: String = spec
        .series
        .iter()
        .map(|s| {
            format!(
                "<div class=\"legend-item\">\
                    <span class=\"legend-color\" style=\"background-color: {}\"></span>\
                    <span class=\"legend-label\">{}</span>\
                </div>",
                s.color,
                escape_html(&s.name),
            )
        })
        .collect();
    format!(
        "<div class=\"chart-wrapper\">\
            <h3 class=\"chart-title\">{}</h3>\
            <div class=\"chart-content\">\
                <svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
                    <g class=\"chart-area\">{body}</g>\
                </svg>\
                <div class=\"chart-legend\">{legend}</div>\
            </div>\
        </div>",
        escape_html(&spec.title),
        w = spec.style.width,
        h = spec.style.height,
    )
}

fn scatter_chart_html(spec: &ChartSpec) -> String {
    let w = spec.style.width as f64;
    let h = spec.style.height as f64;
    let all: Vec<&Point> = spec.series.iter().flat_map(|s| s.points.iter()).collect();
    if all.is_empty() {
        return placeholder_html();
    }
    let x_min = all.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let x_max = all.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let y_max = all
        .iter()
        .map(|p| axis_value(p, spec.y_axis.log_scale))
        .fold(f64::MIN_POSITIVE, f64::max);
    let r_max = all.iter().map(|p| p.r).fold(0.0, f64::max);
    let x_span = (x_max - x_min).max(f64::MIN_POSITIVE);

    let mut body = String::new();
    for series in &spec.series {
        for point in &series.points {
            let px = 60.0 + (point.x - x_min) / x_span * (w - 120.0);
            let py = (h - 60.0)
                - (axis_value(point, spec.y_axis.log_scale) / y_max).min(1.0) * (h - 110.0);
            let radius = if spec.kind == ChartKind::Bubble && r_max > 0.0 {
                4.0 + (point.r / r_max).sqrt() * 18.0
            } else {
                5.0
            };
            let color = point.color.as_deref().unwrap_or(&series.color);
            let tooltip = if point.tooltip.is_empty() {
                format!("{} ({}, {})", point.label, point.x, point.y)
            } else {
                point.tooltip.clone()
            };
            body.push_str(&format!(
                "<circle cx=\"{px:.1}\" cy=\"{py:.1}\" r=\"{radius:.1}\" fill=\"{color}\" \
                    fill-opacity=\"0.7\" class=\"point\"><title>{}</title></circle>",
                escape_html(&tooltip),
            ));
        }
    }
    wrapper_html(spec, body)
}
