//! Integration tests over the public crate surface: payload JSON through
//! intake, builders and the SVG renderer. Compiled for native targets only;
//! DOM mounting is exercised in the browser, not here.

#![cfg(not(target_arch = "wasm32"))]

use frontend::charts::registry::{Tab, CHARTS};
use frontend::charts::render::{chart_html, placeholder_html};
use frontend::data::DashboardData;
use serde_json::json;

#[test]
fn revenue_tab_renders_without_any_server_payload() {
    let data = DashboardData::from_payload(Default::default());
    for entry in CHARTS.iter().filter(|e| e.tab == Tab::Revenue) {
        let spec = (entry.build)(&data)
            .expect("builder ok")
            .expect("demo charts always build");
        let html = chart_html(&spec);
        assert!(html.contains("<svg"), "{} produced no svg", entry.name);
    }
}

#[test]
fn placeholder_markup_is_used_for_missing_datasets() {
    let data = DashboardData::from_payload(Default::default());
    let entry = CHARTS
        .iter()
        .find(|e| e.name == "genre_counts")
        .expect("registered");
    assert!((entry.build)(&data).expect("builder ok").is_none());
    assert!(placeholder_html().contains("No data available"));
}

#[test]
fn hostile_labels_are_escaped_in_rendered_markup() {
    let payload = serde_json::from_value(json!({
        "platformCounts": [{"_id": "<script>alert(1)</script>", "count": 3}]
    }))
    .expect("payload");
    let data = DashboardData::from_payload(payload);
    let entry = CHARTS
        .iter()
        .find(|e| e.name == "platform_counts")
        .expect("registered");
    let spec = (entry.build)(&data).expect("builder ok").expect("spec");
    let html = chart_html(&spec);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}
