//! Walks the registry for the active tab and mounts every chart. Each
//! entry is guarded on its own: a builder or mount failure logs and moves
//! on, so one bad dataset never blanks the rest of the page.

use crate::charts::registry::{charts_for_tab, ChartEntry, Tab};
use crate::charts::render::{chart_html, mount_into, placeholder_html};
use crate::data::DashboardData;
use anyhow::Context;

fn render_entry(entry: &ChartEntry, data: &DashboardData) -> anyhow::Result<()> {
    let html = match (entry.build)(data).with_context(|| format!("building {}", entry.name))? {
        Some(spec) => chart_html(&spec),
        None => placeholder_html(),
    };
    mount_into(entry.container_id, &html)
        .with_context(|| format!("mounting {} into #{}", entry.name, entry.container_id))?;
    Ok(())
}

/// Renders every chart of `tab` into its container.
pub fn render_tab(tab: Tab, data: &DashboardData) {
    for entry in charts_for_tab(tab) {
        if let Err(e) = render_entry(entry, data) {
            log::error!("chart {} failed: {:#}", entry.name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::spec::ChartSpec;

    #[test]
    fn test_builders_for_empty_data_all_succeed() {
        // Every registered builder must tolerate an all-empty dataset,
        // producing either a spec (revenue, matrix fallback) or None.
        let data = DashboardData::default();
        for e in crate::charts::registry::CHARTS {
            let result = (e.build)(&data);
            assert!(result.is_ok(), "{} failed on empty data", e.name);
        }
    }

    #[test]
    fn test_revenue_and_matrix_render_even_without_server_data() {
        let data = DashboardData::from_payload(Default::default());
        let with_specs: Vec<&str> = crate::charts::registry::CHARTS
            .iter()
            .filter(|e| (e.build)(&data).ok().flatten().is_some())
            .map(|e| e.name)
            .collect();
        assert!(with_specs.contains(&"tactical_matrix"));
        assert!(with_specs.contains(&"revenue_quarterly"));
        assert!(with_specs.contains(&"revenue_segments"));
    }

    #[test]
    fn test_entry_failure_does_not_panic_render_tab() {
        fn failing(_: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
            anyhow::bail!("boom")
        }
        let e = ChartEntry {
            name: "failing",
            container_id: "nowhere",
            tab: Tab::Studio,
            build: failing,
        };
        let result = render_entry(&e, &DashboardData::default());
        assert!(result.is_err());
    }
}
