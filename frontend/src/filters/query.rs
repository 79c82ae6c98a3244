//! Filter state and its query-string encoding. Applying filters is a full
//! navigation: the form builds a query with [`to_query`] and the server
//! re-renders the page with a freshly filtered payload.

use serde::{Deserialize, Serialize};

pub const ALL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    pub op_years: Vec<String>,
    pub op_months: Vec<String>,
    pub tactical_focus: Option<String>,
    pub lifecycle_cohort: Option<String>,
    pub evolution_metric: Option<String>,
}

fn push_repeated(parts: &mut Vec<String>, key: &str, values: &[String]) {
    for value in values {
        if value != ALL {
            parts.push(format!("{}={}", key, urlencoding::encode(value)));
        }
    }
}

fn push_scalar(parts: &mut Vec<String>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        if value != ALL {
            parts.push(format!("{}={}", key, urlencoding::encode(value)));
        }
    }
}

/// Query string for a filter navigation, without the leading `?`. Multi
/// selects emit one parameter per value; "All" selections emit nothing,
/// since the unfiltered view is the server default.
pub fn to_query(selection: &FilterSelection) -> String {
    let mut parts = Vec::new();
    push_repeated(&mut parts, "genre", &selection.genres);
    push_repeated(&mut parts, "platform", &selection.platforms);
    if let Some(year) = selection.year_start {
        parts.push(format!("year_start={}", year));
    }
    if let Some(year) = selection.year_end {
        parts.push(format!("year_end={}", year));
    }
    push_repeated(&mut parts, "op_years", &selection.op_years);
    push_repeated(&mut parts, "op_months", &selection.op_months);
    push_scalar(&mut parts, "tactical_focus", &selection.tactical_focus);
    push_scalar(&mut parts, "lifecycle_cohort", &selection.lifecycle_cohort);
    push_scalar(&mut parts, "evolution_metric", &selection.evolution_metric);
    parts.join("&")
}

/// "All" exclusivity for multi-selects: picking "All" clears everything
/// else, picking a concrete value drops "All", and emptying the selection
/// snaps back to "All".
pub fn apply_all_exclusivity(selected: &[String], toggled: &str, all_value: &str) -> Vec<String> {
    if toggled == all_value {
        return vec![all_value.to_string()];
    }
    let mut next: Vec<String> = selected
        .iter()
        .filter(|v| v.as_str() != all_value)
        .cloned()
        .collect();
    if let Some(pos) = next.iter().position(|v| v == toggled) {
        next.remove(pos);
    } else {
        next.push(toggled.to_string());
    }
    if next.is_empty() {
        next.push(all_value.to_string());
    }
    next
}
