//! Canonical record shapes for the dashboard payload.
//!
//! The server emits heterogeneous field names for the same concept
//! (`platform` vs `_id`, `count` vs `total`). Those variants are absorbed
//! here, once, with serde aliases, so downstream chart builders only ever
//! see one field name per concept. Records whose label arrives missing keep
//! `label: None` and are dropped during intake.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A label that may arrive as either a JSON string or a number
/// (e.g. `{"_id": 1998}` for a year bucket).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    Text(String),
    Num(f64),
}

impl LabelValue {
    pub fn as_text(&self) -> String {
        match self {
            LabelValue::Text(s) => s.clone(),
            LabelValue::Num(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }
}

/// Summary figure shown as a stat card (`stats` facet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiStat {
    #[serde(default, alias = "name", alias = "metric", alias = "_id")]
    pub label: Option<String>,
    #[serde(default, alias = "count", alias = "total")]
    pub value: f64,
    #[serde(default, alias = "subtitle")]
    pub description: Option<String>,
}

/// One category with an occurrence count (platforms, genres, publishers...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(
        default,
        alias = "_id",
        alias = "platform",
        alias = "genre",
        alias = "publisher",
        alias = "type",
        alias = "name"
    )]
    pub label: Option<String>,
    #[serde(default, alias = "total", alias = "value", alias = "games")]
    pub count: f64,
}

/// One category with an average rating and a sample count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRating {
    #[serde(
        default,
        alias = "_id",
        alias = "platform",
        alias = "developer",
        alias = "director",
        alias = "name"
    )]
    pub label: Option<String>,
    #[serde(
        default,
        alias = "avgRating",
        alias = "averageRating",
        alias = "rating"
    )]
    pub avg_rating: f64,
    #[serde(default, alias = "total", alias = "games")]
    pub count: f64,
}

/// One game row (top lists, recent releases).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    #[serde(default, alias = "name", alias = "_id", alias = "primaryTitle")]
    pub title: Option<String>,
    #[serde(default, alias = "averageRating", alias = "avg_rating")]
    pub rating: f64,
    #[serde(default, alias = "numVotes", alias = "voteCount")]
    pub votes: f64,
    #[serde(default, alias = "startYear", alias = "releaseYear")]
    pub year: Option<i32>,
}

/// One point on a time series (trends, monthly activity, games per year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(
        default,
        alias = "_id",
        alias = "month",
        alias = "year",
        alias = "date"
    )]
    pub period: Option<LabelValue>,
    #[serde(default, alias = "avgRating", alias = "averageRating")]
    pub rating: f64,
    #[serde(default, alias = "total", alias = "games")]
    pub count: f64,
}

/// One histogram bucket (rating distribution, votes analytics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionBucket {
    #[serde(default, alias = "_id", alias = "range", alias = "label")]
    pub bucket: Option<LabelValue>,
    #[serde(default, alias = "total")]
    pub count: f64,
}

/// A weighted source→target link (sankey, chord).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLink {
    #[serde(default, alias = "from")]
    pub source: Option<String>,
    #[serde(default, alias = "to")]
    pub target: Option<String>,
    #[serde(default, alias = "value", alias = "count")]
    pub weight: f64,
}

/// One set-intersection region (venn).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetOverlap {
    #[serde(default)]
    pub sets: Vec<String>,
    #[serde(default, alias = "count", alias = "value")]
    pub size: f64,
}

/// A labelled start/end pair (dumbbell, lifecycle timeline spans).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangePair {
    #[serde(default, alias = "_id", alias = "name", alias = "developer")]
    pub label: Option<String>,
    #[serde(default, alias = "from", alias = "startYear", alias = "first")]
    pub start: f64,
    #[serde(default, alias = "to", alias = "endYear", alias = "last")]
    pub end: f64,
}

/// One cell of a marimekko mosaic: a segment share within a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MekkoCell {
    #[serde(default, alias = "x", alias = "category")]
    pub column: Option<String>,
    #[serde(default, alias = "y", alias = "series")]
    pub segment: Option<String>,
    #[serde(default, alias = "count", alias = "weight")]
    pub value: f64,
}

/// Multi-metric profile of a studio or cohort (radar / parallel axes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, alias = "_id", alias = "name", alias = "developer", alias = "studio")]
    pub label: Option<String>,
    #[serde(default, alias = "axes", alias = "values")]
    pub metrics: BTreeMap<String, f64>,
}

/// One cell of a row × column value grid (tactical matrix).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    #[serde(default, alias = "country", alias = "x")]
    pub row: Option<String>,
    #[serde(default, alias = "archetype", alias = "category", alias = "y")]
    pub col: Option<String>,
    #[serde(default, alias = "count", alias = "score")]
    pub value: f64,
}

/// One aggregated bin of a density plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexbinPoint {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, alias = "value", alias = "n")]
    pub count: f64,
}

/// One (period, series) contribution of a streamgraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamPoint {
    #[serde(default, alias = "_id", alias = "year")]
    pub period: Option<LabelValue>,
    #[serde(default, alias = "key", alias = "name", alias = "genre")]
    pub series: Option<String>,
    #[serde(default, alias = "count", alias = "total")]
    pub value: f64,
}

/// One bubble: position plus magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubblePoint {
    #[serde(default, alias = "name", alias = "_id", alias = "title")]
    pub label: Option<String>,
    #[serde(default, alias = "year")]
    pub x: f64,
    #[serde(default, alias = "rating")]
    pub y: f64,
    #[serde(default, alias = "votes", alias = "size", alias = "count")]
    pub r: f64,
}

/// One node of a hierarchy (evolution tree).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreePoint {
    #[serde(default, alias = "_id", alias = "label")]
    pub name: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default, alias = "count", alias = "size")]
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    #[test]
    fn test_category_count_alias_variants_normalize_identically() {
        let a: CategoryCount = serde_json::from_value(json!({"platform": "PC", "total": 5})).unwrap();
        let b: CategoryCount = serde_json::from_value(json!({"_id": "PC", "count": 5})).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.label.as_deref(), Some("PC"));
        assert_eq!(a.count, 5.0);
    }

    #[test]
    fn test_missing_label_deserializes_to_none() {
        let rec: CategoryCount = serde_json::from_value(json!({"count": 3})).unwrap();
        assert_eq!(rec.label, None);
        assert_eq!(rec.count, 3.0);
    }

    #[test]
    fn test_numeric_label_value() {
        let point: TrendPoint = serde_json::from_value(json!({"_id": 1998, "count": 12})).unwrap();
        assert_eq!(point.period.as_ref().map(|p| p.as_text()).as_deref(), Some("1998"));
        assert_eq!(point.count, 12.0);

        let fractional = LabelValue::Num(7.5);
        assert_eq!(fractional.as_text(), "7.5");
    }

    #[test]
    fn test_game_entry_alias_variants() {
        let game: GameEntry = serde_json::from_value(json!({
            "primaryTitle": "Outer Wilds",
            "averageRating": 8.6,
            "numVotes": 34000,
            "startYear": 2019
        }))
        .unwrap();
        assert_eq!(game.title.as_deref(), Some("Outer Wilds"));
        assert_eq!(game.rating, 8.6);
        assert_eq!(game.votes, 34000.0);
        assert_eq!(game.year, Some(2019));
    }

    #[test]
    fn test_flow_link_from_to_aliases() {
        let link: FlowLink =
            serde_json::from_value(json!({"from": "RPG", "to": "PC", "value": 42})).unwrap();
        assert_eq!(link.source.as_deref(), Some("RPG"));
        assert_eq!(link.target.as_deref(), Some("PC"));
        assert_eq!(link.weight, 42.0);
    }

    #[test]
    fn test_profile_record_metrics_map() {
        let rec: ProfileRecord = serde_json::from_value(json!({
            "studio": "FromSoftware",
            "metrics": {"output": 72.0, "acclaim": 91.5}
        }))
        .unwrap();
        assert_eq!(rec.label.as_deref(), Some("FromSoftware"));
        assert_eq!(rec.metrics.get("acclaim"), Some(&91.5));
    }

    #[test]
    fn test_matrix_cell_country_archetype_aliases() {
        let cell: MatrixCell = serde_json::from_value(json!({
            "country": "Japan",
            "archetype": "Auteur house",
            "score": 3.0
        }))
        .unwrap();
        assert_eq!(cell.row.as_deref(), Some("Japan"));
        assert_eq!(cell.col.as_deref(), Some("Auteur house"));
        assert_eq!(cell.value, 3.0);
    }
}
