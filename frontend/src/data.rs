//! Data intake: turns the server-embedded payload into one immutable
//! [`DashboardData`] value that the whole dispatch pass reads by reference.
//! Built once per page load; a filter change navigates and rebuilds it.

use shared::{
    BubblePoint, CategoryCount, CategoryRating, DashboardError, DashboardPayload,
    DistributionBucket, FlowLink, GameEntry, HexbinPoint, KpiStat, MatrixCell, MekkoCell,
    ProfileRecord, RangePair, SetOverlap, StreamPoint, TreePoint, TrendPoint,
};

/// Id of the script element the server embeds the payload JSON into.
pub const PAYLOAD_ELEMENT_ID: &str = "dashboard-data";

/// Countries used for the synthesized tactical matrix sample.
const SAMPLE_COUNTRIES: &[&str] = &[
    "United States",
    "Japan",
    "United Kingdom",
    "Germany",
    "France",
    "Canada",
    "Sweden",
    "Poland",
];

/// Studio archetypes crossed with [`SAMPLE_COUNTRIES`] for the sample.
const SAMPLE_ARCHETYPES: &[&str] = &[
    "Indie collective",
    "Mid-size specialist",
    "AAA powerhouse",
    "Auteur house",
    "Port shop",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub stats: Vec<KpiStat>,
    pub top_games: Vec<GameEntry>,
    pub platform_counts: Vec<CategoryCount>,
    pub genre_counts: Vec<CategoryCount>,
    pub games_per_year: Vec<TrendPoint>,
    pub publisher_counts: Vec<CategoryCount>,
    pub avg_rating_platform: Vec<CategoryRating>,
    pub avg_rating_developer: Vec<CategoryRating>,
    pub director_analytics: Vec<CategoryRating>,
    pub game_type_distribution: Vec<CategoryCount>,
    pub rating_distribution: Vec<DistributionBucket>,
    pub votes_analytics: Vec<DistributionBucket>,
    pub most_voted_games: Vec<GameEntry>,
    pub collection_summary: Vec<CategoryCount>,
    pub recent_releases: Vec<GameEntry>,
    pub rating_trends: Vec<TrendPoint>,
    pub monthly_activity: Vec<TrendPoint>,
    pub platform_performance: Vec<CategoryRating>,
    pub top_rated_recent: Vec<GameEntry>,
    pub tactical_sankey: Vec<FlowLink>,
    pub tactical_venn: Vec<SetOverlap>,
    pub tactical_chord: Vec<FlowLink>,
    pub tactical_dumbbell: Vec<RangePair>,
    pub tactical_marimekko: Vec<MekkoCell>,
    pub tactical_developer_profiles: Vec<ProfileRecord>,
    pub tactical_matrix: Vec<MatrixCell>,
    pub lifecycle_survival: Vec<TrendPoint>,
    pub lifecycle_ridgeline: Vec<StreamPoint>,
    pub lifecycle_timeline: Vec<RangePair>,
    pub lifecycle_hexbin: Vec<HexbinPoint>,
    pub lifecycle_parallel: Vec<ProfileRecord>,
    pub evolution_stream: Vec<StreamPoint>,
    pub evolution_bubble: Vec<BubblePoint>,
    pub evolution_hexbin: Vec<HexbinPoint>,
    pub evolution_parallel: Vec<ProfileRecord>,
    pub evolution_tree: Vec<TreePoint>,
}

fn present<T>(field: Option<Vec<T>>) -> Vec<T> {
    field.unwrap_or_default()
}

fn keep<T, F: Fn(&T) -> bool>(field: Option<Vec<T>>, pred: F) -> Vec<T> {
    let mut records = field.unwrap_or_default();
    records.retain(|r| pred(r));
    records
}

impl DashboardData {
    /// Normalizes the payload: absent fields become empty vectors, records
    /// missing their identifying field are dropped, and the tactical matrix
    /// falls back to a synthesized sample when the server sends nothing.
    /// Idempotent: the same payload always yields the same value.
    pub fn from_payload(payload: DashboardPayload) -> Self {
        let matrix = keep(payload.tactical_matrix_data, |c: &MatrixCell| {
            c.row.is_some() && c.col.is_some()
        });
        Self {
            stats: keep(payload.stats, |s: &KpiStat| s.label.is_some()),
            top_games: keep(payload.top_games, |g: &GameEntry| g.title.is_some()),
            platform_counts: keep(payload.platform_counts, |c| c.label.is_some()),
            genre_counts: keep(payload.genre_counts, |c| c.label.is_some()),
            games_per_year: keep(payload.games_per_year, |p: &TrendPoint| p.period.is_some()),
            publisher_counts: keep(payload.publisher_counts, |c| c.label.is_some()),
            avg_rating_platform: keep(payload.avg_rating_platform, |r| r.label.is_some()),
            avg_rating_developer: keep(payload.avg_rating_developer, |r| r.label.is_some()),
            director_analytics: keep(payload.director_analytics, |r| r.label.is_some()),
            game_type_distribution: keep(payload.game_type_distribution, |c| c.label.is_some()),
            rating_distribution: keep(payload.rating_distribution, |b: &DistributionBucket| {
                b.bucket.is_some()
            }),
            votes_analytics: keep(payload.votes_analytics, |b| b.bucket.is_some()),
            most_voted_games: keep(payload.most_voted_games, |g| g.title.is_some()),
            collection_summary: keep(payload.collection_summary, |c| c.label.is_some()),
            recent_releases: keep(payload.recent_releases, |g| g.title.is_some()),
            rating_trends: keep(payload.rating_trends, |p| p.period.is_some()),
            monthly_activity: keep(payload.monthly_activity, |p| p.period.is_some()),
            platform_performance: keep(payload.platform_performance, |r| r.label.is_some()),
            top_rated_recent: keep(payload.top_rated_recent, |g| g.title.is_some()),
            tactical_sankey: keep(payload.tactical_sankey_data, |l: &FlowLink| {
                l.source.is_some() && l.target.is_some()
            }),
            tactical_venn: keep(payload.tactical_venn_data, |o: &SetOverlap| !o.sets.is_empty()),
            tactical_chord: keep(payload.tactical_chord_data, |l: &FlowLink| {
                l.source.is_some() && l.target.is_some()
            }),
            tactical_dumbbell: keep(payload.tactical_dumbbell_data, |r: &RangePair| {
                r.label.is_some()
            }),
            tactical_marimekko: keep(payload.tactical_marimekko_data, |c: &MekkoCell| {
                c.column.is_some() && c.segment.is_some()
            }),
            tactical_developer_profiles: keep(payload.tactical_developer_profiles, |p| {
                p.label.is_some()
            }),
            tactical_matrix: if matrix.is_empty() { sample_matrix() } else { matrix },
            lifecycle_survival: keep(payload.lifecycle_survival_data, |p| p.period.is_some()),
            lifecycle_ridgeline: keep(payload.lifecycle_ridgeline_data, |p: &StreamPoint| {
                p.period.is_some() && p.series.is_some()
            }),
            lifecycle_timeline: keep(payload.lifecycle_timeline_data, |r| r.label.is_some()),
            lifecycle_hexbin: present(payload.lifecycle_hexbin_data),
            lifecycle_parallel: keep(payload.lifecycle_parallel_data, |p| p.label.is_some()),
            evolution_stream: keep(payload.evolution_stream_data, |p: &StreamPoint| {
                p.period.is_some() && p.series.is_some()
            }),
            evolution_bubble: present(payload.evolution_bubble_data),
            evolution_hexbin: present(payload.evolution_hexbin_data),
            evolution_parallel: keep(payload.evolution_parallel_data, |p| p.label.is_some()),
            evolution_tree: keep(payload.evolution_tree_data, |n: &TreePoint| n.name.is_some()),
        }
    }
}

/// Demo sample for the tactical matrix: the countries × archetypes
/// cross-product with bounded pseudo-random studio counts. Fixed seed, so
/// the sample is identical on every page load.
pub fn sample_matrix() -> Vec<MatrixCell> {
    let mut state: u32 = 0x9E37_79B9;
    let mut next = move || {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    let mut cells = Vec::with_capacity(SAMPLE_COUNTRIES.len() * SAMPLE_ARCHETYPES.len());
    for country in SAMPLE_COUNTRIES {
        for archetype in SAMPLE_ARCHETYPES {
            cells.push(MatrixCell {
                row: Some((*country).to_string()),
                col: Some((*archetype).to_string()),
                value: (1 + next() % 9) as f64,
            });
        }
    }
    cells
}

/// Reads the JSON payload the server embedded in the page markup.
pub fn read_embedded_payload() -> shared::Result<DashboardPayload> {
    let document = gloo_utils::document();
    let element = document
        .get_element_by_id(PAYLOAD_ELEMENT_ID)
        .ok_or_else(|| DashboardError::Payload(format!("#{} not found", PAYLOAD_ELEMENT_ID)))?;
    let text = element.text_content().unwrap_or_default();
    let payload = serde_json::from_str(&text)?;
    Ok(payload)
}

/// Intake entry point for the page: parse failures are logged and degrade
/// to an all-empty dataset so every chart shows its placeholder instead of
/// taking the page down.
pub fn read_dashboard_data() -> DashboardData {
    match read_embedded_payload() {
        Ok(payload) => DashboardData::from_payload(payload),
        Err(e) => {
            log::error!("failed to read embedded dashboard payload: {}", e);
            DashboardData::from_payload(DashboardPayload::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    fn payload_from(value: serde_json::Value) -> DashboardPayload {
        serde_json::from_value(value).expect("payload")
    }

    #[test]
    fn test_absent_and_empty_fields_both_normalize_to_empty() {
        let absent = DashboardData::from_payload(payload_from(json!({})));
        let empty = DashboardData::from_payload(payload_from(json!({
            "platformCounts": [],
            "genreCounts": []
        })));
        assert_eq!(absent.platform_counts, empty.platform_counts);
        assert!(absent.genre_counts.is_empty());
    }

    #[test]
    fn test_intake_is_idempotent() {
        let value = json!({
            "platformCounts": [{"_id": "PC", "count": 7}],
            "topGames": [{"title": "Hades", "rating": 8.9, "votes": 120}]
        });
        let a = DashboardData::from_payload(payload_from(value.clone()));
        let b = DashboardData::from_payload(payload_from(value));
        assert_eq!(a, b);
    }

    #[test]
    fn test_records_missing_identifying_field_dropped_at_intake() {
        let data = DashboardData::from_payload(payload_from(json!({
            "platformCounts": [{"count": 3}, {"_id": "PC", "count": 7}],
            "tacticalSankeyData": [{"from": "RPG", "weight": 2}],
            "evolutionTreeData": [{"value": 9}]
        })));
        assert_eq!(data.platform_counts.len(), 1);
        assert!(data.tactical_sankey.is_empty());
        assert!(data.evolution_tree.is_empty());
    }

    #[test]
    fn test_matrix_fallback_when_absent_or_empty() {
        let absent = DashboardData::from_payload(payload_from(json!({})));
        let empty = DashboardData::from_payload(payload_from(json!({"tacticalMatrixData": []})));
        let expected = SAMPLE_COUNTRIES.len() * SAMPLE_ARCHETYPES.len();
        assert_eq!(absent.tactical_matrix.len(), expected);
        assert_eq!(absent.tactical_matrix, empty.tactical_matrix);
    }

    #[test]
    fn test_matrix_server_value_wins_when_non_empty() {
        let data = DashboardData::from_payload(payload_from(json!({
            "tacticalMatrixData": [{"country": "Japan", "archetype": "Auteur house", "value": 4}]
        })));
        assert_eq!(data.tactical_matrix.len(), 1);
        assert_eq!(data.tactical_matrix[0].row.as_deref(), Some("Japan"));
    }

    #[test]
    fn test_sample_matrix_deterministic_and_bounded() {
        let a = sample_matrix();
        let b = sample_matrix();
        assert_eq!(a, b);
        for cell in &a {
            assert!(cell.value >= 1.0 && cell.value <= 9.0, "value {}", cell.value);
        }
    }
}
