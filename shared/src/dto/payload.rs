//! The inbound data contract: one JSON object embedded by the server at
//! page-render time, with one optional array field per analytic facet.
//! Absent and empty arrays are treated identically downstream.

use crate::dto::records::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardPayload {
    pub stats: Option<Vec<KpiStat>>,
    pub top_games: Option<Vec<GameEntry>>,
    pub platform_counts: Option<Vec<CategoryCount>>,
    pub genre_counts: Option<Vec<CategoryCount>>,
    pub games_per_year: Option<Vec<TrendPoint>>,
    pub publisher_counts: Option<Vec<CategoryCount>>,
    pub avg_rating_platform: Option<Vec<CategoryRating>>,
    pub avg_rating_developer: Option<Vec<CategoryRating>>,
    pub director_analytics: Option<Vec<CategoryRating>>,
    pub game_type_distribution: Option<Vec<CategoryCount>>,
    pub rating_distribution: Option<Vec<DistributionBucket>>,
    pub votes_analytics: Option<Vec<DistributionBucket>>,
    pub most_voted_games: Option<Vec<GameEntry>>,
    pub collection_summary: Option<Vec<CategoryCount>>,
    pub recent_releases: Option<Vec<GameEntry>>,
    pub rating_trends: Option<Vec<TrendPoint>>,
    pub monthly_activity: Option<Vec<TrendPoint>>,
    pub platform_performance: Option<Vec<CategoryRating>>,
    pub top_rated_recent: Option<Vec<GameEntry>>,
    pub tactical_sankey_data: Option<Vec<FlowLink>>,
    pub tactical_venn_data: Option<Vec<SetOverlap>>,
    pub tactical_chord_data: Option<Vec<FlowLink>>,
    pub tactical_dumbbell_data: Option<Vec<RangePair>>,
    pub tactical_marimekko_data: Option<Vec<MekkoCell>>,
    pub tactical_developer_profiles: Option<Vec<ProfileRecord>>,
    pub tactical_matrix_data: Option<Vec<MatrixCell>>,
    pub lifecycle_survival_data: Option<Vec<TrendPoint>>,
    pub lifecycle_ridgeline_data: Option<Vec<StreamPoint>>,
    pub lifecycle_timeline_data: Option<Vec<RangePair>>,
    pub lifecycle_hexbin_data: Option<Vec<HexbinPoint>>,
    pub lifecycle_parallel_data: Option<Vec<ProfileRecord>>,
    pub evolution_stream_data: Option<Vec<StreamPoint>>,
    pub evolution_bubble_data: Option<Vec<BubblePoint>>,
    pub evolution_hexbin_data: Option<Vec<HexbinPoint>>,
    pub evolution_parallel_data: Option<Vec<ProfileRecord>>,
    pub evolution_tree_data: Option<Vec<TreePoint>>,
}
