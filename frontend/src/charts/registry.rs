//! Declarative chart registry: one table row per chart, mapping a dataset
//! to its tab, its container element and its builder. Adding a chart means
//! adding a row here; the dispatcher and the page read the table.

use crate::charts::spec::ChartSpec;
use crate::charts::tabs::{evolution, lifecycle, operational, revenue, studio, tactical};
use crate::data::DashboardData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Studio,
    Operational,
    Tactical,
    Lifecycle,
    Evolution,
    Revenue,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Studio,
            Tab::Operational,
            Tab::Tactical,
            Tab::Lifecycle,
            Tab::Evolution,
            Tab::Revenue,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Studio => "Studio Performance",
            Tab::Operational => "Operational Intelligence",
            Tab::Tactical => "Tactical Analysis",
            Tab::Lifecycle => "Franchise Lifecycle",
            Tab::Evolution => "Genre Evolution",
            Tab::Revenue => "Revenue Demo",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Studio => "studio",
            Tab::Operational => "operational",
            Tab::Tactical => "tactical",
            Tab::Lifecycle => "lifecycle",
            Tab::Evolution => "evolution",
            Tab::Revenue => "revenue",
        }
    }
}

type Builder = fn(&DashboardData) -> anyhow::Result<Option<ChartSpec>>;

pub struct ChartEntry {
    pub name: &'static str,
    pub container_id: &'static str,
    pub tab: Tab,
    pub build: Builder,
}

/// Every chart on the dashboard. Container ids match the divs the page
/// renders for the active tab.
pub const CHARTS: &[ChartEntry] = &[
    // Studio performance
    ChartEntry { name: "top_games", container_id: "top-games-chart", tab: Tab::Studio, build: studio::top_games },
    ChartEntry { name: "platform_counts", container_id: "platform-counts-chart", tab: Tab::Studio, build: studio::platform_counts },
    ChartEntry { name: "genre_counts", container_id: "genre-counts-chart", tab: Tab::Studio, build: studio::genre_counts },
    ChartEntry { name: "games_per_year", container_id: "games-per-year-chart", tab: Tab::Studio, build: studio::games_per_year },
    ChartEntry { name: "publisher_counts", container_id: "publisher-counts-chart", tab: Tab::Studio, build: studio::publisher_counts },
    ChartEntry { name: "avg_rating_platform", container_id: "avg-rating-platform-chart", tab: Tab::Studio, build: studio::avg_rating_platform },
    ChartEntry { name: "avg_rating_developer", container_id: "avg-rating-developer-chart", tab: Tab::Studio, build: studio::avg_rating_developer },
    ChartEntry { name: "director_analytics", container_id: "director-analytics-chart", tab: Tab::Studio, build: studio::director_analytics },
    ChartEntry { name: "game_type_distribution", container_id: "game-type-distribution-chart", tab: Tab::Studio, build: studio::game_type_distribution },
    ChartEntry { name: "rating_distribution", container_id: "rating-distribution-chart", tab: Tab::Studio, build: studio::rating_distribution },
    ChartEntry { name: "votes_analytics", container_id: "votes-analytics-chart", tab: Tab::Studio, build: studio::votes_analytics },
    ChartEntry { name: "most_voted_games", container_id: "most-voted-games-chart", tab: Tab::Studio, build: studio::most_voted_games },
    ChartEntry { name: "collection_summary", container_id: "collection-summary-chart", tab: Tab::Studio, build: studio::collection_summary },
    ChartEntry { name: "recent_releases", container_id: "recent-releases-chart", tab: Tab::Studio, build: studio::recent_releases },
    // Operational intelligence
    ChartEntry { name: "rating_trends", container_id: "rating-trends-chart", tab: Tab::Operational, build: operational::rating_trends },
    ChartEntry { name: "monthly_activity", container_id: "monthly-activity-chart", tab: Tab::Operational, build: operational::monthly_activity },
    ChartEntry { name: "platform_performance", container_id: "platform-performance-chart", tab: Tab::Operational, build: operational::platform_performance },
    ChartEntry { name: "top_rated_recent", container_id: "top-rated-recent-chart", tab: Tab::Operational, build: operational::top_rated_recent },
    // Tactical analysis
    ChartEntry { name: "tactical_sankey", container_id: "tactical-sankey-chart", tab: Tab::Tactical, build: tactical::sankey },
    ChartEntry { name: "tactical_venn", container_id: "tactical-venn-chart", tab: Tab::Tactical, build: tactical::venn },
    ChartEntry { name: "tactical_chord", container_id: "tactical-chord-chart", tab: Tab::Tactical, build: tactical::chord },
    ChartEntry { name: "tactical_dumbbell", container_id: "tactical-dumbbell-chart", tab: Tab::Tactical, build: tactical::dumbbell },
    ChartEntry { name: "tactical_marimekko", container_id: "tactical-marimekko-chart", tab: Tab::Tactical, build: tactical::marimekko },
    ChartEntry { name: "tactical_developer_profiles", container_id: "tactical-developer-profiles-chart", tab: Tab::Tactical, build: tactical::developer_profiles },
    ChartEntry { name: "tactical_matrix", container_id: "tactical-matrix-chart", tab: Tab::Tactical, build: tactical::matrix },
    // Franchise lifecycle
    ChartEntry { name: "lifecycle_survival", container_id: "lifecycle-survival-chart", tab: Tab::Lifecycle, build: lifecycle::survival },
    ChartEntry { name: "lifecycle_ridgeline", container_id: "lifecycle-ridgeline-chart", tab: Tab::Lifecycle, build: lifecycle::ridgeline },
    ChartEntry { name: "lifecycle_timeline", container_id: "lifecycle-timeline-chart", tab: Tab::Lifecycle, build: lifecycle::timeline },
    ChartEntry { name: "lifecycle_hexbin", container_id: "lifecycle-hexbin-chart", tab: Tab::Lifecycle, build: lifecycle::hexbin },
    ChartEntry { name: "lifecycle_parallel", container_id: "lifecycle-parallel-chart", tab: Tab::Lifecycle, build: lifecycle::parallel },
    // Genre evolution
    ChartEntry { name: "evolution_stream", container_id: "evolution-stream-chart", tab: Tab::Evolution, build: evolution::stream },
    ChartEntry { name: "evolution_bubble", container_id: "evolution-bubble-chart", tab: Tab::Evolution, build: evolution::bubble },
    ChartEntry { name: "evolution_hexbin", container_id: "evolution-hexbin-chart", tab: Tab::Evolution, build: evolution::hexbin },
    ChartEntry { name: "evolution_parallel", container_id: "evolution-parallel-chart", tab: Tab::Evolution, build: evolution::parallel },
    ChartEntry { name: "evolution_tree", container_id: "evolution-tree-chart", tab: Tab::Evolution, build: evolution::tree },
    // Revenue demo
    ChartEntry { name: "revenue_quarterly", container_id: "revenue-quarterly-chart", tab: Tab::Revenue, build: revenue::quarterly },
    ChartEntry { name: "revenue_segments", container_id: "revenue-segments-chart", tab: Tab::Revenue, build: revenue::segments },
];

/// Registry rows belonging to one tab, in declaration order.
pub fn charts_for_tab(tab: Tab) -> impl Iterator<Item = &'static ChartEntry> {
    CHARTS.iter().filter(move |entry| entry.tab == tab)
}
