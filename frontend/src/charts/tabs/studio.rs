//! Studio performance tab: collection-wide counts, ratings and top lists.

use crate::charts::filter::filter_unwanted;
use crate::charts::palette::color_at;
use crate::charts::spec::{top_n_by, Axis, ChartKind, ChartSpec, Point, QualityTier, Series};
use crate::charts::tabs::{count_points, dual_axis_bar, period_order};
use crate::data::DashboardData;

const TOP_N: usize = 10;

fn count_chart(
    kind: ChartKind,
    title: &str,
    x_label: &str,
    records: &[shared::CategoryCount],
) -> Option<ChartSpec> {
    let shown = top_n_by(&filter_unwanted(records), TOP_N, |r| r.count);
    if shown.is_empty() {
        return None;
    }
    let labels: Vec<String> = shown.iter().map(|r| r.label.clone().unwrap_or_default()).collect();
    Some(
        ChartSpec::new(kind, title)
            .with_labels(labels)
            .with_axes(Axis::new(x_label), Axis::new("Games"))
            .with_series(Series::new("Games", color_at(0), count_points(&shown))),
    )
}

fn game_bar(title: &str, y_label: &str, games: &[shared::GameEntry]) -> Option<ChartSpec> {
    if games.is_empty() {
        return None;
    }
    let points = games
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let title_text = g.title.clone().unwrap_or_default();
            let tier = QualityTier::from_rating(g.rating);
            Point::labeled(&title_text, g.rating)
                .with_color(color_at(i))
                .with_tooltip(format!(
                    "{}: {:.1} ({}), {} votes",
                    title_text,
                    g.rating,
                    tier.label(),
                    g.votes
                ))
        })
        .collect();
    Some(
        ChartSpec::new(ChartKind::Bar, title)
            .with_axes(Axis::new("Game"), Axis::new(y_label))
            .with_series(Series::new(y_label, color_at(0), points)),
    )
}

pub fn top_games(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    let shown = top_n_by(&filter_unwanted(&data.top_games), TOP_N, |g| g.rating);
    Ok(game_bar("Top rated games", "Rating", &shown))
}

pub fn platform_counts(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    Ok(count_chart(
        ChartKind::Bar,
        "Games per platform",
        "Platform",
        &data.platform_counts,
    ))
}

pub fn genre_counts(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    Ok(count_chart(
        ChartKind::Doughnut,
        "Genre split",
        "Genre",
        &data.genre_counts,
    ))
}

pub fn games_per_year(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.games_per_year.is_empty() {
        return Ok(None);
    }
    let mut sorted = data.games_per_year.clone();
    sorted.sort_by(|a, b| period_order(a.period.as_ref(), b.period.as_ref()));
    let points = sorted
        .iter()
        .map(|p| {
            let year = p.period.as_ref().map(|v| v.as_text()).unwrap_or_default();
            Point::labeled(&year, p.count)
                .with_tooltip(format!("{}: {} releases", year, p.count))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Line, "Releases per year")
            .with_axes(Axis::new("Year"), Axis::new("Games"))
            .with_series(Series::new("Games", color_at(0), points)),
    ))
}

pub fn publisher_counts(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    Ok(count_chart(
        ChartKind::Bar,
        "Most prolific publishers",
        "Publisher",
        &data.publisher_counts,
    ))
}

fn tier_rating_bar(
    title: &str,
    x_label: &str,
    records: &[shared::CategoryRating],
) -> Option<ChartSpec> {
    if records.is_empty() {
        return None;
    }
    let points = records
        .iter()
        .map(|r| {
            let label = r.label.clone().unwrap_or_default();
            let tier = QualityTier::from_rating(r.avg_rating);
            Point::labeled(&label, r.avg_rating)
                .with_color(tier.color())
                .with_tooltip(format!(
                    "{}: {:.1} ({}) across {} games",
                    label,
                    r.avg_rating,
                    tier.label(),
                    r.count
                ))
        })
        .collect();
    Some(
        ChartSpec::new(ChartKind::Bar, title)
            .with_axes(Axis::new(x_label), Axis::new("Average rating"))
            .with_series(Series::new("Average rating", color_at(0), points)),
    )
}

pub fn avg_rating_platform(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    let shown = filter_unwanted(&data.avg_rating_platform);
    Ok(tier_rating_bar("Average rating per platform", "Platform", &shown))
}

pub fn avg_rating_developer(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    let shown = top_n_by(&filter_unwanted(&data.avg_rating_developer), TOP_N, |r| {
        r.avg_rating
    });
    Ok(tier_rating_bar("Best rated developers", "Developer", &shown))
}

pub fn director_analytics(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    let shown = top_n_by(&filter_unwanted(&data.director_analytics), TOP_N, |r| r.count);
    Ok(dual_axis_bar("Directors: acclaim vs output", "Director", &shown))
}

pub fn game_type_distribution(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    Ok(count_chart(
        ChartKind::Pie,
        "Game types",
        "Type",
        &data.game_type_distribution,
    ))
}

pub fn rating_distribution(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.rating_distribution.is_empty() {
        return Ok(None);
    }
    let points = data
        .rating_distribution
        .iter()
        .map(|b| {
            let bucket = b.bucket.as_ref().map(|v| v.as_text()).unwrap_or_default();
            // Bucket labels are rating values, so the tier color applies.
            let tier = QualityTier::from_rating(bucket.parse::<f64>().unwrap_or(0.0));
            Point::labeled(&bucket, b.count)
                .with_color(tier.color())
                .with_tooltip(format!("{} ({}): {} games", bucket, tier.label(), b.count))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Bar, "Rating distribution")
            .with_axes(Axis::new("Rating"), Axis::new("Games"))
            .with_series(Series::new("Games", color_at(0), points)),
    ))
}

pub fn votes_analytics(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    if data.votes_analytics.is_empty() {
        return Ok(None);
    }
    let points = data
        .votes_analytics
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let bucket = b.bucket.as_ref().map(|v| v.as_text()).unwrap_or_default();
            Point::labeled(&bucket, b.count)
                .with_color(color_at(i))
                .with_tooltip(format!("{}: {} games", bucket, b.count))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Bar, "Vote volume")
            // Vote counts span orders of magnitude.
            .with_axes(Axis::new("Votes"), Axis::log("Games"))
            .with_series(Series::new("Games", color_at(0), points)),
    ))
}

pub fn most_voted_games(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    let shown = top_n_by(&filter_unwanted(&data.most_voted_games), TOP_N, |g| g.votes);
    if shown.is_empty() {
        return Ok(None);
    }
    let points = shown
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let title = g.title.clone().unwrap_or_default();
            Point::labeled(&title, g.votes)
                .with_color(color_at(i))
                .with_tooltip(format!("{}: {} votes, rated {:.1}", title, g.votes, g.rating))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Bar, "Most voted games")
            .with_axes(Axis::new("Game"), Axis::new("Votes"))
            .with_series(Series::new("Votes", color_at(0), points)),
    ))
}

pub fn collection_summary(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    let shown = filter_unwanted(&data.collection_summary);
    if shown.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = shown.iter().map(|r| r.label.clone().unwrap_or_default()).collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Doughnut, "Collection breakdown")
            .with_labels(labels)
            .with_axes(Axis::new("Segment"), Axis::new("Games"))
            .with_series(Series::new("Games", color_at(0), count_points(&shown))),
    ))
}

pub fn recent_releases(data: &DashboardData) -> anyhow::Result<Option<ChartSpec>> {
    let shown = top_n_by(&filter_unwanted(&data.recent_releases), TOP_N, |g| {
        g.year.unwrap_or(0) as f64
    });
    if shown.is_empty() {
        return Ok(None);
    }
    let points = shown
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let title = g.title.clone().unwrap_or_default();
            let year = g.year.map(|y| y.to_string()).unwrap_or_default();
            Point::labeled(&title, g.rating)
                .with_color(color_at(i))
                .with_tooltip(format!("{} ({}): {:.1}", title, year, g.rating))
        })
        .collect();
    Ok(Some(
        ChartSpec::new(ChartKind::Bar, "Recent releases")
            .with_axes(Axis::new("Game"), Axis::new("Rating"))
            .with_series(Series::new("Rating", color_at(0), points)),
    ))
}
