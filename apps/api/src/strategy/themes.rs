//! Content theme suggestion from profile themes and industry trends.

use crate::profile::analysis::ProfileAnalysis;
use crate::strategy::trends::TrendingTopic;

const MAX_THEMES: usize = 10;
const TOP_TRENDS: usize = 3;

/// Combines the user's own content themes with the top trending topics,
/// deduplicated in first-encountered order and capped at ten.
pub fn suggest_content_themes(
    analysis: &ProfileAnalysis,
    industry_trends: &[TrendingTopic],
) -> Vec<String> {
    let mut themes: Vec<String> = Vec::new();

    let candidates = analysis
        .content_themes
        .iter()
        .cloned()
        .chain(industry_trends.iter().take(TOP_TRENDS).map(|t| t.topic.clone()));

    for candidate in candidates {
        if !themes.contains(&candidate) {
            themes.push(candidate);
        }
    }

    themes.truncate(MAX_THEMES);
    themes
}
