//! Post-hoc improvement recommendations from observed engagement.

use crate::analytics::engagement::PostMetrics;
use crate::models::content::ContentDraft;

/// Recommends improvements for a piece of content given its metrics.
///
/// Rate bands, body length, and hashtag count each contribute
/// independently; every applicable recommendation accumulates — there is no
/// early exit and no recommendation for factors inside their good band.
pub fn recommend_improvements(draft: &ContentDraft, metrics: &PostMetrics) -> Vec<String> {
    let mut recommendations = Vec::new();
    let rate = metrics.engagement_rate;

    if rate < 2.0 {
        recommendations.push("Consider using more engaging headlines".to_string());
        recommendations.push("Try asking questions to encourage comments".to_string());
    }
    if (2.0..5.0).contains(&rate) {
        recommendations.push("Add relevant hashtags to increase discoverability".to_string());
        recommendations.push("Include a clear call-to-action".to_string());
    }
    if rate >= 5.0 {
        recommendations.push("Keep creating content like this - it's performing well!".to_string());
    }

    let body_length = draft.body.chars().count();
    if body_length < 100 {
        recommendations.push("Consider adding more depth to your content".to_string());
    } else if body_length > 3000 {
        recommendations.push(
            "Content might be too long - consider breaking it into multiple posts".to_string(),
        );
    }

    let hashtag_count = draft.hashtags.len();
    if hashtag_count < 3 {
        recommendations.push("Add more relevant hashtags to increase reach".to_string());
    } else if hashtag_count > 10 {
        recommendations
            .push("Too many hashtags can reduce engagement - consider using fewer".to_string());
    }

    recommendations
}
