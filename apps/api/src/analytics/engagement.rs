//! Engagement metrics — normalized performance numbers from raw post counters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::analytics::AnalyticsRow;
use crate::models::content::{default_content_type, ContentRow};

/// Per-post performance metrics with the derived engagement rate.
/// Deserialization defaults every field so partial snapshots from callers
/// are usable as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMetrics {
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub shares: i64,
    #[serde(default)]
    pub impressions: i64,
    #[serde(default)]
    pub reach: i64,
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub content_id: Option<Uuid>,
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

impl Default for PostMetrics {
    fn default() -> Self {
        Self {
            likes: 0,
            comments: 0,
            shares: 0,
            impressions: 0,
            reach: 0,
            engagement_rate: 0.0,
            content_id: None,
            content_type: default_content_type(),
        }
    }
}

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Engagement rate: (likes + comments + shares) / impressions * 100,
/// rounded to two decimals. Zero impressions yield 0.0 rather than an error.
pub fn engagement_rate(likes: i64, comments: i64, shares: i64, impressions: i64) -> f64 {
    if impressions == 0 {
        return 0.0;
    }
    let engagement = (likes + comments + shares) as f64;
    round2(engagement / impressions as f64 * 100.0)
}

/// Builds performance metrics for a content row from its analytics counters.
/// A content record with no analytics yet reads as all-zero counters; the
/// content id and type pass through unchanged.
pub fn performance_metrics(content: &ContentRow, analytics: Option<&AnalyticsRow>) -> PostMetrics {
    let likes = analytics.map_or(0, |a| a.likes);
    let comments = analytics.map_or(0, |a| a.comments);
    let shares = analytics.map_or(0, |a| a.shares);
    let impressions = analytics.map_or(0, |a| a.impressions);
    let reach = analytics.map_or(0, |a| a.reach);

    PostMetrics {
        likes,
        comments,
        shares,
        impressions,
        reach,
        engagement_rate: engagement_rate(likes, comments, shares, impressions),
        content_id: Some(content.id),
        content_type: content.content_type.clone(),
    }
}
