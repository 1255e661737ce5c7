//! A/B comparison of content variants by engagement rate.

use serde::{Deserialize, Serialize};

use crate::analytics::engagement::PostMetrics;
use crate::models::content::ContentDraft;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantPerformance {
    pub variant: usize,
    pub engagement_rate: f64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbTestResult {
    pub winner: usize,
    pub performance_comparison: Vec<VariantPerformance>,
    pub recommendations: Vec<String>,
}

/// Picks the variant with the highest engagement rate.
///
/// Strict comparison: a later variant with an equal rate never displaces an
/// earlier one. Variants and metrics are paired positionally; unpaired
/// entries on either side are ignored. Recommendations only make sense when
/// there was an actual comparison, so single-variant input yields none.
pub fn select_winner(variants: &[ContentDraft], engagement_data: &[PostMetrics]) -> AbTestResult {
    let mut winner = 0;
    let mut best_rate = 0.0;

    let mut performance_comparison = Vec::new();
    for (i, (_variant, metrics)) in variants.iter().zip(engagement_data).enumerate() {
        performance_comparison.push(VariantPerformance {
            variant: i,
            engagement_rate: metrics.engagement_rate,
            likes: metrics.likes,
            comments: metrics.comments,
            shares: metrics.shares,
        });

        if metrics.engagement_rate > best_rate {
            best_rate = metrics.engagement_rate;
            winner = i;
        }
    }

    let mut recommendations = Vec::new();
    if variants.len() > 1 {
        recommendations.push("Use the winning variant as the base for future content".to_string());
        recommendations.push("Analyze what made the winning variant perform better".to_string());
    }

    AbTestResult {
        winner,
        performance_comparison,
        recommendations,
    }
}
