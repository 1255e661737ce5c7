//! Pre-publication engagement prediction from content type and hashtag count.

use serde::{Deserialize, Serialize};

/// Baseline engagement score per content type.
const BASE_SCORES: &[(&str, u32)] = &[
    ("text", 70),
    ("carousel", 85),
    ("article", 90),
    ("poll", 75),
];

const DEFAULT_BASE_SCORE: u32 = 70;
const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionFactors {
    pub content_type: String,
    pub base_score: u32,
    pub hashtag_bonus: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementPrediction {
    pub predicted_engagement_score: u32,
    pub factors: PredictionFactors,
}

/// Predicts an engagement score for a draft: per-type base plus a hashtag
/// bonus (3-5 tags is the sweet spot; more than 5 dilutes the bonus),
/// capped at 100.
pub fn predict_engagement(content_type: &str, hashtags: &[String]) -> EngagementPrediction {
    let base_score = BASE_SCORES
        .iter()
        .find(|(t, _)| *t == content_type)
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_BASE_SCORE);

    let hashtag_count = hashtags.len();
    let hashtag_bonus = if (3..=5).contains(&hashtag_count) {
        10
    } else if hashtag_count > 5 {
        5
    } else {
        0
    };

    EngagementPrediction {
        predicted_engagement_score: (base_score + hashtag_bonus).min(MAX_SCORE),
        factors: PredictionFactors {
            content_type: content_type.to_string(),
            base_score,
            hashtag_bonus,
        },
    }
}
