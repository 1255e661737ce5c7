//! Draft factor analysis — engagement score and per-factor recommendations.

use serde::{Deserialize, Serialize};

use crate::models::content::ContentDraft;

/// Keywords that correlate with stronger engagement. Matched
/// case-insensitively as substrings of the body.
const ENGAGEMENT_KEYWORDS: &[&str] = &[
    "AI",
    "Machine Learning",
    "Data Science",
    "Technology",
    "Innovation",
];

const BASE_SCORE: u32 = 50;
const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementFactors {
    pub title_length: usize,
    pub body_length: usize,
    pub hashtag_count: usize,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementFactorAnalysis {
    pub factors: EngagementFactors,
    pub engagement_score: u32,
    pub recommendations: Vec<String>,
}

/// Scores a draft from its measurable factors.
///
/// The score starts at 50 and accumulates: +10 for a title of 21-59 chars,
/// +15 for a body of 201-1499 chars, +10 for 3-7 hashtags, +2 per matched
/// keyword, capped at 100. Recommendations are derived from their own
/// (wider) factor bands, independently of the score.
pub fn analyze_factors(draft: &ContentDraft) -> EngagementFactorAnalysis {
    let mut recommendations = Vec::new();

    // Lengths are counted in characters, not bytes.
    let title_length = draft.title.as_deref().unwrap_or("").chars().count();
    if title_length < 20 {
        recommendations.push("Title is short - consider making it more descriptive".to_string());
    } else if title_length > 60 {
        recommendations.push("Title is long - consider making it more concise".to_string());
    }

    let body_length = draft.body.chars().count();
    if body_length < 100 {
        recommendations.push("Content body is short - consider adding more value".to_string());
    } else if body_length > 2000 {
        recommendations
            .push("Content body is long - consider breaking it into sections".to_string());
    }

    let hashtag_count = draft.hashtags.len();
    if hashtag_count < 3 {
        recommendations.push("Use more hashtags to increase discoverability".to_string());
    } else if hashtag_count > 10 {
        recommendations
            .push("Too many hashtags can reduce engagement - consider using fewer".to_string());
    }

    let body_lower = draft.body.to_lowercase();
    let keywords: Vec<String> = ENGAGEMENT_KEYWORDS
        .iter()
        .filter(|kw| body_lower.contains(&kw.to_lowercase()))
        .map(|kw| kw.to_string())
        .collect();

    let mut engagement_score = BASE_SCORE;
    if title_length > 20 && title_length < 60 {
        engagement_score += 10;
    }
    if body_length > 200 && body_length < 1500 {
        engagement_score += 15;
    }
    if (3..=7).contains(&hashtag_count) {
        engagement_score += 10;
    }
    engagement_score += keywords.len() as u32 * 2;

    EngagementFactorAnalysis {
        factors: EngagementFactors {
            title_length,
            body_length,
            hashtag_count,
            keywords,
        },
        engagement_score: engagement_score.min(MAX_SCORE),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title_len: usize, body: String, hashtag_count: usize) -> ContentDraft {
        ContentDraft {
            title: Some("t".repeat(title_len)),
            body,
            content_type: "text".to_string(),
            hashtags: (0..hashtag_count).map(|i| format!("#tag{i}")).collect(),
        }
    }

    #[test]
    fn test_all_factors_in_band_with_one_keyword() {
        // 50 base + 10 title + 15 body + 10 hashtags + 2 for "AI" = 87
        let body = format!("AI {}", "x".repeat(297));
        let analysis = analyze_factors(&draft(25, body, 5));

        assert_eq!(analysis.factors.title_length, 25);
        assert_eq!(analysis.factors.body_length, 300);
        assert_eq!(analysis.factors.hashtag_count, 5);
        assert_eq!(analysis.factors.keywords, vec!["AI"]);
        assert_eq!(analysis.engagement_score, 87);
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_base_score_when_everything_out_of_band() {
        let analysis = analyze_factors(&draft(5, "short".to_string(), 0));
        assert_eq!(analysis.engagement_score, 50);
        assert_eq!(analysis.recommendations.len(), 3);
    }

    #[test]
    fn test_title_band_is_exclusive() {
        // Exactly 20 chars earns no title bonus (strict comparison).
        let body = "x".repeat(300);
        let at_20 = analyze_factors(&draft(20, body.clone(), 5));
        let at_21 = analyze_factors(&draft(21, body, 5));
        assert_eq!(at_21.engagement_score - at_20.engagement_score, 10);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let body = format!(
            "machine learning and data science in practice {}",
            "x".repeat(260)
        );
        let analysis = analyze_factors(&draft(25, body, 5));
        assert_eq!(
            analysis.factors.keywords,
            vec!["Machine Learning", "Data Science"]
        );
    }

    #[test]
    fn test_keywords_keep_canonical_casing() {
        let body = format!("all about TECHNOLOGY {}", "x".repeat(280));
        let analysis = analyze_factors(&draft(25, body, 5));
        assert_eq!(analysis.factors.keywords, vec!["Technology"]);
    }

    #[test]
    fn test_score_capped_at_100() {
        // 50 + 10 + 15 + 10 + 5*2 = 95; pad the body with every keyword and
        // verify the cap holds even as factors stack.
        let body = format!(
            "AI Machine Learning Data Science Technology Innovation {}",
            "x".repeat(250)
        );
        let analysis = analyze_factors(&draft(25, body, 5));
        assert_eq!(analysis.engagement_score, 95);
        assert!(analysis.engagement_score <= 100);
    }

    #[test]
    fn test_missing_title_counts_as_zero_length() {
        let mut d = draft(0, "x".repeat(300), 5);
        d.title = None;
        let analysis = analyze_factors(&d);
        assert_eq!(analysis.factors.title_length, 0);
        assert!(analysis
            .recommendations
            .contains(&"Title is short - consider making it more descriptive".to_string()));
    }

    #[test]
    fn test_long_title_and_long_body_recommendations() {
        let analysis = analyze_factors(&draft(70, "x".repeat(2500), 5));
        assert!(analysis
            .recommendations
            .contains(&"Title is long - consider making it more concise".to_string()));
        assert!(analysis
            .recommendations
            .contains(&"Content body is long - consider breaking it into sections".to_string()));
    }

    #[test]
    fn test_recommendation_body_band_differs_from_score_band() {
        // 150 chars: no "short body" recommendation (>= 100) but also no
        // score bonus (<= 200).
        let analysis = analyze_factors(&draft(25, "x".repeat(150), 5));
        assert!(analysis.recommendations.is_empty());
        assert_eq!(analysis.engagement_score, 70); // 50 + 10 title + 10 hashtags
    }
}
