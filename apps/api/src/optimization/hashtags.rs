//! Hashtag set optimization and engagement-driven draft adjustments.

use serde::{Deserialize, Serialize};

use crate::analytics::engagement::PostMetrics;
use crate::models::content::ContentDraft;

/// Hashtag sets above this size get trimmed.
const MAX_OPTIMIZED_HASHTAGS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashtagOptimization {
    pub optimized_hashtags: Vec<String>,
    pub suggestions: Vec<String>,
    pub predicted_improvement: f64,
}

/// Trims oversized hashtag sets to the first five and suggests count
/// changes. The predicted improvement is a fixed per-band lookup (under 3
/// tags: 2.0, over 10: 1.5, otherwise 0.5), not a continuous function.
pub fn optimize_hashtags(hashtags: &[String]) -> HashtagOptimization {
    let count = hashtags.len();

    let mut suggestions = Vec::new();
    if count < 3 {
        suggestions.push("Add more hashtags to increase discoverability".to_string());
    } else if count > 10 {
        suggestions.push("Reduce the number of hashtags to improve engagement".to_string());
    }

    let optimized_hashtags = if count > MAX_OPTIMIZED_HASHTAGS {
        hashtags[..MAX_OPTIMIZED_HASHTAGS].to_vec()
    } else {
        hashtags.to_vec()
    };

    let predicted_improvement = if count < 3 {
        2.0
    } else if count > 10 {
        1.5
    } else {
        0.5
    };

    HashtagOptimization {
        optimized_hashtags,
        suggestions,
        predicted_improvement,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentOptimization {
    pub optimized_content: ContentDraft,
    pub suggestions: Vec<String>,
    pub predicted_improvement: f64,
}

/// Accumulates engagement-driven suggestions for a draft. Each trigger adds
/// its own improvement estimate; the draft itself is returned unmodified —
/// applying the suggestions is the author's call.
pub fn optimize_for_engagement(draft: &ContentDraft, metrics: &PostMetrics) -> ContentOptimization {
    let mut suggestions = Vec::new();
    let mut predicted_improvement = 0.0;

    if metrics.engagement_rate < 2.0 {
        suggestions.push("Consider adding a call-to-action to encourage engagement".to_string());
        predicted_improvement += 1.5;
    }
    if draft.hashtags.len() < 3 {
        suggestions.push("Add more relevant hashtags to increase discoverability".to_string());
        predicted_improvement += 0.5;
    }
    if draft.body.chars().count() < 100 {
        suggestions.push("Consider adding more depth to your content".to_string());
        predicted_improvement += 0.3;
    }

    ContentOptimization {
        optimized_content: draft.clone(),
        suggestions,
        predicted_improvement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("#tag{i}")).collect()
    }

    #[test]
    fn test_seven_tags_trimmed_to_first_five() {
        let input = tags(7);
        let result = optimize_hashtags(&input);
        assert_eq!(result.optimized_hashtags, input[..5].to_vec());
        assert!(result.suggestions.is_empty(), "7 tags is inside the ok band");
        assert_eq!(result.predicted_improvement, 0.5);
    }

    #[test]
    fn test_five_or_fewer_tags_unchanged() {
        let input = tags(5);
        let result = optimize_hashtags(&input);
        assert_eq!(result.optimized_hashtags, input);
    }

    #[test]
    fn test_too_few_tags_suggests_adding() {
        let result = optimize_hashtags(&tags(2));
        assert_eq!(
            result.suggestions,
            vec!["Add more hashtags to increase discoverability"]
        );
        assert_eq!(result.predicted_improvement, 2.0);
        assert_eq!(result.optimized_hashtags.len(), 2);
    }

    #[test]
    fn test_too_many_tags_suggests_reducing() {
        let result = optimize_hashtags(&tags(11));
        assert_eq!(
            result.suggestions,
            vec!["Reduce the number of hashtags to improve engagement"]
        );
        assert_eq!(result.predicted_improvement, 1.5);
        assert_eq!(result.optimized_hashtags.len(), 5);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(optimize_hashtags(&tags(3)).predicted_improvement, 0.5);
        assert_eq!(optimize_hashtags(&tags(10)).predicted_improvement, 0.5);
        assert!(optimize_hashtags(&tags(10)).suggestions.is_empty());
    }

    #[test]
    fn test_optimize_for_engagement_accumulates() {
        let draft = ContentDraft {
            title: Some("Post".to_string()),
            body: "short".to_string(),
            content_type: "text".to_string(),
            hashtags: tags(1),
        };
        let metrics = PostMetrics {
            engagement_rate: 1.0,
            ..PostMetrics::default()
        };

        let result = optimize_for_engagement(&draft, &metrics);
        assert_eq!(result.suggestions.len(), 3);
        assert!((result.predicted_improvement - 2.3).abs() < 1e-9);
        assert_eq!(result.optimized_content, draft, "draft passes through unmodified");
    }

    #[test]
    fn test_optimize_for_engagement_healthy_content() {
        let draft = ContentDraft {
            title: Some("Post".to_string()),
            body: "x".repeat(200),
            content_type: "text".to_string(),
            hashtags: tags(4),
        };
        let metrics = PostMetrics {
            engagement_rate: 3.5,
            ..PostMetrics::default()
        };

        let result = optimize_for_engagement(&draft, &metrics);
        assert!(result.suggestions.is_empty());
        assert_eq!(result.predicted_improvement, 0.0);
    }
}
