//! Trend research — pluggable provider of trending topics and hashtag ideas.
//!
//! Default: `StaticTrendSource` (templated topics, deterministic, fully
//! testable). A live integration against news or social APIs would implement
//! the same trait.
//!
//! `AppState` holds an `Arc<dyn TrendSource>`, swapped at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A trending topic candidate with its search keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub topic: String,
    pub keywords: Vec<String>,
    pub relevance_score: u32,
}

/// The trend source trait. Implement this to swap backends without touching
/// handler or caller code.
#[async_trait]
pub trait TrendSource: Send + Sync {
    async fn trending_topics(&self, industry: &str, skills: &[String]) -> Vec<TrendingTopic>;

    async fn hashtag_suggestions(
        &self,
        industry: &str,
        skills: &[String],
        content_theme: &str,
    ) -> Vec<String>;
}

/// Template-driven trend source: two fixed industry topics plus one topic
/// per leading skill.
pub struct StaticTrendSource;

#[async_trait]
impl TrendSource for StaticTrendSource {
    async fn trending_topics(&self, industry: &str, skills: &[String]) -> Vec<TrendingTopic> {
        let mut topics = vec![
            TrendingTopic {
                topic: format!("Latest trends in {industry}"),
                keywords: vec![
                    industry.to_lowercase(),
                    "trends".to_string(),
                    "innovation".to_string(),
                ],
                relevance_score: 95,
            },
            TrendingTopic {
                topic: "Industry best practices".to_string(),
                keywords: vec![
                    "best practices".to_string(),
                    industry.to_lowercase(),
                    "standards".to_string(),
                ],
                relevance_score: 85,
            },
        ];

        for skill in skills.iter().take(3) {
            topics.push(TrendingTopic {
                topic: format!("Advanced {skill} techniques"),
                keywords: vec![
                    skill.to_lowercase(),
                    "advanced".to_string(),
                    "techniques".to_string(),
                ],
                relevance_score: 80,
            });
        }

        topics
    }

    async fn hashtag_suggestions(
        &self,
        industry: &str,
        skills: &[String],
        content_theme: &str,
    ) -> Vec<String> {
        let mut hashtags = vec![
            format!("#{}", industry.replace(' ', "")),
            "#professionaldevelopment".to_string(),
        ];

        for skill in skills.iter().take(5) {
            hashtags.push(format!("#{}", skill.replace(' ', "")));
        }

        let theme_tags: &[&str] = match content_theme {
            "Technology" => &["#TechTrends", "#Innovation", "#DigitalTransformation"],
            "Business" => &["#BusinessStrategy", "#Leadership", "#Entrepreneurship"],
            "Design" => &["#DesignThinking", "#UX", "#Creativity"],
            _ => &["#Professional"],
        };
        hashtags.extend(theme_tags.iter().map(|t| t.to_string()));

        hashtags.truncate(10);
        hashtags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_trending_topics_two_fixed_plus_skills() {
        let topics = StaticTrendSource
            .trending_topics("Technology", &skills(&["Rust", "SQL"]))
            .await;
        assert_eq!(topics.len(), 4);
        assert_eq!(topics[0].topic, "Latest trends in Technology");
        assert_eq!(topics[1].topic, "Industry best practices");
        assert_eq!(topics[2].topic, "Advanced Rust techniques");
    }

    #[tokio::test]
    async fn test_trending_topics_caps_skill_topics_at_three() {
        let topics = StaticTrendSource
            .trending_topics("Tech", &skills(&["a", "b", "c", "d", "e"]))
            .await;
        assert_eq!(topics.len(), 5, "2 fixed + first 3 skills");
    }

    #[tokio::test]
    async fn test_hashtag_suggestions_strip_spaces_and_cap_at_ten() {
        let tags = StaticTrendSource
            .hashtag_suggestions(
                "Data Science",
                &skills(&["Machine Learning", "Python", "SQL", "Spark", "Kafka", "Go"]),
                "Technology",
            )
            .await;
        assert_eq!(tags[0], "#DataScience");
        assert_eq!(tags[1], "#professionaldevelopment");
        assert_eq!(tags[2], "#MachineLearning");
        assert_eq!(tags.len(), 10);
    }

    #[tokio::test]
    async fn test_hashtag_suggestions_unknown_theme_fallback() {
        let tags = StaticTrendSource
            .hashtag_suggestions("Tech", &[], "Gardening")
            .await;
        assert!(tags.contains(&"#Professional".to_string()));
    }
}
