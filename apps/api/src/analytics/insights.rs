//! Batch performance insights — summary statistics plus natural-language
//! observations over a set of per-post metrics.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::engagement::{round2, PostMetrics};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestPerforming {
    pub id: Option<Uuid>,
    pub engagement_rate: f64,
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub average_engagement_rate: f64,
    pub average_likes: f64,
    pub average_comments: f64,
    pub average_shares: f64,
    pub best_performing_content: BestPerforming,
}

/// The summary is a bare string for an empty batch and a stats object
/// otherwise. Existing consumers rely on this exact shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InsightSummary {
    Message(String),
    Stats(SummaryStats),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceInsights {
    pub insights: Vec<String>,
    pub summary: InsightSummary,
}

/// Reduces a batch of post metrics into averages, the best performer, and a
/// set of insight strings: one band statement for the overall average and one
/// per-type average line per distinct content type, in first-encountered
/// order. Ties for best performer keep the earliest entry.
pub fn generate_insights(batch: &[PostMetrics]) -> PerformanceInsights {
    if batch.is_empty() {
        return PerformanceInsights {
            insights: Vec::new(),
            summary: InsightSummary::Message("No data available".to_string()),
        };
    }

    let n = batch.len() as f64;
    let avg_rate = batch.iter().map(|m| m.engagement_rate).sum::<f64>() / n;
    let avg_likes = batch.iter().map(|m| m.likes as f64).sum::<f64>() / n;
    let avg_comments = batch.iter().map(|m| m.comments as f64).sum::<f64>() / n;
    let avg_shares = batch.iter().map(|m| m.shares as f64).sum::<f64>() / n;

    let mut best = &batch[0];
    for metrics in &batch[1..] {
        if metrics.engagement_rate > best.engagement_rate {
            best = metrics;
        }
    }

    let mut insights = Vec::new();
    let band = if avg_rate < 2.0 {
        "Overall engagement rate is below industry average. Consider optimizing content strategy."
    } else if avg_rate > 5.0 {
        "Overall engagement rate is above industry average. Keep up the good work!"
    } else {
        "Engagement rate is within industry average range."
    };
    insights.push(band.to_string());

    let mut by_type: Vec<(String, Vec<f64>)> = Vec::new();
    for metrics in batch {
        match by_type.iter_mut().find(|(t, _)| *t == metrics.content_type) {
            Some((_, rates)) => rates.push(metrics.engagement_rate),
            None => by_type.push((metrics.content_type.clone(), vec![metrics.engagement_rate])),
        }
    }
    for (content_type, rates) in &by_type {
        let type_avg = rates.iter().sum::<f64>() / rates.len() as f64;
        insights.push(format!(
            "{} posts have an average engagement rate of {type_avg:.2}%",
            title_case(content_type)
        ));
    }

    PerformanceInsights {
        insights,
        summary: InsightSummary::Stats(SummaryStats {
            average_engagement_rate: round2(avg_rate),
            average_likes: round2(avg_likes),
            average_comments: round2(avg_comments),
            average_shares: round2(avg_shares),
            best_performing_content: BestPerforming {
                id: best.content_id,
                engagement_rate: best.engagement_rate,
                content_type: best.content_type.clone(),
            },
        }),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceInsights {
    pub peak_engagement_times: Vec<String>,
    pub most_engaged_content_types: Vec<String>,
    pub audience_growth: String,
    pub top_comments: Vec<String>,
}

/// Static audience behavior snapshot. A real implementation would derive
/// this from follower analytics.
pub fn audience_insights() -> AudienceInsights {
    AudienceInsights {
        peak_engagement_times: vec![
            "08:00".to_string(),
            "12:00".to_string(),
            "18:00".to_string(),
        ],
        most_engaged_content_types: vec!["carousel".to_string(), "article".to_string()],
        audience_growth: "15% increase in followers last month".to_string(),
        top_comments: vec![
            "Great insights!".to_string(),
            "Thanks for sharing".to_string(),
            "Very helpful information".to_string(),
        ],
    }
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
