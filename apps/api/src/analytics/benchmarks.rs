//! Industry benchmark comparison for per-type engagement rates.

use serde::{Deserialize, Serialize};

use crate::analytics::engagement::PostMetrics;

/// Expected engagement rate per content type.
const BENCHMARKS: &[(&str, f64)] = &[
    ("text", 2.5),
    ("carousel", 3.0),
    ("article", 4.0),
    ("poll", 3.5),
];

/// Fallback for content types without a dedicated benchmark.
const DEFAULT_BENCHMARK_RATE: f64 = 2.0;

/// Looks up the benchmark engagement rate for a content type.
pub fn benchmark_rate(content_type: &str) -> f64 {
    BENCHMARKS
        .iter()
        .find(|(t, _)| *t == content_type)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_BENCHMARK_RATE)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub content_type: String,
    pub content_engagement_rate: f64,
    pub benchmark_engagement_rate: f64,
    pub performance_vs_benchmark: f64,
    pub performance_description: String,
}

/// Compares a post's engagement rate against the benchmark for its type.
/// A delta of exactly zero reads as "Below benchmark" — the comparison is
/// strict and the boundary is part of the contract.
pub fn compare_to_benchmark(metrics: &PostMetrics) -> BenchmarkComparison {
    let benchmark_engagement_rate = benchmark_rate(&metrics.content_type);
    let delta = metrics.engagement_rate - benchmark_engagement_rate;

    let performance_description = if delta > 0.0 {
        "Above benchmark"
    } else {
        "Below benchmark"
    };

    BenchmarkComparison {
        content_type: metrics.content_type.clone(),
        content_engagement_rate: metrics.engagement_rate,
        benchmark_engagement_rate,
        performance_vs_benchmark: delta,
        performance_description: performance_description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics_for(content_type: &str, engagement_rate: f64) -> PostMetrics {
        PostMetrics {
            engagement_rate,
            content_type: content_type.to_string(),
            ..PostMetrics::default()
        }
    }

    #[test]
    fn test_known_benchmark_rates() {
        assert_eq!(benchmark_rate("text"), 2.5);
        assert_eq!(benchmark_rate("carousel"), 3.0);
        assert_eq!(benchmark_rate("article"), 4.0);
        assert_eq!(benchmark_rate("poll"), 3.5);
    }

    #[test]
    fn test_unknown_content_type_gets_default() {
        assert_eq!(benchmark_rate("video"), 2.0);
        assert_eq!(benchmark_rate(""), 2.0);
    }

    #[test]
    fn test_article_above_benchmark() {
        let comparison = compare_to_benchmark(&metrics_for("article", 4.5));
        assert_eq!(comparison.benchmark_engagement_rate, 4.0);
        assert_eq!(comparison.performance_vs_benchmark, 0.5);
        assert_eq!(comparison.performance_description, "Above benchmark");
    }

    #[test]
    fn test_text_below_benchmark() {
        let comparison = compare_to_benchmark(&metrics_for("text", 1.5));
        assert_eq!(comparison.benchmark_engagement_rate, 2.5);
        assert_eq!(comparison.performance_description, "Below benchmark");
    }

    #[test]
    fn test_exact_benchmark_reads_as_below() {
        // Strict comparison: zero delta is not "above".
        let comparison = compare_to_benchmark(&metrics_for("poll", 3.5));
        assert_eq!(comparison.performance_vs_benchmark, 0.0);
        assert_eq!(comparison.performance_description, "Below benchmark");
    }

    #[test]
    fn test_unknown_type_compared_against_default() {
        let comparison = compare_to_benchmark(&metrics_for("video", 2.1));
        assert_eq!(comparison.benchmark_engagement_rate, 2.0);
        assert_eq!(comparison.performance_description, "Above benchmark");
    }
}
