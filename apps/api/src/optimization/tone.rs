//! Content tone detection and adjustment suggestions.

use serde::{Deserialize, Serialize};

use crate::analytics::engagement::PostMetrics;
use crate::models::content::ContentDraft;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneAnalysis {
    pub current_tone: String,
    pub detected_tone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneSuggestions {
    pub tone_analysis: ToneAnalysis,
    pub suggestions: Vec<String>,
    pub predicted_improvement: f64,
}

/// Coarse binary classifier: AI-themed bodies read as analytical, everything
/// else as informative.
fn detect_tone(body: &str) -> &'static str {
    if body.to_lowercase().contains("ai") {
        "Analytical"
    } else {
        "Informative"
    }
}

/// Compares the detected tone of a draft with the tone declared on the
/// user's profile. A match affirms (+1.0 predicted improvement), a mismatch
/// suggests adjusting (+0.5); weak engagement adds a further suggestion and
/// +0.5 on top of either.
pub fn tone_suggestions(
    draft: &ContentDraft,
    current_tone: &str,
    metrics: &PostMetrics,
) -> ToneSuggestions {
    let detected_tone = detect_tone(&draft.body);

    let mut suggestions = Vec::new();
    let mut predicted_improvement;

    if current_tone == detected_tone {
        suggestions.push("Tone is consistent with your professional identity".to_string());
        predicted_improvement = 1.0;
    } else {
        suggestions.push(format!(
            "Consider adjusting tone to be more {}",
            current_tone.to_lowercase()
        ));
        predicted_improvement = 0.5;
    }

    if metrics.engagement_rate < 2.0 {
        suggestions.push("Consider using a more engaging tone to improve interaction".to_string());
        predicted_improvement += 0.5;
    }

    ToneSuggestions {
        tone_analysis: ToneAnalysis {
            current_tone: current_tone.to_string(),
            detected_tone: detected_tone.to_string(),
        },
        suggestions,
        predicted_improvement,
    }
}
