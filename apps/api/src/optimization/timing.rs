//! Optimal posting-time lookup from a user's preference list.

use serde::{Deserialize, Serialize};

use crate::profile::analysis::ContentPreferences;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostingTime {
    pub optimal_time: String,
    pub explanation: String,
}

/// Returns the first of the user's preferred posting slots, falling back to
/// noon when the preference list is empty.
pub fn optimal_posting_time(preferences: &ContentPreferences, content_type: &str) -> PostingTime {
    let optimal_time = preferences
        .optimal_posting_times
        .first()
        .map(String::as_str)
        .unwrap_or("12:00");

    PostingTime {
        optimal_time: optimal_time.to_string(),
        explanation: format!(
            "Based on your audience activity, {optimal_time} is the optimal time to post {content_type} content."
        ),
    }
}
