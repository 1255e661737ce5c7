//! Seven-day content calendar planning and posting-time assignment.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::analysis::ContentPreferences;
use crate::strategy::trends::TrendingTopic;

const CALENDAR_DAYS: usize = 7;
const FALLBACK_TOPIC: &str = "Professional Development";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: String,
    pub topic: String,
    pub content_type: String,
    pub scheduled: bool,
    pub posted: bool,
}

/// A calendar entry with its assigned posting time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledDay {
    #[serde(flatten)]
    pub day: CalendarDay,
    pub scheduled_time: String,
}

/// Plans one post per day for the next seven days, rotating through the
/// supplied topics and the user's preferred content types by day index.
pub fn create_content_calendar(
    trending_topics: &[TrendingTopic],
    preferences: &ContentPreferences,
) -> Vec<CalendarDay> {
    let start = Utc::now().date_naive();
    let content_types = &preferences.content_types;

    (0..CALENDAR_DAYS)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            let topic = if trending_topics.is_empty() {
                FALLBACK_TOPIC.to_string()
            } else {
                trending_topics[i % trending_topics.len()].topic.clone()
            };
            let content_type = if content_types.is_empty() {
                "text".to_string()
            } else {
                content_types[i % content_types.len()].clone()
            };

            CalendarDay {
                date: date.format("%Y-%m-%d").to_string(),
                topic,
                content_type,
                scheduled: true,
                posted: false,
            }
        })
        .collect()
}

/// Assigns each calendar entry a posting time from the user's preferred
/// slots, rotating by entry index.
pub fn optimize_posting_schedule(
    preferences: &ContentPreferences,
    calendar: &[CalendarDay],
) -> Vec<ScheduledDay> {
    let times = &preferences.optimal_posting_times;

    calendar
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let time = if times.is_empty() {
                "12:00"
            } else {
                times[i % times.len()].as_str()
            };
            ScheduledDay {
                day: day.clone(),
                scheduled_time: format!("{} {}", day.date, time),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::analysis::DEFAULT_POSTING_TIMES;

    fn preferences(content_types: &[&str], times: &[&str]) -> ContentPreferences {
        ContentPreferences {
            content_types: content_types.iter().map(|s| s.to_string()).collect(),
            posting_frequency: "daily".to_string(),
            optimal_posting_times: times.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn topic(name: &str) -> TrendingTopic {
        TrendingTopic {
            topic: name.to_string(),
            keywords: vec![],
            relevance_score: 80,
        }
    }

    #[test]
    fn test_calendar_has_seven_unposted_days() {
        let calendar = create_content_calendar(&[], &preferences(&[], &[]));
        assert_eq!(calendar.len(), 7);
        for day in &calendar {
            assert!(day.scheduled);
            assert!(!day.posted);
        }
    }

    #[test]
    fn test_calendar_dates_are_consecutive() {
        let calendar = create_content_calendar(&[], &preferences(&[], &[]));
        let first = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(calendar[0].date, first);
        // all dates distinct
        for pair in calendar.windows(2) {
            assert_ne!(pair[0].date, pair[1].date);
        }
    }

    #[test]
    fn test_topics_rotate_in_order() {
        let topics = vec![topic("Rust"), topic("SQL")];
        let calendar = create_content_calendar(&topics, &preferences(&[], &[]));
        assert_eq!(calendar[0].topic, "Rust");
        assert_eq!(calendar[1].topic, "SQL");
        assert_eq!(calendar[2].topic, "Rust");
        assert_eq!(calendar[6].topic, "Rust");
    }

    #[test]
    fn test_fallbacks_when_topics_and_types_missing() {
        let calendar = create_content_calendar(&[], &preferences(&[], &[]));
        assert_eq!(calendar[0].topic, "Professional Development");
        assert_eq!(calendar[0].content_type, "text");
    }

    #[test]
    fn test_content_types_rotate() {
        let calendar = create_content_calendar(
            &[],
            &preferences(&["technical_tutorials", "code_snippets"], &[]),
        );
        assert_eq!(calendar[0].content_type, "technical_tutorials");
        assert_eq!(calendar[1].content_type, "code_snippets");
        assert_eq!(calendar[2].content_type, "technical_tutorials");
    }

    #[test]
    fn test_schedule_rotates_posting_times() {
        let prefs = preferences(&[], DEFAULT_POSTING_TIMES);
        let calendar = create_content_calendar(&[], &prefs);
        let scheduled = optimize_posting_schedule(&prefs, &calendar);

        assert_eq!(scheduled.len(), 7);
        assert!(scheduled[0].scheduled_time.ends_with("08:00"));
        assert!(scheduled[1].scheduled_time.ends_with("12:00"));
        assert!(scheduled[2].scheduled_time.ends_with("18:00"));
        assert!(scheduled[3].scheduled_time.ends_with("08:00"));
        assert_eq!(
            scheduled[0].scheduled_time,
            format!("{} 08:00", scheduled[0].day.date)
        );
    }

    #[test]
    fn test_schedule_with_no_times_uses_noon() {
        let prefs = preferences(&[], &[]);
        let calendar = create_content_calendar(&[], &prefs);
        let scheduled = optimize_posting_schedule(&prefs, &calendar);
        assert!(scheduled[0].scheduled_time.ends_with("12:00"));
    }

    #[test]
    fn test_scheduled_day_flattens_to_single_object() {
        let prefs = preferences(&[], &[]);
        let calendar = create_content_calendar(&[], &prefs);
        let scheduled = optimize_posting_schedule(&prefs, &calendar);
        let json = serde_json::to_value(&scheduled[0]).unwrap();
        assert!(json.get("date").is_some());
        assert!(json.get("scheduled_time").is_some());
        assert!(json.get("day").is_none(), "calendar fields must be flattened");
    }
}
