use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Raw engagement counters for one content record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalyticsRow {
    pub id: Uuid,
    pub content_id: Uuid,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub impressions: i64,
    pub engagement_rate: f64,
    pub reach: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update payload. Missing counters are 0, never an error.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsCreate {
    pub content_id: Uuid,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub shares: i64,
    #[serde(default)]
    pub impressions: i64,
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub reach: i64,
}

pub type AnalyticsUpdate = AnalyticsCreate;
