use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored content record. Scheduling is metadata only — nothing in this
/// service acts on `scheduled_time`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub body: String,
    pub content_type: String,
    pub hashtags: Vec<String>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub posted: bool,
    pub linkedin_post_id: Option<String>,
    pub engagement_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update payload with defaulting for every optional field.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentCreate {
    pub user_id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub scheduled_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub posted: bool,
    #[serde(default)]
    pub linkedin_post_id: Option<String>,
    #[serde(default)]
    pub engagement_score: i32,
}

pub type ContentUpdate = ContentCreate;

/// An unpublished draft awaiting scoring or scheduling. No identity beyond
/// its fields; two drafts with the same fields are the same draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl Default for ContentDraft {
    fn default() -> Self {
        Self {
            title: None,
            body: String::new(),
            content_type: default_content_type(),
            hashtags: Vec::new(),
        }
    }
}

impl From<&ContentRow> for ContentDraft {
    fn from(row: &ContentRow) -> Self {
        Self {
            title: row.title.clone(),
            body: row.body.clone(),
            content_type: row.content_type.clone(),
            hashtags: row.hashtags.clone(),
        }
    }
}

pub(crate) fn default_content_type() -> String {
    "text".to_string()
}
