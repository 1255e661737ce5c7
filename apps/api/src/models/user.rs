use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored user profile. `experience` and `education` are loose JSON arrays
/// of entries as imported from the profile source.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub linkedin_profile_url: String,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub about: Option<String>,
    pub skills: Vec<String>,
    pub experience: Value,
    pub education: Value,
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update payload. Everything except the profile URL defaults to empty
/// rather than rejecting the request.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub linkedin_profile_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "empty_json_array")]
    pub experience: Value,
    #[serde(default = "empty_json_array")]
    pub education: Value,
    #[serde(default)]
    pub interests: Vec<String>,
}

pub type UserUpdate = UserCreate;

fn empty_json_array() -> Value {
    Value::Array(Vec::new())
}
