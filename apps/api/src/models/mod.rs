pub mod analytics;
pub mod content;
pub mod user;

use serde::Deserialize;

/// Offset/limit pagination used by every list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}
