use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The platform-wide debate shown when no stream-specific topic is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalDebate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub affirmative_side: String,
    pub negative_side: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for the global debate. Identity and timestamps are not updatable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGlobalDebate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub affirmative_side: Option<String>,
    pub negative_side: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}
