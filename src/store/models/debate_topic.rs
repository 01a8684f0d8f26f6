use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Debate prompt attached to a single stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateTopic {
    pub id: String,
    pub stream_id: String,
    pub title: String,
    pub description: String,
    pub left_position: String,
    pub right_position: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated topic content; written wholesale on create-or-replace and update.
#[derive(Debug, Clone)]
pub struct TopicContent {
    pub title: String,
    pub description: String,
    pub left_position: String,
    pub right_position: String,
}

/// Compact view of a topic embedded in stream listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub left_position: String,
    pub right_position: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&DebateTopic> for TopicSummary {
    fn from(t: &DebateTopic) -> Self {
        Self {
            id: t.id.clone(),
            title: t.title.clone(),
            description: t.description.clone(),
            left_position: t.left_position.clone(),
            right_position: t.right_position.clone(),
            updated_at: t.updated_at,
        }
    }
}
