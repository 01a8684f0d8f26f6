use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteSide {
    Affirmative,
    Negative,
}

impl VoteSide {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "affirmative" => Some(VoteSide::Affirmative),
            "negative" => Some(VoteSide::Negative),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VoteTally {
    pub affirmative: u64,
    pub negative: u64,
}

/// Aggregate counters shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub is_live: bool,
    pub viewer_count: u64,
    pub vote_count: u64,
    pub message_count: u64,
    pub total_views: u64,
    pub total_users: u64,
    pub votes: VoteTally,
    pub live_start_time: DateTime<Utc>,
    /// Seconds since the live session started
    pub live_duration: u64,
}
