use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Run state of the speech-recognition assistant. The paused/stopped states
/// keep the literal action names on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiRunState {
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "stop")]
    Stopped,
    #[serde(rename = "pause")]
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    Start,
    Stop,
    Pause,
    Resume,
}

impl AiAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "start" => Some(AiAction::Start),
            "stop" => Some(AiAction::Stop),
            "pause" => Some(AiAction::Pause),
            "resume" => Some(AiAction::Resume),
            _ => None,
        }
    }

    pub fn resulting_state(self) -> AiRunState {
        match self {
            AiAction::Start | AiAction::Resume => AiRunState::Running,
            AiAction::Stop => AiRunState::Stopped,
            AiAction::Pause => AiRunState::Paused,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub mode: String,
    /// Polling interval in milliseconds
    pub interval: u64,
    pub sensitivity: String,
    pub min_confidence: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAiSettings {
    pub mode: Option<String>,
    pub interval: Option<u64>,
    pub sensitivity: Option<String>,
    pub min_confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiUsage {
    pub total_contents: u64,
    pub total_words: u64,
    pub average_confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiStatus {
    pub status: AiRunState,
    pub ai_session_id: String,
    pub start_time: DateTime<Utc>,
    pub settings: AiSettings,
    pub statistics: AiUsage,
}
