use std::sync::Arc;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::store::{DebateTopic, DebateTopicRepository, StreamRepository, TopicContent};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub left_position: Option<String>,
    pub right_position: Option<String>,
}

/// Only absent or empty values are rejected; whitespace-only labels pass.
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub struct DebateTopicService;

impl DebateTopicService {
    /// Title and both position labels are mandatory; description defaults to empty.
    pub fn validate(request: TopicRequest) -> AppResult<TopicContent> {
        match (
            required(request.title),
            required(request.left_position),
            required(request.right_position),
        ) {
            (Some(title), Some(left_position), Some(right_position)) => Ok(TopicContent {
                title,
                description: request.description.unwrap_or_default(),
                left_position,
                right_position,
            }),
            _ => Err(AppError::Validation(i18n::t(
                "validation.topic_required_fields",
            ))),
        }
    }

    pub async fn require_stream(state: &Arc<AppState>, stream_id: &str) -> AppResult<()> {
        if StreamRepository::exists(&state.store, stream_id).await {
            Ok(())
        } else {
            Err(AppError::StreamNotFound)
        }
    }

    /// Create or replace the topic of an existing stream.
    pub async fn save_for_stream(
        state: &Arc<AppState>,
        stream_id: &str,
        request: TopicRequest,
    ) -> AppResult<DebateTopic> {
        Self::require_stream(state, stream_id).await?;

        let content = Self::validate(request)?;
        let topic = DebateTopicRepository::upsert_for_stream(&state.store, stream_id, content).await;
        tracing::info!("Debate topic {} saved for stream {}", topic.id, stream_id);
        Ok(topic)
    }

    pub async fn get_for_stream(state: &Arc<AppState>, stream_id: &str) -> AppResult<DebateTopic> {
        DebateTopicRepository::find_by_stream_id(&state.store, stream_id)
            .await
            .ok_or(AppError::DebateTopicNotFound)
    }

    /// Update an existing topic; a stream without one is reported before validation.
    pub async fn update_for_stream(
        state: &Arc<AppState>,
        stream_id: &str,
        request: TopicRequest,
    ) -> AppResult<DebateTopic> {
        Self::get_for_stream(state, stream_id).await?;

        let content = Self::validate(request)?;
        DebateTopicRepository::update_for_stream(&state.store, stream_id, content)
            .await
            .ok_or(AppError::DebateTopicNotFound)
    }

    pub async fn delete_for_stream(state: &Arc<AppState>, stream_id: &str) -> AppResult<DebateTopic> {
        DebateTopicRepository::delete_for_stream(&state.store, stream_id)
            .await
            .ok_or(AppError::DebateTopicNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_fills_default_description() {
        let content = DebateTopicService::validate(TopicRequest {
            title: Some("T".into()),
            left_position: Some("L".into()),
            right_position: Some("R".into()),
            description: None,
        })
        .unwrap();
        assert_eq!(content.description, "");
        assert_eq!(content.left_position, "L");
    }

    #[test]
    fn validate_rejects_missing_or_empty_positions() {
        let err = DebateTopicService::validate(TopicRequest {
            title: Some("T".into()),
            left_position: Some("".into()),
            right_position: Some("R".into()),
            description: None,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        assert!(DebateTopicService::validate(TopicRequest::default()).is_err());
    }

    #[test]
    fn validate_accepts_whitespace_only_labels() {
        let content = DebateTopicService::validate(TopicRequest {
            title: Some("  ".into()),
            left_position: Some(" ".into()),
            right_position: Some("R".into()),
            description: None,
        })
        .unwrap();
        assert_eq!(content.title, "  ");
    }
}
