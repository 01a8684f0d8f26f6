use chrono::Utc;

use crate::store::models::*;
use crate::store::{generate_id, Store};

// ============================================================================
// Debate Topic Repository
// ============================================================================
//
// `stream_id` is not a unique key of the collection, but every write path
// goes through a lookup-then-replace so each stream ends up with at most one
// topic.

pub struct DebateTopicRepository;

impl DebateTopicRepository {
    pub async fn list(store: &Store) -> Vec<DebateTopic> {
        store.debate_topics.read().await.clone()
    }

    pub async fn find_by_stream_id(store: &Store, stream_id: &str) -> Option<DebateTopic> {
        store
            .debate_topics
            .read()
            .await
            .iter()
            .find(|t| t.stream_id == stream_id)
            .cloned()
    }

    /// Create the topic for a stream, or replace the existing one while keeping
    /// its `id` and `created_at`.
    pub async fn upsert_for_stream(
        store: &Store,
        stream_id: &str,
        content: TopicContent,
    ) -> DebateTopic {
        let mut topics = store.debate_topics.write().await;
        let now = Utc::now();

        if let Some(index) = topics.iter().position(|t| t.stream_id == stream_id) {
            let existing = &mut topics[index];
            *existing = DebateTopic {
                id: existing.id.clone(),
                stream_id: stream_id.to_string(),
                title: content.title,
                description: content.description,
                left_position: content.left_position,
                right_position: content.right_position,
                created_at: existing.created_at,
                updated_at: now,
            };
            return existing.clone();
        }

        let topic = DebateTopic {
            id: generate_id("debate"),
            stream_id: stream_id.to_string(),
            title: content.title,
            description: content.description,
            left_position: content.left_position,
            right_position: content.right_position,
            created_at: now,
            updated_at: now,
        };
        topics.push(topic.clone());
        topic
    }

    /// Overwrite the content of an existing topic. Returns `None` if the stream has none.
    pub async fn update_for_stream(
        store: &Store,
        stream_id: &str,
        content: TopicContent,
    ) -> Option<DebateTopic> {
        let mut topics = store.debate_topics.write().await;
        let topic = topics.iter_mut().find(|t| t.stream_id == stream_id)?;

        topic.title = content.title;
        topic.description = content.description;
        topic.left_position = content.left_position;
        topic.right_position = content.right_position;
        topic.updated_at = Utc::now();

        Some(topic.clone())
    }

    pub async fn delete_for_stream(store: &Store, stream_id: &str) -> Option<DebateTopic> {
        let mut topics = store.debate_topics.write().await;
        let index = topics.iter().position(|t| t.stream_id == stream_id)?;
        Some(topics.remove(index))
    }
}
