use chrono::Utc;

use crate::store::models::*;
use crate::store::{generate_id, Store};

// ============================================================================
// Stream Repository
// ============================================================================

pub struct StreamRepository;

impl StreamRepository {
    pub async fn list(store: &Store) -> Vec<Stream> {
        store.streams.read().await.clone()
    }

    pub async fn find_by_id(store: &Store, id: &str) -> Option<Stream> {
        store
            .streams
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub async fn exists(store: &Store, id: &str) -> bool {
        store.streams.read().await.iter().any(|s| s.id == id)
    }

    pub async fn create(store: &Store, data: CreateStream) -> Stream {
        let now = Utc::now();
        let stream = Stream {
            id: generate_id("stream"),
            name: data.name,
            url: data.url,
            stream_type: data.stream_type,
            description: data.description,
            enabled: data.enabled,
            created_at: now,
            updated_at: now,
        };

        store.streams.write().await.push(stream.clone());
        stream
    }

    pub async fn update(store: &Store, id: &str, update: UpdateStream) -> Option<Stream> {
        let mut streams = store.streams.write().await;
        let stream = streams.iter_mut().find(|s| s.id == id)?;

        if let Some(name) = update.name {
            stream.name = name;
        }
        if let Some(url) = update.url {
            stream.url = url;
        }
        if let Some(stream_type) = update.stream_type {
            stream.stream_type = stream_type;
        }
        if let Some(description) = update.description {
            stream.description = description;
        }
        if let Some(enabled) = update.enabled {
            stream.enabled = enabled;
        }
        stream.updated_at = Utc::now();

        Some(stream.clone())
    }

    /// Remove a stream. Its debate topic, if any, is left in place.
    pub async fn delete(store: &Store, id: &str) -> Option<Stream> {
        let mut streams = store.streams.write().await;
        let index = streams.iter().position(|s| s.id == id)?;
        Some(streams.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DebateTopicRepository;

    #[tokio::test]
    async fn create_assigns_fresh_id_and_timestamps() {
        let store = Store::seeded().unwrap();
        let stream = StreamRepository::create(
            &store,
            CreateStream {
                name: "Test".to_string(),
                url: "http://x/live/s.m3u8".to_string(),
                stream_type: StreamType::Hls,
                description: String::new(),
                enabled: true,
            },
        )
        .await;

        assert!(stream.id.starts_with("stream-"));
        assert_eq!(stream.created_at, stream.updated_at);
        assert!(StreamRepository::exists(&store, &stream.id).await);
        assert_eq!(StreamRepository::list(&store).await.len(), 4);
    }

    #[tokio::test]
    async fn update_keeps_absent_fields() {
        let store = Store::seeded().unwrap();
        let updated = StreamRepository::update(
            &store,
            "stream-003",
            UpdateStream {
                enabled: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert!(updated.enabled);
        assert_eq!(updated.url, "http://localhost:8086/live/guest.flv");
        assert_eq!(updated.stream_type, StreamType::Flv);
        assert!(updated.updated_at > updated.created_at);
    }

    #[tokio::test]
    async fn deleting_unknown_stream_leaves_collection_unchanged() {
        let store = Store::seeded().unwrap();
        let before = StreamRepository::list(&store).await.len();

        assert!(StreamRepository::delete(&store, "stream-404").await.is_none());
        assert_eq!(StreamRepository::list(&store).await.len(), before);
    }

    #[tokio::test]
    async fn deleting_stream_orphans_its_topic() {
        let store = Store::seeded().unwrap();

        let removed = StreamRepository::delete(&store, "stream-001").await.unwrap();
        assert_eq!(removed.name, "主会场直播");
        assert!(DebateTopicRepository::find_by_stream_id(&store, "stream-001")
            .await
            .is_some());
    }
}
