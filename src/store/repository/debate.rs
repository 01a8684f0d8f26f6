use chrono::Utc;

use crate::store::models::*;
use crate::store::Store;

// ============================================================================
// Global Debate Repository
// ============================================================================

pub struct DebateRepository;

impl DebateRepository {
    pub async fn get(store: &Store) -> GlobalDebate {
        store.debate.read().await.clone()
    }

    /// Merge the provided fields into the global debate and bump `updated_at`.
    pub async fn update(store: &Store, update: UpdateGlobalDebate) -> GlobalDebate {
        let mut debate = store.debate.write().await;

        if let Some(title) = update.title {
            debate.title = title;
        }
        if let Some(description) = update.description {
            debate.description = description;
        }
        if let Some(side) = update.affirmative_side {
            debate.affirmative_side = side;
        }
        if let Some(side) = update.negative_side {
            debate.negative_side = side;
        }
        if let Some(start_time) = update.start_time {
            debate.start_time = start_time;
        }
        if let Some(end_time) = update.end_time {
            debate.end_time = end_time;
        }
        if let Some(is_active) = update.is_active {
            debate.is_active = is_active;
        }
        debate.updated_at = Utc::now();

        debate.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_merges_only_provided_fields() {
        let store = Store::seeded().unwrap();
        let before = DebateRepository::get(&store).await;

        let after = DebateRepository::update(
            &store,
            UpdateGlobalDebate {
                title: Some("New motion".to_string()),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(after.id, before.id);
        assert_eq!(after.title, "New motion");
        assert!(!after.is_active);
        assert_eq!(after.description, before.description);
        assert_eq!(after.affirmative_side, before.affirmative_side);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }
}
