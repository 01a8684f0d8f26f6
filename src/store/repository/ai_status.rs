use chrono::Utc;

use crate::store::models::*;
use crate::store::Store;

pub struct AiStatusRepository;

impl AiStatusRepository {
    pub async fn get(store: &Store) -> AiStatus {
        store.ai_status.read().await.clone()
    }

    /// Apply a control action and merge any provided settings.
    ///
    /// `Start` also opens a new session (fresh id and start time); the other
    /// actions keep the current session.
    pub async fn apply_control(
        store: &Store,
        action: AiAction,
        settings: Option<UpdateAiSettings>,
    ) -> AiStatus {
        let mut ai = store.ai_status.write().await;

        ai.status = action.resulting_state();
        if action == AiAction::Start {
            let now = Utc::now();
            ai.start_time = now;
            ai.ai_session_id = format!("ai-session-{}", now.timestamp_millis());
        }

        if let Some(settings) = settings {
            if let Some(mode) = settings.mode {
                ai.settings.mode = mode;
            }
            if let Some(interval) = settings.interval {
                ai.settings.interval = interval;
            }
            if let Some(sensitivity) = settings.sensitivity {
                ai.settings.sensitivity = sensitivity;
            }
            if let Some(min_confidence) = settings.min_confidence {
                ai.settings.min_confidence = min_confidence;
            }
        }

        ai.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pause_keeps_session_and_uses_literal_state() {
        let store = Store::seeded().unwrap();
        let status = AiStatusRepository::apply_control(&store, AiAction::Pause, None).await;

        assert_eq!(status.status, AiRunState::Paused);
        assert_eq!(status.ai_session_id, "ai-session-001");
        assert_eq!(serde_json::to_value(status.status).unwrap(), "pause");
    }

    #[tokio::test]
    async fn start_opens_new_session_and_merges_settings() {
        let store = Store::seeded().unwrap();
        let before = AiStatusRepository::get(&store).await;

        let status = AiStatusRepository::apply_control(
            &store,
            AiAction::Start,
            Some(UpdateAiSettings {
                interval: Some(1000),
                ..Default::default()
            }),
        )
        .await;

        assert_eq!(status.status, AiRunState::Running);
        assert_ne!(status.ai_session_id, before.ai_session_id);
        assert!(status.ai_session_id.starts_with("ai-session-"));
        assert!(status.start_time > before.start_time);
        assert_eq!(status.settings.interval, 1000);
        assert_eq!(status.settings.mode, before.settings.mode);
        assert_eq!(status.settings.min_confidence, before.settings.min_confidence);
    }

    #[tokio::test]
    async fn resume_runs_without_new_session() {
        let store = Store::seeded().unwrap();
        AiStatusRepository::apply_control(&store, AiAction::Stop, None).await;
        let status = AiStatusRepository::apply_control(&store, AiAction::Resume, None).await;

        assert_eq!(status.status, AiRunState::Running);
        assert_eq!(status.ai_session_id, "ai-session-001");
    }
}
