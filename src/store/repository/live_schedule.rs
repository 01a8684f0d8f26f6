use crate::store::models::*;
use crate::store::Store;

pub struct LiveScheduleRepository;

impl LiveScheduleRepository {
    pub async fn get(store: &Store) -> LiveSchedule {
        store.live_schedule.read().await.clone()
    }

    pub async fn update(store: &Store, update: UpdateLiveSchedule) -> LiveSchedule {
        let mut schedule = store.live_schedule.write().await;

        if let Some(is_scheduled) = update.is_scheduled {
            schedule.is_scheduled = is_scheduled;
        }
        if let Some(start) = update.scheduled_start_time {
            schedule.scheduled_start_time = start;
        }
        if let Some(end) = update.scheduled_end_time {
            schedule.scheduled_end_time = end;
        }
        if let Some(stream_id) = update.stream_id {
            schedule.stream_id = stream_id;
        }
        if let Some(title) = update.title {
            schedule.title = title;
        }
        if let Some(description) = update.description {
            schedule.description = description;
        }

        schedule.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn title_only_update_keeps_schedule_window() {
        let store = Store::seeded().unwrap();
        let before = LiveScheduleRepository::get(&store).await;

        let after = LiveScheduleRepository::update(
            &store,
            UpdateLiveSchedule {
                title: Some("New".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(after.title, "New");
        assert_eq!(after.scheduled_start_time, before.scheduled_start_time);
        assert_eq!(after.scheduled_end_time, before.scheduled_end_time);
        assert_eq!(after.stream_id, before.stream_id);
    }
}
