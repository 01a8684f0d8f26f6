use std::sync::Arc;

use anyhow::Context;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::store::{
    AiAction, AiStatus, AiStatusRepository, DebateRepository, LiveScheduleRepository,
    Statistics, StatisticsRepository, UpdateAiSettings, VoteSide,
};
use crate::AppState;

pub struct StatisticsService;

impl StatisticsService {
    pub fn parse_vote_side(side: Option<&str>) -> AppResult<VoteSide> {
        side.and_then(VoteSide::parse)
            .ok_or_else(|| AppError::Validation(i18n::t("validation.vote_side_invalid")))
    }

    pub fn parse_ai_action(action: Option<&str>) -> AppResult<AiAction> {
        action
            .and_then(AiAction::parse)
            .ok_or_else(|| AppError::Validation(i18n::t("validation.ai_action_invalid")))
    }

    /// Validate the side before touching any counter.
    pub async fn cast_vote(
        state: &Arc<AppState>,
        side: Option<&str>,
    ) -> AppResult<(VoteSide, Statistics)> {
        let side = Self::parse_vote_side(side)?;
        let stats = StatisticsRepository::record_vote(&state.store, side).await;
        Ok((side, stats))
    }

    pub async fn control_ai(
        state: &Arc<AppState>,
        action: Option<&str>,
        settings: Option<UpdateAiSettings>,
    ) -> AppResult<AiStatus> {
        let action = Self::parse_ai_action(action)?;
        let status = AiStatusRepository::apply_control(&state.store, action, settings).await;
        tracing::info!(
            "AI control {:?} applied; session {}",
            action,
            status.ai_session_id
        );
        Ok(status)
    }

    /// Statistics fields at the top level, with the debate, schedule and AI
    /// status attached under their own keys.
    pub async fn dashboard(state: &Arc<AppState>) -> AppResult<Value> {
        let statistics = StatisticsRepository::get(&state.store).await;
        let debate = DebateRepository::get(&state.store).await;
        let live_schedule = LiveScheduleRepository::get(&state.store).await;
        let ai_status = AiStatusRepository::get(&state.store).await;

        let mut data = serde_json::to_value(&statistics).context("serialize statistics")?;
        let object = data
            .as_object_mut()
            .context("statistics did not serialize to an object")?;
        object.insert(
            "debate".to_string(),
            serde_json::to_value(&debate).context("serialize debate")?,
        );
        object.insert(
            "liveSchedule".to_string(),
            serde_json::to_value(&live_schedule).context("serialize live schedule")?,
        );
        object.insert(
            "aiStatus".to_string(),
            serde_json::to_value(&ai_status).context("serialize ai status")?,
        );

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_side_must_be_known() {
        assert_eq!(
            StatisticsService::parse_vote_side(Some("negative")).unwrap(),
            VoteSide::Negative
        );
        assert!(StatisticsService::parse_vote_side(Some("neutral")).is_err());
        assert!(StatisticsService::parse_vote_side(None).is_err());
    }

    #[test]
    fn ai_action_must_be_known() {
        assert_eq!(
            StatisticsService::parse_ai_action(Some("resume")).unwrap(),
            AiAction::Resume
        );
        assert!(matches!(
            StatisticsService::parse_ai_action(Some("restart")),
            Err(AppError::Validation(_))
        ));
    }
}
