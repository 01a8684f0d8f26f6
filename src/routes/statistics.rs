use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::routes::envelope::ApiResponse;
use crate::services::statistics::StatisticsService;
use crate::store::{
    AiStatus, AiStatusRepository, LiveSchedule, LiveScheduleRepository, StatisticsRepository,
    UpdateAiSettings, UpdateLiveSchedule, VoteSide, VoteTally,
};
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/votes", get(get_votes))
        .route("/vote", post(submit_vote))
        .route(
            "/live-schedule",
            get(get_live_schedule).put(update_live_schedule),
        )
        .route("/ai-status", get(get_ai_status))
        .route("/ai-control", post(control_ai))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub side: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VotesResponse {
    pub votes: VoteTally,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct VoteResultResponse {
    pub side: VoteSide,
    pub votes: VoteTally,
    pub total: u64,
}

#[derive(Debug, Deserialize)]
pub struct AiControlRequest {
    pub action: Option<String>,
    pub settings: Option<UpdateAiSettings>,
}

// ============================================================================
// Handlers
// ============================================================================

async fn dashboard(State(state): State<Arc<AppState>>) -> AppResult<Json<ApiResponse<Value>>> {
    let data = StatisticsService::dashboard(&state).await?;
    Ok(ApiResponse::ok(data))
}

async fn get_votes(State(state): State<Arc<AppState>>) -> Json<ApiResponse<VotesResponse>> {
    let stats = StatisticsRepository::get(&state.store).await;
    ApiResponse::ok(VotesResponse {
        votes: stats.votes,
        total: stats.vote_count,
    })
}

async fn submit_vote(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(request), _): WithRejection<Json<VoteRequest>, AppError>,
) -> AppResult<Json<ApiResponse<VoteResultResponse>>> {
    let (side, stats) = StatisticsService::cast_vote(&state, request.side.as_deref()).await?;
    Ok(ApiResponse::with_message(
        i18n::t("vote.accepted"),
        VoteResultResponse {
            side,
            votes: stats.votes,
            total: stats.vote_count,
        },
    ))
}

async fn get_live_schedule(State(state): State<Arc<AppState>>) -> Json<ApiResponse<LiveSchedule>> {
    ApiResponse::ok(LiveScheduleRepository::get(&state.store).await)
}

async fn update_live_schedule(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(update), _): WithRejection<Json<UpdateLiveSchedule>, AppError>,
) -> AppResult<Json<ApiResponse<LiveSchedule>>> {
    let schedule = LiveScheduleRepository::update(&state.store, update).await;
    Ok(ApiResponse::with_message(i18n::t("schedule.updated"), schedule))
}

async fn get_ai_status(State(state): State<Arc<AppState>>) -> Json<ApiResponse<AiStatus>> {
    ApiResponse::ok(AiStatusRepository::get(&state.store).await)
}

async fn control_ai(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(request), _): WithRejection<Json<AiControlRequest>, AppError>,
) -> AppResult<Json<ApiResponse<AiStatus>>> {
    let status =
        StatisticsService::control_ai(&state, request.action.as_deref(), request.settings).await?;
    Ok(ApiResponse::with_message(i18n::t("ai.control_applied"), status))
}
