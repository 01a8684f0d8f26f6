use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, TopicAppResult};
use crate::i18n;
use crate::routes::envelope::{ApiResponse, TopicResponse};
use crate::services::debate_topics::{DebateTopicService, TopicRequest};
use crate::store::{DebateRepository, DebateTopic, GlobalDebate, UpdateGlobalDebate};
use crate::AppState;

/// Labels used by the public lookup when the global debate has no side labels.
const DEFAULT_LEFT_POSITION: &str = "正方";
const DEFAULT_RIGHT_POSITION: &str = "反方";

/// Global debate and per-stream topic routes (mounted under the admin prefixes).
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/debate", get(get_debate).put(update_debate))
        // `:id` is the stream id; it shares the segment name with `/streams/:id`.
        .route(
            "/streams/:id/debate-topic",
            get(get_topic)
                .post(save_topic)
                .put(update_topic)
                .delete(delete_topic),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PublicTopicQuery {
    pub stream_id: Option<String>,
}

/// Topic as served to the audience app, with both the current and the legacy
/// side field names.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub left_position: String,
    pub right_position: String,
    pub left_side: String,
    pub right_side: String,
}

impl PublicTopic {
    fn new(id: String, title: String, description: String, left: String, right: String) -> Self {
        Self {
            id,
            title,
            description,
            left_side: left.clone(),
            right_side: right.clone(),
            left_position: left,
            right_position: right,
        }
    }
}

impl From<DebateTopic> for PublicTopic {
    fn from(t: DebateTopic) -> Self {
        Self::new(t.id, t.title, t.description, t.left_position, t.right_position)
    }
}

fn or_default(label: String, default: &str) -> String {
    if label.is_empty() {
        default.to_string()
    } else {
        label
    }
}

impl From<GlobalDebate> for PublicTopic {
    fn from(d: GlobalDebate) -> Self {
        Self::new(
            d.id,
            d.title,
            d.description,
            or_default(d.affirmative_side, DEFAULT_LEFT_POSITION),
            or_default(d.negative_side, DEFAULT_RIGHT_POSITION),
        )
    }
}

// ============================================================================
// Global debate handlers
// ============================================================================

async fn get_debate(State(state): State<Arc<AppState>>) -> Json<ApiResponse<GlobalDebate>> {
    ApiResponse::ok(DebateRepository::get(&state.store).await)
}

async fn update_debate(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(update), _): WithRejection<Json<UpdateGlobalDebate>, AppError>,
) -> AppResult<Json<ApiResponse<GlobalDebate>>> {
    let debate = DebateRepository::update(&state.store, update).await;
    Ok(ApiResponse::ok(debate))
}

// ============================================================================
// Per-stream topic handlers
// ============================================================================

/// Create the stream's topic, or replace it while keeping its id.
async fn save_topic(
    State(state): State<Arc<AppState>>,
    Path(stream_id): Path<String>,
    body: Result<Json<TopicRequest>, JsonRejection>,
) -> TopicAppResult<Json<TopicResponse<DebateTopic>>> {
    DebateTopicService::require_stream(&state, &stream_id).await?;
    let Json(request) = body?;

    let topic = DebateTopicService::save_for_stream(&state, &stream_id, request).await?;
    Ok(TopicResponse::with_message(i18n::t("topic.saved"), topic))
}

async fn get_topic(
    State(state): State<Arc<AppState>>,
    Path(stream_id): Path<String>,
) -> TopicAppResult<Json<TopicResponse<DebateTopic>>> {
    let topic = DebateTopicService::get_for_stream(&state, &stream_id).await?;
    Ok(TopicResponse::data(topic))
}

async fn update_topic(
    State(state): State<Arc<AppState>>,
    Path(stream_id): Path<String>,
    body: Result<Json<TopicRequest>, JsonRejection>,
) -> TopicAppResult<Json<TopicResponse<DebateTopic>>> {
    DebateTopicService::get_for_stream(&state, &stream_id).await?;
    let Json(request) = body?;

    let topic = DebateTopicService::update_for_stream(&state, &stream_id, request).await?;
    Ok(TopicResponse::with_message(i18n::t("topic.updated"), topic))
}

async fn delete_topic(
    State(state): State<Arc<AppState>>,
    Path(stream_id): Path<String>,
) -> TopicAppResult<Json<TopicResponse<()>>> {
    let topic = DebateTopicService::delete_for_stream(&state, &stream_id).await?;
    tracing::info!("Debate topic {} removed from stream {}", topic.id, stream_id);
    Ok(TopicResponse::message_only(i18n::t("topic.deleted")))
}

/// Public lookup used by the audience app: the stream's topic when `stream_id`
/// is given, otherwise the global debate.
pub async fn public_topic(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PublicTopicQuery>,
) -> TopicAppResult<Json<TopicResponse<PublicTopic>>> {
    match query.stream_id.filter(|id| !id.is_empty()) {
        Some(stream_id) => {
            let topic = DebateTopicService::get_for_stream(&state, &stream_id).await?;
            Ok(TopicResponse::data(topic.into()))
        }
        None => {
            let debate = DebateRepository::get(&state.store).await;
            Ok(TopicResponse::data(debate.into()))
        }
    }
}
