use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::routes::envelope::ApiResponse;
use crate::services::playback::PlayUrls;
use crate::services::streams::{CreateStreamRequest, StreamService, UpdateStreamRequest};
use crate::store::{DebateTopicRepository, Stream, StreamRepository, TopicSummary};
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/streams", get(list_streams).post(create_stream))
        .route("/streams/:id", put(update_stream).delete(delete_stream))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListStreamsQuery {
    #[serde(rename = "includeDebateTopic")]
    pub include_debate_topic: Option<String>,
}

/// Live status placeholder; no media server is polled.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStatus {
    pub is_live: bool,
    pub live_id: Option<String>,
    pub start_time: Option<String>,
    pub stop_time: Option<String>,
    pub stream_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamView {
    #[serde(flatten)]
    pub stream: Stream,
    pub play_urls: PlayUrls,
    pub live_status: LiveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debate_topic: Option<TopicSummary>,
}

#[derive(Debug, Serialize)]
pub struct StreamList {
    pub streams: Vec<StreamView>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct DeletedStream {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// List streams with derived playback URLs, optionally embedding each stream's topic.
async fn list_streams(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListStreamsQuery>,
) -> Json<ApiResponse<StreamList>> {
    let include_topic = query.include_debate_topic.as_deref() == Some("true");

    let streams = StreamRepository::list(&state.store).await;
    let topics = if include_topic {
        DebateTopicRepository::list(&state.store).await
    } else {
        Vec::new()
    };

    let total = streams.len();
    let views = streams
        .into_iter()
        .map(|stream| StreamView {
            play_urls: PlayUrls::for_stream(&stream, &state.config.streaming),
            live_status: LiveStatus {
                is_live: false,
                live_id: None,
                start_time: None,
                stop_time: None,
                stream_url: stream.url.clone(),
            },
            debate_topic: topics
                .iter()
                .find(|t| t.stream_id == stream.id)
                .map(TopicSummary::from),
            stream,
        })
        .collect();

    ApiResponse::ok(StreamList {
        streams: views,
        total,
    })
}

async fn create_stream(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(request), _): WithRejection<Json<CreateStreamRequest>, AppError>,
) -> AppResult<Json<ApiResponse<Stream>>> {
    let stream = StreamService::create(&state, request).await?;
    Ok(ApiResponse::with_message(i18n::t("stream.created"), stream))
}

/// The body is decoded only after the stream is known to exist, so an unknown
/// id answers 404 whatever the payload holds.
async fn update_stream(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateStreamRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Stream>>> {
    StreamService::get(&state, &id).await?;
    let Json(request) = body?;

    let stream = StreamService::update(&state, &id, request).await?;
    Ok(ApiResponse::with_message(i18n::t("stream.updated"), stream))
}

async fn delete_stream(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<DeletedStream>>> {
    let stream = StreamService::delete(&state, &id).await?;
    Ok(ApiResponse::with_message(
        i18n::t("stream.deleted"),
        DeletedStream {
            id: stream.id,
            name: stream.name,
        },
    ))
}
