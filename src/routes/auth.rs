use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::routes::envelope::ApiResponse;
use crate::services::auth::{AuthService, LoginSession};
use crate::AppState;

/// Login routes. Rate limiting is layered on by the caller.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub code: Option<String>,
}

async fn login(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(request), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AppResult<Json<ApiResponse<LoginSession>>> {
    let session = AuthService::login(&state, request.code.as_deref()).await?;
    Ok(ApiResponse::with_message(i18n::t("auth.logged_in"), session))
}
