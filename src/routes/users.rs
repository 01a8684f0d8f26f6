use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::routes::envelope::ApiResponse;
use crate::store::{UpdateUser, User, UserRepository, UserRole};
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub openid: Option<String>,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
    pub is_online: Option<bool>,
    pub last_active_time: Option<DateTime<Utc>>,
}

impl UpdateUserRequest {
    fn into_update(self) -> AppResult<UpdateUser> {
        let role = match self.role.as_deref() {
            Some(role) => Some(UserRole::parse(role).ok_or_else(|| {
                AppError::Validation(i18n::t("validation.user_role_invalid"))
            })?),
            None => None,
        };

        Ok(UpdateUser {
            openid: self.openid,
            nickname: self.nickname,
            avatar: self.avatar,
            role,
            is_online: self.is_online,
            last_active_time: self.last_active_time,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedUser {
    pub id: String,
    pub nickname: String,
}

// ============================================================================
// Handlers
// ============================================================================

async fn list_users(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<User>>> {
    ApiResponse::ok(UserRepository::list(&state.store).await)
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = UserRepository::find_by_id(&state.store, &id)
        .await
        .ok_or(AppError::UserNotFound)?;
    Ok(ApiResponse::ok(user))
}

/// Merge the provided profile fields into the user.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<User>>> {
    if UserRepository::find_by_id(&state.store, &id).await.is_none() {
        return Err(AppError::UserNotFound);
    }

    let Json(request) = body?;
    let update = request.into_update()?;
    let user = UserRepository::update(&state.store, &id, update)
        .await
        .ok_or(AppError::UserNotFound)?;

    Ok(ApiResponse::with_message(i18n::t("user.updated"), user))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<DeletedUser>>> {
    let user = UserRepository::delete(&state.store, &id)
        .await
        .ok_or(AppError::UserNotFound)?;
    tracing::info!("User deleted: {}", user.id);

    Ok(ApiResponse::with_message(
        i18n::t("user.deleted"),
        DeletedUser {
            id: user.id,
            nickname: user.nickname,
        },
    ))
}
