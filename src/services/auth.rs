//! Stub login.
//!
//! There is no credential exchange: any non-empty code "authenticates" as the
//! first user of the roster and receives an opaque token that nothing checks.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::store::{User, UserRepository};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub token: String,
    /// `None` once every user has been deleted.
    pub user_info: Option<User>,
    /// Seconds
    pub expires_in: u64,
}

pub struct AuthService;

impl AuthService {
    pub async fn login(state: &Arc<AppState>, code: Option<&str>) -> AppResult<LoginSession> {
        if code.map_or(true, |c| c.trim().is_empty()) {
            return Err(AppError::Validation(i18n::t("validation.login_code_missing")));
        }

        let user_info = UserRepository::first(&state.store).await;
        if user_info.is_none() {
            tracing::warn!("Login stub called with an empty user roster");
        }

        Ok(LoginSession {
            token: format!("mock-token-{}", Uuid::new_v4()),
            user_info,
            expires_in: state.config.auth.token_expires_in,
        })
    }
}
