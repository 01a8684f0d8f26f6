use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::i18n;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Stream not found")]
    StreamNotFound,

    #[error("Debate topic not found")]
    DebateTopicNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::StreamNotFound | AppError::DebateTopicNotFound | AppError::UserNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code used by the `success`-flag envelope.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::StreamNotFound => "STREAM_NOT_FOUND",
            AppError::DebateTopicNotFound => "DEBATE_TOPIC_NOT_FOUND",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to clients. Internal details are logged here and never returned.
    fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::StreamNotFound => i18n::t("not_found.stream"),
            AppError::DebateTopicNotFound => i18n::t("not_found.debate_topic"),
            AppError::UserNotFound => i18n::t("not_found.user"),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                i18n::t("error.internal")
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(i18n::t_with(
            "validation.malformed_body",
            &[("err", &rejection.body_text())],
        ))
    }
}

/// Numeric-code envelope used by most endpoints: `{ code, message, data }`.
#[derive(Serialize)]
struct CodeErrorResponse {
    code: u16,
    message: String,
    data: Option<()>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = CodeErrorResponse {
            code: status.as_u16(),
            message: self.public_message(),
            data: None,
        };

        (status, Json(body)).into_response()
    }
}

/// Error rendered in the boolean `success` envelope used by the debate-topic endpoints.
#[derive(Debug)]
pub struct TopicAppError(pub AppError);

#[derive(Serialize)]
struct FlagErrorResponse {
    success: bool,
    message: String,
    error: &'static str,
}

impl IntoResponse for TopicAppError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let body = FlagErrorResponse {
            success: false,
            message: self.0.public_message(),
            error: self.0.error_code(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AppError> for TopicAppError {
    fn from(error: AppError) -> Self {
        TopicAppError(error)
    }
}

impl From<JsonRejection> for TopicAppError {
    fn from(rejection: JsonRejection) -> Self {
        TopicAppError(AppError::from(rejection))
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type TopicAppResult<T> = Result<T, TopicAppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            AppError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::StreamNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let err = AppError::Internal(anyhow::anyhow!("lock poisoned at store.rs:42"));
        let msg = err.public_message();
        assert!(!msg.contains("store.rs"));
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn topic_errors_carry_distinct_codes() {
        assert_eq!(AppError::StreamNotFound.error_code(), "STREAM_NOT_FOUND");
        assert_eq!(
            AppError::DebateTopicNotFound.error_code(),
            "DEBATE_TOPIC_NOT_FOUND"
        );
    }
}
