//! Response envelopes.
//!
//! Two shapes coexist on the wire and existing clients depend on both:
//! `{ code, message, data }` for most endpoints and `{ success, data?, message? }`
//! for the debate-topic endpoints. Errors in either shape are rendered by
//! `AppError` / `TopicAppError`.

use axum::Json;
use serde::Serialize;

use crate::i18n;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Self::with_message(i18n::t("common.success"), data)
    }

    pub fn with_message(message: String, data: T) -> Json<Self> {
        Json(Self {
            code: 0,
            message,
            data,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TopicResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> TopicResponse<T> {
    pub fn data(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: None,
            data: Some(data),
        })
    }

    pub fn with_message(message: String, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message),
            data: Some(data),
        })
    }
}

impl TopicResponse<()> {
    pub fn message_only(message: String) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message),
            data: None,
        })
    }
}
