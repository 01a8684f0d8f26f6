use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Judge,
}

impl UserRole {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "user" => Some(UserRole::User),
            "judge" => Some(UserRole::Judge),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Identifier issued by the external login provider
    pub openid: String,
    pub nickname: String,
    pub avatar: String,
    pub role: UserRole,
    pub is_online: bool,
    pub last_active_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub openid: Option<String>,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<UserRole>,
    pub is_online: Option<bool>,
    pub last_active_time: Option<DateTime<Utc>>,
}
