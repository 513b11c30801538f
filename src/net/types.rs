#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{AccountStatus, Role};

/// Identity payload from `GET /users/details`. A response without `_id` is
/// not a valid identity, which deserialization enforces.
#[derive(Clone, Debug, Deserialize)]
pub struct Identity {
    #[serde(rename = "_id")]
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub status: AccountStatus,
}

/// Successful login payload. The server signals success solely by the
/// presence of the `access` token field.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginOk {
    pub access: String,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest<'a> {
    #[serde(rename = "oldPassword")]
    pub old_password: &'a str,
    #[serde(rename = "newPassword")]
    pub new_password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}

/// Failure of an API call, split by where it failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered but refused the operation (or the expected
    /// payload field was absent). Carries the server-supplied `message`
    /// or a generic fallback.
    #[error("{message}")]
    Rejected { message: String },
    /// The request never produced a usable response.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// Text shown to the user in a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message } => message.clone(),
            ApiError::Transport(_) => "The server is not responding. Please try again.".to_owned(),
        }
    }
}

/// Pull the user-facing rejection text out of an error payload.
pub fn rejection_message(body: &serde_json::Value) -> String {
    body.get("message")
        .and_then(|v| v.as_str())
        .unwrap_or("Request failed")
        .to_owned()
}
