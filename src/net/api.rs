//! REST API helpers for the Kids Hub user endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, authenticated
//! with a bearer token where the endpoint requires one.
//! Server-side (SSR): stubs returning transport errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Success is defined by the wire contract, not the status code alone:
//! a login response without an `access` field and an identity response
//! without `_id` are both `ApiError::Rejected`, carrying the payload's
//! `message` when present. Network-level failures are
//! `ApiError::Transport`. Callers surface `user_message()` in a toast
//! and decide recovery themselves; nothing here retries.

#![allow(clippy::unused_async)]

use super::types::{ApiError, Identity};

#[cfg(feature = "hydrate")]
use super::types::{ChangePasswordRequest, LoginOk, LoginRequest, RegisterRequest, rejection_message};

/// Exchange credentials for a bearer token via `POST /users/login`.
///
/// # Errors
///
/// `Rejected` when the response lacks the `access` field, `Transport` on
/// network failure.
pub async fn login(username: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/users/login")
            .json(&LoginRequest { username, password })
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        match serde_json::from_value::<LoginOk>(body.clone()) {
            Ok(ok) => Ok(ok.access),
            Err(_) => Err(ApiError::Rejected { message: rejection_message(&body) }),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the identity owning `token` via `GET /users/details`.
///
/// # Errors
///
/// `Rejected` when the payload lacks `_id`, `Transport` on network failure.
pub async fn fetch_identity(token: &str) -> Result<Identity, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/users/details")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        match serde_json::from_value::<Identity>(body.clone()) {
            Ok(identity) => Ok(identity),
            Err(_) => Err(ApiError::Rejected { message: rejection_message(&body) }),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Replace the account password via `PATCH /users/change-password`.
///
/// # Errors
///
/// `Rejected` on a non-success status, `Transport` on network failure.
pub async fn change_password(token: &str, old_password: &str, new_password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch("/users/change-password")
            .header("Authorization", &format!("Bearer {token}"))
            .json(&ChangePasswordRequest { old_password, new_password })
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        confirm_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, old_password, new_password);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Keep the current password and activate the account via
/// `PATCH /users/activate`.
///
/// # Errors
///
/// `Rejected` on a non-success status, `Transport` on network failure.
pub async fn activate(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch("/users/activate")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        confirm_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Register a new employee account via `POST /users/register`. Does not
/// touch the acting session.
///
/// # Errors
///
/// `Rejected` on a non-success status, `Transport` on network failure.
pub async fn register(token: &str, username: &str, password: &str, role: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/users/register")
            .header("Authorization", &format!("Bearer {token}"))
            .json(&RegisterRequest { username, password, role })
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        confirm_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, username, password, role);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Map a response with no interesting success payload onto `Result<()>`,
/// extracting the rejection message from the body when the call failed.
#[cfg(feature = "hydrate")]
async fn confirm_ok(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    let message = resp
        .json::<serde_json::Value>()
        .await
        .map_or_else(|_| "Request failed".to_owned(), |body| rejection_message(&body));
    Err(ApiError::Rejected { message })
}
