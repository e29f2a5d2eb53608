//! # Session Guard
//!
//! Authentication lives with an external identity provider; this module
//! only gates dashboard entry on it. The session is resolved once per route
//! entry from the caller's bearer token and threaded through explicitly, so
//! there is no process-wide auth flag to get stale.

use axum::http::{HeaderMap, header::AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::error::AppError;

/// An authenticated dashboard session.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Asks the identity provider who the caller is. Anything short of a valid
/// session (missing token, provider unreachable, non-2xx, malformed
/// payload) refuses entry with the login redirect; none of it is fatal.
pub async fn resolve_session(
    client: &Client,
    auth_url: &str,
    headers: &HeaderMap,
) -> Result<Session, AppError> {
    let Some(token) = bearer_token(headers) else {
        return Err(AppError::Unauthenticated);
    };

    let response = client
        .get(format!("{auth_url}/session"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| {
            warn!("Session lookup failed: {e}");
            AppError::Unauthenticated
        })?;

    if !response.status().is_success() {
        return Err(AppError::Unauthenticated);
    }

    response.json::<Session>().await.map_err(|e| {
        warn!("Malformed session payload: {e}");
        AppError::Unauthenticated
    })
}

/// Best-effort sign-out at the identity provider. Provider failures are
/// logged and swallowed; the caller is sent to the login route either way.
pub async fn sign_out(client: &Client, auth_url: &str, headers: &HeaderMap) {
    let Some(token) = bearer_token(headers) else {
        return;
    };

    match client
        .post(format!("{auth_url}/signout"))
        .bearer_auth(token)
        .send()
        .await
    {
        Ok(response) if response.status().is_success() => {}
        Ok(response) => warn!("Sign-out rejected by identity provider: {}", response.status()),
        Err(e) => warn!("Sign-out call failed: {e}"),
    }
}
