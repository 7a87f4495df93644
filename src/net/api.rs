//! HTTP gateway client for the identity service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side / test builds: stubs returning [`ApiError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each operation is a single request/response round trip with no retry.
//! Response bodies are parsed as JSON regardless of HTTP status and handed
//! back as an [`Envelope`]; deciding what a body *means* is the job of
//! [`crate::net::outcome`]. Operations that require the refresh token fail
//! fast with [`ApiError::MissingToken`] before any network I/O.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{
    AppsResponse, AuthorizeResponse, Envelope, LoginResponse, LogoutResponse, SignupRequest,
    SignupResponse,
};
use crate::util::config;

/// Failures raised by the gateway client itself, before any
/// application-level classification.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// An authorized call was attempted with no refresh token held.
    #[error("no refresh token available")]
    MissingToken,
    /// Transport-level failure (request build or send).
    #[error("request failed: {0}")]
    Network(String),
    /// The response body could not be decoded as JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Not running in a browser.
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{}/oauth/login", config::api_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint() -> String {
    format!("{}/oauth/account/create", config::api_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn authorize_endpoint() -> String {
    format!("{}/oauth/account/authorize", config::api_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn get_apps_endpoint() -> String {
    format!("{}/oauth/account/get-apps", config::api_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint() -> String {
    format!("{}/oauth/logout", config::api_url())
}

/// Require a non-empty refresh token for bearer-authenticated calls.
fn bearer_token(refresh_token: Option<&str>) -> Result<&str, ApiError> {
    match refresh_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::MissingToken),
    }
}

/// `POST /oauth/login` with email and password, no auth header.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or decode failure.
pub async fn login(email: &str, password: &str) -> Result<Envelope<LoginResponse>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        post_json(&login_endpoint(), &payload, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// `POST /oauth/account/create`, no auth header.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or decode failure.
pub async fn signup(request: &SignupRequest) -> Result<Envelope<SignupResponse>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&signup_endpoint(), request, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// `POST /oauth/account/authorize` with a bearer refresh token.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] before any network call when no
/// token is held, otherwise [`ApiError`] on transport or decode failure.
pub async fn authorize_app(
    refresh_token: Option<&str>,
    app_key: &str,
) -> Result<Envelope<AuthorizeResponse>, ApiError> {
    let token = bearer_token(refresh_token)?;
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "app_key": app_key });
        post_json(&authorize_endpoint(), &payload, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, app_key);
        Err(ApiError::Unavailable)
    }
}

/// `GET /oauth/account/get-apps`.
///
/// The bearer header is only attached when the client is configured to
/// authenticate this endpoint; see [`config::AUTHENTICATE_APP_LIST`].
///
/// # Errors
///
/// Returns [`ApiError`] on transport or decode failure.
pub async fn get_apps(refresh_token: Option<&str>) -> Result<Envelope<AppsResponse>, ApiError> {
    let token = if config::AUTHENTICATE_APP_LIST {
        Some(bearer_token(refresh_token)?)
    } else {
        None
    };
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(&get_apps_endpoint());
        if let Some(token) = token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_envelope(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `POST /oauth/logout` with a bearer refresh token, empty body.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] before any network call when no
/// token is held, otherwise [`ApiError`] on transport or decode failure.
pub async fn logout(refresh_token: Option<&str>) -> Result<Envelope<LogoutResponse>, ApiError> {
    let token = bearer_token(refresh_token)?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&logout_endpoint())
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_envelope(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(
    url: &str,
    body: &B,
    bearer: Option<&str>,
) -> Result<Envelope<T>, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let mut req = gloo_net::http::Request::post(url);
    if let Some(token) = bearer {
        req = req.header("Authorization", &format!("Bearer {token}"));
    }
    let resp = req
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(resp).await
}

#[cfg(feature = "hydrate")]
async fn read_envelope<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<Envelope<T>, ApiError> {
    let status = resp.status();
    let data = resp
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(Envelope { data, status })
}
