//! Wire DTOs for the identity-service endpoints.
//!
//! DESIGN
//! ======
//! Every response carries a nested `result` object with a success flag and
//! an optional human-readable message. Fields the client does not interpret
//! are preserved through open-ended `extra` maps so the full server payload
//! can be stored or forwarded without loss.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Nested `result` object present on every response body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OpResult {
    /// Application-level success flag (independent of HTTP status).
    #[serde(default)]
    pub success: bool,
    /// Optional server-supplied message, shown to the user on failure.
    #[serde(default)]
    pub message: Option<String>,
}

/// Authenticated user record as returned by the login endpoint.
///
/// Only `username` is interpreted client-side; the remaining fields are
/// carried verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body for `POST /oauth/account/create`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub tos: bool,
}

/// Response body of `POST /oauth/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub result: OpResult,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Response body of `POST /oauth/account/create`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub result: OpResult,
}

/// Response body of `POST /oauth/account/authorize`.
///
/// On success the service usually includes a complete `redirect_uri` with
/// the token already embedded. Unknown fields are kept so the grant can be
/// handed to the redirect logic in full.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorizeResponse {
    #[serde(default)]
    pub result: OpResult,
    #[serde(default)]
    pub redirect_uri: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response body of `GET /oauth/account/get-apps`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppsResponse {
    #[serde(default)]
    pub result: OpResult,
    #[serde(default)]
    pub apps: Vec<AppDescriptor>,
}

/// Response body of `POST /oauth/logout`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub result: OpResult,
}

/// A downstream application registered with the identity service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub redirect_uri: Option<String>,
}

impl AppDescriptor {
    /// An app can only be entered when it has a configured redirect target.
    pub fn is_available(&self) -> bool {
        self.redirect_uri.as_deref().is_some_and(|uri| !uri.is_empty())
    }
}

/// Keep only the apps the user can actually be redirected into.
pub fn available_apps(apps: Vec<AppDescriptor>) -> Vec<AppDescriptor> {
    apps.into_iter().filter(AppDescriptor::is_available).collect()
}

/// A parsed response body together with the HTTP status it arrived with.
///
/// Bodies are parsed regardless of status; classification happens in
/// [`crate::net::outcome`].
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
    pub status: u16,
}
