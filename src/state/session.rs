//! Persisted session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives page reloads through a localStorage entry, with the
//! refresh token mirrored into a 15-day cookie as a secondary persistence
//! channel. The flow controller and gateway client receive the store as an
//! explicit context object; nothing reads ambient global state.
//!
//! DESIGN
//! ======
//! `Session` is a plain value record with pure transitions so the
//! authentication invariant stays unit-testable; `SessionStore` wraps it in
//! a signal and attaches the persistence side effects to each mutation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::{LoginResponse, User};
use crate::util::{config, cookie, storage};

/// All session fields, replaced atomically on login and logout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub login_result: Option<LoginResponse>,
}

impl Session {
    /// True iff a non-empty refresh token AND a user record are present.
    ///
    /// Purely structural; token expiry is the identity service's concern
    /// and surfaces as eventual 401s on authorized calls.
    pub fn is_authenticated(&self) -> bool {
        self.refresh_token.as_deref().is_some_and(|t| !t.is_empty()) && self.user.is_some()
    }

    /// Install a successful login wholesale: token, user, and the full
    /// server response (including an access token when one was issued).
    pub fn apply_login(&mut self, user: User, refresh_token: String, raw: LoginResponse) {
        self.refresh_token = Some(refresh_token);
        self.access_token = raw.access_token.clone();
        self.user = Some(user);
        self.login_result = Some(raw);
    }

    /// Wipe all four fields.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Reactive handle to the session, provided via context at the app root.
#[derive(Clone, Copy)]
pub struct SessionStore(RwSignal<Session>);

impl SessionStore {
    /// Fresh store with an empty session.
    pub fn new() -> Self {
        Self(RwSignal::new(Session::default()))
    }

    /// Rehydrate from the persisted localStorage entry, if present.
    pub fn restore() -> Self {
        let session = storage::load_json::<Session>(config::STORAGE_KEY).unwrap_or_default();
        Self(RwSignal::new(session))
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.with(Session::is_authenticated)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.0.with(|s| s.refresh_token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.0.with(|s| s.user.clone())
    }

    /// Set the refresh token and mirror it into the companion cookie.
    pub fn set_refresh_token(&self, token: String) {
        cookie::set(config::REFRESH_COOKIE, &token, config::REFRESH_COOKIE_DAYS);
        self.0.update(|s| s.refresh_token = Some(token));
        self.persist();
    }

    pub fn set_access_token(&self, token: String) {
        self.0.update(|s| s.access_token = Some(token));
        self.persist();
    }

    pub fn set_user(&self, user: User) {
        self.0.update(|s| s.user = Some(user));
        self.persist();
    }

    pub fn set_login_result(&self, result: LoginResponse) {
        self.0.update(|s| s.login_result = Some(result));
        self.persist();
    }

    /// Install an accepted login in one transition (single persist write,
    /// single reactive update).
    pub fn login(&self, user: User, refresh_token: String, raw: LoginResponse) {
        cookie::set(config::REFRESH_COOKIE, &refresh_token, config::REFRESH_COOKIE_DAYS);
        self.0.update(|s| s.apply_login(user, refresh_token, raw));
        self.persist();
    }

    /// Wipe the session, the persisted copy, and the token cookie.
    pub fn clear(&self) {
        self.0.update(Session::clear);
        cookie::delete(config::REFRESH_COOKIE);
        storage::remove(config::STORAGE_KEY);
    }

    fn persist(&self) {
        self.0.with_untracked(|s| storage::save_json(config::STORAGE_KEY, s));
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
