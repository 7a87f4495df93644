//! Classification of raw response envelopes into per-endpoint outcomes.
//!
//! DESIGN
//! ======
//! The gateway hands back `{ body, status }` envelopes without judging
//! them. This module turns each envelope into a discriminated outcome so
//! the orchestration layer can match exhaustively instead of probing
//! loosely-typed fields. An operation counts as accepted only when the
//! HTTP status is 200 AND the body's `result.success` flag is set.
//!
//! User-facing fallback strings live here next to the classification that
//! selects them.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use super::types::{
    AppDescriptor, AppsResponse, AuthorizeResponse, Envelope, LoginResponse, LogoutResponse,
    SignupResponse, User,
};

pub const LOGIN_SUCCESS_NOTICE: &str = "Giriş başarılı!";
pub const LOGIN_REJECTED_FALLBACK: &str = "Giriş başarısız";
pub const LOGIN_TRANSPORT_ERROR: &str = "Giriş sırasında bir hata oluştu";

pub const SIGNUP_CREATED_NOTICE: &str = "Hesap oluşturuldu! Email adresinizi kontrol edin.";
pub const SIGNUP_REJECTED_FALLBACK: &str = "Hesap oluşturulamadı";
pub const SIGNUP_TRANSPORT_ERROR: &str = "Hesap oluşturma sırasında bir hata oluştu";

pub const AUTHORIZE_FAILED_FALLBACK: &str = "Authorization failed";
pub const APPS_FAILED_FALLBACK: &str = "Failed to fetch apps";

pub const LOGOUT_CONFIRMED_NOTICE: &str = "Başarıyla çıkış yapıldı";
pub const LOGOUT_LOCAL_NOTICE: &str = "Çıkış yapıldı";

fn accepted<T>(env: &Envelope<T>, success: bool) -> bool {
    env.status == 200 && success
}

fn rejection_message(message: Option<String>, fallback: &str) -> String {
    match message {
        Some(msg) if !msg.is_empty() => msg,
        _ => fallback.to_owned(),
    }
}

/// Outcome of a login attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// Server accepted the credentials and returned a usable session.
    Accepted {
        user: User,
        refresh_token: String,
        raw: LoginResponse,
    },
    /// Server answered but did not grant a session.
    Rejected { message: String },
}

/// Classify a login envelope.
///
/// A response that claims success but omits the user record or the refresh
/// token cannot produce an authenticated session, so it is treated as a
/// rejection rather than stored half-empty.
pub fn classify_login(env: Envelope<LoginResponse>) -> LoginOutcome {
    if accepted(&env, env.data.result.success) {
        if let (Some(user), Some(token)) = (env.data.user.clone(), env.data.refresh_token.clone()) {
            return LoginOutcome::Accepted {
                user,
                refresh_token: token,
                raw: env.data,
            };
        }
    }
    LoginOutcome::Rejected {
        message: rejection_message(env.data.result.message, LOGIN_REJECTED_FALLBACK),
    }
}

/// Outcome of an account-creation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    Created,
    Rejected { message: String },
}

/// Classify a signup envelope.
pub fn classify_signup(env: Envelope<SignupResponse>) -> SignupOutcome {
    if accepted(&env, env.data.result.success) {
        SignupOutcome::Created
    } else {
        SignupOutcome::Rejected {
            message: rejection_message(env.data.result.message, SIGNUP_REJECTED_FALLBACK),
        }
    }
}

/// Classify an authorize envelope into the full grant body or an error
/// message. The grant is returned whole since the redirect logic needs
/// more than the `redirect_uri` field.
pub fn classify_authorize(env: Envelope<AuthorizeResponse>) -> Result<AuthorizeResponse, String> {
    if accepted(&env, env.data.result.success) {
        Ok(env.data)
    } else {
        Err(rejection_message(env.data.result.message, AUTHORIZE_FAILED_FALLBACK))
    }
}

/// Classify an app-list envelope into the raw app list or an error message.
/// Filtering to available apps is left to the presentation layer.
pub fn classify_apps(env: Envelope<AppsResponse>) -> Result<Vec<AppDescriptor>, String> {
    if accepted(&env, env.data.result.success) {
        Ok(env.data.apps)
    } else {
        Err(rejection_message(env.data.result.message, APPS_FAILED_FALLBACK))
    }
}

/// Whether the server confirmed the logout. Local session clearing does not
/// depend on this; it only selects the notice text.
pub fn logout_confirmed(env: &Envelope<LogoutResponse>) -> bool {
    accepted(env, env.data.result.success)
}
