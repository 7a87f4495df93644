//! Environment-selected hosts and fixed client constants.
//!
//! DESIGN
//! ======
//! The only externally recognized configuration is the pair of base URLs,
//! chosen by build profile: debug builds talk to the local development
//! stack, release builds to the production hosts. Everything else is a
//! fixed constant of the client.

/// Base URL of the REST API host.
pub fn api_url() -> &'static str {
    if cfg!(debug_assertions) {
        "http://localhost:80"
    } else {
        "https://api.gezcez.com"
    }
}

/// Base URL of the OAuth portal host (used for absolute links back to
/// this application, e.g. the terms-of-service page).
pub fn oauth_url() -> &'static str {
    if cfg!(debug_assertions) {
        "http://localhost:8081"
    } else {
        "https://oauth.gezcez.com"
    }
}

/// localStorage key holding the serialized session.
pub const STORAGE_KEY: &str = "gezcez-oauth-storage";

/// Cookie name for the secondary refresh-token persistence channel.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Lifetime of the refresh-token cookie, in days.
pub const REFRESH_COOKIE_DAYS: u32 = 15;

/// Delay before the browser is sent to the authorized application.
pub const REDIRECT_DELAY_MS: u32 = 1_000;

/// Delay before the full page reload that follows a logout.
pub const RELOAD_DELAY_MS: u32 = 500;

/// Whether the app-list fetch sends the bearer token.
///
/// The identity service currently serves `/oauth/account/get-apps` without
/// authentication even though the UI only reaches it after login. Kept as
/// an explicit switch so flipping the endpoint to authenticated is a
/// one-line change here rather than a silent behavior assumption.
pub const AUTHENTICATE_APP_LIST: bool = false;
