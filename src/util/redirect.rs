//! Redirect target resolution and browser navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The final step of the authorize flow sends the browser to the chosen
//! application. The identity service normally hands back a complete
//! `redirect_uri` with the token already embedded; when it does not, the
//! client builds a fallback URL from the caller-supplied redirect base (or
//! this origin's `/success` page) plus the refresh token and app key.
//!
//! URL construction is pure and unit-tested; only the `navigate`/`reload`
//! calls touch the browser.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

/// Build the manual fallback redirect URL.
///
/// `redirect_param` is the `?redirect_uri=` query parameter supplied by the
/// caller application, if any.
pub fn fallback_redirect_url(
    redirect_param: Option<&str>,
    origin: &str,
    refresh_token: &str,
    app_key: &str,
) -> String {
    let base = match redirect_param {
        Some(uri) if !uri.is_empty() => uri.to_owned(),
        _ => format!("{origin}/success"),
    };
    format!("{base}?_={refresh_token}&app={app_key}")
}

/// Resolve the URL the browser should be sent to after a successful
/// authorize call.
///
/// A server-provided `redirect_uri` wins and is used verbatim, since the
/// service has already embedded the token in it.
pub fn resolve_redirect_target(
    server_uri: Option<&str>,
    redirect_param: Option<&str>,
    origin: &str,
    refresh_token: &str,
    app_key: &str,
) -> String {
    match server_uri {
        Some(uri) if !uri.is_empty() => uri.to_owned(),
        _ => fallback_redirect_url(redirect_param, origin, refresh_token, app_key),
    }
}

/// Current page origin (e.g. `https://oauth.gezcez.com`), empty off-browser.
pub fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Navigate the browser to `url` (full page navigation, not router-level).
pub fn navigate(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Reload the current page, dropping all in-memory state.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
