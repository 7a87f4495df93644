//! Refresh-token cookie management.
//!
//! The refresh token is mirrored into a plain cookie as a secondary
//! persistence channel next to the localStorage session entry, so other
//! first-party surfaces can pick it up without parsing the stored session.
//! Cookie-string formatting is kept pure so expiry math stays testable.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

const SECONDS_PER_DAY: u64 = 86_400;

/// Format a `Set-Cookie`-style document.cookie assignment with a
/// max-age measured in days.
pub fn cookie_string(name: &str, value: &str, max_age_days: u32) -> String {
    let max_age = u64::from(max_age_days) * SECONDS_PER_DAY;
    format!("{name}={value}; max-age={max_age}; path=/")
}

/// Format an assignment that deletes the named cookie.
pub fn expired_cookie_string(name: &str) -> String {
    format!("{name}=; max-age=0; path=/")
}

/// Write `name=value` with the given lifetime to `document.cookie`.
pub fn set(name: &str, value: &str, max_age_days: u32) {
    write_document_cookie(&cookie_string(name, value, max_age_days));
}

/// Delete the named cookie.
pub fn delete(name: &str) {
    write_document_cookie(&expired_cookie_string(name));
}

#[cfg(feature = "hydrate")]
fn write_document_cookie(assignment: &str) {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(html_doc) = doc.dyn_into::<web_sys::HtmlDocument>() {
        let _ = html_doc.set_cookie(assignment);
    }
}

#[cfg(not(feature = "hydrate"))]
fn write_document_cookie(assignment: &str) {
    let _ = assignment;
}
