//! Shared input checks for the auth forms.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Cheap structural email check: one `@`, a non-empty local part, a dotted
/// domain, no whitespace. Real validation is the server's job; this only
/// catches obvious typos before a round trip.
pub(crate) fn looks_like_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
