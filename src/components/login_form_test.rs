use super::*;

#[test]
fn validate_login_input_trims_email_and_passes_through() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err(FIELDS_REQUIRED));
    assert_eq!(validate_login_input("user@example.com", ""), Err(FIELDS_REQUIRED));
    assert_eq!(validate_login_input("   ", ""), Err(FIELDS_REQUIRED));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("not-an-email", "secret"), Err(EMAIL_INVALID));
}
