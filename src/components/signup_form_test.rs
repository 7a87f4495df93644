use super::*;

fn valid_input() -> SignupInput {
    SignupInput {
        username: "yolcu_42".to_owned(),
        email: "yolcu@example.com".to_owned(),
        password: "gizli-sifre".to_owned(),
        confirm_password: "gizli-sifre".to_owned(),
        tos: true,
    }
}

#[test]
fn valid_input_builds_request_without_confirmation_field() {
    let request = validate_signup_input(&valid_input()).unwrap();
    assert_eq!(request.username, "yolcu_42");
    assert_eq!(request.email, "yolcu@example.com");
    assert_eq!(request.password, "gizli-sifre");
    assert!(request.tos);
}

#[test]
fn username_shorter_than_three_chars_is_rejected() {
    let mut input = valid_input();
    input.username = "ab".to_owned();
    let errors = validate_signup_input(&input).unwrap_err();
    assert_eq!(errors.username, Some(USERNAME_TOO_SHORT));
}

#[test]
fn username_with_other_characters_is_rejected() {
    let mut input = valid_input();
    input.username = "yolcu-42".to_owned();
    let errors = validate_signup_input(&input).unwrap_err();
    assert_eq!(errors.username, Some(USERNAME_BAD_CHARS));
}

#[test]
fn malformed_email_is_rejected() {
    let mut input = valid_input();
    input.email = "yolcu.example.com".to_owned();
    let errors = validate_signup_input(&input).unwrap_err();
    assert_eq!(errors.email, Some(EMAIL_INVALID));
}

#[test]
fn password_length_bounds_are_enforced() {
    let mut input = valid_input();
    input.password = "12345".to_owned();
    input.confirm_password = input.password.clone();
    assert_eq!(
        validate_signup_input(&input).unwrap_err().password,
        Some(PASSWORD_TOO_SHORT)
    );

    input.password = "x".repeat(129);
    input.confirm_password = input.password.clone();
    assert_eq!(
        validate_signup_input(&input).unwrap_err().password,
        Some(PASSWORD_TOO_LONG)
    );

    input.password = "x".repeat(128);
    input.confirm_password = input.password.clone();
    assert!(validate_signup_input(&input).is_ok());
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let mut input = valid_input();
    input.confirm_password = "baska-sifre".to_owned();
    let errors = validate_signup_input(&input).unwrap_err();
    assert_eq!(errors.confirm_password, Some(PASSWORDS_MISMATCH));
}

#[test]
fn unchecked_tos_is_rejected() {
    let mut input = valid_input();
    input.tos = false;
    let errors = validate_signup_input(&input).unwrap_err();
    assert_eq!(errors.tos, Some(TOS_REQUIRED));
}

#[test]
fn all_errors_are_reported_together() {
    let input = SignupInput::default();
    let errors = validate_signup_input(&input).unwrap_err();
    assert!(errors.username.is_some());
    assert!(errors.email.is_some());
    assert!(errors.password.is_some());
    assert!(errors.tos.is_some());
    // Empty confirmation matches the empty password, so no mismatch.
    assert!(errors.confirm_password.is_none());
}
