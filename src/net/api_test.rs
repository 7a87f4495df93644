use super::*;

#[test]
fn endpoints_hang_off_the_api_host() {
    let base = config::api_url();
    assert_eq!(login_endpoint(), format!("{base}/oauth/login"));
    assert_eq!(signup_endpoint(), format!("{base}/oauth/account/create"));
    assert_eq!(authorize_endpoint(), format!("{base}/oauth/account/authorize"));
    assert_eq!(get_apps_endpoint(), format!("{base}/oauth/account/get-apps"));
    assert_eq!(logout_endpoint(), format!("{base}/oauth/logout"));
}

#[test]
fn bearer_token_rejects_missing_token() {
    assert_eq!(bearer_token(None), Err(ApiError::MissingToken));
}

#[test]
fn bearer_token_rejects_empty_token() {
    assert_eq!(bearer_token(Some("")), Err(ApiError::MissingToken));
}

#[test]
fn bearer_token_passes_through_present_token() {
    assert_eq!(bearer_token(Some("tok")), Ok("tok"));
}

#[test]
fn api_error_messages_are_user_loggable() {
    assert_eq!(ApiError::MissingToken.to_string(), "no refresh token available");
    assert_eq!(
        ApiError::Network("timeout".to_owned()).to_string(),
        "request failed: timeout"
    );
}
