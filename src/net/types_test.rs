use super::*;

#[test]
fn app_without_redirect_uri_is_not_available() {
    let app = AppDescriptor {
        key: "a".to_owned(),
        name: "A".to_owned(),
        redirect_uri: None,
    };
    assert!(!app.is_available());
}

#[test]
fn app_with_empty_redirect_uri_is_not_available() {
    let app = AppDescriptor {
        key: "a".to_owned(),
        name: "A".to_owned(),
        redirect_uri: Some(String::new()),
    };
    assert!(!app.is_available());
}

#[test]
fn available_apps_filters_to_entries_with_redirect_targets() {
    let apps = vec![
        AppDescriptor {
            key: "a".to_owned(),
            name: "A".to_owned(),
            redirect_uri: Some(String::new()),
        },
        AppDescriptor {
            key: "b".to_owned(),
            name: "B".to_owned(),
            redirect_uri: Some("https://x".to_owned()),
        },
    ];
    let available = available_apps(apps);
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].key, "b");
}

#[test]
fn login_response_parses_success_body() {
    let body: LoginResponse = serde_json::from_str(
        r#"{
            "result": {"success": true, "message": "ok"},
            "user": {"username": "ayse", "id": 7},
            "refresh_token": "tok-123"
        }"#,
    )
    .unwrap();
    assert!(body.result.success);
    assert_eq!(body.user.as_ref().unwrap().username, "ayse");
    assert_eq!(body.user.as_ref().unwrap().extra["id"], 7);
    assert_eq!(body.refresh_token.as_deref(), Some("tok-123"));
    assert_eq!(body.access_token, None);
}

#[test]
fn login_response_tolerates_missing_fields() {
    let body: LoginResponse = serde_json::from_str("{}").unwrap();
    assert!(!body.result.success);
    assert!(body.user.is_none());
    assert!(body.refresh_token.is_none());
}

#[test]
fn authorize_response_keeps_unknown_fields() {
    let body: AuthorizeResponse = serde_json::from_str(
        r#"{
            "result": {"success": true},
            "redirect_uri": "https://dash/cb?tok=XYZ",
            "scope": "all"
        }"#,
    )
    .unwrap();
    assert_eq!(body.redirect_uri.as_deref(), Some("https://dash/cb?tok=XYZ"));
    assert_eq!(body.extra["scope"], "all");
}

#[test]
fn apps_response_defaults_to_empty_list() {
    let body: AppsResponse = serde_json::from_str(r#"{"result": {"success": true}}"#).unwrap();
    assert!(body.apps.is_empty());
}
