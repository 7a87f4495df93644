use super::*;

fn user(name: &str) -> User {
    User {
        username: name.to_owned(),
        extra: serde_json::Map::new(),
    }
}

fn login_body(token: &str) -> LoginResponse {
    LoginResponse {
        refresh_token: Some(token.to_owned()),
        ..LoginResponse::default()
    }
}

#[test]
fn empty_session_is_not_authenticated() {
    assert!(!Session::default().is_authenticated());
}

#[test]
fn token_without_user_is_not_authenticated() {
    let session = Session {
        refresh_token: Some("tok".to_owned()),
        ..Session::default()
    };
    assert!(!session.is_authenticated());
}

#[test]
fn user_without_token_is_not_authenticated() {
    let session = Session {
        user: Some(user("ayse")),
        ..Session::default()
    };
    assert!(!session.is_authenticated());
}

#[test]
fn empty_string_token_is_not_authenticated() {
    let session = Session {
        refresh_token: Some(String::new()),
        user: Some(user("ayse")),
        ..Session::default()
    };
    assert!(!session.is_authenticated());
}

#[test]
fn is_authenticated_matches_field_presence_across_transitions() {
    let mut session = Session::default();
    session.apply_login(user("ayse"), "tok".to_owned(), login_body("tok"));
    assert!(session.is_authenticated());
    session.clear();
    assert!(!session.is_authenticated());
    session.apply_login(user("mehmet"), "tok2".to_owned(), login_body("tok2"));
    assert!(session.is_authenticated());
}

#[test]
fn apply_login_stores_exactly_the_returned_token_and_user() {
    let mut session = Session::default();
    let raw = LoginResponse {
        user: Some(user("ayse")),
        refresh_token: Some("T".to_owned()),
        ..LoginResponse::default()
    };
    session.apply_login(user("ayse"), "T".to_owned(), raw.clone());
    assert_eq!(session.refresh_token.as_deref(), Some("T"));
    assert_eq!(session.user, Some(user("ayse")));
    assert_eq!(session.login_result, Some(raw));
    assert_eq!(session.access_token, None);
}

#[test]
fn apply_login_captures_access_token_when_issued() {
    let mut session = Session::default();
    let raw = LoginResponse {
        access_token: Some("acc".to_owned()),
        ..LoginResponse::default()
    };
    session.apply_login(user("ayse"), "T".to_owned(), raw);
    assert_eq!(session.access_token.as_deref(), Some("acc"));
}

#[test]
fn clear_empties_all_four_fields() {
    let mut session = Session {
        refresh_token: Some("tok".to_owned()),
        access_token: Some("acc".to_owned()),
        user: Some(user("ayse")),
        login_result: Some(LoginResponse::default()),
    };
    session.clear();
    assert_eq!(session, Session::default());
}

#[test]
fn session_round_trips_through_serde() {
    let mut session = Session::default();
    session.apply_login(user("ayse"), "tok".to_owned(), login_body("tok"));
    let raw = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, session);
}
