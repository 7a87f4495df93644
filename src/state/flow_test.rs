use super::*;

#[test]
fn unauthenticated_always_sees_login() {
    // Even with a requested app in the URL, the visitor gets the forms.
    assert_eq!(
        screen_for(false, Some("dashboard"), AuthorizePhase::Idle),
        Screen::Login
    );
    assert_eq!(screen_for(false, None, AuthorizePhase::Idle), Screen::Login);
    assert_eq!(
        screen_for(false, Some("dashboard"), AuthorizePhase::Ready),
        Screen::Login
    );
}

#[test]
fn authenticated_without_selection_sees_app_picker() {
    assert_eq!(screen_for(true, None, AuthorizePhase::Idle), Screen::AppPicker);
}

#[test]
fn empty_app_key_counts_as_no_selection() {
    assert_eq!(screen_for(true, Some(""), AuthorizePhase::Idle), Screen::AppPicker);
}

#[test]
fn authorize_in_flight_shows_checking_screen() {
    assert_eq!(
        screen_for(true, Some("dashboard"), AuthorizePhase::Pending),
        Screen::CheckingAuthorization
    );
}

#[test]
fn selected_app_before_request_fires_shows_starting_screen() {
    assert_eq!(
        screen_for(true, Some("dashboard"), AuthorizePhase::Idle),
        Screen::StartingAuthorization
    );
}

#[test]
fn received_grant_moves_to_redirecting() {
    assert_eq!(
        screen_for(true, Some("dashboard"), AuthorizePhase::Ready),
        Screen::Redirecting
    );
}

#[test]
fn failed_authorize_stays_on_fallback_loading() {
    assert_eq!(
        screen_for(true, Some("dashboard"), AuthorizePhase::Failed),
        Screen::Loading
    );
}
