use super::*;

#[test]
fn login_subtitle_names_the_dashboard_specially() {
    assert_eq!(login_subtitle(Some("dashboard")), "Dashboard'a giriş yapın");
}

#[test]
fn login_subtitle_names_other_apps_generically() {
    assert_eq!(login_subtitle(Some("harita")), "harita uygulamasına giriş yapın");
}

#[test]
fn login_subtitle_plain_when_no_app_requested() {
    assert_eq!(login_subtitle(None), "Giriş yapın");
    assert_eq!(login_subtitle(Some("")), "Giriş yapın");
}

#[test]
fn authorize_requires_both_token_and_app_key() {
    assert_eq!(authorize_inputs(None, Some("dashboard".to_owned())), None);
    assert_eq!(authorize_inputs(Some("tok".to_owned()), None), None);
    assert_eq!(authorize_inputs(Some("tok".to_owned()), Some(String::new())), None);
    assert_eq!(authorize_inputs(Some(String::new()), Some("dashboard".to_owned())), None);
    assert_eq!(
        authorize_inputs(Some("tok".to_owned()), Some("dashboard".to_owned())),
        Some(("tok".to_owned(), "dashboard".to_owned()))
    );
}

#[test]
fn authorize_phase_maps_resource_slots() {
    assert_eq!(authorize_phase(None), AuthorizePhase::Pending);
    assert_eq!(authorize_phase(Some(&None)), AuthorizePhase::Idle);
    assert_eq!(
        authorize_phase(Some(&Some(Ok(AuthorizeResponse::default())))),
        AuthorizePhase::Ready
    );
    assert_eq!(
        authorize_phase(Some(&Some(Err("denied".to_owned())))),
        AuthorizePhase::Failed
    );
}
