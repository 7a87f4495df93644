//! Home page: the authentication/authorization flow controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the requested app (`?app=`) and redirect base (`?redirect_uri=`)
//! from the URL, combines them with session state and the authorize
//! request's progress, and renders one of the flow screens. When a grant
//! arrives, a redirect to the target application is scheduled after a
//! fixed delay; the timer handle is held and cancelled on cleanup so a
//! stale redirect can never fire after navigating away.
//!
//! The authorize request is a `LocalResource` keyed by the refresh token
//! and the selected app key: it fires only when both are present and
//! re-fires only when either changes. Failures leave the flow on a loading
//! screen; the service offers no retry for a failed authorize.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::app_selector::AppSelector;
use crate::components::loading_card::LoadingCard;
use crate::components::login_form::LoginForm;
use crate::components::notice_stack::NoticeStack;
use crate::components::signup_form::SignupForm;
use crate::net::outcome;
use crate::net::types::AuthorizeResponse;
use crate::state::flow::{self, AuthorizePhase, Screen};
use crate::state::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::util::{config, redirect};

/// Card subtitle naming the application the visitor is signing in to.
fn login_subtitle(selected_app: Option<&str>) -> String {
    match selected_app.filter(|a| !a.is_empty()) {
        Some("dashboard") => "Dashboard'a giriş yapın".to_owned(),
        Some(app) => format!("{app} uygulamasına giriş yapın"),
        None => "Giriş yapın".to_owned(),
    }
}

/// Map the authorize resource slot onto a flow phase.
///
/// `None` means the fetcher is running; `Some(None)` means it resolved
/// without firing (preconditions unmet).
fn authorize_phase(slot: Option<&Option<Result<AuthorizeResponse, String>>>) -> AuthorizePhase {
    match slot {
        None => AuthorizePhase::Pending,
        Some(None) => AuthorizePhase::Idle,
        Some(Some(Ok(_))) => AuthorizePhase::Ready,
        Some(Some(Err(_))) => AuthorizePhase::Failed,
    }
}

/// Both preconditions for the authorize call: a non-empty refresh token
/// and a non-empty app key. Anything less and no network call is made.
fn authorize_inputs(
    refresh_token: Option<String>,
    app_key: Option<String>,
) -> Option<(String, String)> {
    let token = refresh_token.filter(|t| !t.is_empty())?;
    let app_key = app_key.filter(|a| !a.is_empty())?;
    Some((token, app_key))
}

/// Run the authorize call iff both preconditions hold.
async fn run_authorize(
    refresh_token: Option<String>,
    app_key: Option<String>,
) -> Option<Result<AuthorizeResponse, String>> {
    let (token, app_key) = authorize_inputs(refresh_token, app_key)?;
    match crate::net::api::authorize_app(Some(&token), &app_key).await {
        Ok(env) => Some(outcome::classify_authorize(env)),
        Err(err) => Some(Err(err.to_string())),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let query = use_query_map();

    // Requested app from the URL, replaced by the user's pick later.
    let selected_app = RwSignal::new(query.with_untracked(|q| q.get("app")));
    let redirect_param = Memo::new(move |_| query.with(|q| q.get("redirect_uri")));

    let authorize = LocalResource::new(move || {
        let token = session.refresh_token();
        let app_key = selected_app.get();
        run_authorize(token, app_key)
    });

    // Schedule the browser redirect once a grant is in. Held as a
    // cancellable handle: unmounting this page cancels the pending jump.
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        let pending = StoredValue::new_local(None::<Timeout>);
        let scheduled = StoredValue::new(false);

        Effect::new(move || {
            if scheduled.get_value() {
                return;
            }
            let Some(Some(Ok(grant))) = authorize.get() else {
                return;
            };
            let Some(token) = session.refresh_token().filter(|t| !t.is_empty()) else {
                return;
            };
            let Some(app_key) = selected_app.get().filter(|a| !a.is_empty()) else {
                return;
            };
            let target = redirect::resolve_redirect_target(
                grant.redirect_uri.as_deref(),
                redirect_param.get().as_deref(),
                &redirect::current_origin(),
                &token,
                &app_key,
            );
            scheduled.set_value(true);
            let timer = Timeout::new(config::REDIRECT_DELAY_MS, move || redirect::navigate(&target));
            pending.set_value(Some(timer));
        });

        on_cleanup(move || {
            if let Some(timer) = pending.try_update_value(Option::take).flatten() {
                timer.cancel();
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = redirect_param;

    let on_app_select = Callback::new(move |key: String| selected_app.set(Some(key)));

    let screen = move || {
        let phase = authorize_phase(authorize.get().as_ref());
        flow::screen_for(
            session.is_authenticated(),
            selected_app.get().as_deref(),
            phase,
        )
    };

    view! {
        <main class="portal">
            {move || match screen() {
                Screen::Login => {
                    view! { <AuthCard selected_app=selected_app/> }.into_any()
                }
                Screen::AppPicker => {
                    view! { <AppSelector on_select=on_app_select/> }.into_any()
                }
                Screen::CheckingAuthorization => {
                    view! { <LoadingCard message="Yetkilendirme kontrol ediliyor..."/> }.into_any()
                }
                Screen::StartingAuthorization => {
                    view! { <LoadingCard message="Yetkilendirme başlatılıyor..."/> }.into_any()
                }
                Screen::Redirecting | Screen::Loading => {
                    view! { <LoadingCard message="Yükleniyor..."/> }.into_any()
                }
            }}
            <NoticeStack/>
        </main>
    }
}

/// Which auth tab is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthTab {
    #[default]
    Login,
    Signup,
}

/// Tabbed login/signup card shown to unauthenticated visitors.
#[component]
fn AuthCard(selected_app: RwSignal<Option<String>>) -> impl IntoView {
    let tab = RwSignal::new(AuthTab::default());

    view! {
        <div class="screen-center">
            <div class="card">
                <h1 class="card__title">"Gezcez"</h1>
                <p class="card__subtitle">
                    {move || login_subtitle(selected_app.get().as_deref())}
                </p>
                <div class="tabs" role="tablist">
                    <button
                        class="tabs__tab"
                        class=("tabs__tab--active", move || tab.get() == AuthTab::Login)
                        on:click=move |_| tab.set(AuthTab::Login)
                    >
                        "Giriş Yap"
                    </button>
                    <button
                        class="tabs__tab"
                        class=("tabs__tab--active", move || tab.get() == AuthTab::Signup)
                        on:click=move |_| tab.set(AuthTab::Signup)
                    >
                        "Kaydol"
                    </button>
                </div>
                {move || match tab.get() {
                    AuthTab::Login => view! { <LoginForm/> }.into_any(),
                    AuthTab::Signup => view! { <SignupForm/> }.into_any(),
                }}
            </div>
        </div>
    }
}
