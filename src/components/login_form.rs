//! Login form: email + password against `POST /oauth/login`.
//!
//! ERROR HANDLING
//! ==============
//! Local validation failures render inline; server rejections and transport
//! failures become transient notices. A successful login replaces the
//! session wholesale; the flow controller re-renders from there.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use super::validation::looks_like_email;
use crate::state::notices::NoticeHub;
use crate::state::session::SessionStore;

const FIELDS_REQUIRED: &str = "Email ve şifre gereklidir";
const EMAIL_INVALID: &str = "Geçerli bir email adresi girin";

/// Trim and check the login fields before any network call.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(FIELDS_REQUIRED);
    }
    if !looks_like_email(email) {
        return Err(EMAIL_INVALID);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<NoticeHub>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Err(msg) => field_error.set(Some(msg)),
            Ok((email_value, password_value)) => {
                field_error.set(None);
                busy.set(true);

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    use crate::net::outcome::{self, LoginOutcome};

                    match crate::net::api::login(&email_value, &password_value).await {
                        Ok(env) => match outcome::classify_login(env) {
                            LoginOutcome::Accepted {
                                user,
                                refresh_token,
                                raw,
                            } => {
                                session.login(user, refresh_token, raw);
                                notices.success(outcome::LOGIN_SUCCESS_NOTICE);
                            }
                            LoginOutcome::Rejected { message } => notices.error(message),
                        },
                        Err(err) => {
                            log::error!("login request failed: {err}");
                            notices.error(outcome::LOGIN_TRANSPORT_ERROR);
                        }
                    }
                    busy.set(false);
                });

                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (email_value, password_value, session, notices);
                    busy.set(false);
                }
            }
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="ornek@email.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Şifre"
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="••••••••"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || field_error.get().is_some()>
                <p class="auth-form__error">{move || field_error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Giriş Yap"
            </button>
        </form>
    }
}
