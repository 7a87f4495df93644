//! Signup form: account creation against `POST /oauth/account/create`.
//!
//! Validation mirrors the account service's registration rules so most
//! rejections are caught before a round trip: username of at least 3
//! word characters, a plausible email, a 6-128 character password, a
//! matching confirmation, and an accepted terms-of-service box.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

use leptos::prelude::*;

use super::validation::looks_like_email;
use crate::net::types::SignupRequest;
use crate::state::notices::NoticeHub;

const USERNAME_TOO_SHORT: &str = "Kullanıcı adı en az 3 karakter olmalıdır";
const USERNAME_BAD_CHARS: &str = "Kullanıcı adı sadece harf, rakam ve alt çizgi içerebilir";
const EMAIL_INVALID: &str = "Geçerli bir email adresi girin";
const PASSWORD_TOO_SHORT: &str = "Şifre en az 6 karakter olmalıdır";
const PASSWORD_TOO_LONG: &str = "Şifre en fazla 128 karakter olabilir";
const PASSWORDS_MISMATCH: &str = "Şifreler eşleşmiyor";
const TOS_REQUIRED: &str = "Hizmet şartlarını kabul etmelisiniz";

/// Raw form fields as typed.
#[derive(Clone, Debug, Default)]
pub(crate) struct SignupInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub tos: bool,
}

/// Per-field validation errors; empty means the input is acceptable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SignupErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub tos: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.tos.is_none()
    }
}

/// Validate the form and build the request body. The confirmation field is
/// checked here and never sent to the server.
pub(crate) fn validate_signup_input(input: &SignupInput) -> Result<SignupRequest, SignupErrors> {
    let mut errors = SignupErrors::default();
    let username = input.username.trim();
    let email = input.email.trim();

    if username.chars().count() < 3 {
        errors.username = Some(USERNAME_TOO_SHORT);
    } else if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        errors.username = Some(USERNAME_BAD_CHARS);
    }
    if !looks_like_email(email) {
        errors.email = Some(EMAIL_INVALID);
    }
    if input.password.chars().count() < 6 {
        errors.password = Some(PASSWORD_TOO_SHORT);
    } else if input.password.chars().count() > 128 {
        errors.password = Some(PASSWORD_TOO_LONG);
    }
    if input.confirm_password != input.password {
        errors.confirm_password = Some(PASSWORDS_MISMATCH);
    }
    if !input.tos {
        errors.tos = Some(TOS_REQUIRED);
    }

    if errors.is_empty() {
        Ok(SignupRequest {
            email: email.to_owned(),
            password: input.password.clone(),
            username: username.to_owned(),
            tos: input.tos,
        })
    } else {
        Err(errors)
    }
}

#[component]
pub fn SignupForm() -> impl IntoView {
    let notices = expect_context::<NoticeHub>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let tos = RwSignal::new(false);
    let errors = RwSignal::new(SignupErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = SignupInput {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            tos: tos.get(),
        };
        match validate_signup_input(&input) {
            Err(found) => errors.set(found),
            Ok(request) => {
                errors.set(SignupErrors::default());
                busy.set(true);

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    use crate::net::outcome::{self, SignupOutcome};

                    match crate::net::api::signup(&request).await {
                        Ok(env) => match outcome::classify_signup(env) {
                            SignupOutcome::Created => {
                                notices.success(outcome::SIGNUP_CREATED_NOTICE);
                            }
                            SignupOutcome::Rejected { message } => notices.error(message),
                        },
                        Err(err) => {
                            log::error!("signup request failed: {err}");
                            notices.error(outcome::SIGNUP_TRANSPORT_ERROR);
                        }
                    }
                    busy.set(false);
                });

                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (request, notices);
                    busy.set(false);
                }
            }
        }
    };

    let field_error = move |pick: fn(&SignupErrors) -> Option<&'static str>| {
        view! {
            <Show when=move || errors.with(pick).is_some()>
                <p class="auth-form__error">{move || errors.with(pick).unwrap_or_default()}</p>
            </Show>
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__label">
                "Kullanıcı Adı"
                <input
                    class="auth-form__input"
                    type="text"
                    placeholder="kullaniciadi"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            {field_error(|e| e.username)}
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
            {field_error(|e| e.email)}
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
            {field_error(|e| e.password)}
            <label class="auth-form__label">
                "Şifre Tekrar"
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="••••••••"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                />
            </label>
            {field_error(|e| e.confirm_password)}
            <label class="auth-form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || tos.get()
                    on:change=move |ev| tos.set(event_target_checked(&ev))
                />
                <span>
                    <a href="/terms" target="_blank">"Hizmet şartlarını"</a>
                    " kabul ediyorum"
                </span>
            </label>
            {field_error(|e| e.tos)}
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Hesap Oluştur"
            </button>
        </form>
    }
}
