//! App-selection screen for authenticated users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the registered app list once (no retry beyond the manual
//! "Tekrar Dene" button), filters it to apps with a usable redirect target,
//! and reports the chosen key back to the flow controller. Also hosts the
//! logout action: best-effort server call, local clear always wins, then a
//! delayed full reload.

use leptos::prelude::*;

use crate::net::outcome;
use crate::net::types::{AppDescriptor, available_apps};
use crate::state::notices::NoticeHub;
use crate::state::session::SessionStore;
use crate::util::config;

async fn fetch_apps(refresh_token: Option<String>) -> Result<Vec<AppDescriptor>, String> {
    match crate::net::api::get_apps(refresh_token.as_deref()).await {
        Ok(env) => outcome::classify_apps(env),
        Err(err) => Err(err.to_string()),
    }
}

#[component]
pub fn AppSelector(on_select: Callback<String>) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<NoticeHub>();

    let apps = LocalResource::new(move || {
        // Token only rides along when the endpoint is configured as
        // authenticated; the service currently serves the list publicly.
        let token = if config::AUTHENTICATE_APP_LIST {
            session.refresh_token()
        } else {
            None
        };
        fetch_apps(token)
    });

    let username = move || {
        session
            .user()
            .map(|u| u.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let confirmed = match crate::net::api::logout(session.refresh_token().as_deref()).await
            {
                Ok(env) => outcome::logout_confirmed(&env),
                Err(err) => {
                    log::error!("logout request failed: {err}");
                    false
                }
            };
            // Local clearing never waits on the server; revocation is
            // best-effort (accepted risk).
            session.clear();
            notices.success(if confirmed {
                outcome::LOGOUT_CONFIRMED_NOTICE
            } else {
                outcome::LOGOUT_LOCAL_NOTICE
            });
            gloo_timers::future::TimeoutFuture::new(config::RELOAD_DELAY_MS).await;
            crate::util::redirect::reload();
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, notices);
        }
    };

    view! {
        <div class="screen-center">
            <Suspense fallback=move || {
                view! {
                    <div class="card card--loading">
                        <div class="spinner" aria-hidden="true"></div>
                        <p class="card__message">"Uygulamalar yükleniyor..."</p>
                    </div>
                }
            }>
                {move || {
                    apps.get()
                        .map(|result| match result {
                            Err(message) => {
                                let apps = apps.clone();
                                view! {
                                    <div class="card">
                                        <h1 class="card__title card__title--error">"Hata"</h1>
                                        <p class="card__subtitle">
                                            "Uygulamalar yüklenirken bir hata oluştu"
                                        </p>
                                        <p class="card__message">{message}</p>
                                        <button class="btn btn--primary" on:click=move |_| apps.refetch()>
                                            "Tekrar Dene"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                let had_any = !list.is_empty();
                                let available = available_apps(list);
                                view! {
                                    <div class="card card--wide">
                                        <h1 class="card__title">
                                            "Hoş geldiniz, " {username()} "!"
                                        </h1>
                                        <p class="card__subtitle">
                                            "Hangi uygulamaya giriş yapmak istiyorsunuz?"
                                        </p>
                                        {if available.is_empty() {
                                            let hint = if had_any {
                                                view! {
                                                    <div class="card__empty">
                                                        <p>"Erişilebilir uygulama bulunamadı"</p>
                                                        <p class="card__hint">
                                                            "Uygulamaların redirect URL'si yapılandırılmamış"
                                                        </p>
                                                    </div>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <div class="card__empty">
                                                        <p>"Hiç uygulama bulunamadı"</p>
                                                    </div>
                                                }
                                                    .into_any()
                                            };
                                            hint
                                        } else {
                                            view! {
                                                <div class="app-list">
                                                    {available
                                                        .into_iter()
                                                        .map(|app| {
                                                            let key = app.key.clone();
                                                            view! {
                                                                <button
                                                                    class="app-list__entry"
                                                                    on:click=move |_| on_select.run(key.clone())
                                                                >
                                                                    <span class="app-list__name">{app.name}</span>
                                                                    <span class="app-list__key">{app.key}</span>
                                                                </button>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            }
                                                .into_any()
                                        }}
                                        <div class="card__footer">
                                            <button class="btn btn--ghost" on:click=on_logout>
                                                "Çıkış Yap"
                                            </button>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
