//! Centered card with a spinner and a one-line message.

use leptos::prelude::*;

#[component]
pub fn LoadingCard(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="screen-center">
            <div class="card card--loading">
                <div class="spinner" aria-hidden="true"></div>
                <p class="card__message">{message}</p>
            </div>
        </div>
    }
}
