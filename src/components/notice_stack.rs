//! Toast stack rendering the shared notice state.
//!
//! Notices auto-dismiss after a few seconds (scheduled by the hub when a
//! notice is pushed); clicking one dismisses it immediately.

use leptos::prelude::*;

use crate::state::notices::{NoticeHub, NoticeKind};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<NoticeHub>();

    view! {
        <div class="notice-stack">
            <For
                each=move || notices.items()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Success => "notice notice--success",
                        NoticeKind::Error => "notice notice--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| notices.dismiss(id)>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
