//! Transient user-facing notices (toast stack).
//!
//! All orchestration errors end up here as short-lived messages; nothing
//! in the client crashes the UI on a failed request.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use leptos::prelude::*;

/// How long a notice stays on screen before auto-dismissal.
#[cfg(feature = "hydrate")]
const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One visible notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Ordered notice list with monotonically increasing ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notices {
    next_id: u64,
    pub items: Vec<Notice>,
}

impl Notices {
    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, kind, text });
        id
    }

    /// Remove the notice with `id`, if still present.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

/// Reactive handle to the notice stack, provided via context at the app
/// root. Pushing schedules a browser-side auto-dismiss timer.
#[derive(Clone, Copy)]
pub struct NoticeHub(RwSignal<Notices>);

impl NoticeHub {
    pub fn new() -> Self {
        Self(RwSignal::new(Notices::default()))
    }

    pub fn items(&self) -> Vec<Notice> {
        self.0.with(|n| n.items.clone())
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|n| n.dismiss(id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let mut id = 0;
        self.0.update(|n| id = n.push(kind, text));
        self.schedule_dismiss(id);
    }

    #[cfg(feature = "hydrate")]
    fn schedule_dismiss(&self, id: u64) {
        let hub = *self;
        gloo_timers::callback::Timeout::new(NOTICE_TTL_MS, move || hub.dismiss(id)).forget();
    }

    #[cfg(not(feature = "hydrate"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for NoticeHub {
    fn default() -> Self {
        Self::new()
    }
}
