//! Screen decision for the authentication/authorization flow.
//!
//! DESIGN
//! ======
//! The home page derives one of six screens on every render from three
//! inputs: whether the session is authenticated, which app (if any) is
//! selected, and how far the authorize request has progressed. Keeping the
//! decision as a pure function makes every reachable combination
//! unit-testable without a browser.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

/// Progress of the one-shot authorize request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorizePhase {
    /// Not started (preconditions not yet satisfied).
    Idle,
    /// Request in flight.
    Pending,
    /// Grant received; a redirect is being scheduled.
    Ready,
    /// Request failed. There is no retry: the flow stays on a loading
    /// screen, matching the service's observed dead-end behavior.
    Failed,
}

/// Which screen the flow controller renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Login/signup tabs; persists until a successful login.
    Login,
    /// App-selection list.
    AppPicker,
    /// Authorize request in flight.
    CheckingAuthorization,
    /// App selected but the authorize request has not fired yet.
    StartingAuthorization,
    /// Grant received; redirect scheduled.
    Redirecting,
    /// Generic fallback spinner for unreached combinations.
    Loading,
}

/// Decide the screen for the current flow state. An empty app key counts
/// as no selection.
pub fn screen_for(authenticated: bool, selected_app: Option<&str>, authorize: AuthorizePhase) -> Screen {
    if !authenticated {
        return Screen::Login;
    }
    match selected_app.filter(|a| !a.is_empty()) {
        None => Screen::AppPicker,
        Some(_) => match authorize {
            AuthorizePhase::Pending => Screen::CheckingAuthorization,
            AuthorizePhase::Idle => Screen::StartingAuthorization,
            AuthorizePhase::Ready => Screen::Redirecting,
            AuthorizePhase::Failed => Screen::Loading,
        },
    }
}
