//! Shared client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the persisted authentication state, `notices` the
//! transient toast stack, and `flow` the pure screen-decision logic the
//! home page renders from.

pub mod flow;
pub mod notices;
pub mod session;
