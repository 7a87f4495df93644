//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portal's cards and forms while reading/writing
//! shared state from Leptos context providers. Form validation lives next
//! to the form that uses it; the shared email check sits in `validation`.

pub mod app_selector;
pub mod loading_card;
pub mod login_form;
pub mod notice_stack;
pub mod signup_form;
pub(crate) mod validation;
