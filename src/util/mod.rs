//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, cookies,
//! navigation, host selection) from page and component logic to improve
//! reuse and testability.

pub mod config;
pub mod cookie;
pub mod redirect;
pub mod storage;
