//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The portal is effectively one route; `home` owns the whole
//! authentication/authorization flow and delegates rendering details to
//! `components`.

pub mod home;
