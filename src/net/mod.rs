//! Networking modules for the identity-service HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the raw HTTP calls, `types` defines the wire schema, and
//! `outcome` classifies raw envelopes into per-endpoint success/failure
//! variants consumed by the orchestration layer.

pub mod api;
pub mod outcome;
pub mod types;
