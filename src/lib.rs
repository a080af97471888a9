// TrustLens: scam checking client for the TrustLens backend.
//
// This is the library root. Each module corresponds to a major subsystem
// of the client: the backend API, local insights aggregation, the
// best-effort report dedup log, and risk presentation.

pub mod api;
pub mod config;
pub mod dedup;
pub mod insights;
pub mod output;
pub mod risk;
pub mod validate;

#[cfg(feature = "web")]
pub mod web;
