//! Networking for the widget's two HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the `/chat` and `/leads` wire schema shared with the dev
//! server; `api` defines the backend seam and its browser implementation.

pub mod api;
pub mod types;
