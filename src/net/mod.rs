//! Networking modules for the portal's REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the backend and `types` defines the
//! shared wire schema. The backend is opaque to this crate; nothing here
//! knows how tokens are minted or passwords checked.

pub mod api;
pub mod types;
