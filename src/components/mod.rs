//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `protected_route` gates authenticated views; `navbar` renders the shared
//! chrome for pages behind that gate.

pub mod navbar;
pub mod protected_route;
