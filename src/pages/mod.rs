//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome
//! to `components`. Network access goes through `net::api`; session
//! persistence goes through `util::session_store`.

pub mod admin_dashboard;
pub mod appointments;
pub mod dashboard;
pub mod doctor_dashboard;
pub mod doctor_login;
pub mod landing;
pub mod login;
pub mod market_insight;
pub mod medications;
pub mod signup;
pub mod symptom_checker;
