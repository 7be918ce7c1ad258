//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, gate calls,
//! navigation) and delegates shared chrome to `components`.

pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod portal;
pub mod register;
