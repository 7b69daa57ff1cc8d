//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and delegates shared chrome to `components`.
//! Access control is applied by the router, not by the pages themselves.

pub mod about;
pub mod contact;
pub mod data_plans;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
