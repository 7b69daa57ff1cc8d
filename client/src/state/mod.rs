//! Application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the only cross-page state; `forms` holds page-local field values.

pub mod auth;
pub mod forms;
