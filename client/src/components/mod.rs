//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and page sections, reading the session from
//! Leptos context where they need it.

pub mod guarded;
pub mod navbar;
pub mod our_partners;
pub mod our_story;
pub mod plan_card;
pub mod sidebar;
pub mod site_layout;
pub mod typing_effect;
