//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome around routed pages while reading shared
//! auth state from Leptos context providers.

pub mod loading_screen;
pub mod portal_layout;
