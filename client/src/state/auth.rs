//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the gate's `SessionView` into a Leptos signal so route guards and
//! identity-aware components re-render on login, logout, and loading changes.
//! Only the gate writes the session; this copy is read-only for pages.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use si7ati::{Identity, SessionView};

/// Authentication state tracking the current identity and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::from(SessionView::initial())
    }
}

impl From<SessionView> for AuthState {
    fn from(view: SessionView) -> Self {
        Self { identity: view.identity, loading: view.is_loading }
    }
}

impl AuthState {
    /// The snapshot shape the core guards evaluate.
    #[must_use]
    pub fn session_view(&self) -> SessionView {
        SessionView { identity: self.identity.clone(), is_loading: self.loading }
    }
}
