//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical guard behavior by delegating the
//! decision to the core's `guard` functions and only choosing what to render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::{Outlet, Redirect};
use si7ati::guard::{GuardDecision, require_authenticated, require_role};
use si7ati::{AuthGate, Role};

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::AuthState;

/// Keep `auth` in step with every gate transition.
pub fn install_session_sync(gate: &AuthGate, auth: RwSignal<AuthState>) {
    #[cfg(feature = "csr")]
    {
        let mut rx = gate.subscribe();
        leptos::task::spawn_local(async move {
            while rx.changed().await.is_ok() {
                let view = rx.borrow_and_update().clone();
                auth.set(AuthState::from(view));
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        auth.set(AuthState::from(gate.view()));
    }
}

/// Decision for the authenticated-only layout route.
pub fn authenticated_decision(state: &AuthState) -> GuardDecision {
    require_authenticated(&state.session_view())
}

/// Decision for a role-restricted route.
pub fn role_decision(state: &AuthState, roles: &[Role]) -> GuardDecision {
    require_role(&state.session_view(), roles)
}

/// Layout route that renders nested routes only for signed-in users.
#[component]
pub fn RequireAuthenticated() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || match authenticated_decision(&auth.get()) {
        GuardDecision::Pending => view! { <LoadingScreen/> }.into_any(),
        GuardDecision::Allow => view! { <Outlet/> }.into_any(),
        GuardDecision::Redirect(target) => view! { <Redirect path=target.path()/> }.into_any(),
    }
}

/// Wrapper that renders `children` only for users holding one of `roles`.
#[component]
pub fn RequireRole(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || match role_decision(&auth.get(), roles) {
        GuardDecision::Allow => children(),
        GuardDecision::Pending => view! { <LoadingScreen/> }.into_any(),
        GuardDecision::Redirect(target) => view! { <Redirect path=target.path()/> }.into_any(),
    }
}
