//! Authenticated portal chrome: header, role-filtered menu, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected page. The menu comes from the core's `menu_for`, so
//! a role only sees links its guards would let through.

#[cfg(test)]
#[path = "portal_layout_test.rs"]
mod portal_layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;
use si7ati::routes::{MenuItem, Route, menu_for};
use si7ati::{AuthGate, Identity};

use crate::state::auth::AuthState;

/// "Name · Role" line shown in the header.
pub fn identity_caption(identity: &Identity) -> String {
    format!("{} · {}", identity.name, identity.role.label())
}

/// Menu for whoever is signed in; empty while signed out.
pub fn menu_items(state: &AuthState) -> Vec<MenuItem> {
    state.identity.as_ref().map(|identity| menu_for(identity.role)).unwrap_or_default()
}

#[component]
pub fn PortalLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gate = expect_context::<AuthGate>();
    let navigate = use_navigate();

    let caption = move || auth.get().identity.as_ref().map(identity_caption).unwrap_or_default();

    let on_logout = move |_| {
        gate.logout();
        navigate(Route::Login.path(), NavigateOptions::default());
    };

    view! {
        <div class="portal">
            <header class="portal__header">
                <span class="portal__brand">"Si7ati"</span>
                <span class="portal__identity">{caption}</span>
                <button class="portal__logout" on:click=on_logout>
                    "Déconnexion"
                </button>
            </header>
            <nav class="portal__menu">
                <For
                    each=move || menu_items(&auth.get())
                    key=|item| item.route
                    children=|item| {
                        view! {
                            <A href=item.route.path() attr:class="portal__menu-link">
                                {item.label}
                            </A>
                        }
                    }
                />
            </nav>
            <main class="portal__content">
                <Outlet/>
            </main>
        </div>
    }
}
