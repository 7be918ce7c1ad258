//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the single `AuthGate` for the page, hydrates it from
//! `localStorage`, and nests the route guards so that protected screens sit
//! under `RequireAuthenticated` and the settings screen additionally under
//! `RequireRole`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use si7ati::routes::{ADMIN_ONLY, Route as PortalRoute};
use si7ati::{AuthGate, PortalConfig};

use crate::components::portal_layout::PortalLayout;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::portal::{AppointmentsPage, DashboardPage, MedicalRecordsPage, ProfilePage, SettingsPage};
use crate::pages::register::RegisterPage;
use crate::state::auth::AuthState;
use crate::util::auth::{RequireAuthenticated, RequireRole, install_session_sync};
use crate::util::latency::BrowserLatency;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Provides the gate and the mirrored auth signal, then sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::default();
    let gate = AuthGate::demo(Arc::new(BrowserStorage), Arc::new(BrowserLatency), &config);
    let auth = RwSignal::new(AuthState::from(gate.hydrate()));
    install_session_sync(&gate, auth);

    provide_context(gate);
    provide_context(auth);

    view! {
        <Title text="Si7ati"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <ParentRoute path=StaticSegment("") view=RequireAuthenticated>
                    <ParentRoute path=StaticSegment("") view=PortalLayout>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <Redirect path=PortalRoute::Dashboard.path()/> }
                        />
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("medical-records") view=MedicalRecordsPage/>
                        <Route path=StaticSegment("appointments") view=AppointmentsPage/>
                        <Route
                            path=StaticSegment("settings")
                            view=|| view! {
                                <RequireRole roles=ADMIN_ONLY>
                                    <SettingsPage/>
                                </RequireRole>
                            }
                        />
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
