//! Portal section screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! These render inside `PortalLayout` behind the auth guards. Section content
//! is a placeholder; each screen shows its title and, where useful, who is
//! looking at it.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use leptos::prelude::*;
use leptos_meta::Title;
use si7ati::Identity;
use si7ati::routes::Route;

use crate::state::auth::AuthState;

/// Greeting line at the top of the dashboard.
pub(crate) fn greeting(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) => format!("Bienvenue, {}", identity.name),
        None => "Bienvenue".to_owned(),
    }
}

#[component]
fn Section(route: Route, children: Children) -> impl IntoView {
    view! {
        <Title text=route.title()/>
        <section class="portal-section">
            <h1 class="portal-section__title">{route.title()}</h1>
            {children()}
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let role_label = move || auth.get().identity.map(|i| i.role.label()).unwrap_or_default();

    view! {
        <Section route=Route::Dashboard>
            <p class="portal-section__lead">{move || greeting(auth.get().identity.as_ref())}</p>
            <p class="portal-section__meta">"Espace " {role_label}</p>
        </Section>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = move || auth.get().identity.map(|i| i.name).unwrap_or_default();
    let email = move || auth.get().identity.map(|i| i.email).unwrap_or_default();
    let role = move || auth.get().identity.map(|i| i.role.label()).unwrap_or_default();

    view! {
        <Section route=Route::Profile>
            <dl class="portal-profile">
                <dt>"Nom"</dt>
                <dd>{name}</dd>
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Rôle"</dt>
                <dd>{role}</dd>
            </dl>
        </Section>
    }
}

#[component]
pub fn MedicalRecordsPage() -> impl IntoView {
    view! {
        <Section route=Route::MedicalRecords>
            <p class="portal-section__empty">"Aucun document pour le moment."</p>
        </Section>
    }
}

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    view! {
        <Section route=Route::Appointments>
            <p class="portal-section__empty">"Aucun rendez-vous planifié."</p>
        </Section>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <Section route=Route::Settings>
            <p class="portal-section__empty">"Paramètres de la plateforme."</p>
        </Section>
    }
}
