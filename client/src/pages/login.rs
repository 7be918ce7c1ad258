//! Login page with email + password and one-click demo accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Submits through the shared `AuthGate`; the gate owns the
//! loading flag, so this page only tracks its own button state and the
//! message line.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;
use si7ati::directory::{DEMO_PASSWORD, demo_email};
use si7ati::routes::Route;
use si7ati::{AuthGate, Role};

pub(crate) const MISSING_FIELDS: &str = "Veuillez remplir tous les champs";
pub(crate) const DEMO_LOGIN_FAILED: &str = "Échec de la connexion. Veuillez réessayer.";

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Seeded credentials behind the demo buttons.
pub(crate) fn demo_credentials(role: Role) -> (&'static str, &'static str) {
    (demo_email(role), DEMO_PASSWORD)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let gate = expect_context::<AuthGate>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let submit = {
        let gate = gate.clone();
        move |email_value: String, password_value: String, failure: Option<&'static str>| {
            busy.set(true);
            info.set(String::new());

            #[cfg(feature = "csr")]
            {
                let gate = gate.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match gate.login(&email_value, &password_value).await {
                        Ok(()) => navigate(Route::Dashboard.path(), NavigateOptions::default()),
                        Err(e) => {
                            info.set(failure.unwrap_or(e.user_message()).to_owned());
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&gate, email_value, password_value, failure);
            }
        }
    };

    let submit_form = submit.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Ok((email_value, password_value)) => submit_form(email_value, password_value, None),
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    let demo_button = move |role: Role, label: &'static str| {
        let submit = submit.clone();
        view! {
            <button
                class="login-button login-button--demo"
                type="button"
                disabled=move || busy.get()
                on:click=move |_| {
                    if busy.get() {
                        return;
                    }
                    let (email_value, password_value) = demo_credentials(role);
                    submit(email_value.to_owned(), password_value.to_owned(), Some(DEMO_LOGIN_FAILED));
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Connexion"</h1>
                <p class="login-card__subtitle">"Accédez à votre espace Si7ati"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="vous@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Mot de passe"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <A href=Route::ForgotPassword.path() attr:class="login-link">
                        "Mot de passe oublié?"
                    </A>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Comptes de démonstration"</p>
                <div class="login-demo">
                    {demo_button(Role::Patient, "Patient (démo)")}
                    {demo_button(Role::Doctor, "Médecin (démo)")}
                    {demo_button(Role::Admin, "Admin (démo)")}
                </div>
                <p class="login-card__footer">
                    "Pas encore inscrit? "
                    <A href=Route::Register.path()>"Créer un compte"</A>
                </p>
            </div>
        </div>
    }
}
