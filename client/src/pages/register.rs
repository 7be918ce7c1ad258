//! Account creation page for patients and doctors.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;
use si7ati::routes::Route;
use si7ati::{AuthGate, RegistrableRole, Role};

pub(crate) const MISSING_FIELDS: &str = "Veuillez remplir tous les champs";
pub(crate) const PASSWORD_MISMATCH: &str = "Les mots de passe ne correspondent pas";

/// Form values ready to hand to `AuthGate::register`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(RegisterInput { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let gate = expect_context::<AuthGate>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(RegistrableRole::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let gate = gate.clone();
            let navigate = navigate.clone();
            let role_value = role.get();
            leptos::task::spawn_local(async move {
                match gate.register(&input.name, &input.email, &input.password, role_value).await {
                    Ok(()) => navigate(Route::Dashboard.path(), NavigateOptions::default()),
                    Err(e) => {
                        info.set(e.user_message().to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&gate, input);
        }
    };

    let role_option = move |value: RegistrableRole| {
        let id = Role::from(value).as_str();
        view! {
            <label class="register-role" for=id>
                <input
                    id=id
                    type="radio"
                    name="role"
                    prop:checked=move || role.get() == value
                    on:change=move |_| role.set(value)
                />
                {Role::from(value).label()}
            </label>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Créer un compte"</h1>
                <p class="login-card__subtitle">"Rejoignez Si7ati pour gérer votre santé"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Nom complet"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirmer le mot de passe"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <fieldset class="register-roles">
                        <legend>"Type de compte"</legend>
                        {role_option(RegistrableRole::Patient)}
                        {role_option(RegistrableRole::Doctor)}
                    </fieldset>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Création..." } else { "Créer un compte" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Déjà inscrit? "
                    <A href=Route::Login.path()>"Se connecter"</A>
                </p>
            </div>
        </div>
    }
}
