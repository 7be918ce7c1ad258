//! Password-reset request page.
//!
//! The confirmation wording is the same whether or not the address has an
//! account.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;
use leptos_router::components::A;
use si7ati::AuthGate;
use si7ati::routes::Route;

pub(crate) const MISSING_EMAIL: &str = "Veuillez saisir votre email";

pub(crate) fn validate_reset_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(MISSING_EMAIL);
    }
    Ok(email.to_owned())
}

pub(crate) fn confirmation_text(email: &str) -> String {
    format!(
        "Si un compte est associé à l'adresse {email}, vous recevrez un email avec les instructions pour réinitialiser votre mot de passe."
    )
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let gate = expect_context::<AuthGate>();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let submitted = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_reset_email(&email.get()) {
            Ok(value) => value,
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
            leptos::task::spawn_local(async move {
                match gate.request_password_reset(&email_value).await {
                    Ok(()) => submitted.set(Some(email_value)),
                    Err(e) => info.set(e.user_message().to_owned()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&gate, email_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <Show
                    when=move || submitted.get().is_some()
                    fallback=move || {
                        view! {
                            <h1>"Mot de passe oublié?"</h1>
                            <p class="login-card__subtitle">
                                "Entrez votre email et nous vous enverrons un lien pour réinitialiser votre mot de passe"
                            </p>
                            <form class="login-form" on:submit=on_submit.clone()>
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="vous@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Envoi..." } else { "Envoyer le lien" }}
                                </button>
                            </form>
                            <Show when=move || !info.get().is_empty()>
                                <p class="login-message">{move || info.get()}</p>
                            </Show>
                        }
                    }
                >
                    <h1>"Email envoyé"</h1>
                    <p class="login-message">
                        {move || submitted.get().map(|addr| confirmation_text(&addr)).unwrap_or_default()}
                    </p>
                </Show>
                <p class="login-card__footer">
                    <A href=Route::Login.path()>"Retour à la connexion"</A>
                </p>
            </div>
        </div>
    }
}
