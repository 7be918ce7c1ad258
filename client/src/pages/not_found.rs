//! Fallback screen for unknown paths.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use si7ati::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=Route::NotFound.title()/>
        <div class="login-page">
            <div class="login-card">
                <h1>"404"</h1>
                <p class="login-card__subtitle">{Route::NotFound.title()}</p>
                <A href=Route::Dashboard.path() attr:class="login-button">
                    "Retour au tableau de bord"
                </A>
            </div>
        </div>
    }
}
