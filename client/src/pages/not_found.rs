//! Catch-all page for unknown paths.

use leptos::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"That page doesn't exist."</p>
            <a class="btn" href=Route::Home.path()>"Go home"</a>
        </section>
    }
}
