//! Persistent top navigation with the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the routed pages. Links come from the route table;
//! the theme button goes through the shared `ThemeHandle`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::profile;
use crate::routes::NAV_ROUTES;
use crate::state::theme_context::use_theme;
use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let theme = use_theme();
    let pathname = use_location().pathname;

    // Close the mobile drawer after each navigation.
    Effect::new(move || {
        pathname.track();
        ui.update(UiState::close_menu);
    });

    let menu_open = move || ui.with(|u| u.menu_open);

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">{profile::NAME}</a>

            <button
                class="nav-bar__menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open().to_string()
                on:click=move |_| ui.update(UiState::toggle_menu)
            >
                {move || if menu_open() { "✕" } else { "☰" }}
            </button>

            <ul class="nav-bar__links" class:open=menu_open>
                {NAV_ROUTES
                    .iter()
                    .map(|&route| {
                        view! {
                            <li>
                                <a
                                    href=route.path()
                                    class="nav-bar__link"
                                    class:active=move || route.matches(&pathname.get())
                                >
                                    {route.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <button
                class="btn nav-bar__theme-toggle"
                on:click=move |_| theme.toggle()
                title="Toggle dark mode"
            >
                {move || if theme.is_dark() { "☀" } else { "☾" }}
            </button>
        </nav>
    }
}
