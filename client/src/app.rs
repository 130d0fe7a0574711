//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every request. The theme
//! bootstrap script runs inside `<head>`, after the highlight stylesheet
//! links it toggles, so the first paint already uses the right mode.
//!
//! The routed pages always render; the splash screen is an overlay that
//! unmounts once `UiState::loaded` is set.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    chatbot_widget::ChatbotWidget, footer::Footer, loading_screen::LoadingScreen, nav_bar::NavBar,
    scroll_progress::ScrollProgress,
};
use crate::content::profile;
use crate::pages::{
    about::AboutPage, blog::BlogPage, blog_post::BlogPostPage, contact::ContactPage, demo::DemoPage,
    home::HomePage, not_found::NotFoundPage, projects::ProjectsPage, resume::ResumePage,
};
use crate::routes;
use crate::state::theme::{DARK_STYLESHEET_ID, LIGHT_STYLESHEET_ID, bootstrap_script};
use crate::state::theme_context::provide_theme;
use crate::state::{chat::ChatState, ui::UiState};

pub const LIGHT_STYLESHEET_HREF: &str = "/highlight-light.css";
pub const DARK_STYLESHEET_HREF: &str = "/highlight-dark.css";

/// Mode-dependent highlight stylesheets. The server renders the light one
/// enabled; the bootstrap script corrects both before first paint.
#[component]
pub fn HighlightStylesheets() -> impl IntoView {
    view! {
        <link id=LIGHT_STYLESHEET_ID rel="stylesheet" href=LIGHT_STYLESHEET_HREF/>
        <link id=DARK_STYLESHEET_ID rel="stylesheet" href={DARK_STYLESHEET_HREF} {leptos::tachys::html::attribute::disabled(true)}/>
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=profile::TAGLINE/>
                <HighlightStylesheets/>
                <script inner_html=bootstrap_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());
    provide_context(ui);
    provide_context(chat);
    provide_theme();

    let on_loaded = Callback::new(move |()| ui.update(UiState::finish_loading));

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=profile::NAME/>

        <Router>
            <Show when=move || !ui.with(|u| u.loaded)>
                <LoadingScreen on_complete=on_loaded/>
            </Show>
            <ScrollProgress/>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment(routes::Route::Home.segment()) view=HomePage/>
                    <Route path=StaticSegment(routes::Route::About.segment()) view=AboutPage/>
                    <Route path=StaticSegment(routes::Route::Projects.segment()) view=ProjectsPage/>
                    <Route path=StaticSegment(routes::Route::Resume.segment()) view=ResumePage/>
                    <Route path=StaticSegment(routes::Route::Contact.segment()) view=ContactPage/>
                    <Route path=StaticSegment(routes::Route::Blog.segment()) view=BlogPage/>
                    <Route path=(StaticSegment(routes::Route::Blog.segment()), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=StaticSegment(routes::Route::Demo.segment()) view=DemoPage/>
                </Routes>
            </main>
            <Footer/>
            <ChatbotWidget/>
        </Router>
    }
}
