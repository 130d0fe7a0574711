//! Landing page: introduction and featured projects.

use leptos::prelude::*;

use crate::content::{profile, projects};
use crate::pages::projects::ProjectCard;
use crate::routes::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <p class="hero__eyebrow">{profile::ROLE}</p>
            <h1 class="hero__name">{profile::NAME}</h1>
            <p class="hero__tagline">{profile::TAGLINE}</p>
            <div class="hero__actions">
                <a class="btn btn--primary" href=Route::Projects.path()>"View projects"</a>
                <a class="btn" href=Route::Contact.path()>"Get in touch"</a>
            </div>
        </section>

        <section class="featured">
            <h2>"Featured work"</h2>
            <div class="project-grid">
                {projects::featured().map(|p| view! { <ProjectCard project=p/> }).collect_view()}
            </div>
        </section>
    }
}
