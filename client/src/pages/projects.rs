//! Projects page and the shared project card.

use leptos::prelude::*;

use crate::content::projects::{self, Project};

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-card" class:featured=project.featured>
            <h3 class="project-card__name">{project.name}</h3>
            <p class="project-card__summary">{project.summary}</p>
            <ul class="project-card__tech">
                {project.tech.iter().map(|t| view! { <li>{*t}</li> }).collect_view()}
            </ul>
            <div class="project-card__links">
                {project.repo.map(|href| view! {
                    <a href=href target="_blank" rel="noopener noreferrer">"Source"</a>
                })}
                {project.live.map(|href| view! {
                    <a href=href target="_blank" rel="noopener noreferrer">"Live"</a>
                })}
            </div>
        </article>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <section class="projects">
            <h1>"Projects"</h1>
            <div class="project-grid">
                {projects::showcase().into_iter().map(|p| view! { <ProjectCard project=p/> }).collect_view()}
            </div>
        </section>
    }
}
