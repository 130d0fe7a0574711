//! About page: bio paragraphs and skills.

use leptos::prelude::*;

use crate::content::profile;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about">
            <h1>"About me"</h1>
            {profile::ABOUT.iter().map(|para| view! { <p>{*para}</p> }).collect_view()}
            <h2>"Skills"</h2>
            <ul class="skills">
                {profile::SKILLS.iter().map(|skill| view! { <li class="skills__item">{*skill}</li> }).collect_view()}
            </ul>
            <p class="about__location">{format!("Based in {}", profile::LOCATION)}</p>
        </section>
    }
}
