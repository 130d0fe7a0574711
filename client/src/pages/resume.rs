//! Resume page: experience timeline, education, and PDF download.

use leptos::prelude::*;

use crate::content::profile;
use crate::content::resume::{EDUCATION, EXPERIENCE};

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <section class="resume">
            <header class="resume__header">
                <h1>"Resume"</h1>
                <a class="btn" href=profile::RESUME_PDF download>"Download PDF"</a>
            </header>

            <h2>"Experience"</h2>
            <ol class="timeline">
                {EXPERIENCE
                    .iter()
                    .map(|job| {
                        view! {
                            <li class="timeline__item">
                                <h3>{job.title} " · " {job.company}</h3>
                                <p class="timeline__period">{job.period}</p>
                                <ul>
                                    {job.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <h2>"Education"</h2>
            <ul class="education">
                {EDUCATION
                    .iter()
                    .map(|e| {
                        view! {
                            <li>
                                <strong>{e.degree}</strong>
                                ", "
                                {e.school}
                                <span class="timeline__period">{e.period}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
