//! Site footer with social links.

use leptos::prelude::*;

use crate::content::profile::{self, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__copyright">
                {format!("© {} {}", profile::COPYRIGHT_YEAR, profile::NAME)}
            </p>
            <ul class="footer__links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href target="_blank" rel="noopener noreferrer">
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </footer>
    }
}
