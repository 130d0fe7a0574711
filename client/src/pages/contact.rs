//! Contact page: validated form that hands off to the visitor's mail client.
//!
//! DESIGN
//! ======
//! There is no contact backend. A valid submission is turned into a
//! `mailto:` link with the subject and body percent-encoded, and the
//! browser is pointed at it.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::content::profile;

pub const MAX_CONTACT_MESSAGE_CHARS: usize = 2_000;

/// Everything except RFC 3986 unreserved characters is escaped.
const MAILTO_QUERY: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please tell me your name.")]
    MissingName,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Please write a message.")]
    MissingMessage,
    #[error("Messages are limited to {} characters.", MAX_CONTACT_MESSAGE_CHARS)]
    MessageTooLong,
}

/// Trim the raw fields and check them.
///
/// # Errors
///
/// Returns the first field that fails validation, in form order.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<ContactDraft, ContactError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    if name.is_empty() {
        return Err(ContactError::MissingName);
    }
    if !looks_like_email(email) {
        return Err(ContactError::InvalidEmail);
    }
    if message.is_empty() {
        return Err(ContactError::MissingMessage);
    }
    if message.chars().count() > MAX_CONTACT_MESSAGE_CHARS {
        return Err(ContactError::MessageTooLong);
    }

    Ok(ContactDraft { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
}

/// One `@`, a non-empty local part, a dotted domain, no whitespace.
fn looks_like_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// `mailto:` link addressed to `to` carrying the draft.
pub fn mailto_href(to: &str, draft: &ContactDraft) -> String {
    let subject = format!("Portfolio contact from {}", draft.name);
    let body = format!("{}\n\nReply to: {}", draft.message, draft.email);
    format!(
        "mailto:{to}?subject={}&body={}",
        utf8_percent_encode(&subject, MAILTO_QUERY),
        utf8_percent_encode(&body, MAILTO_QUERY),
    )
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<ContactError>);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_contact(&name.get(), &email.get(), &message.get()) {
            Ok(draft) => {
                error.set(None);
                open_mail_client(&mailto_href(profile::EMAIL, &draft));
                sent.set(true);
            }
            Err(e) => {
                error.set(Some(e));
                sent.set(false);
            }
        }
    };

    view! {
        <section class="contact">
            <h1>"Contact"</h1>
            <p>
                "Have a project in mind or just want to say hello? Reach me at "
                <a href=format!("mailto:{}", profile::EMAIL)>{profile::EMAIL}</a>
                " or use the form below."
            </p>
            <form class="contact__form" on:submit=on_submit novalidate>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Message"
                    <textarea
                        rows="6"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="contact__error" role="alert">
                        {move || error.get().map(|e| e.to_string())}
                    </p>
                </Show>
                <Show when=move || sent.get()>
                    <p class="contact__sent">"Your mail app should open with the message ready to send."</p>
                </Show>
                <button class="btn btn--primary" type="submit">"Send"</button>
            </form>
        </section>
    }
}

fn open_mail_client(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(href).is_err() {
                log::warn!("could not open mail client");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}
