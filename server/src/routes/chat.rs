//! Canned assistant behind the site's chat widget.
//!
//! Replies are picked by keyword from the same content tables the pages
//! render, so the widget works without an external model.

use axum::http::StatusCode;
use axum::response::Json;
use portfolio::content::{blog, profile, projects};
use portfolio::net::chat::{ChatReply, ChatRequest};
use portfolio::state::chat::normalize_message;

/// `POST /api/chat`: answer one visitor message.
pub async fn chat(Json(request): Json<ChatRequest>) -> Result<Json<ChatReply>, StatusCode> {
    let Some(message) = normalize_message(&request.message) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let reply = reply_for(&message);
    tracing::debug!(chars = message.chars().count(), "chat message answered");
    Ok(Json(ChatReply { reply }))
}

pub(crate) fn reply_for(message: &str) -> String {
    let lower = message.to_lowercase();
    let tokens = lower.split(|c: char| !c.is_alphanumeric()).filter(|t| !t.is_empty()).collect::<Vec<_>>();
    let mentions = |stems: &[&str]| tokens.iter().any(|t| stems.iter().any(|stem| t.starts_with(stem)));
    let says = |words: &[&str]| tokens.iter().any(|t| words.contains(t));

    if mentions(&["project", "portfolio", "built"]) {
        let names = projects::featured().map(|p| p.name).collect::<Vec<_>>().join(", ");
        format!("Featured projects: {names}. The Projects page has the full list with links.")
    } else if mentions(&["skill", "stack", "language", "tech"]) {
        format!("Day to day I work with {}.", profile::SKILLS.join(", "))
    } else if mentions(&["resume", "cv", "experience", "job"]) {
        format!("The Resume page has my experience, and a PDF is at {}.", profile::RESUME_PDF)
    } else if mentions(&["blog", "post", "writing", "article"]) {
        match blog::posts().first() {
            Some(post) => format!("The latest post is \"{}\" from {}.", post.title, post.date),
            None => "No posts yet.".to_owned(),
        }
    } else if mentions(&["contact", "email", "hire", "reach"]) {
        format!("You can email {} or use the Contact page.", profile::EMAIL)
    } else if says(&["hello", "hi", "hey"]) {
        format!("Hello! I'm {}'s site assistant. Ask about projects, skills, or the blog.", profile::NAME)
    } else {
        "I can answer questions about projects, skills, the resume, the blog, or how to get in touch.".to_owned()
    }
}
