//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome around the routed pages and read or
//! write shared state from Leptos context providers.

pub mod chatbot_widget;
pub mod footer;
pub mod loading_screen;
pub mod nav_bar;
pub mod scroll_progress;
