//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `loading`, `chat`, `ui`) so
//! components depend on small focused models. `theme` and `loading` are
//! framework-free; `theme_context` adapts the theme to Leptos context.

pub mod chat;
pub mod loading;
pub mod theme;
pub mod theme_context;
pub mod ui;
