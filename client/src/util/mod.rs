//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, scroll
//! geometry, theme storage and document access) from page and component
//! logic so the logic can be tested natively.

pub mod scheduler;
pub mod scroll;
pub mod theme_env;
