//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page renders one route from `content` tables and delegates shared
//! chrome to `components`.

pub mod about;
pub mod blog;
pub mod blog_post;
pub mod contact;
pub mod demo;
pub mod home;
pub mod not_found;
pub mod projects;
pub mod resume;
