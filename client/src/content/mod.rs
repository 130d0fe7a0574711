//! Static site content.
//!
//! ARCHITECTURE
//! ============
//! Pages render from these tables instead of embedding copy in markup, so
//! content edits never touch component code.

pub mod blog;
pub mod profile;
pub mod projects;
pub mod resume;
