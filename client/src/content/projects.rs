//! Project showcase entries.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub tech: &'static [&'static str],
    pub repo: Option<&'static str>,
    pub live: Option<&'static str>,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Portfolio",
        summary: "This site: a Leptos single-page app served by Axum, with SSR and hydration.",
        tech: &["Rust", "Leptos", "Axum", "WebAssembly"],
        repo: Some("https://github.com/jordanlee/portfolio"),
        live: None,
        featured: true,
    },
    Project {
        name: "Trailhead",
        summary: "Offline-first hiking planner with map tile caching and route sharing.",
        tech: &["TypeScript", "IndexedDB", "Service Workers"],
        repo: Some("https://github.com/jordanlee/trailhead"),
        live: Some("https://trailhead.jordanlee.dev"),
        featured: true,
    },
    Project {
        name: "logslice",
        summary: "Command-line tool for slicing large structured logs by time window and field.",
        tech: &["Rust", "clap", "serde"],
        repo: Some("https://github.com/jordanlee/logslice"),
        live: None,
        featured: false,
    },
    Project {
        name: "Pantry",
        summary: "Recipe and grocery tracker with shared household lists.",
        tech: &["Axum", "PostgreSQL", "sqlx"],
        repo: None,
        live: Some("https://pantry.jordanlee.dev"),
        featured: false,
    },
];

/// Featured projects first, original order otherwise preserved.
pub fn showcase() -> Vec<&'static Project> {
    let mut projects = PROJECTS.iter().collect::<Vec<_>>();
    projects.sort_by_key(|p| !p.featured);
    projects
}

pub fn featured() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}
