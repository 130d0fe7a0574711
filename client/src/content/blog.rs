//! Blog posts and markdown rendering.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use pulldown_cmark::{Event, Options, Parser, html};

pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    /// ISO `YYYY-MM-DD`, so string order is date order.
    pub date: &'static str,
    pub tags: &'static [&'static str],
    pub summary: &'static str,
    /// Markdown source.
    pub body: &'static str,
}

impl BlogPost {
    pub fn reading_minutes(&self) -> usize {
        self.body.split_whitespace().count().div_ceil(WORDS_PER_MINUTE).max(1)
    }
}

const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "hello-leptos",
        title: "Rebuilding my site with Leptos",
        date: "2026-03-02",
        tags: &["rust", "leptos", "wasm"],
        summary: "Why I moved this portfolio to a Rust front end, and what surprised me.",
        body: "# Rebuilding my site with Leptos\n\n\
I rewrote this site as a **Leptos** app rendered on the server and hydrated in \
the browser.\n\n\
## What went well\n\n\
- Fine-grained signals made the theme toggle and splash screen trivial.\n\
- Sharing route definitions between the server and client removed a class of bugs.\n\n\
## What took time\n\n\
Getting the theme right on first paint. The answer was a tiny inline script \
that runs before hydration, plus a controller that reads what it left behind.\n",
    },
    BlogPost {
        slug: "testing-timers",
        title: "Testing timer code without sleeping",
        date: "2026-05-18",
        tags: &["rust", "testing"],
        summary: "Driving interval-based UI logic from a virtual clock.",
        body: "# Testing timer code without sleeping\n\n\
Timer-driven UI is easy to write and painful to test. Putting the host \
timers behind a small trait lets tests advance a virtual clock instead.\n\n\
```rust\nscheduler.advance(3_000);\nassert_eq!(session.progress(), 100);\n```\n\n\
The same code runs on `gloo-timers` in the browser.\n",
    },
    BlogPost {
        slug: "dark-mode-done-right",
        title: "Dark mode done right",
        date: "2025-11-09",
        tags: &["css", "ux"],
        summary: "Respecting the OS preference without fighting the user's choice.",
        body: "# Dark mode done right\n\n\
Follow the operating system until the user picks a theme, then remember \
the pick. Everything else is detail.\n",
    },
];

/// All posts, newest first.
pub fn posts() -> Vec<&'static BlogPost> {
    let mut posts = POSTS.iter().collect::<Vec<_>>();
    posts.sort_by(|a, b| b.date.cmp(a.date));
    posts
}

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|p| p.slug == slug)
}

/// Render markdown to HTML, dropping raw HTML from the source.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
