//! Owner profile and social links.

pub const NAME: &str = "Jordan Lee";
pub const ROLE: &str = "Software Engineer";
pub const TAGLINE: &str = "I build fast, reliable software for the web and the systems underneath it.";
pub const LOCATION: &str = "Portland, OR";
pub const EMAIL: &str = "hello@jordanlee.dev";
pub const RESUME_PDF: &str = "/resume.pdf";
pub const COPYRIGHT_YEAR: u16 = 2026;

pub const ABOUT: &[&str] = &[
    "I'm a software engineer who enjoys the whole stack, from browser \
     rendering to the services and storage behind it.",
    "Most of my recent work is in Rust and TypeScript: WebAssembly front \
     ends, HTTP services, and the tooling that keeps both honest.",
    "Away from the keyboard I climb, cook, and take too many photos of \
     mountains.",
];

pub const SKILLS: &[&str] = &[
    "Rust", "TypeScript", "WebAssembly", "Leptos", "Axum", "PostgreSQL", "Docker", "CI/CD",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com/jordanlee" },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/jordanlee" },
    SocialLink { label: "Email", href: "mailto:hello@jordanlee.dev" },
];
