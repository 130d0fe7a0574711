//! Route table for the site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router in `app` and the navigation bar both read from here, so a
//! page added to [`NAV_ROUTES`] shows up in the menu with the right path.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Resume,
    Contact,
    Blog,
    Demo,
}

/// Routes listed in the navigation bar, in display order.
pub const NAV_ROUTES: [Route; 7] = [
    Route::Home,
    Route::About,
    Route::Projects,
    Route::Resume,
    Route::Blog,
    Route::Contact,
    Route::Demo,
];

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Resume => "/resume",
            Self::Contact => "/contact",
            Self::Blog => "/blog",
            Self::Demo => "/demo",
        }
    }

    /// Path segment used by the router; empty for the home page.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Resume => "Resume",
            Self::Contact => "Contact",
            Self::Blog => "Blog",
            Self::Demo => "Demo",
        }
    }

    /// Whether `pathname` belongs to this route. Blog posts count as Blog.
    pub fn matches(self, pathname: &str) -> bool {
        let pathname = match pathname.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match self {
            Self::Home => pathname == "/",
            Self::Blog => pathname == "/blog" || pathname.starts_with("/blog/"),
            other => pathname == other.path(),
        }
    }
}

/// Path of a single blog post.
pub fn blog_post_path(slug: &str) -> String {
    format!("/blog/{slug}")
}
