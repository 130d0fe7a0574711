//! Theme resolution, toggling, and persistence.
//!
//! DESIGN
//! ======
//! The controller owns the resolved theme and receives the document and
//! storage it synchronizes with at construction. Browser-backed contexts
//! live in `util::theme_env`; tests inject in-memory doubles.
//!
//! INVARIANTS
//! ==========
//! After `ThemeController::new` returns, the in-memory theme, the document
//! marker, and the enabled highlight stylesheet always agree. Persisted
//! values written here are always `"light"` or `"dark"`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Class placed on the root element while the dark theme is active.
pub const MARKER_CLASS: &str = "dark";

/// Media query used to read the operating system preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Element ids of the two mode-dependent syntax highlighting stylesheets.
pub const LIGHT_STYLESHEET_ID: &str = "highlight-light";
pub const DARK_STYLESHEET_ID: &str = "highlight-dark";

/// Resolved presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_owned())),
        }
    }
}

/// What the user asked for, before OS resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    /// No explicit choice persisted; follow the operating system.
    #[default]
    System,
}

impl ThemePreference {
    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::System => Theme::from_dark(system_prefers_dark),
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    #[error("preference storage rejected write for key {key}")]
    StorageRejected { key: String },
    #[error("unknown theme value: {0:?}")]
    UnknownTheme(String),
}

/// Durable key-value storage for the preference.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or refuses
    /// the write (quota, privacy mode).
    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Document-level state the theme is mirrored onto.
pub trait ThemeDocument {
    /// Whether the root element currently carries [`MARKER_CLASS`].
    fn has_marker(&self) -> bool;

    fn set_marker(&self, present: bool);

    /// Enable the stylesheet matching `theme` and disable the other one.
    /// A document without linked stylesheets ignores this.
    fn select_stylesheet(&self, theme: Theme);
}

/// Operating system colour-scheme preference.
pub trait ColorSchemeSource {
    /// Releases the change listener when dropped.
    type Subscription;

    fn prefers_dark(&self) -> bool;

    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Self::Subscription;
}

/// Holds a colour-scheme subscription and releases it exactly once.
pub struct SystemWatch<S> {
    subscription: Option<S>,
}

impl<S> SystemWatch<S> {
    pub fn new(subscription: S) -> Self {
        Self { subscription: Some(subscription) }
    }

    /// Release the subscription. Returns `true` only on the first call.
    pub fn release(&mut self) -> bool {
        self.subscription.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }
}

impl<S> Drop for SystemWatch<S> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<S> fmt::Debug for SystemWatch<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemWatch").field("active", &self.is_active()).finish()
    }
}

/// Owns the resolved theme and keeps document and storage in sync with it.
#[derive(Debug)]
pub struct ThemeController<D, S> {
    document: D,
    store: S,
    theme: Theme,
    preference: ThemePreference,
}

impl<D: ThemeDocument, S: PreferenceStore> ThemeController<D, S> {
    /// Resolve the initial theme: a valid persisted value first, else the
    /// marker the pre-render bootstrap left on the document.
    pub fn new(document: D, store: S) -> Self {
        let stored = match store.read(STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    log::warn!("ignoring persisted theme: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("theme preference unreadable: {e}");
                None
            }
        };

        let (theme, preference) = match stored {
            Some(theme) => (theme, ThemePreference::from(theme)),
            None => (Theme::from_dark(document.has_marker()), ThemePreference::System),
        };

        let controller = Self { document, store, theme, preference };
        controller.apply();
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip light/dark, persist it, and mirror it onto the document.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.theme = next;
        self.preference = ThemePreference::from(next);
        self.apply();
        if let Err(e) = self.store.write(STORAGE_KEY, next.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
        next
    }

    /// Re-resolve from the OS preference. Only has an effect while no
    /// explicit preference is set; returns the new theme if it changed.
    pub fn follow_system(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.preference != ThemePreference::System {
            return None;
        }
        let next = ThemePreference::System.resolve(prefers_dark);
        if next == self.theme {
            return None;
        }
        self.theme = next;
        self.apply();
        Some(next)
    }

    fn apply(&self) {
        self.document.set_marker(self.theme.is_dark());
        self.document.select_stylesheet(self.theme);
    }
}

/// Inline script run before the UI mounts so the first paint already has
/// the right marker and stylesheet. Persisted preference first, OS
/// preference second. Must be placed after the stylesheet links.
pub fn bootstrap_script() -> String {
    format!(
        "(function(){{try{{var t=window.localStorage.getItem('{key}');\
if(t!=='light'&&t!=='dark'){{t=window.matchMedia('{query}').matches?'dark':'light';}}\
var d=t==='dark',r=document.documentElement;\
if(d){{r.classList.add('{marker}');}}else{{r.classList.remove('{marker}');}}\
var l=document.getElementById('{light}'),k=document.getElementById('{dark}');\
if(l){{l.disabled=d;}}if(k){{k.disabled=!d;}}}}catch(e){{}}}})();",
        key = STORAGE_KEY,
        query = DARK_SCHEME_QUERY,
        marker = MARKER_CLASS,
        light = LIGHT_STYLESHEET_ID,
        dark = DARK_STYLESHEET_ID,
    )
}
