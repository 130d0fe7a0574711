//! Reactive theme handle shared through Leptos context.
//!
//! The signal starts at `Theme::default()` so the hydrating client renders
//! the same markup as the server; an effect then pulls the resolved theme
//! from the controller.

use leptos::prelude::*;

use crate::state::theme::{ColorSchemeSource, SystemWatch, Theme, ThemeController, ThemePreference};
use crate::util::theme_env::{BrowserColorScheme, BrowserDocument, BrowserSchemeSubscription, BrowserStorage};

type BrowserThemeController = ThemeController<BrowserDocument, BrowserStorage>;

#[derive(Clone, Copy)]
pub struct ThemeHandle {
    theme: RwSignal<Theme>,
    controller: StoredValue<BrowserThemeController>,
    watch: StoredValue<Option<SystemWatch<BrowserSchemeSubscription>>, LocalStorage>,
}

impl ThemeHandle {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }

    /// Flip the theme. An explicit choice ends system following.
    pub fn toggle(&self) {
        let mut next = None;
        self.controller.update_value(|c| next = Some(c.toggle()));
        if let Some(next) = next {
            self.theme.set(next);
        }
        self.release_watch();
    }

    fn follow_system(&self, prefers_dark: bool) {
        let mut changed = None;
        self.controller.update_value(|c| changed = c.follow_system(prefers_dark));
        if let Some(theme) = changed {
            log::debug!("following system theme: {theme}");
            self.theme.set(theme);
        }
    }

    fn release_watch(&self) {
        self.watch.try_update_value(|watch| {
            if let Some(mut watch) = watch.take() {
                watch.release();
            }
        });
    }
}

/// Create the controller from the live document and provide the handle.
pub fn provide_theme() -> ThemeHandle {
    let handle = ThemeHandle {
        theme: RwSignal::new(Theme::default()),
        controller: StoredValue::new(ThemeController::new(BrowserDocument, BrowserStorage)),
        watch: StoredValue::new_local(None),
    };

    Effect::new(move || {
        let resolved = handle.controller.with_value(BrowserThemeController::theme);
        handle.theme.set(resolved);

        let follows_system = handle.controller.with_value(|c| c.preference() == ThemePreference::System);
        if follows_system {
            let scheme = BrowserColorScheme;
            handle.follow_system(scheme.prefers_dark());
            let subscription = scheme.subscribe(Box::new(move |dark| handle.follow_system(dark)));
            handle.watch.set_value(Some(SystemWatch::new(subscription)));
        }
    });

    on_cleanup(move || handle.release_watch());

    provide_context(handle);
    handle
}

pub fn use_theme() -> ThemeHandle {
    expect_context::<ThemeHandle>()
}
