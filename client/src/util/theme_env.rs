//! Browser-backed theme context: root element, `localStorage`, and the
//! `prefers-color-scheme` media query.
//!
//! All three are zero-sized handles that look up the window on each call.
//! Outside the `hydrate` build they no-op so SSR output is deterministic.

#[cfg(test)]
#[path = "theme_env_test.rs"]
mod theme_env_test;

#[cfg(feature = "hydrate")]
use crate::state::theme::{DARK_SCHEME_QUERY, MARKER_CLASS};
use crate::state::theme::{
    ColorSchemeSource, DARK_STYLESHEET_ID, LIGHT_STYLESHEET_ID, PreferenceStore, Theme, ThemeDocument, ThemeError,
};

/// Stylesheet id for `theme` and the id of the one that must be disabled.
pub fn stylesheet_ids(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Light => (LIGHT_STYLESHEET_ID, DARK_STYLESHEET_ID),
        Theme::Dark => (DARK_STYLESHEET_ID, LIGHT_STYLESHEET_ID),
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl ThemeDocument for BrowserDocument {
    fn has_marker(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            root_element().is_some_and(|el| el.class_list().contains(MARKER_CLASS))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn set_marker(&self, present: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = root_element() {
                let class_list = el.class_list();
                let _ = if present {
                    class_list.add_1(MARKER_CLASS)
                } else {
                    class_list.remove_1(MARKER_CLASS)
                };
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = present;
        }
    }

    fn select_stylesheet(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let (enable, disable) = stylesheet_ids(theme);
            for (id, disabled) in [(enable, false), (disable, true)] {
                if let Some(link) = doc
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<web_sys::HtmlLinkElement>().ok())
                {
                    link.set_disabled(disabled);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

#[cfg(feature = "hydrate")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| ThemeError::StorageUnavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| ThemeError::StorageRejected { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, ThemeError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(ThemeError::StorageUnavailable)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserColorScheme;

/// Live `change` listener on the dark-scheme media query.
pub struct BrowserSchemeSubscription {
    #[cfg(feature = "hydrate")]
    listener: Option<(
        web_sys::MediaQueryList,
        wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
    )>,
}

impl Drop for BrowserSchemeSubscription {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            if let Some((query, closure)) = self.listener.take() {
                let _ = query.remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            }
        }
    }
}

impl ColorSchemeSource for BrowserColorScheme {
    type Subscription = BrowserSchemeSubscription;

    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            dark_scheme_query().is_some_and(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Self::Subscription {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(query) = dark_scheme_query() else {
                return BrowserSchemeSubscription { listener: None };
            };
            let mut on_change = on_change;
            let closure = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
                move |ev: web_sys::MediaQueryListEvent| on_change(ev.matches()),
            );
            if query
                .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("could not subscribe to colour-scheme changes");
                return BrowserSchemeSubscription { listener: None };
            }
            BrowserSchemeSubscription { listener: Some((query, closure)) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
            BrowserSchemeSubscription {}
        }
    }
}

#[cfg(feature = "hydrate")]
fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}
