//! Page scroll position as a progress ratio.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Fraction of the scrollable distance covered, clamped to `[0, 1]`.
///
/// A page that does not scroll reports `0.0`.
pub fn scroll_ratio(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Read the current document scroll ratio. Always `0.0` outside the browser.
pub fn current_ratio() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        let Some(root) = window.document().and_then(|d| d.document_element()) else {
            return 0.0;
        };
        let top = window.scroll_y().unwrap_or(0.0);
        scroll_ratio(top, f64::from(root.scroll_height()), f64::from(root.client_height()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
