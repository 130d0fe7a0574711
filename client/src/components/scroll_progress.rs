//! Thin bar across the top of the page tracking scroll position.

use leptos::prelude::*;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let ratio = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            ratio.set(crate::util::scroll::current_ratio());
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", ratio.get() * 100.0)
            style:transform=move || format!("scaleX({:.4})", ratio.get())
        ></div>
    }
}
