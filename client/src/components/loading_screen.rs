//! Splash screen shown while the loading sequence runs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session starts in an effect, so only the hydrated client runs
//! timers. Unmounting drops the session, which cancels any pending tick
//! or settle timer before `on_complete` can fire.

use leptos::prelude::*;

use crate::content::profile;
use crate::state::loading::{LoadingConfig, LoadingSession, LoadingStage, start_loading};
use crate::util::scheduler::{BrowserScheduler, BrowserTimer};

#[component]
pub fn LoadingScreen(on_complete: Callback<()>) -> impl IntoView {
    let progress = RwSignal::new(0_u8);
    let session = StoredValue::new_local(None::<LoadingSession<BrowserTimer>>);

    Effect::new(move || {
        let started = start_loading(
            &BrowserScheduler,
            LoadingConfig::default(),
            move |p| progress.set(p),
            move || on_complete.run(()),
        );
        session.set_value(Some(started));
    });

    on_cleanup(move || {
        let _ = session.try_update_value(Option::take);
    });

    let stage = Memo::new(move |_| LoadingStage::from_progress(progress.get()));
    let percent = move || format!("{}%", progress.get());

    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__name">{profile::NAME}</div>
            <div class="loading-screen__bar">
                <div class="loading-screen__fill" style:width=percent></div>
            </div>
            <div class="loading-screen__percent">{percent}</div>
            <p class="loading-screen__message">{move || stage.get().message()}</p>
        </div>
    }
}
