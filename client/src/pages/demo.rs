//! Interactive demo of the splash stages and the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the same `LoadingStage` table the splash screen uses, and the
//! shared `ThemeHandle` and `UiState` from context. "Replay intro" clears
//! `UiState::loaded`, which remounts the splash overlay.

use leptos::prelude::*;

use crate::state::loading::{LoadingStage, MAX_PROGRESS};
use crate::state::theme_context::use_theme;
use crate::state::ui::UiState;

#[component]
pub fn DemoPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let theme = use_theme();
    let progress = RwSignal::new(0u8);
    let stage = Memo::new(move |_| LoadingStage::from_progress(progress.get()));

    view! {
        <section class="demo">
            <h1>"Demo"</h1>

            <h2>"Loading stages"</h2>
            <label class="demo__slider">
                {move || format!("Progress: {}%", progress.get())}
                <input
                    type="range"
                    min="0"
                    max=MAX_PROGRESS.to_string()
                    prop:value=move || progress.get().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                            progress.set(value.min(MAX_PROGRESS));
                        }
                    }
                />
            </label>
            <p class="demo__stage">
                <code>{move || stage.get().topic()}</code>
                " "
                {move || stage.get().message()}
            </p>
            <table class="demo__stages">
                <thead>
                    <tr><th>"From"</th><th>"Topic"</th><th>"Message"</th></tr>
                </thead>
                <tbody>
                    {LoadingStage::ALL
                        .iter()
                        .map(|&s| {
                            view! {
                                <tr class:current=move || stage.get() == s>
                                    <td>{format!("{}%", s.threshold())}</td>
                                    <td>{s.topic()}</td>
                                    <td>{s.message()}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <button class="btn" on:click=move |_| ui.update(UiState::replay_intro)>
                "Replay intro"
            </button>

            <h2>"Theme"</h2>
            <p>{move || format!("Current theme: {}", theme.theme())}</p>
            <button class="btn" on:click=move |_| theme.toggle()>"Toggle theme"</button>
        </section>
    }
}
