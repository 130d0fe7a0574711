//! Floating chat launcher and panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads/writes `ChatState` from context and relays each message through
//! `net::chat`. Errors are appended to the log rather than surfaced
//! elsewhere.

use leptos::prelude::*;

use crate::state::chat::{ChatRole, ChatState, MAX_MESSAGE_CHARS};

fn role_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "chatbot__msg chatbot__msg--user",
        ChatRole::Assistant => "chatbot__msg chatbot__msg--assistant",
        ChatRole::Error => "chatbot__msg chatbot__msg--error",
    }
}

#[component]
pub fn ChatbotWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let draft = RwSignal::new(String::new());

    let is_open = move || chat.with(|c| c.open);
    let is_pending = move || chat.with(|c| c.pending);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        let mut outgoing = None;
        chat.update(|c| outgoing = c.begin_send(&text));
        let Some(message) = outgoing else {
            return;
        };
        draft.set(String::new());

        leptos::task::spawn_local(async move {
            match crate::net::chat::send_message(&message).await {
                Ok(reply) => chat.update(|c| c.receive_reply(&reply)),
                Err(e) => {
                    log::warn!("chat request failed: {e}");
                    chat.update(|c| c.receive_error(&e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="chatbot" class:open=is_open>
            <Show when=is_open>
                <div class="chatbot__panel" role="dialog" aria-label="Chat">
                    <ul class="chatbot__log">
                        <For
                            each=move || chat.with(|c| c.messages.clone())
                            key=|message| message.id.clone()
                            let:message
                        >
                            <li class=role_class(message.role)>{message.content}</li>
                        </For>
                    </ul>
                    <form class="chatbot__form" on:submit=on_submit>
                        <input
                            class="chatbot__input"
                            type="text"
                            placeholder="Ask me something..."
                            maxlength=MAX_MESSAGE_CHARS.to_string()
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit" disabled=is_pending>
                            {move || if is_pending() { "..." } else { "Send" }}
                        </button>
                    </form>
                </div>
            </Show>
            <button
                class="chatbot__toggle"
                aria-label="Toggle chat"
                on:click=move |_| chat.update(ChatState::toggle_open)
            >
                {move || if is_open() { "✕" } else { "?" }}
            </button>
        </div>
    }
}
