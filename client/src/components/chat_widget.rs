//! Floating chat assistant.
//!
//! DESIGN
//! ======
//! One in-memory conversation per widget instance. Each submit sends a
//! single POST; failures become a static bot message rather than an error
//! state, and nothing is retried.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Sender};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let draft = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut query = None;
        chat.update(|state| query = state.submit(&draft.get_untracked()));
        let Some(query) = query else {
            return;
        };
        draft.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::ask_chat(&query).await;
            if let Err(e) = &outcome {
                log::warn!("chat request failed: {e}");
            }
            chat.update(|state| state.resolve(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
        }
    };

    view! {
        <div class="chat-widget" class:chat-widget--open=move || chat.get().open>
            <Show when=move || chat.get().open>
                <section class="chat-widget__panel" aria-label="Chat with us">
                    <header class="chat-widget__header">
                        <span>"Ask EduLend"</span>
                        <button
                            class="chat-widget__close"
                            type="button"
                            aria-label="Close chat"
                            on:click=move |_| chat.update(|state| state.open = false)
                        >
                            "✕"
                        </button>
                    </header>
                    <ol class="chat-widget__messages" aria-live="polite">
                        <For
                            each=move || chat.get().messages
                            key=|message| message.id
                            children=move |message| {
                                let class = match message.sender {
                                    Sender::User => "chat-widget__message chat-widget__message--user",
                                    Sender::Bot => "chat-widget__message chat-widget__message--bot",
                                };
                                view! { <li class=class>{message.text}</li> }
                            }
                        />
                        <Show when=move || chat.get().pending>
                            <li class="chat-widget__message chat-widget__message--bot chat-widget__typing">"…"</li>
                        </Show>
                    </ol>
                    <form class="chat-widget__form" on:submit=on_submit>
                        <input
                            class="chat-widget__input"
                            type="text"
                            placeholder="Type your question"
                            maxlength="1000"
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                            disabled=move || chat.get().pending
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || chat.get().pending>
                            "Send"
                        </button>
                    </form>
                </section>
            </Show>
            <button
                class="chat-widget__launcher"
                type="button"
                aria-label="Open chat"
                on:click=move |_| chat.update(|state| state.open = !state.open)
            >
                "💬"
            </button>
        </div>
    }
}
