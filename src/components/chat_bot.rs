//! Floating travel-assistant chat widget.
//!
//! Posts messages to the chat backend and renders replies as plain text.
//! Connection failures become an in-conversation error bubble instead of a
//! broken widget.

use leptos::prelude::*;

use crate::net::api::send_chat_message;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ChatEntry {
    from_bot: bool,
    text: String,
}

const GREETING: &str = "Hello! Ask me about hotels, events, or travel tips in Sri Lanka.";
const CONNECTION_ERROR: &str = "Sorry, I could not reach the assistant. Please try again later.";

/// Floating chat launcher and conversation window.
#[component]
pub fn ChatBot() -> impl IntoView {
    let open = RwSignal::new(false);
    let input = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let messages = RwSignal::new(vec![ChatEntry {
        from_bot: true,
        text: GREETING.to_owned(),
    }]);

    let send = move || {
        let text = input.get_untracked().trim().to_owned();
        if text.is_empty() || busy.get_untracked() {
            return;
        }
        messages.update(|list| {
            list.push(ChatEntry {
                from_bot: false,
                text: text.clone(),
            });
        });
        input.set(String::new());
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let reply = match send_chat_message(&text).await {
                    Ok(reply) => reply,
                    Err(err) => {
                        leptos::logging::warn!("chat request failed: {err}");
                        CONNECTION_ERROR.to_owned()
                    }
                };
                let _ = messages.try_update(|list| {
                    list.push(ChatEntry {
                        from_bot: true,
                        text: reply,
                    });
                });
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &text;
            busy.set(false);
        }
    };

    view! {
        <div class="chat-bot">
            <Show when=move || !open.get()>
                <button class="chat-bot__launcher" on:click=move |_| open.set(true)>
                    "💬"
                </button>
            </Show>

            <Show when=move || open.get()>
                <div class="chat-bot__window">
                    <header class="chat-bot__header">
                        <div>
                            <h3>"EventHaven Assistant"</h3>
                            <p>"Hotels & Events"</p>
                        </div>
                        <button class="modal__close" on:click=move |_| open.set(false)>
                            "✕"
                        </button>
                    </header>

                    <div class="chat-bot__messages">
                        {move || {
                            messages
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    let class = if entry.from_bot {
                                        "chat-bot__bubble chat-bot__bubble--bot"
                                    } else {
                                        "chat-bot__bubble chat-bot__bubble--user"
                                    };
                                    view! { <div class=class>{entry.text}</div> }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <Show when=move || busy.get()>
                            <div class="chat-bot__bubble chat-bot__bubble--bot">
                                "Thinking..."
                            </div>
                        </Show>
                    </div>

                    <div class="chat-bot__input">
                        <input
                            type="text"
                            placeholder="Ask about hotels, events, or travel plans..."
                            prop:value=move || input.get()
                            prop:disabled=move || busy.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    send();
                                }
                            }
                        />
                        <button
                            class="btn btn--primary"
                            prop:disabled=move || busy.get()
                            on:click=move |_| send()
                        >
                            "➤"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
