use std::rc::Rc;
use std::time::Duration;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use gloo_timers::future::sleep;

use crate::config::SiteConfig;
use crate::platform;
use crate::state::chat::{ChatLog, ChatMessage};

/// Floating assistant bubble with scripted replies.
#[component]
pub fn ChatWidget() -> Element {
    let reply_ms = use_context::<SiteConfig>().timing.chat_reply_ms;

    let mut open = use_signal(|| false);
    let mut log = use_signal(|| ChatLog::new(platform::clock_seed()));
    let mut draft = use_signal(String::new);
    let mut bottom = use_signal(|| None::<Rc<MountedData>>);

    // Keep the newest message in view.
    use_effect(move || {
        let _ = log.read().len();
        if let Some(anchor) = bottom() {
            spawn(async move {
                if let Err(err) = anchor.scroll_to(ScrollBehavior::Smooth).await {
                    debug!(?err, "chat scroll skipped");
                }
            });
        }
    });

    let mut send = move || {
        let text = draft();
        if !log.write().push_user(&text) {
            return;
        }
        draft.set(String::new());
        spawn(async move {
            sleep(Duration::from_millis(u64::from(reply_ms))).await;
            log.write().push_reply();
        });
    };

    rsx! {
        div { class: "chat-widget",
            if open() {
                div { class: "chat-panel",
                    div { class: "chat-header",
                        span { "AI Assistant" }
                        button {
                            class: "chat-close",
                            aria_label: "Close chat",
                            onclick: move |_| open.set(false),
                            "✕"
                        }
                    }
                    div { class: "chat-messages",
                        for (index, message) in log.read().messages().iter().enumerate() {
                            div { key: "{index}", class: message_class(message),
                                "{message.text}"
                            }
                        }
                        div {
                            class: "chat-bottom",
                            onmounted: move |event| bottom.set(Some(event.data())),
                        }
                    }
                    div { class: "chat-input",
                        input {
                            r#type: "text",
                            placeholder: "Type your message...",
                            value: "{draft}",
                            oninput: move |event| draft.set(event.value()),
                            onkeydown: move |event: KeyboardEvent| {
                                if event.key() == Key::Enter {
                                    send();
                                }
                            },
                        }
                        button {
                            class: "chat-send",
                            aria_label: "Send message",
                            onclick: move |_| send(),
                            "➤"
                        }
                    }
                }
            }
            button {
                class: "chat-toggle",
                aria_label: if open() { "Close chat" } else { "Open chat" },
                onclick: move |_| open.toggle(),
                if open() { "✕" } else { "💬" }
            }
        }
    }
}

fn message_class(message: &ChatMessage) -> &'static str {
    if message.is_user() {
        "chat-message user"
    } else {
        "chat-message assistant"
    }
}
