use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the close
/// button calls `on_close`; clicks inside the panel stay inside.
#[component]
pub fn Modal(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            role: "presentation",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-panel",
                role: "dialog",
                aria_modal: "true",
                onclick: move |event: MouseEvent| event.stop_propagation(),
                button {
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                {children}
            }
        }
    }
}
