use dioxus::prelude::*;

use crate::state::carousel::Carousel;

/// Previous/next arrows and one dot per slide.
///
/// With `pause_on_hover` the carousel stops auto-advancing while the pointer
/// is over the controls.
#[component]
pub fn CarouselControls(
    mut carousel: Signal<Carousel>,
    #[props(default)] pause_on_hover: bool,
    #[props(default = true)] arrows: bool,
    #[props(default)] class: String,
) -> Element {
    let state = carousel();

    rsx! {
        div {
            class: "carousel-controls {class}",
            onmouseenter: move |_| {
                if pause_on_hover {
                    carousel.write().pause();
                }
            },
            onmouseleave: move |_| {
                if pause_on_hover {
                    carousel.write().resume();
                }
            },
            if arrows {
                button {
                    class: "carousel-arrow prev",
                    aria_label: "Previous slide",
                    onclick: move |_| carousel.write().prev(),
                    "‹"
                }
            }
            div { class: "carousel-dots",
                for index in 0..state.len() {
                    button {
                        key: "{index}",
                        class: if index == state.index() { "dot active" } else { "dot" },
                        aria_label: format!("Go to slide {}", index + 1),
                        onclick: move |_| {
                            carousel.write().go_to(index);
                        },
                    }
                }
            }
            if arrows {
                button {
                    class: "carousel-arrow next",
                    aria_label: "Next slide",
                    onclick: move |_| carousel.write().next(),
                    "›"
                }
            }
        }
    }
}
