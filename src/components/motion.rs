use dioxus::prelude::*;

/// Which CSS enter animation a [`Reveal`] plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    Rise,
    Fade,
    FromLeft,
    FromRight,
    Zoom,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::Rise => "reveal-rise",
            Motion::Fade => "reveal-fade",
            Motion::FromLeft => "reveal-left",
            Motion::FromRight => "reveal-right",
            Motion::Zoom => "reveal-zoom",
        }
    }
}

/// Wraps children in an element that animates in once, `delay_ms` after mount.
#[component]
pub fn Reveal(
    #[props(default)] motion: Motion,
    #[props(default)] delay_ms: u32,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "reveal {motion.class()} {class}",
            style: "animation-delay: {delay_ms}ms;",
            {children}
        }
    }
}
