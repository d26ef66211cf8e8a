use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::nav::PRIMARY_NAV;
use crate::hooks::use_window_listener;
use crate::platform;
use crate::state::nav::{is_active, is_mobile_width, MobileMenu, ScrollHeader};
use crate::Route;

const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn Navbar() -> Element {
    let config = use_context::<SiteConfig>();
    let path = use_route::<Route>().to_string();

    let mut menu = use_signal(MobileMenu::default);
    let mut scroll_header = use_signal(|| {
        ScrollHeader::at(config.header.scroll_threshold_px, platform::scroll_y())
    });
    let breakpoint = config.header.mobile_breakpoint_px;
    let mut narrow = use_signal(|| {
        platform::inner_width().is_some_and(|width| is_mobile_width(width, breakpoint))
    });

    use_effect(use_reactive((&path,), move |(path,)| {
        menu.write().follow_route(&path);
    }));

    use_window_listener("scroll", move |_| {
        let next = scroll_header.peek().transition(platform::scroll_y());
        if let Some(scrolled) = next {
            scroll_header.write().set_scrolled(scrolled);
        }
    });

    use_window_listener("resize", move |_| {
        let Some(width) = platform::inner_width() else {
            return;
        };
        let now_narrow = is_mobile_width(width, breakpoint);
        if *narrow.peek() != now_narrow {
            narrow.set(now_narrow);
        }
    });

    let menu_open = menu.read().is_open(&path);
    let header_class = if scroll_header.read().scrolled() {
        "navbar scrolled"
    } else {
        "navbar"
    };
    let toggle_path = path.clone();

    rsx! {
        header { class: header_class,
            nav { class: "navbar-inner",
                Link { to: Route::Home {}, class: "navbar-brand",
                    img { src: LOGO, alt: "{config.brand.name}" }
                    span { class: "navbar-brand-name", "{config.brand.short_name}" }
                }

                div { class: "nav-links",
                    for item in PRIMARY_NAV {
                        Link {
                            key: "{item.path}",
                            to: item.path,
                            class: link_class(is_active(&path, &item)),
                            "{item.label}"
                        }
                    }
                }

                Link { to: Route::Contact {}, class: "nav-cta",
                    "Get in Touch"
                    if !narrow() {
                        span { class: "nav-cta-arrow", "→" }
                    }
                }

                button {
                    class: "menu-toggle",
                    aria_label: "Toggle menu",
                    aria_expanded: menu_open,
                    onclick: move |_| {
                        menu.write().toggle(&toggle_path);
                        debug!(path = %toggle_path, "mobile menu toggled");
                    },
                    if menu_open { "✕" } else { "☰" }
                }
            }

            if menu_open {
                div { class: "mobile-menu",
                    for item in PRIMARY_NAV {
                        Link {
                            key: "{item.path}",
                            to: item.path,
                            class: link_class(is_active(&path, &item)),
                            onclick: move |_| menu.write().close(),
                            "{item.label}"
                        }
                    }
                    Link {
                        to: Route::Contact {},
                        class: "nav-cta mobile",
                        onclick: move |_| menu.write().close(),
                        "Get in Touch"
                    }
                }
            }
        }
    }
}

fn link_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}
