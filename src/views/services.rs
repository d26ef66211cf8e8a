use dioxus::prelude::*;

use crate::components::{Motion, Reveal};
use crate::content::services::{Service, SERVICES};
use crate::state::disclosure::Disclosure;
use crate::Route;

#[component]
pub fn Services() -> Element {
    let mut cards = use_signal(Disclosure::default);

    rsx! {
        section { class: "page-hero services-hero",
            Reveal { motion: Motion::Fade, class: "container",
                span { class: "hero-badge", "Our Services" }
                h1 { class: "page-hero-title", "Expert Solutions for Your Business" }
                p { class: "page-hero-subtitle",
                    "We help businesses transform and achieve their goals through our comprehensive range of services."
                }
                div { class: "hero-buttons",
                    a { href: "#services", class: "btn btn-primary", "Explore Services" }
                    Link { to: Route::Contact {}, class: "btn btn-secondary", "Get in Touch" }
                }
            }
        }

        section { id: "services", class: "services",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "Our Comprehensive Services" }
                    p { class: "section-subtitle",
                        "Tailored solutions designed to meet your unique business needs"
                    }
                }
                div { class: "services-grid",
                    for (index, service) in SERVICES.into_iter().enumerate() {
                        ServiceCard {
                            key: "{service.name}",
                            service,
                            index,
                            expanded: cards.read().is_expanded(index),
                            on_toggle: move |_| cards.write().toggle(index),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceCard(service: Service, index: usize, expanded: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        Reveal { delay_ms: index as u32 * 100,
            div {
                class: "service-card accent-{service.accent}",
                class: if expanded { "expanded" },
                div { class: "service-card-head", onclick: move |_| on_toggle.call(()),
                    div { class: "service-icon", "{service.icon}" }
                    div {
                        h3 { "{service.name}" }
                        p { "{service.description}" }
                    }
                    button {
                        class: "service-toggle",
                        aria_expanded: expanded,
                        aria_label: if expanded { "Collapse" } else { "Expand" },
                        if expanded { "−" } else { "+" }
                    }
                }
                if expanded {
                    ul { class: "service-features",
                        for (offset, feature) in service.features.iter().enumerate() {
                            li {
                                key: "{feature}",
                                class: "reveal reveal-left",
                                style: format!("animation-delay: {}ms;", offset * 50),
                                span { class: "check", "✓" }
                                span { "{feature}" }
                            }
                        }
                    }
                    div { class: "service-cta",
                        Link { to: Route::Contact {}, class: "btn btn-link", "Get Started →" }
                    }
                }
            }
        }
    }
}
