use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::nav::{
    NavItem, CONTACT_CHANNELS, FOOTER_COMPANY, FOOTER_RESOURCES, LEGAL_NAV, SOCIAL_LINKS,
};
use crate::platform;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let year = platform::current_year();

    rsx! {
        footer { class: "footer",
            div { class: "footer-main",
                div { class: "footer-brand",
                    h3 { "{config.brand.name}" }
                    p { class: "footer-tagline", "{config.brand.tagline}" }
                    div { class: "footer-social",
                        for social in SOCIAL_LINKS {
                            a {
                                key: "{social.name}",
                                href: social.href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: social.name,
                                class: "social-link",
                                "{social.name}"
                            }
                        }
                    }
                }

                FooterColumn { title: "Company", links: &FOOTER_COMPANY }
                FooterColumn { title: "Resources", links: &FOOTER_RESOURCES }

                div { class: "footer-column",
                    h4 { "Contact" }
                    ul {
                        for channel in CONTACT_CHANNELS {
                            li { key: "{channel.title}", class: "footer-contact",
                                span { class: "footer-contact-icon", "{channel.icon}" }
                                if channel.href.is_empty() {
                                    span { class: "multiline", "{channel.text}" }
                                } else {
                                    a { href: channel.href, class: "multiline", "{channel.text}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "footer-bottom",
                p { "© {year} {config.brand.name}. All rights reserved." }
                div { class: "footer-legal",
                    for item in LEGAL_NAV {
                        Link { key: "{item.path}", to: item.path, "{item.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn FooterColumn(title: &'static str, links: &'static [NavItem]) -> Element {
    rsx! {
        div { class: "footer-column",
            h4 { "{title}" }
            ul {
                for item in links {
                    li { key: "{item.path}",
                        Link { to: item.path, "{item.label}" }
                    }
                }
            }
        }
    }
}
