use std::time::Duration;

use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use gloo_timers::future::sleep;

use crate::components::{Motion, Reveal};
use crate::config::SiteConfig;
use crate::content::nav::CONTACT_CHANNELS;
use crate::content::services::SERVICE_OPTIONS;
use crate::state::contact::{ContactForm, Field, FormRejected, Phase};

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "page-hero contact-hero",
            Reveal { class: "container",
                h1 { class: "page-hero-title", "Get in Touch" }
                p { class: "page-hero-subtitle",
                    "Have a question or want to work together? Send us a message and we'll get back to you as soon as possible."
                }
            }
        }

        div { class: "container contact-grid",
            Reveal { motion: Motion::FromLeft, class: "contact-info",
                h2 { "Contact Information" }
                p { "Reach out through any of the channels below." }
                for channel in CONTACT_CHANNELS {
                    div { key: "{channel.title}", class: "contact-channel",
                        div { class: "contact-channel-icon", "{channel.icon}" }
                        div {
                            h3 { "{channel.title}" }
                            if channel.href.is_empty() {
                                p { class: "multiline", "{channel.text}" }
                            } else {
                                a { class: "multiline", href: channel.href, "{channel.text}" }
                            }
                        }
                    }
                }
            }
            Reveal { motion: Motion::FromRight, class: "contact-form-card",
                ContactFormView {}
            }
        }
    }
}

#[component]
fn ContactFormView() -> Element {
    let submit_ms = use_context::<SiteConfig>().timing.contact_submit_ms;
    let mut contact = use_signal(ContactForm::default);
    let phase = contact.read().phase();

    if phase == Phase::Submitted {
        return rsx! {
            div { class: "contact-success",
                div { class: "success-icon", "✓" }
                h2 { "Message Sent!" }
                p { "Thank you for reaching out. We'll get back to you within 24 hours." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| contact.write().send_another(),
                    "Send Another Message"
                }
            }
        };
    }

    let submitting = phase == Phase::Submitting;

    rsx! {
        form {
            class: "contact-form",
            novalidate: true,
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                let result = contact.write().begin_submit();
                match result {
                    Ok(payload) => {
                        spawn(async move {
                            sleep(Duration::from_millis(u64::from(submit_ms))).await;
                            match serde_json::to_string(&payload) {
                                Ok(json) => info!(%json, "contact form submitted"),
                                Err(err) => warn!(?err, "could not encode contact payload"),
                            }
                            contact.write().finish_submit();
                        });
                    }
                    Err(FormRejected::Invalid(errors)) => {
                        debug!(fields = errors.len(), "contact form rejected");
                    }
                    Err(FormRejected::Busy) => debug!("contact form already sending"),
                }
            },
            h2 { "Send Us a Message" }
            div { class: "form-row",
                FormField { contact, field: Field::Name, caption: "Full Name *", kind: "text", placeholder: "John Doe" }
                FormField { contact, field: Field::Email, caption: "Email Address *", kind: "email", placeholder: "you@example.com" }
            }
            div { class: "form-row",
                FormField { contact, field: Field::Phone, caption: "Phone Number", kind: "tel", placeholder: "+254 700 000 000" }
                FormField { contact, field: Field::Company, caption: "Company", kind: "text", placeholder: "Your organization" }
            }
            div { class: "form-group",
                label { r#for: "service", "Service of Interest" }
                select {
                    id: "service",
                    value: "{contact.read().data().service}",
                    onchange: move |event| contact.write().set(Field::Service, event.value()),
                    option { value: "", "Select a service" }
                    for choice in SERVICE_OPTIONS {
                        option { key: "{choice.id}", value: choice.id, "{choice.name}" }
                    }
                }
            }
            div { class: "form-group",
                label { r#for: "message", "Your Message *" }
                textarea {
                    id: "message",
                    rows: "5",
                    placeholder: "How can we help you?",
                    class: if contact.read().error(Field::Message).is_some() { "invalid" },
                    value: "{contact.read().data().message}",
                    oninput: move |event| contact.write().set(Field::Message, event.value()),
                }
                if let Some(error) = contact.read().error(Field::Message) {
                    p { class: "field-error", "{error}" }
                }
            }
            if !contact.read().errors().is_empty() {
                p { class: "field-error", role: "alert", "Please correct the highlighted fields." }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary submit",
                disabled: submitting,
                if submitting { "Sending..." } else { "Send Message →" }
            }
        }
    }
}

#[component]
fn FormField(
    mut contact: Signal<ContactForm>,
    field: Field,
    caption: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> Element {
    let id = format!("{field:?}").to_lowercase();
    let value = contact.read().data().get(field).to_string();
    let error = contact.read().error(field).map(ToString::to_string);
    let invalid = error.is_some();

    rsx! {
        div { class: "form-group",
            label { r#for: "{id}", "{caption}" }
            input {
                id: "{id}",
                r#type: kind,
                placeholder,
                class: if invalid { "invalid" },
                value,
                oninput: move |event| contact.write().set(field, event.value()),
            }
            if let Some(error) = error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}
