use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::{Modal, Reveal};
use crate::content::projects::{project_categories, Project, PROJECTS};
use crate::hooks::use_overlay;
use crate::state::filter::{filter_records, CategoryFilter, FilterOutcome};
use crate::Route;

#[component]
pub fn Projects() -> Element {
    let mut filter = use_signal(CategoryFilter::default);
    let project = use_overlay::<&'static Project>();

    let current = filter.read().clone();
    let outcome = filter_records(&PROJECTS, &current, "");

    rsx! {
        section { class: "page-hero projects-hero",
            Reveal { class: "container",
                h1 { class: "page-hero-title", "Our Projects" }
                p { class: "page-hero-subtitle",
                    "Explore our portfolio of successful transformations and the impact we've created for our clients."
                }
            }
        }

        div { class: "container",
            div { class: "filter-chips",
                for label in project_categories() {
                    button {
                        key: "{label}",
                        class: if current.label() == label { "chip active" } else { "chip" },
                        onclick: move |_| {
                            debug!(category = label, "project filter changed");
                            filter.set(CategoryFilter::from_label(label));
                        },
                        "{label}"
                    }
                }
            }

            {
                match outcome {
                    FilterOutcome::Matches(projects) => rsx! {
                        div { class: "projects-grid",
                            for (index, item) in projects.into_iter().enumerate() {
                                Reveal { key: "{item.id}", delay_ms: index as u32 * 100,
                                    article {
                                        class: "project-card",
                                        onclick: move |_| project.open(item),
                                        div { class: "project-image",
                                            img { src: item.image, alt: item.title, loading: "lazy" }
                                        }
                                        div { class: "project-content",
                                            h3 { "{item.title}" }
                                            p { class: "project-client", "{item.client}" }
                                            p { class: "project-description", "{item.description}" }
                                            span { class: "project-link", "View case study →" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    FilterOutcome::NoResults => rsx! {
                        div { class: "no-results",
                            h3 { "No projects found" }
                            p { "There are no projects in this category yet." }
                        }
                    },
                }
            }
        }

        if let Some(selected) = project.selected() {
            Modal { on_close: move |_| project.close(),
                img { class: "modal-image", src: selected.image, alt: selected.title }
                div { class: "modal-body",
                    header {
                        span { class: "modal-category", "{selected.category}" }
                        h2 { "{selected.title}" }
                        p { class: "project-client", "{selected.client}" }
                    }
                    p { class: "modal-description", "{selected.description}" }
                    h3 { "Key Results" }
                    ul { class: "results-list",
                        for result in selected.results {
                            li { key: "{result}",
                                span { class: "check", "✓" }
                                span { "{result}" }
                            }
                        }
                    }
                    div { class: "modal-actions",
                        Link { to: Route::Contact {}, class: "btn btn-primary", "Start Your Project →" }
                        button { class: "btn btn-secondary", onclick: move |_| project.close(), "Close" }
                    }
                }
            }
        }
    }
}
