use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;

use crate::components::{CarouselControls, Motion, Reveal};
use crate::config::SiteConfig;
use crate::content::home::{Feature, FeatureArt, Stat, FEATURES, SLIDES, STATS, TESTIMONIALS};
use crate::hooks::use_autoplay;
use crate::state::carousel::{Carousel, Direction};
use crate::state::counter::count_up;
use crate::Route;

/// Counter frame length, roughly one animation frame.
const FRAME_MS: u32 = 16;

/// The Home page component that will be rendered when the current route is `[Route::Home]`
#[component]
pub fn Home() -> Element {
    rsx! {
        HeroSlider {}

        section { class: "features",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "Our Core Services" }
                    p { class: "section-subtitle",
                        "Empowering individuals and organizations through transformative leadership, mentorship, and capacity building initiatives."
                    }
                }
                div { class: "features-grid",
                    for (index, feature) in FEATURES.into_iter().enumerate() {
                        Reveal { key: "{index}", delay_ms: index as u32 * 100,
                            FeatureCard { feature }
                        }
                    }
                }
            }
        }

        section { class: "stats",
            div { class: "container stats-grid",
                for stat in STATS {
                    StatCounter { key: "{stat.label}", stat }
                }
            }
        }

        Testimonials {}
    }
}

#[component]
fn HeroSlider() -> Element {
    let period = use_context::<SiteConfig>().timing.hero_slide_ms;
    let carousel = use_signal(|| Carousel::new(SLIDES.len()));
    use_autoplay(carousel, period);

    let state = carousel();
    let slide = SLIDES[state.index()];
    let enter = match state.direction() {
        Direction::Forward => "slide-enter-forward",
        Direction::Backward => "slide-enter-backward",
    };

    rsx! {
        section { class: "hero-slider",
            div {
                key: "{state.index()}",
                class: "hero-slide {enter}",
                style: "background-image: url('{slide.image}');",
                div { class: "hero-overlay" }
                div { class: "hero-content",
                    h1 { class: "hero-title",
                        "{slide.title} "
                        span { class: "hero-highlight", "{slide.highlight}" }
                    }
                    p { class: "hero-subtitle", "{slide.subtitle}" }
                    div { class: "hero-buttons",
                        Link { to: Route::Contact {}, class: "btn btn-primary", "{slide.primary_cta}" }
                        Link { to: Route::About {}, class: "btn btn-secondary", "{slide.secondary_cta}" }
                    }
                }
            }
            CarouselControls { carousel, class: "hero-controls" }
        }
    }
}

#[component]
fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        div { class: "feature-card",
            {
                match feature.art {
                    FeatureArt::Icon(icon) => rsx! {
                        div { class: "feature-icon", "{icon}" }
                    },
                    FeatureArt::Image(src) => rsx! {
                        div { class: "feature-image",
                            img { src, alt: feature.title, loading: "lazy" }
                        }
                    },
                }
            }
            h3 { "{feature.title}" }
            p { "{feature.description}" }
        }
    }
}

/// Counts from zero up to the stat's value once, after mount.
#[component]
fn StatCounter(stat: Stat) -> Element {
    let duration = use_context::<SiteConfig>().timing.counter_ms;
    let mut shown = use_signal(|| 0u32);

    use_future(move || async move {
        let mut elapsed = 0;
        while elapsed < duration {
            sleep(Duration::from_millis(u64::from(FRAME_MS))).await;
            elapsed = (elapsed + FRAME_MS).min(duration);
            shown.set(count_up(stat.value, elapsed, duration));
        }
        shown.set(stat.value);
    });

    rsx! {
        Reveal { motion: Motion::Zoom, class: "stat-card",
            div { class: "stat-value", "{shown}{stat.suffix}" }
            div { class: "stat-label", "{stat.label}" }
        }
    }
}

#[component]
fn Testimonials() -> Element {
    let period = use_context::<SiteConfig>().timing.testimonial_ms;
    let carousel = use_signal(|| Carousel::new(TESTIMONIALS.len()));
    use_autoplay(carousel, period);

    let current = TESTIMONIALS[carousel().index()];
    let initial = current.author.chars().next().unwrap_or('?');

    rsx! {
        section { class: "testimonials",
            div { class: "container",
                div { class: "section-header",
                    h2 { "What Our Clients Say" }
                    p {
                        "Don't just take our word for it. Here's what our clients have to say about working with us."
                    }
                }
                div { key: "{carousel().index()}", class: "testimonial-card",
                    div { class: "quote-mark", "“" }
                    blockquote {
                        p { class: "testimonial-quote", "\"{current.quote}\"" }
                        div { class: "testimonial-footer",
                            div { class: "author-avatar", "{initial}" }
                            div {
                                p { class: "testimonial-author", "{current.author}" }
                                p { class: "testimonial-role", "{current.role}" }
                            }
                        }
                    }
                }
                CarouselControls { carousel, pause_on_hover: true, class: "testimonial-controls" }
            }
        }
    }
}
