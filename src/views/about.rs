use dioxus::prelude::*;

use crate::components::{CarouselControls, Modal, Motion, Reveal};
use crate::config::SiteConfig;
use crate::content::about::{
    member_facts, TeamMember, CORE_VALUES, FEATURED_TEAM, MILESTONES, MISSION, TEAM, VISION,
};
use crate::hooks::{use_autoplay, use_overlay, OverlayHandle};
use crate::platform;
use crate::state::carousel::{nearest_slide, slide_offset, Carousel, DragTrack};
use crate::Route;

const TEAM_SECTION_ID: &str = "team-section";
const VALUES_TRACK_ID: &str = "values-track";
/// Room left above the team heading for the fixed header.
const TEAM_SCROLL_MARGIN: f64 = 100.0;

#[component]
pub fn About() -> Element {
    let member = use_overlay::<&'static TeamMember>();

    rsx! {
        section { class: "page-hero about-hero",
            Reveal { class: "container",
                span { class: "hero-badge", "Our Story" }
                h1 { class: "page-hero-title",
                    "A Decade of "
                    span { class: "accent", "Transforming" }
                    " Organizations"
                }
                p { class: "page-hero-subtitle",
                    "Empowering individuals leaders and organizations to unlock their potential through motivation leadership development, coaching and strategic engagement."
                }
            }
        }

        section { class: "story",
            div { class: "container story-grid",
                div { class: "story-content",
                    span { class: "section-badge", "Our Journey" }
                    Reveal { motion: Motion::FromLeft, class: "story-block",
                        h3 { "Mission" }
                        p { "{MISSION}" }
                    }
                    Reveal { motion: Motion::FromLeft, delay_ms: 100, class: "story-block",
                        h3 { "Vision" }
                        p { "{VISION}" }
                    }
                }
                Milestones {}
            }
        }

        TeamSection { member }

        CoreValues {}

        section { class: "cta-band",
            div { class: "container",
                h2 { "Ready to Transform Your Organization?" }
                p { "Let's discuss how we can help you achieve your leadership and growth goals." }
                Link { to: Route::Contact {}, class: "btn btn-primary", "Get in Touch" }
            }
        }

        if let Some(selected) = member.selected() {
            MemberModal { member: selected, on_close: move |_| member.close() }
        }
    }
}

#[component]
fn Milestones() -> Element {
    let mut active = use_signal(|| 0usize);

    rsx! {
        div { class: "milestones",
            h3 { "Our Milestones" }
            div { class: "timeline",
                for (index, milestone) in MILESTONES.into_iter().enumerate() {
                    div {
                        key: "{milestone.year}",
                        class: if active() == index { "milestone active" } else { "milestone" },
                        onmouseenter: move |_| active.set(index),
                        div { class: "milestone-year", "{milestone.year}" }
                        div { class: "milestone-body",
                            h4 { "{milestone.title}" }
                            p { "{milestone.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamSection(member: OverlayHandle<&'static TeamMember>) -> Element {
    let mut show_team = use_signal(|| false);
    let (featured, rest) = TEAM.split_at(FEATURED_TEAM);

    rsx! {
        section { class: "team",
            div { class: "container",
                div { id: TEAM_SECTION_ID, class: "section-header",
                    span { class: "section-badge", "Our Team" }
                    h2 {
                        "Meet Our "
                        span { class: "gradient-text", "Leadership" }
                    }
                    p { "A team of passionate professionals dedicated to driving your success" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let showing = !show_team();
                            show_team.set(showing);
                            if showing {
                                platform::scroll_window_to(TEAM_SECTION_ID, TEAM_SCROLL_MARGIN);
                            }
                        },
                        if show_team() { "Hide Team" } else { "Meet Our Team →" }
                    }
                }

                if show_team() {
                    div { class: "team-grid featured",
                        for person in featured {
                            Reveal { key: "{person.id}",
                                div {
                                    class: "team-card",
                                    onclick: move |_| member.open(person),
                                    div { class: "team-avatar", "{person.initial()}" }
                                    h3 { "{person.name}" }
                                    span { class: "team-role", "{person.role}" }
                                    p { class: "team-bio", "{person.bio}" }
                                    SocialLinks { member: person }
                                }
                            }
                        }
                    }
                    div { class: "team-grid",
                        for person in rest {
                            Reveal { key: "{person.id}",
                                div {
                                    class: "team-card compact",
                                    onclick: move |_| member.open(person),
                                    div { class: "team-avatar", "{person.initial()}" }
                                    h3 { "{person.name}" }
                                    span { class: "team-role", "{person.role}" }
                                    p { class: "team-bio clamp", "{person.bio}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SocialLinks(member: &'static TeamMember) -> Element {
    let links = [
        ("LinkedIn", member.linkedin),
        ("Twitter", member.twitter),
        ("GitHub", member.github),
    ];

    rsx! {
        div { class: "team-social",
            for (network, href) in links {
                if let Some(href) = href {
                    a {
                        href,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "{member.name} on {network}",
                        onclick: move |event: MouseEvent| event.stop_propagation(),
                        "{network}"
                    }
                }
            }
        }
    }
}

#[component]
fn MemberModal(member: &'static TeamMember, on_close: EventHandler<()>) -> Element {
    rsx! {
        Modal { on_close,
            div { class: "member-modal",
                div { class: "member-modal-header",
                    h3 { "{member.name}" }
                    p { class: "team-role", "{member.role}" }
                }
                div { class: "member-modal-body",
                    div { class: "member-modal-side",
                        div { class: "team-avatar large", "{member.initial()}" }
                        SocialLinks { member }
                    }
                    div { class: "member-modal-main",
                        h4 { "About" }
                        p { "{member.bio}" }
                        dl { class: "member-facts",
                            for (label, value) in member_facts(member) {
                                div { key: "{label}",
                                    dt { "{label}" }
                                    dd { "{value}" }
                                }
                            }
                        }
                        h4 { "Contact" }
                        p {
                            a { href: "mailto:{member.email}", "{member.email}" }
                        }
                        p {
                            a { href: "tel:{member.phone}", "{member.phone}" }
                        }
                    }
                }
            }
        }
    }
}

/// Draggable, auto-advancing strip of value cards.
///
/// The track scrolls natively; the carousel index follows the scroll offset,
/// and index changes from the timer or the dots glide the track into place.
#[component]
fn CoreValues() -> Element {
    let period = use_context::<SiteConfig>().timing.values_ms;
    let mut carousel = use_signal(|| Carousel::new(CORE_VALUES.len()));
    let mut drag = use_signal(DragTrack::default);
    // Slide the track is gliding towards; scroll events on the way are ignored.
    let mut gliding = use_signal(|| None::<usize>);
    use_autoplay(carousel, period);

    use_effect(move || {
        let index = carousel.read().index();
        if drag.peek().is_dragging() {
            return;
        }
        let Some(track) = platform::element(VALUES_TRACK_ID) else {
            return;
        };
        let width = f64::from(track.scroll_width());
        let count = CORE_VALUES.len();
        if nearest_slide(f64::from(track.scroll_left()), width, count) != index {
            gliding.set(Some(index));
            platform::smooth_scroll_left(&track, slide_offset(index, width, count));
        }
    });

    let on_scroll = move |_| {
        let Some(track) = platform::element(VALUES_TRACK_ID) else {
            return;
        };
        let nearest = nearest_slide(
            f64::from(track.scroll_left()),
            f64::from(track.scroll_width()),
            CORE_VALUES.len(),
        );
        let target = *gliding.peek();
        match target {
            Some(target) if target == nearest => gliding.set(None),
            Some(_) => {}
            None => {
                if carousel.peek().index() != nearest {
                    carousel.write().sync_to(nearest);
                }
            }
        }
    };

    let mut press = move |pointer_x: f64| {
        let Some(track) = platform::element(VALUES_TRACK_ID) else {
            return;
        };
        gliding.set(None);
        drag.write().press(pointer_x, f64::from(track.scroll_left()));
        carousel.write().pause();
    };

    let drag_to = move |pointer_x: f64| {
        let offset = drag.peek().drag_to(pointer_x);
        if let (Some(offset), Some(track)) = (offset, platform::element(VALUES_TRACK_ID)) {
            track.set_scroll_left(offset.round() as i32);
        }
    };

    let mut release = move || {
        if drag.peek().is_dragging() {
            drag.write().release();
            carousel.write().resume();
        }
    };

    let track_class = if drag.read().is_dragging() {
        "values-track dragging"
    } else {
        "values-track"
    };

    rsx! {
        section { class: "values",
            div { class: "container",
                div { class: "section-header",
                    span { class: "section-badge", "What Drives Us" }
                    h2 { "Our Core Values" }
                    p { "The principles that guide everything we do." }
                }
                div {
                    id: VALUES_TRACK_ID,
                    class: track_class,
                    onscroll: on_scroll,
                    onmousedown: move |event: MouseEvent| press(event.page_coordinates().x),
                    onmousemove: move |event: MouseEvent| {
                        if drag.peek().is_dragging() {
                            event.prevent_default();
                            drag_to(event.page_coordinates().x);
                        }
                    },
                    onmouseup: move |_| release(),
                    onmouseleave: move |_| release(),
                    ontouchstart: move |event: TouchEvent| {
                        if let Some(touch) = event.touches().first() {
                            press(touch.page_coordinates().x);
                        }
                    },
                    ontouchmove: move |event: TouchEvent| {
                        if let Some(touch) = event.touches().first() {
                            drag_to(touch.page_coordinates().x);
                        }
                    },
                    ontouchend: move |_| release(),
                    for (index, value) in CORE_VALUES.into_iter().enumerate() {
                        div {
                            key: "{value.name}",
                            class: "value-card accent-{value.accent}",
                            class: if carousel.read().index() == index { "current" },
                            div { class: "value-icon", "{value.icon}" }
                            h3 { "{value.name}" }
                            p { "{value.description}" }
                        }
                    }
                }
                CarouselControls { carousel, arrows: false, class: "values-dots" }
            }
        }
    }
}
