use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::{Motion, Reveal};
use crate::content::blog::{post_by_id, BlogPost, BLOG_CATEGORIES, BLOG_POSTS};
use crate::state::contact::looks_like_email;
use crate::state::filter::{filter_records, CategoryFilter, FilterOutcome};
use crate::views::NotFoundContent;
use crate::Route;

#[component]
pub fn Blog() -> Element {
    let mut filter = use_signal(CategoryFilter::default);
    let mut query = use_signal(String::new);

    let current = filter.read().clone();
    let outcome = filter_records(&BLOG_POSTS, &current, &query.read());

    rsx! {
        section { class: "page-hero blog-hero",
            Reveal { class: "container",
                h1 { class: "page-hero-title", "Insights & Articles" }
                p { class: "page-hero-subtitle",
                    "Ideas, lessons and stories on leadership, transformation and the future of work."
                }
                div { class: "search-box",
                    input {
                        r#type: "search",
                        placeholder: "Search articles...",
                        aria_label: "Search articles",
                        value: "{query}",
                        oninput: move |event| query.set(event.value()),
                    }
                }
            }
        }

        div { class: "container",
            div { class: "filter-chips",
                for label in BLOG_CATEGORIES {
                    button {
                        key: "{label}",
                        class: if current.label() == label { "chip active" } else { "chip" },
                        onclick: move |_| filter.set(CategoryFilter::from_label(label)),
                        "{label}"
                    }
                }
            }

            {
                match outcome {
                    FilterOutcome::Matches(posts) => rsx! {
                        FeaturedPost { post: posts[0] }
                        section { class: "posts",
                            h2 { class: "section-title", "Latest Articles" }
                            div { class: "posts-grid",
                                for (index, post) in posts.into_iter().skip(1).enumerate() {
                                    Reveal { key: "{post.id}", delay_ms: (index % 3) as u32 * 100,
                                        PostCard { post }
                                    }
                                }
                            }
                        }
                    },
                    FilterOutcome::NoResults => rsx! {
                        section { class: "posts",
                            h2 { class: "section-title", "Latest Articles" }
                            div { class: "no-results",
                                h3 { "No articles found" }
                                p { "Try adjusting your search or filter to find what you're looking for." }
                            }
                        }
                    },
                }
            }

            Newsletter {}
        }
    }
}

#[component]
fn FeaturedPost(post: &'static BlogPost) -> Element {
    rsx! {
        section { class: "featured",
            h2 { class: "section-title", "Featured Article" }
            Reveal { class: "featured-card",
                img { class: "featured-image", src: post.image, alt: post.title }
                div { class: "featured-content",
                    span { class: "category-badge", "{post.category}" }
                    h3 { "{post.title}" }
                    p { "{post.excerpt}" }
                    Byline { post, read_time: true }
                    Link { to: Route::BlogArticle { id: post.id }, class: "read-more",
                        "Read full article →"
                    }
                }
            }
        }
    }
}

#[component]
fn PostCard(post: &'static BlogPost) -> Element {
    rsx! {
        article { class: "post-card",
            img { class: "post-image", src: post.image, alt: post.title, loading: "lazy" }
            div { class: "post-content",
                span { class: "post-category", "{post.category}" }
                h3 {
                    Link { to: Route::BlogArticle { id: post.id }, "{post.title}" }
                }
                p { "{post.excerpt}" }
                div { class: "tags",
                    for tag in post.tags {
                        span { key: "{tag}", class: "tag", "#{tag}" }
                    }
                }
                Byline { post, read_time: false }
            }
        }
    }
}

#[component]
fn Byline(post: &'static BlogPost, read_time: bool) -> Element {
    rsx! {
        div { class: "byline",
            div { class: "author-avatar", "{post.author_initials()}" }
            div {
                p { class: "author-name", "{post.author}" }
                div { class: "meta",
                    span { "{post.date}" }
                    if read_time {
                        span { "{post.read_time}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Newsletter() -> Element {
    let mut email = use_signal(String::new);
    let mut subscribed = use_signal(|| false);

    rsx! {
        section { class: "newsletter",
            div { class: "newsletter-card",
                h2 { "Stay Updated" }
                p { "Subscribe to our newsletter for the latest insights and articles delivered to your inbox." }
                if subscribed() {
                    p { class: "newsletter-thanks", "Thanks for subscribing!" }
                } else {
                    form {
                        class: "newsletter-form",
                        onsubmit: move |event: FormEvent| {
                            event.prevent_default();
                            if looks_like_email(&email.read()) {
                                info!("newsletter signup");
                                subscribed.set(true);
                            }
                        },
                        input {
                            r#type: "email",
                            placeholder: "Enter your email",
                            required: true,
                            value: "{email}",
                            oninput: move |event| email.set(event.value()),
                        }
                        button { r#type: "submit", class: "btn btn-primary", "Subscribe" }
                    }
                }
                p { class: "newsletter-note", "We respect your privacy. Unsubscribe at any time." }
            }
        }
    }
}

/// Full text of one post, or the not-found page for an unknown id.
#[component]
pub fn BlogArticle(id: u32) -> Element {
    let Some(post) = post_by_id(id) else {
        return rsx! { NotFoundContent {} };
    };

    rsx! {
        article { class: "article",
            header { class: "article-header",
                div { class: "container narrow",
                    Link { to: Route::Blog {}, class: "back-link", "← Back to articles" }
                    span { class: "category-badge", "{post.category}" }
                    h1 { "{post.title}" }
                    Byline { post, read_time: true }
                }
            }
            img { class: "article-image", src: post.image, alt: post.title }
            div { class: "container narrow article-body",
                for (index, paragraph) in post.body.iter().enumerate() {
                    Reveal { key: "{index}", motion: Motion::Fade,
                        p { "{paragraph}" }
                    }
                }
                div { class: "tags",
                    for tag in post.tags {
                        span { key: "{tag}", class: "tag", "#{tag}" }
                    }
                }
            }
        }
    }
}
