use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    debug!(path = %segments.join("/"), "no route matched");
    rsx! { NotFoundContent {} }
}

/// Body of the 404 page, shared with lookups that miss inside a route.
#[component]
pub fn NotFoundContent() -> Element {
    rsx! {
        div { class: "not-found",
            h1 { "404" }
            h2 { "Page Not Found" }
            p { "Oops! The page you're looking for doesn't exist or has been moved." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Go back home" }
        }
    }
}
