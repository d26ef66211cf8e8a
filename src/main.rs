use dioxus::logger::tracing::{warn, Level};
use dioxus::prelude::*;

use components::Layout;
use config::SiteConfig;
use hooks::use_overlay_root;
use views::{
    About, Blog, BlogArticle, Contact, Cookies, Home, NotFound, Privacy, Projects, Services, Terms,
};

/// Shared chrome and small presentational pieces used across pages.
mod components;
/// Site settings embedded from `assets/site.json`.
mod config;
/// Static copy and records shown on the pages.
mod content;
mod hooks;
mod platform;
/// Interaction state, kept free of any DOM access.
mod state;
/// The UI for every route.
mod views;

/// Every page of the site. All of them render inside [`Layout`], which
/// supplies the navbar, footer and chat widget around the routed page.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/services")]
        Services {},
        #[route("/projects")]
        Projects {},
        #[route("/blog")]
        Blog {},
        // Unknown ids fall through to the not-found content inside the view.
        #[route("/blog/:id")]
        BlogArticle { id: u32 },
        #[route("/contact")]
        Contact {},
        #[route("/privacy")]
        Privacy {},
        #[route("/terms")]
        Terms {},
        #[route("/cookies")]
        Cookies {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        SiteConfig::load().unwrap_or_else(|err| {
            warn!(%err, "falling back to default site settings");
            SiteConfig::default()
        })
    });
    use_overlay_root();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
