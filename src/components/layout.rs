use dioxus::prelude::*;

use crate::components::{ChatWidget, Footer, Navbar};
use crate::Route;

/// Chrome shared by every page. The routed page renders in the `Outlet`.
#[component]
pub fn Layout() -> Element {
    rsx! {
        Navbar {}
        main { class: "page",
            Outlet::<Route> {}
        }
        Footer {}
        ChatWidget {}
    }
}
