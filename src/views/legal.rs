use dioxus::prelude::*;

use crate::content::legal::LegalDoc;

#[component]
pub fn Privacy() -> Element {
    rsx! { LegalPage { doc: LegalDoc::Privacy } }
}

#[component]
pub fn Terms() -> Element {
    rsx! { LegalPage { doc: LegalDoc::Terms } }
}

#[component]
pub fn Cookies() -> Element {
    rsx! { LegalPage { doc: LegalDoc::Cookies } }
}

#[component]
fn LegalPage(doc: LegalDoc) -> Element {
    rsx! {
        document::Title { "{doc.title()}" }
        article { class: "container narrow legal",
            h1 { "{doc.title()}" }
            for part in doc.sections() {
                section { key: "{part.heading}",
                    h2 { "{part.heading}" }
                    p { "{part.body}" }
                }
            }
        }
    }
}
