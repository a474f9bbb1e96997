use dioxus::prelude::*;

// Section anchors only; the landing page has no routed sub-pages yet.
const NAV_LABELS: [&str; 4] = ["Home", "Blog", "About", "Contact"];

#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header { class: "site-header",
            h1 { class: "site-header__brand", "Best Bites Blog" }
            nav { class: "site-header__nav",
                for label in NAV_LABELS {
                    a { key: "{label}", class: "site-header__link", href: "#", "{label}" }
                }
            }
        }
    }
}
