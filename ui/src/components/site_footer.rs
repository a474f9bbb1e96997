use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__legal",
                "© 2025 Best Bites Blog. All rights reserved."
                span { class: "site-footer__sep", "|" }
                a { class: "site-footer__privacy", href: "#", "Privacy Policy" }
            }
            div { class: "site-footer__credit",
                "Made with "
                span { role: "img", aria_label: "love", "❤️" }
                " by the Best Bites team."
            }
        }
    }
}
