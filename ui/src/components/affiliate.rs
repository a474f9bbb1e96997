use dioxus::prelude::*;

pub const OPENTABLE_URL: &str = "https://www.opentable.com/?affiliate-id=your-affiliate-id";
pub const DOORDASH_URL: &str = "https://www.doordash.com/?affiliate-id=your-affiliate-id";

/// Static partner banner. The href is a literal affiliate URL; nothing is
/// templated or signed.
#[component]
pub fn AffiliateBanner(class: String, href: String, aria_label: String, blurb: String) -> Element {
    rsx! {
        div { class: "affiliate {class}",
            a {
                class: "affiliate__link",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: "{aria_label}",
                "{blurb}"
            }
        }
    }
}
