use dioxus::prelude::*;

/// Placeholder banner for the AdSense slot.
#[component]
pub fn AdSlot() -> Element {
    rsx! {
        div { class: "ad-slot",
            div { class: "ad-slot__banner", role: "banner", aria_label: "Ad banner",
                p { class: "ad-slot__copy", "[Google AdSense Banner Placeholder]" }
            }
        }
    }
}
