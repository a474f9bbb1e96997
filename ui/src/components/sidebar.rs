use dioxus::prelude::*;

use crate::components::affiliate::{AffiliateBanner, DOORDASH_URL};
use crate::content::ReviewLink;

const FEED_THUMBNAILS: [&str; 3] = ["/ig1.jpg", "/ig2.jpg", "/ig3.jpg"];

#[component]
pub fn Sidebar(reviews: Vec<ReviewLink>) -> Element {
    rsx! {
        aside { class: "sidebar", aria_label: "Sidebar",
            section { class: "sidebar__section", aria_label: "Recent reviews",
                h3 { class: "sidebar__heading", "Recent Reviews" }
                ul { class: "sidebar__reviews",
                    for review in reviews {
                        li { key: "{review.title}",
                            a {
                                class: "sidebar__review-link",
                                href: "{review.link}",
                                aria_label: "Read review: {review.title}",
                                "{review.title}"
                            }
                        }
                    }
                }
            }
            section { class: "sidebar__section", aria_label: "Instagram feed",
                h3 { class: "sidebar__heading sidebar__heading--feed", "Instagram Feed" }
                div { class: "sidebar__feed",
                    for src in FEED_THUMBNAILS {
                        img { key: "{src}", class: "sidebar__feed-thumb", src: "{src}", alt: "" }
                    }
                }
                a {
                    class: "sidebar__follow",
                    href: "https://instagram.com/",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    aria_label: "Visit our Instagram",
                    "Follow us @bestbitesblog"
                }
            }
            section { class: "sidebar__section", aria_label: "Partner spot",
                AffiliateBanner {
                    class: "affiliate--delivery",
                    href: "{DOORDASH_URL}",
                    aria_label: "Order food delivery with DoorDash (affiliate link)",
                    blurb: "🚗 Hungry? Order delivery with DoorDash!",
                }
            }
        }
    }
}
