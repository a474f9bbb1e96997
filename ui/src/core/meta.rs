//! Document metadata for search and social previews.

use dioxus::prelude::*;

/// Static head metadata: title, description, Open Graph, Twitter card.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
    pub twitter_site: String,
}

impl SiteMeta {
    pub fn best_bites() -> Self {
        Self {
            title: "Best Bites Blog | Real Restaurant Reviews & Foodie Finds".into(),
            description:
                "Honest restaurant reviews, trending food spots, and must-try eats in your city. \
                 Monetized with ads & affiliate links."
                    .into(),
            og_title: "Best Bites Blog".into(),
            og_description:
                "Find your next meal with our top restaurant reviews, tips, and guides.".into(),
            og_image: "/featured.jpg".into(),
            twitter_card: "summary_large_image".into(),
            twitter_site: "@bestbites".into(),
        }
    }
}

#[component]
pub fn SiteMetaTags(meta: SiteMeta) -> Element {
    rsx! {
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: "{meta.description}" }
        document::Meta { property: "og:title", content: "{meta.og_title}" }
        document::Meta { property: "og:description", content: "{meta.og_description}" }
        document::Meta { property: "og:image", content: "{meta.og_image}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "twitter:card", content: "{meta.twitter_card}" }
        document::Meta { name: "twitter:site", content: "{meta.twitter_site}" }
        // Analytics script slot stays empty until a provider is chosen.
    }
}
