use dioxus::prelude::*;

#[component]
pub fn FeaturedReview() -> Element {
    rsx! {
        section { class: "featured", aria_label: "Featured restaurant",
            img {
                class: "featured__image",
                src: "/featured.jpg",
                alt: "Featured Restaurant",
            }
            div { class: "featured__overlay",
                h2 { class: "featured__title", "Featured: Mama Mia's Italian Kitchen" }
                p { class: "featured__blurb",
                    "The best homemade pasta in the city and a cozy ambiance. Read our full review!"
                }
                button {
                    r#type: "button",
                    class: "button button--secondary featured__cta",
                    aria_label: "Discover featured review",
                    "Discover →"
                }
            }
        }
    }
}
