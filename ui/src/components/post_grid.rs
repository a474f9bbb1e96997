use dioxus::prelude::*;

use crate::content::BlogPost;

// Affiliate href carries the partner attribution tag; purely a static string.
const AMAZON_GADGETS_URL: &str =
    "https://www.amazon.com/s?k=restaurant+gadgets&tag=your-affiliate-id";

#[component]
pub fn PostGrid(posts: Vec<BlogPost>) -> Element {
    rsx! {
        section { class: "post-grid", aria_label: "Blog posts",
            for post in posts {
                article {
                    key: "{post.title}",
                    class: "post-card",
                    tabindex: 0,
                    aria_label: "Blog post: {post.title}",
                    img {
                        class: "post-card__image",
                        src: "{post.image}",
                        alt: "{post.title}",
                    }
                    div { class: "post-card__body",
                        h2 { class: "post-card__title", "{post.title}" }
                        p { class: "post-card__description", "{post.description}" }
                        div { class: "post-card__actions",
                            a {
                                class: "post-card__more",
                                href: "{post.link}",
                                aria_label: "Read more about {post.title}",
                                "Read More →"
                            }
                        }
                        div { class: "post-card__affiliate",
                            a {
                                class: "post-card__affiliate-link",
                                href: AMAZON_GADGETS_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "Check out restaurant gadgets on Amazon (affiliate link)",
                                "🍽️ Check out must-have restaurant gadgets on Amazon!"
                            }
                        }
                    }
                }
            }
        }
    }
}
