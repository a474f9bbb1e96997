use dioxus::prelude::*;

use crate::content::{Comment, Viewer};
use crate::core::format;

#[component]
pub fn CommentsSection(comments: Vec<Comment>, viewer: Viewer) -> Element {
    rsx! {
        section { class: "comments", aria_label: "Comments",
            h3 { class: "comments__heading", "Comments" }
            ul { class: "comments__list",
                for (idx, comment) in comments.into_iter().enumerate() {
                    li { key: "{idx}", class: "comments__item",
                        span { class: "comments__user", "{comment.user}" }
                        " "
                        span { class: "comments__date",
                            {format::format_comment_date(&comment.date)}
                        }
                        div { class: "comments__text", "{comment.text}" }
                    }
                }
            }
            if viewer.is_anonymous() {
                div { class: "comments__signin",
                    a { class: "comments__signin-link", href: "/login", "Sign in" }
                    " to join the conversation!"
                }
            }
            // Comment form for authenticated viewers arrives with the auth provider.
        }
    }
}
