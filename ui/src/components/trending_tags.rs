use dioxus::prelude::*;

use crate::content::{trending_display, Tag};

#[component]
pub fn TrendingTags(tags: Vec<Tag>) -> Element {
    let shown = trending_display(&tags).to_vec();

    rsx! {
        div { class: "trending",
            span { class: "trending__label", "Trending:" }
            for tag in shown {
                span { key: "{tag.text}", class: "trending__tag", "#{tag.text}" }
            }
        }
    }
}
