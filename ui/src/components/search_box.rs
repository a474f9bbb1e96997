use dioxus::prelude::*;

const SEARCH_ICON: Asset = asset!("/assets/icons/search.svg");

/// Decorative search field. Query execution waits on a search backend.
#[component]
pub fn SearchBox() -> Element {
    rsx! {
        section { class: "search", aria_label: "Search restaurants or cuisine",
            div { class: "search__box",
                input {
                    class: "search__input",
                    placeholder: "Search restaurants or cuisine...",
                    aria_label: "Search",
                }
                img {
                    class: "search__icon",
                    src: SEARCH_ICON,
                    alt: "",
                    aria_hidden: "true",
                }
            }
        }
    }
}
