use dioxus::prelude::*;

const INSTAGRAM_ICON: Asset = asset!("/assets/icons/instagram.svg");
const FACEBOOK_ICON: Asset = asset!("/assets/icons/facebook.svg");
const TWITTER_ICON: Asset = asset!("/assets/icons/twitter.svg");

#[component]
pub fn SocialLinks() -> Element {
    let links: [(&str, &str, Asset); 3] = [
        ("Instagram", "https://instagram.com/", INSTAGRAM_ICON),
        ("Facebook", "https://facebook.com/", FACEBOOK_ICON),
        ("Twitter", "https://twitter.com/", TWITTER_ICON),
    ];

    rsx! {
        div { class: "social-links",
            for (name, href, icon) in links {
                a {
                    key: "{name}",
                    href: "{href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    aria_label: "{name}",
                    img { class: "social-links__icon", src: icon, alt: "{name}" }
                }
            }
        }
    }
}
