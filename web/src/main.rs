use dioxus::prelude::*;

use ui::content::{SharedContent, StaticContent};
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Content is injected here so the shared views never inline editorial
    // literals; swap in an API-backed source when the CMS lands.
    use_context_provider(|| SharedContent::new(StaticContent::best_bites()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
