use dioxus::prelude::*;

use crate::components::affiliate::OPENTABLE_URL;
use crate::components::{
    AdSlot, AffiliateBanner, CommentsSection, FeaturedReview, NewsletterSignup, PostGrid,
    SearchBox, Sidebar, SiteFooter, SiteHeader, SocialLinks, TrendingTags,
};
use crate::content::SharedContent;
use crate::core::meta::{SiteMeta, SiteMetaTags};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(debug_assertions)]
fn log_home_render(posts: usize, comments: usize) {
    // Lightweight render trace for diagnosing content wiring.
    println!("[home] render (posts={posts} comments={comments})");
}

#[component]
pub fn Home() -> Element {
    let content = use_context::<SharedContent>();

    let posts = content.posts().to_vec();
    let tags = content.trending_tags().to_vec();
    let reviews = content.recent_reviews().to_vec();
    let comments = content.comments().to_vec();
    let viewer = content.viewer().clone();

    #[cfg(debug_assertions)]
    {
        log_home_render(posts.len(), comments.len());
    }

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        SiteMetaTags { meta: SiteMeta::best_bites() }

        div { class: "page page-home",
            SiteHeader {}

            div { class: "page-home__strip",
                SocialLinks {}
                TrendingTags { tags }
            }

            div { class: "page-home__layout",
                main { class: "page-home__main",
                    NewsletterSignup {}
                    FeaturedReview {}
                    SearchBox {}
                    AdSlot {}
                    PostGrid { posts }
                    AffiliateBanner {
                        class: "affiliate--reservations",
                        href: "{OPENTABLE_URL}",
                        aria_label: "Book your meal with OpenTable (affiliate link)",
                        blurb: "🍷 Book your next meal with OpenTable and support us!",
                    }
                    CommentsSection { comments, viewer }
                }
                Sidebar { reviews }
            }

            SiteFooter {}
        }
    }
}
