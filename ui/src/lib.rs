//! Shared UI crate for Best Bites. Cross-platform views, site content, and
//! the newsletter signup state live here.

pub mod content;
pub mod core;
pub mod newsletter;
pub mod views;

pub mod components {
    pub mod ad_slot;
    pub mod affiliate;
    pub mod comments;
    pub mod featured_review;
    pub mod newsletter_signup;
    pub mod post_grid;
    pub mod search_box;
    pub mod sidebar;
    pub mod site_footer;
    pub mod site_header;
    pub mod social_links;
    pub mod trending_tags;

    pub use ad_slot::AdSlot;
    pub use affiliate::AffiliateBanner;
    pub use comments::CommentsSection;
    pub use featured_review::FeaturedReview;
    pub use newsletter_signup::NewsletterSignup;
    pub use post_grid::PostGrid;
    pub use search_box::SearchBox;
    pub use sidebar::Sidebar;
    pub use site_footer::SiteFooter;
    pub use site_header::SiteHeader;
    pub use social_links::SocialLinks;
    pub use trending_tags::TrendingTags;
}
