//! Integration checks on the editorial reference data as consumed through
//! the `ContentSource` capability, the way the launcher crates wire it.

use ui::content::{trending_display, ContentSource, SharedContent, StaticContent};

#[test]
fn shared_handle_exposes_reference_content() {
    let content = SharedContent::new(StaticContent::best_bites());

    assert_eq!(content.posts().len(), 3);
    assert_eq!(content.posts()[0].title, "Best Pizza in Town");
    assert_eq!(content.posts()[1].title, "Top 5 Sushi Places");
    assert_eq!(content.posts()[2].title, "Affordable Fine Dining");

    assert_eq!(content.recent_reviews().len(), 3);
    assert_eq!(content.comments().len(), 2);
    assert!(content.viewer().is_anonymous());
}

#[test]
fn every_post_card_has_image_and_description() {
    let content = StaticContent::best_bites();
    for post in content.posts() {
        assert!(post.image.starts_with('/'), "image path: {}", post.image);
        assert!(!post.description.is_empty());
        assert!(!post.link.is_empty());
    }
}

#[test]
fn trending_strip_shows_five_of_eight_tags() {
    let content = StaticContent::best_bites();
    assert_eq!(content.trending_tags().len(), 8);
    assert_eq!(trending_display(content.trending_tags()).len(), 5);
}

#[test]
fn content_serializes_like_a_cms_payload() {
    // The static set stands in for an API response; keep it round-trippable.
    let content = StaticContent::best_bites();
    let json = serde_json::to_string(&content).expect("serialize");
    let back: StaticContent = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, content);
}
