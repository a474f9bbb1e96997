//! Editorial content for the site.
//!
//! The arrays behind [`StaticContent::best_bites`] stand in for a CMS/API
//! payload until that integration lands. Views consume the [`ContentSource`]
//! capability instead of literals so the render logic stays testable
//! independently of the copy.

use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// How many trending tags the top strip shows, regardless of how many the
/// content carries.
pub const TRENDING_DISPLAY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub image: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub text: String,
}

impl Tag {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewLink {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub user: String,
    pub text: String,
    /// ISO `yyyy-mm-dd`; formatted for display by `core::format`.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
}

/// Who is looking at the page. Authentication is a placeholder: the shipped
/// content always carries `Anonymous`, and authenticated behavior is
/// intentionally left undefined until a real provider is connected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Viewer {
    Anonymous,
    Authenticated(Profile),
}

impl Viewer {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Viewer::Anonymous)
    }
}

/// Read-only data provider for everything the page renders.
pub trait ContentSource {
    fn posts(&self) -> &[BlogPost];
    fn trending_tags(&self) -> &[Tag];
    fn recent_reviews(&self) -> &[ReviewLink];
    fn comments(&self) -> &[Comment];
    fn viewer(&self) -> &Viewer;
}

/// Cloneable handle for providing a [`ContentSource`] through Dioxus context.
#[derive(Clone)]
pub struct SharedContent(Arc<dyn ContentSource + Send + Sync>);

impl SharedContent {
    pub fn new<S: ContentSource + Send + Sync + 'static>(source: S) -> Self {
        Self(Arc::new(source))
    }
}

impl Deref for SharedContent {
    type Target = dyn ContentSource + Send + Sync;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The slice of tags the top strip actually displays.
pub fn trending_display(tags: &[Tag]) -> &[Tag] {
    &tags[..tags.len().min(TRENDING_DISPLAY_LIMIT)]
}

/// In-memory content source holding the editorial mock data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticContent {
    pub posts: Vec<BlogPost>,
    pub trending_tags: Vec<Tag>,
    pub recent_reviews: Vec<ReviewLink>,
    pub comments: Vec<Comment>,
    pub viewer: Viewer,
}

impl StaticContent {
    /// The reference Best Bites content set.
    pub fn best_bites() -> Self {
        Self {
            posts: vec![
                BlogPost {
                    title: "Best Pizza in Town".into(),
                    image: "/pizza.jpg".into(),
                    description: "We visited 5 top-rated pizza spots and ranked them.".into(),
                    link: "#".into(),
                },
                BlogPost {
                    title: "Top 5 Sushi Places".into(),
                    image: "/sushi.jpg".into(),
                    description: "Sushi lovers rejoice: here are our favorites!".into(),
                    link: "#".into(),
                },
                BlogPost {
                    title: "Affordable Fine Dining".into(),
                    image: "/fine-dining.jpg".into(),
                    description: "Luxury on a budget – these places deliver.".into(),
                    link: "#".into(),
                },
            ],
            trending_tags: [
                "Pizza",
                "Sushi",
                "Fine Dining",
                "Vegan",
                "Brunch",
                "Desserts",
                "Family Friendly",
                "Takeout",
            ]
            .into_iter()
            .map(Tag::new)
            .collect(),
            recent_reviews: vec![
                ReviewLink {
                    title: "Noodle House Review".into(),
                    link: "#".into(),
                },
                ReviewLink {
                    title: "Hidden Gem: Tacos Locos".into(),
                    link: "#".into(),
                },
                ReviewLink {
                    title: "Vegan Eats Downtown".into(),
                    link: "#".into(),
                },
            ],
            comments: vec![
                Comment {
                    user: "Alice".into(),
                    text: "Great post!".into(),
                    date: "2025-05-24".into(),
                },
                Comment {
                    user: "Bob".into(),
                    text: "Love your reviews!".into(),
                    date: "2025-05-23".into(),
                },
            ],
            viewer: Viewer::Anonymous,
        }
    }
}

impl ContentSource for StaticContent {
    fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    fn trending_tags(&self) -> &[Tag] {
        &self.trending_tags
    }

    fn recent_reviews(&self) -> &[ReviewLink] {
        &self.recent_reviews
    }

    fn comments(&self) -> &[Comment] {
        &self.comments
    }

    fn viewer(&self) -> &Viewer {
        &self.viewer
    }
}
