#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that the CSS selectors the shared components render against remain
  present in the unified theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) builds.

If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page-home__strip",
    ".page-home__layout",
    ".page-home__main",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--secondary",
    // Header / footer chrome
    ".site-header",
    ".site-header__brand",
    ".site-header__nav",
    ".site-footer",
    // Social + trending strip
    ".social-links",
    ".trending__tag",
    // Newsletter signup
    ".newsletter",
    ".newsletter__form",
    ".newsletter__feedback--error",
    ".newsletter__feedback--success",
    // Featured hero & search
    ".featured__overlay",
    ".search__input",
    // Ads & affiliates
    ".ad-slot__banner",
    ".affiliate--reservations",
    ".affiliate--delivery",
    // Post grid
    ".post-grid",
    ".post-card",
    ".post-card__affiliate-link",
    // Comments
    ".comments__item",
    ".comments__signin",
    // Sidebar
    ".sidebar__reviews",
    ".sidebar__feed",
];

#[test]
fn theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Missing selectors in shared theme: {missing:?}"
    );
}
