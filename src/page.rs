//! Small page behaviors: in-page anchor scrolling and the glitch heading

/// Selector of links that scroll within the page
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
/// Selector of the heading that glitches on hover
pub const GLITCH_SELECTOR: &str = ".glitch";

/// CSS selector to scroll to for an in-page link, if `href` is one.
///
/// A bare `#` has no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty()).map(|_| href)
}

/// `animation` value for the glitch heading
pub fn glitch_animation(hovered: bool, animation: &str) -> &str {
    if hovered { animation } else { "none" }
}
