use super::FOOTER_CONTAINER_ID;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches an opening footer tag (with arbitrary attributes) through the
/// nearest closing tag, with `.` spanning line boundaries
static FOOTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<footer[^>]*>.*?</footer>").unwrap());

/// Placeholder block that stands in for the removed footer
const FOOTER_PLACEHOLDER: &str =
    "    <!-- Footer Container - Populated by footer.js -->\n    <div id=\"footer-container\"></div>";

/// Replace an existing footer block with the placeholder container.
///
/// Only the first matched span is substituted. Returns the (possibly
/// unchanged) text and whether a replacement occurred; a page without a
/// footer is a normal outcome, not an error.
pub fn replace_footer(content: &str) -> (String, bool) {
    match FOOTER_RE.replace(content, FOOTER_PLACEHOLDER) {
        Cow::Owned(updated) => (updated, true),
        Cow::Borrowed(_) => (content.to_string(), false),
    }
}

/// Whether the page already carries the footer container element
pub fn has_footer_container(content: &str) -> bool {
    content.contains(&format!("id=\"{FOOTER_CONTAINER_ID}\""))
}
