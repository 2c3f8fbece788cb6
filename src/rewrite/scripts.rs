use super::{CONFIG_SCRIPT, GENERATOR_SCRIPT};

/// Closing tag the script block is anchored to
const BODY_CLOSE: &str = "</body>";

/// Insert the two footer script tags immediately before the closing body tag.
///
/// `prefix` is the relative path from the page up to the root-level scripts.
/// When no closing body tag exists the text is returned unchanged with a
/// `false` flag; the caller decides whether that matters.
pub fn inject_scripts(content: &str, prefix: &str) -> (String, bool) {
    if !content.contains(BODY_CLOSE) {
        return (content.to_string(), false);
    }

    let block = format!(
        "    \n    <!-- Footer System - Load config first, then generator -->\n    \
         <script src=\"{prefix}{CONFIG_SCRIPT}\"></script>\n    \
         <script src=\"{prefix}{GENERATOR_SCRIPT}\"></script>\n  {BODY_CLOSE}"
    );

    (content.replacen(BODY_CLOSE, &block, 1), true)
}

/// Whether the page already references both footer scripts
pub fn has_footer_scripts(content: &str) -> bool {
    content.contains(CONFIG_SCRIPT) && content.contains(GENERATOR_SCRIPT)
}
