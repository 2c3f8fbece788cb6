mod footer;
mod scripts;

#[cfg(test)]
mod tests;

pub use footer::{has_footer_container, replace_footer};
pub use scripts::{has_footer_scripts, inject_scripts};

/// Identifier of the placeholder element that footer.js populates at page load
pub const FOOTER_CONTAINER_ID: &str = "footer-container";

/// Configuration script, loaded first
pub const CONFIG_SCRIPT: &str = "footer-config.js";

/// Generator script, loaded second
pub const GENERATOR_SCRIPT: &str = "footer.js";
