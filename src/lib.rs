// Public API exports
pub mod batch;
pub mod manifest;
pub mod paths;
pub mod rewrite;

// Re-export main types for convenience
pub use batch::{process_file, run_batch, BatchSummary, FileOutcome, ProcessError};
pub use manifest::HTML_FILES;
pub use paths::{depth, relative_prefix};
pub use rewrite::{
    has_footer_container, has_footer_scripts, inject_scripts, replace_footer, CONFIG_SCRIPT,
    FOOTER_CONTAINER_ID, GENERATOR_SCRIPT,
};
