mod error;


pub use error::ProcessError;

use crate::paths::relative_prefix;
use crate::rewrite::{has_footer_container, has_footer_scripts, inject_scripts, replace_footer};
use std::fs;
use std::path::Path;

/// Outcome of processing one target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Target path does not exist; skipped
    Missing,
    /// Already carries the container and both script references; no write
    AlreadyMigrated,
    /// File rewritten in place
    Updated {
        footer_replaced: bool,
        scripts_injected: bool,
    },
    /// Neither pattern matched; file left untouched
    Unchanged,
}

/// Counters for the end-of-run summary line
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchSummary {
    pub updated: usize,
    pub total: usize,
}

/// Read, transform, and rewrite one target file.
///
/// Errors cover the read/decode/write path only; a missing file and a page
/// with nothing to change are ordinary outcomes, not errors.
pub fn process_file(root: &Path, rel_path: &str) -> Result<FileOutcome, ProcessError> {
    let full_path = root.join(rel_path);

    if !full_path.exists() {
        return Ok(FileOutcome::Missing);
    }

    let bytes = fs::read(&full_path).map_err(|source| ProcessError::ReadFailed {
        path: full_path.clone(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| ProcessError::NotUtf8 {
        path: full_path.clone(),
    })?;

    // Re-running the batch must not double-insert script tags
    if has_footer_container(&content) && has_footer_scripts(&content) {
        return Ok(FileOutcome::AlreadyMigrated);
    }

    let prefix = relative_prefix(rel_path);

    let (content, footer_replaced) = replace_footer(&content);
    let (content, scripts_injected) = inject_scripts(&content, &prefix);

    if footer_replaced || scripts_injected {
        fs::write(&full_path, &content).map_err(|source| ProcessError::WriteFailed {
            path: full_path,
            source,
        })?;
        return Ok(FileOutcome::Updated {
            footer_replaced,
            scripts_injected,
        });
    }

    Ok(FileOutcome::Unchanged)
}

/// Run the full batch in declaration order, printing one status line per file.
///
/// Per-file failures are reported and skipped; nothing aborts the batch and
/// the operation stays safe to re-run.
pub fn run_batch(root: &Path, files: &[&str]) -> BatchSummary {
    let mut summary = BatchSummary {
        updated: 0,
        total: files.len(),
    };

    for rel_path in files {
        match process_file(root, rel_path) {
            Ok(FileOutcome::Missing) => {
                println!("⚠️  File not found: {rel_path}");
            }
            Ok(FileOutcome::AlreadyMigrated) => {
                println!("✓  Already updated: {rel_path}");
                summary.updated += 1;
            }
            Ok(FileOutcome::Updated {
                footer_replaced,
                scripts_injected,
            }) => {
                println!(
                    "✓  Updated: {rel_path} (footer: {footer_replaced}, scripts: {scripts_injected})"
                );
                summary.updated += 1;
            }
            Ok(FileOutcome::Unchanged) => {
                println!("⚠️  No changes made: {rel_path}");
            }
            Err(e) => {
                println!("❌ Error processing {rel_path}: {e}");
            }
        }
    }

    summary
}
