
use std::path::Path;

/// Number of directory segments between a target file and the site root
/// where the shared scripts live
pub fn depth(rel_path: &str) -> usize {
    Path::new(rel_path)
        .parent()
        .map(|dir| dir.components().count())
        .unwrap_or(0)
}

/// Relative prefix needed to reference root-level resources from the file's
/// directory: `""` at the root, `"../"` one level down, and so on
pub fn relative_prefix(rel_path: &str) -> String {
    "../".repeat(depth(rel_path))
}
