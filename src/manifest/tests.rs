use super::*;
use std::collections::HashSet;
use std::path::Path;

#[test]
fn test_manifest_paths_are_unique() {
    let unique: HashSet<_> = HTML_FILES.iter().collect();
    assert_eq!(unique.len(), HTML_FILES.len());
}

#[test]
fn test_manifest_paths_are_relative_html_pages() {
    for rel_path in HTML_FILES {
        assert!(rel_path.ends_with(".html"), "not a page: {rel_path}");
        assert!(Path::new(rel_path).is_relative(), "not relative: {rel_path}");
    }
}
