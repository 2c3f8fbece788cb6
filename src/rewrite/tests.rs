use super::*;

const PAGE_WITH_FOOTER: &str = "<html>\n<body>\n<main>content</main>\n\
<footer class=\"site-footer\" data-theme=\"dark\">\n  <p>© 2024</p>\n  <a href=\"/terms\">Terms</a>\n</footer>\n\
</body>\n</html>\n";

#[test]
fn test_replace_footer_removes_multiline_block() {
    let (out, replaced) = replace_footer(PAGE_WITH_FOOTER);

    assert!(replaced);
    assert!(out.contains("<!-- Footer Container - Populated by footer.js -->"));
    assert!(out.contains("<div id=\"footer-container\"></div>"));
    assert!(!out.contains("<footer"));
    assert!(!out.contains("</footer>"));
    assert_eq!(out.matches("footer-container").count(), 1);
}

#[test]
fn test_replace_footer_without_footer_is_noop() {
    let input = "<html><body><p>no footer here</p></body></html>";
    let (out, replaced) = replace_footer(input);

    assert!(!replaced);
    assert_eq!(out, input);
}

#[test]
fn test_replace_footer_only_first_disjoint_block() {
    let input = "<footer>one</footer>\n<p>between</p>\n<footer>two</footer>";
    let (out, replaced) = replace_footer(input);

    assert!(replaced);
    // The second block survives untouched
    assert!(out.contains("<footer>two</footer>"));
    assert!(!out.contains("<footer>one</footer>"));
    assert_eq!(out.matches("footer-container").count(), 1);
}

#[test]
fn test_inject_scripts_with_nested_prefix() {
    let input = "<html>\n  <body>\n    <p>page</p>\n  </body>\n</html>";
    let (out, injected) = inject_scripts(input, "../../");

    assert!(injected);
    assert!(out.contains("<script src=\"../../footer-config.js\"></script>"));
    assert!(out.contains("<script src=\"../../footer.js\"></script>"));
    assert!(out.contains("</body>"));

    // Config loads first, then the generator, then the closing tag
    let config_at = out.find("footer-config.js").unwrap();
    let generator_at = out.find("footer.js\"").unwrap();
    let body_at = out.find("</body>").unwrap();
    assert!(config_at < generator_at);
    assert!(generator_at < body_at);
}

#[test]
fn test_inject_scripts_with_empty_prefix() {
    let (out, injected) = inject_scripts("<body></body>", "");

    assert!(injected);
    assert!(out.contains("<script src=\"footer-config.js\"></script>"));
}

#[test]
fn test_inject_scripts_without_body_tag() {
    let input = "<html><p>fragment without a body close</p>";
    let (out, injected) = inject_scripts(input, "../");

    assert!(!injected);
    assert_eq!(out, input);
}

#[test]
fn test_has_footer_container_detects_marker() {
    assert!(has_footer_container("<div id=\"footer-container\"></div>"));
    assert!(!has_footer_container("<div id=\"header-container\"></div>"));
}

#[test]
fn test_has_footer_scripts_requires_both_references() {
    assert!(has_footer_scripts(
        "<script src=\"footer-config.js\"></script><script src=\"footer.js\"></script>"
    ));
    assert!(!has_footer_scripts("<script src=\"footer-config.js\"></script>"));
    assert!(!has_footer_scripts("<script src=\"navbar.js\"></script>"));
}

#[test]
fn test_replace_then_inject_is_detected_as_migrated() {
    let (out, _) = replace_footer(PAGE_WITH_FOOTER);
    let (out, _) = inject_scripts(&out, "");

    assert!(has_footer_container(&out));
    assert!(has_footer_scripts(&out));
}
