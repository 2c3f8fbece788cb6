#[cfg(test)]
mod tests;

/// Target pages from the sitemap, in migration order. Test fixtures and
/// node_modules are excluded.
pub const HTML_FILES: &[&str] = &[
    "index.html",
    "terms.html",
    "privacy.html",
    "cookies.html",
    "dpi-calculator/index.html",
    "dupecheck/index.html",
    "fps-calculator/index.html",
    "monitor-calculator/index.html",
    "gaming-calculators/index.html",
    "gaming-calculators/robux/index.html",
    "gaming-calculators/robux/guide.html",
    "gaming-calculators/robux/tax-calculator.html",
    "gaming-calculators/vbucks/index.html",
    "gaming-calculators/vbucks/guide.html",
    "gaming-calculators/minecoins/index.html",
    "gaming-calculators/minecoins/guide.html",
    "gaming-calculators/fifa-points/index.html",
    "gaming-calculators/fifa-points/guide.html",
    "gaming-calculators/cod-points/index.html",
    "gaming-calculators/cod-points/guide.html",
    "gaming-calculators/apex-coins/index.html",
    "gaming-calculators/apex-coins/guide.html",
    "gaming-calculators/guides/comparison.html",
    "gaming-calculators/guides/parents-guide.html",
    "tip-calculator/index.html",
    "gst-calculator/index.html",
    "gst-calculator/guide.html",
    "va-calculator/index.html",
    "va-calculator/guide.html",
    "riskscore/index.html",
];
