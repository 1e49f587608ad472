//! Hyperlink extraction from HTML pages

use regex::Regex;
use std::sync::OnceLock;

fn href_regex() -> &'static Regex {
    static HREF: OnceLock<Regex> = OnceLock::new();
    HREF.get_or_init(|| {
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex")
    })
}

/// Extract anchor `href` targets from page content.
///
/// Returns raw targets in document order; restriction to pages inside the
/// collection happens when the [`Corpus`](super::Corpus) is built.
pub fn extract_links(content: &str) -> Vec<String> {
    href_regex()
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}
