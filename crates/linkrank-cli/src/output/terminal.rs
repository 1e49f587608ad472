//! Terminal output formatting

use super::{sorted_links, RankReport};
use linkrank_core::Corpus;
use std::fmt::Write;

pub fn format_reports(reports: &[RankReport]) -> String {
    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "PageRank results from {}", report.method);
        for entry in &report.ranks {
            let _ = writeln!(out, "  {}: {:.4}", entry.page, entry.rank);
        }
    }
    out
}

pub fn format_links(corpus: &Corpus) -> String {
    let mut out = String::new();
    for (page, links) in sorted_links(corpus) {
        if links.is_empty() {
            let _ = writeln!(out, "{page} -> (no outbound links)");
        } else {
            let _ = writeln!(out, "{page} -> {}", links.join(", "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_reports_rounded_to_four_decimals() {
        let ranks = HashMap::from([
            ("b.html".to_string(), 1.0 / 3.0),
            ("a.html".to_string(), 2.0 / 3.0),
        ]);
        let report = RankReport::new("iteration", &ranks);
        let text = format_reports(&[report]);

        assert!(text.starts_with("PageRank results from iteration\n"));
        // Alphabetical order, 4 decimal places
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "  a.html: 0.6667");
        assert_eq!(lines[2], "  b.html: 0.3333");
    }
}
