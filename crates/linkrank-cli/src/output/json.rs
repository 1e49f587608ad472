//! JSON output formatting

use super::{sorted_links, RankReport};
use linkrank_core::Corpus;
use serde::Serialize;

pub fn format_reports(reports: &[RankReport]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[derive(Serialize)]
struct PageLinks {
    page: String,
    links: Vec<String>,
}

pub fn format_links(corpus: &Corpus) -> anyhow::Result<String> {
    let pages: Vec<PageLinks> = sorted_links(corpus)
        .into_iter()
        .map(|(page, links)| PageLinks { page, links })
        .collect();
    Ok(serde_json::to_string_pretty(&pages)?)
}
