//! Output formatters

pub mod csv;
pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::Corpus;
use serde::Serialize;
use std::collections::HashMap;

/// A single page's estimated rank
#[derive(Debug, Clone, Serialize)]
pub struct PageRank {
    pub page: String,
    pub rank: f64,
}

/// One estimator's result, pages sorted alphabetically
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub method: String,
    pub ranks: Vec<PageRank>,
}

impl RankReport {
    pub fn new(method: impl Into<String>, ranks: &HashMap<String, f64>) -> Self {
        let mut ranks: Vec<PageRank> = ranks
            .iter()
            .map(|(page, rank)| PageRank {
                page: page.clone(),
                rank: *rank,
            })
            .collect();
        ranks.sort_by(|a, b| a.page.cmp(&b.page));
        Self {
            method: method.into(),
            ranks,
        }
    }
}

/// Format rank reports
pub fn format_reports(reports: &[RankReport], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Cli => Ok(terminal::format_reports(reports)),
        OutputFormat::Json => json::format_reports(reports),
        OutputFormat::Csv => csv::format_reports(reports),
    }
}

/// Format the extracted link graph
pub fn format_links(corpus: &Corpus, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Cli => Ok(terminal::format_links(corpus)),
        OutputFormat::Json => json::format_links(corpus),
        OutputFormat::Csv => csv::format_links(corpus),
    }
}

/// Outbound links of every page, both levels alphabetically sorted
pub fn sorted_links(corpus: &Corpus) -> Vec<(String, Vec<String>)> {
    corpus
        .page_names()
        .into_iter()
        .map(|page| {
            let mut links: Vec<String> = corpus
                .links(page)
                .map(|links| links.iter().cloned().collect())
                .unwrap_or_default();
            links.sort_unstable();
            (page.to_string(), links)
        })
        .collect()
}
