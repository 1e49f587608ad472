//! Corpus loading and the hyperlink graph

mod link_extractor;
mod scanner;

pub use link_extractor::extract_links;
pub use scanner::{scan_pages, ScanOptions, ScanResult};

use crate::error::{LinkRankError, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A hyperlink graph over a closed collection of pages.
///
/// Maps each page name to the set of page names it links to. Construction
/// through [`Corpus::from_pages`] guarantees that every link target is itself
/// a page of the corpus and that no page links to itself. A page may have an
/// empty link set.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    pages: HashMap<String, HashSet<String>>,
}

impl Corpus {
    /// Build a corpus from raw page -> links data.
    ///
    /// Links to pages outside the collection and self-links are dropped here,
    /// so the rest of the crate can assume the graph is closed.
    pub fn from_pages(pages: HashMap<String, HashSet<String>>) -> Self {
        let names: HashSet<String> = pages.keys().cloned().collect();
        let pages = pages
            .into_iter()
            .map(|(page, links)| {
                let links = links
                    .into_iter()
                    .filter(|target| *target != page && names.contains(target))
                    .collect();
                (page, links)
            })
            .collect();
        Self { pages }
    }

    /// Number of pages in the corpus
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True if the corpus has no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// True if `page` is part of the corpus
    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Outbound links of `page`, or None if the page is not in the corpus
    pub fn links(&self, page: &str) -> Option<&HashSet<String>> {
        self.pages.get(page)
    }

    /// Page names in alphabetical order.
    ///
    /// Sorted so that callers indexing pages by position (the sampling
    /// estimator, reporters) see a stable ordering.
    pub fn page_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over (page, links) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &HashSet<String>)> {
        self.pages.iter()
    }
}

/// Parse a directory of HTML pages into a [`Corpus`].
///
/// Each `*.html` file becomes a page named by its path relative to `dir`.
/// Anchor `href` targets are kept only when they name another page of the
/// same collection.
pub fn load_corpus(dir: &Path) -> Result<Corpus> {
    let mut pages = HashMap::new();

    for entry in scan_pages(dir, &ScanOptions::default())? {
        let contents = fs::read_to_string(&entry.path)?;
        let links: HashSet<String> = extract_links(&contents).into_iter().collect();
        pages.insert(entry.relative_path, links);
    }

    if pages.is_empty() {
        return Err(LinkRankError::EmptyCorpus(dir.display().to_string()));
    }

    let corpus = Corpus::from_pages(pages);
    let link_count: usize = corpus.iter().map(|(_, links)| links.len()).sum();
    debug!(
        pages = corpus.len(),
        links = link_count,
        "loaded corpus from {}",
        dir.display()
    );

    Ok(corpus)
}
