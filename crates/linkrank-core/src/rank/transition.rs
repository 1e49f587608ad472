//! Random-surfer transition model

use crate::corpus::Corpus;
use std::collections::HashMap;

/// Probability distribution over which page a random surfer visits next.
///
/// With probability `damping`, the surfer follows one of `page`'s outbound
/// links; with probability `1 - damping` it jumps to any corpus page. A page
/// with no outbound links is treated as linking to every page, so the
/// distribution always covers the whole corpus and sums to 1.
///
/// `page` must be part of the corpus and `damping` in (0, 1].
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> HashMap<String, f64> {
    debug_assert!(corpus.contains(page), "page {page} not in corpus");
    debug_assert!(damping > 0.0 && damping <= 1.0);

    let n = corpus.len() as f64;
    let links = corpus.links(page).expect("page must be in corpus");

    let mut distribution: HashMap<String, f64> = HashMap::with_capacity(corpus.len());

    if links.is_empty() {
        // Linkless page: pretend it links everywhere, otherwise probability
        // mass would leak out of the corpus.
        for name in corpus.page_names() {
            distribution.insert(name.to_string(), 1.0 / n);
        }
        return distribution;
    }

    let base = (1.0 - damping) / n;
    for name in corpus.page_names() {
        distribution.insert(name.to_string(), base);
    }

    let follow = damping / links.len() as f64;
    for target in links {
        *distribution.get_mut(target).expect("link target in corpus") += follow;
    }

    distribution
}
