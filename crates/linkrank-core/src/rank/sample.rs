//! Sampling (random surfer) PageRank estimator

use crate::config::RankConfig;
use crate::corpus::Corpus;
use crate::rank::random::RandomSource;
use crate::rank::transition::transition_model;
use std::collections::HashMap;
use tracing::debug;

/// Estimate PageRank by simulating a random surfer for `config.samples` steps.
///
/// Each visited page accumulates `1/samples`, so the returned ranks sum to 1
/// by construction. The walk starts at a uniformly random page and advances
/// with one weighted draw per step from the page's transition distribution.
///
/// The result varies run to run unless `rng` is seeded. The corpus must be
/// non-empty and `config` validated by the caller.
pub fn sample_pagerank(
    corpus: &Corpus,
    config: &RankConfig,
    rng: &mut dyn RandomSource,
) -> HashMap<String, f64> {
    assert!(!corpus.is_empty(), "corpus must contain at least one page");
    assert!(config.samples >= 1, "sample count must be at least 1");

    let names = corpus.page_names();
    let visit = 1.0 / config.samples as f64;

    let mut ranks: HashMap<String, f64> = names.iter().map(|n| (n.to_string(), 0.0)).collect();

    let mut current = names[rng.pick_uniform(names.len())].to_string();

    for _ in 0..config.samples {
        *ranks.get_mut(&current).expect("walk stays in corpus") += visit;

        let distribution = transition_model(corpus, &current, config.damping);
        // Weights in page_names order so indices map back to names.
        let weights: Vec<f64> = names.iter().map(|n| distribution[*n]).collect();
        current = names[rng.pick_weighted(&weights)].to_string();
    }

    debug!(
        samples = config.samples,
        pages = corpus.len(),
        "sampling walk finished"
    );

    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::rank::random::RngSource;
    use std::collections::{HashMap, HashSet};

    fn corpus(spec: &[(&str, &[&str])]) -> Corpus {
        let pages: HashMap<String, HashSet<String>> = spec
            .iter()
            .map(|(page, links)| {
                (
                    page.to_string(),
                    links.iter().map(|l| l.to_string()).collect(),
                )
            })
            .collect();
        Corpus::from_pages(pages)
    }

    fn config(samples: usize) -> RankConfig {
        RankConfig {
            samples,
            ..Default::default()
        }
    }

    #[test]
    fn test_ranks_sum_to_one() {
        let corpus = corpus(&[
            ("1.html", &["2.html"]),
            ("2.html", &["1.html", "3.html"]),
            ("3.html", &["2.html"]),
        ]);
        let mut rng = RngSource::seeded(1);
        let ranks = sample_pagerank(&corpus, &config(5000), &mut rng);

        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-9, "total={total}");
        assert_eq!(ranks.len(), 3);
    }

    #[test]
    fn test_single_sample_lands_on_one_page() {
        let corpus = corpus(&[("a.html", &["b.html"]), ("b.html", &["a.html"])]);
        let mut rng = RngSource::seeded(9);
        let ranks = sample_pagerank(&corpus, &config(1), &mut rng);

        let ones = ranks.values().filter(|v| (**v - 1.0).abs() < 1e-9).count();
        let zeros = ranks.values().filter(|v| **v == 0.0).count();
        assert_eq!((ones, zeros), (1, 1));
    }

    #[test]
    fn test_seeded_walk_is_reproducible() {
        let corpus = corpus(&[
            ("a.html", &["b.html"]),
            ("b.html", &["c.html"]),
            ("c.html", &["a.html", "b.html"]),
        ]);
        let first = sample_pagerank(&corpus, &config(2000), &mut RngSource::seeded(42));
        let second = sample_pagerank(&corpus, &config(2000), &mut RngSource::seeded(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_heavily_linked_page_ranks_higher() {
        // Every page links to hub.html, hub links back to one page.
        let corpus = corpus(&[
            ("hub.html", &["a.html"]),
            ("a.html", &["hub.html"]),
            ("b.html", &["hub.html"]),
            ("c.html", &["hub.html"]),
        ]);
        let mut rng = RngSource::seeded(5);
        let ranks = sample_pagerank(&corpus, &config(10_000), &mut rng);

        assert!(ranks["hub.html"] > ranks["b.html"]);
        assert!(ranks["hub.html"] > ranks["c.html"]);
    }
}
