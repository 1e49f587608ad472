//! Iterative (fixed point) PageRank estimator

use crate::config::RankConfig;
use crate::corpus::Corpus;
use crate::error::{LinkRankError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Estimate PageRank by relaxing the fixed-point equations to convergence.
///
/// Ranks start at `1/N` and are swept repeatedly with
/// `new(p) = (1 - d)/N + d * Σ_q rank(q)/L(q)` over every page `q` that links
/// to `p`. A linkless `q` counts as linking to every page with `L(q) = N`,
/// matching the transition model's policy. Each sweep reads only the previous
/// sweep's values, so the result does not depend on page order.
///
/// Converges when no page moves by more than `config.tolerance`; exceeding
/// `config.max_sweeps` is a [`LinkRankError::NonConvergence`]. The final
/// ranks are normalized to sum to exactly 1 and are deterministic for a given
/// corpus and config.
pub fn iterate_pagerank(corpus: &Corpus, config: &RankConfig) -> Result<HashMap<String, f64>> {
    assert!(!corpus.is_empty(), "corpus must contain at least one page");

    let names = corpus.page_names();
    let n = names.len() as f64;
    let base = (1.0 - config.damping) / n;

    // incoming[p] lists (q, L(q)) for every q whose rank flows into p.
    let mut incoming: HashMap<&str, Vec<(&str, f64)>> =
        names.iter().map(|p| (*p, Vec::new())).collect();
    for (page, links) in corpus.iter() {
        if links.is_empty() {
            for p in &names {
                incoming.get_mut(p).expect("known page").push((page.as_str(), n));
            }
        } else {
            let out = links.len() as f64;
            for target in links {
                incoming
                    .get_mut(target.as_str())
                    .expect("link target in corpus")
                    .push((page.as_str(), out));
            }
        }
    }

    let mut ranks: HashMap<String, f64> =
        names.iter().map(|p| (p.to_string(), 1.0 / n)).collect();

    for sweep in 1..=config.max_sweeps {
        let mut next = HashMap::with_capacity(ranks.len());
        let mut max_delta = 0.0f64;

        for page in &names {
            let inflow: f64 = incoming[page]
                .iter()
                .map(|(q, out)| ranks[*q] / out)
                .sum();
            let rank = base + config.damping * inflow;

            max_delta = max_delta.max((rank - ranks[*page]).abs());
            next.insert(page.to_string(), rank);
        }

        ranks = next;

        if max_delta <= config.tolerance {
            debug!(sweeps = sweep, max_delta, "iteration converged");
            return Ok(normalize(ranks));
        }
    }

    Err(LinkRankError::NonConvergence {
        sweeps: config.max_sweeps,
    })
}

/// Scale ranks so they sum to exactly 1, absorbing floating-point drift
fn normalize(mut ranks: HashMap<String, f64>) -> HashMap<String, f64> {
    let total: f64 = ranks.values().sum();
    for rank in ranks.values_mut() {
        *rank /= total;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
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

    #[test]
    fn test_ranks_sum_to_one_and_non_negative() {
        let corpus = corpus(&[
            ("1.html", &["2.html"]),
            ("2.html", &["1.html", "3.html"]),
            ("3.html", &["2.html", "4.html"]),
            ("4.html", &["2.html"]),
        ]);
        let ranks = iterate_pagerank(&corpus, &RankConfig::default()).unwrap();

        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-9, "total={total}");
        assert!(ranks.values().all(|r| *r >= 0.0));
    }

    #[test]
    fn test_symmetric_cycle_converges_to_equal_ranks() {
        let corpus = corpus(&[
            ("a.html", &["b.html"]),
            ("b.html", &["c.html"]),
            ("c.html", &["a.html"]),
        ]);
        let ranks = iterate_pagerank(&corpus, &RankConfig::default()).unwrap();

        for rank in ranks.values() {
            assert!((rank - 1.0 / 3.0).abs() < 0.01, "rank={rank}");
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let corpus = corpus(&[
            ("1.html", &["2.html", "3.html"]),
            ("2.html", &["3.html"]),
            ("3.html", &["1.html"]),
        ]);
        let first = iterate_pagerank(&corpus, &RankConfig::default()).unwrap();
        let second = iterate_pagerank(&corpus, &RankConfig::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_linkless_page_leaks_no_probability() {
        let corpus = corpus(&[("a.html", &[]), ("b.html", &["a.html"])]);
        let ranks = iterate_pagerank(&corpus, &RankConfig::default()).unwrap();

        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-9, "total={total}");
        // a.html receives b.html's whole linked mass plus half of its own
        // redistributed mass, so it must outrank b.html.
        assert!(ranks["a.html"] > ranks["b.html"]);
    }

    #[test]
    fn test_single_page_corpus() {
        let corpus = corpus(&[("only.html", &[])]);
        let ranks = iterate_pagerank(&corpus, &RankConfig::default()).unwrap();
        assert!((ranks["only.html"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_cap_surfaces_as_error() {
        let corpus = corpus(&[
            ("a.html", &["b.html"]),
            ("b.html", &["a.html"]),
            ("c.html", &["a.html"]),
        ]);
        let config = RankConfig {
            tolerance: 0.0,
            max_sweeps: 3,
            ..Default::default()
        };
        let err = iterate_pagerank(&corpus, &config).unwrap_err();
        assert!(matches!(err, LinkRankError::NonConvergence { sweeps: 3 }));
    }
}
