//! Linkrank Core Library
//!
//! PageRank estimation over a small corpus of hyperlinked HTML pages.
//!
//! # Features
//! - Corpus loading: directory scan, anchor `href` extraction, closed link graph
//! - Random-surfer transition model with linkless-page redistribution
//! - Monte Carlo sampling estimator with injectable randomness
//! - Deterministic fixed-point iteration with convergence detection

pub mod config;
pub mod corpus;
pub mod error;
pub mod rank;

pub use config::RankConfig;
pub use corpus::{extract_links, load_corpus, Corpus};
pub use error::{Error, LinkRankError, Result};
pub use rank::{iterate_pagerank, sample_pagerank, transition_model, RandomSource, RngSource};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
