//! PageRank estimators over a [`Corpus`](crate::corpus::Corpus)

mod iterate;
mod random;
mod sample;
mod transition;

pub use iterate::iterate_pagerank;
pub use random::{RandomSource, RngSource};
pub use sample::sample_pagerank;
pub use transition::transition_model;
