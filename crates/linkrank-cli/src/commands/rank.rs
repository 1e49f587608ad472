//! Rank estimation command

use crate::app::{OutputFormat, RankArgs};
use crate::output::{self, RankReport};
use anyhow::Result;
use linkrank_core::{iterate_pagerank, load_corpus, sample_pagerank, RankConfig, RngSource};
use tracing::debug;

/// Run both estimators (or one, if restricted) and print the reports
pub fn run(args: RankArgs, format: OutputFormat) -> Result<()> {
    let mut config = RankConfig::load()?;
    if let Some(damping) = args.damping {
        config.damping = damping;
    }
    if let Some(samples) = args.samples {
        config.samples = samples;
    }
    config.validate()?;

    let corpus = load_corpus(&args.corpus)?;
    debug!(pages = corpus.len(), "corpus ready");

    let mut reports = Vec::new();

    if !args.iterate_only {
        let mut rng = match args.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        let sampled = sample_pagerank(&corpus, &config, &mut rng);
        reports.push(RankReport::new(
            format!("sampling (n = {})", config.samples),
            &sampled,
        ));
    }

    if !args.sample_only {
        let iterated = iterate_pagerank(&corpus, &config)?;
        reports.push(RankReport::new("iteration", &iterated));
    }

    print!("{}", output::format_reports(&reports, format)?);
    Ok(())
}
