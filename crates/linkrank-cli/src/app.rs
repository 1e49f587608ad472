//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Estimate page importance in a directory of hyperlinked HTML pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate PageRank by sampling and by iteration
    Rank(RankArgs),

    /// Show the extracted link graph
    Links(LinksArgs),
}

#[derive(Args)]
pub struct RankArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,

    /// Damping factor in (0, 1]
    #[arg(short, long, env = "LINKRANK_DAMPING")]
    pub damping: Option<f64>,

    /// Number of random-surfer samples
    #[arg(short = 'n', long, env = "LINKRANK_SAMPLES")]
    pub samples: Option<usize>,

    /// Seed for the sampling estimator (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run only the sampling estimator
    #[arg(long, conflicts_with = "iterate_only")]
    pub sample_only: bool,

    /// Run only the iterative estimator
    #[arg(long)]
    pub iterate_only: bool,
}

#[derive(Args)]
pub struct LinksArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
}
