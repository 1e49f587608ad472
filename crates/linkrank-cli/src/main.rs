//! Linkrank CLI
//!
//! PageRank estimation for a directory of hyperlinked HTML pages.

use clap::Parser;
use linkrank_core::LinkRankError;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let result = match cli.command {
        Commands::Rank(args) => commands::rank::run(args, cli.format),
        Commands::Links(args) => commands::links::run(args, cli.format),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        let code = err
            .downcast_ref::<LinkRankError>()
            .map(LinkRankError::exit_code)
            .unwrap_or(linkrank_core::error::exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}
