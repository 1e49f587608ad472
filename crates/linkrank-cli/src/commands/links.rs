//! Link graph inspection command

use crate::app::{LinksArgs, OutputFormat};
use crate::output;
use anyhow::Result;
use linkrank_core::load_corpus;

/// Print the extracted link graph
pub fn run(args: LinksArgs, format: OutputFormat) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    print!("{}", output::format_links(&corpus, format)?);
    Ok(())
}
