//! CSV output formatting

use super::{sorted_links, RankReport};
use linkrank_core::Corpus;

pub fn format_reports(reports: &[RankReport]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["method", "page", "rank"])?;
    for report in reports {
        for entry in &report.ranks {
            let rank = format!("{:.4}", entry.rank);
            writer.write_record([report.method.as_str(), entry.page.as_str(), rank.as_str()])?;
        }
    }
    into_string(writer)
}

pub fn format_links(corpus: &Corpus) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["source", "target"])?;
    for (page, links) in sorted_links(corpus) {
        for target in links {
            writer.write_record([page.as_str(), target.as_str()])?;
        }
    }
    into_string(writer)
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> anyhow::Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV output: {e}"))?;
    Ok(String::from_utf8(bytes)?)
}
