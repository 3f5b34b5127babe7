//! One-call load → render → write for each report kind.

use std::path::Path;

use chrono::NaiveDate;
use dm_core::enums::ReportKind;
use dm_core::responses::ReportGenerated;

use crate::daily_summary::render_daily_summary;
use crate::error::ReportError;
use crate::load::load_document;
use crate::market_analysis::render_market_analysis;
use crate::market_summary::render_market_summary;
use crate::write::write_report;

/// Input file name, relative to the research data directory.
#[must_use]
pub const fn default_input_file(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::MarketAnalysis => "market_insights.json",
        ReportKind::MarketSummary => "market_statistics.json",
        ReportKind::DailySummary => "daily_trends.json",
    }
}

/// Dated output file name, relative to the research findings directory.
#[must_use]
pub fn default_output_file(kind: ReportKind, today: NaiveDate) -> String {
    format!("{kind}_{}.md", today.format("%Y%m%d"))
}

/// Render `input` as a `kind` report and write it to `output`.
///
/// # Errors
///
/// Returns [`ReportError`] if the input cannot be loaded or the output cannot
/// be written. Nothing is written when loading fails.
pub fn generate(
    kind: ReportKind,
    input: &Path,
    output: &Path,
    today: NaiveDate,
) -> Result<ReportGenerated, ReportError> {
    let markdown = match kind {
        ReportKind::MarketAnalysis => render_market_analysis(&load_document(input)?),
        ReportKind::MarketSummary => render_market_summary(&load_document(input)?),
        ReportKind::DailySummary => render_daily_summary(&load_document(input)?, today),
    };
    write_report(output, &markdown)?;

    tracing::info!(
        report = %kind,
        output = %output.display(),
        bytes = markdown.len(),
        "report written"
    );
    Ok(ReportGenerated {
        report: kind,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        bytes: markdown.len(),
    })
}
