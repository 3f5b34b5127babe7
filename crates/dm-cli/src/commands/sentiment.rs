use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use dm_core::responses::{BatchResponse, SentimentOutcome};
use dm_llm::sentiment::simulated_reply;
use dm_llm::{Generator, SentimentAnalyzer, summary_statistics};
use dm_report::write_json;
use serde::Serialize;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SentimentCommands;
use crate::commands::shared::files::{ensure_parent_dir, read_text_lines, timestamped_file_name};
use crate::commands::shared::llm::build_generator;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

const RESULT_FILE_PREFIX: &str = "sentiment_analysis_result";

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    result: SentimentOutcome,
    saved_to: Option<PathBuf>,
}

/// Handle `dialoga sentiment <action>`.
pub async fn handle(
    action: &SentimentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SentimentCommands::Analyze { text, save } => {
            handle_analyze(text, *save, ctx, flags).await
        }
        SentimentCommands::Batch { file, output } => {
            handle_batch(file, output.as_deref(), ctx, flags).await
        }
        SentimentCommands::Stats { file } => handle_stats(file, flags),
    }
}

fn analyzer(ctx: &AppContext) -> anyhow::Result<SentimentAnalyzer<Generator>> {
    let llm = &ctx.config.llm;
    let generator = build_generator(ctx, simulated_reply)?;
    Ok(SentimentAnalyzer::new(generator, llm.sentiment_model.clone())
        .with_sampling(llm.sentiment_temperature, llm.sentiment_max_tokens)
        .with_retry(ctx.retry_policy()))
}

async fn handle_analyze(
    text: &str,
    save: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let analyzer = analyzer(ctx)?;

    let progress = Progress::spinner("Analisando sentimento...");
    let result = analyzer.analyze(text).await;
    progress.finish_clear();

    let saved_to = if save {
        let name = timestamped_file_name(RESULT_FILE_PREFIX, Local::now().naive_local(), "json");
        let path = ctx.research_findings_dir().join(name);
        Some(write_json(&path, &result).context("failed to save sentiment result")?)
    } else {
        None
    };

    output(&AnalyzeResponse { result, saved_to }, flags.format)
}

async fn handle_batch(
    file: &Path,
    jsonl_output: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let texts = read_text_lines(file)?;
    let analyzer = analyzer(ctx)?;

    let progress = Progress::spinner(&format!("Analisando {} textos...", texts.len()));
    let results = analyzer.batch_analyze(texts.as_slice()).await;
    progress.finish_ok(&format!("{} textos analisados", results.len()));

    let saved_to = match jsonl_output {
        Some(path) => {
            save_jsonl(path, &results)?;
            Some(path.to_path_buf())
        }
        None => None,
    };

    output(
        &BatchResponse {
            statistics: summary_statistics(&results),
            results,
            saved_to,
        },
        flags.format,
    )
}

fn handle_stats(file: &Path, flags: &GlobalFlags) -> anyhow::Result<()> {
    let results = load_jsonl(file)?;
    match summary_statistics(&results) {
        Some(statistics) => output(&statistics, flags.format),
        None => output(&json!({}), flags.format),
    }
}

fn save_jsonl(path: &Path, results: &[SentimentOutcome]) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;
    serde_jsonlines::write_json_lines(path, results)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), count = results.len(), "sentiment outcomes saved");
    Ok(())
}

fn load_jsonl(path: &Path) -> anyhow::Result<Vec<SentimentOutcome>> {
    serde_jsonlines::json_lines(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .collect::<Result<Vec<SentimentOutcome>, _>>()
        .with_context(|| format!("failed to parse {}", path.display()))
}
