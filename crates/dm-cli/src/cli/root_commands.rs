use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::SentimentCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Render market insights into the market analysis report.
    MarketAnalysis(ReportArgs),
    /// Render market statistics into the analytical market summary.
    MarketSummary(ReportArgs),
    /// Render daily trends into the daily summary.
    DailySummary(ReportArgs),
    /// Generate a 7-day deep-processing action plan (PAPP) for a VAK profile.
    Papp(PappArgs),
    /// Sentiment analysis of free text.
    Sentiment {
        #[command(subcommand)]
        action: SentimentCommands,
    },
    /// List unique trend keywords of a research digest.
    Keywords(KeywordsArgs),
    /// Print a JSON Schema, or list schema names.
    Schema(SchemaArgs),
    /// Validate a JSON file against a registered schema.
    Validate(ValidateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Input JSON (defaults to the research data directory)
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output Markdown (defaults to a dated file in the research findings directory)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct PappArgs {
    /// Profile JSON file (`visual`, `auditory`/`auditivo`, ...)
    #[arg(long, conflicts_with_all = ["visual", "auditory", "kinesthetic", "goal"])]
    pub profile: Option<PathBuf>,
    #[arg(long)]
    pub visual: Option<f64>,
    #[arg(long)]
    pub auditory: Option<f64>,
    #[arg(long)]
    pub kinesthetic: Option<f64>,
    #[arg(long)]
    pub goal: Option<String>,
    /// Research digest whose keywords are added to the prompt
    #[arg(long)]
    pub trends: Option<PathBuf>,
    /// Also save the outcome as JSON here
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct KeywordsArgs {
    /// Research digest JSON (defaults to `research_digest.json` in the research data directory)
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list all names
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Registered schema name
    pub schema: String,
    /// JSON file to validate
    pub file: PathBuf,
}
