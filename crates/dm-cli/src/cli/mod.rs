use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dialoga` binary.
#[derive(Debug, Parser)]
#[command(
    name = "dialoga",
    version,
    about = "dialoga - research reports, PAPP generation and sentiment analysis"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base directory for the configured data paths (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            root: self.root.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::subcommands::SentimentCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["dialoga", "--format", "raw", "--verbose", "market-summary"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::MarketSummary(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["dialoga", "daily-summary", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::DailySummary(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["dialoga", "--format", "table", "market-summary"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["dialoga", "--root", "/tmp/demo", "keywords"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.root.as_deref(), Some(Path::new("/tmp/demo")));
    }

    #[test]
    fn report_paths_are_optional() {
        let cli = Cli::try_parse_from([
            "dialoga",
            "market-analysis",
            "--input",
            "data/insights.json",
            "--output",
            "out/analysis.md",
        ])
        .expect("cli should parse");
        let Commands::MarketAnalysis(args) = cli.command else {
            panic!("expected market-analysis");
        };
        assert_eq!(args.input.as_deref(), Some(Path::new("data/insights.json")));
        assert_eq!(args.output.as_deref(), Some(Path::new("out/analysis.md")));
    }

    #[test]
    fn papp_inline_profile_parses() {
        let cli = Cli::try_parse_from([
            "dialoga",
            "papp",
            "--visual",
            "60",
            "--auditory",
            "20",
            "--kinesthetic",
            "20",
            "--goal",
            "Aprender React",
        ])
        .expect("cli should parse");
        let Commands::Papp(args) = cli.command else {
            panic!("expected papp");
        };
        assert_eq!(args.visual, Some(60.0));
        assert_eq!(args.goal.as_deref(), Some("Aprender React"));
    }

    #[test]
    fn papp_profile_file_conflicts_with_inline_values() {
        let parsed = Cli::try_parse_from([
            "dialoga",
            "papp",
            "--profile",
            "profile.json",
            "--visual",
            "60",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn sentiment_subcommands_parse() {
        let cli = Cli::try_parse_from(["dialoga", "sentiment", "analyze", "Adorei!", "--save"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Sentiment {
                action: SentimentCommands::Analyze { save: true, .. }
            }
        ));

        let cli = Cli::try_parse_from(["dialoga", "sentiment", "batch", "texts.txt"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Sentiment {
                action: SentimentCommands::Batch { output: None, .. }
            }
        ));
    }

    #[test]
    fn validate_requires_schema_and_file() {
        assert!(Cli::try_parse_from(["dialoga", "validate", "market_insights"]).is_err());
        assert!(
            Cli::try_parse_from(["dialoga", "validate", "market_insights", "data.json"]).is_ok()
        );
    }
}
