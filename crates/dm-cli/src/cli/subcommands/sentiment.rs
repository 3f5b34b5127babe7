use std::path::PathBuf;

use clap::Subcommand;

/// Sentiment analysis commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SentimentCommands {
    /// Analyze one text.
    Analyze {
        text: String,
        /// Save the outcome to the research findings directory
        #[arg(long)]
        save: bool,
    },
    /// Analyze every non-empty line of a text file, in order.
    Batch {
        file: PathBuf,
        /// Write the outcomes here as JSON Lines
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Aggregate outcomes previously saved as JSON Lines.
    Stats { file: PathBuf },
}
