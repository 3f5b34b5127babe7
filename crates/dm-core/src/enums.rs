//! Classification enums, report kinds, and the failure taxonomy.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Sentiment
// ---------------------------------------------------------------------------

/// Polarity assigned to a text by the sentiment model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Intensity
// ---------------------------------------------------------------------------

/// Qualitative strength of the detected sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReportKind
// ---------------------------------------------------------------------------

/// The three Markdown reports that can be rendered from research JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// `market_insights*.json` → market analysis table.
    MarketAnalysis,
    /// `market_statistics.json` → analytical market summary.
    MarketSummary,
    /// `daily_trends.json` → daily trend digest.
    DailySummary,
}

impl ReportKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarketAnalysis => "market_analysis",
            Self::MarketSummary => "market_summary",
            Self::DailySummary => "daily_summary",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FailureKind
// ---------------------------------------------------------------------------

/// Closed set of failure categories surfaced to callers.
///
/// Report errors map onto the first three, LLM and configuration errors
/// onto the rest. Callers
/// branch on this instead of matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Input file does not exist.
    FileNotFound,
    /// Input file is not valid JSON or does not match the expected shape.
    InvalidJson,
    /// Any other filesystem failure while reading input or writing output.
    Io,
    /// The model replied, but no JSON result could be recovered.
    ResponseParse,
    /// Connection, timeout, or TLS failure talking to the endpoint.
    Transport,
    /// Credentials missing or rejected.
    Auth,
    /// The endpoint throttled the request.
    RateLimited,
    /// The endpoint answered with any other non-success status.
    Upstream,
    /// The generator settings are unusable (endpoint, fixture file).
    Config,
}

impl FailureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileNotFound => "file_not_found",
            Self::InvalidJson => "invalid_json",
            Self::Io => "io",
            Self::ResponseParse => "response_parse",
            Self::Transport => "transport",
            Self::Auth => "auth",
            Self::RateLimited => "rate_limited",
            Self::Upstream => "upstream",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
