//! Outcome and CLI response types.
//!
//! LLM flows never surface a raw error to their caller: they return an
//! outcome that is either the typed result or a [`FailureReport`] carrying an
//! `"error"` key, serialized untagged so the JSON matches what downstream
//! consumers already read.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ActionPlan, SentimentRecord};
use crate::enums::{FailureKind, ReportKind};

/// `error` message used whenever no JSON could be recovered from a reply.
pub const JSON_DECODE_ERROR: &str = "JSON Decode Error";

/// Structured error value returned in place of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FailureReport {
    pub error: String,
    pub kind: FailureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FailureReport {
    #[must_use]
    pub fn new(kind: FailureKind, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            kind,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Placeholder classification attached to failed sentiment analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Unclassified {
    Unknown,
}

/// A failed sentiment analysis: the failure plus `"sentiment": "unknown"`
/// and the time it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentFailure {
    #[serde(flatten)]
    pub failure: FailureReport,
    pub sentiment: Unclassified,
    pub timestamp: DateTime<Utc>,
}

/// Result of analyzing one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SentimentOutcome {
    Analyzed(SentimentRecord),
    Failed(SentimentFailure),
}

impl SentimentOutcome {
    #[must_use]
    pub const fn record(&self) -> Option<&SentimentRecord> {
        match self {
            Self::Analyzed(record) => Some(record),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&FailureReport> {
        match self {
            Self::Analyzed(_) => None,
            Self::Failed(failed) => Some(&failed.failure),
        }
    }
}

/// Result of generating a PAPP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PlanOutcome {
    Planned(ActionPlan),
    Failed(FailureReport),
}

impl PlanOutcome {
    #[must_use]
    pub const fn plan(&self) -> Option<&ActionPlan> {
        match self {
            Self::Planned(plan) => Some(plan),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&FailureReport> {
        match self {
            Self::Planned(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

/// Aggregate over a list of sentiment outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryStatistics {
    pub total_analyzed: usize,
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    pub positive_percentage: f64,
    pub neutral_percentage: f64,
    pub negative_percentage: f64,
    pub average_score: f64,
    pub timestamp: DateTime<Utc>,
}

/// Response from the report commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportGenerated {
    pub report: ReportKind,
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes: usize,
}

/// Response from `dialoga sentiment batch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BatchResponse {
    pub results: Vec<SentimentOutcome>,
    /// `None` only when there was nothing to analyze.
    pub statistics: Option<SummaryStatistics>,
    pub saved_to: Option<PathBuf>,
}

/// Response from `dialoga keywords`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordsResponse {
    pub last_updated: Option<String>,
    pub keywords: Vec<String>,
}

/// Response from `dialoga validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResponse {
    pub schema: String,
    pub file: PathBuf,
    pub valid: bool,
    pub errors: Vec<String>,
}
