//! Sentiment analysis of Portuguese free text.

use chrono::Utc;
use dm_core::entities::{SentimentRecord, SentimentResult};
use dm_core::enums::Sentiment;
use dm_core::responses::{SentimentFailure, SentimentOutcome, SummaryStatistics, Unclassified};

use crate::client::{GenerationRequest, RetryPolicy, TextGenerator, generate_with_retry};
use crate::error::LlmError;
use crate::recovery::parse_json_reply;

pub const SYSTEM_PROMPT: &str = "Você é um especialista em análise de sentimento e \
    processamento de linguagem natural. Sempre responda em JSON válido.";

const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_MAX_TOKENS: u32 = 500;

/// User prompt asking for the JSON classification of `text`.
#[must_use]
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"Analise o sentimento do seguinte texto em português:

"{text}"

Forneça uma resposta em JSON com a seguinte estrutura:
{{
    "sentiment": "positive" | "neutral" | "negative",
    "score": <número entre -1 e 1>,
    "intensity": "low" | "medium" | "high",
    "keywords": [<lista de palavras-chave>],
    "insights": "<análise detalhada em 1-2 frases>",
    "tone": "<tom detectado: formal, informal, agressivo, amigável, etc>",
    "confidence": <número entre 0 e 1>
}}"#
    )
}

/// Neutral classification the fixture backend replies with by default.
#[must_use]
pub fn simulated_reply() -> String {
    serde_json::json!({
        "sentiment": "neutral",
        "score": 0.0,
        "intensity": "low",
        "keywords": [],
        "insights": "Análise simulada. Para uma análise real, configure a chave da API OpenAI.",
        "tone": "neutro",
        "confidence": 0.0
    })
    .to_string()
}

/// Classifies texts through a [`TextGenerator`].
#[derive(Debug)]
pub struct SentimentAnalyzer<G> {
    generator: G,
    model: String,
    temperature: f32,
    max_tokens: u32,
    retry: RetryPolicy,
}

impl<G: TextGenerator> SentimentAnalyzer<G> {
    #[must_use]
    pub fn new(generator: G, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            retry: RetryPolicy::none(),
        }
    }

    #[must_use]
    pub const fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Classify one text.
    ///
    /// Never fails: any error becomes a timestamped
    /// [`SentimentOutcome::Failed`] with `sentiment: "unknown"`.
    pub async fn analyze(&self, text: &str) -> SentimentOutcome {
        match self.try_analyze(text).await {
            Ok(result) => SentimentOutcome::Analyzed(SentimentRecord {
                result,
                timestamp: Utc::now(),
                text_length: text.chars().count(),
            }),
            Err(error) => {
                tracing::warn!(kind = %error.kind(), %error, "sentiment analysis failed");
                SentimentOutcome::Failed(SentimentFailure {
                    failure: error.to_failure_report(),
                    sentiment: Unclassified::Unknown,
                    timestamp: Utc::now(),
                })
            }
        }
    }

    /// Classify each text in turn. One outcome per input, same order; a
    /// failed item does not affect the others.
    pub async fn batch_analyze<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SentimentOutcome> {
        let mut results = Vec::with_capacity(texts.len());
        for (index, text) in texts.iter().enumerate() {
            tracing::debug!(index, total = texts.len(), "analyzing text");
            results.push(self.analyze(text.as_ref()).await);
        }
        results
    }

    async fn try_analyze(&self, text: &str) -> Result<SentimentResult, LlmError> {
        let request = GenerationRequest {
            model: self.model.clone(),
            system: SYSTEM_PROMPT.to_string(),
            user: build_prompt(text),
            json_response: true,
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        };
        let raw = generate_with_retry(&self.generator, &request, self.retry).await?;
        let mut result: SentimentResult = parse_json_reply(&raw)?;
        if result.clamp_ranges() {
            tracing::warn!(
                score = result.score,
                "model returned out-of-range values, clamped"
            );
        }
        Ok(result)
    }
}

/// Aggregate counts, percentages and mean score over `results`.
///
/// Returns `None` for an empty slice. Percentages are relative to all
/// outcomes, failures included; the mean covers successful outcomes only and
/// is 0 when there are none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summary_statistics(results: &[SentimentOutcome]) -> Option<SummaryStatistics> {
    if results.is_empty() {
        return None;
    }

    let records: Vec<&SentimentRecord> =
        results.iter().filter_map(SentimentOutcome::record).collect();
    let count = |sentiment: Sentiment| {
        records
            .iter()
            .filter(|r| r.result.sentiment == sentiment)
            .count()
    };
    let positive_count = count(Sentiment::Positive);
    let neutral_count = count(Sentiment::Neutral);
    let negative_count = count(Sentiment::Negative);

    let total = results.len();
    let percentage = |n: usize| n as f64 / total as f64 * 100.0;
    let average_score = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.result.score).sum::<f64>() / records.len() as f64
    };

    Some(SummaryStatistics {
        total_analyzed: total,
        positive_count,
        neutral_count,
        negative_count,
        positive_percentage: percentage(positive_count),
        neutral_percentage: percentage(neutral_count),
        negative_percentage: percentage(negative_count),
        average_score,
        timestamp: Utc::now(),
    })
}
