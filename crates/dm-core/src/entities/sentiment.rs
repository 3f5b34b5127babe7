use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Intensity, Sentiment};

/// Sentiment classification as returned by the model.
///
/// `sentiment` and `score` are required; everything else is optional because
/// models routinely drop fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Polarity score in `[-1, 1]`.
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    /// Model confidence in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl SentimentResult {
    /// Clamp `score` into `[-1, 1]` and `confidence` into `[0, 1]`.
    ///
    /// Returns `true` if anything had to be clamped.
    pub fn clamp_ranges(&mut self) -> bool {
        let score = self.score.clamp(-1.0, 1.0);
        let confidence = self.confidence.map(|c| c.clamp(0.0, 1.0));
        let changed = score.to_bits() != self.score.to_bits() || confidence != self.confidence;
        self.score = score;
        self.confidence = confidence;
        changed
    }
}

/// A [`SentimentResult`] stamped with when it was produced and how long the
/// analyzed text was (in characters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentRecord {
    #[serde(flatten)]
    pub result: SentimentResult,
    pub timestamp: DateTime<Utc>,
    pub text_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_reply_parses() {
        let result: SentimentResult =
            serde_json::from_str(r#"{"sentiment":"positive","score":0.8}"#).unwrap();
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!(result.keywords.is_empty());
        assert!(result.intensity.is_none());
    }

    #[test]
    fn clamps_out_of_range_values() {
        let mut result: SentimentResult = serde_json::from_str(
            r#"{"sentiment":"negative","score":-1.7,"confidence":1.2}"#,
        )
        .unwrap();
        assert!(result.clamp_ranges());
        assert!((result.score + 1.0).abs() < f64::EPSILON);
        assert_eq!(result.confidence, Some(1.0));
        assert!(!result.clamp_ranges());
    }

    #[test]
    fn record_flattens_result_fields() {
        let record = SentimentRecord {
            result: serde_json::from_str(r#"{"sentiment":"neutral","score":0.0}"#).unwrap(),
            timestamp: Utc::now(),
            text_length: 42,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["sentiment"], "neutral");
        assert_eq!(value["text_length"], 42);
        assert!(value.get("result").is_none());
    }
}
