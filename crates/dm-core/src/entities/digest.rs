use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Figure;

/// Research digest written by the daily collector: recent neuroscience papers
/// and communication trends, each tagged with keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResearchDigest {
    pub last_updated: Option<String>,
    #[serde(default)]
    pub neuroscience_insights: Vec<ResearchInsight>,
    #[serde(default)]
    pub communication_trends: Vec<ResearchInsight>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResearchInsight {
    pub title: Option<Figure>,
    pub source: Option<String>,
    pub date: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ResearchDigest {
    /// Unique keywords across both lists, in first-seen order (neuroscience
    /// insights first).
    #[must_use]
    pub fn trend_keywords(&self) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();
        for insight in self
            .neuroscience_insights
            .iter()
            .chain(&self.communication_trends)
        {
            for keyword in &insight.keywords {
                if !keywords.contains(keyword) {
                    keywords.push(keyword.clone());
                }
            }
        }
        keywords
    }
}
