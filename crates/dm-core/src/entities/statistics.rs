use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Figure;

/// `market_statistics.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarketStatisticsDocument {
    pub last_updated: Option<String>,
    #[serde(default)]
    pub market_statistics: MarketStatistics,
    #[serde(default)]
    pub key_trends: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarketStatistics {
    pub personality_assessment_solutions: Option<PersonalityAssessmentStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PersonalityAssessmentStats {
    pub market_size_2025_usd_billion: Option<Figure>,
    pub market_size_2030_projected_usd_billion: Option<Figure>,
    pub cagr_2025_2030_percent: Option<Figure>,
    pub cagr_source: Option<String>,
    /// Keys this renderer does not know about. They still make the block
    /// non-empty.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl PersonalityAssessmentStats {
    /// True when the block is present but carries no key at all (`{}`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.market_size_2025_usd_billion.is_none()
            && self.market_size_2030_projected_usd_billion.is_none()
            && self.cagr_2025_2030_percent.is_none()
            && self.cagr_source.is_none()
            && self.other.is_empty()
    }
}
