use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Figure;

/// `daily_trends.json` as consumed by the daily summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyTrendsDocument {
    pub date: Option<String>,
    #[serde(default)]
    pub trends: Vec<DailyTrend>,
}

/// One measured communication or perception trend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyTrend {
    pub name: Option<Figure>,
    /// Visual, Auditivo or Cinestésico, as written by the collector.
    pub vak_type: Option<Figure>,
    pub metric: Option<Figure>,
    pub value: Option<Figure>,
    pub unit: Option<Figure>,
    pub description: Option<Figure>,
}
