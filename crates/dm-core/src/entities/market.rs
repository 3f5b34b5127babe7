use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Figure;

/// `market_insights*.json`: dated market segments plus strategic trend lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarketInsightsDocument {
    pub date: Option<String>,
    /// Segment key → record, in file order.
    #[serde(default)]
    pub market_insights: IndexMap<String, MarketInsightRecord>,
    #[serde(default)]
    pub trends: Vec<String>,
    #[serde(default)]
    pub advanced_feature_focus: Vec<String>,
}

/// Size estimates for one market segment.
///
/// Files carry one of two alternative projection fields; see
/// [`MarketInsightRecord::projection`] for how they are reconciled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarketInsightRecord {
    pub title: Option<Figure>,
    pub size_2024_billion_usd: Option<Figure>,
    pub cagr_percent: Option<Figure>,
    pub size_2031_billion_usd: Option<Figure>,
    pub size_2033_billion_usd: Option<Figure>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionYear {
    Y2031,
    Y2033,
}

impl ProjectionYear {
    #[must_use]
    pub const fn year(self) -> u16 {
        match self {
            Self::Y2031 => 2031,
            Self::Y2033 => 2033,
        }
    }
}

/// A projected market size together with the horizon it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    pub value: &'a Figure,
    pub year: ProjectionYear,
}

impl MarketInsightRecord {
    /// Pick the projected size for this segment.
    ///
    /// `size_2031_billion_usd` takes precedence over `size_2033_billion_usd`
    /// when both are present. A JSON `null` counts as absent.
    #[must_use]
    pub fn projection(&self) -> Option<Projection<'_>> {
        if let Some(value) = &self.size_2031_billion_usd {
            return Some(Projection {
                value,
                year: ProjectionYear::Y2031,
            });
        }
        self.size_2033_billion_usd.as_ref().map(|value| Projection {
            value,
            year: ProjectionYear::Y2033,
        })
    }
}
