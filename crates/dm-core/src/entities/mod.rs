//! Entity structs for all dialoga domain objects.
//!
//! Research documents mirror the JSON files under `research_data/`; the
//! remaining entities are the inputs and results of the LLM flows. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod digest;
mod market;
mod plan;
mod profile;
mod sentiment;
mod statistics;
mod trends;

pub use digest::{ResearchDigest, ResearchInsight};
pub use market::{MarketInsightRecord, MarketInsightsDocument, Projection, ProjectionYear};
pub use plan::{ActionPlan, PlanDay};
pub use profile::{DEFAULT_GOAL, ProfileInput};
pub use sentiment::{SentimentRecord, SentimentResult};
pub use statistics::{MarketStatistics, MarketStatisticsDocument, PersonalityAssessmentStats};
pub use trends::{DailyTrend, DailyTrendsDocument};
