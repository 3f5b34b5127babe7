//! # dm-report
//!
//! Markdown reports rendered from research JSON:
//! - **Market analysis** (`market_insights*.json`): segment table, trends,
//!   advanced features
//! - **Market summary** (`market_statistics.json`): personality assessment
//!   statistics and key trends
//! - **Daily summary** (`daily_trends.json`): one section per measured trend
//!
//! Renderers are pure: a typed document in, a `String` out. Missing fields
//! render as `N/A`. Loading and writing live in [`load_document`] and
//! [`write_report`]; [`generate`] chains the three.

mod cell;
mod daily_summary;
mod error;
mod load;
mod market_analysis;
mod market_summary;
mod pipeline;
mod write;

pub use cell::NOT_AVAILABLE;
pub use daily_summary::{DailySummary, render_daily_summary};
pub use error::ReportError;
pub use load::load_document;
pub use market_analysis::{MarketAnalysis, render_market_analysis};
pub use market_summary::{MarketSummary, render_market_summary};
pub use pipeline::{default_input_file, default_output_file, generate};
pub use write::{to_pretty_json, write_json, write_report};

/// Heading placeholder when a document carries no date.
pub const UNKNOWN_DATE: &str = "Data Desconhecida";
