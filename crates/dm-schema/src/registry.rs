//! Central schema registry for all dialoga types.
//!
//! The `SchemaRegistry` builds JSON Schemas from dm-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the dialoga system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).expect("schemars output is valid JSON"),
        );
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the research document, LLM result,
    /// and response schemas from dm-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Research documents (4) ---
        register!(
            schemas,
            "market_insights",
            dm_core::entities::MarketInsightsDocument
        );
        register!(
            schemas,
            "market_statistics",
            dm_core::entities::MarketStatisticsDocument
        );
        register!(schemas, "daily_trends", dm_core::entities::DailyTrendsDocument);
        register!(schemas, "research_digest", dm_core::entities::ResearchDigest);

        // --- LLM inputs and results (4) ---
        register!(schemas, "profile_input", dm_core::entities::ProfileInput);
        register!(schemas, "action_plan", dm_core::entities::ActionPlan);
        register!(schemas, "sentiment_result", dm_core::entities::SentimentResult);
        register!(schemas, "sentiment_record", dm_core::entities::SentimentRecord);

        // --- Outcomes (4) ---
        register!(
            schemas,
            "sentiment_outcome",
            dm_core::responses::SentimentOutcome
        );
        register!(schemas, "plan_outcome", dm_core::responses::PlanOutcome);
        register!(schemas, "failure_report", dm_core::responses::FailureReport);
        register!(
            schemas,
            "summary_statistics",
            dm_core::responses::SummaryStatistics
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownSchema`] if the name is not registered,
    /// [`SchemaError::Invalid`] listing every violation, or
    /// [`SchemaError::Compile`] if the stored schema cannot be compiled.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self.get(name).ok_or_else(|| SchemaError::UnknownSchema {
            name: name.to_string(),
            available: self.list(),
        })?;

        let validator = jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile {
            schema: name.to_string(),
            message: e.to_string(),
        })?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{}: {e}", e.instance_path))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Invalid {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
