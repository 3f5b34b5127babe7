use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// PAPP: a 7-day deep-processing action plan produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionPlan {
    pub title: String,
    pub introduction: String,
    pub days: Vec<PlanDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlanDay {
    pub day: u32,
    pub theme: String,
    pub task: String,
}
