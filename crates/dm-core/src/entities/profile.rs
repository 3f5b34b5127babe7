use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Goal used when the profile does not state one.
pub const DEFAULT_GOAL: &str = "melhorar a comunicação interpessoal";

fn default_goal() -> String {
    DEFAULT_GOAL.to_string()
}

/// A VAK (Visual/Auditory/Kinesthetic) learning profile plus the user's goal.
///
/// The three percentages conceptually sum to 100. That is not enforced; see
/// [`ProfileInput::is_balanced`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProfileInput {
    #[serde(default)]
    pub visual: f64,
    #[serde(default, alias = "auditivo")]
    pub auditory: f64,
    #[serde(default, alias = "cinestesico")]
    pub kinesthetic: f64,
    #[serde(default = "default_goal", alias = "objetivo")]
    pub goal: String,
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            visual: 0.0,
            auditory: 0.0,
            kinesthetic: 0.0,
            goal: default_goal(),
        }
    }
}

impl ProfileInput {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.visual + self.auditory + self.kinesthetic
    }

    /// Whether the split adds up to 100 (half a point of slack for rounding).
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        (self.total() - 100.0).abs() <= 0.5
    }

    /// Reject percentages outside `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first offending modality.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in [
            ("visual", self.visual),
            ("auditory", self.auditory),
            ("kinesthetic", self.kinesthetic),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(CoreError::Validation(format!(
                    "{name} percentage must be within 0..=100, got {value}"
                )));
            }
        }
        Ok(())
    }
}
