//! Errors raised by dm-core itself.
//!
//! Domain-specific errors (`ReportError`, `LlmError`, `ConfigError`) live in
//! their respective crates and map onto [`crate::enums::FailureKind`]. They
//! only converge into `anyhow` inside `dm-cli`.

use thiserror::Error;

/// Input rejected by a dm-core type.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (range, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::CoreError;

    #[test]
    fn validation_message_names_the_problem() {
        let error = CoreError::Validation("visual percentage must be within 0..=100".into());
        assert_eq!(
            error.to_string(),
            "Validation error: visual percentage must be within 0..=100"
        );
    }
}
