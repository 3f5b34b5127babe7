//! Errors from looking up a research schema or checking a document against it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under this name.
    #[error("unknown schema '{name}' (available: {})", available.join(", "))]
    UnknownSchema {
        name: String,
        available: Vec<&'static str>,
    },

    /// The document does not conform; one message per violation.
    #[error("document does not match schema '{schema}' ({} violation(s))", errors.len())]
    Invalid { schema: String, errors: Vec<String> },

    /// The generated schema could not be compiled into a validator.
    #[error("schema '{schema}' cannot be compiled: {message}")]
    Compile { schema: String, message: String },
}
