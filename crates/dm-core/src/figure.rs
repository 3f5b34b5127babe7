//! Loosely-typed figures found in research JSON.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that research files write either as a JSON number or as text
/// (`12.5`, `"~12"`). Display fields use it too, so a label that happens to
/// be numeric (`"title": 2024`) renders instead of rejecting the document.
///
/// Numbers render exactly as JSON wrote them, so `9` stays `9` and `10.0`
/// stays `10.0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Figure {
    Number(serde_json::Number),
    Text(String),
}

impl From<f64> for Figure {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or_else(|| Self::Text(value.to_string()), Self::Number)
    }
}

impl From<i64> for Figure {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Figure {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
