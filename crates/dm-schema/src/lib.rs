//! # dm-schema
//!
//! JSON Schema generation, validation, and registry for dialoga.
//!
//! Entity types are defined in `dm-core` with `#[derive(JsonSchema)]`. This
//! crate builds their schemas once and validates arbitrary JSON against them:
//! research files before rendering (`dialoga validate`) and schema export for
//! whoever produces those files (`dialoga schema`).

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
