use std::path::Path;

use anyhow::Context;
use dm_core::responses::ValidationResponse;
use dm_schema::{SchemaError, SchemaRegistry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::output::output;

/// Handle `dialoga validate`.
pub fn handle(args: &ValidateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = validate_file(&SchemaRegistry::new(), &args.schema, &args.file)?;
    output(&response, flags.format)
}

/// Validation failures are part of the response; only an unreadable file or
/// an unknown schema is an error.
fn validate_file(
    registry: &SchemaRegistry,
    schema: &str,
    file: &Path,
) -> anyhow::Result<ValidationResponse> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let instance: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let errors = match registry.validate(schema, &instance) {
        Ok(()) => Vec::new(),
        Err(SchemaError::Invalid { errors, .. }) => errors,
        Err(error) => return Err(error.into()),
    };

    Ok(ValidationResponse {
        schema: schema.to_string(),
        file: file.to_path_buf(),
        valid: errors.is_empty(),
        errors,
    })
}
