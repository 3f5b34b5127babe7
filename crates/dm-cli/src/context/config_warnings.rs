use dm_config::DmConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &DmConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &DmConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.llm.is_configured() && has_single_underscore_key(&env_keys, "DIALOGA_LLM") {
        warnings.push(
            "LLM config appears default while DIALOGA_LLM_* env vars exist. Use double underscores (example: DIALOGA_LLM__API_KEY)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "DIALOGA_PATHS") {
        warnings.push(
            "DIALOGA_PATHS_* env vars are ignored. Use double underscores (example: DIALOGA_PATHS__RESEARCH_DATA)."
                .to_string(),
        );
    }

    warnings
}

/// `PREFIX_KEY` present without any `PREFIX__KEY` form.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let nested = format!("{prefix}__");
    let single = format!("{prefix}_");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&nested))
}

#[cfg(test)]
mod tests {
    use dm_config::{DmConfig, LlmBackend};

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &DmConfig::default(),
            env(&["DIALOGA_LLM_API_KEY", "DIALOGA_PATHS_RESEARCH_DATA"]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("DIALOGA_LLM__API_KEY"));
    }

    #[test]
    fn nested_keys_do_not_warn() {
        let warnings = collect_unconfigured_warnings(
            &DmConfig::default(),
            env(&["DIALOGA_LLM__MODEL", "DIALOGA_PATHS__RESEARCH_DATA", "HOME"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_llm_does_not_warn() {
        let mut config = DmConfig::default();
        config.llm.backend = LlmBackend::Fixture;
        let warnings = collect_unconfigured_warnings(&config, env(&["DIALOGA_LLM_TIMEOUT"]));
        assert!(warnings.is_empty());
    }
}
