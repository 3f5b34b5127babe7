//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use dm_config::{DmConfig, LlmBackend};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_llm_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[llm]
backend = "fixture"
endpoint = "http://localhost:8080/v1"
api_key = "sk-toml"
papp_model = "gpt-4o-mini"
sentiment_model = "gpt-4o-mini"
sentiment_temperature = 0.1
sentiment_max_tokens = 256
timeout_secs = 15
max_retries = 0
retry_backoff_ms = 10
fixture_path = "./reply.json"
"#,
        )?;

        let config: DmConfig = Figment::from(Serialized::defaults(DmConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.llm.backend, LlmBackend::Fixture);
        assert_eq!(config.llm.endpoint, "http://localhost:8080/v1");
        assert_eq!(config.llm.api_key, "sk-toml");
        assert_eq!(config.llm.papp_model, "gpt-4o-mini");
        assert!((config.llm.sentiment_temperature - 0.1).abs() < f32::EPSILON);
        assert_eq!(config.llm.sentiment_max_tokens, 256);
        assert_eq!(config.llm.timeout_secs, 15);
        assert_eq!(config.llm.max_retries, 0);
        assert_eq!(config.llm.retry_backoff_ms, 10);
        assert_eq!(
            config.llm.fixture_path(std::path::Path::new("/proj")),
            Some(std::path::PathBuf::from("/proj/reply.json"))
        );
        Ok(())
    });
}

#[test]
fn loads_paths_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[paths]
research_data = "data/in"
research_findings = "data/out"
"#,
        )?;

        let config: DmConfig = Figment::from(Serialized::defaults(DmConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.paths.research_data, "data/in");
        assert_eq!(config.paths.research_findings, "data/out");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[llm]
api_key = "sk-partial"
"#,
        )?;

        let config: DmConfig = Figment::from(Serialized::defaults(DmConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.llm.api_key, "sk-partial");
        assert_eq!(config.llm.papp_model, "gemini-2.5-flash");
        assert_eq!(config.llm.sentiment_max_tokens, 500);
        assert!(config.llm.is_configured());
        assert_eq!(config.paths.research_data, "research_data");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_from_root() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dialoga")?;
        jail.create_file(
            ".dialoga/config.toml",
            r#"
[llm]
backend = "fixture"
"#,
        )?;

        let config = DmConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config.llm.backend, LlmBackend::Fixture);
        Ok(())
    });
}

#[test]
fn invalid_backend_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dialoga")?;
        jail.create_file(
            ".dialoga/config.toml",
            r#"
[llm]
backend = "carrier-pigeon"
"#,
        )?;

        assert!(DmConfig::load(jail.directory()).is_err());
        Ok(())
    });
}
