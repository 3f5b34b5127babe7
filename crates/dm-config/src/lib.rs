//! # dm-config
//!
//! Layered configuration loading for dialoga using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DIALOGA_*` prefix, `__` as separator)
//! 2. `OPENAI_API_KEY`, mapped onto `llm.api_key`
//! 3. Project-level `.dialoga/config.toml`
//! 4. User-level `~/.config/dialoga/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DIALOGA_LLM__MODEL` -> `llm.model`,
//! `DIALOGA_PATHS__RESEARCH_DATA` -> `paths.research_data`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use dm_config::DmConfig;
//!
//! let config = DmConfig::load_with_dotenv(Path::new(".")).expect("config");
//!
//! if config.llm.is_configured() {
//!     println!("LLM endpoint: {}", config.llm.endpoint);
//! }
//! ```

mod error;
mod llm;
mod paths;

pub use error::ConfigError;
pub use llm::{LlmBackend, LlmConfig};
pub use paths::PathsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DmConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

impl DmConfig {
    /// Load configuration for the project rooted at `root`.
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a TOML file is malformed or a value
    /// has the wrong type.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::figment(root).extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `<root>/.env` if present, otherwise the first `.env` found from
    /// the current directory upwards, then builds the figment.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv(root: &Path) -> Result<Self, ConfigError> {
        Self::load_dotenv(root);
        Self::load(root)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = root.join(".dialoga").join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: the conventional OpenAI credential variable
        figment = figment.merge(
            Env::raw()
                .only(&["OPENAI_API_KEY"])
                .map(|_| "llm.api_key".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("DIALOGA_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dialoga").join("config.toml"))
    }

    fn load_dotenv(root: &Path) {
        let env_path = root.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
            return;
        }
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = DmConfig::default();
        assert!(!config.llm.is_configured());
        assert_eq!(config.llm.backend, LlmBackend::Http);
        assert_eq!(config.paths.research_data, "research_data");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|jail| {
            let config: DmConfig = DmConfig::figment(jail.directory()).extract()?;
            assert_eq!(config.llm.max_retries, 2);
            assert_eq!(config.paths.research_findings, "research_findings");
            Ok(())
        });
    }
}
