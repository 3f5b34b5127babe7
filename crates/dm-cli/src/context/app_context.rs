use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use dm_config::DmConfig;
use dm_llm::{Generator, LlmError, RetryPolicy};

/// Everything a command handler needs: configuration, the data root and
/// the date used for dated file names.
pub struct AppContext {
    pub config: DmConfig,
    pub root: PathBuf,
    pub today: NaiveDate,
}

impl AppContext {
    pub fn init(root: PathBuf, config: DmConfig) -> Self {
        Self {
            config,
            root,
            today: Local::now().date_naive(),
        }
    }

    pub fn research_data_dir(&self) -> PathBuf {
        self.config.paths.research_data_dir(&self.root)
    }

    pub fn research_findings_dir(&self) -> PathBuf {
        self.config.paths.research_findings_dir(&self.root)
    }

    /// `path` if given, else `default_name` inside the research data directory.
    pub fn data_file(&self, path: Option<&Path>, default_name: &str) -> PathBuf {
        path.map_or_else(|| self.research_data_dir().join(default_name), Path::to_path_buf)
    }

    /// Build the configured text generator. The fixture backend falls back to
    /// `default_reply` when no fixture file is configured.
    pub fn generator(&self, default_reply: impl FnOnce() -> String) -> Result<Generator, LlmError> {
        Generator::from_config(&self.config.llm, &self.root, default_reply)
    }

    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::from_config(&self.config.llm)
    }
}
