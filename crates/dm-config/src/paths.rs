//! Where research data is read from and findings are written to.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_research_data() -> String {
    String::from("research_data")
}

fn default_research_findings() -> String {
    String::from("research_findings")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Input JSON directory. Relative paths resolve against the project root.
    #[serde(default = "default_research_data")]
    pub research_data: String,

    /// Output directory for generated summaries and LLM results.
    #[serde(default = "default_research_findings")]
    pub research_findings: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            research_data: default_research_data(),
            research_findings: default_research_findings(),
        }
    }
}

impl PathsConfig {
    #[must_use]
    pub fn research_data_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.research_data)
    }

    #[must_use]
    pub fn research_findings_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.research_findings)
    }
}
