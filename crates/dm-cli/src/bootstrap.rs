use std::path::{Path, PathBuf};

use anyhow::Context;
use dm_config::DmConfig;

/// Base directory for the configured data paths: `--root` or the current
/// directory.
pub fn resolve_root(root: Option<&Path>) -> anyhow::Result<PathBuf> {
    match root {
        Some(root) => {
            anyhow::ensure!(root.is_dir(), "root '{}' is not a directory", root.display());
            Ok(root.to_path_buf())
        }
        None => std::env::current_dir().context("failed to determine current directory"),
    }
}

/// Load `.env`, then the layered configuration for `root`.
pub fn load_config(root: &Path) -> anyhow::Result<DmConfig> {
    DmConfig::load_with_dotenv(root)
        .with_context(|| format!("failed to load configuration for {}", root.display()))
}
