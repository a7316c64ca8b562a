//! CLI configuration: where the criteria and the audit log live.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level scorecard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorecardConfig {
    /// Criteria CSV source.
    #[serde(default = "default_criteria_path")]
    pub criteria_path: PathBuf,
    /// Append-only audit log sink.
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

fn default_criteria_path() -> PathBuf {
    PathBuf::from("criteria.csv")
}

fn default_log_path() -> PathBuf {
    PathBuf::from("audit_log.csv")
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        Self {
            criteria_path: default_criteria_path(),
            log_path: default_log_path(),
        }
    }
}

/// Load config from an explicit path, or `scorecard.toml` in the working
/// directory. No config file means defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<ScorecardConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("scorecard.toml");
        local.exists().then_some(local)
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(ScorecardConfig::default()),
    }
}
