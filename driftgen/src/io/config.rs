//! Generator configuration stored in `.driftgen.toml` at the repository root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// File name looked up at the root of the target repository.
pub const CONFIG_FILE: &str = ".driftgen.toml";

/// Generator configuration (TOML).
///
/// Every field is optional; missing fields fall back to the defaults below.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GenConfig {
    pub identity: IdentityConfig,
}

/// Commit identity written into repositories created by `seed`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IdentityConfig {
    pub name: String,
    pub email: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: "Drift Generator".to_string(),
            email: "driftgen@local.invalid".to_string(),
        }
    }
}

impl GenConfig {
    pub fn validate(&self) -> Result<()> {
        if self.identity.name.trim().is_empty() {
            return Err(anyhow!("identity.name must not be empty"));
        }
        if self.identity.email.trim().is_empty() {
            return Err(anyhow!("identity.email must not be empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GenConfig::default()`.
pub fn load_config(path: &Path) -> Result<GenConfig> {
    if !path.exists() {
        return Ok(GenConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GenConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
