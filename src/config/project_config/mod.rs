//! Project-level configuration support
//!
//! Loads configuration from `ecoindex.toml` or `.ecoindexrc.json` in the
//! working directory, or from an explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # ecoindex.toml
//!
//! [audit]
//! pass_threshold = 0.5   # normalized score needed for the "low impact" title
//! fail_on = "E"          # exit 1 when a page is graded E or worse
//!
//! [defaults]
//! format = "text"
//! strict = false
//! ```

use crate::models::Grade;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Preferred config file name
pub const CONFIG_FILE_NAME: &str = "ecoindex.toml";

/// JSON alternative to `ecoindex.toml`
const JSON_CONFIG_FILE_NAME: &str = ".ecoindexrc.json";

/// Project-level configuration loaded from ecoindex.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Audit outcome settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Audit outcome settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Minimum normalized score (0-1) for an audit to pass (default: 0.5)
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f64,

    /// Grade at or below which the CLI exits with code 1
    #[serde(default)]
    pub fail_on: Option<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            pass_threshold: default_pass_threshold(),
            fail_on: None,
        }
    }
}

fn default_pass_threshold() -> f64 {
    0.5
}

impl AuditConfig {
    /// Parsed `fail_on` grade. Invalid values are logged and ignored.
    pub fn fail_on_grade(&self) -> Option<Grade> {
        let raw = self.fail_on.as_deref()?;
        match Grade::from_str(raw) {
            Ok(grade) => Some(grade),
            Err(e) => {
                warn!("Ignoring audit.fail_on: {}", e);
                None
            }
        }
    }
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Reject measurements beyond the reference tables by default
    #[serde(default)]
    pub strict: Option<bool>,
}

/// Load project configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `ecoindex.toml`
/// 2. `.ecoindexrc.json`
///
/// Returns default configuration if no usable config file is found.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    for name in [CONFIG_FILE_NAME, JSON_CONFIG_FILE_NAME] {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded project config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load a specific config file, picking the parser from its extension
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: ProjectConfig = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };

    if !(0.0..=1.0).contains(&config.audit.pass_threshold) {
        anyhow::bail!(
            "audit.pass_threshold must be between 0 and 1, got {}",
            config.audit.pass_threshold
        );
    }

    Ok(config)
}
