//! Plugin command - print what a host needs to register the audit

use crate::audit::{Audit, EcoIndexAudit, PluginConfig};
use anyhow::Result;
use serde_json::json;

/// Run the plugin command
pub fn run() -> Result<()> {
    println!("{}", registration_json()?);
    Ok(())
}

fn registration_json() -> Result<String> {
    let value = json!({
        "plugin": PluginConfig::ecoindex(),
        "audits": [EcoIndexAudit::new().meta()],
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
