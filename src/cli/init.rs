//! Init command - write a default ecoindex.toml

use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# EcoIndex Configuration

[audit]
# Minimum normalized score (EcoIndex / 100) for "Environmental impact is low"
pass_threshold = 0.5

# Exit with code 1 when a page is graded this or worse (A-G)
# fail_on = "E"

[defaults]
# Default output format (text, json, markdown)
format = "text"

# Reject pages with measurements beyond the reference tables
strict = false
"#;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let dir = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists, not overwriting",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| "Failed to create config file")?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );

    println!("\nNext steps:");
    println!("  {} Audit a page", style("ecoindex audit page.json").cyan());
    println!(
        "  {} Score raw numbers",
        style("ecoindex score --dom 800 --requests 60 --bytes 2400000").cyan()
    );

    Ok(())
}
