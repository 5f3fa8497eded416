//! Audit command - score host artifact files

use super::output::{check_fail_threshold, format_and_output, resolve_fail_on};
use crate::artifacts::Artifacts;
use crate::audit::{Audit, EcoIndexAudit};
use crate::config::ProjectConfig;
use crate::reporters::PageReport;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Run the audit command
pub fn run(
    paths: &[PathBuf],
    format: &str,
    output: Option<&Path>,
    fail_on: Option<String>,
    strict: bool,
    config: &ProjectConfig,
) -> Result<()> {
    let fail_on = resolve_fail_on(fail_on, config.audit.fail_on_grade())?;
    let audit = EcoIndexAudit::new().with_strict(strict);

    let start = Instant::now();
    let pages = audit_files(&audit, paths, config.audit.pass_threshold)?;
    info!(
        "Audited {} page(s) in {:.1}ms",
        pages.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    format_and_output(&pages, format, output)?;
    check_fail_threshold(fail_on, &pages);
    Ok(())
}

/// Audit every file in parallel, keeping input order
pub(super) fn audit_files(
    audit: &EcoIndexAudit,
    paths: &[PathBuf],
    pass_threshold: f64,
) -> Result<Vec<PageReport>> {
    paths
        .par_iter()
        .map(|path| audit_file(audit, path, pass_threshold))
        .collect()
}

fn audit_file(audit: &EcoIndexAudit, path: &Path, pass_threshold: f64) -> Result<PageReport> {
    let artifacts =
        Artifacts::load(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let product = audit
        .audit(&artifacts)
        .with_context(|| format!("Failed to audit {}", path.display()))?;

    let meta = audit.meta();
    Ok(PageReport {
        source: artifacts
            .url
            .clone()
            .unwrap_or_else(|| path.display().to_string()),
        title: product.title(&meta, pass_threshold).to_string(),
        passed: product.passed(pass_threshold),
        product,
    })
}
