//! Rendering, writing and CI exit handling shared by commands

use crate::models::Grade;
use crate::reporters::{self, OutputFormat, PageReport};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Render pages and print them, or write them to `output_path`.
///
/// An output path without an extension gets the format's extension.
pub(super) fn format_and_output(
    pages: &[PageReport],
    format: &str,
    output_path: Option<&Path>,
) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    debug!("Rendering {} page(s) as {}", pages.len(), format);
    let output = reporters::report_with_format(pages, format)?;

    if let Some(path) = output_path {
        let out_path = reporters::output_path_for(path, format);
        std::fs::write(&out_path, &output)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
        // stderr keeps stdout clean for machine-readable formats
        eprintln!(
            "Report written to: {}",
            style(out_path.display()).cyan()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Worst grade among the pages, if any page is at or below `threshold`
pub(super) fn worst_failing_grade(pages: &[PageReport], threshold: Grade) -> Option<Grade> {
    pages
        .iter()
        .map(|p| p.product.result.grade)
        .filter(|g| g.is_at_or_worse_than(threshold))
        .max()
}

/// Parse the CLI --fail-on value, falling back to the config grade
pub(super) fn resolve_fail_on(
    cli_value: Option<String>,
    config_grade: Option<Grade>,
) -> Result<Option<Grade>> {
    match cli_value {
        Some(raw) => Ok(Some(Grade::from_str(&raw)?)),
        None => Ok(config_grade),
    }
}

/// Exit with code 1 if the fail threshold is met
pub(super) fn check_fail_threshold(fail_on: Option<Grade>, pages: &[PageReport]) {
    let Some(threshold) = fail_on else {
        return;
    };
    if let Some(worst) = worst_failing_grade(pages, threshold) {
        eprintln!(
            "Failing due to --fail-on={} threshold (worst grade: {})",
            threshold, worst
        );
        std::process::exit(1);
    }
}
