//! Score command - score raw measurements without artifacts

use super::output::format_and_output;
use crate::audit::{Audit, EcoIndexAudit};
use crate::config::ProjectConfig;
use crate::models::Measurement;
use crate::reporters::PageReport;
use anyhow::Result;

/// Run the score command
pub fn run(
    measurement: Measurement,
    format: &str,
    strict: bool,
    config: &ProjectConfig,
) -> Result<()> {
    let audit = EcoIndexAudit::new().with_strict(strict);
    let product = audit.audit_measurement(&measurement)?;
    let threshold = config.audit.pass_threshold;

    let page = PageReport {
        source: format!(
            "{} elements, {} requests, {} bytes",
            measurement.dom_size, measurement.request_count, measurement.transferred_size_bytes
        ),
        title: product.title(&audit.meta(), threshold).to_string(),
        passed: product.passed(threshold),
        product,
    };

    format_and_output(&[page], format, None)
}
