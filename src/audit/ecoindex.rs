//! The EcoIndex audit

use super::details::TableDetails;
use super::{Audit, AuditError, AuditMeta, AuditProduct, AuditResult, ScoreDisplayMode};
use crate::artifacts::Artifacts;
use crate::models::Measurement;
use crate::scoring::{evaluate, QUANTILES_DOM, QUANTILES_REQUESTS, QUANTILES_SIZE_MB};
use tracing::info;

/// Identifier the host registers this audit under
pub const ECOINDEX_AUDIT_ID: &str = "ecoindex";

/// Scores a page with EcoIndex from its network log and DOM statistics
#[derive(Debug, Clone, Default)]
pub struct EcoIndexAudit {
    strict: bool,
}

impl EcoIndexAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject measurements beyond the reference tables instead of scoring
    /// them at the saturated position
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the product for an already-known measurement
    pub fn audit_measurement(&self, measurement: &Measurement) -> AuditResult<AuditProduct> {
        if self.strict {
            validate_measurement(measurement)?;
        }
        let result = evaluate(measurement);

        info!(
            "EcoIndex {:.1} ({}): {} elements, {} requests, {} bytes",
            result.index,
            result.grade,
            result.dom_size,
            result.request_count,
            result.transferred_size_bytes
        );

        Ok(AuditProduct {
            score: result.normalized_score(),
            display_value: String::new(),
            details: TableDetails::for_result(&result),
            result,
        })
    }
}

impl Audit for EcoIndexAudit {
    fn meta(&self) -> AuditMeta {
        AuditMeta {
            id: ECOINDEX_AUDIT_ID,
            title: "Environmental impact is low",
            failure_title: "Environmental impact is too high",
            description: "The ecoindex evaluates the environmental performance achieved by a \
                website / online service with regard to objective technical parameters: \
                number of DOM elements, number of HTTP requests, URL weight (KB transferred).",
            score_display_mode: ScoreDisplayMode::Numeric,
            required_artifacts: vec!["devtoolsLogs", "DOMStats"],
        }
    }

    fn audit(&self, artifacts: &Artifacts) -> AuditResult<AuditProduct> {
        let measurement = Measurement::from_artifacts(artifacts)?;
        self.audit_measurement(&measurement)
    }
}

/// Check that every quantity lies within its reference distribution.
///
/// Past the last breakpoint a quantity no longer moves the index, so two
/// very different pages can share a score. The calculator accepts them;
/// strict audits do not.
pub fn validate_measurement(measurement: &Measurement) -> AuditResult<()> {
    let checks = [
        ("DOM size", measurement.dom_size as f64, &QUANTILES_DOM),
        ("request count", measurement.request_count as f64, &QUANTILES_REQUESTS),
        ("transferred size (MB)", measurement.transferred_size_mb(), &QUANTILES_SIZE_MB),
    ];

    for (name, value, table) in checks {
        let last = table[table.len() - 1];
        if value > last {
            return Err(AuditError::InvalidMeasurement(format!(
                "{} {} is beyond the last reference breakpoint {}",
                name, value, last
            )));
        }
    }
    Ok(())
}
