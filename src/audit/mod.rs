//! Audit contract between the EcoIndex calculator and an auditing host
//!
//! This module defines:
//! - `Audit` trait the host drives with collected page artifacts
//! - `AuditMeta` describing an audit to the host
//! - `AuditProduct` carrying the normalized score and table details
//! - `PluginConfig` registering the audit into a host category
//!
//! # Example
//!
//! ```rust,ignore
//! use ecoindex::artifacts::Artifacts;
//! use ecoindex::audit::{Audit, EcoIndexAudit};
//!
//! let artifacts = Artifacts::load(Path::new("page.json"))?;
//! let product = EcoIndexAudit::new().audit(&artifacts)?;
//! println!("{} -> {}", product.result.grade, product.score);
//! ```

mod details;
mod ecoindex;
mod plugin;

pub use details::{ItemType, TableDetails, TableHeading, TableItem, ECOINDEX_HEADINGS};
pub use ecoindex::{validate_measurement, EcoIndexAudit, ECOINDEX_AUDIT_ID};
pub use plugin::{AuditPath, AuditRef, Category, PluginConfig};

use crate::artifacts::Artifacts;
use crate::models::EcoIndexResult;
use serde::Serialize;
use thiserror::Error;

/// Errors raised at the artifact and audit boundary
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Missing required artifact: {0}")]
    MissingArtifact(&'static str),

    #[error("Failed to parse artifacts: {0}")]
    Parse(String),

    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AuditResult<T> = Result<T, AuditError>;

/// How the host should present an audit score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreDisplayMode {
    /// Score shown as a 0-1 gauge
    Numeric,
}

/// Static description of an audit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    pub id: &'static str,
    /// Shown when the audit passes
    pub title: &'static str,
    /// Shown when the audit fails
    pub failure_title: &'static str,
    pub description: &'static str,
    pub score_display_mode: ScoreDisplayMode,
    /// Artifacts the host must collect before calling `audit`
    pub required_artifacts: Vec<&'static str>,
}

/// What an audit hands back to the host
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditProduct {
    /// `index / 100`, not clamped
    pub score: f64,
    pub display_value: String,
    pub details: TableDetails,
    /// Full scoring result behind the table
    pub result: EcoIndexResult,
}

impl AuditProduct {
    /// Whether the score reaches `threshold` (0-1 scale)
    pub fn passed(&self, threshold: f64) -> bool {
        self.score >= threshold
    }

    /// Title the host shows for this product
    pub fn title(&self, meta: &AuditMeta, threshold: f64) -> &'static str {
        if self.passed(threshold) {
            meta.title
        } else {
            meta.failure_title
        }
    }
}

/// Trait for audits a host can run
///
/// Implementations are stateless with respect to a single page: `audit` may
/// be called concurrently for different artifacts.
pub trait Audit: Send + Sync {
    /// Metadata the host uses to schedule and present the audit
    fn meta(&self) -> AuditMeta;

    /// Run the audit against collected artifacts
    fn audit(&self, artifacts: &Artifacts) -> AuditResult<AuditProduct>;
}
