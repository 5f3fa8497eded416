//! Host artifact adapter
//!
//! The auditing host collects page data (the network request log and a DOM
//! statistics snapshot) and hands it over as JSON. This module reads that
//! document and reduces it to a [`Measurement`].
//!
//! # Artifact Format
//!
//! ```json
//! {
//!   "url": "https://example.org/",
//!   "networkRequests": [
//!     { "url": "https://example.org/", "transferSize": 10240, "resourceType": "Document" },
//!     { "url": "https://example.org/app.js", "transferSize": 52311 }
//!   ],
//!   "DOMStats": { "totalBodyElements": 412 }
//! }
//! ```

use crate::audit::{AuditError, AuditResult};
use crate::models::Measurement;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One record from the host's network log
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRequest {
    #[serde(default)]
    pub url: Option<String>,
    /// Bytes on the wire, absent for cached or non-network requests.
    /// The host reports a plain JSON number, possibly fractional.
    #[serde(default)]
    pub transfer_size: Option<f64>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// DOM statistics snapshot
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DomStats {
    pub total_body_elements: u64,
}

/// Artifacts supplied by the host for a single page load
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Artifacts {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "networkRequests")]
    pub network_requests: Vec<NetworkRequest>,
    #[serde(default, rename = "DOMStats")]
    pub dom_stats: Option<DomStats>,
}

impl Artifacts {
    /// Parse artifacts from a JSON document
    pub fn from_json(content: &str) -> AuditResult<Self> {
        serde_json::from_str(content).map_err(|e| AuditError::Parse(e.to_string()))
    }

    /// Read and parse an artifacts file
    pub fn load(path: &Path) -> AuditResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let artifacts = Self::from_json(&content)?;
        debug!(
            "Loaded {} network requests from {}",
            artifacts.network_requests.len(),
            path.display()
        );
        Ok(artifacts)
    }

    /// Sum of transfer sizes, in whole bytes.
    ///
    /// Requests without a positive size contribute nothing. The sum runs in
    /// floating point and the fraction is dropped afterwards, which never
    /// moves the megabyte rounding. Sums past `u64::MAX` saturate.
    pub fn transferred_bytes(&self) -> u64 {
        let total: f64 = self
            .network_requests
            .iter()
            .filter_map(|r| r.transfer_size)
            .filter(|size| *size > 0.0)
            .sum();
        total as u64
    }
}

impl Measurement {
    /// Reduce host artifacts to the three scored quantities.
    ///
    /// Every record counts as a request, including those without a
    /// transfer size.
    pub fn from_artifacts(artifacts: &Artifacts) -> AuditResult<Self> {
        let dom_stats = artifacts
            .dom_stats
            .as_ref()
            .ok_or(AuditError::MissingArtifact("DOMStats"))?;

        Ok(Measurement::new(
            dom_stats.total_body_elements,
            artifacts.network_requests.len() as u64,
            artifacts.transferred_bytes(),
        ))
    }
}
