//! JSON reporter
//!
//! Outputs the page reports as a pretty-printed JSON array.
//! Useful for machine consumption, piping to jq, or feeding a host UI.

use super::PageReport;
use anyhow::Result;

/// Render reports as JSON
pub fn render(pages: &[PageReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(pages)?)
}
