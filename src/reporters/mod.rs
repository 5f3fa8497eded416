//! Output reporters for EcoIndex audit results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::audit::AuditProduct;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Audit outcome for one page, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    /// Page URL, or the artifacts file when the URL is unknown
    pub source: String,
    /// Pass/fail title from the audit metadata
    pub title: String,
    pub passed: bool,
    #[serde(flatten)]
    pub product: AuditProduct,
}

/// Render page reports in the specified format
pub fn report_with_format(pages: &[PageReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(pages),
        OutputFormat::Json => json::render(pages),
        OutputFormat::Markdown => markdown::render(pages),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

/// `path` with the format's extension added when it has none
pub fn output_path_for(path: &Path, format: OutputFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(file_extension(format))
    }
}
