//! Core data models for EcoIndex
//!
//! These are plain value types: a measurement goes in, a result comes out,
//! and neither is mutated after construction.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bytes per megabyte used when converting transferred size for indexing
pub const BYTES_PER_MB: f64 = 1_000_000.0;

/// EcoIndex letter grade, `A` (lowest impact) to `G` (highest impact)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Grade {
    /// All grades from best to worst
    pub const ALL: [Grade; 7] = [
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::E,
        Grade::F,
        Grade::G,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
            Grade::G => "G",
        }
    }

    /// True when `self` is the same grade as `other` or worse
    pub fn is_at_or_worse_than(&self, other: Grade) -> bool {
        *self >= other
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "E" => Ok(Grade::E),
            "F" => Ok(Grade::F),
            "G" => Ok(Grade::G),
            _ => Err(anyhow::anyhow!(
                "Unknown grade '{}'. Valid grades: A, B, C, D, E, F, G",
                s
            )),
        }
    }
}

/// Raw page measurements fed to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Number of elements in the page body
    pub dom_size: u64,
    /// Number of network requests made during the page load
    pub request_count: u64,
    /// Total transferred bytes over all requests
    pub transferred_size_bytes: u64,
}

impl Measurement {
    pub fn new(dom_size: u64, request_count: u64, transferred_size_bytes: u64) -> Self {
        Self {
            dom_size,
            request_count,
            transferred_size_bytes,
        }
    }

    /// Transferred size in whole megabytes, rounded to the nearest integer
    pub fn transferred_size_mb(&self) -> f64 {
        (self.transferred_size_bytes as f64 / BYTES_PER_MB).round()
    }
}

/// Outcome of scoring a single measurement
///
/// Serialized with the host's result keys (`ecoIndex`, `numberOfRequests`...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoIndexResult {
    /// Composite index, nominally 0-100 (higher is better), never rounded
    #[serde(rename = "ecoIndex")]
    pub index: f64,
    pub grade: Grade,
    /// Estimated emissions in gCO2e, 2 decimals
    #[serde(rename = "greenhouseGasesEmission")]
    pub greenhouse_gas_emission: f64,
    /// Estimated water consumption in centilitres, 2 decimals
    pub water_consumption: f64,
    pub dom_size: u64,
    #[serde(rename = "numberOfRequests")]
    pub request_count: u64,
    #[serde(rename = "sizeOfRequests")]
    pub transferred_size_bytes: u64,
}

impl EcoIndexResult {
    /// Normalized score for hosts that expect 0-1 (not clamped)
    pub fn normalized_score(&self) -> f64 {
        self.index / 100.0
    }

    /// Echo of the measurement this result was computed from
    pub fn measurement(&self) -> Measurement {
        Measurement::new(self.dom_size, self.request_count, self.transferred_size_bytes)
    }
}
