//! EcoIndex calculator
//!
//! Quantile interpolation, the weighted composite index, grade buckets and
//! the two derived estimates.

use super::quantiles::{QUANTILES_DOM, QUANTILES_REQUESTS, QUANTILES_SIZE_MB};
use crate::models::{EcoIndexResult, Grade, Measurement};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Weights for DOM size, request count and transferred size
const DOM_WEIGHT: f64 = 3.0;
const REQUESTS_WEIGHT: f64 = 2.0;
const SIZE_WEIGHT: f64 = 1.0;

/// Grade lower bounds (exclusive), best grade first
const GRADE_THRESHOLDS: [(f64, Grade); 6] = [
    (80.0, Grade::A),
    (70.0, Grade::B),
    (55.0, Grade::C),
    (40.0, Grade::D),
    (25.0, Grade::E),
    (10.0, Grade::F),
];

/// Position of `value` within the distribution described by `quantiles`.
///
/// The integer part is the bucket the value falls into and the fractional
/// part is its linear position inside that bucket. A value equal to a
/// breakpoint sits at the start of the bucket opening there. Values at or
/// beyond the last breakpoint saturate to `quantiles.len() - 1`.
///
/// Consecutive breakpoints must differ: a zero-width bucket divides by zero
/// and yields a non-finite position. This is not checked.
pub fn compute_quantile(quantiles: &[f64], value: f64) -> f64 {
    for i in 1..quantiles.len() {
        if value < quantiles[i] {
            return (i - 1) as f64
                + (value - quantiles[i - 1]) / (quantiles[i] - quantiles[i - 1]);
        }
    }
    quantiles.len().saturating_sub(1) as f64
}

/// Composite index from the three measurements (size in megabytes).
///
/// Not rounded. Stays within 0-100 for inputs inside the reference tables.
pub fn compute_index(dom_size: f64, request_count: f64, size_mb: f64) -> f64 {
    let q_dom = compute_quantile(&QUANTILES_DOM, dom_size);
    let q_requests = compute_quantile(&QUANTILES_REQUESTS, request_count);
    let q_size = compute_quantile(&QUANTILES_SIZE_MB, size_mb);

    debug!(
        "EcoIndex quantiles: dom={:.3}, requests={:.3}, size={:.3}",
        q_dom, q_requests, q_size
    );

    100.0
        - 5.0 * (DOM_WEIGHT * q_dom + REQUESTS_WEIGHT * q_requests + SIZE_WEIGHT * q_size)
            / 6.0
}

/// Letter grade for an index. Thresholds are strict, so 80.0 is a B.
pub fn grade_from_index(index: f64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(bound, _)| index > *bound)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::G)
}

/// Estimated greenhouse gas emission in gCO2e
pub fn compute_greenhouse_gas_emission(index: f64) -> f64 {
    round2(2.0 + 2.0 * (50.0 - index) / 100.0)
}

/// Estimated water consumption in centilitres
pub fn compute_water_consumption(index: f64) -> f64 {
    round2(3.0 + 3.0 * (50.0 - index) / 100.0)
}

/// Round to 2 decimal places.
///
/// Rounds the exact decimal value of the double, halves away from zero. The
/// double nearest 1.525 lies just below it, so 1.525 becomes 1.52. Scaling by
/// 100 first would round the product instead and give 1.53.
pub fn round2(value: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    exact
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .unwrap_or(value)
}

/// Score a measurement end to end
pub fn evaluate(measurement: &Measurement) -> EcoIndexResult {
    let index = compute_index(
        measurement.dom_size as f64,
        measurement.request_count as f64,
        measurement.transferred_size_mb(),
    );
    let grade = grade_from_index(index);

    debug!("EcoIndex {:.2} ({}) for {:?}", index, grade, measurement);

    EcoIndexResult {
        index,
        grade,
        greenhouse_gas_emission: compute_greenhouse_gas_emission(index),
        water_consumption: compute_water_consumption(index),
        dom_size: measurement.dom_size,
        request_count: measurement.request_count,
        transferred_size_bytes: measurement.transferred_size_bytes,
    }
}

impl EcoIndexResult {
    pub fn from_measurement(measurement: &Measurement) -> Self {
        evaluate(measurement)
    }
}
