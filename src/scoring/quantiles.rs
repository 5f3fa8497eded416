//! Reference distributions calibrated on ecoindex.fr page samples.
//!
//! Each table holds 21 breakpoints starting at 0. The last breakpoint is an
//! extreme upper bound; values at or above it saturate to position 20.

/// Number of breakpoints per table
pub const QUANTILE_COUNT: usize = 21;

/// DOM element count breakpoints
pub static QUANTILES_DOM: [f64; QUANTILE_COUNT] = [
    0.0, 47.0, 75.0, 159.0, 233.0, 298.0, 358.0, 417.0, 476.0, 537.0, 603.0, 674.0, 753.0, 843.0,
    949.0, 1076.0, 1237.0, 1459.0, 1801.0, 2479.0, 594601.0,
];

/// Request count breakpoints
pub static QUANTILES_REQUESTS: [f64; QUANTILE_COUNT] = [
    0.0, 2.0, 15.0, 25.0, 34.0, 42.0, 49.0, 56.0, 63.0, 70.0, 78.0, 86.0, 95.0, 105.0, 117.0,
    130.0, 147.0, 170.0, 205.0, 281.0, 3920.0,
];

/// Transferred size breakpoints, in megabytes
pub static QUANTILES_SIZE_MB: [f64; QUANTILE_COUNT] = [
    0.0, 1.37, 144.7, 319.53, 479.46, 631.97, 783.38, 937.91, 1098.62, 1265.47, 1448.32, 1648.27,
    1876.08, 2142.06, 2465.37, 2866.31, 3401.59, 4155.73, 5400.08, 8037.54, 223212.26,
];
