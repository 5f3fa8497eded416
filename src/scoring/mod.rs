//! EcoIndex scoring
//!
//! Scores a page from three measurements against calibrated reference
//! distributions, then derives a grade and environmental estimates.
//!
//! # Scoring Formula
//!
//! ```text
//! q_x   = quantile position of measurement x in its reference table (0-20)
//! Index = 100 - 5 × (3 × q_dom + 2 × q_requests + q_size) / 6
//!
//! GHG   = 2 + 2 × (50 - Index) / 100    (gCO2e, 2 decimals)
//! Water = 3 + 3 × (50 - Index) / 100    (cl, 2 decimals)
//! ```
//!
//! # Grades
//!
//! | Index  | Grade |
//! |--------|-------|
//! | > 80   | A     |
//! | > 70   | B     |
//! | > 55   | C     |
//! | > 40   | D     |
//! | > 25   | E     |
//! | > 10   | F     |
//! | else   | G     |
//!
//! Every function here is pure; call them from as many threads as you like.

mod calculator;
mod quantiles;

pub use calculator::{
    compute_greenhouse_gas_emission, compute_index, compute_quantile, compute_water_consumption,
    evaluate, grade_from_index, round2,
};
pub use quantiles::{QUANTILES_DOM, QUANTILES_REQUESTS, QUANTILES_SIZE_MB, QUANTILE_COUNT};
