//! EcoIndex - environmental impact score for web pages
//!
//! Scores a page from its DOM size, request count and transferred bytes,
//! maps the score to a grade from A to G and estimates greenhouse gas
//! emission and water consumption. The `audit` module wraps the calculator
//! in the contract an auditing host expects.

pub mod artifacts;
pub mod audit;
pub mod cli;
pub mod config;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use models::{EcoIndexResult, Grade, Measurement};
pub use scoring::evaluate;
