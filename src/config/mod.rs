//! Configuration module for EcoIndex
//!
//! This module handles:
//! - Project-level configuration (ecoindex.toml)
//! - Audit pass threshold and CI failure grade
//! - CLI defaults

mod project_config;

pub use project_config::{
    AuditConfig,
    CliDefaults,
    ProjectConfig,
    load_config_file,
    load_project_config,
    CONFIG_FILE_NAME,
};
