//! Shared types, error model, and configuration for CareerDocs.
//!
//! This crate is the foundation depended on by all other CareerDocs crates.
//! It provides:
//! - [`CareerDocsError`] — the unified error type
//! - The applicant model ([`ApplicantProfile`], [`FieldKey`], the [`FIELDS`] table)
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, config_dir, config_file_path, expand_home, init_config,
    load_config, load_config_from,
};
pub use error::{CareerDocsError, Result};
pub use types::{ApplicantProfile, FIELDS, FieldKey, FieldSpec, load_profile_from};
