//! Configuration module for cert-authenticity.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for configuration values and scoring tables
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```
//! use cert_authenticity::config::{AppConfig, Validatable};
//! use cert_authenticity::reports::ReportFormat;
//!
//! let config = AppConfig::builder()
//!     .output_format(ReportFormat::Json)
//!     .min_score(Some(70.0))
//!     .seed(Some(42))
//!     .build();
//!
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.cert-authenticity.yaml` file in your project root or
//! `~/.config/cert-authenticity/`:
//!
//! ```yaml
//! output:
//!   format: json
//! behavior:
//!   min_score: 70
//! analysis:
//!   seed: 42
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AnalysisConfig, AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig,
    DEFAULT_TEXT_PREVIEW_CHARS,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    default_config_path, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Documents every option accepted in `.cert-authenticity.yaml`.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
