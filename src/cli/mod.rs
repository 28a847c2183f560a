//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod inspect;
mod score;

pub use inspect::{run_inspect, InspectArgs};
pub use score::run_score;

use crate::config::{AppConfig, Validatable};
use anyhow::{bail, Result};

/// Reject invalid effective configuration before doing any work.
fn ensure_valid(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let listed: Vec<String> = errors.iter().map(ToString::to_string).collect();
    bail!("invalid configuration: {}", listed.join("; "))
}
