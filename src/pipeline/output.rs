//! Where verdict reports go and how they look there.
//!
//! Interactive terminals get the colored summary. Pipes and verdict files get
//! JSON, and a summary written to a file never carries ANSI escapes.

use crate::config::OutputConfig;
use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Destination for rendered verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write a verdict file
    File(PathBuf),
}

impl OutputTarget {
    /// Target named by the output section of the configuration
    #[must_use]
    pub fn from_config(output: &OutputConfig) -> Self {
        output.file.clone().map_or(Self::Stdout, Self::File)
    }

    /// Check if output is to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// Concrete format for this target; `Auto` becomes summary on a
    /// terminal and JSON everywhere else.
    #[must_use]
    pub fn resolve_format(&self, format: ReportFormat) -> ReportFormat {
        match format {
            ReportFormat::Auto if self.is_terminal() => ReportFormat::Summary,
            ReportFormat::Auto => ReportFormat::Json,
            other => other,
        }
    }

    /// Color only reaches stdout, and only without `--no-color` or `NO_COLOR`.
    #[must_use]
    pub fn use_color(&self, no_color_flag: bool) -> bool {
        matches!(self, Self::Stdout) && !no_color_flag && std::env::var_os("NO_COLOR").is_none()
    }
}

/// Write rendered verdicts for `documents` certificates to the target.
///
/// Missing parent directories of a verdict file are created.
pub fn write_verdicts(
    content: &str,
    target: &OutputTarget,
    documents: usize,
    quiet: bool,
) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
        }
        OutputTarget::File(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write verdicts to {}", path.display()))?;
            if !quiet {
                tracing::info!("Wrote {documents} verdict(s) to {}", path.display());
            }
        }
    }
    Ok(())
}
