//! Report output stage.
//!
//! Renders document reports in the configured format and writes them out,
//! then maps the results to a process exit code.

use super::{exit_codes, write_verdicts, OutputTarget, PipelineError};
use crate::config::AppConfig;
use crate::reports::{create_reporter_with_options, DocumentReport, ReportConfig};

/// Render and write reports to the configured destination.
pub fn output_reports(config: &AppConfig, reports: &[DocumentReport]) -> Result<(), PipelineError> {
    let target = OutputTarget::from_config(&config.output);
    let reporter = create_reporter_with_options(
        target.resolve_format(config.output.format),
        target.use_color(config.output.no_color),
    );
    let report_config = ReportConfig {
        text_preview_chars: config.analysis.text_preview_chars,
    };

    let rendered = reporter
        .generate(reports, &report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;
    write_verdicts(&rendered, &target, reports.len(), config.behavior.quiet)
        .map_err(|source| PipelineError::ReportFailed { source })
}

/// Exit code for a finished batch.
///
/// Any document that could not be loaded is an error. Otherwise a score
/// below `min_score` (degraded verdicts score 0) fails the run.
#[must_use]
pub fn exit_code_for(reports: &[DocumentReport], min_score: Option<f64>) -> i32 {
    if reports.iter().any(|r| r.analysis.is_none()) {
        return exit_codes::ERROR;
    }

    if let Some(threshold) = min_score {
        let below: Vec<_> = reports
            .iter()
            .filter_map(|r| r.verdict().map(|v| (r, v.final_score)))
            .filter(|(_, score)| *score < threshold)
            .collect();
        for (report, score) in &below {
            tracing::error!(
                "{}: authenticity score {:.2} is below minimum {:.2}",
                report.filename,
                score,
                threshold
            );
        }
        if !below.is_empty() {
            return exit_codes::BELOW_MIN_SCORE;
        }
    }

    exit_codes::SUCCESS
}
