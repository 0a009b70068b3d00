//! Per-k result records and summary output.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;
use crate::utility::UtilityReport;

/// Flat result record for one k run, suitable for tabular aggregation
/// across multiple k values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KRunReport {
    /// Threshold the run enforced.
    pub k: usize,
    /// Age bucket width used for generalization.
    pub age_bucket: i64,
    /// Rows loaded from the source.
    pub original_rows: usize,
    /// Rows surviving suppression.
    pub final_rows: usize,
    /// Rows suppressed.
    pub suppressed_rows: usize,
    /// `suppressed_rows / original_rows` (0 for empty input).
    pub suppression_rate: f64,
    /// Smallest surviving group size (0 when nothing survived).
    pub min_group_size: usize,
    /// Suppression-only utility loss versus the generalized baseline.
    pub utility: UtilityReport,
    /// Wall-clock duration of the run. Environment-dependent, informational
    /// only; not part of the algorithmic contract.
    pub elapsed_ms: f64,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
}

/// Sort reports by k ascending (stable for equal k).
pub fn sort_by_k(reports: &mut [KRunReport]) {
    reports.sort_by_key(|report| report.k);
}

/// Render a fixed-width summary table sorted by k ascending.
pub fn summary_table(reports: &[KRunReport]) -> String {
    let mut sorted: Vec<&KRunReport> = reports.iter().collect();
    sorted.sort_by_key(|report| report.k);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<10} {:<10} {:<12} {:<10} {:<12}\n",
        "k", "rows", "suppr.(%)", "MAE", "rel.err(%)", "elapsed(ms)"
    ));
    out.push_str(&"-".repeat(64));
    out.push('\n');
    for report in sorted {
        out.push_str(&format!(
            "{:<6} {:<10} {:<10.1} {:<12} {:<10} {:<12.2}\n",
            report.k,
            report.final_rows,
            report.suppression_rate * 100.0,
            format_metric(report.utility.mean_absolute_error, 2),
            format_metric(report.utility.mean_relative_error * 100.0, 1),
            report.elapsed_ms,
        ));
    }
    out
}

/// Write reports as pretty-printed JSON, sorted by k ascending.
pub fn write_json(path: impl AsRef<Path>, reports: &[KRunReport]) -> Result<(), PipelineError> {
    let mut sorted = reports.to_vec();
    sort_by_k(&mut sorted);
    let json = serde_json::to_string_pretty(&sorted)
        .map_err(|err| PipelineError::Sink(format!("serialize reports: {err}")))?;
    fs::write(path, json)?;
    Ok(())
}

fn format_metric(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format!("{value:.precision$}")
    } else {
        "n/a".to_string()
    }
}
