//! Pipeline orchestration: one linear pass per requested k value.
//!
//! Stage order per run: Load -> Generalize -> CheckPre -> Suppress ->
//! CheckPost -> Persist -> Evaluate -> Report. Runs share the loaded raw
//! dataset but nothing else; each k starts from a fresh generalized copy.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::config::PipelineConfig;
use crate::data::Record;
use crate::errors::PipelineError;
use crate::generalize::generalize_dataset;
use crate::groups::{check_k_anonymity, group_sizes};
use crate::metrics::group_size_skew;
use crate::report::{self, KRunReport};
use crate::sink::RecordSink;
use crate::source::RecordSource;
use crate::suppress::suppress_small_groups;
use crate::utility::evaluate;

/// Drives generalization, suppression, verification, persistence, and
/// utility evaluation for a set of k values.
pub struct KAnonymityPipeline {
    config: PipelineConfig,
    source: Arc<dyn RecordSource>,
    sink: Arc<dyn RecordSink>,
}

impl KAnonymityPipeline {
    /// Create a pipeline, rejecting invalid configuration before any data
    /// is read.
    pub fn new(
        config: PipelineConfig,
        source: Arc<dyn RecordSource>,
        sink: Arc<dyn RecordSink>,
    ) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            sink,
        })
    }

    /// Load once, then process every configured k value in ascending order.
    pub fn run_all(&self) -> Result<Vec<KRunReport>, PipelineError> {
        let records = self.load()?;
        let mut k_values = self.config.k_values.clone();
        k_values.sort_unstable();
        let mut reports = Vec::with_capacity(k_values.len());
        for k in k_values {
            reports.push(self.run_k(k, &records)?);
        }
        Ok(reports)
    }

    /// Load once, then process every configured k value in parallel.
    ///
    /// Runs share no mutable state, so they need no synchronization beyond
    /// collecting the reports, which are returned sorted by k ascending.
    pub fn run_all_parallel(&self) -> Result<Vec<KRunReport>, PipelineError> {
        let records = self.load()?;
        let mut reports = self
            .config
            .k_values
            .par_iter()
            .map(|&k| self.run_k(k, &records))
            .collect::<Result<Vec<KRunReport>, PipelineError>>()?;
        report::sort_by_k(&mut reports);
        Ok(reports)
    }

    fn load(&self) -> Result<Vec<Record>, PipelineError> {
        let records = self.source.load()?;
        info!(
            source = self.source.id(),
            rows = records.len(),
            "raw dataset loaded"
        );
        Ok(records)
    }

    /// Run the full stage sequence for one k against the loaded raw dataset.
    pub fn run_k(&self, k: usize, records: &[Record]) -> Result<KRunReport, PipelineError> {
        let params = self.config.params_for(k);
        params.validate()?;
        let started = Instant::now();
        let original_rows = records.len();

        let baseline = generalize_dataset(records.to_vec(), &params);

        let pre = check_k_anonymity(&baseline, k);
        if let Some(skew) = group_size_skew(&group_sizes(&baseline)) {
            debug!(
                k,
                groups = skew.groups,
                min = skew.min,
                max = skew.max,
                mean = skew.mean,
                "pre-suppression group sizes"
            );
        }
        info!(
            k,
            min_group_size = pre.min_group_size,
            violation_count = pre.violation_count,
            "pre-suppression check"
        );

        let (retained, suppressed_rows) = suppress_small_groups(baseline.clone(), k);

        // The suppressor is provably correct; a failing post-check signals a
        // defect, not a recoverable runtime condition.
        let post = check_k_anonymity(&retained, k);
        if post.violation_count > 0 {
            error!(
                k,
                violation_count = post.violation_count,
                min_group_size = post.min_group_size,
                "post-suppression check failed"
            );
            return Err(PipelineError::InvariantViolation {
                k,
                violation_count: post.violation_count,
                min_group_size: post.min_group_size,
            });
        }
        info!(
            k,
            retained = retained.len(),
            suppressed = suppressed_rows,
            min_group_size = post.min_group_size,
            "post-suppression check passed"
        );

        self.sink.replace(k, params.age_bucket, &retained)?;

        let utility = evaluate(&self.config.shapes, &baseline, &retained);

        let suppression_rate = if original_rows == 0 {
            0.0
        } else {
            suppressed_rows as f64 / original_rows as f64
        };
        Ok(KRunReport {
            k,
            age_bucket: params.age_bucket,
            original_rows,
            final_rows: retained.len(),
            suppressed_rows,
            suppression_rate,
            min_group_size: post.min_group_size,
            utility,
            elapsed_ms: started.elapsed().as_secs_f64() * 1_000.0,
            generated_at: Utc::now(),
        })
    }
}
