use std::io;

use thiserror::Error;

use crate::types::SourceId;

/// Error type for pipeline configuration, IO, and invariant failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("data source '{source_id}' failed: {reason}")]
    Source { source_id: SourceId, reason: String },
    #[error("data sink failure: {0}")]
    Sink(String),
    #[error(
        "post-suppression check failed for k={k}: {violation_count} group(s) below threshold \
         (min group size {min_group_size})"
    )]
    InvariantViolation {
        k: usize,
        violation_count: usize,
        min_group_size: usize,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}
