//! Record sources feeding the pipeline.
//!
//! A source is a bulk read returning the full raw dataset in a stable order.
//! The pipeline does not care whether rows come from a file, a database
//! export, or a synthetic generator; it only requires an ordered, finite,
//! in-memory-representable sequence.

use std::sync::Arc;

use crate::data::Record;
use crate::errors::PipelineError;
use crate::types::SourceId;

/// File-backed census source.
pub mod census;
pub use census::CensusFileSource;

/// Pipeline-facing bulk record source.
pub trait RecordSource: Send + Sync {
    /// Stable source identifier used in logs and errors.
    fn id(&self) -> &str;
    /// Load the full dataset in stable order.
    fn load(&self) -> Result<Vec<Record>, PipelineError>;
}

/// In-memory source for tests and small datasets.
pub struct InMemorySource {
    id: SourceId,
    records: Arc<Vec<Record>>,
}

impl InMemorySource {
    /// Create an in-memory source from prebuilt records.
    pub fn new(id: impl Into<SourceId>, records: Vec<Record>) -> Self {
        Self {
            id: id.into(),
            records: Arc::new(records),
        }
    }
}

impl RecordSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Vec<Record>, PipelineError> {
        Ok(self.records.as_ref().clone())
    }
}
