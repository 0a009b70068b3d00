//! Record sinks receiving anonymized datasets.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::constants::sink::{ARTIFACT_FILE_EXT, ARTIFACT_FILE_PREFIX};
use crate::data::GeneralizedRecord;
use crate::errors::PipelineError;

/// Destination for anonymized datasets, keyed by (k, age bucket).
///
/// `replace` must drop any prior artifact for the same key; field values and
/// generalized columns are persisted unchanged.
pub trait RecordSink: Send + Sync {
    /// Replace the artifact for `(k, age_bucket)` with `records`.
    fn replace(
        &self,
        k: usize,
        age_bucket: i64,
        records: &[GeneralizedRecord],
    ) -> Result<(), PipelineError>;
}

/// Thread-safe in-memory sink for tests and demos.
#[derive(Default)]
pub struct InMemorySink {
    artifacts: RwLock<HashMap<(usize, i64), Vec<GeneralizedRecord>>>,
}

impl InMemorySink {
    /// The stored artifact for `(k, age_bucket)`, if one was written.
    pub fn artifact(&self, k: usize, age_bucket: i64) -> Option<Vec<GeneralizedRecord>> {
        self.artifacts
            .read()
            .ok()?
            .get(&(k, age_bucket))
            .cloned()
    }

    /// Number of stored artifacts.
    pub fn artifact_count(&self) -> usize {
        self.artifacts.read().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl RecordSink for InMemorySink {
    fn replace(
        &self,
        k: usize,
        age_bucket: i64,
        records: &[GeneralizedRecord],
    ) -> Result<(), PipelineError> {
        let mut guard = self
            .artifacts
            .write()
            .map_err(|_| PipelineError::Sink("artifact lock poisoned".into()))?;
        guard.insert((k, age_bucket), records.to_vec());
        Ok(())
    }
}

/// Sink writing one JSON record per line to a per-(k, bucket) file.
pub struct JsonLinesSink {
    dir: PathBuf,
}

impl JsonLinesSink {
    /// Create a sink writing artifacts under `dir` (created on first write).
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Artifact path for `(k, age_bucket)`.
    pub fn path_for(&self, k: usize, age_bucket: i64) -> PathBuf {
        self.dir.join(format!(
            "{ARTIFACT_FILE_PREFIX}_k{k}_b{age_bucket}.{ARTIFACT_FILE_EXT}"
        ))
    }
}

impl RecordSink for JsonLinesSink {
    fn replace(
        &self,
        k: usize,
        age_bucket: i64,
        records: &[GeneralizedRecord],
    ) -> Result<(), PipelineError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(k, age_bucket);
        let mut buffer = Vec::new();
        for record in records {
            let line = serde_json::to_string(record)
                .map_err(|err| PipelineError::Sink(format!("serialize record: {err}")))?;
            buffer.extend_from_slice(line.as_bytes());
            buffer.push(b'\n');
        }
        let mut file = fs::File::create(&path)?;
        file.write_all(&buffer)?;
        Ok(())
    }
}
