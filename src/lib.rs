#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Pipeline and per-run anonymization configuration.
pub mod config;
/// Centralized constants used across generalization, sources, and reports.
pub mod constants;
/// Record, generalized-record, and quasi-identifier key types.
pub mod data;
mod errors;
/// Reusable demo runner shared by example binaries.
pub mod example_apps;
/// Numeric bucketing and categorical coarsening.
pub mod generalize;
/// Quasi-identifier grouping and k-anonymity verification.
pub mod groups;
/// Group-size distribution metrics.
pub mod metrics;
/// Per-k orchestration of the anonymization stages.
pub mod pipeline;
/// Per-k result records and summary output.
pub mod report;
/// Record sinks receiving anonymized datasets.
pub mod sink;
/// Record sources feeding the pipeline.
pub mod source;
/// Threshold suppression of undersized groups.
pub mod suppress;
/// Seeded synthetic census-shaped records.
pub mod synth;
/// Shared type aliases.
pub mod types;
/// Suppression-only utility-loss measurement.
pub mod utility;

pub use config::{AnonymizationParams, PipelineConfig};
pub use data::{GeneralizedRecord, QuasiKey, Record};
pub use errors::PipelineError;
pub use generalize::{CategoryMap, bucket, generalize_dataset, generalize_record};
pub use groups::{GroupStats, check_k_anonymity};
pub use pipeline::KAnonymityPipeline;
pub use report::KRunReport;
pub use sink::{InMemorySink, JsonLinesSink, RecordSink};
pub use source::{CensusFileSource, InMemorySource, RecordSource};
pub use suppress::suppress_small_groups;
pub use types::{CategoryLabel, CategoryValue, RecordId, ShapeName, SourceId, UtilityKey};
pub use utility::{Aggregate, GroupField, NumericField, QueryShape, UtilityReport};
