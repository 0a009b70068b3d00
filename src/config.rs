use crate::constants::pipeline::{DEFAULT_AGE_BUCKET, DEFAULT_K_VALUES};
use crate::errors::PipelineError;
use crate::generalize::CategoryMap;
use crate::utility::QueryShape;

/// Anonymization parameters for a single k run.
#[derive(Clone, Debug)]
pub struct AnonymizationParams {
    /// Minimum group size every surviving quasi-identifier group must reach.
    pub k: usize,
    /// Bucket width used when generalizing ages.
    pub age_bucket: i64,
    /// Fine-to-coarse education mapping (total via its sentinel fallback).
    pub education_map: CategoryMap,
}

impl AnonymizationParams {
    /// Parameters with the built-in education hierarchy.
    pub fn new(k: usize, age_bucket: i64) -> Self {
        Self {
            k,
            age_bucket,
            education_map: CategoryMap::education(),
        }
    }

    /// Reject invalid thresholds before any data is read.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.k == 0 {
            return Err(PipelineError::Configuration(
                "k must be a positive integer".into(),
            ));
        }
        if self.age_bucket <= 0 {
            return Err(PipelineError::Configuration(
                "age bucket granularity must be a positive integer".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level pipeline configuration.
///
/// Each k value is processed as an independent run against a fresh copy of
/// the generalized dataset; the bucket width, education mapping, and query
/// shapes are shared across runs.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// k thresholds to process, each as its own run.
    pub k_values: Vec<usize>,
    /// Age generalization bucket width.
    pub age_bucket: i64,
    /// Fine-to-coarse education mapping.
    pub education_map: CategoryMap,
    /// Aggregate query shapes evaluated for utility loss.
    pub shapes: Vec<QueryShape>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            k_values: DEFAULT_K_VALUES.to_vec(),
            age_bucket: DEFAULT_AGE_BUCKET,
            education_map: CategoryMap::education(),
            shapes: QueryShape::default_shapes(),
        }
    }
}

impl PipelineConfig {
    /// Reject invalid configuration before any data is read.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.k_values.is_empty() {
            return Err(PipelineError::Configuration(
                "at least one k value is required".into(),
            ));
        }
        for &k in &self.k_values {
            if k == 0 {
                return Err(PipelineError::Configuration(
                    "k must be a positive integer".into(),
                ));
            }
        }
        if self.age_bucket <= 0 {
            return Err(PipelineError::Configuration(
                "age bucket granularity must be a positive integer".into(),
            ));
        }
        Ok(())
    }

    /// Per-run parameters for one k threshold.
    pub fn params_for(&self, k: usize) -> AnonymizationParams {
        AnonymizationParams {
            k,
            age_bucket: self.age_bucket,
            education_map: self.education_map.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_k_is_rejected() {
        let config = PipelineConfig {
            k_values: vec![2, 0],
            ..PipelineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PipelineError::Configuration(_))
        ));
        assert!(AnonymizationParams::new(0, 5).validate().is_err());
    }

    #[test]
    fn non_positive_bucket_is_rejected() {
        let config = PipelineConfig {
            age_bucket: 0,
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(AnonymizationParams::new(2, -5).validate().is_err());
    }

    #[test]
    fn empty_k_list_is_rejected() {
        let config = PipelineConfig {
            k_values: Vec::new(),
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
