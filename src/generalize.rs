//! Quasi-identifier generalization: numeric bucketing and categorical
//! coarsening.
//!
//! Both transforms are pure functions of (record, parameters); the catch-all
//! sentinel makes categorical lookup total, so no error paths exist here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::AnonymizationParams;
use crate::constants::generalize::{EDUCATION_MAP, OTHER_CATEGORY};
use crate::data::{GeneralizedRecord, Record};
use crate::types::{CategoryLabel, CategoryValue};

/// Explicit finite fine-to-coarse category table with a sentinel fallback.
///
/// Lookup trims surrounding whitespace from the input value; any value not
/// present in the table maps to the fallback label.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryMap {
    table: HashMap<CategoryValue, CategoryLabel>,
    fallback: CategoryLabel,
}

impl CategoryMap {
    /// Build a map from explicit (fine, coarse) pairs and a fallback label.
    pub fn new<I, A, B>(pairs: I, fallback: impl Into<CategoryLabel>) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<CategoryValue>,
        B: Into<CategoryLabel>,
    {
        Self {
            table: pairs
                .into_iter()
                .map(|(fine, coarse)| (fine.into(), coarse.into()))
                .collect(),
            fallback: fallback.into(),
        }
    }

    /// The built-in adult-census education hierarchy.
    pub fn education() -> Self {
        Self::new(EDUCATION_MAP, OTHER_CATEGORY)
    }

    /// Total lookup: trimmed table hit or the fallback sentinel.
    pub fn coarsen(&self, value: &str) -> &str {
        self.table
            .get(value.trim())
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// The sentinel label returned for unknown values.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::education()
    }
}

/// Generalize a numeric value into fixed-width buckets.
///
/// `bucket(34, 5) == 30`, `bucket(35, 5) == 35`. Integer division matches
/// floor semantics for the non-negative domains handled here.
pub fn bucket(value: i64, granularity: i64) -> i64 {
    (value / granularity) * granularity
}

/// Derive the generalized quasi-identifier columns for one record.
pub fn generalize_record(record: Record, params: &AnonymizationParams) -> GeneralizedRecord {
    let age_generalized = bucket(record.age, params.age_bucket);
    let education_generalized = params.education_map.coarsen(&record.education).to_string();
    GeneralizedRecord {
        record,
        age_generalized,
        education_generalized,
    }
}

/// Generalize an entire dataset, preserving record order.
pub fn generalize_dataset(
    records: Vec<Record>,
    params: &AnonymizationParams,
) -> Vec<GeneralizedRecord> {
    records
        .into_iter()
        .map(|record| generalize_record(record, params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_matches_floor_division_scenarios() {
        assert_eq!(bucket(34, 5), 30);
        assert_eq!(bucket(35, 5), 35);
        assert_eq!(bucket(39, 5), 35);
        assert_eq!(bucket(0, 5), 0);
        assert_eq!(bucket(17, 10), 10);
    }

    #[test]
    fn bucket_is_monotone_in_value() {
        for granularity in [1i64, 2, 5, 10] {
            let mut previous = bucket(0, granularity);
            for age in 1..=120 {
                let current = bucket(age, granularity);
                assert!(current >= previous, "bucket must not decrease as age grows");
                previous = current;
            }
        }
    }

    #[test]
    fn education_map_is_total_over_arbitrary_values() {
        let map = CategoryMap::education();
        assert_eq!(map.coarsen("Bachelors"), "College");
        assert_eq!(map.coarsen("HS-grad"), "High-School");
        assert_eq!(map.coarsen("7th-8th"), "Middle");
        assert_eq!(map.coarsen("Doctorate"), "Graduate");
        assert_eq!(map.coarsen("1st-4th"), "Primary");
        assert_eq!(map.coarsen("Never-seen-before"), "Other");
        assert_eq!(map.coarsen(""), "Other");
    }

    #[test]
    fn coarsen_trims_surrounding_whitespace() {
        let map = CategoryMap::education();
        assert_eq!(map.coarsen("  Masters "), "Graduate");
        assert_eq!(map.coarsen("\tSome-college\n"), "College");
    }
}
