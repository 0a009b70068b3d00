//! Suppression-only utility-loss measurement.
//!
//! Aggregates are compared between the generalized-but-unsuppressed baseline
//! and the anonymized dataset. Using the generalized baseline isolates the
//! accuracy cost of suppression from the cost of generalization itself; that
//! measurement design is load-bearing for reported numbers and must not be
//! changed to a raw-dataset comparison.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::utility::{
    SHAPE_AVG_AGE_BY_SEX, SHAPE_COUNT_BY_EDUCATION, SHAPE_COUNT_BY_INCOME,
};
use crate::data::GeneralizedRecord;
use crate::types::{ShapeName, UtilityKey};

/// Field an aggregate query shape groups by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupField {
    AgeGeneralized,
    EducationGeneralized,
    Sex,
    Race,
    Income,
}

impl GroupField {
    fn value_of(self, record: &GeneralizedRecord) -> UtilityKey {
        match self {
            GroupField::AgeGeneralized => record.age_generalized.to_string(),
            GroupField::EducationGeneralized => record.education_generalized.clone(),
            GroupField::Sex => record.record.sex.clone(),
            GroupField::Race => record.record.race.clone(),
            GroupField::Income => record.record.income.clone(),
        }
    }
}

/// Numeric field feeding SUM/AVG aggregates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericField {
    AgeGeneralized,
    CapitalGain,
    CapitalLoss,
    HoursPerWeek,
}

impl NumericField {
    fn value_of(self, record: &GeneralizedRecord) -> f64 {
        match self {
            NumericField::AgeGeneralized => record.age_generalized as f64,
            NumericField::CapitalGain => record.record.capital_gain as f64,
            NumericField::CapitalLoss => record.record.capital_loss as f64,
            NumericField::HoursPerWeek => record.record.hours_per_week as f64,
        }
    }
}

/// Aggregate operator applied per grouping key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aggregate {
    Count,
    Sum(NumericField),
    Avg(NumericField),
}

/// One named aggregate query shape (grouping column + operator).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryShape {
    /// Stable shape name used in reports.
    pub name: ShapeName,
    pub group_by: GroupField,
    pub aggregate: Aggregate,
}

impl QueryShape {
    /// The three benchmark shapes evaluated by default.
    pub fn default_shapes() -> Vec<QueryShape> {
        vec![
            QueryShape {
                name: SHAPE_COUNT_BY_EDUCATION.into(),
                group_by: GroupField::EducationGeneralized,
                aggregate: Aggregate::Count,
            },
            QueryShape {
                name: SHAPE_AVG_AGE_BY_SEX.into(),
                group_by: GroupField::Sex,
                aggregate: Aggregate::Avg(NumericField::AgeGeneralized),
            },
            QueryShape {
                name: SHAPE_COUNT_BY_INCOME.into(),
                group_by: GroupField::Income,
                aggregate: Aggregate::Count,
            },
        ]
    }
}

/// Evaluate one shape over a dataset, producing per-key aggregate values in
/// first-seen key order.
pub fn aggregate(shape: &QueryShape, records: &[GeneralizedRecord]) -> IndexMap<UtilityKey, f64> {
    let mut sums: IndexMap<UtilityKey, (f64, usize)> = IndexMap::new();
    for record in records {
        let key = shape.group_by.value_of(record);
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.1 += 1;
        match shape.aggregate {
            Aggregate::Count => entry.0 += 1.0,
            Aggregate::Sum(field) | Aggregate::Avg(field) => entry.0 += field.value_of(record),
        }
    }
    sums.into_iter()
        .map(|(key, (sum, count))| {
            let value = match shape.aggregate {
                Aggregate::Avg(_) => sum / count as f64,
                Aggregate::Count | Aggregate::Sum(_) => sum,
            };
            (key, value)
        })
        .collect()
}

/// Per-key comparison between baseline and anonymized aggregates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyComparison {
    pub key: UtilityKey,
    pub baseline: f64,
    pub anonymized: f64,
    pub absolute_error: f64,
    /// Absent when the baseline value is not strictly positive; such keys are
    /// excluded from the relative-error mean rather than divided by zero.
    pub relative_error: Option<f64>,
}

/// Error summary for one query shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShapeReport {
    pub name: ShapeName,
    pub keys: Vec<KeyComparison>,
    #[serde(with = "nan_as_null")]
    pub mean_absolute_error: f64,
    #[serde(with = "nan_as_null")]
    pub mean_relative_error: f64,
}

/// Cross-shape utility summary: unweighted mean of per-shape means.
///
/// The unweighted mean is a known limitation (large groups count the same as
/// small ones) and is kept deliberately rather than silently reweighted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UtilityReport {
    pub shapes: Vec<ShapeReport>,
    #[serde(with = "nan_as_null")]
    pub mean_absolute_error: f64,
    #[serde(with = "nan_as_null")]
    pub mean_relative_error: f64,
}

impl UtilityReport {
    /// False when the metrics are undefined (empty input dataset). NaN is
    /// reported instead of 0 so empty runs cannot masquerade as perfect
    /// utility.
    pub fn is_defined(&self) -> bool {
        self.mean_absolute_error.is_finite() && self.mean_relative_error.is_finite()
    }
}

/// Compare one shape between baseline and anonymized datasets.
///
/// Every key present in the baseline contributes an entry; a key fully
/// suppressed out of the anonymized dataset counts as value 0.
pub fn compare_shape(
    shape: &QueryShape,
    baseline: &[GeneralizedRecord],
    anonymized: &[GeneralizedRecord],
) -> ShapeReport {
    let baseline_values = aggregate(shape, baseline);
    let anonymized_values = aggregate(shape, anonymized);

    let keys: Vec<KeyComparison> = baseline_values
        .into_iter()
        .map(|(key, baseline_value)| {
            let anonymized_value = anonymized_values.get(&key).copied().unwrap_or(0.0);
            let absolute_error = (baseline_value - anonymized_value).abs();
            let relative_error =
                (baseline_value > 0.0).then(|| absolute_error / baseline_value);
            KeyComparison {
                key,
                baseline: baseline_value,
                anonymized: anonymized_value,
                absolute_error,
                relative_error,
            }
        })
        .collect();

    let mean_absolute_error = mean(keys.iter().map(|entry| entry.absolute_error));
    let mean_relative_error = mean(keys.iter().filter_map(|entry| entry.relative_error));
    ShapeReport {
        name: shape.name.clone(),
        keys,
        mean_absolute_error,
        mean_relative_error,
    }
}

/// Compare all shapes and summarize with unweighted means of per-shape means.
pub fn evaluate(
    shapes: &[QueryShape],
    baseline: &[GeneralizedRecord],
    anonymized: &[GeneralizedRecord],
) -> UtilityReport {
    let shape_reports: Vec<ShapeReport> = shapes
        .iter()
        .map(|shape| compare_shape(shape, baseline, anonymized))
        .collect();
    let mean_absolute_error = mean(shape_reports.iter().map(|report| report.mean_absolute_error));
    let mean_relative_error = mean(shape_reports.iter().map(|report| report.mean_relative_error));
    UtilityReport {
        shapes: shape_reports,
        mean_absolute_error,
        mean_relative_error,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Serialize non-finite floats as JSON null instead of failing.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnonymizationParams;
    use crate::data::Record;
    use crate::generalize::generalize_record;

    fn build_record(id: u64, age: i64, education: &str, sex: &str, income: &str) -> GeneralizedRecord {
        let record = Record {
            id,
            age,
            workclass: "Private".into(),
            education: education.into(),
            marital_status: "Never-married".into(),
            occupation: "Sales".into(),
            relationship: "Not-in-family".into(),
            race: "White".into(),
            sex: sex.into(),
            capital_gain: 0,
            capital_loss: 0,
            hours_per_week: 40,
            native_country: "United-States".into(),
            income: income.into(),
        };
        generalize_record(record, &AnonymizationParams::new(2, 5))
    }

    #[test]
    fn count_aggregate_groups_by_education() {
        let records = vec![
            build_record(1, 30, "Bachelors", "Male", "<=50K"),
            build_record(2, 31, "Masters", "Male", ">50K"),
            build_record(3, 32, "Some-college", "Female", "<=50K"),
        ];
        let shape = &QueryShape::default_shapes()[0];
        let values = aggregate(shape, &records);
        assert_eq!(values.get("College").copied(), Some(2.0));
        assert_eq!(values.get("Graduate").copied(), Some(1.0));
    }

    #[test]
    fn avg_aggregate_divides_by_group_count() {
        let records = vec![
            build_record(1, 30, "Bachelors", "Male", "<=50K"),
            build_record(2, 40, "Bachelors", "Male", "<=50K"),
            build_record(3, 50, "Bachelors", "Female", "<=50K"),
        ];
        let shape = &QueryShape::default_shapes()[1];
        let values = aggregate(shape, &records);
        assert!((values.get("Male").copied().unwrap() - 35.0).abs() < 1e-9);
        assert!((values.get("Female").copied().unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn fully_suppressed_key_counts_as_zero() {
        let baseline = vec![
            build_record(1, 30, "Bachelors", "Male", "<=50K"),
            build_record(2, 31, "Bachelors", "Male", "<=50K"),
            build_record(3, 60, "Doctorate", "Male", ">50K"),
        ];
        // The Graduate group was suppressed entirely.
        let anonymized = baseline[..2].to_vec();

        let shape = &QueryShape::default_shapes()[0];
        let report = compare_shape(shape, &baseline, &anonymized);
        let graduate = report
            .keys
            .iter()
            .find(|entry| entry.key == "Graduate")
            .unwrap();
        assert_eq!(graduate.anonymized, 0.0);
        assert_eq!(graduate.absolute_error, 1.0);
        assert_eq!(graduate.relative_error, Some(1.0));
    }

    #[test]
    fn zero_baseline_keys_are_excluded_from_relative_mean() {
        let baseline = vec![build_record(1, 30, "Bachelors", "Male", "<=50K")];
        let shape = QueryShape {
            name: "sum_gain_by_sex".into(),
            group_by: GroupField::Sex,
            aggregate: Aggregate::Sum(NumericField::CapitalGain),
        };
        // capital_gain is 0, so the baseline value is 0 for the only key.
        let report = compare_shape(&shape, &baseline, &baseline);
        assert_eq!(report.keys[0].relative_error, None);
        assert!(report.mean_relative_error.is_nan());
        assert_eq!(report.mean_absolute_error, 0.0);
    }

    #[test]
    fn identical_datasets_report_zero_error() {
        let records = vec![
            build_record(1, 30, "Bachelors", "Male", "<=50K"),
            build_record(2, 44, "HS-grad", "Female", ">50K"),
        ];
        let report = evaluate(&QueryShape::default_shapes(), &records, &records);
        assert!(report.is_defined());
        assert_eq!(report.mean_absolute_error, 0.0);
        assert_eq!(report.mean_relative_error, 0.0);
    }

    #[test]
    fn empty_input_reports_nan_not_zero() {
        let report = evaluate(&QueryShape::default_shapes(), &[], &[]);
        assert!(!report.is_defined());
        assert!(report.mean_absolute_error.is_nan());
        assert!(report.mean_relative_error.is_nan());
    }

    #[test]
    fn nan_summaries_serialize_as_null() {
        let report = evaluate(&QueryShape::default_shapes(), &[], &[]);
        let json = serde_json::to_string(&report).expect("serializable");
        assert!(json.contains("\"mean_absolute_error\":null"));
    }
}
