use serde::{Deserialize, Serialize};

pub use crate::types::{CategoryLabel, CategoryValue, RecordId};

/// Raw adult-census row as produced by a `RecordSource`.
///
/// The `id` is assigned before anonymization, unique across the dataset, and
/// never reused. All other fields are carried through the pipeline unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable record identifier.
    pub id: RecordId,
    /// Exact age in years (quasi-identifying before generalization).
    pub age: i64,
    pub workclass: String,
    /// Fine-grained education level (quasi-identifying before generalization).
    pub education: String,
    pub marital_status: String,
    pub occupation: String,
    pub relationship: String,
    /// Quasi-identifying attribute, used in the tuple as-is.
    pub race: String,
    /// Quasi-identifying attribute, used in the tuple as-is.
    pub sex: String,
    pub capital_gain: i64,
    pub capital_loss: i64,
    pub hours_per_week: i64,
    pub native_country: String,
    /// Sensitive attribute whose aggregate accuracy the pipeline measures.
    pub income: String,
}

/// A record plus its derived generalized quasi-identifier columns.
///
/// Original field values are retained; generalization only adds columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneralizedRecord {
    /// The unmodified source record.
    #[serde(flatten)]
    pub record: Record,
    /// Age mapped into a fixed-width bucket.
    pub age_generalized: i64,
    /// Education mapped into its coarse category.
    pub education_generalized: CategoryLabel,
}

impl GeneralizedRecord {
    /// Quasi-identifier tuple value for this record.
    pub fn quasi_key(&self) -> QuasiKey {
        QuasiKey {
            age_bucket: self.age_generalized,
            education_class: self.education_generalized.clone(),
            sex: self.record.sex.clone(),
            race: self.record.race.clone(),
        }
    }
}

/// Quasi-identifier tuple: the attribute combination that must be shared by
/// at least k records after suppression.
///
/// Field order is fixed for a pipeline run and identical across the original
/// and anonymized dataset comparisons.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuasiKey {
    pub age_bucket: i64,
    pub education_class: CategoryLabel,
    pub sex: String,
    pub race: String,
}
