/// Stable numeric record identifier, unique across a dataset and assigned
/// before anonymization.
/// Example: `4217`
pub type RecordId = u64;
/// Identifier for the source that produced a dataset.
/// Examples: `adult_census_file`, `synthetic`
pub type SourceId = String;
/// Raw categorical field value as loaded.
/// Examples: `Bachelors`, `HS-grad`
pub type CategoryValue = String;
/// Coarse category label produced by generalization.
/// Examples: `College`, `High-School`, `Other`
pub type CategoryLabel = String;
/// Name of an aggregate query shape.
/// Examples: `count_by_education`, `avg_age_by_sex`
pub type ShapeName = String;
/// Grouping-key value inside a utility comparison.
/// Examples: `High-School`, `Male`, `<=50K`
pub type UtilityKey = String;
