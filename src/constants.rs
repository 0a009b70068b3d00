/// Constants used by quasi-identifier generalization.
pub mod generalize {
    /// Sentinel coarse category assigned to values missing from a mapping table.
    pub const OTHER_CATEGORY: &str = "Other";

    /// Fine-to-coarse education hierarchy for the adult census dataset.
    pub const EDUCATION_MAP: [(&str, &str); 16] = [
        ("Preschool", "Primary"),
        ("1st-4th", "Primary"),
        ("5th-6th", "Primary"),
        ("7th-8th", "Middle"),
        ("9th", "High-School"),
        ("10th", "High-School"),
        ("11th", "High-School"),
        ("12th", "High-School"),
        ("HS-grad", "High-School"),
        ("Some-college", "College"),
        ("Assoc-voc", "College"),
        ("Assoc-acdm", "College"),
        ("Bachelors", "College"),
        ("Masters", "Graduate"),
        ("Prof-school", "Graduate"),
        ("Doctorate", "Graduate"),
    ];
}

/// Constants used by pipeline defaults.
pub mod pipeline {
    /// Default k thresholds processed by a run.
    pub const DEFAULT_K_VALUES: [usize; 4] = [2, 5, 10, 20];
    /// Default age generalization bucket width.
    pub const DEFAULT_AGE_BUCKET: i64 = 5;
}

/// Constants used by utility query shapes.
pub mod utility {
    /// Shape counting rows per coarse education category.
    pub const SHAPE_COUNT_BY_EDUCATION: &str = "count_by_education";
    /// Shape averaging generalized age per sex.
    pub const SHAPE_AVG_AGE_BY_SEX: &str = "avg_age_by_sex";
    /// Shape counting rows per income bracket.
    pub const SHAPE_COUNT_BY_INCOME: &str = "count_by_income";
}

/// Constants used by the census file source.
pub mod census {
    /// Column count of the UCI adult `.data` comma-separated format.
    pub const ADULT_COLUMNS: usize = 15;
    /// Source id reported by `CensusFileSource`.
    pub const CENSUS_SOURCE_ID: &str = "adult_census_file";
    /// Log message used when unparseable rows are skipped.
    pub const SKIP_MALFORMED_MSG: &str = "skipping malformed census row";
}

/// Constants used by the JSON-lines record sink.
pub mod sink {
    /// Filename prefix for per-(k, bucket) anonymized dataset artifacts.
    pub const ARTIFACT_FILE_PREFIX: &str = "anonymized";
    /// File extension for JSON-lines artifacts.
    pub const ARTIFACT_FILE_EXT: &str = "jsonl";
}

/// Category pools used by the seeded synthetic record generator.
pub mod synth {
    /// Inclusive age range sampled for synthetic records.
    pub const AGE_RANGE: (i64, i64) = (17, 90);
    /// Inclusive weekly-hours range sampled for synthetic records.
    pub const HOURS_RANGE: (i64, i64) = (1, 99);
    /// Workclass values sampled for synthetic records.
    pub const WORKCLASSES: [&str; 4] = ["Private", "Self-emp-not-inc", "State-gov", "Federal-gov"];
    /// Education values sampled for synthetic records (fine-grained).
    pub const EDUCATIONS: [&str; 8] = [
        "HS-grad",
        "Some-college",
        "Bachelors",
        "Masters",
        "11th",
        "Assoc-voc",
        "7th-8th",
        "Doctorate",
    ];
    /// Marital-status values sampled for synthetic records.
    pub const MARITAL_STATUSES: [&str; 3] =
        ["Married-civ-spouse", "Never-married", "Divorced"];
    /// Occupation values sampled for synthetic records.
    pub const OCCUPATIONS: [&str; 5] = [
        "Adm-clerical",
        "Exec-managerial",
        "Craft-repair",
        "Sales",
        "Prof-specialty",
    ];
    /// Relationship values sampled for synthetic records.
    pub const RELATIONSHIPS: [&str; 4] = ["Husband", "Wife", "Own-child", "Not-in-family"];
    /// Race values sampled for synthetic records.
    pub const RACES: [&str; 3] = ["White", "Black", "Asian-Pac-Islander"];
    /// Sex values sampled for synthetic records.
    pub const SEXES: [&str; 2] = ["Male", "Female"];
    /// Native-country values sampled for synthetic records.
    pub const COUNTRIES: [&str; 3] = ["United-States", "Mexico", "Philippines"];
    /// Income brackets sampled for synthetic records.
    pub const INCOMES: [&str; 2] = ["<=50K", ">50K"];
}
