//! Quasi-identifier grouping and k-anonymity verification.

use indexmap::IndexMap;

use crate::data::{GeneralizedRecord, QuasiKey};

/// Partition sizes and threshold status for one dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupStats {
    /// Number of distinct quasi-identifier groups.
    pub group_count: usize,
    /// Smallest group size present (0 for an empty dataset; callers
    /// special-case empty input).
    pub min_group_size: usize,
    /// Number of distinct groups smaller than k.
    pub violation_count: usize,
    /// True iff `min_group_size >= k`.
    pub satisfies_k: bool,
}

/// Partition records by quasi-identifier tuple.
///
/// Values are indices into `records`; groups appear in first-seen order so
/// repeated calls over the same dataset iterate identically.
pub fn partition(records: &[GeneralizedRecord]) -> IndexMap<QuasiKey, Vec<usize>> {
    let mut groups: IndexMap<QuasiKey, Vec<usize>> = IndexMap::new();
    for (idx, record) in records.iter().enumerate() {
        groups.entry(record.quasi_key()).or_default().push(idx);
    }
    groups
}

/// Group sizes keyed by quasi-identifier tuple, first-seen order.
pub fn group_sizes(records: &[GeneralizedRecord]) -> IndexMap<QuasiKey, usize> {
    let mut sizes: IndexMap<QuasiKey, usize> = IndexMap::new();
    for record in records {
        *sizes.entry(record.quasi_key()).or_insert(0) += 1;
    }
    sizes
}

/// Check whether `records` satisfies k-anonymity for threshold `k`.
///
/// Callable before and after suppression; the post-suppression call must
/// report `violation_count == 0` or the suppressor has a defect.
pub fn check_k_anonymity(records: &[GeneralizedRecord], k: usize) -> GroupStats {
    let sizes = group_sizes(records);
    let min_group_size = sizes.values().copied().min().unwrap_or(0);
    let violation_count = sizes.values().filter(|&&size| size < k).count();
    GroupStats {
        group_count: sizes.len(),
        min_group_size,
        violation_count,
        satisfies_k: min_group_size >= k,
    }
}
