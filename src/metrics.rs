use indexmap::IndexMap;

use crate::data::QuasiKey;

/// Aggregate skew metrics for quasi-identifier group sizes.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupSkew {
    pub total: usize,
    pub groups: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub max_share: f64,
    pub min_share: f64,
    pub ratio: f64,
}

/// Compute skew metrics from per-group record counts.
/// Returns `None` for an empty partition.
pub fn group_size_skew(sizes: &IndexMap<QuasiKey, usize>) -> Option<GroupSkew> {
    if sizes.is_empty() {
        return None;
    }
    let total: usize = sizes.values().sum();
    let groups = sizes.len();
    let min = *sizes.values().min().expect("sizes non-empty");
    let max = *sizes.values().max().expect("sizes non-empty");
    let mean = total as f64 / groups as f64;
    let max_share = if total == 0 {
        0.0
    } else {
        max as f64 / total as f64
    };
    let min_share = if total == 0 {
        0.0
    } else {
        min as f64 / total as f64
    };
    let ratio = if min == 0 {
        f64::INFINITY
    } else {
        max as f64 / min as f64
    };
    Some(GroupSkew {
        total,
        groups,
        min,
        max,
        mean,
        max_share,
        min_share,
        ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(age_bucket: i64) -> QuasiKey {
        QuasiKey {
            age_bucket,
            education_class: "College".into(),
            sex: "Male".into(),
            race: "White".into(),
        }
    }

    #[test]
    fn group_size_skew_reports_balance() {
        let mut sizes = IndexMap::new();
        sizes.insert(key(30), 2);
        sizes.insert(key(35), 2);
        let skew = group_size_skew(&sizes).expect("skew");
        assert_eq!(skew.total, 4);
        assert_eq!(skew.groups, 2);
        assert_eq!(skew.min, 2);
        assert_eq!(skew.max, 2);
        assert!((skew.max_share - 0.5).abs() < 1e-6);
        assert!((skew.ratio - 1.0).abs() < 1e-6);
    }

    #[test]
    fn group_size_skew_reports_imbalance() {
        let mut sizes = IndexMap::new();
        sizes.insert(key(30), 6);
        sizes.insert(key(35), 1);
        sizes.insert(key(40), 1);
        let skew = group_size_skew(&sizes).expect("skew");
        assert_eq!(skew.total, 8);
        assert_eq!(skew.groups, 3);
        assert_eq!(skew.max, 6);
        assert_eq!(skew.min, 1);
        assert!((skew.ratio - 6.0).abs() < 1e-6);
        assert!((skew.max_share - 0.75).abs() < 1e-6);
    }

    #[test]
    fn empty_partition_has_no_skew() {
        assert_eq!(group_size_skew(&IndexMap::new()), None);
    }
}
