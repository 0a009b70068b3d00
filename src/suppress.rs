//! Threshold suppression of undersized quasi-identifier groups.

use crate::data::GeneralizedRecord;
use crate::groups::group_sizes;

/// Drop every record whose quasi-identifier group is smaller than `k`.
///
/// Two passes over the data: one to size groups, one to filter. Retained
/// records keep their input order, so `suppressed_count + retained.len()`
/// always equals the input length and downstream diffs stay stable.
pub fn suppress_small_groups(
    records: Vec<GeneralizedRecord>,
    k: usize,
) -> (Vec<GeneralizedRecord>, usize) {
    let sizes = group_sizes(&records);
    let input_len = records.len();
    let retained: Vec<GeneralizedRecord> = records
        .into_iter()
        .filter(|record| sizes.get(&record.quasi_key()).copied().unwrap_or(0) >= k)
        .collect();
    let suppressed_count = input_len - retained.len();
    (retained, suppressed_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnonymizationParams;
    use crate::data::Record;
    use crate::generalize::generalize_record;
    use crate::groups::check_k_anonymity;

    fn build_record(id: u64, age: i64, education: &str) -> GeneralizedRecord {
        let record = Record {
            id,
            age,
            workclass: "Private".into(),
            education: education.into(),
            marital_status: "Never-married".into(),
            occupation: "Sales".into(),
            relationship: "Not-in-family".into(),
            race: "White".into(),
            sex: "Male".into(),
            capital_gain: 0,
            capital_loss: 0,
            hours_per_week: 40,
            native_country: "United-States".into(),
            income: "<=50K".into(),
        };
        generalize_record(record, &AnonymizationParams::new(2, 5))
    }

    /// Groups of sizes {5, 3, 2}; k=3 must suppress exactly the size-2 group.
    fn groups_5_3_2() -> Vec<GeneralizedRecord> {
        let mut records = Vec::new();
        for id in 0..5 {
            records.push(build_record(id, 30, "Bachelors"));
        }
        for id in 5..8 {
            records.push(build_record(id, 50, "HS-grad"));
        }
        for id in 8..10 {
            records.push(build_record(id, 70, "Doctorate"));
        }
        records
    }

    #[test]
    fn suppresses_only_groups_below_threshold() {
        let (retained, suppressed) = suppress_small_groups(groups_5_3_2(), 3);
        assert_eq!(suppressed, 2);
        assert_eq!(retained.len(), 8);
        let post = check_k_anonymity(&retained, 3);
        assert!(post.satisfies_k);
        assert_eq!(post.violation_count, 0);
    }

    #[test]
    fn retained_records_preserve_input_order() {
        let (retained, _) = suppress_small_groups(groups_5_3_2(), 3);
        let ids: Vec<u64> = retained.iter().map(|r| r.record.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn conserves_record_count() {
        let input = groups_5_3_2();
        let input_len = input.len();
        for k in 1..=6 {
            let (retained, suppressed) = suppress_small_groups(input.clone(), k);
            assert_eq!(retained.len() + suppressed, input_len);
        }
    }

    #[test]
    fn single_group_survives_any_feasible_k() {
        let records: Vec<GeneralizedRecord> =
            (0..100).map(|id| build_record(id, 40, "Masters")).collect();
        for k in [1usize, 2, 50, 100] {
            let (retained, suppressed) = suppress_small_groups(records.clone(), k);
            assert_eq!(suppressed, 0, "k={k} must not suppress a size-100 group");
            assert_eq!(retained.len(), 100);
        }
    }

    #[test]
    fn suppressed_count_is_monotone_in_k() {
        let input = groups_5_3_2();
        let mut previous = 0;
        for k in 1..=8 {
            let (_, suppressed) = suppress_small_groups(input.clone(), k);
            assert!(
                suppressed >= previous,
                "raising k from {} to {k} suppressed fewer rows",
                k - 1
            );
            previous = suppressed;
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let (retained, suppressed) = suppress_small_groups(Vec::new(), 5);
        assert!(retained.is_empty());
        assert_eq!(suppressed, 0);
    }
}
