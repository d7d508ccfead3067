use algo_patterns::binary_search;
use proptest::prelude::*;

fn sorted_unique(mut v: Vec<i32>) -> Vec<i32> {
    v.sort_unstable();
    v.dedup();
    v
}

proptest! {
    #[test]
    fn finds_every_present_value(raw in prop::collection::vec(-500i32..500, 0usize..60)) {
        let sorted = sorted_unique(raw);
        for (i, v) in sorted.iter().enumerate() {
            prop_assert_eq!(binary_search(&sorted, v), Some(i));
        }
    }

    #[test]
    fn agrees_with_membership(raw in prop::collection::vec(-50i32..50, 0usize..40), target in -60i32..60) {
        let sorted = sorted_unique(raw);
        match binary_search(&sorted, &target) {
            Some(i) => prop_assert_eq!(sorted[i], target),
            None => prop_assert!(!sorted.contains(&target)),
        }
    }

    #[test]
    fn duplicates_still_hit_a_matching_index(raw in prop::collection::vec(0i32..5, 1usize..30), target in 0i32..5) {
        let mut sorted = raw;
        sorted.sort_unstable();
        match binary_search(&sorted, &target) {
            Some(i) => prop_assert_eq!(sorted[i], target),
            None => prop_assert!(!sorted.contains(&target)),
        }
    }

    #[test]
    fn unsorted_input_never_reports_a_wrong_index(values in prop::collection::vec(-20i32..20, 0usize..30), target in -20i32..20) {
        if let Some(i) = binary_search(&values, &target) {
            prop_assert_eq!(values[i], target);
        }
    }
}

#[test]
fn out_of_range_targets_miss() {
    let v = [1, 3, 5, 7, 9];
    assert_eq!(binary_search(&v, &i32::MIN), None);
    assert_eq!(binary_search(&v, &i32::MAX), None);
}
