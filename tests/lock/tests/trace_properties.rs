//! Property lock tests over arbitrary sorted inputs.

use bisect_search::error::TraceError;
use bisect_search::estimate::{probe_bound, worst_case_probes};
use bisect_search::tracer::trace;
use lock_tests::trace_test_helpers::assert_trace_invariants;
use proptest::prelude::*;

fn sorted_vec(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 0..max_len).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

proptest! {
    #[test]
    fn structural_invariants_hold(values in sorted_vec(300), target in -1100i64..1100) {
        let result = trace(&values, &target).unwrap();
        assert_trace_invariants(&values, target, &result);
    }

    #[test]
    fn members_are_always_found(values in sorted_vec(300).prop_filter("non-empty", |v| !v.is_empty()), pick in any::<prop::sample::Index>()) {
        let target = values[pick.index(values.len())];
        let result = trace(&values, &target).unwrap();
        let index = result.found_index().expect("member must be found");
        prop_assert_eq!(values[index], target);
    }

    #[test]
    fn step_count_within_bound(values in sorted_vec(2000), target in any::<i64>()) {
        let result = trace(&values, &target).unwrap();
        prop_assert!(result.steps.len() <= probe_bound(values.len()) as usize);
    }

    #[test]
    fn repeated_calls_are_identical(values in sorted_vec(100), target in -1100i64..1100) {
        let first = trace(&values, &target).unwrap();
        let second = trace(&values, &target).unwrap();
        prop_assert_eq!(first.digest().unwrap(), second.digest().unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unsorted_input_is_rejected(mut values in prop::collection::vec(any::<i64>(), 2..50), target in any::<i64>()) {
        values.sort_unstable();
        prop_assume!(values.first() != values.last());
        values.reverse();
        let err = trace(&values, &target).unwrap_err();
        let is_not_sorted = matches!(err, TraceError::NotSorted { .. });
        prop_assert!(is_not_sorted, "expected NotSorted, got {:?}", err);
    }

    #[test]
    fn estimator_matches_worst_case_trace(n in 0usize..5000) {
        let values: Vec<usize> = (0..n).collect();
        let result = trace(&values, &n).unwrap();
        prop_assert_eq!(result.steps.len(), worst_case_probes(n) as usize);
    }
}
