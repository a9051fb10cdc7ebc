//! Scenario lock tests: the fixed demo cases, checked probe by probe.

use bisect_search::error::TraceError;
use bisect_search::probe::{ProbeOutcome, Window};
use bisect_search::tracer::{trace, TraceOutcome};
use lock_tests::trace_test_helpers::{assert_trace_invariants, DEMO_SEQUENCE};

#[test]
fn demo_list_target_15_found_at_2() {
    let result = trace(&DEMO_SEQUENCE, &15).unwrap();
    assert_eq!(result.outcome, TraceOutcome::Found { index: 2 });
    assert_eq!(result.steps.len(), 3);

    let first = &result.steps[0];
    assert_eq!((first.mid_index, first.mid_value), (3, 20));
    assert_eq!(first.outcome, ProbeOutcome::MoveLeft);

    let second = &result.steps[1];
    assert_eq!((second.mid_index, second.mid_value), (1, 10));
    assert_eq!(second.outcome, ProbeOutcome::MoveRight);

    let third = &result.steps[2];
    assert_eq!((third.mid_index, third.mid_value), (2, 15));
    assert_eq!(third.outcome, ProbeOutcome::Found);

    assert_trace_invariants(&DEMO_SEQUENCE, 15, &result);
}

#[test]
fn demo_list_target_1_not_found_in_3_steps() {
    let result = trace(&DEMO_SEQUENCE, &1).unwrap();
    assert_eq!(result.outcome, TraceOutcome::NotFound);
    assert_eq!(result.found_index(), None);
    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.steps[2].window, Window { left: 0, right: 0 });
    assert_eq!(result.final_window(), None, "final window must be empty");
    assert_trace_invariants(&DEMO_SEQUENCE, 1, &result);
}

#[test]
fn empty_list_not_found_without_steps() {
    let result = trace::<i64>(&[], &42).unwrap();
    assert_eq!(result.outcome, TraceOutcome::NotFound);
    assert!(result.steps.is_empty());
}

#[test]
fn single_element_found_in_one_step() {
    let result = trace(&[7], &7).unwrap();
    assert_eq!(result.found_index(), Some(0));
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].outcome, ProbeOutcome::Found);
}

#[test]
fn unsorted_list_rejected_before_probing() {
    let err = trace(&[3, 1, 2], &2).unwrap_err();
    assert_eq!(err, TraceError::NotSorted { index: 0 });
}

#[test]
fn every_member_of_demo_list_is_found() {
    for (i, value) in DEMO_SEQUENCE.iter().enumerate() {
        let result = trace(&DEMO_SEQUENCE, value).unwrap();
        assert_eq!(result.found_index(), Some(i), "value {value}");
        assert_trace_invariants(&DEMO_SEQUENCE, *value, &result);
    }
}

#[test]
fn gaps_of_demo_list_are_not_found() {
    for target in [0, 6, 12, 17, 22, 28, 33, 39, 41] {
        let result = trace(&DEMO_SEQUENCE, &target).unwrap();
        assert!(!result.is_found(), "target {target}");
        assert_trace_invariants(&DEMO_SEQUENCE, target, &result);
    }
}

#[test]
fn duplicate_tie_break_is_floor_midpoint() {
    // Occurrences of 4 at indices 2..=5. Window [0, 7] probes 3 first.
    let values = [1, 2, 4, 4, 4, 4, 8, 9];
    let result = trace(&values, &4).unwrap();
    assert_eq!(result.found_index(), Some(3));
    assert_eq!(result.steps.len(), 1);
}
