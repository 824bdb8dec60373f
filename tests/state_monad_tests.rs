//! Integration tests for tree construction and evaluation.
//!
//! Covers the end-to-end combinator surface: leaf construction, value
//! transforms, monadic chaining, state access, pairing, and the
//! convenience runners.

use rstest::rstest;
use statemonad::{from_value, get, put};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "division by zero")
    }
}

impl Error for DivisionByZero {}

// =============================================================================
// Construction and Evaluation
// =============================================================================

#[rstest]
fn init_leaf_keeps_the_state_and_yields_the_constant() {
    let monad = from_value::<i32, _>("seed");
    let (state, value) = monad.apply(3).unwrap();
    assert_eq!(state, 3);
    assert_eq!(value, "seed");
}

#[rstest]
fn map_increments_the_value() {
    let monad = from_value::<(), _>(5).map(|value| value + 1);
    let (state, value) = monad.apply(()).unwrap();
    assert_eq!(state, ());
    assert_eq!(value, 6);
}

#[rstest]
fn get_then_put_captures_the_prior_state() {
    let monad = from_value::<i32, _>(10)
        .get()
        .flat_map(|state| from_value(state).put(state + 1));
    let (state, value) = monad.apply(10).unwrap();
    assert_eq!(state, 11);
    assert_eq!(value, 10);
}

#[rstest]
fn zip_pairs_two_computations() {
    let monad = from_value::<i32, _>(1).zip(from_value(2));
    let (state, value) = monad.apply(0).unwrap();
    assert_eq!(state, 0);
    assert_eq!(value, (1, 2));
}

#[rstest]
fn failing_transform_surfaces_one_operator_error() {
    let monad = from_value::<(), _>(1).try_map(|numerator: i32| {
        numerator.checked_div(0).ok_or(DivisionByZero)
    });
    let error = monad.apply(()).unwrap_err();
    assert_eq!(error.operator(), "map");
    assert!(error.to_string().contains("state_monad_tests.rs"));
    let source = error.source().expect("cause must be chained");
    assert!(source.downcast_ref::<DivisionByZero>().is_some());
}

// =============================================================================
// State Access
// =============================================================================

#[rstest]
#[case(0)]
#[case(-17)]
#[case(42)]
fn get_leaf_yields_the_current_state(#[case] initial: i32) {
    let monad = get::<i32>();
    let (state, value) = monad.apply(initial).unwrap();
    assert_eq!(state, initial);
    assert_eq!(value, initial);
}

#[rstest]
#[case(0)]
#[case(-17)]
#[case(42)]
fn put_leaf_replaces_any_state(#[case] initial: i32) {
    let monad = put(7);
    let (state, ()) = monad.apply(initial).unwrap();
    assert_eq!(state, 7);
}

#[rstest]
fn put_after_a_chain_still_wins() {
    let monad = get::<i32>().map(|state| state * 10).put(1);
    let (state, value) = monad.apply(5).unwrap();
    assert_eq!(state, 1);
    assert_eq!(value, 50);
}

// =============================================================================
// Sequencing
// =============================================================================

#[rstest]
fn then_runs_both_and_keeps_the_second_value() {
    let monad = put(5).then(get::<i32>());
    let (state, value) = monad.apply(0).unwrap();
    assert_eq!(state, 5);
    assert_eq!(value, 5);
}

#[rstest]
fn map2_sees_left_effects_before_right_runs() {
    let left = get::<i32>().flat_map(|state| from_value(state).put(state + 1));
    let right = get::<i32>();
    let monad = left.map2(right, |before, after| after - before);
    let (state, delta) = monad.apply(10).unwrap();
    assert_eq!(state, 11);
    assert_eq!(delta, 1);
}

#[rstest]
fn eval_keeps_the_value_and_exec_keeps_the_state() {
    let monad = get::<i32>().flat_map(|count| from_value(count).put(count + 1));
    assert_eq!(monad.eval(10).unwrap(), 10);
    assert_eq!(monad.exec(10).unwrap(), 11);
}

// =============================================================================
// Reuse and Sharing
// =============================================================================

#[rstest]
fn a_tree_can_be_applied_to_many_states() {
    let monad = get::<i32>().map(|state| state * 2);
    assert_eq!(monad.apply(1).unwrap(), (1, 2));
    assert_eq!(monad.apply(30).unwrap(), (30, 60));
}

#[rstest]
fn a_shared_tree_evaluates_concurrently() {
    let monad = std::sync::Arc::new(get::<i32>().map(|state| state + 1));
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let shared = monad.clone();
            std::thread::spawn(move || shared.apply(offset).unwrap())
        })
        .collect();
    for (offset, handle) in (0..4).zip(handles) {
        assert_eq!(handle.join().unwrap(), (offset, offset + 1));
    }
}

#[rstest]
fn flat_map_chooses_the_continuation_per_value() {
    let monad = get::<i32>().flat_map(|state| {
        if state.is_negative() {
            from_value("negative").put(0)
        } else {
            from_value("non-negative").put(state)
        }
    });
    assert_eq!(monad.apply(-3).unwrap(), (0, "negative"));
    assert_eq!(monad.apply(8).unwrap(), (8, "non-negative"));
}
