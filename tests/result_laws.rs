//! Property-based tests for `Result` combinator laws.
//!
//! - **Exclusivity**: exactly one of `is_success`, `is_failure`, `is_empty` holds
//! - **Map identity / composition**
//! - **Flat-map left identity**: `success(v).flat_map(f) == f(v)`
//! - **Filter law**: `success(v).filter(p)` is `success(v)` iff `p(&v)`, else empty
//! - **Pass-through**: failures keep their exact error through value combinators

#![cfg(feature = "result")]

use lambdadepot::result::{Error, Result};
use proptest::prelude::*;

fn any_result() -> impl Strategy<Value = Result<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Result::success),
        "[a-z]{1,8}".prop_map(|message| Result::failure(Error::msg(message))),
        Just(Result::empty()),
    ]
}

fn checked_half(value: i32) -> Result<i32> {
    if value % 2 == 0 {
        Result::success(value / 2)
    } else {
        Result::empty()
    }
}

proptest! {
    /// Exactly one state predicate holds
    #[test]
    fn prop_exactly_one_state(result in any_result()) {
        let states = [result.is_success(), result.is_failure(), result.is_empty()];
        prop_assert_eq!(states.iter().filter(|state| **state).count(), 1);
    }

    /// Identity Law: mapping the identity function changes nothing
    #[test]
    fn prop_map_identity(result in any_result()) {
        prop_assert_eq!(result.clone().map(|value| value), result);
    }

    /// Composition Law: mapping twice equals mapping the composition
    #[test]
    fn prop_map_composition(result in any_result()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);

        let left = result.clone().map(function1).map(function2);
        let right = result.map(|value| function2(function1(value)));

        prop_assert_eq!(left, right);
    }

    /// Left Identity: success(v).flat_map(f) == f(v)
    #[test]
    fn prop_flat_map_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Result::success(value).flat_map(checked_half), checked_half(value));
    }

    /// Filter law on success values
    #[test]
    fn prop_filter_law(value in any::<i32>(), threshold in any::<i32>()) {
        let filtered = Result::success(value).filter(|candidate| *candidate > threshold);
        if value > threshold {
            prop_assert_eq!(filtered, Result::success(value));
        } else {
            prop_assert!(filtered.is_empty());
        }
    }

    /// success_or_empty agrees with the Option it is built from
    #[test]
    fn prop_success_or_empty_round_trip(option in any::<Option<i32>>()) {
        prop_assert_eq!(Result::success_or_empty(option).into_option(), option);
    }

    /// Failures pass through value combinators with the same error instance
    #[test]
    fn prop_failure_pass_through(message in "[a-z]{1,8}", value in any::<i32>()) {
        let error = Error::msg(message);
        let result: Result<i32> = Result::Failure(error.clone())
            .map(|n: i32| n.wrapping_add(value))
            .filter(|n| *n > value)
            .flat_map(checked_half)
            .if_empty_return(value);
        prop_assert!(result.error().is_some_and(|actual| actual.ptr_eq(&error)));
    }

    /// if_failure_return never touches a success
    #[test]
    fn prop_if_failure_return_scoping(value in any::<i32>(), fallback in any::<i32>()) {
        prop_assert_eq!(Result::success(value).if_failure_return(fallback), Result::success(value));
        prop_assert_eq!(
            Result::<i32>::failure(Error::msg("x")).if_failure_return(fallback),
            Result::success(fallback)
        );
    }
}
