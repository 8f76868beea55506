//! Property tests for the combinator laws over arbitrary values

use attempt::{Error, ErrorKind, Try};
use proptest::prelude::*;
use std::cell::Cell;

fn cause_strategy() -> impl Strategy<Value = Error> {
    prop_oneof![
        any::<String>().prop_map(Error::other),
        "[a-z]{1,8}".prop_map(|s| Error::captured(s.parse::<u32>().unwrap_err())),
        Just(Error::no_such_element()),
    ]
}

proptest! {
    #[test]
    fn apply_of_value_is_success(v in any::<i64>()) {
        let outcome = Try::apply(|| Ok::<_, Error>(v));
        prop_assert_eq!(&outcome, &Try::success(v));
        prop_assert!(outcome.is_success());
        prop_assert!(!outcome.is_failure());
    }

    #[test]
    fn apply_of_raising_computation_keeps_cause(raw in "[a-z]{1,8}") {
        let raised = raw.parse::<i32>().unwrap_err();
        let outcome = Try::apply(|| raw.parse::<i32>());
        let cause = outcome.get().unwrap_err();
        prop_assert_eq!(cause.downcast_ref::<std::num::ParseIntError>(), Some(&raised));
        prop_assert_eq!(cause, Error::captured(raised));
    }

    #[test]
    fn failure_passes_through_every_combinator(cause in cause_strategy()) {
        let probe = Cell::new(0u32);
        let failure: Try<i64> = Try::failure(cause.clone());

        let mapped = failure.clone().map(|v| { probe.set(probe.get() + 1); v + 1 });
        let chained = failure.clone().flat_map(|v| { probe.set(probe.get() + 1); Try::success(v) });
        let filtered = failure.clone().filter(|_| { probe.set(probe.get() + 1); true });
        failure.for_each(|_| probe.set(probe.get() + 1));

        prop_assert_eq!(probe.get(), 0);
        prop_assert_eq!(mapped, Try::failure(cause.clone()));
        prop_assert_eq!(chained, Try::failure(cause.clone()));
        prop_assert_eq!(filtered, Try::failure(cause));
    }

    #[test]
    fn success_is_untouched_by_recovery(v in any::<i64>()) {
        let probe = Cell::new(false);
        let recovered = Try::success(v).recover(|_| { probe.set(true); 0 });
        let recovered_with = Try::success(v).recover_with(|_| { probe.set(true); Try::success(0) });

        prop_assert!(!probe.get());
        prop_assert_eq!(recovered, Try::success(v));
        prop_assert_eq!(recovered_with, Try::success(v));
    }

    #[test]
    fn recovery_of_failure(cause in cause_strategy(), v in any::<i64>()) {
        let failure: Try<i64> = Try::failure(cause.clone());

        let seen = Cell::new(None);
        let recovered = failure.clone().recover(|e| { seen.set(Some(e == cause)); v });
        prop_assert_eq!(recovered, Try::success(v));
        prop_assert_eq!(seen.get(), Some(true));

        let replacement = Try::failure(Error::other("still failing"));
        prop_assert_eq!(failure.recover_with(|_| replacement.clone()), replacement);
    }

    #[test]
    fn map_and_flat_map_on_success(v in any::<i32>()) {
        prop_assert_eq!(Try::success(v).map(|x| i64::from(x) * 3), Try::success(i64::from(v) * 3));

        let step = |x: i32| if x % 2 == 0 { Try::success(x / 2) } else { Try::failure(Error::other("odd")) };
        prop_assert_eq!(Try::success(v).flat_map(step), step(v));
    }

    #[test]
    fn filter_keeps_or_rejects(v in any::<u16>(), bound in any::<u16>()) {
        let filtered = Try::success(v).filter(|x| *x < bound);
        if v < bound {
            prop_assert_eq!(filtered, Try::success(v));
        } else {
            let cause = filtered.get().unwrap_err();
            prop_assert_eq!(cause.kind(), &ErrorKind::NoSuchElement);
        }
    }

    #[test]
    fn failed_inverts(v in any::<u8>(), cause in cause_strategy()) {
        let inverted = Try::success(v).failed();
        prop_assert_eq!(inverted.cause().map(Error::kind), Some(&ErrorKind::UnsupportedOperation));
        prop_assert_eq!(Try::<u8>::failure(cause.clone()).failed(), Try::success(cause));
    }

    #[test]
    fn accessors_agree(v in any::<i32>(), d in any::<i32>(), cause in cause_strategy()) {
        prop_assert_eq!(Try::success(v).to_optional(), Some(v));
        prop_assert_eq!(Try::<i32>::failure(cause.clone()).to_optional(), None);
        prop_assert_eq!(Try::success(v).get_or_else(d), v);
        prop_assert_eq!(Try::<i32>::failure(cause).get_or_else(d), d);
    }
}
