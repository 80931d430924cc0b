//! Property-based tests for option laws.
//!
//! This module verifies that options satisfy:
//!
//! - **None absorption**: every combinator on `None` yields `None`
//! - **Functor laws**: identity and composition for `map`
//! - **Monad laws**: left identity and right identity for `flat_map`
//! - **Filter laws**: constant predicates and the filter/filter_not split
//! - **Laziness**: a lazy option behaves like the option it computes
//! - **Memoization**: a lazy computation runs at most once

use lambars_option::{Configuration, NONE, Optional, Value};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |value| value.is_finite())
            .prop_map(Value::from),
        ".*".prop_map(Value::from),
    ]
}

// =============================================================================
// None Absorption
// =============================================================================

proptest! {
    /// None absorption: map never produces a value from None
    #[test]
    fn prop_none_absorbs_map(value in scalar()) {
        prop_assert_eq!(NONE.map(move |_| value), NONE);
    }
}

proptest! {
    /// None absorption: get_or_else always returns the fallback
    #[test]
    fn prop_none_get_or_else_returns_default(value in scalar()) {
        prop_assert_eq!(NONE.get_or_else(value.clone()), value);
    }
}

// =============================================================================
// Creation
// =============================================================================

proptest! {
    /// Any non-sentinel value round-trips through create
    #[test]
    fn prop_create_holds_value(value in scalar()) {
        let option = Optional::create(value.clone(), Configuration::new());
        prop_assert_eq!(option.get(), Ok(value));
    }
}

proptest! {
    /// A value equal to the configured sentinel always yields None
    #[test]
    fn prop_sentinel_yields_none(value in scalar()) {
        let configuration = Configuration::new().with_none_value(value.clone());
        prop_assert!(Optional::create(value, configuration).is_empty());
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor identity: map(id) == id
    #[test]
    fn prop_map_identity(value in scalar()) {
        let option = Optional::create(value, Configuration::new());
        prop_assert_eq!(option.clone().map(|value| value), option);
    }
}

proptest! {
    /// Functor composition: map(f).map(g) == map(g . f)
    #[test]
    fn prop_map_composition(value in any::<i64>()) {
        let function = |value: Value| value.as_int().map_or(Value::Null, |number| Value::from(number.wrapping_mul(2)));
        let other = |value: Value| value.as_int().map_or(Value::Null, |number| Value::from(number.wrapping_add(1)));

        let option = Optional::create(value, Configuration::new());
        let chained = option.clone().map(function).map(other);
        let composed = option.map(|value| other(function(value)));

        prop_assert_eq!(chained, composed);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left identity: create(a).flat_map(f) == f(a)
    #[test]
    fn prop_flat_map_left_identity(value in scalar()) {
        let function = |value: Value| Optional::some(Value::list([value]));

        let left = Optional::create(value.clone(), Configuration::new()).flat_map(function).unwrap();
        prop_assert_eq!(left, function(value));
    }
}

proptest! {
    /// Right identity: m.flat_map(some) == m
    #[test]
    fn prop_flat_map_right_identity(value in scalar()) {
        let option = Optional::some(value);
        prop_assert_eq!(option.clone().flat_map(|value| Optional::some(value)).unwrap(), option);
    }
}

// =============================================================================
// Filter Laws
// =============================================================================

proptest! {
    /// Filter identity: filter(const true) == id
    #[test]
    fn prop_filter_identity(value in scalar()) {
        let option = Optional::some(value);
        prop_assert_eq!(option.clone().filter(|_| true), option);
    }
}

proptest! {
    /// Filter annihilation: filter(const false) == None
    #[test]
    fn prop_filter_false_yields_none(value in scalar()) {
        prop_assert_eq!(Optional::some(value).filter(|_| false), NONE);
    }
}

proptest! {
    /// filter and filter_not partition a populated option
    #[test]
    fn prop_filter_not_is_complement(value in scalar(), keep in any::<bool>()) {
        let option = Optional::some(value);
        let kept = option.clone().filter(|_| keep).is_defined();
        let rejected = option.filter_not(|_| keep).is_defined();
        prop_assert!(kept != rejected);
    }
}

// =============================================================================
// Laziness and Memoization
// =============================================================================

proptest! {
    /// A lazy option answers exactly like the option it computes
    #[test]
    fn prop_lazy_is_transparent(value in scalar(), defined in any::<bool>()) {
        let eager = if defined { Optional::some(value) } else { NONE };
        let computed = eager.clone();
        let lazy = Optional::lazy(move || computed);

        prop_assert_eq!(lazy.is_defined(), eager.is_defined());
        prop_assert_eq!(lazy.get(), eager.get());
        prop_assert_eq!(lazy.into_value(), eager.into_value());
    }
}

proptest! {
    /// Memoization: the computation runs at most once
    #[test]
    fn prop_lazy_memoization(value in scalar(), accesses in 1_usize..8) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let lazy = Optional::lazy(move || {
            counter.set(counter.get() + 1);
            Optional::some(value)
        });

        for _ in 0..accesses {
            let _ = lazy.get();
        }

        prop_assert_eq!(calls.get(), 1);
    }
}
