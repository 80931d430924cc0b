//! Unit tests for the populated generic option.
//!
//! These tests verify that every combinator applies its closure to the held
//! value and that kept options are returned unchanged.

use lambars_option::{Configuration, NONE, Optional, OptionError, Value};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

fn some(value: impl Into<Value>) -> Optional {
    Optional::create(value.into(), Configuration::new())
}

// =============================================================================
// Accessors
// =============================================================================

#[rstest]
fn test_some_accessors_return_value() {
    let option = some("foo");

    assert!(option.is_defined());
    assert!(!option.is_empty());
    assert_eq!(option.get(), Ok(Value::from("foo")));
    assert_eq!(option.get_or_else(Value::Null), Value::from("foo"));
    assert_eq!(
        option.get_or_call(|| -> Value { panic!("must not be called") }),
        Value::from("foo")
    );
    assert_eq!(option.get_or_throw("not found"), Ok(Value::from("foo")));
}

#[rstest]
fn test_some_holds_falsy_values() {
    for value in [Value::from(false), Value::from(0), Value::from(""), Value::from("0")] {
        let option = some(value.clone());
        assert_eq!(option.get(), Ok(value));
    }
}

#[rstest]
fn test_some_default_configuration() {
    let option = some("foo");
    let configuration = option.configuration().unwrap();

    assert_eq!(configuration.none_value(), Value::Null);
    assert!(configuration.throw_exceptions());
    assert!(configuration.has_none_value());
}

// =============================================================================
// map / flat_map
// =============================================================================

#[rstest]
fn test_map_applies_function() {
    let option = some("foo").map(|value| {
        value
            .as_str()
            .and_then(|text| text.get(1..2))
            .map_or(Value::Null, Value::from)
    });
    assert_eq!(option.get(), Ok(Value::from("o")));
}

#[rstest]
fn test_map_to_sentinel_yields_none() {
    let configuration = Configuration::new().with_none_value(false);
    let option = Optional::create("foo", configuration).map(|_| false);
    assert!(option.is_empty());
}

#[rstest]
fn test_map_keeps_configuration() {
    let configuration = Configuration::new().with_none_value(0);
    let option = Optional::create(1, configuration)
        .map(|_| 2)
        .map(|_| 0);
    assert_eq!(option, NONE);
}

#[rstest]
fn test_flat_map_returns_callback_option() {
    let option = some("foo")
        .flat_map(|_| Optional::some("bar"))
        .unwrap();
    assert_eq!(option.get(), Ok(Value::from("bar")));

    let option = some("foo").flat_map(|_| NONE).unwrap();
    assert!(option.is_empty());
}

#[rstest]
fn test_flat_map_rejects_non_option_result() {
    let error = some("foo").flat_map(|value| value).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Callables passed to flat_map() must return an Optional, got string. \
         Maybe you should use map() instead?"
    );
    assert!(matches!(error, OptionError::UnexpectedResult(_)));
}

// =============================================================================
// filter / select / reject
// =============================================================================

#[rstest]
#[case("foo", true)]
#[case("bar", false)]
fn test_filter(#[case] expected: &str, #[case] kept: bool) {
    let option = some("foo").filter(|value| value.as_str() == Some(expected));
    assert_eq!(option.is_defined(), kept);
}

#[rstest]
#[case("foo", false)]
#[case("bar", true)]
fn test_filter_not(#[case] rejected: &str, #[case] kept: bool) {
    let option = some("foo").filter_not(|value| value.as_str() == Some(rejected));
    assert_eq!(option.is_defined(), kept);
}

#[rstest]
#[case(Value::from("foo"), true)]
#[case(Value::from("bar"), false)]
#[case(Value::from(true), false)]
fn test_select_uses_strict_equality(#[case] candidate: Value, #[case] kept: bool) {
    assert_eq!(some("foo").select(&candidate).is_defined(), kept);
}

#[rstest]
#[case(Value::Null, true)]
#[case(Value::from(true), true)]
#[case(Value::from("foo"), false)]
fn test_reject_uses_strict_equality(#[case] candidate: Value, #[case] kept: bool) {
    assert_eq!(some("foo").reject(&candidate).is_defined(), kept);
}

#[rstest]
fn test_select_numeric_string_is_not_integer() {
    assert!(some(1).select(&Value::from("1")).is_empty());
    assert!(some(1).select(&Value::from(1)).is_defined());
}

// =============================================================================
// fold / for_all / iteration
// =============================================================================

#[rstest]
fn test_fold_left_and_fold_right_argument_order() {
    let option = some(5);

    let left = option.fold_left(1, |accumulator, value| {
        assert_eq!(accumulator, 1);
        assert_eq!(value, Value::from(5));
        6
    });
    let right = option.fold_right(1, |value, accumulator| {
        assert_eq!(value, Value::from(5));
        assert_eq!(accumulator, 1);
        6
    });

    assert_eq!(left, 6);
    assert_eq!(right, 6);
}

#[rstest]
fn test_for_all_invokes_function_and_returns_option() {
    let called = Rc::new(Cell::new(false));
    let flag = Rc::clone(&called);

    let option = some("foo").for_all(move |value| {
        assert_eq!(value, &Value::from("foo"));
        flag.set(true);
    });

    assert!(called.get());
    assert_eq!(option, some("foo"));
}

#[rstest]
fn test_iteration_yields_value_once() {
    let option = some("foo");
    let values: Vec<Value> = option.iter().collect();
    assert_eq!(values, vec![Value::from("foo")]);

    let mut count = 0;
    for value in &option {
        assert_eq!(value, Value::from("foo"));
        count += 1;
    }
    assert_eq!(count, 1);
}

// =============================================================================
// or_else
// =============================================================================

#[rstest]
fn test_or_else_keeps_populated_option() {
    let option = some("foo");
    assert_eq!(option.clone().or_else(NONE), option);
    assert_eq!(option.clone().or_else(some("bar")), option);
}

#[rstest]
fn test_or_else_does_not_force_lazy_alternatives() {
    let throws = Optional::lazy(|| -> Optional { panic!("must not be forced") });
    let returns = Optional::lazy(|| Optional::some("bar"));

    let option = some("foo").or_else(returns).or_else(throws);
    assert_eq!(option.get(), Ok(Value::from("foo")));
}

#[rstest]
fn test_or_else_with_multiple_lazy_alternatives() {
    let returns = Optional::lazy(|| Optional::some("foo"));
    let throws = Optional::lazy(|| -> Optional { panic!("must not be forced") });

    let option = NONE.or_else(returns).or_else(throws);
    assert_eq!(option.get(), Ok(Value::from("foo")));
}

// =============================================================================
// set
// =============================================================================

#[rstest]
fn test_set_tracks_original_value() {
    let mut option = some("foo");
    option.set("bar").unwrap();

    let inner = option.as_some().unwrap();
    assert_eq!(inner.value(), &Value::from("bar"));
    assert_eq!(inner.original(), &Value::from("foo"));
    assert!(inner.is_overridden());

    option.set("foo").unwrap();
    assert!(!option.as_some().unwrap().is_overridden());
}
