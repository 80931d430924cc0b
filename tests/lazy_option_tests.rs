//! Unit tests for LazyOption.
//!
//! Verifies deferral, memoization, argument binding, failure reporting and
//! that every combinator forwards to the realized option.

use lambars_option::{
    Configuration, LazyOption, NONE, OptionError, Optional, ResultSource, UnexpectedResultError,
    Value,
};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

fn counted(result: Optional) -> (Rc<Cell<u32>>, Optional) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let lazy = Optional::lazy(move || {
        counter.set(counter.get() + 1);
        result
    });
    (calls, lazy)
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_from_callable_rejects_non_callable() {
    let error = LazyOption::from_callable(Value::from("invalidCallback"), Vec::new()).unwrap_err();
    assert!(matches!(error, OptionError::InvalidCallable(_)));
    assert_eq!(error.to_string(), "\"invalidCallback\" is not callable.");
}

#[rstest]
fn test_from_callable_binds_arguments() {
    let callable = Value::callable(|arguments: &[Value]| {
        Optional::create(arguments.first().cloned().unwrap_or_default(), Configuration::new())
    });

    let lazy = LazyOption::from_callable(callable.clone(), vec![Value::from("foo")]).unwrap();
    assert_eq!(Optional::from(lazy).get(), Ok(Value::from("foo")));

    let lazy = LazyOption::from_callable(callable, Vec::new()).unwrap();
    assert!(Optional::from(lazy).is_empty());
}

#[rstest]
fn test_with_arguments_receives_arguments() {
    let lazy = LazyOption::with_arguments(
        |arguments| Optional::some(Value::from(arguments)),
        vec![Value::from(1), Value::from(2)],
    );
    assert_eq!(lazy.force().get(), Ok(Value::list([1, 2])));
}

// =============================================================================
// Memoization
// =============================================================================

#[rstest]
fn test_callback_only_invoked_once() {
    let (calls, lazy) = counted(NONE);
    assert_eq!(calls.get(), 0);

    assert!(!lazy.is_defined());
    assert!(lazy.is_empty());
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_clones_share_the_computation() {
    let (calls, lazy) = counted(Optional::some("foo"));
    let clone = lazy.clone();

    assert_eq!(lazy.get(), Ok(Value::from("foo")));
    assert_eq!(clone.get(), Ok(Value::from("foo")));
    assert_eq!(calls.get(), 1);
    assert_eq!(lazy, clone);
}

#[rstest]
fn test_kind_does_not_force() {
    let (calls, lazy) = counted(Optional::some("foo"));
    let _ = lazy.kind();
    assert!(lazy.is_lazy());
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Failure
// =============================================================================

#[rstest]
fn test_callback_returning_none_behaves_as_none() {
    let (_, lazy) = counted(NONE);
    assert_eq!(lazy.get_or_else("alt"), Value::from("alt"));
    assert_eq!(lazy.get_or_call(|| "alt"), Value::from("alt"));
    assert_eq!(lazy.get(), Err(OptionError::AbsentValue));
}

#[rstest]
fn test_try_force_reports_non_option_result() {
    let lazy = LazyOption::new(|| Value::Null);
    let expected = OptionError::from(UnexpectedResultError {
        source: ResultSource::LazyOption,
        found: "null".to_string(),
    });

    assert_eq!(lazy.try_force().err(), Some(expected.clone()));
    assert_eq!(lazy.try_force().err(), Some(expected));
}

#[rstest]
#[should_panic(expected = "Lazy option callbacks must return an Optional, got null.")]
fn test_combinators_panic_on_non_option_result() {
    let option = Optional::from(LazyOption::new(|| Value::Null));
    let _ = option.is_defined();
}

// =============================================================================
// Combinators forward to the realized option
// =============================================================================

#[rstest]
fn test_filter_and_filter_not() {
    let (_, lazy) = counted(Optional::some("foo"));
    assert_eq!(
        lazy.clone().filter(|value| value.as_str() == Some("foo")),
        Optional::some("foo")
    );
    assert!(lazy.filter_not(|value| value.as_str() == Some("foo")).is_empty());
}

#[rstest]
fn test_map_and_flat_map() {
    let (_, lazy) = counted(Optional::some("foo"));
    let mapped = lazy.clone().map(|value| {
        value
            .as_str()
            .map_or(Value::Null, |text| Value::from(text.to_uppercase()))
    });
    assert_eq!(mapped.get(), Ok(Value::from("FOO")));

    let flat = lazy.flat_map(|_| Optional::some("bar")).unwrap();
    assert_eq!(flat.get(), Ok(Value::from("bar")));
}

#[rstest]
fn test_select_and_reject() {
    let (_, lazy) = counted(Optional::some("foo"));
    assert!(lazy.clone().select(&Value::from("foo")).is_defined());
    assert!(lazy.clone().select(&Value::from("bar")).is_empty());
    assert!(lazy.clone().reject(&Value::from("foo")).is_empty());
    assert!(lazy.reject(&Value::from("bar")).is_defined());
}

#[rstest]
fn test_folds() {
    let (_, lazy) = counted(Optional::some(5));
    let add = |left: i64, right: &Value| left + right.as_int().unwrap_or(0);

    assert_eq!(lazy.fold_left(1, |accumulator, value| add(accumulator, &value)), 6);
    assert_eq!(lazy.fold_right(1, |value, accumulator| add(accumulator, &value)), 6);
}

#[rstest]
fn test_for_all_returns_realized_option() {
    let seen = Rc::new(Cell::new(false));
    let flag = Rc::clone(&seen);
    let (_, lazy) = counted(Optional::some("foo"));

    let option = lazy.for_all(move |_| flag.set(true));

    assert!(seen.get());
    assert!(!option.is_lazy());
    assert_eq!(option, Optional::some("foo"));
}

#[rstest]
fn test_or_else() {
    let (_, empty) = counted(NONE);
    assert_eq!(empty.or_else(Optional::some("alt")).get(), Ok(Value::from("alt")));

    let (_, populated) = counted(Optional::some("foo"));
    assert_eq!(populated.or_else(Optional::some("alt")).get(), Ok(Value::from("foo")));
}

#[rstest]
fn test_iteration() {
    let (_, lazy) = counted(Optional::some("foo"));
    assert_eq!(lazy.into_iter().collect::<Vec<_>>(), vec![Value::from("foo")]);
}

#[rstest]
fn test_set_updates_cached_option() {
    let (calls, mut lazy) = counted(Optional::some("foo"));
    lazy.set("bar").unwrap();
    assert_eq!(lazy.get(), Ok(Value::from("bar")));
    assert_eq!(calls.get(), 1);
}
