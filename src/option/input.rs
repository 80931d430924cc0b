//! Inputs accepted by the creation routines.

use std::fmt;

use super::Optional;
use crate::control::LazyOption;
use crate::value::{Array, ObjectRef, Value};

/// A deferred computation producing an [`Input`].
pub type Thunk = Box<dyn FnOnce() -> Input>;

/// Something a creation routine can turn into an option.
///
/// Creation classifies its input before anything else: a raw value is
/// checked against the sentinel and wrapped, an existing option is
/// re-coerced, and a callable is deferred behind a
/// [`LazyOption`]. Conversions exist from every primitive accepted by
/// [`Value`] as well as from options.
///
/// # Examples
///
/// ```rust
/// use lambars_option::{Input, Optional, Value};
///
/// assert!(matches!(Input::from(42), Input::Value(Value::Int(42))));
/// assert!(matches!(Input::from(Optional::None), Input::Option(_)));
/// assert!(matches!(Input::call(|| "later"), Input::Callable(_)));
/// ```
pub enum Input {
    /// A raw value.
    Value(Value),
    /// An existing option.
    Option(Optional),
    /// A zero-argument computation, evaluated lazily.
    Callable(Thunk),
}

impl Input {
    /// Wraps a zero-argument function.
    pub fn call<F, R>(function: F) -> Self
    where
        F: FnOnce() -> R + 'static,
        R: Into<Self>,
    {
        Self::Callable(Box::new(move || function().into()))
    }

    /// Describes what kind of input this is, for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Value(value) => value.value_type().to_string(),
            Self::Option(option) => option.kind().to_string(),
            Self::Callable(_) => "callable".to_string(),
        }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Option(option) => formatter.debug_tuple("Option").field(option).finish(),
            Self::Callable(_) => formatter.write_str("Callable(..)"),
        }
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Optional> for Input {
    fn from(option: Optional) -> Self {
        Self::Option(option)
    }
}

impl From<LazyOption> for Input {
    fn from(option: LazyOption) -> Self {
        Self::Option(Optional::Lazy(option))
    }
}

macro_rules! input_from_value {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Input {
                fn from(value: $source) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

input_from_value!(bool, i64, i32, u32, f64, &str, String, Array, Vec<Value>, ObjectRef);
