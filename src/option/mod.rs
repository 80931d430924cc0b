//! The option type and its combinators.
//!
//! [`Optional`] is a closed sum type over the empty variant, the generic
//! populated variant, the typed populated variants and the lazily computed
//! variant. Every combinator is defined once here and dispatches on the
//! variant: the empty variant short-circuits without invoking any closure,
//! populated variants apply the closure to their value, and a lazy option
//! forces its computation and forwards to the realized option.
//!
//! # Examples
//!
//! ```rust
//! use lambars_option::{Configuration, Optional, Value};
//!
//! let name = Optional::create("lambars", Configuration::new())
//!     .map(|value| format!("{}-option", value.as_str().unwrap_or_default()))
//!     .filter(|value| value.as_str().is_some_and(|text| text.len() > 3));
//!
//! assert_eq!(name.get_or_else("unknown"), Value::from("lambars-option"));
//!
//! let missing = Optional::create(Value::Null, Configuration::new());
//! assert!(missing.is_empty());
//! assert_eq!(missing.get_or_else("unknown"), Value::from("unknown"));
//! ```

mod create;
mod input;
mod some;

use std::fmt;

pub use input::{Input, Thunk};
pub use some::SomeValue;

pub(crate) use create::{Target, create};

use crate::config::Configuration;
use crate::control::LazyOption;
use crate::error::{OptionError, ResultSource, UnexpectedResultError};
use crate::typed::TypedSome;
use crate::value::Value;

/// The concrete variant of an [`Optional`].
///
/// Creation from an existing option keeps the instance when its kind
/// already matches the requested variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// The empty variant.
    None,
    /// The generic populated variant.
    Some,
    /// `SomeBoolean`.
    Boolean,
    /// `SomeInteger`.
    Integer,
    /// `SomeFloat`.
    Float,
    /// `SomeArray`.
    Array,
    /// `SomeString`.
    String,
    /// `LazyOption`.
    Lazy,
}

impl OptionKind {
    /// Returns the name of the variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Some => "Some",
            Self::Boolean => "SomeBoolean",
            Self::Integer => "SomeInteger",
            Self::Float => "SomeFloat",
            Self::Array => "SomeArray",
            Self::String => "SomeString",
            Self::Lazy => "LazyOption",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A value that is either absent or present.
///
/// # Examples
///
/// ```rust
/// use lambars_option::{Configuration, NONE, Optional, Value};
///
/// let some = Optional::some(21).map(|value| value.as_int().unwrap_or(0) * 2);
/// assert_eq!(some.get(), Ok(Value::from(42)));
///
/// assert_eq!(NONE.map(|_| 1), NONE);
/// assert!(NONE.get().is_err());
/// ```
#[derive(Clone, Default)]
pub enum Optional {
    /// No value.
    #[default]
    None,
    /// A value of any type.
    Some(SomeValue<Value>),
    /// A value coerced to one specific type.
    Typed(TypedSome),
    /// An option computed on first use.
    Lazy(LazyOption),
}

/// The empty option.
pub const NONE: Optional = Optional::None;

impl Optional {
    /// Creates an option from a value, an existing option or a callable.
    ///
    /// A value equal to the configured sentinel (`Null` unless
    /// `none_value` is set) yields `None`; any other value yields the
    /// generic populated variant. Callables are not invoked here: the
    /// result is a lazy option that creates from the callable's return
    /// value when first used.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{Configuration, Input, Optional};
    ///
    /// assert!(Optional::create(false, Configuration::new()).is_defined());
    ///
    /// let configuration = Configuration::new().with_none_value(false);
    /// assert!(Optional::create(false, configuration).is_empty());
    ///
    /// let lazy = Optional::create(Input::call(|| 42), Configuration::new());
    /// assert!(lazy.is_lazy());
    /// ```
    pub fn create(input: impl Into<Input>, configuration: Configuration) -> Self {
        create(Target::GENERIC, input.into(), configuration)
    }

    /// Creates the generic populated variant directly.
    ///
    /// The sentinel check of [`Optional::create`] is skipped, so
    /// `Optional::some(Value::Null)` holds `Null`.
    pub fn some(value: impl Into<Value>) -> Self {
        Self::Some(SomeValue::new(value.into(), Configuration::defaults()))
    }

    /// Returns the empty option.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a lazy option from a computation returning an option.
    pub fn lazy<F, R>(computation: F) -> Self
    where
        F: FnOnce() -> R + 'static,
        R: Into<Input>,
    {
        Self::Lazy(LazyOption::new(computation))
    }

    /// Returns the concrete variant, without forcing a lazy option.
    #[must_use]
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::None => OptionKind::None,
            Self::Some(_) => OptionKind::Some,
            Self::Typed(typed) => typed.kind(),
            Self::Lazy(_) => OptionKind::Lazy,
        }
    }

    /// Returns `true` for a lazy option.
    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Returns the generic populated variant, if this is one.
    #[must_use]
    pub const fn as_some(&self) -> Option<&SomeValue<Value>> {
        match self {
            Self::Some(some) => Some(some),
            _ => None,
        }
    }

    /// Returns the typed populated variant, if this is one.
    #[must_use]
    pub const fn as_typed(&self) -> Option<&TypedSome> {
        match self {
            Self::Typed(typed) => Some(typed),
            _ => None,
        }
    }

    /// Returns the configuration of the populated variant.
    ///
    /// A lazy option is forced first; the empty variant has none.
    #[must_use]
    pub fn configuration(&self) -> Option<Configuration> {
        match self {
            Self::None => None,
            Self::Some(some) => Some(some.configuration().clone()),
            Self::Typed(typed) => Some(typed.configuration().clone()),
            Self::Lazy(lazy) => lazy.force().configuration(),
        }
    }

    pub(crate) fn configuration_mut(&mut self) -> Option<&mut Configuration> {
        match self {
            Self::Some(some) => Some(some.configuration_mut()),
            Self::Typed(typed) => Some(typed.configuration_mut()),
            Self::None | Self::Lazy(_) => None,
        }
    }

    /// Returns `true` if a value is present.
    ///
    /// # Panics
    ///
    /// Panics if a lazy option's computation does not produce an option.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        match self {
            Self::None => false,
            Self::Some(_) | Self::Typed(_) => true,
            Self::Lazy(lazy) => lazy.force().is_defined(),
        }
    }

    /// Returns `true` if no value is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_defined()
    }

    /// Returns the value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::AbsentValue`] for the empty variant.
    pub fn get(&self) -> Result<Value, OptionError> {
        self.current().ok_or(OptionError::AbsentValue)
    }

    /// Returns the value, or `default` if there is none.
    pub fn get_or_else(&self, default: impl Into<Value>) -> Value {
        self.current().unwrap_or_else(|| default.into())
    }

    /// Returns the value, or the result of `function` if there is none.
    ///
    /// `function` is only invoked for the empty variant.
    pub fn get_or_call<F, R>(&self, function: F) -> Value
    where
        F: FnOnce() -> R,
        R: Into<Value>,
    {
        self.current().unwrap_or_else(|| function().into())
    }

    /// Returns the value, or hands `error` back to the caller.
    ///
    /// # Errors
    ///
    /// Returns `error` unchanged for the empty variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{NONE, Optional, Value};
    ///
    /// assert_eq!(Optional::some(1).get_or_throw("missing"), Ok(Value::from(1)));
    /// assert_eq!(NONE.get_or_throw("missing"), Err("missing"));
    /// ```
    pub fn get_or_throw<E>(&self, error: E) -> Result<Value, E> {
        self.current().ok_or(error)
    }

    /// Consumes the option, returning the value if there is one.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::None => None,
            Self::Some(some) => Some(some.into_value()),
            Self::Typed(typed) => Some(typed.into_value()),
            Self::Lazy(lazy) => lazy.into_realized().into_value(),
        }
    }

    /// Applies `function` to the value and creates a new option from the
    /// result.
    ///
    /// The result goes through the same creation routine as the receiver's
    /// variant, with the receiver's configuration: a result equal to the
    /// sentinel yields `None`, and a typed option stays typed or becomes
    /// `None` if the result cannot be coerced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{NONE, Optional, Value};
    ///
    /// let doubled = Optional::some(2).map(|value| value.as_int().unwrap_or(0) * 2);
    /// assert_eq!(doubled, Optional::some(4));
    ///
    /// assert!(Optional::some(2).map(|_| Value::Null).is_empty());
    /// assert_eq!(NONE.map(|_| -> Value { unreachable!() }), NONE);
    /// ```
    #[must_use]
    pub fn map<F, R>(self, function: F) -> Self
    where
        F: FnOnce(Value) -> R,
        R: Into<Input>,
    {
        match self.into_parts() {
            Some((target, value, configuration)) => {
                create(target, function(value).into(), configuration)
            }
            None => Self::None,
        }
    }

    /// Applies `function`, which must return an option, to the value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnexpectedResult`] if `function` returns
    /// anything other than an option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{Optional, OptionError};
    ///
    /// let option = Optional::some(1).flat_map(|_| Optional::some("one"));
    /// assert_eq!(option, Ok(Optional::some("one")));
    ///
    /// let error = Optional::some(1).flat_map(|_| 5).unwrap_err();
    /// assert!(matches!(error, OptionError::UnexpectedResult(_)));
    /// ```
    pub fn flat_map<F, R>(self, function: F) -> Result<Self, OptionError>
    where
        F: FnOnce(Value) -> R,
        R: Into<Input>,
    {
        let Some(value) = self.into_value() else {
            return Ok(Self::None);
        };

        match function(value).into() {
            Input::Option(option) => Ok(option),
            other => Err(UnexpectedResultError {
                source: ResultSource::FlatMap,
                found: other.describe(),
            }
            .into()),
        }
    }

    /// Keeps the option if `predicate` returns `true` for its value.
    #[must_use]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&Value) -> bool,
    {
        match self.current() {
            Some(value) if predicate(&value) => self.realized(),
            _ => Self::None,
        }
    }

    /// Keeps the option if `predicate` returns `false` for its value.
    #[must_use]
    pub fn filter_not<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&Value) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Keeps the option if its value is strictly equal to `value`.
    #[must_use]
    pub fn select(self, value: &Value) -> Self {
        self.filter(|current| current == value)
    }

    /// Keeps the option if its value is not strictly equal to `value`.
    #[must_use]
    pub fn reject(self, value: &Value) -> Self {
        self.filter(|current| current != value)
    }

    /// Combines `initial` with the value, value on the right.
    ///
    /// Returns `initial` unchanged for the empty variant.
    pub fn fold_left<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnOnce(B, Value) -> B,
    {
        match self.current() {
            Some(value) => function(initial, value),
            None => initial,
        }
    }

    /// Combines the value with `initial`, value on the left.
    ///
    /// Returns `initial` unchanged for the empty variant.
    pub fn fold_right<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnOnce(Value, B) -> B,
    {
        match self.current() {
            Some(value) => function(value, initial),
            None => initial,
        }
    }

    /// Invokes `function` with the value for its side effect.
    #[must_use]
    pub fn for_all<F>(self, function: F) -> Self
    where
        F: FnOnce(&Value),
    {
        if let Some(value) = self.current() {
            function(&value);
        }
        self.realized()
    }

    /// Returns `self` if a value is present, otherwise `alternative`.
    ///
    /// `alternative` is returned as given, so a lazy alternative is not
    /// forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{Optional, Value};
    ///
    /// let fallback = Optional::lazy(|| -> Optional { panic!("must not be called") });
    /// let option = Optional::some("a").or_else(fallback);
    /// assert_eq!(option.get(), Ok(Value::from("a")));
    /// ```
    #[must_use]
    pub fn or_else(self, alternative: Self) -> Self {
        if self.is_defined() {
            self.realized()
        } else {
            alternative
        }
    }

    /// Returns `self` if a value is present, otherwise a lazy option
    /// computed by `computation`.
    #[must_use]
    pub fn or_else_with<F, R>(self, computation: F) -> Self
    where
        F: FnOnce() -> R + 'static,
        R: Into<Input>,
    {
        self.or_else(Self::lazy(computation))
    }

    /// Replaces the value.
    ///
    /// A typed option validates the value's type first; see
    /// [`SomeType::set_value`](crate::SomeType::set_value).
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::AbsentValue`] for the empty variant and
    /// [`OptionError::TypeMismatch`] when a typed option rejects the value.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<(), OptionError> {
        match self {
            Self::None => Err(OptionError::AbsentValue),
            Self::Some(some) => {
                some.set(value.into());
                Ok(())
            }
            Self::Typed(typed) => typed.set_value(value.into()),
            Self::Lazy(lazy) => lazy.try_force_mut()?.set(value),
        }
    }

    /// Returns an iterator over the value, if any.
    pub fn iter(&self) -> std::option::IntoIter<Value> {
        self.current().into_iter()
    }

    fn current(&self) -> Option<Value> {
        match self {
            Self::None => None,
            Self::Some(some) => Some(some.value().clone()),
            Self::Typed(typed) => Some(typed.to_value()),
            Self::Lazy(lazy) => lazy.force().current(),
        }
    }

    fn realized(self) -> Self {
        match self {
            Self::Lazy(lazy) => lazy.into_realized().realized(),
            other => other,
        }
    }

    fn into_parts(self) -> Option<(Target, Value, Configuration)> {
        match self {
            Self::None => None,
            Self::Some(some) => {
                let configuration = some.configuration().clone();
                Some((Target::GENERIC, some.into_value(), configuration))
            }
            Self::Typed(typed) => {
                let target = typed.target();
                let configuration = typed.configuration().clone();
                Some((target, typed.into_value(), configuration))
            }
            Self::Lazy(lazy) => lazy.into_realized().into_parts(),
        }
    }
}

impl PartialEq for Optional {
    /// Populated options are equal when they are the same variant holding
    /// strictly equal values. Lazy options are equal only to themselves.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Some(left), Self::Some(right)) => left.value() == right.value(),
            (Self::Typed(left), Self::Typed(right)) => left == right,
            (Self::Lazy(left), Self::Lazy(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl fmt::Debug for Optional {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => formatter.write_str("None"),
            Self::Some(some) => formatter.debug_tuple("Some").field(some.value()).finish(),
            Self::Typed(typed) => fmt::Debug::fmt(typed, formatter),
            Self::Lazy(lazy) => fmt::Debug::fmt(lazy, formatter),
        }
    }
}

impl From<SomeValue<Value>> for Optional {
    fn from(some: SomeValue<Value>) -> Self {
        Self::Some(some)
    }
}

impl From<TypedSome> for Optional {
    fn from(typed: TypedSome) -> Self {
        Self::Typed(typed)
    }
}

impl From<LazyOption> for Optional {
    fn from(lazy: LazyOption) -> Self {
        Self::Lazy(lazy)
    }
}

impl IntoIterator for Optional {
    type Item = Value;
    type IntoIter = std::option::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl IntoIterator for &Optional {
    type Item = Value;
    type IntoIter = std::option::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
