//! The contract shared by the typed populated variants.

use std::fmt;

use super::{SomeArray, SomeBoolean, SomeFloat, SomeInteger, SomeString};
use crate::config::Configuration;
use crate::error::{OptionError, TypeMismatchError};
use crate::option::{Input, OptionKind, Optional, SomeValue, Target, create};
use crate::value::{Value, ValueType};

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// A populated variant that holds a value of one specific type.
///
/// Each implementor pairs a classifier ([`SomeType::applies`]) with a
/// coercion ([`SomeType::transform_value`]). Creation through
/// [`SomeType::create`] runs the common creation precedence and then,
/// for a raw value, yields `None` unless the classifier accepts the value
/// and the coerced result differs from the sentinel.
///
/// This trait is sealed; the implementors are [`SomeBoolean`],
/// [`SomeInteger`], [`SomeFloat`], [`SomeArray`] and [`SomeString`].
/// Custom coercions plug into [`TypedOption`](super::TypedOption) through
/// a [`Matcher`](super::Matcher) instead.
///
/// # Examples
///
/// ```rust
/// use lambars_option::{Configuration, SomeInteger, SomeType, Value};
///
/// assert!(SomeInteger::applies(&Value::from("42"), &Configuration::new()));
/// assert!(!SomeInteger::applies(&Value::from("42.0"), &Configuration::new()));
///
/// let option = SomeInteger::create("42", Configuration::new());
/// assert_eq!(option.get(), Ok(Value::from(42)));
/// ```
pub trait SomeType: Sealed + Clone + Sized + 'static {
    /// The statically known type of the held value.
    type Payload: Clone + PartialEq + fmt::Debug + Into<Value>;

    /// The variant tag.
    const KIND: OptionKind;

    /// The runtime type of the held value.
    const VALUE_TYPE: ValueType;

    /// The runtime types [`SomeType::set_value`] accepts.
    fn valid_types() -> &'static [ValueType];

    /// The variant's default configuration.
    #[must_use]
    fn default_configuration() -> Configuration {
        Configuration::defaults()
    }

    /// Returns `true` if `value` can be coerced to this variant.
    ///
    /// `configuration` is expected to carry the variant defaults already.
    fn applies(value: &Value, configuration: &Configuration) -> bool;

    /// Coerces `value` to the payload type.
    ///
    /// Returns `None` when the value cannot be coerced; callers check
    /// [`SomeType::applies`] first.
    fn transform_value(value: &Value, configuration: &Configuration) -> Option<Self::Payload>;

    /// Converts a value of one of the valid types, handing anything else
    /// back.
    ///
    /// # Errors
    ///
    /// Returns the value unchanged when its type is not valid.
    fn accept(value: Value) -> Result<Self::Payload, Value>;

    #[doc(hidden)]
    fn from_inner(inner: SomeValue<Self::Payload>) -> Self;

    #[doc(hidden)]
    fn inner(&self) -> &SomeValue<Self::Payload>;

    #[doc(hidden)]
    fn inner_mut(&mut self) -> &mut SomeValue<Self::Payload>;

    #[doc(hidden)]
    fn into_inner(self) -> SomeValue<Self::Payload>;

    /// Wraps this variant in the typed dispatch enum.
    fn into_typed(self) -> TypedSome;

    /// Creates this variant directly, without classification or coercion.
    ///
    /// `configuration` is merged over the variant defaults.
    fn new(value: Self::Payload, configuration: Configuration) -> Self {
        Self::from_inner(SomeValue::new(
            value,
            Self::default_configuration().merge(&configuration),
        ))
    }

    /// Creates an option of this variant from a value, an existing option
    /// or a callable.
    fn create(input: impl Into<Input>, configuration: Configuration) -> Optional {
        create(Target::typed::<Self>(), input.into(), configuration)
    }

    /// Returns the held value.
    fn value(&self) -> &Self::Payload {
        self.inner().value()
    }

    /// Returns the value this option was constructed with.
    fn original(&self) -> &Self::Payload {
        self.inner().original()
    }

    /// Returns `true` if the held value differs from the original.
    fn is_overridden(&self) -> bool {
        self.inner().is_overridden()
    }

    /// Returns the configuration.
    fn configuration(&self) -> &Configuration {
        self.inner().configuration()
    }

    /// Returns the runtime type of the held value.
    fn value_type(&self) -> ValueType {
        Self::VALUE_TYPE
    }

    /// Replaces the held value after checking its runtime type.
    ///
    /// A value outside [`SomeType::valid_types`] is rejected. When the
    /// configuration disables `throw_exceptions` the rejection is silent
    /// and the prior value is kept.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::TypeMismatch`] for a rejected value while
    /// `throw_exceptions` is enabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{Configuration, SomeBoolean, SomeType};
    ///
    /// let mut strict = SomeBoolean::new(true, Configuration::new());
    /// assert!(strict.set_value("test").is_err());
    ///
    /// let mut lenient = SomeBoolean::new(true, Configuration::new().with_throw_exceptions(false));
    /// lenient.set_value("test").unwrap();
    /// assert!(*lenient.value());
    /// assert!(!lenient.is_overridden());
    /// ```
    fn set_value(&mut self, value: impl Into<Value>) -> Result<&mut Self, OptionError> {
        let value = value.into();
        let found = value.value_type();

        match Self::accept(value) {
            Ok(payload) => {
                self.inner_mut().set(payload);
                Ok(self)
            }
            Err(rejected) if !self.configuration().throw_exceptions() => {
                log::warn!(
                    "{} ignored a value of type {found}: {rejected:?}",
                    Self::KIND
                );
                Ok(self)
            }
            Err(_) => Err(TypeMismatchError {
                found,
                valid_types: Self::valid_types().to_vec(),
                variant: Self::KIND.name(),
            }
            .into()),
        }
    }
}

impl Target {
    /// The typed variant `T`.
    pub(crate) fn typed<T: SomeType>() -> Self {
        Self::new(T::KIND, T::default_configuration, construct_typed::<T>)
    }
}

fn construct_typed<T: SomeType>(value: Value, configuration: Configuration) -> Optional {
    let configuration = T::default_configuration().merge(&configuration);

    if !T::applies(&value, &configuration) {
        log::debug!("{} does not apply to {value:?}", T::KIND);
        return Optional::None;
    }

    let Some(payload) = T::transform_value(&value, &configuration) else {
        return Optional::None;
    };

    let coerced: Value = payload.clone().into();
    if coerced == configuration.none_value() {
        return Optional::None;
    }

    T::from_inner(SomeValue::new(payload, configuration))
        .into_typed()
        .into()
}

/// Declares a typed variant around a [`SomeValue`] of its payload.
macro_rules! typed_some {
    ($(#[$meta:meta])* $name:ident($payload:ty) => $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name($crate::option::SomeValue<$payload>);

        impl $crate::typed::some_type::Sealed for $name {}

        impl From<$name> for $crate::option::Optional {
            fn from(some: $name) -> Self {
                Self::Typed($crate::typed::TypedSome::$variant(some))
            }
        }
    };
}

/// Implements the storage plumbing of [`SomeType`] for a tuple struct.
macro_rules! typed_some_storage {
    ($variant:ident) => {
        fn from_inner(inner: $crate::option::SomeValue<Self::Payload>) -> Self {
            Self(inner)
        }

        fn inner(&self) -> &$crate::option::SomeValue<Self::Payload> {
            &self.0
        }

        fn inner_mut(&mut self) -> &mut $crate::option::SomeValue<Self::Payload> {
            &mut self.0
        }

        fn into_inner(self) -> $crate::option::SomeValue<Self::Payload> {
            self.0
        }

        fn into_typed(self) -> $crate::typed::TypedSome {
            $crate::typed::TypedSome::$variant(self)
        }
    };
}

pub(crate) use {typed_some, typed_some_storage};

/// One of the typed populated variants.
#[derive(Clone)]
pub enum TypedSome {
    /// A boolean.
    Boolean(SomeBoolean),
    /// An integer.
    Integer(SomeInteger),
    /// A floating point number.
    Float(SomeFloat),
    /// An array.
    Array(SomeArray),
    /// A string.
    String(SomeString),
}

macro_rules! dispatch {
    ($typed:expr, $some:ident => $body:expr) => {
        match $typed {
            TypedSome::Boolean($some) => $body,
            TypedSome::Integer($some) => $body,
            TypedSome::Float($some) => $body,
            TypedSome::Array($some) => $body,
            TypedSome::String($some) => $body,
        }
    };
}

impl TypedSome {
    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        match self {
            Self::Boolean(_) => OptionKind::Boolean,
            Self::Integer(_) => OptionKind::Integer,
            Self::Float(_) => OptionKind::Float,
            Self::Array(_) => OptionKind::Array,
            Self::String(_) => OptionKind::String,
        }
    }

    /// Returns the runtime type of the held value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        dispatch!(self, some => some.value_type())
    }

    /// Returns the held value as an untyped value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        dispatch!(self, some => some.value().clone().into())
    }

    /// Consumes `self`, returning the held value as an untyped value.
    #[must_use]
    pub fn into_value(self) -> Value {
        dispatch!(self, some => some.into_inner().into_value().into())
    }

    /// Returns the original value as an untyped value.
    #[must_use]
    pub fn original(&self) -> Value {
        dispatch!(self, some => some.original().clone().into())
    }

    /// Returns `true` if the held value differs from the original.
    #[must_use]
    pub fn is_overridden(&self) -> bool {
        dispatch!(self, some => some.is_overridden())
    }

    /// Returns the configuration.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        dispatch!(self, some => some.configuration())
    }

    /// Returns the configuration for in-place modification.
    pub fn configuration_mut(&mut self) -> &mut Configuration {
        dispatch!(self, some => some.inner_mut().configuration_mut())
    }

    /// Replaces the held value after checking its runtime type.
    ///
    /// # Errors
    ///
    /// See [`SomeType::set_value`].
    pub fn set_value(&mut self, value: Value) -> Result<(), OptionError> {
        dispatch!(self, some => some.set_value(value).map(|_| ()))
    }

    /// Returns the boolean variant, if this is one.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<&SomeBoolean> {
        match self {
            Self::Boolean(some) => Some(some),
            _ => None,
        }
    }

    /// Returns the integer variant, if this is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<&SomeInteger> {
        match self {
            Self::Integer(some) => Some(some),
            _ => None,
        }
    }

    /// Returns the float variant, if this is one.
    #[must_use]
    pub const fn as_float(&self) -> Option<&SomeFloat> {
        match self {
            Self::Float(some) => Some(some),
            _ => None,
        }
    }

    /// Returns the array variant, if this is one.
    #[must_use]
    pub const fn as_array(&self) -> Option<&SomeArray> {
        match self {
            Self::Array(some) => Some(some),
            _ => None,
        }
    }

    /// Returns the string variant, if this is one.
    #[must_use]
    pub const fn as_string(&self) -> Option<&SomeString> {
        match self {
            Self::String(some) => Some(some),
            _ => None,
        }
    }

    pub(crate) fn target(&self) -> Target {
        match self {
            Self::Boolean(_) => Target::typed::<SomeBoolean>(),
            Self::Integer(_) => Target::typed::<SomeInteger>(),
            Self::Float(_) => Target::typed::<SomeFloat>(),
            Self::Array(_) => Target::typed::<SomeArray>(),
            Self::String(_) => Target::typed::<SomeString>(),
        }
    }
}

impl PartialEq for TypedSome {
    /// Typed options are equal when they are the same variant holding equal
    /// values.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(left), Self::Boolean(right)) => left.value() == right.value(),
            (Self::Integer(left), Self::Integer(right)) => left.value() == right.value(),
            (Self::Float(left), Self::Float(right)) => left.value() == right.value(),
            (Self::Array(left), Self::Array(right)) => left.value() == right.value(),
            (Self::String(left), Self::String(right)) => left.value() == right.value(),
            _ => false,
        }
    }
}

impl fmt::Debug for TypedSome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, some => formatter
            .debug_tuple(self.kind().name())
            .field(some.value())
            .finish())
    }
}

impl From<TypedSome> for Value {
    fn from(typed: TypedSome) -> Self {
        typed.into_value()
    }
}
