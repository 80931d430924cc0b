//! Error types for option creation, access and coercion.
//!
//! Every failure in this crate is reported at the call site as an
//! [`OptionError`]. Nothing is retried and nothing is reported through a
//! side channel: either the caller receives the error, or (for type
//! mismatches with `throw_exceptions` disabled) the failing assignment is
//! silently ignored.

use std::fmt;

use crate::value::ValueType;

/// Represents an attempt to invoke something that is not invocable.
///
/// # Examples
///
/// ```rust
/// use lambars_option::InvalidCallableError;
///
/// let error = InvalidCallableError {
///     description: "string(\"foo\")".to_string(),
/// };
/// assert_eq!(format!("{error}"), "string(\"foo\") is not callable.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCallableError {
    /// A description of the value that was expected to be callable.
    pub description: String,
}

impl fmt::Display for InvalidCallableError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} is not callable.", self.description)
    }
}

impl std::error::Error for InvalidCallableError {}

/// Where a computation that had to produce an option was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// The callback passed to `flat_map`.
    FlatMap,
    /// The deferred computation of a `LazyOption`.
    LazyOption,
}

/// Represents a computation that returned something other than an option.
///
/// # Examples
///
/// ```rust
/// use lambars_option::{ResultSource, UnexpectedResultError};
///
/// let error = UnexpectedResultError {
///     source: ResultSource::FlatMap,
///     found: "integer".to_string(),
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Callables passed to flat_map() must return an Optional, got integer. \
///      Maybe you should use map() instead?"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedResultError {
    /// The computation that misbehaved.
    pub source: ResultSource,
    /// A description of what the computation returned instead.
    pub found: String,
}

impl fmt::Display for UnexpectedResultError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            ResultSource::FlatMap => write!(
                formatter,
                "Callables passed to flat_map() must return an Optional, got {}. \
                 Maybe you should use map() instead?",
                self.found
            ),
            ResultSource::LazyOption => write!(
                formatter,
                "Lazy option callbacks must return an Optional, got {}.",
                self.found
            ),
        }
    }
}

impl std::error::Error for UnexpectedResultError {}

/// Represents a value assigned to a typed option outside its valid types.
///
/// # Examples
///
/// ```rust
/// use lambars_option::{TypeMismatchError, ValueType};
///
/// let error = TypeMismatchError {
///     found: ValueType::String,
///     valid_types: vec![ValueType::Boolean],
///     variant: "SomeBoolean",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Invalid value type passed: string. Must be one of the following type(s): boolean. \
///      Use SomeBoolean::create() instead."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatchError {
    /// The runtime type of the rejected value.
    pub found: ValueType,
    /// The types the variant accepts.
    pub valid_types: Vec<ValueType>,
    /// The name of the typed variant.
    pub variant: &'static str,
}

impl fmt::Display for TypeMismatchError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid_types = self
            .valid_types
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            formatter,
            "Invalid value type passed: {}. Must be one of the following type(s): {}. \
             Use {}::create() instead.",
            self.found, valid_types, self.variant
        )
    }
}

impl std::error::Error for TypeMismatchError {}

/// Represents a typed dispatcher that has no matchers to try.
///
/// # Examples
///
/// ```rust
/// use lambars_option::MissingMatchersError;
///
/// let error = MissingMatchersError { caller: "TypedOption".to_string() };
/// assert_eq!(
///     format!("{error}"),
///     "TypedOption has not defined any option types. \
///      This may indicate that Optional::create() should be used instead."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingMatchersError {
    /// The dispatcher that was asked to create an option.
    pub caller: String,
}

impl fmt::Display for MissingMatchersError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} has not defined any option types. \
             This may indicate that Optional::create() should be used instead.",
            self.caller
        )
    }
}

impl std::error::Error for MissingMatchersError {}

/// Represents every error the option types can report.
///
/// Errors raised by [`Optional::get_or_throw`](crate::Optional::get_or_throw)
/// are not part of this enum: the caller's own error is handed back
/// untouched.
///
/// # Examples
///
/// ```rust
/// use lambars_option::{Optional, OptionError};
///
/// let error = Optional::None.get().unwrap_err();
/// assert_eq!(error, OptionError::AbsentValue);
/// assert_eq!(format!("{error}"), "None has no value.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// `get()` was called on an empty option.
    AbsentValue,
    /// A value that had to be invoked is not callable.
    InvalidCallable(InvalidCallableError),
    /// A computation that had to return an option returned something else.
    UnexpectedResult(UnexpectedResultError),
    /// A typed option rejected a value of the wrong type.
    TypeMismatch(TypeMismatchError),
    /// A typed dispatcher has no matchers configured.
    MissingMatchers(MissingMatchersError),
}

impl fmt::Display for OptionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbsentValue => write!(formatter, "None has no value."),
            Self::InvalidCallable(error) => write!(formatter, "{error}"),
            Self::UnexpectedResult(error) => write!(formatter, "{error}"),
            Self::TypeMismatch(error) => write!(formatter, "{error}"),
            Self::MissingMatchers(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for OptionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AbsentValue => None,
            Self::InvalidCallable(error) => Some(error),
            Self::UnexpectedResult(error) => Some(error),
            Self::TypeMismatch(error) => Some(error),
            Self::MissingMatchers(error) => Some(error),
        }
    }
}

impl From<InvalidCallableError> for OptionError {
    fn from(error: InvalidCallableError) -> Self {
        Self::InvalidCallable(error)
    }
}

impl From<UnexpectedResultError> for OptionError {
    fn from(error: UnexpectedResultError) -> Self {
        Self::UnexpectedResult(error)
    }
}

impl From<TypeMismatchError> for OptionError {
    fn from(error: TypeMismatchError) -> Self {
        Self::TypeMismatch(error)
    }
}

impl From<MissingMatchersError> for OptionError {
    fn from(error: MissingMatchersError) -> Self {
        Self::MissingMatchers(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_absent_value_display() {
        assert_eq!(format!("{}", OptionError::AbsentValue), "None has no value.");
    }

    #[test]
    fn test_unexpected_result_display_lazy_option() {
        let error = UnexpectedResultError {
            source: ResultSource::LazyOption,
            found: "string".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "Lazy option callbacks must return an Optional, got string."
        );
    }

    #[test]
    fn test_type_mismatch_display_lists_every_valid_type() {
        let error = TypeMismatchError {
            found: ValueType::Null,
            valid_types: vec![ValueType::Integer, ValueType::Double],
            variant: "SomeNumber",
        };
        assert_eq!(
            format!("{error}"),
            "Invalid value type passed: null. Must be one of the following type(s): integer, double. \
             Use SomeNumber::create() instead."
        );
    }

    #[test]
    fn test_option_error_display_delegates() {
        let error = OptionError::from(MissingMatchersError {
            caller: "EmptyTypedOption".to_string(),
        });
        assert_eq!(
            format!("{error}"),
            "EmptyTypedOption has not defined any option types. \
             This may indicate that Optional::create() should be used instead."
        );
    }

    #[test]
    fn test_option_error_source() {
        assert!(OptionError::AbsentValue.source().is_none());
        let error = OptionError::from(InvalidCallableError {
            description: "null".to_string(),
        });
        assert!(error.source().is_some());
    }

    #[test]
    fn test_option_error_clone_and_equality() {
        let error = OptionError::from(UnexpectedResultError {
            source: ResultSource::FlatMap,
            found: "integer".to_string(),
        });
        let cloned = error.clone();
        assert_eq!(error, cloned);
        assert_ne!(error, OptionError::AbsentValue);
    }
}
