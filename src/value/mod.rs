//! The untyped value universe.
//!
//! [`Value`] is the raw input that options wrap and that the typed coercion
//! layer classifies: scalars, ordered arrays and host objects. Equality on
//! `Value` is strict: two values are equal only when they have the same
//! runtime type and the same contents. [`Value::loose_eq`] provides the
//! coercive comparison for the few places that ask for it.
//!
//! # Examples
//!
//! ```rust
//! use lambars_option::{Array, Value, ValueType};
//!
//! let value = Value::from("42");
//! assert_eq!(value.value_type(), ValueType::String);
//! assert_ne!(value, Value::from(42));
//! assert!(value.loose_eq(&Value::from(42)));
//!
//! let list = Value::from(vec![Value::from("a"), Value::from("b")]);
//! assert_eq!(list.as_array().map(Array::len), Some(2));
//! ```

mod key;
mod numeric;
mod object;
#[cfg(feature = "serde")]
mod serialization;

use std::fmt;
use std::rc::Rc;

pub use key::{Array, Key};
pub use numeric::{Numeric, parse_numeric};
pub use object::{Object, ObjectRef};

pub(crate) use object::{CallableObject, StringableObject};

use crate::option::Input;

/// The runtime type of a [`Value`].
///
/// The names follow the conventional type names used in type-mismatch
/// messages (`boolean`, `integer`, `double`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueType {
    /// The absent value.
    Null,
    /// `true` or `false`.
    Boolean,
    /// A signed 64-bit integer.
    Integer,
    /// A 64-bit floating point number.
    Double,
    /// A UTF-8 string.
    String,
    /// An ordered array.
    Array,
    /// A host object.
    Object,
}

impl ValueType {
    /// Returns the lowercase name of this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// An untyped value.
///
/// # Examples
///
/// ```rust
/// use lambars_option::Value;
///
/// assert!(Value::Null.is_null());
/// assert_eq!(Value::from(1.5).as_float(), Some(1.5));
/// assert_eq!(Value::from(true).to_string_repr().as_deref(), Some("1"));
/// ```
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value; the default sentinel for `None`.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered array of key/value pairs.
    Array(Array),
    /// A shared handle to a host object.
    Object(ObjectRef),
}

impl Value {
    /// Creates an array value holding `values` under the indices `0..n`.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::Array(values.into_iter().map(Into::into).collect())
    }

    /// Creates a callable object value.
    ///
    /// Options created from a callable value are lazy: the function runs
    /// the first time the option is used.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{Configuration, Optional, Value};
    ///
    /// let callable = Value::callable(|_arguments: &[Value]| Value::from("computed"));
    /// let option = Optional::create(callable, Configuration::new());
    /// assert!(option.is_lazy());
    /// assert_eq!(option.get(), Ok(Value::from("computed")));
    /// ```
    pub fn callable<F, R>(function: F) -> Self
    where
        F: Fn(&[Self]) -> R + 'static,
        R: Into<Input>,
    {
        Self::Object(Rc::new(CallableObject::new(move |arguments: &[Self]| {
            function(arguments).into()
        })))
    }

    /// Creates an object value with a string representation.
    pub fn stringable<F>(type_name: impl Into<String>, function: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        Self::Object(Rc::new(StringableObject::new(type_name.into(), function)))
    }

    /// Returns the runtime type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Bool(_) => ValueType::Boolean,
            Self::Int(_) => ValueType::Integer,
            Self::Float(_) => ValueType::Double,
            Self::String(_) => ValueType::String,
            Self::Array(_) => ValueType::Array,
            Self::Object(_) => ValueType::Object,
        }
    }

    /// Returns `true` if this is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for booleans, integers, floats and strings.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::String(_)
        )
    }

    /// Returns `true` if this value is an object that can be invoked.
    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Object(object) if object.is_callable())
    }

    /// Returns the boolean if this is a [`Value::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Int`].
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float if this is a [`Value::Float`].
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string slice if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the array if this is a [`Value::Array`].
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the object handle if this is a [`Value::Object`].
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(value) => Some(value),
            _ => None,
        }
    }

    /// Returns an array view of this value.
    ///
    /// Arrays are returned as-is; objects contribute their array view when
    /// they have one.
    #[must_use]
    pub fn to_array(&self) -> Option<Array> {
        match self {
            Self::Array(array) => Some(array.clone()),
            Self::Object(object) => object.to_array(),
            _ => None,
        }
    }

    /// Returns the string representation of a scalar or stringable object.
    ///
    /// `true` becomes `"1"`, `false` becomes `""`, and floats without a
    /// fractional part print without a decimal point. `Null`, arrays and
    /// objects without a string representation yield `None`.
    #[must_use]
    pub fn to_string_repr(&self) -> Option<String> {
        match self {
            Self::Null | Self::Array(_) => None,
            Self::Bool(true) => Some("1".to_string()),
            Self::Bool(false) => Some(String::new()),
            Self::Int(value) => Some(value.to_string()),
            Self::Float(value) => Some(format_float(*value)),
            Self::String(value) => Some(value.clone()),
            Self::Object(object) => object.to_string_value(),
        }
    }

    /// Returns whether this value counts as true in a boolean context.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::String(value) => !(value.is_empty() || value == "0"),
            Self::Array(array) => !array.is_empty(),
            Self::Object(_) => true,
        }
    }

    /// Compares two values with type coercion.
    ///
    /// Numbers compare numerically across integer, float and numeric string
    /// forms, booleans compare against the truthiness of the other side,
    /// `Null` equals every falsy value, and arrays compare key/value pairs
    /// loosely regardless of order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), right) | (right, Self::Bool(left)) => *left == right.is_truthy(),
            (Self::Null, Self::String(text)) | (Self::String(text), Self::Null) => text.is_empty(),
            (Self::Null, other) | (other, Self::Null) => !other.is_truthy(),
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Int(left), Self::Float(right)) | (Self::Float(right), Self::Int(left)) => {
                (*left as f64) == *right
            }
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::String(left), Self::String(right)) => {
                match (parse_numeric(left), parse_numeric(right)) {
                    (Some(left), Some(right)) => left.value == right.value,
                    _ => left == right,
                }
            }
            (Self::String(text), number @ (Self::Int(_) | Self::Float(_)))
            | (number @ (Self::Int(_) | Self::Float(_)), Self::String(text)) => {
                parse_numeric(text).map_or_else(
                    || number.to_string_repr().as_deref() == Some(text.as_str()),
                    |numeric| Some(numeric.value) == number.as_number(),
                )
            }
            (Self::Array(left), Self::Array(right)) => {
                left.len() == right.len()
                    && left.iter().all(|(key, value)| {
                        right.get(key.clone()).is_some_and(|other| value.loose_eq(other))
                    })
            }
            (Self::Object(left), Self::Object(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }
}

/// Significant digits printed for a double.
const FLOAT_PRECISION: usize = 14;

/// Formats a float the way string conversion of a double prints it.
///
/// Prints at most 14 significant digits. Exponents below -4 or at 14 and
/// above switch to exponent form (`1.0E+20`, `1.5E-7`).
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "INF" } else { "-INF" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", FLOAT_PRECISION - 1, value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    let sign = if value < 0.0 { "-" } else { "" };

    let body = match usize::try_from(exponent) {
        Ok(exponent) if exponent < FLOAT_PRECISION => {
            if digits.len() > exponent + 1 {
                format!("{}.{}", &digits[..=exponent], &digits[exponent + 1..])
            } else {
                format!("{digits:0<width$}", width = exponent + 1)
            }
        }
        Err(_) if exponent >= -4 => {
            let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
            format!("0.{zeros}{digits}")
        }
        _ => {
            let (head, tail) = digits.split_at(1);
            let tail = if tail.is_empty() { "0" } else { tail };
            let exponent_sign = if exponent < 0 { '-' } else { '+' };
            format!("{head}.{tail}E{exponent_sign}{}", exponent.unsigned_abs())
        }
    };
    format!("{sign}{body}")
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("Null"),
            Self::Bool(value) => formatter.debug_tuple("Bool").field(value).finish(),
            Self::Int(value) => formatter.debug_tuple("Int").field(value).finish(),
            Self::Float(value) => formatter.debug_tuple("Float").field(value).finish(),
            Self::String(value) => formatter.debug_tuple("String").field(value).finish(),
            Self::Array(value) => formatter.debug_tuple("Array").field(value).finish(),
            Self::Object(value) => formatter.debug_tuple("Object").field(value).finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => formatter.write_str(&format_float(*value)),
            Self::String(value) => write!(formatter, "{value:?}"),
            Self::Array(array) => write!(formatter, "{array}"),
            Self::Object(object) => write!(formatter, "object({})", object.type_name()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::Array(values.into_iter().collect())
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Self::Object(value)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Index(index) => Self::Int(index),
            Key::Name(name) => Self::String(name),
        }
    }
}
