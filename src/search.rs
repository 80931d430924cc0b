//! Searching arrays into options.
//!
//! Each helper walks an array (or an object's array view) in order and
//! creates an option from the first match; nothing found, or an input that
//! is not array-like, yields `None`. Results go through
//! [`Optional::create`], so a found value equal to the configured sentinel
//! still collapses to `None`.
//!
//! # Examples
//!
//! ```rust
//! use lambars_option::search::{find, find_key, pick};
//! use lambars_option::{Configuration, Value};
//!
//! let users = Value::list(["alice", "bob", "carol"]);
//!
//! let found = find(&users, |value: &Value| value.as_str() == Some("bob"), Configuration::new());
//! assert_eq!(found.get(), Ok(Value::from("bob")));
//!
//! let index = find_key(&users, Value::from("carol"), Configuration::new());
//! assert_eq!(index.get(), Ok(Value::from(2)));
//!
//! let first = pick(&users, Value::from(0), Configuration::new());
//! assert_eq!(first.get(), Ok(Value::from("alice")));
//! ```

use std::fmt;

use crate::config::Configuration;
use crate::option::Optional;
use crate::value::{Array, Value};

type PredicateFunction = Box<dyn Fn(&Value) -> bool>;

/// A test applied to array values or keys.
///
/// Either a closure, or a set of candidate values matched by strict
/// (default) or loose equality.
pub enum Predicate {
    /// A closure deciding each value.
    Function(PredicateFunction),
    /// Matches any of the candidates.
    Values {
        /// The accepted values.
        candidates: Vec<Value>,
        /// Whether candidates are compared strictly or loosely.
        strict: bool,
    },
}

impl Predicate {
    /// Creates a predicate from a closure.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&Value) -> bool + 'static,
    {
        Self::Function(Box::new(function))
    }

    /// Creates a predicate matching any of `candidates` strictly.
    pub fn values(candidates: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self::Values {
            candidates: candidates.into_iter().map(Into::into).collect(),
            strict: true,
        }
    }

    /// Switches candidate matching to loose equality.
    #[must_use]
    pub fn loose(self) -> Self {
        match self {
            Self::Values { candidates, .. } => Self::Values {
                candidates,
                strict: false,
            },
            function => function,
        }
    }

    /// Returns `true` if `value` passes this predicate.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Function(function) => function(value),
            Self::Values {
                candidates,
                strict: true,
            } => candidates.contains(value),
            Self::Values {
                candidates,
                strict: false,
            } => candidates.iter().any(|candidate| candidate.loose_eq(value)),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => formatter.write_str("Function(..)"),
            Self::Values { candidates, strict } => formatter
                .debug_struct("Values")
                .field("candidates", candidates)
                .field("strict", strict)
                .finish(),
        }
    }
}

impl<F> From<F> for Predicate
where
    F: Fn(&Value) -> bool + 'static,
{
    fn from(function: F) -> Self {
        Self::function(function)
    }
}

impl From<Value> for Predicate {
    /// A list array becomes its set of values; any other value is the only
    /// candidate.
    fn from(value: Value) -> Self {
        match value {
            Value::Array(array) => Self::values(array.into_iter().map(|(_, value)| value)),
            other => Self::values([other]),
        }
    }
}

/// Creates an option from the first value matching `predicate`.
pub fn find(
    iterable: &Value,
    predicate: impl Into<Predicate>,
    configuration: Configuration,
) -> Optional {
    let predicate = predicate.into();
    iterable
        .to_array()
        .and_then(|array| {
            array
                .into_iter()
                .find(|(_, value)| predicate.matches(value))
        })
        .map_or(Optional::None, |(_, value)| {
            Optional::create(value, configuration)
        })
}

/// Creates an option from the key of the first value matching `predicate`.
pub fn find_key(
    iterable: &Value,
    predicate: impl Into<Predicate>,
    configuration: Configuration,
) -> Optional {
    let predicate = predicate.into();
    iterable
        .to_array()
        .and_then(|array| {
            array
                .into_iter()
                .find(|(_, value)| predicate.matches(value))
        })
        .map_or(Optional::None, |(key, _)| {
            Optional::create(Value::from(key), configuration)
        })
}

/// Creates an option from the value of the first key matching `predicate`.
pub fn pick(
    iterable: &Value,
    predicate: impl Into<Predicate>,
    configuration: Configuration,
) -> Optional {
    pick_with(iterable, &predicate.into(), configuration)
}

fn pick_with(iterable: &Value, predicate: &Predicate, configuration: Configuration) -> Optional {
    iterable
        .to_array()
        .and_then(|array| {
            array
                .into_iter()
                .find(|(key, _)| predicate.matches(&Value::from(key.clone())))
        })
        .map_or(Optional::None, |(_, value)| {
            Optional::create(value, configuration)
        })
}

/// Picks from every nested array and creates an option from the collected
/// values.
///
/// Nested entries without a matching key, or whose picked value is `Null`,
/// are skipped. Nothing picked yields `None`.
///
/// # Examples
///
/// ```rust
/// use lambars_option::search::pluck;
/// use lambars_option::{Array, Configuration, Value};
///
/// let mut alice = Array::new();
/// alice.insert("name", Value::from("alice"));
/// let mut bob = Array::new();
/// bob.insert("name", Value::from("bob"));
/// let rows = Value::list([Value::Array(alice), Value::Array(bob), Value::from(3)]);
///
/// let names = pluck(&rows, Value::from("name"), Configuration::new());
/// assert_eq!(names.get(), Ok(Value::list(["alice", "bob"])));
/// ```
pub fn pluck(
    iterable: &Value,
    predicate: impl Into<Predicate>,
    configuration: Configuration,
) -> Optional {
    let predicate = predicate.into();
    let Some(array) = iterable.to_array() else {
        return Optional::None;
    };

    let results: Array = array
        .values()
        .map(|nested| pick_with(nested, &predicate, configuration.clone()).get_or_else(Value::Null))
        .filter(|value| !value.is_null())
        .collect();

    if results.is_empty() {
        Optional::None
    } else {
        Optional::create(results, configuration)
    }
}
