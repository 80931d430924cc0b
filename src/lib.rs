//! # lambars-option
//!
//! Explicit-absence option values with lazy evaluation and typed value
//! coercion.
//!
//! ## Overview
//!
//! An [`Optional`] is either `None` or a populated variant holding a
//! [`Value`]. Options are created from raw input with a fixed precedence:
//!
//! 1. a value equal to the configured sentinel (`none_value`, `Null` by
//!    default) becomes `None`;
//! 2. an existing option is reused, or re-created when its variant differs;
//! 3. a callable becomes a [`LazyOption`] evaluated on first use;
//! 4. anything else is wrapped.
//!
//! On top of that the crate provides:
//!
//! - **Combinators**: `map`, `flat_map`, `filter`, `fold_left`, `or_else`
//!   and friends, where every operation on `None` returns `None`
//! - **Lazy options**: [`LazyOption`] defers and memoizes the computation
//!   of an option
//! - **Typed options**: [`SomeBoolean`], [`SomeInteger`], [`SomeFloat`],
//!   [`SomeArray`] and [`SomeString`] coerce raw input into one type
//! - **Typed dispatch**: [`TypedOption`] picks the first applicable typed
//!   variant for a value
//! - **Search helpers**: `find`, `find_key`, `pick` and `pluck` over arrays
//!
//! ## Feature Flags
//!
//! - `search`: Array search helpers (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for [`Value`] and [`Configuration`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_option::prelude::*;
//!
//! let port = Optional::create("8080", Configuration::new())
//!     .map(|value| value.to_string_repr().map_or(Value::Null, Value::from))
//!     .filter(|value| value.as_str().is_some_and(|text| !text.is_empty()));
//! assert_eq!(port.get(), Ok(Value::from("8080")));
//!
//! let typed = TypedOption::new().create("8080", Configuration::new()).unwrap();
//! assert_eq!(typed.kind(), OptionKind::Integer);
//! assert_eq!(typed.get(), Ok(Value::from(8080)));
//!
//! let missing = Optional::create(Value::Null, Configuration::new());
//! assert_eq!(missing.get_or_else("default"), Value::from("default"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambars_option::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Configuration;
    pub use crate::control::LazyOption;
    pub use crate::error::OptionError;
    pub use crate::option::{Input, OptionKind, Optional};
    pub use crate::typed::{
        Matcher, SomeArray, SomeBoolean, SomeFloat, SomeInteger, SomeString, SomeType,
        TypedOption, TypedSome,
    };
    pub use crate::value::{Array, Key, Value, ValueType};

    #[cfg(feature = "search")]
    pub use crate::search::{Predicate, find, find_key, pick, pluck};
}

pub mod config;
pub mod control;
pub mod error;
pub mod option;
pub mod typed;
pub mod value;

#[cfg(feature = "search")]
pub mod search;

pub use config::{
    Configuration, DEFAULT_FALSY, DEFAULT_KEY_DELIMITER, DEFAULT_LIST_DELIMITER, DEFAULT_TRUTHY,
};
pub use control::LazyOption;
pub use error::{
    InvalidCallableError, MissingMatchersError, OptionError, ResultSource, TypeMismatchError,
    UnexpectedResultError,
};
pub use option::{Input, NONE, OptionKind, Optional, SomeValue, Thunk};
pub use typed::{
    Matcher, SomeArray, SomeBoolean, SomeFloat, SomeInteger, SomeString, SomeType, TypedOption,
    TypedSome,
};
pub use value::{Array, Key, Numeric, Object, ObjectRef, Value, ValueType, parse_numeric};

#[cfg(feature = "search")]
pub use search::Predicate;
