//! Typed options and the typed dispatcher.
//!
//! The typed variants coerce untyped input into a value of one specific
//! type: [`SomeBoolean`], [`SomeInteger`], [`SomeFloat`], [`SomeArray`] and
//! [`SomeString`]. [`TypedOption`] classifies a value by trying an ordered
//! list of [`Matcher`]s and returns the first typed option that applies.
//!
//! # Examples
//!
//! ```rust
//! use lambars_option::{Configuration, OptionKind, TypedOption, Value};
//!
//! let typed = TypedOption::new();
//!
//! let float = typed.create("1.123", Configuration::new()).unwrap();
//! assert_eq!(float.kind(), OptionKind::Float);
//! assert_eq!(float.get(), Ok(Value::from(1.123)));
//!
//! let integer = typed.create("42", Configuration::new()).unwrap();
//! assert_eq!(integer.kind(), OptionKind::Integer);
//!
//! let boolean = typed.create("on", Configuration::new()).unwrap();
//! assert_eq!(boolean.get(), Ok(Value::from(true)));
//!
//! let string = typed.create("plain", Configuration::new()).unwrap();
//! assert_eq!(string.kind(), OptionKind::String);
//!
//! assert!(typed.create(Value::Null, Configuration::new()).unwrap().is_empty());
//! ```

mod array;
mod boolean;
mod delimited;
mod float;
mod integer;
mod some_type;
mod string;

use std::fmt;
use std::rc::Rc;

pub use array::SomeArray;
pub use boolean::SomeBoolean;
pub use float::SomeFloat;
pub use integer::SomeInteger;
pub use some_type::{SomeType, TypedSome};
pub use string::SomeString;

use crate::config::Configuration;
use crate::error::{MissingMatchersError, OptionError};
use crate::option::{Input, Optional, Thunk};
use crate::value::Value;

type AppliesFunction = Rc<dyn Fn(&Value, &Configuration) -> bool>;
type CreateFunction = Rc<dyn Fn(Value, Configuration) -> Optional>;

/// A classifier and constructor pair tried by [`TypedOption`].
///
/// # Examples
///
/// ```rust
/// use lambars_option::{Configuration, Matcher, Optional, TypedOption, Value};
///
/// let hex = Matcher::new(
///     "hex",
///     |value, _| value.as_str().is_some_and(|text| text.starts_with('#')),
///     |value, configuration| Optional::create(value, configuration),
/// );
/// let typed = TypedOption::with_matchers([hex]);
///
/// assert!(typed.create("#000000", Configuration::new()).unwrap().is_defined());
/// assert!(typed.create("red", Configuration::new()).unwrap().is_empty());
/// ```
#[derive(Clone)]
pub struct Matcher {
    name: String,
    applies: AppliesFunction,
    create: CreateFunction,
}

impl Matcher {
    /// Creates a matcher from a classifier and a constructor.
    pub fn new<A, C>(name: impl Into<String>, applies: A, create: C) -> Self
    where
        A: Fn(&Value, &Configuration) -> bool + 'static,
        C: Fn(Value, Configuration) -> Optional + 'static,
    {
        Self {
            name: name.into(),
            applies: Rc::new(applies),
            create: Rc::new(create),
        }
    }

    /// Creates the matcher for the typed variant `T`.
    ///
    /// The classifier sees the variant defaults under the caller's
    /// configuration.
    #[must_use]
    pub fn of<T: SomeType>() -> Self {
        Self::new(
            T::KIND.name(),
            |value, configuration| {
                T::applies(value, &T::default_configuration().merge(configuration))
            },
            |value, configuration| T::create(value, configuration),
        )
    }

    /// Returns the matcher's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this matcher can create an option from `value`.
    #[must_use]
    pub fn applies(&self, value: &Value, configuration: &Configuration) -> bool {
        (self.applies)(value, configuration)
    }

    /// Creates an option from `value`.
    #[must_use]
    pub fn create(&self, value: Value, configuration: Configuration) -> Optional {
        (self.create)(value, configuration)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Matcher")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Classifies values into the first applicable typed option.
///
/// Matchers are tried in order. Every matcher whose classifier accepts the
/// value contributes a lazily created candidate; candidates are chained with
/// [`Optional::or_else`], so a later matcher's constructor only runs when
/// every earlier candidate turned out empty. The default order is float,
/// integer, boolean, array, string.
#[derive(Clone, Debug)]
pub struct TypedOption {
    matchers: Vec<Matcher>,
}

impl Default for TypedOption {
    fn default() -> Self {
        Self {
            matchers: vec![
                Matcher::of::<SomeFloat>(),
                Matcher::of::<SomeInteger>(),
                Matcher::of::<SomeBoolean>(),
                Matcher::of::<SomeArray>(),
                Matcher::of::<SomeString>(),
            ],
        }
    }
}

impl TypedOption {
    /// Creates a dispatcher with the built-in matchers in default order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher trying `matchers` in the given order.
    pub fn with_matchers(matchers: impl IntoIterator<Item = Matcher>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
        }
    }

    /// Returns the matchers in the order they are tried.
    #[must_use]
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Creates the first applicable typed option from `input`.
    ///
    /// An existing option is classified by its value (the sentinel when it
    /// is empty); a callable yields a lazy option that classifies the
    /// callable's result when first used.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::MissingMatchers`] if the dispatcher has no
    /// matchers.
    pub fn create(
        &self,
        input: impl Into<Input>,
        configuration: Configuration,
    ) -> Result<Optional, OptionError> {
        if self.matchers.is_empty() {
            return Err(MissingMatchersError {
                caller: "TypedOption".to_string(),
            }
            .into());
        }
        Ok(self.resolve(input.into(), configuration))
    }

    fn resolve(&self, input: Input, configuration: Configuration) -> Optional {
        match input {
            Input::Value(Value::Object(object)) if object.is_callable() => {
                self.defer(Box::new(move || object.call(&[])), configuration)
            }
            Input::Value(value) => self.dispatch(value, &configuration),
            Input::Option(option) => {
                let configuration = option
                    .configuration()
                    .map_or_else(|| configuration.clone(), |existing| existing.merge(&configuration));
                let value = option.get_or_else(configuration.none_value());
                self.dispatch(value, &configuration)
            }
            Input::Callable(computation) => self.defer(computation, configuration),
        }
    }

    fn defer(&self, computation: Thunk, configuration: Configuration) -> Optional {
        let dispatcher = self.clone();
        Optional::lazy(move || dispatcher.resolve(computation(), configuration))
    }

    fn dispatch(&self, value: Value, configuration: &Configuration) -> Optional {
        let mut option = Optional::None;

        for matcher in &self.matchers {
            if !matcher.applies(&value, configuration) {
                continue;
            }
            log::debug!("{} applies to {value:?}", matcher.name());

            let matcher = matcher.clone();
            let value = value.clone();
            let configuration = configuration.clone();
            option = option.or_else(Optional::lazy(move || matcher.create(value, configuration)));
        }

        option.or_else(Optional::None)
    }
}
