//! The populated variant's state.

use crate::config::Configuration;

/// A present value together with its configuration.
///
/// `SomeValue` remembers the value it was constructed with: the original
/// is captured once and never changes, and [`SomeValue::is_overridden`]
/// reports whether a later [`SomeValue::set`] replaced it with a different
/// value.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use lambars_option::{Configuration, SomeValue};
///
/// let mut some = SomeValue::new(1, Configuration::defaults());
/// assert!(!some.is_overridden());
///
/// some.set(2);
/// assert_eq!(*some.value(), 2);
/// assert_eq!(*some.original(), 1);
/// assert!(some.is_overridden());
///
/// some.set(1);
/// assert!(!some.is_overridden());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SomeValue<T> {
    value: T,
    original: T,
    overridden: bool,
    configuration: Configuration,
}

impl<T: Clone + PartialEq> SomeValue<T> {
    /// Creates a populated value with the given configuration.
    ///
    /// The configuration is stored as given; variant defaults are expected
    /// to be merged in by the caller.
    pub fn new(value: T, configuration: Configuration) -> Self {
        Self {
            original: value.clone(),
            value,
            overridden: false,
            configuration,
        }
    }

    /// Replaces the held value and recomputes the overridden flag.
    pub fn set(&mut self, value: T) -> &mut Self {
        self.overridden = value != self.original;
        self.value = value;
        self
    }
}

impl<T> SomeValue<T> {
    /// Returns the held value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes `self`, returning the held value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the value this option was constructed with.
    pub const fn original(&self) -> &T {
        &self.original
    }

    /// Returns `true` if the held value differs from the original.
    pub const fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// Returns the configuration.
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Returns the configuration for in-place modification.
    pub const fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }

    /// Replaces the configuration.
    pub fn set_configuration(&mut self, configuration: Configuration) -> &mut Self {
        self.configuration = configuration;
        self
    }

    /// Changes individual options in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{Configuration, SomeValue};
    ///
    /// let mut some = SomeValue::new("value", Configuration::defaults());
    /// some.configure(|configuration| {
    ///     *configuration = configuration.clone().with_throw_exceptions(false);
    /// });
    /// assert!(!some.configuration().throw_exceptions());
    /// ```
    pub fn configure<F>(&mut self, function: F) -> &mut Self
    where
        F: FnOnce(&mut Configuration),
    {
        function(&mut self.configuration);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_original_is_captured_once() {
        let mut some = SomeValue::new(Value::from("first"), Configuration::defaults());
        some.set(Value::from("second"));
        some.set(Value::from("third"));
        assert_eq!(some.original(), &Value::from("first"));
        assert_eq!(some.value(), &Value::from("third"));
        assert!(some.is_overridden());
    }

    #[test]
    fn test_overridden_uses_strict_equality() {
        let mut some = SomeValue::new(Value::from(1), Configuration::defaults());
        some.set(Value::from(1.0));
        assert!(some.is_overridden());
    }

    #[test]
    fn test_set_configuration_replaces() {
        let mut some = SomeValue::new(1, Configuration::defaults());
        some.set_configuration(Configuration::new().with_none_value(false));
        assert_eq!(some.configuration().none_value(), Value::from(false));
        assert!(some.configuration().throw_exceptions());
    }
}
