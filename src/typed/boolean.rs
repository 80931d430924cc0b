//! Boolean coercion.

use super::some_type::{SomeType, typed_some, typed_some_storage};
use crate::config::{Configuration, DEFAULT_FALSY, DEFAULT_TRUTHY};
use crate::option::OptionKind;
use crate::value::{Value, ValueType};

typed_some! {
    /// A populated option holding a boolean.
    ///
    /// Applies to `true`, `false` and to strings found, case-insensitively,
    /// in the configured `truthy` or `falsy` word lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{Configuration, SomeBoolean, SomeType, Value};
    ///
    /// assert_eq!(SomeBoolean::create("ON", Configuration::new()).get(), Ok(Value::from(true)));
    /// assert_eq!(SomeBoolean::create("no", Configuration::new()).get(), Ok(Value::from(false)));
    /// assert!(SomeBoolean::create("3", Configuration::new()).is_empty());
    ///
    /// let strict = Configuration::new()
    ///     .with_truthy(["1", "true"])
    ///     .with_falsy(["0", "false"]);
    /// assert!(SomeBoolean::create("yes", strict).is_empty());
    /// ```
    SomeBoolean(bool) => Boolean
}

impl SomeBoolean {
    /// Returns `true` if `value` is `true` or a string in `truthy`.
    #[must_use]
    pub fn is_truthy<S: AsRef<str>>(value: &Value, truthy: &[S]) -> bool {
        match value {
            Value::Bool(flag) => *flag,
            Value::String(text) => contains_word(truthy, text),
            _ => false,
        }
    }

    /// Returns `true` if `value` is `false` or a string in `falsy`.
    #[must_use]
    pub fn is_falsy<S: AsRef<str>>(value: &Value, falsy: &[S]) -> bool {
        match value {
            Value::Bool(flag) => !*flag,
            Value::String(text) => contains_word(falsy, text),
            _ => false,
        }
    }
}

fn contains_word<S: AsRef<str>>(words: &[S], text: &str) -> bool {
    let text = text.to_lowercase();
    words
        .iter()
        .any(|word| word.as_ref().to_lowercase() == text)
}

impl SomeType for SomeBoolean {
    type Payload = bool;

    const KIND: OptionKind = OptionKind::Boolean;
    const VALUE_TYPE: ValueType = ValueType::Boolean;

    fn valid_types() -> &'static [ValueType] {
        &[ValueType::Boolean]
    }

    fn default_configuration() -> Configuration {
        Configuration::defaults()
            .with_truthy(DEFAULT_TRUTHY)
            .with_falsy(DEFAULT_FALSY)
    }

    fn applies(value: &Value, configuration: &Configuration) -> bool {
        Self::is_truthy(value, configuration.truthy().as_slice())
            || Self::is_falsy(value, configuration.falsy().as_slice())
    }

    fn transform_value(value: &Value, configuration: &Configuration) -> Option<bool> {
        if Self::is_truthy(value, configuration.truthy().as_slice()) {
            Some(true)
        } else if Self::is_falsy(value, configuration.falsy().as_slice()) {
            Some(false)
        } else {
            None
        }
    }

    fn accept(value: Value) -> Result<bool, Value> {
        match value {
            Value::Bool(flag) => Ok(flag),
            other => Err(other),
        }
    }

    typed_some_storage!(Boolean);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(true), true)]
    #[case(Value::from("Yes"), true)]
    #[case(Value::from("1"), true)]
    #[case(Value::from(false), false)]
    #[case(Value::from(1), false)]
    #[case(Value::from("maybe"), false)]
    fn test_is_truthy(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(SomeBoolean::is_truthy(&value, &DEFAULT_TRUTHY), expected);
    }

    #[rstest]
    fn test_custom_word_lists_replace_defaults() {
        let configuration = SomeBoolean::default_configuration().merge(
            &Configuration::new()
                .with_truthy(["si"])
                .with_falsy(["nein"]),
        );
        assert!(SomeBoolean::applies(&Value::from("SI"), &configuration));
        assert!(!SomeBoolean::applies(&Value::from("on"), &configuration));
        assert_eq!(
            SomeBoolean::transform_value(&Value::from("nein"), &configuration),
            Some(false)
        );
    }

    #[rstest]
    fn test_default_configuration() {
        let configuration = SomeBoolean::default_configuration();
        assert_eq!(configuration.truthy(), DEFAULT_TRUTHY);
        assert_eq!(configuration.falsy(), DEFAULT_FALSY);
        assert_eq!(configuration.none_value(), Value::Null);
    }
}
