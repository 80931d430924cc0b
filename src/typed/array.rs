//! Array coercion.

use super::delimited;
use super::some_type::{SomeType, typed_some, typed_some_storage};
use crate::config::{Configuration, DEFAULT_KEY_DELIMITER, DEFAULT_LIST_DELIMITER};
use crate::option::OptionKind;
use crate::value::{Array, Value, ValueType};

typed_some! {
    /// A populated option holding an array.
    ///
    /// Applies to arrays, to objects with an array view, and to strings
    /// containing the configured list delimiter. Delimited strings are
    /// parsed into key/value pairs; bare items are indexed from `0` and
    /// bracketed keys build nested arrays.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{Array, Configuration, SomeArray, SomeType, Value};
    ///
    /// let option = SomeArray::create("foo[bar]=baz,foo[]=quz,foo[]=foo", Configuration::new());
    ///
    /// let mut foo = Array::new();
    /// foo.insert("bar", Value::from("baz"));
    /// foo.push(Value::from("quz"));
    /// foo.push(Value::from("foo"));
    /// let mut expected = Array::new();
    /// expected.insert("foo", Value::Array(foo));
    ///
    /// assert_eq!(option.get(), Ok(Value::Array(expected)));
    ///
    /// let pipes = Configuration::new().with_list_delimiter("|");
    /// assert!(SomeArray::create("foo,bar,baz", pipes).is_empty());
    /// ```
    SomeArray(Array) => Array
}

impl SomeType for SomeArray {
    type Payload = Array;

    const KIND: OptionKind = OptionKind::Array;
    const VALUE_TYPE: ValueType = ValueType::Array;

    fn valid_types() -> &'static [ValueType] {
        &[ValueType::Array]
    }

    fn default_configuration() -> Configuration {
        Configuration::defaults()
            .with_list_delimiter(DEFAULT_LIST_DELIMITER)
            .with_key_delimiter(DEFAULT_KEY_DELIMITER)
    }

    fn applies(value: &Value, configuration: &Configuration) -> bool {
        match value {
            Value::Array(_) => true,
            Value::Object(object) => object.to_array().is_some(),
            Value::String(text) => {
                let delimiter = configuration.list_delimiter();
                !delimiter.is_empty() && text.contains(delimiter)
            }
            _ => false,
        }
    }

    fn transform_value(value: &Value, configuration: &Configuration) -> Option<Array> {
        match value {
            Value::String(text) if Self::applies(value, configuration) => Some(delimited::parse(
                text,
                configuration.list_delimiter(),
                configuration.key_delimiter(),
            )),
            other => other.to_array(),
        }
    }

    fn accept(value: Value) -> Result<Array, Value> {
        match value {
            Value::Array(array) => Ok(array),
            other => Err(other),
        }
    }

    typed_some_storage!(Array);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::list(["a"]), true)]
    #[case(Value::from("a,b"), true)]
    #[case(Value::from("a"), false)]
    #[case(Value::from(1), false)]
    fn test_applies_with_defaults(#[case] value: Value, #[case] expected: bool) {
        let configuration = SomeArray::default_configuration();
        assert_eq!(SomeArray::applies(&value, &configuration), expected);
    }

    #[rstest]
    fn test_empty_list_delimiter_never_applies() {
        let configuration = Configuration::new().with_list_delimiter("");
        assert!(!SomeArray::applies(&Value::from("a,b"), &configuration));
    }

    #[rstest]
    fn test_default_configuration() {
        let configuration = SomeArray::default_configuration();
        assert_eq!(configuration.list_delimiter(), ",");
        assert_eq!(configuration.key_delimiter(), "=");
        assert!(configuration.throw_exceptions());
    }
}
