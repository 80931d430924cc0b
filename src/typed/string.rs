//! String coercion.

use super::some_type::{SomeType, typed_some, typed_some_storage};
use crate::config::Configuration;
use crate::option::OptionKind;
use crate::value::{Value, ValueType};

typed_some! {
    /// A populated option holding a string.
    ///
    /// The catch-all variant: applies to every scalar and to objects with a
    /// string representation. Booleans become `"1"` and `""`; floats
    /// without a fractional part drop the decimal point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{Configuration, SomeString, SomeType, Value};
    ///
    /// assert_eq!(SomeString::create(0.875, Configuration::new()).get(), Ok(Value::from("0.875")));
    /// assert_eq!(SomeString::create(1.0, Configuration::new()).get(), Ok(Value::from("1")));
    /// assert!(SomeString::create(Value::list([1, 2]), Configuration::new()).is_empty());
    /// ```
    SomeString(String) => String
}

impl SomeType for SomeString {
    type Payload = String;

    const KIND: OptionKind = OptionKind::String;
    const VALUE_TYPE: ValueType = ValueType::String;

    fn valid_types() -> &'static [ValueType] {
        &[ValueType::String]
    }

    fn applies(value: &Value, _configuration: &Configuration) -> bool {
        match value {
            Value::Object(object) => object.to_string_value().is_some(),
            other => other.is_scalar(),
        }
    }

    fn transform_value(value: &Value, _configuration: &Configuration) -> Option<String> {
        value.to_string_repr()
    }

    fn accept(value: Value) -> Result<String, Value> {
        match value {
            Value::String(text) => Ok(text),
            other => Err(other),
        }
    }

    typed_some_storage!(String);
}
