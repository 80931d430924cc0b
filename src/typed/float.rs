//! Float coercion.

use super::some_type::{SomeType, typed_some, typed_some_storage};
use crate::config::Configuration;
use crate::option::OptionKind;
use crate::value::{Value, ValueType, parse_numeric};

typed_some! {
    /// A populated option holding a floating point number.
    ///
    /// Applies to floats and to numeric strings written with a decimal
    /// point. Integers and integer-only strings (`"42"`, `"1e3"`) do not
    /// apply, which keeps the float/integer split unambiguous when both are
    /// tried in turn.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{Configuration, SomeFloat, SomeType, Value};
    ///
    /// assert_eq!(SomeFloat::create("1.123", Configuration::new()).get(), Ok(Value::from(1.123)));
    /// assert!(SomeFloat::create("42", Configuration::new()).is_empty());
    /// assert!(SomeFloat::create(456, Configuration::new()).is_empty());
    /// ```
    SomeFloat(f64) => Float
}

impl SomeType for SomeFloat {
    type Payload = f64;

    const KIND: OptionKind = OptionKind::Float;
    const VALUE_TYPE: ValueType = ValueType::Double;

    fn valid_types() -> &'static [ValueType] {
        &[ValueType::Double]
    }

    fn applies(value: &Value, configuration: &Configuration) -> bool {
        Self::transform_value(value, configuration).is_some()
    }

    fn transform_value(value: &Value, _configuration: &Configuration) -> Option<f64> {
        match value {
            Value::Float(float) => Some(*float),
            Value::String(text) => parse_numeric(text)
                .filter(|numeric| numeric.has_decimal_point)
                .map(|numeric| numeric.value),
            _ => None,
        }
    }

    fn accept(value: Value) -> Result<f64, Value> {
        match value {
            Value::Float(float) => Ok(float),
            other => Err(other),
        }
    }

    typed_some_storage!(Float);
}
