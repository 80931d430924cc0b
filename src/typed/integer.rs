//! Integer coercion.

use super::some_type::{SomeType, typed_some, typed_some_storage};
use crate::config::Configuration;
use crate::option::OptionKind;
use crate::value::{Value, ValueType, format_float, parse_numeric};

typed_some! {
    /// A populated option holding an integer.
    ///
    /// Applies to integers, to floats whose printed form (14 significant
    /// digits) has no decimal point, and to numeric strings written without
    /// a decimal point. `"42"` applies,
    /// `"42.0"` does not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{Configuration, SomeInteger, SomeType, Value};
    ///
    /// assert_eq!(SomeInteger::create("-0", Configuration::new()).get(), Ok(Value::from(0)));
    /// assert!(SomeInteger::create("1.123", Configuration::new()).is_empty());
    /// assert!(SomeInteger::create("3px", Configuration::new()).is_empty());
    /// ```
    SomeInteger(i64) => Integer
}

impl SomeType for SomeInteger {
    type Payload = i64;

    const KIND: OptionKind = OptionKind::Integer;
    const VALUE_TYPE: ValueType = ValueType::Integer;

    fn valid_types() -> &'static [ValueType] {
        &[ValueType::Integer]
    }

    fn applies(value: &Value, configuration: &Configuration) -> bool {
        Self::transform_value(value, configuration).is_some()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn transform_value(value: &Value, _configuration: &Configuration) -> Option<i64> {
        match value {
            Value::Int(integer) => Some(*integer),
            // A float counts when its printed form has no decimal point.
            Value::Float(float) if float.is_finite() && !format_float(*float).contains('.') => {
                Some(*float as i64)
            }
            Value::String(text) => parse_numeric(text)
                .filter(|numeric| !numeric.has_decimal_point)
                .and_then(|numeric| numeric.integer),
            _ => None,
        }
    }

    fn accept(value: Value) -> Result<i64, Value> {
        match value {
            Value::Int(integer) => Ok(integer),
            other => Err(other),
        }
    }

    typed_some_storage!(Integer);
}
