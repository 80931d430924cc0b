//! Serde support for [`Value`].
//!
//! Lists serialize as sequences and every other array as a map with string
//! keys. Objects serialize as their string representation, or their type
//! name when they have none, so they do not survive a round trip.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Array, Key, Value};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::Array(array) => array.serialize(serializer),
            Self::Object(object) => match object.to_string_value() {
                Some(text) => serializer.serialize_str(&text),
                None => serializer.serialize_str(object.type_name()),
            },
        }
    }
}

impl Serialize for Array {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a null, boolean, number, string, sequence or map")
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Int(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
        Ok(i64::try_from(value).map_or(Value::Float(value as f64), Value::Int))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_string<E>(self, value: String) -> Result<Value, E> {
        Ok(Value::String(value))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut array = Array::new();
        while let Some(value) = seq.next_element::<Value>()? {
            array.push(value);
        }
        Ok(Value::Array(array))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut array = Array::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            array.insert(Key::normalize(&key), value);
        }
        Ok(Value::Array(array))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Array {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(array) => Ok(array),
            other => Err(serde::de::Error::custom(format!(
                "expected an array, found {}",
                other.value_type()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "true")]
    #[case(Value::from(-3), "-3")]
    #[case(Value::from(1.5), "1.5")]
    #[case(Value::from("a"), "\"a\"")]
    #[case(Value::list([1, 2]), "[1,2]")]
    fn test_serialize_scalars_and_lists(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&value).unwrap(), expected);
    }

    #[rstest]
    fn test_keyed_array_serializes_as_map() {
        let mut array = Array::new();
        array.insert("foo", Value::from("bar"));
        array.push(Value::from("baz"));
        assert_eq!(
            serde_json::to_string(&Value::Array(array)).unwrap(),
            r#"{"foo":"bar","0":"baz"}"#
        );
    }

    #[rstest]
    fn test_map_keys_are_normalized() {
        let value: Value = serde_json::from_str(r#"{"1":"a","b":2}"#).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.get(1), Some(&Value::from("a")));
        assert_eq!(array.get("b"), Some(&Value::from(2)));
    }

    #[rstest]
    fn test_stringable_object_serializes_as_string() {
        let value = Value::stringable("Name", || "alice".to_string());
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"alice\"");
    }
}
