//! Array keys and the ordered array type.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, IterMut};

use super::Value;

/// A key of an [`Array`].
///
/// Strings holding a canonical decimal integer (`"0"`, `"42"`, `"-7"`, but
/// not `"007"` or `"-0"`) are normalized to [`Key::Index`] when converted,
/// so `Key::from("1") == Key::from(1)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// An integer key.
    Index(i64),
    /// A string key.
    Name(String),
}

impl Key {
    /// Normalizes a string into a key.
    #[must_use]
    pub fn normalize(name: &str) -> Self {
        if is_canonical_integer(name) {
            if let Ok(index) = name.parse::<i64>() {
                return Self::Index(index);
            }
        }
        Self::Name(name.to_string())
    }

    /// Returns the integer if this is an index key.
    #[must_use]
    pub const fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }
}

fn is_canonical_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    if digits == "0" {
        return digits.len() == text.len();
    }
    !digits.starts_with('0')
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::normalize(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        if is_canonical_integer(&name) {
            Self::normalize(&name)
        } else {
            Self::Name(name)
        }
    }
}

/// An insertion-ordered array of key/value pairs.
///
/// Re-inserting an existing key replaces its value in place; [`Array::push`]
/// appends under the next free index (one past the largest non-negative
/// index, or zero). Once `i64::MAX` is taken there is no next index and
/// appending is refused.
///
/// # Examples
///
/// ```rust
/// use lambars_option::{Array, Key, Value};
///
/// let mut array = Array::new();
/// array.insert("bar", Value::from("baz"));
/// array.push(Value::from("quz"));
/// array.push(Value::from("foo"));
///
/// let keys: Vec<Key> = array.keys().cloned().collect();
/// assert_eq!(keys, vec![Key::from("bar"), Key::from(0), Key::from(1)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Array {
    entries: IndexMap<Key, Value>,
}

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the array has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<K: Into<Key>>(&mut self, key: K) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<K: Into<Key>>(&self, key: K) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Inserts a value, returning the value previously stored under `key`.
    pub fn insert<K: Into<Key>>(&mut self, key: K, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Appends a value under the next free index.
    ///
    /// Returns `false`, leaving the array unchanged, when there is no next
    /// index.
    pub fn push(&mut self, value: Value) -> bool {
        let Some(key) = self.next_index() else {
            return false;
        };
        self.entries.insert(Key::Index(key), value);
        true
    }

    /// Returns the index [`Array::push`] would use, or `None` once the
    /// largest index is `i64::MAX`.
    #[must_use]
    pub fn next_index(&self) -> Option<i64> {
        self.entries
            .keys()
            .filter_map(Key::as_index)
            .filter(|index| *index >= 0)
            .max()
            .map_or(Some(0), |index| index.checked_add(1))
    }

    /// Returns the value under `key`, inserting the result of `default`
    /// first if the key is absent.
    pub fn get_or_insert_with<F>(&mut self, key: Key, default: F) -> &mut Value
    where
        F: FnOnce() -> Value,
    {
        self.entries.entry(key).or_insert_with(default)
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over the entries in insertion order.
    pub fn iter_mut(&mut self) -> IterMut<'_, Key, Value> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns `true` if the keys are exactly `0..len` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .zip(0_i64..)
            .all(|(key, index)| *key == Key::Index(index))
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left == right)
    }
}

impl fmt::Display for Array {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{key} => {value}")?;
        }
        formatter.write_str("]")
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iterator: I) -> Self {
        let mut array = Self::new();
        for value in iterator {
            array.push(value);
        }
        array
    }
}

impl FromIterator<(Key, Value)> for Array {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iterator: I) -> Self {
        Self {
            entries: iterator.into_iter().collect(),
        }
    }
}

impl IntoIterator for Array {
    type Item = (Key, Value);
    type IntoIter = IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
