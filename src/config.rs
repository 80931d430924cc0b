//! Option configuration.
//!
//! A [`Configuration`] records only the options a caller set explicitly.
//! Lookups fall back to the built-in defaults, and [`Configuration::merge`]
//! overlays one configuration onto another with the overlay winning on
//! every option it sets. This is how options passed to a `create` call are
//! combined with the configuration an existing option already carries.
//!
//! | option            | default                       | used by     |
//! |-------------------|-------------------------------|-------------|
//! | `none_value`      | `Null`                        | every variant |
//! | `throw_exceptions`| `true`                        | every variant |
//! | `truthy`          | `["1", "on", "true", "yes"]`  | `SomeBoolean` |
//! | `falsy`           | `["0", "off", "false", "no"]` | `SomeBoolean` |
//! | `list_delimiter`  | `","`                         | `SomeArray` |
//! | `key_delimiter`   | `"="`                         | `SomeArray` |
//!
//! # Examples
//!
//! ```rust
//! use lambars_option::{Configuration, Value};
//!
//! let existing = Configuration::new()
//!     .with_none_value(false)
//!     .with_throw_exceptions(false);
//! let overlay = Configuration::new().with_none_value(0);
//!
//! let merged = existing.merge(&overlay);
//! assert_eq!(merged.none_value(), Value::from(0));
//! assert!(!merged.throw_exceptions());
//! assert_eq!(merged.list_delimiter(), ",");
//! ```

use crate::value::Value;

/// The default words recognized as `true` by `SomeBoolean`.
pub const DEFAULT_TRUTHY: [&str; 4] = ["1", "on", "true", "yes"];

/// The default words recognized as `false` by `SomeBoolean`.
pub const DEFAULT_FALSY: [&str; 4] = ["0", "off", "false", "no"];

/// The default delimiter between list items used by `SomeArray`.
pub const DEFAULT_LIST_DELIMITER: &str = ",";

/// The default delimiter between a key and its value used by `SomeArray`.
pub const DEFAULT_KEY_DELIMITER: &str = "=";

/// Options that control creation and validation of options.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Configuration {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            deserialize_with = "deserialize_none_value"
        )
    )]
    none_value: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    throw_exceptions: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    truthy: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    falsy: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    list_delimiter: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    key_delimiter: Option<String>,
}

impl Configuration {
    /// Creates a configuration with no explicitly set options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with the options every variant records.
    #[must_use]
    pub fn defaults() -> Self {
        Self::new()
            .with_none_value(Value::Null)
            .with_throw_exceptions(true)
    }

    /// Sets the sentinel value that collapses to `None` on creation.
    #[must_use]
    pub fn with_none_value(mut self, none_value: impl Into<Value>) -> Self {
        self.none_value = Some(none_value.into());
        self
    }

    /// Sets whether type-validation failures are reported or ignored.
    #[must_use]
    pub const fn with_throw_exceptions(mut self, throw_exceptions: bool) -> Self {
        self.throw_exceptions = Some(throw_exceptions);
        self
    }

    /// Sets the words recognized as `true`.
    #[must_use]
    pub fn with_truthy<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.truthy = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the words recognized as `false`.
    #[must_use]
    pub fn with_falsy<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.falsy = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the delimiter between list items.
    #[must_use]
    pub fn with_list_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.list_delimiter = Some(delimiter.into());
        self
    }

    /// Sets the delimiter between a key and its value.
    #[must_use]
    pub fn with_key_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.key_delimiter = Some(delimiter.into());
        self
    }

    /// Returns the sentinel value, `Null` unless set.
    #[must_use]
    pub fn none_value(&self) -> Value {
        self.none_value.clone().unwrap_or_default()
    }

    /// Returns whether validation failures are reported, `true` unless set.
    #[must_use]
    pub fn throw_exceptions(&self) -> bool {
        self.throw_exceptions.unwrap_or(true)
    }

    /// Returns the words recognized as `true`.
    #[must_use]
    pub fn truthy(&self) -> Vec<String> {
        self.truthy
            .clone()
            .unwrap_or_else(|| DEFAULT_TRUTHY.iter().map(ToString::to_string).collect())
    }

    /// Returns the words recognized as `false`.
    #[must_use]
    pub fn falsy(&self) -> Vec<String> {
        self.falsy
            .clone()
            .unwrap_or_else(|| DEFAULT_FALSY.iter().map(ToString::to_string).collect())
    }

    /// Returns the delimiter between list items.
    #[must_use]
    pub fn list_delimiter(&self) -> &str {
        self.list_delimiter
            .as_deref()
            .unwrap_or(DEFAULT_LIST_DELIMITER)
    }

    /// Returns the delimiter between a key and its value.
    #[must_use]
    pub fn key_delimiter(&self) -> &str {
        self.key_delimiter
            .as_deref()
            .unwrap_or(DEFAULT_KEY_DELIMITER)
    }

    /// Returns `true` if the sentinel was set explicitly.
    #[must_use]
    pub const fn has_none_value(&self) -> bool {
        self.none_value.is_some()
    }

    /// Returns `true` if no option has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlays `overlay` onto this configuration.
    ///
    /// Every option set in `overlay` replaces the corresponding option of
    /// `self`; options `overlay` leaves unset keep their current value.
    /// List options are replaced as a whole.
    #[must_use]
    pub fn merge(&self, overlay: &Self) -> Self {
        Self {
            none_value: overlay.none_value.clone().or_else(|| self.none_value.clone()),
            throw_exceptions: overlay.throw_exceptions.or(self.throw_exceptions),
            truthy: overlay.truthy.clone().or_else(|| self.truthy.clone()),
            falsy: overlay.falsy.clone().or_else(|| self.falsy.clone()),
            list_delimiter: overlay
                .list_delimiter
                .clone()
                .or_else(|| self.list_delimiter.clone()),
            key_delimiter: overlay
                .key_delimiter
                .clone()
                .or_else(|| self.key_delimiter.clone()),
        }
    }
}

/// Reads a present `noneValue` as set, so an explicit `null` sentinel is
/// kept instead of collapsing to unset.
#[cfg(feature = "serde")]
fn deserialize_none_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <Value as serde::Deserialize>::deserialize(deserializer).map(Some)
}
