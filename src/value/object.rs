//! Host objects carried inside [`Value::Object`](super::Value::Object).

use std::fmt;
use std::rc::Rc;

use super::{Array, Value};
use crate::option::Input;

/// A host object that can be stored in a [`Value`].
///
/// Objects are compared by identity. The provided methods describe the
/// capabilities the coercion layer looks for: a string representation, an
/// array view, and invocation.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use lambars_option::{Configuration, Object, SomeString, SomeType, Value};
///
/// #[derive(Debug)]
/// struct Color(u32);
///
/// impl Object for Color {
///     fn type_name(&self) -> &str {
///         "Color"
///     }
///
///     fn to_string_value(&self) -> Option<String> {
///         Some(format!("#{:06x}", self.0))
///     }
/// }
///
/// let value = Value::Object(Rc::new(Color(0xff0000)));
/// let option = SomeString::create(value, Configuration::new());
/// assert_eq!(option.get(), Ok(Value::from("#ff0000")));
/// ```
pub trait Object: fmt::Debug {
    /// Returns the name of the object's type.
    fn type_name(&self) -> &str;

    /// Returns the string representation, if the object has one.
    fn to_string_value(&self) -> Option<String> {
        None
    }

    /// Returns an array view, if the object is array-like.
    fn to_array(&self) -> Option<Array> {
        None
    }

    /// Returns `true` if [`Object::call`] may be used.
    fn is_callable(&self) -> bool {
        false
    }

    /// Invokes the object with positional arguments.
    ///
    /// Only meaningful when [`Object::is_callable`] returns `true`; the
    /// default implementation returns `Null`.
    fn call(&self, arguments: &[Value]) -> Input {
        let _ = arguments;
        Input::Value(Value::Null)
    }
}

/// A shared handle to a host object.
pub type ObjectRef = Rc<dyn Object>;

type CallableFunction = Box<dyn Fn(&[Value]) -> Input>;

pub(crate) struct CallableObject {
    function: CallableFunction,
}

impl CallableObject {
    pub(crate) fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Input + 'static,
    {
        Self {
            function: Box::new(function),
        }
    }
}

impl fmt::Debug for CallableObject {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Callable")
    }
}

impl Object for CallableObject {
    fn type_name(&self) -> &str {
        "Callable"
    }

    fn is_callable(&self) -> bool {
        true
    }

    fn call(&self, arguments: &[Value]) -> Input {
        (self.function)(arguments)
    }
}

pub(crate) struct StringableObject {
    type_name: String,
    function: Box<dyn Fn() -> String>,
}

impl StringableObject {
    pub(crate) fn new<F>(type_name: String, function: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        Self {
            type_name,
            function: Box::new(function),
        }
    }
}

impl fmt::Debug for StringableObject {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("StringableObject")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl Object for StringableObject {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn to_string_value(&self) -> Option<String> {
        Some((self.function)())
    }
}
