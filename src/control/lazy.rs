//! Lazily computed options.
//!
//! This module provides [`LazyOption`], an option whose variant is computed
//! on first use and cached for every later access.
//!
//! # Examples
//!
//! ```rust
//! use lambars_option::{LazyOption, Optional, Value};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let lazy = LazyOption::new(move || {
//!     counter.set(counter.get() + 1);
//!     Optional::some("computed")
//! });
//!
//! // Nothing computed yet
//! assert_eq!(calls.get(), 0);
//!
//! let option = Optional::from(lazy);
//! assert!(option.is_defined());
//! assert_eq!(option.get(), Ok(Value::from("computed")));
//!
//! // Memoized
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::error::{InvalidCallableError, OptionError, ResultSource, UnexpectedResultError};
use crate::option::{Input, Optional, Thunk};
use crate::value::Value;

/// The internal state of a `LazyOption`.
enum LazyState {
    /// The computation has not run yet.
    Uninit(Thunk),
    /// The computation produced an option.
    Init(Optional),
    /// The computation produced something other than an option.
    Failed(OptionError),
    /// The computation is running or panicked.
    Poisoned,
}

/// An option computed on first use.
///
/// The computation runs at most once, no matter how many combinators are
/// called or how many clones of the `LazyOption` exist: clones share the
/// same cell. Combinators on [`Optional::Lazy`] force the computation and
/// forward to the realized option.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. Options are meant to be built and consumed
/// on a single thread.
///
/// # Examples
///
/// ```rust
/// use lambars_option::{LazyOption, Optional, Value};
///
/// let expensive = LazyOption::with_arguments(
///     |arguments| Optional::some(arguments.len() as i64),
///     vec![Value::from(1), Value::from(2)],
/// );
///
/// let option = Optional::None.or_else(Optional::from(expensive));
/// assert_eq!(option.get(), Ok(Value::from(2)));
/// ```
#[derive(Clone)]
pub struct LazyOption {
    state: Rc<RefCell<LazyState>>,
}

static_assertions::assert_not_impl_any!(LazyOption: Send, Sync);

impl LazyOption {
    /// Creates a lazy option from a computation returning an option.
    ///
    /// The computation will not be called until the option is forced.
    pub fn new<F, R>(computation: F) -> Self
    where
        F: FnOnce() -> R + 'static,
        R: Into<Input>,
    {
        Self {
            state: Rc::new(RefCell::new(LazyState::Uninit(Box::new(move || {
                computation().into()
            })))),
        }
    }

    /// Creates a lazy option from a callable and its pre-bound arguments.
    pub fn with_arguments<F, R>(callable: F, arguments: Vec<Value>) -> Self
    where
        F: FnOnce(Vec<Value>) -> R + 'static,
        R: Into<Input>,
    {
        Self::new(move || callable(arguments))
    }

    /// Creates a lazy option from a callable object and its pre-bound
    /// arguments.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::InvalidCallable`] immediately if `callable` is
    /// not invocable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_option::{LazyOption, OptionError, Optional, Value};
    ///
    /// let callable = Value::callable(|arguments: &[Value]| Optional::some(arguments[0].clone()));
    /// let lazy = LazyOption::from_callable(callable, vec![Value::from("first")]).unwrap();
    /// assert_eq!(Optional::from(lazy).get(), Ok(Value::from("first")));
    ///
    /// let error = LazyOption::from_callable(Value::from("foo"), Vec::new()).unwrap_err();
    /// assert!(matches!(error, OptionError::InvalidCallable(_)));
    /// ```
    pub fn from_callable(callable: Value, arguments: Vec<Value>) -> Result<Self, OptionError> {
        match callable {
            Value::Object(object) if object.is_callable() => {
                Ok(Self::new(move || object.call(&arguments)))
            }
            other => Err(InvalidCallableError {
                description: other.to_string(),
            }
            .into()),
        }
    }

    /// Forces the computation and returns a reference to the realized
    /// option.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnexpectedResult`] if the computation produced
    /// something other than an option. The failure is cached like a success.
    ///
    /// # Panics
    ///
    /// Panics if the computation forces the same lazy option while running,
    /// or panicked on an earlier attempt.
    pub fn try_force(&self) -> Result<Ref<'_, Optional>, OptionError> {
        let needs_initialization = match &*self.state.borrow() {
            LazyState::Init(_) => false,
            LazyState::Failed(error) => return Err(error.clone()),
            LazyState::Poisoned => panic!("LazyOption instance has been poisoned"),
            LazyState::Uninit(_) => true,
        };

        if needs_initialization {
            self.initialize();
        }

        if let LazyState::Failed(error) = &*self.state.borrow() {
            return Err(error.clone());
        }

        Ok(Ref::map(self.state.borrow(), |state| match state {
            LazyState::Init(option) => option,
            _ => panic!("LazyOption should be initialized at this point"),
        }))
    }

    /// Forces the computation and returns a reference to the realized
    /// option.
    ///
    /// # Panics
    ///
    /// Panics with the [`OptionError::UnexpectedResult`] message if the
    /// computation produced something other than an option, and in the
    /// cases listed on [`LazyOption::try_force`].
    pub fn force(&self) -> Ref<'_, Optional> {
        match self.try_force() {
            Ok(option) => option,
            Err(error) => panic!("{error}"),
        }
    }

    pub(crate) fn try_force_mut(&self) -> Result<RefMut<'_, Optional>, OptionError> {
        drop(self.try_force()?);

        Ok(RefMut::map(self.state.borrow_mut(), |state| match state {
            LazyState::Init(option) => option,
            _ => panic!("LazyOption should be initialized at this point"),
        }))
    }

    /// Forces the computation and returns the realized option.
    pub(crate) fn into_realized(self) -> Optional {
        self.force().clone()
    }

    /// Returns `true` once the computation has run.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        matches!(
            &*self.state.borrow(),
            LazyState::Init(_) | LazyState::Failed(_)
        )
    }

    /// Returns `true` if both handles share the same computation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Runs the computation and caches its outcome.
    ///
    /// The state is Poisoned while the computation runs, so a panic leaves
    /// it Poisoned.
    fn initialize(&self) {
        let computation = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut *state, LazyState::Poisoned) {
                LazyState::Uninit(computation) => computation,
                other => {
                    *state = other;
                    return;
                }
            }
        };

        log::debug!("forcing lazy option");

        let outcome = match computation() {
            Input::Option(option) => LazyState::Init(option),
            other => {
                log::debug!("lazy option computation returned {}", other.describe());
                LazyState::Failed(
                    UnexpectedResultError {
                        source: ResultSource::LazyOption,
                        found: other.describe(),
                    }
                    .into(),
                )
            }
        };

        *self.state.borrow_mut() = outcome;
    }
}

impl fmt::Debug for LazyOption {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            LazyState::Init(option) => formatter.debug_tuple("LazyOption").field(option).finish(),
            LazyState::Uninit(_) => formatter
                .debug_tuple("LazyOption")
                .field(&"<unforced>")
                .finish(),
            LazyState::Failed(error) => formatter.debug_tuple("LazyOption").field(error).finish(),
            LazyState::Poisoned => formatter
                .debug_tuple("LazyOption")
                .field(&"<poisoned>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_lazy_option_basic_creation() {
        let lazy = LazyOption::new(|| Optional::None);
        assert!(!lazy.is_forced());
    }

    #[rstest]
    fn test_lazy_option_memoization() {
        let call_count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&call_count);
        let lazy = LazyOption::new(move || {
            counter.set(counter.get() + 1);
            Optional::None
        });

        assert_eq!(call_count.get(), 0);

        assert!(lazy.force().is_empty());
        assert_eq!(call_count.get(), 1);

        assert!(lazy.force().is_empty());
        assert_eq!(call_count.get(), 1);
    }

    #[rstest]
    fn test_clones_share_the_computation() {
        let call_count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&call_count);
        let lazy = LazyOption::new(move || {
            counter.set(counter.get() + 1);
            Optional::some(1)
        });
        let clone = lazy.clone();

        let _ = lazy.force();
        let _ = clone.force();
        assert_eq!(call_count.get(), 1);
        assert!(clone.is_forced());
        assert!(lazy.ptr_eq(&clone));
    }

    #[rstest]
    fn test_non_option_result_is_reported() {
        let lazy = LazyOption::new(|| 5);
        let error = lazy.try_force().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Lazy option callbacks must return an Optional, got integer."
        );
        assert!(lazy.is_forced());
    }

    #[rstest]
    #[should_panic(expected = "Lazy option callbacks must return an Optional")]
    fn test_force_panics_on_non_option_result() {
        let lazy = LazyOption::new(|| "not an option");
        let _ = lazy.force();
    }

    #[rstest]
    fn test_with_arguments_passes_arguments() {
        let lazy = LazyOption::with_arguments(
            |arguments| Optional::some(Value::list(arguments)),
            vec![Value::from("a"), Value::from("b")],
        );
        assert_eq!(
            lazy.force().get(),
            Ok(Value::list([Value::from("a"), Value::from("b")]))
        );
    }

    #[rstest]
    fn test_debug_shows_state() {
        let lazy = LazyOption::new(|| Optional::some(1));
        assert_eq!(format!("{lazy:?}"), "LazyOption(\"<unforced>\")");
        let _ = lazy.force();
        assert_eq!(format!("{lazy:?}"), "LazyOption(Some(Int(1)))");
    }
}
