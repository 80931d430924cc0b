//! Control structures for deferred options.
//!
//! - [`LazyOption`]: an option whose variant is computed on first use and
//!   memoized
//!
//! # Examples
//!
//! ```rust
//! use lambars_option::control::LazyOption;
//! use lambars_option::{Optional, Value};
//!
//! let lazy = LazyOption::new(|| Optional::some(42));
//! assert!(!lazy.is_forced());
//!
//! let option = lazy.force();
//! assert_eq!(option.get(), Ok(Value::from(42)));
//! ```

mod lazy;

pub use lazy::LazyOption;
