//! Input classification shared by every `create` entry point.
//!
//! Creation runs the same precedence for the generic variant and for each
//! typed variant; only the [`Target`] differs:
//!
//! 1. a raw value equal to the resolved sentinel becomes `None`;
//! 2. an existing option is re-coerced (configurations merged, identity
//!    kept when it already is the target variant);
//! 3. a callable is deferred behind a [`LazyOption`];
//! 4. anything else goes to the target's constructor.

use super::{Input, OptionKind, Optional, SomeValue, Thunk};
use crate::config::Configuration;
use crate::control::LazyOption;
use crate::value::Value;

/// The variant a creation routine produces.
#[derive(Clone, Copy)]
pub(crate) struct Target {
    pub(crate) kind: OptionKind,
    defaults: fn() -> Configuration,
    construct: fn(Value, Configuration) -> Optional,
}

impl Target {
    /// The generic populated variant.
    pub(crate) const GENERIC: Self = Self {
        kind: OptionKind::Some,
        defaults: Configuration::defaults,
        construct: construct_generic,
    };

    pub(crate) const fn new(
        kind: OptionKind,
        defaults: fn() -> Configuration,
        construct: fn(Value, Configuration) -> Optional,
    ) -> Self {
        Self {
            kind,
            defaults,
            construct,
        }
    }

    /// Returns the target's defaults with `configuration` laid over them.
    pub(crate) fn resolve(&self, configuration: &Configuration) -> Configuration {
        (self.defaults)().merge(configuration)
    }
}

fn construct_generic(value: Value, configuration: Configuration) -> Optional {
    Optional::Some(SomeValue::new(
        value,
        Configuration::defaults().merge(&configuration),
    ))
}

/// Classifies `input` and produces an option of the `target` variant.
pub(crate) fn create(target: Target, input: Input, configuration: Configuration) -> Optional {
    let none_value = target.resolve(&configuration).none_value();

    match input {
        Input::Value(value) if value == none_value => {
            log::debug!("{value:?} matches the sentinel, creating None");
            Optional::None
        }
        Input::Option(option) => create_from_option(target, option, configuration),
        Input::Callable(computation) => create_from_callable(target, computation, configuration),
        Input::Value(Value::Object(object)) if object.is_callable() => {
            create_from_callable(target, Box::new(move || object.call(&[])), configuration)
        }
        Input::Value(value) => (target.construct)(value, configuration),
    }
}

fn create_from_option(
    target: Target,
    mut option: Optional,
    configuration: Configuration,
) -> Optional {
    log::debug!("re-coercing {} into {}", option.kind(), target.kind);

    let configuration = match option.configuration_mut() {
        Some(existing) => {
            *existing = existing.merge(&configuration);
            existing.clone()
        }
        None => configuration,
    };

    let none_value = target.resolve(&configuration).none_value();
    let value = option.get_or_else(none_value.clone());
    if value == none_value {
        return Optional::None;
    }

    if option.kind() == target.kind {
        return option;
    }

    create(target, Input::Value(value), configuration)
}

fn create_from_callable(
    target: Target,
    computation: Thunk,
    configuration: Configuration,
) -> Optional {
    log::debug!("deferring creation of {} behind a lazy option", target.kind);
    Optional::Lazy(LazyOption::new(move || {
        create(target, computation(), configuration)
    }))
}
