//! Option declarations and the validate/assign seams.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::builtin::BuiltinAction;
use crate::value::{Value, ValueKind};

/// Whether an option must appear, may appear with a value, or is a switch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Requiredness {
    /// A switch: no value is consumed.
    None,
    /// Must be present and takes a value.
    Required,
    /// May be present and takes a value.
    #[default]
    Optional,
}

impl Requiredness {
    pub fn takes_value(&self) -> bool {
        !matches!(self, Requiredness::None)
    }
}

/// Accepts or rejects a coerced value before any assignment happens.
pub trait Validate {
    fn validate(&mut self, value: &Value) -> bool;
}

impl<F> Validate for F
where
    F: FnMut(&Value) -> bool,
{
    fn validate(&mut self, value: &Value) -> bool {
        self(value)
    }
}

/// Stores a validated value into the caller's destination.
pub trait Assign<T> {
    fn assign(&mut self, value: &Value, target: &mut T);
}

impl<T, F> Assign<T> for F
where
    F: FnMut(&Value, &mut T),
{
    fn assign(&mut self, value: &Value, target: &mut T) {
        self(value, target)
    }
}

/// What runs once an option has been validated.
pub(crate) enum Handler<T> {
    Builtin(BuiltinAction),
    User(Box<dyn Assign<T>>),
}

/// A single option as handed to [`ProgramOptions::add_option`](crate::ProgramOptions::add_option).
///
/// The assign callback is part of the constructor so an option can never be
/// registered without one.
pub struct OptionDecl<T> {
    pub(crate) short: Option<char>,
    pub(crate) long: String,
    pub(crate) kind: ValueKind,
    pub(crate) requiredness: Requiredness,
    pub(crate) validate: Option<Box<dyn Validate>>,
    pub(crate) handler: Handler<T>,
    pub(crate) description: String,
}

impl<T> OptionDecl<T> {
    /// Declare `--long` of the given kind, assigned through `assign`.
    pub fn new(long: impl Into<String>, kind: ValueKind, assign: impl Assign<T> + 'static) -> Self {
        Self::with_handler(long, kind, Handler::User(Box::new(assign)))
    }

    pub(crate) fn with_handler(long: impl Into<String>, kind: ValueKind, handler: Handler<T>) -> Self {
        Self {
            short: None,
            long: long.into(),
            kind,
            requiredness: Requiredness::default(),
            validate: None,
            handler,
            description: String::new(),
        }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn requiredness(mut self, requiredness: Requiredness) -> Self {
        self.requiredness = requiredness;
        self
    }

    pub fn required(self) -> Self {
        self.requiredness(Requiredness::Required)
    }

    pub fn optional(self) -> Self {
        self.requiredness(Requiredness::Optional)
    }

    /// Make this a switch that consumes no value.
    pub fn switch(self) -> Self {
        self.requiredness(Requiredness::None)
    }

    pub fn validate(mut self, validate: impl Validate + 'static) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// An option owned by a section of the store.
pub struct RegisteredOption<T> {
    pub(crate) short: Option<char>,
    pub(crate) long: String,
    pub(crate) kind: ValueKind,
    pub(crate) requiredness: Requiredness,
    pub(crate) validate: Option<Box<dyn Validate>>,
    pub(crate) handler: Handler<T>,
    pub(crate) description: String,
}

impl<T> RegisteredOption<T> {
    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn requiredness(&self) -> Requiredness {
        self.requiredness
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_validator(&self) -> bool {
        self.validate.is_some()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.handler, Handler::Builtin(_))
    }
}

impl<T> From<OptionDecl<T>> for RegisteredOption<T> {
    fn from(decl: OptionDecl<T>) -> Self {
        Self {
            short: decl.short,
            long: decl.long,
            kind: decl.kind,
            requiredness: decl.requiredness,
            validate: decl.validate,
            handler: decl.handler,
            description: decl.description,
        }
    }
}

impl<T> fmt::Debug for RegisteredOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredOption")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("kind", &self.kind)
            .field("requiredness", &self.requiredness)
            .field("has_validator", &self.validate.is_some())
            .field("builtin", &self.is_builtin())
            .finish()
    }
}
