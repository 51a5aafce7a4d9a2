//! Value classification.
//!
//! [`is_primitive`] and [`is_object`] keep their historical definitions and
//! are not complements of each other: `null` is primitive but not an object,
//! functions are neither. The comparators never use them; they dispatch on
//! [`classify`], which puts every value in exactly one [`Class`].

use std::fmt;

use crate::value::{Array, Function, Object, Value};

/// What a `typeof` operator reports for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeKind {
    Undefined,
    Object,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
}

impl RuntimeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            RuntimeKind::Undefined => "undefined",
            RuntimeKind::Object => "object",
            RuntimeKind::Boolean => "boolean",
            RuntimeKind::Number => "number",
            RuntimeKind::BigInt => "bigint",
            RuntimeKind::String => "string",
            RuntimeKind::Symbol => "symbol",
            RuntimeKind::Function => "function",
        }
    }
}

impl fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The comparison class of a value.
#[derive(Debug, Clone, Copy)]
pub enum Class<'a> {
    Null,
    /// Booleans, numbers, bigints, strings, symbols and `undefined`.
    Primitive,
    Compound(Compound<'a>),
    Function(&'a Function),
}

/// A compound, split by its array tag.
#[derive(Debug, Clone, Copy)]
pub enum Compound<'a> {
    Array(&'a Array),
    Object(&'a Object),
}

impl Compound<'_> {
    /// Identity of the underlying storage.
    pub(crate) fn addr(&self) -> usize {
        match self {
            Compound::Array(a) => a.addr(),
            Compound::Object(o) => o.addr(),
        }
    }
}

pub fn classify(value: &Value) -> Class<'_> {
    match value {
        Value::Null => Class::Null,
        Value::Undefined
        | Value::Bool(_)
        | Value::Number(_)
        | Value::BigInt(_)
        | Value::String(_)
        | Value::Symbol(_) => Class::Primitive,
        Value::Array(a) => Class::Compound(Compound::Array(a)),
        Value::Object(o) => Class::Compound(Compound::Object(o)),
        Value::Function(f) => Class::Function(f),
    }
}

/// `null`, or anything whose runtime kind is neither `object` nor `function`.
pub fn is_primitive(value: &Value) -> bool {
    matches!(value, Value::Null)
        || !matches!(value.type_of(), RuntimeKind::Object | RuntimeKind::Function)
}

/// Truthy and of runtime kind `object`.
pub fn is_object(value: &Value) -> bool {
    value.is_truthy() && value.type_of() == RuntimeKind::Object
}

/// Short type label used in mismatch reports. Unlike [`RuntimeKind`] it tells
/// `null`, arrays and objects apart.
pub(crate) fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Array(_) => "array",
        other => other.type_of().as_str(),
    }
}
