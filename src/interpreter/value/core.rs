use std::{fmt, rc::Rc};

use crate::{error::RuntimeError, interpreter::value::function::Function};

/// The one `true` value.
pub const TRUE: Object = Object::Boolean(true);
/// The one `false` value.
pub const FALSE: Object = Object::Boolean(false);
/// The one `null` value.
pub const NULL: Object = Object::Null;

/// Represents a runtime value in the interpreter.
///
/// Booleans and null are never built ad hoc: they come from the [`TRUE`],
/// [`FALSE`] and [`NULL`] constants, and `Object::from(bool)` returns one of
/// the two boolean constants.
#[derive(Debug, Clone)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// The absence of a value, e.g. an `if` without `else` whose condition was
    /// falsy.
    Null,
    /// A closure.
    Function(Rc<Function>),
    /// The error that stopped evaluation of a program.
    Error(RuntimeError),
}

/// The type tag of an [`Object`], as shown in runtime error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Integer,
    Boolean,
    Null,
    Function,
    Error,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "Integer",
            Self::Boolean => "Boolean",
            Self::Null => "Null",
            Self::Function => "Function",
            Self::Error => "Error",
        };
        f.write_str(name)
    }
}

impl Object {
    /// Returns the type tag of the value.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Integer(_) => ObjectKind::Integer,
            Self::Boolean(_) => ObjectKind::Boolean,
            Self::Null => ObjectKind::Null,
            Self::Function(_) => ObjectKind::Function,
            Self::Error(_) => ObjectKind::Error,
        }
    }

    /// Whether the value counts as true in a condition.
    ///
    /// Only `false` and `null` are falsy; every integer, including `0`, is
    /// truthy.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::{FALSE, NULL, Object};
    ///
    /// assert!(Object::Integer(0).is_truthy());
    /// assert!(!FALSE.is_truthy());
    /// assert!(!NULL.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }
}

/// Integers, booleans and null compare by value; functions compare by
/// identity.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }
}

impl From<Function> for Object {
    fn from(function: Function) -> Self {
        Self::Function(Rc::new(function))
    }
}

impl From<RuntimeError> for Object {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    #[test]
    fn booleans_come_from_the_constants() {
        assert_eq!(Object::from(true), TRUE);
        assert_eq!(Object::from(false), FALSE);
        assert_ne!(TRUE, FALSE);
    }

    #[test]
    fn displays_values() {
        assert_eq!(Object::Integer(-7).to_string(), "-7");
        assert_eq!(TRUE.to_string(), "true");
        assert_eq!(NULL.to_string(), "null");

        let error = Object::from(RuntimeError::TypeMismatch { left:  ObjectKind::Integer,
                                                              op:    BinaryOperator::Add,
                                                              right: ObjectKind::Boolean, });
        assert_eq!(error.to_string(), "ERROR: type mismatch: Integer + Boolean");
        assert_eq!(error.kind(), ObjectKind::Error);
    }

    #[test]
    fn values_of_different_kinds_are_unequal() {
        assert_ne!(Object::Integer(0), FALSE);
        assert_ne!(Object::Integer(0), NULL);
        assert_eq!(Object::Integer(3).kind(), ObjectKind::Integer);
    }
}
