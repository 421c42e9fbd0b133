use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::value::core::ObjectKind,
};

/// Represents all errors that can occur during evaluation.
///
/// The `Display` output of each variant is the message carried by the
/// resulting error object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to use a name that is not bound in any enclosing scope.
    #[error("identifier not found: {name}")]
    UnknownIdentifier {
        /// The name of the identifier.
        name: String,
    },
    /// A prefix operator was applied to a value it does not support.
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        op:      UnaryOperator,
        /// The operand's type.
        operand: ObjectKind,
    },
    /// An infix operator is not defined for two values of the same type.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        /// The left operand's type.
        left:  ObjectKind,
        /// The operator.
        op:    BinaryOperator,
        /// The right operand's type.
        right: ObjectKind,
    },
    /// An infix operator was applied to operands of different types.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// The left operand's type.
        left:  ObjectKind,
        /// The operator.
        op:    BinaryOperator,
        /// The right operand's type.
        right: ObjectKind,
    },
    /// Attempted integer division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Integer arithmetic overflowed 64 bits.
    #[error("integer overflow: {left} {op} {right}")]
    Overflow {
        /// The left operand.
        left:  i64,
        /// The operator.
        op:    BinaryOperator,
        /// The right operand.
        right: i64,
    },
    /// Negating the smallest 64-bit integer.
    #[error("integer overflow: -({value})")]
    NegationOverflow {
        /// The operand.
        value: i64,
    },
    /// Called a value that is not a function.
    #[error("not a function: {found}")]
    NotAFunction {
        /// The callee's type.
        found: ObjectKind,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("wrong number of arguments: want={expected}, got={found}")]
    ArgumentCountMismatch {
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
}
