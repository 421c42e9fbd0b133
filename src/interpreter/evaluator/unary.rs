use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::value::core::Object,
};

/// Evaluates a prefix operation on an already evaluated operand.
///
/// - `Not`: `!true` is `false`, `!false` and `!null` are `true`, and every
///   other value (all integers included) gives `false`.
/// - `Negate`: only defined for integers.
///
/// # Example
/// ```
/// use quill::{
///     ast::UnaryOperator,
///     interpreter::{
///         evaluator::unary::eval_prefix,
///         value::core::{FALSE, NULL, Object, TRUE},
///     },
/// };
///
/// assert_eq!(eval_prefix(UnaryOperator::Not, &Object::Integer(5)).unwrap(), FALSE);
/// assert_eq!(eval_prefix(UnaryOperator::Not, &NULL).unwrap(), TRUE);
/// assert_eq!(eval_prefix(UnaryOperator::Negate, &Object::Integer(5)).unwrap(),
///            Object::Integer(-5));
/// assert!(eval_prefix(UnaryOperator::Negate, &TRUE).is_err());
/// ```
pub fn eval_prefix(op: UnaryOperator, right: &Object) -> Result<Object, RuntimeError> {
    match op {
        UnaryOperator::Not => Ok(Object::from(!right.is_truthy())),
        UnaryOperator::Negate => match right {
            Object::Integer(value) => value.checked_neg()
                                           .map(Object::Integer)
                                           .ok_or(RuntimeError::NegationOverflow { value: *value }),
            _ => Err(RuntimeError::UnknownPrefixOperator { op,
                                                           operand: right.kind() }),
        },
    }
}
