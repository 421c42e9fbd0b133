use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::value::core::Object,
};

/// Evaluates an infix operation on two already evaluated operands.
///
/// Integers support the arithmetic and comparison operators; booleans only
/// support `==` and `!=`. Operands of different types are a type mismatch,
/// and any other pairing of same-typed operands is an unknown operator.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{
///         evaluator::binary::eval_infix,
///         value::core::{Object, TRUE},
///     },
/// };
///
/// let sum = eval_infix(BinaryOperator::Add, &Object::Integer(3), &Object::Integer(4));
/// assert_eq!(sum.unwrap(), Object::Integer(7));
///
/// let mismatch = eval_infix(BinaryOperator::Add, &Object::Integer(5), &TRUE);
/// assert_eq!(mismatch.unwrap_err().to_string(), "type mismatch: Integer + Boolean");
/// ```
pub fn eval_infix(op: BinaryOperator, left: &Object, right: &Object) -> Result<Object, RuntimeError> {
    match (left, right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Object::Boolean(l), Object::Boolean(r)) => eval_boolean_infix(op, *l, *r),
        _ if left.kind() != right.kind() => Err(RuntimeError::TypeMismatch { left: left.kind(),
                                                                              op,
                                                                              right: right.kind() }),
        _ => Err(RuntimeError::UnknownInfixOperator { left: left.kind(),
                                                      op,
                                                      right: right.kind() }),
    }
}

/// Integer arithmetic is checked: overflow and division by zero are errors.
/// Division truncates toward zero, so `-5 / 2` is `-2`.
fn eval_integer_infix(op: BinaryOperator, left: i64, right: i64) -> Result<Object, RuntimeError> {
    let overflow = || RuntimeError::Overflow { left, op, right };
    match op {
        BinaryOperator::Add => left.checked_add(right).map(Object::Integer).ok_or_else(overflow),
        BinaryOperator::Sub => left.checked_sub(right).map(Object::Integer).ok_or_else(overflow),
        BinaryOperator::Mul => left.checked_mul(right).map(Object::Integer).ok_or_else(overflow),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right).map(Object::Integer).ok_or_else(overflow)
        },
        BinaryOperator::Equal => Ok(Object::from(left == right)),
        BinaryOperator::NotEqual => Ok(Object::from(left != right)),
        BinaryOperator::Less => Ok(Object::from(left < right)),
        BinaryOperator::Greater => Ok(Object::from(left > right)),
    }
}

fn eval_boolean_infix(op: BinaryOperator, left: bool, right: bool) -> Result<Object, RuntimeError> {
    match op {
        BinaryOperator::Equal => Ok(Object::from(left == right)),
        BinaryOperator::NotEqual => Ok(Object::from(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left: Object::from(left).kind(),
                                                      op,
                                                      right: Object::from(right).kind() }),
    }
}
