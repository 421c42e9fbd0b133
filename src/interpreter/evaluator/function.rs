use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{BlockStatement, Expr, Identifier},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interrupt, eval_block_statement, eval_expression},
        value::{core::Object, function::Function},
    },
};

/// Turns a function literal into a closure over `env`.
///
/// The closure shares the literal's parameters and body and keeps `env`
/// alive for as long as the closure itself is reachable.
#[must_use]
pub fn eval_function_literal(parameters: &Rc<[Identifier]>,
                             body: &Rc<BlockStatement>,
                             env: &Environment)
                             -> Object {
    Object::from(Function { parameters: Rc::clone(parameters),
                            body:       Rc::clone(body),
                            env:        env.clone(), })
}

/// Evaluates a call expression.
///
/// The callee is evaluated first and must be a function. Arguments are then
/// evaluated left to right; the first failing argument stops the call.
pub fn eval_call(function: &Expr, arguments: &[Expr], env: &Environment) -> EvalResult<Object> {
    let function = match eval_expression(function, env)? {
        Object::Function(function) => function,
        other => return Err(RuntimeError::NotAFunction { found: other.kind() }.into()),
    };
    let arguments = eval_expressions(arguments, env)?;
    apply_function(&function, arguments)
}

/// Evaluates expressions in order, stopping at the first one that fails.
pub fn eval_expressions(exprs: &[Expr], env: &Environment) -> EvalResult<Vec<Object>> {
    exprs.iter().map(|expr| eval_expression(expr, env)).collect()
}

/// Applies a function to evaluated arguments.
///
/// Arguments are bound positionally in a new frame enclosed by the function's
/// captured environment, never the caller's. A `return` anywhere in the body
/// ends the call and its value becomes the call's value.
///
/// # Errors
/// Returns `ArgumentCountMismatch` when the number of arguments differs from
/// the number of parameters, and propagates any error raised by the body.
pub fn apply_function(function: &Function, arguments: Vec<Object>) -> EvalResult<Object> {
    if function.arity() != arguments.len() {
        return Err(RuntimeError::ArgumentCountMismatch { expected: function.arity(),
                                                         found:    arguments.len(), }.into());
    }
    debug!(arity = function.arity(), "calling function");

    let env = Environment::new_enclosed(&function.env);
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        env.set(&parameter.value, argument);
    }

    match eval_block_statement(&function.body, &env) {
        Ok(value) | Err(Interrupt::Return(value)) => Ok(value),
        Err(error) => Err(error),
    }
}
