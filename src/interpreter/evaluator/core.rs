use tracing::trace;

use crate::{
    ast::{BlockStatement, Expr, Identifier, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            binary::eval_infix,
            function::{eval_call, eval_function_literal},
            unary::eval_prefix,
        },
        value::core::{NULL, Object},
    },
};

/// Why evaluation of a statement sequence stopped early.
///
/// Both variants travel through the `Err` side of [`EvalResult`], so `?`
/// after every recursive call is all it takes to stop the enclosing
/// sequence. Only [`eval_program`] and function application catch them.
#[derive(Debug, Clone, PartialEq)]
pub enum Interrupt {
    /// A `return` statement ran; carries the returned value.
    Return(Object),
    /// Evaluation failed.
    Error(RuntimeError),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, Interrupt>;

/// Evaluates a whole program in `env`.
///
/// This is the only place where a top-level `return` is unwrapped into its
/// value and where a runtime error becomes an [`Object::Error`].
///
/// # Example
/// ```
/// use quill::{
///     interpreter::{environment::Environment, evaluator::core::eval_program, value::core::Object},
///     parse,
/// };
///
/// let (program, errors) = parse("let a = 5; return a * 2; 99");
/// assert!(errors.is_empty());
///
/// assert_eq!(eval_program(&program, &Environment::new()), Object::Integer(10));
/// ```
#[must_use]
pub fn eval_program(program: &Program, env: &Environment) -> Object {
    match eval_statements(&program.statements, env) {
        Ok(value) | Err(Interrupt::Return(value)) => value,
        Err(Interrupt::Error(error)) => Object::from(error),
    }
}

/// Evaluates the statements of a block in `env`.
///
/// Blocks do not open a scope of their own; a `let` inside an `if` branch
/// binds in the surrounding frame.
pub fn eval_block_statement(block: &BlockStatement, env: &Environment) -> EvalResult<Object> {
    eval_statements(&block.statements, env)
}

/// Runs statements in order and yields the last one's value, or `null` for an
/// empty sequence. A `return` or an error stops the loop and propagates.
fn eval_statements(statements: &[Statement], env: &Environment) -> EvalResult<Object> {
    let mut result = NULL;
    for statement in statements {
        result = eval_statement(statement, env)?;
    }
    Ok(result)
}

/// Evaluates a single statement.
///
/// A `let` yields the value it bound. A `return` never yields normally: it
/// raises [`Interrupt::Return`] with its value, or `null` when bare.
pub fn eval_statement(statement: &Statement, env: &Environment) -> EvalResult<Object> {
    trace!(line = statement_line(statement), %statement, "eval statement");
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.set(&name.value, value.clone());
            Ok(value)
        },
        Statement::Return { value, .. } => {
            let value = match value {
                Some(expr) => eval_expression(expr, env)?,
                None => NULL,
            };
            Err(Interrupt::Return(value))
        },
        Statement::Expression { expr, .. } => eval_expression(expr, env),
    }
}

/// Evaluates an expression.
///
/// The evaluator dispatches on the expression variant: literals, identifiers,
/// prefix and infix operations, conditionals, function literals and calls.
pub fn eval_expression(expr: &Expr, env: &Environment) -> EvalResult<Object> {
    match expr {
        Expr::Identifier(ident) => eval_identifier(ident, env),
        Expr::Integer { value, .. } => Ok(Object::Integer(*value)),
        Expr::Boolean { value, .. } => Ok(Object::from(*value)),
        Expr::Prefix { op, right, .. } => {
            let right = eval_expression(right, env)?;
            Ok(eval_prefix(*op, &right)?)
        },
        Expr::Infix { left, op, right, .. } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            Ok(eval_infix(*op, &left, &right)?)
        },
        Expr::If { condition,
                   consequence,
                   alternative,
                   .. } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expr::Function { parameters, body, .. } => {
            Ok(eval_function_literal(parameters, body, env))
        },
        Expr::Call { function,
                     arguments,
                     .. } => eval_call(function, arguments, env),
    }
}

fn eval_identifier(ident: &Identifier, env: &Environment) -> EvalResult<Object> {
    env.get(&ident.value)
       .ok_or_else(|| RuntimeError::UnknownIdentifier { name: ident.value.clone() }.into())
}

/// Evaluates the consequence when the condition is truthy, otherwise the
/// alternative, otherwise `null`.
fn eval_if_expression(condition: &Expr,
                      consequence: &BlockStatement,
                      alternative: Option<&BlockStatement>,
                      env: &Environment)
                      -> EvalResult<Object> {
    let condition = eval_expression(condition, env)?;
    if condition.is_truthy() {
        eval_block_statement(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block_statement(alternative, env)
    } else {
        Ok(NULL)
    }
}

fn statement_line(statement: &Statement) -> usize {
    match statement {
        Statement::Let { token, .. }
        | Statement::Return { token, .. }
        | Statement::Expression { token, .. } => token.line,
    }
}
