//! # quill
//!
//! quill is an interpreter for a small expression-oriented scripting language
//! with integers, booleans, first-class functions and closures. Source text is
//! tokenized, parsed into an AST with a Pratt parser, and evaluated by walking
//! the tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{
        environment::Environment, evaluator::core::eval_program, lexer::Lexer, parser::Parser,
        value::core::Object,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator, and prints back to canonical source text.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Keeps the originating token on every node for diagnostics.
/// - Renders nodes as fully parenthesized, reparseable text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the errors that can be raised while parsing or
/// evaluating code, with descriptive messages and, for syntax errors, the
/// line they were found on.
///
/// # Responsibilities
/// - Defines error enums for the parser and the evaluator.
/// - Attaches line numbers and detailed messages for context.
/// - Wraps both for callers that run a whole script.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime
/// value model.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides the scope chain used for bindings and closures.
pub mod interpreter;
/// Interactive read-eval-print loop.
///
/// Reads one line at a time, reports syntax errors or prints the value of the
/// line, and keeps bindings between lines.
pub mod repl;

/// Parses `source` into a program.
///
/// Syntax errors do not stop the parse; they are returned alongside whatever
/// could be parsed. The tree is only meaningful when the list is empty.
///
/// # Examples
/// ```
/// let (program, errors) = quill::parse("let x = 1 + 2 * 3;");
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
///
/// let (_, errors) = quill::parse("let = 5;");
/// assert_eq!(errors[0].to_string(), "line 1: expected next token to be IDENT, got = instead");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    Parser::new(Lexer::new(source)).parse_program()
}

/// Evaluates `program` in `env`.
///
/// Runtime errors are returned as [`Object::Error`] values rather than as a
/// `Result`, and bindings made by the program stay in `env`.
///
/// # Examples
/// ```
/// use quill::{interpreter::environment::Environment, interpreter::value::core::Object};
///
/// let env = Environment::new();
/// let (program, _) = quill::parse("let double = fn(x) { x * 2 }; double(21)");
///
/// assert_eq!(quill::eval(&program, &env), Object::Integer(42));
/// assert!(env.get("double").is_some());
/// ```
#[must_use]
pub fn eval(program: &Program, env: &Environment) -> Object {
    eval_program(program, env)
}

/// Parses and evaluates `source` in `env`, returning the final value.
///
/// # Errors
/// Returns [`Error::Parse`] with every syntax error when the source does not
/// parse (nothing is evaluated), or [`Error::Runtime`] when evaluation fails.
///
/// # Examples
/// ```
/// use quill::{get_result, interpreter::environment::Environment, interpreter::value::core::Object};
///
/// let env = Environment::new();
/// assert_eq!(get_result("5 + 5 * 2", &env).unwrap(), Object::Integer(15));
///
/// // Unknown identifiers are runtime errors.
/// let err = get_result("y + 1", &env).unwrap_err();
/// assert_eq!(err.to_string(), "identifier not found: y");
/// ```
pub fn get_result(source: &str, env: &Environment) -> Result<Object, Error> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(Error::Parse(errors));
    }

    match eval(&program, env) {
        Object::Error(error) => Err(Error::Runtime(error)),
        value => Ok(value),
    }
}
