/// Parser state and the expression loop.
///
/// Holds the current and lookahead tokens, the accumulated syntax errors and
/// the precedence-climbing `parse_expression` that drives every other rule.
pub mod core;

/// Infix parsing.
///
/// Defines the operator precedence table and the infix handlers for binary
/// operators and call expressions.
pub mod binary;

/// Prefix parsing.
///
/// Defines the handlers for tokens that can start an expression: literals,
/// identifiers, prefix operators, grouping, `if` and `fn`.
pub mod unary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences.
pub mod block;

/// Statement parsing.
///
/// Implements `let`, `return` and expression statements, including recovery
/// after a malformed statement.
pub mod statement;

/// Shared helpers for comma-separated lists.
pub mod utils;

pub use self::core::{Parser, Precedence};
