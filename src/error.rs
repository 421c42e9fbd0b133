/// Parsing errors.
///
/// Defines the syntax errors the parser accumulates while reading source code.
/// A parse never stops at the first error; every mismatch is recorded and the
/// parser moves on so that all problems on a line can be reported together.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unknown identifiers, division by zero,
/// calling a non-function and arity mismatches.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Failure of a complete parse-then-evaluate run, as returned by
/// [`crate::get_result`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source did not parse; holds every syntax error found.
    #[error("{}", join_lines(.0))]
    Parse(Vec<ParseError>),
    /// Evaluation stopped with a runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

fn join_lines(errors: &[ParseError]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
