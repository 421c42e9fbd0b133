/// Core evaluation logic for programs, statements and expressions.
///
/// Contains the recursive dispatch over the syntax tree, the shared
/// statement-sequence loop, and the `Interrupt` signal used to short-circuit
/// on `return` and on runtime errors.
pub mod core;

/// Prefix operator evaluation.
///
/// Handles `!` (truthiness inversion) and `-` (integer negation).
pub mod unary;

/// Infix operator evaluation.
///
/// Implements arithmetic and comparison on integers, equality on booleans,
/// and the type-mismatch and unknown-operator errors for everything else.
pub mod binary;

/// Function calls.
///
/// Creates closures from function literals and applies them to arguments in a
/// fresh environment enclosed by the closure's captured one.
pub mod function;
