/// User-defined function values.
///
/// Defines the `Function` type: a parameter list and body shared with the
/// syntax tree, paired with the environment captured where the function
/// literal was evaluated.
pub mod function;

pub mod core;
