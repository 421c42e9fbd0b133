/// The environment module holds variable bindings during evaluation.
///
/// An environment is one frame of the lexical scope chain. Function calls
/// create a frame enclosed by the function's captured environment, which is
/// what makes closures work.
///
/// # Responsibilities
/// - Stores name-to-value bindings for one scope.
/// - Resolves names through enclosing frames.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and comparison, manages bindings, and produces
/// results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, and `return` control flow.
/// - Reports runtime errors such as type mismatches or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and line.
/// - Skips whitespace and comments.
/// - Turns unrecognised characters into `Illegal` tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and constructs an AST that
/// represents the syntactic structure of statements and expressions, using
/// precedence climbing for operators.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar, collecting syntax errors with line information.
/// - Resolves operator precedence and associativity.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the objects produced by evaluation: integers,
/// booleans, null, functions and errors.
///
/// # Responsibilities
/// - Defines the `Object` enum and its shared constants.
/// - Implements truthiness and display rules.
pub mod value;
