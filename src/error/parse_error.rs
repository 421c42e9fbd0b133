use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    #[error("line {line}: expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with this token.
    #[error("line {line}: no prefix parse function for {kind} found")]
    NoPrefixParseFn {
        /// The token that could not start an expression.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("line {line}: could not parse {literal} as integer")]
    InvalidInteger {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParseFn { line, .. }
            | Self::InvalidInteger { line, .. } => *line,
        }
    }
}
