use std::mem;

use tracing::{debug, trace_span};

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Handler for a token in prefix position.
pub(super) type PrefixParseFn<'src> = fn(&mut Parser<'src>) -> Option<Expr>;
/// Handler for a token in infix position; receives the left operand.
pub(super) type InfixParseFn<'src> = fn(&mut Parser<'src>, Expr) -> Option<Expr>;

/// Binding power of an operator, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// `!x` and `-x`
    Prefix,
    /// `f(x)`
    Call,
}

/// A Pratt parser over a pull-based token stream.
///
/// The parser keeps exactly two tokens in view, `cur` and `peek`, and never
/// looks further ahead. Syntax errors are collected rather than returned so a
/// single pass reports every problem it can find.
///
/// # Example
/// ```
/// use quill::interpreter::{lexer::Lexer, parser::Parser};
///
/// let (program, errors) = Parser::new(Lexer::new("a + b * c")).parse_program();
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(a + (b * c))");
/// ```
pub struct Parser<'src> {
    lexer:           Lexer<'src>,
    pub(super) cur:  Token,
    pub(super) peek: Token,
    errors:          Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser and primes `cur` and `peek` from `lexer`.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let cur = lexer.next_token();
        let peek = lexer.next_token();
        Self { lexer,
               cur,
               peek,
               errors: Vec::new() }
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are left out of the program; the reason
    /// is in the returned error list, which callers must check before trusting
    /// the tree.
    #[must_use]
    pub fn parse_program(mut self) -> (Program, Vec<ParseError>) {
        let mut statements = Vec::new();
        while !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }
        (Program { statements }, self.errors)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The current token's prefix handler produces the left operand. Then, for
    /// as long as the lookahead is an infix operator binding tighter than
    /// `precedence`, the parser steps onto it and lets its infix handler
    /// extend the left operand. Equal precedence stops the loop, which makes
    /// every binary operator left associative.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let _span = trace_span!("parse_expression", ?precedence, token = %self.cur.literal).entered();

        let Some(prefix) = Self::prefix_parse_fn(self.cur.kind) else {
            self.error(ParseError::NoPrefixParseFn { kind: self.cur.kind,
                                                     line: self.cur.line, });
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_parse_fn(self.peek.kind) else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    pub(super) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur = mem::replace(&mut self.peek, next);
    }

    pub(super) fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the lookahead is `kind`; otherwise records an error and
    /// stays put.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.error(ParseError::UnexpectedToken { expected: kind,
                                                     found:    self.peek.kind,
                                                     line:     self.peek.line, });
            false
        }
    }

    pub(super) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(super) fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur.kind)
    }

    pub(super) fn error(&mut self, error: ParseError) {
        debug!(%error, "syntax error");
        self.errors.push(error);
    }

    /// Skips the rest of a malformed statement.
    ///
    /// Stops on a `;` (which the caller then steps past), or just before a
    /// closing `}` or the end of input so the enclosing block or program sees
    /// it.
    pub(super) fn synchronize(&mut self) {
        while !self.cur_is(TokenKind::Semicolon)
              && !self.cur_is(TokenKind::Eof)
              && !self.peek_is(TokenKind::RBrace)
              && !self.peek_is(TokenKind::Eof)
        {
            self.next_token();
        }
    }
}
