use tracing::trace_span;

use crate::{
    ast::{Identifier, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the statement starting at the current token.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return`,
    /// - an expression used as a statement.
    ///
    /// On return the current token is the last token of the statement
    /// (its `;` if it had one).
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        let _span = trace_span!("parse_statement", token = %self.cur.literal, line = self.cur.line).entered();

        match self.cur.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>;`; the `;` is optional.
    ///
    /// A missing identifier or `=` is recorded and the rest of the statement
    /// is skipped.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur.clone();

        if !self.expect_peek(TokenKind::Ident) {
            self.synchronize();
            return None;
        }
        let name = Identifier::from(self.cur.clone());

        if !self.expect_peek(TokenKind::Assign) {
            self.synchronize();
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let { token, name, value })
    }

    /// Parses `return [<expression>];`.
    ///
    /// The operand is absent when `return` is directly followed by `;`, `}` or
    /// the end of input.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur.clone();

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
            return Some(Statement::Return { token, value: None });
        }
        if self.peek_is(TokenKind::RBrace) || self.peek_is(TokenKind::Eof) {
            return Some(Statement::Return { token, value: None });
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return { token,
                                 value: Some(value) })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur.clone();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression { token, expr })
    }
}
