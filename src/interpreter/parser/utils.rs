use crate::{
    ast::{Expr, Identifier},
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of expressions up to `closing`.
    ///
    /// Expects the current token to be the opening delimiter and leaves the
    /// parser on `closing`. An immediately encountered closing token produces
    /// an empty list.
    ///
    /// Grammar: `list := (expression ("," expression)*)? closing`
    pub(super) fn parse_expression_list(&mut self, closing: TokenKind) -> Option<Vec<Expr>> {
        let mut items = Vec::new();
        if self.peek_is(closing) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(closing) {
            return None;
        }
        Some(items)
    }

    /// Parses the parameter names of a function literal.
    ///
    /// Expects the current token to be `(` and leaves the parser on `)`.
    ///
    /// Grammar: `parameters := (IDENT ("," IDENT)*)? ")"`
    pub(super) fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        parameters.push(Identifier::from(self.cur.clone()));
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            parameters.push(Identifier::from(self.cur.clone()));
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(parameters)
    }
}
