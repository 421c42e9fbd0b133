use std::rc::Rc;

use crate::{
    ast::{Expr, Identifier, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence, PrefixParseFn},
    },
};

impl<'src> Parser<'src> {
    /// Looks up the prefix handler registered for `kind`.
    pub(super) fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<'src>> {
        match kind {
            TokenKind::Ident => Some(Self::parse_identifier),
            TokenKind::Int => Some(Self::parse_integer_literal),
            TokenKind::True | TokenKind::False => Some(Self::parse_boolean),
            TokenKind::Bang | TokenKind::Minus => Some(Self::parse_prefix_expression),
            TokenKind::LParen => Some(Self::parse_grouped_expression),
            TokenKind::If => Some(Self::parse_if_expression),
            TokenKind::Function => Some(Self::parse_function_literal),
            _ => None,
        }
    }

    fn parse_identifier(&mut self) -> Option<Expr> {
        Some(Expr::Identifier(Identifier::from(self.cur.clone())))
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        if let Ok(value) = token.literal.parse::<i64>() {
            Some(Expr::Integer { token, value })
        } else {
            self.error(ParseError::InvalidInteger { literal: token.literal,
                                                    line:    token.line, });
            None
        }
    }

    fn parse_boolean(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        let value = token.kind == TokenKind::True;
        Some(Expr::Boolean { token, value })
    }

    /// Parses `!x` or `-x`. The operand binds at prefix precedence, so `-a * b`
    /// is `(-a) * b`.
    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        let op = UnaryOperator::from_token(token.kind)?;
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::Prefix { token,
                            op,
                            right: Box::new(right) })
    }

    /// Parses `( expr )`. Grouping leaves no node of its own in the tree.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /// Parses `if (condition) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) || !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expr::If { token,
                        condition: Box::new(condition),
                        consequence,
                        alternative })
    }

    /// Parses `fn(a, b) { ... }`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(Expr::Function { token,
                              parameters: Rc::from(parameters),
                              body: Rc::new(body) })
    }
}
