use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{InfixParseFn, Parser, Precedence},
    },
};

impl Precedence {
    /// The precedence of `kind` when it appears in infix position.
    ///
    /// Tokens that cannot continue an expression have `Lowest`, which ends
    /// the expression loop.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Eq => Some(BinaryOperator::Equal),
        TokenKind::NotEq => Some(BinaryOperator::NotEqual),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::Gt => Some(BinaryOperator::Greater),
        _ => None,
    }
}

impl<'src> Parser<'src> {
    /// Looks up the infix handler registered for `kind`.
    pub(super) fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<'src>> {
        match kind {
            TokenKind::LParen => Some(Self::parse_call_expression),
            _ if token_to_binary_operator(kind).is_some() => Some(Self::parse_infix_expression),
            _ => None,
        }
    }

    /// Parses `left <op> right` with the current token on the operator.
    ///
    /// The right operand is parsed at the operator's own precedence.
    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.cur.clone();
        let op = token_to_binary_operator(token.kind)?;
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expr::Infix { token,
                           left: Box::new(left),
                           op,
                           right: Box::new(right) })
    }

    /// Parses `function(arguments)` with the current token on `(`.
    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let token = self.cur.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expr::Call { token,
                          function: Box::new(function),
                          arguments })
    }
}
