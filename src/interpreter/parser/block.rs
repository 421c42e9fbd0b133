use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses a block expression delimited by braces.
    ///
    /// Expects the current token to be `{` and leaves the parser on the
    /// matching `}`. Running into the end of input first is a syntax error.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(super) fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        let token = self.cur.clone();
        let mut statements = Vec::new();
        self.next_token();

        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        if self.cur_is(TokenKind::Eof) {
            self.error(ParseError::UnexpectedToken { expected: TokenKind::RBrace,
                                                     found:    TokenKind::Eof,
                                                     line:     self.cur.line, });
            return None;
        }

        Some(BlockStatement { token, statements })
    }
}
