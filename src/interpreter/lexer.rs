use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// The scanner is derived with `logos`; every variant with a `token` or
/// `regex` attribute is produced directly from source text. `Illegal` and
/// `Eof` are never matched by a pattern and are synthesised by [`Lexer`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`. The value is parsed by the
    /// parser so that out-of-range literals become syntax errors.
    #[regex(r"[0-9]+")]
    Int,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `let`
    #[token("let")]
    Let,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `fn`
    #[token("fn")]
    Function,
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// A character sequence the scanner does not recognise.
    Illegal,
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "INT",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Let => "LET",
            Self::Return => "RETURN",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Function => "FUNCTION",
            Self::Ident => "IDENT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "WHITESPACE",
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A single lexical token: its kind, the exact source text it was scanned
/// from, and the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind:    TokenKind,
    pub literal: String,
    pub line:    usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }
}

/// Pull-based token source over a borrowed source string.
///
/// Once the input is exhausted every further call to
/// [`next_token`](Self::next_token) returns an `Eof` token, so the parser can
/// keep a one-token lookahead without special casing the end.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let x = 5;");
/// let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
///                                 let token = lexer.next_token();
///                                 (token.kind != TokenKind::Eof).then_some(token.kind)
///                             }).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let, TokenKind::Ident, TokenKind::Assign, TokenKind::Int,
///             TokenKind::Semicolon]);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Token {
        let next = self.inner.next();
        let line = self.inner.extras.line;
        match next {
            Some(Ok(kind)) => Token::new(kind, self.inner.slice(), line),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.inner.slice(), line),
            None => Token::new(TokenKind::Eof, "", line),
        }
    }
}
