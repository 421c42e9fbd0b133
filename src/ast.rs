use std::{fmt, rc::Rc};

use crate::interpreter::lexer::{Token, TokenKind};

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical negation `!x`.
    Not,
    /// Arithmetic negation `-x`.
    Negate,
}

impl UnaryOperator {
    /// Maps a token kind to the prefix operator it spells, if any.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Not),
            TokenKind::Minus => Some(Self::Negate),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Negate => "-",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
}

impl BinaryOperator {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A name, either bound by `let`/a parameter list or referenced in an
/// expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The `IDENT` token the name was read from.
    pub token: Token,
    /// The name itself.
    pub value: String,
}

impl From<Token> for Identifier {
    fn from(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl Identifier {
    #[must_use]
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// The root of a parsed source text: its top-level statements in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    /// Literal text of the first token of the program, or `""` when empty.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.statements.first().map_or("", Statement::token_literal)
    }
}

/// A `{ ... }` sequence of statements, used as the body of `if` branches and
/// function literals.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The opening `{`.
    pub token:      Token,
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    /// Always `{`.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

/// A statement. Statements are evaluated for their effect on the enclosing
/// sequence; the last one's value becomes the value of the sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The `let` keyword.
        token: Token,
        /// The bound name.
        name:  Identifier,
        /// The initializer.
        value: Expr,
    },
    /// `return [<value>];`
    Return {
        /// The `return` keyword.
        token: Token,
        /// The returned expression; `None` for a bare `return;`.
        value: Option<Expr>,
    },
    /// An expression evaluated for its value.
    Expression {
        /// The first token of the expression.
        token: Token,
        /// The expression.
        expr:  Expr,
    },
}

impl Statement {
    /// Literal text of the statement's first token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Let { token, .. } | Self::Return { token, .. } | Self::Expression { token, .. } => {
                &token.literal
            },
        }
    }
}

/// An expression node.
///
/// Every variant keeps the token it started at (for infix and call nodes, the
/// operator or `(` token) so diagnostics can refer back to the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// An integer literal.
    Integer {
        token: Token,
        value: i64,
    },
    /// `true` or `false`.
    Boolean {
        token: Token,
        value: bool,
    },
    /// `!right` or `-right`.
    Prefix {
        token: Token,
        op:    UnaryOperator,
        right: Box<Self>,
    },
    /// `left op right`.
    Infix {
        token: Token,
        left:  Box<Self>,
        op:    BinaryOperator,
        right: Box<Self>,
    },
    /// `if (condition) { consequence } else { alternative }`.
    If {
        token:       Token,
        condition:   Box<Self>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    /// `fn(parameters) { body }`.
    ///
    /// Parameters and body are reference counted so that every function
    /// object created from this literal shares them with the tree.
    Function {
        token:      Token,
        parameters: Rc<[Identifier]>,
        body:       Rc<BlockStatement>,
    },
    /// `function(arguments)`.
    Call {
        /// The `(` token.
        token:     Token,
        function:  Box<Self>,
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// The token this node was built from.
    #[must_use]
    pub fn token(&self) -> &Token {
        match self {
            Self::Identifier(ident) => &ident.token,
            Self::Integer { token, .. }
            | Self::Boolean { token, .. }
            | Self::Prefix { token, .. }
            | Self::Infix { token, .. }
            | Self::If { token, .. }
            | Self::Function { token, .. }
            | Self::Call { token, .. } => token,
        }
    }

    /// Literal text of the node's token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

/// Writes a statement sequence so that it parses back to the same sequence.
///
/// Expression statements that are followed by another statement get an
/// explicit `;`, otherwise `a (b + c)` would read back as a call.
fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{statement}")?;
        if i + 1 < statements.len() && matches!(statement, Statement::Expression { .. }) {
            f.write_str(";")?;
        }
    }
    Ok(())
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_statements(f, &self.statements)?;
        f.write_str(" }")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value), .. } => write!(f, "return {value};"),
            Self::Return { value: None, .. } => f.write_str("return;"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Integer { token, .. } => f.write_str(&token.literal),
            Self::Boolean { value, .. } => write!(f, "{value}"),
            Self::Prefix { op, right, .. } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                // Prefix and infix nodes already print their own parentheses.
                if matches!(**condition, Self::Prefix { .. } | Self::Infix { .. }) {
                    write!(f, "if {condition} {consequence}")?;
                } else {
                    write!(f, "if ({condition}) {consequence}")?;
                }
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function { parameters, body, .. } => {
                f.write_str("fn(")?;
                write_comma_separated(f, parameters)?;
                write!(f, ") {body}")
            },
            Self::Call { function,
                         arguments,
                         .. } => {
                write!(f, "{function}(")?;
                write_comma_separated(f, arguments)?;
                f.write_str(")")
            },
        }
    }
}
