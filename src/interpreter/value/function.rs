use std::{fmt, rc::Rc};

use crate::{
    ast::{BlockStatement, Identifier},
    interpreter::environment::Environment,
};

/// A function value: what a `fn` literal evaluates to.
///
/// `parameters` and `body` are shared with the syntax tree, so creating a
/// function never copies its code. `env` is the environment that was current
/// when the literal was evaluated; calls resolve free variables against it
/// rather than against the caller's scope.
#[derive(Debug, Clone)]
pub struct Function {
    pub parameters: Rc<[Identifier]>,
    pub body:       Rc<BlockStatement>,
    pub env:        Environment,
}

impl Function {
    /// Number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters = self.parameters
                             .iter()
                             .map(|p| p.value.as_str())
                             .collect::<Vec<_>>()
                             .join(", ");
        write!(f, "fn({parameters}) {}", self.body)
    }
}
