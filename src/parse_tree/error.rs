use thiserror::Error;

/// Errors raised while building or evaluating a [`ParseTree`](super::ParseTree).
///
/// Positions count whitespace separated tokens, starting at 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTreeError {
    #[error("expression is empty")]
    Empty,

    #[error("invalid token `{token}` at position {position}")]
    InvalidToken { token: String, position: usize },

    #[error("unexpected token `{token}` at position {position}")]
    UnexpectedToken { token: String, position: usize },

    #[error("unbalanced parentheses at position {position}")]
    UnbalancedParens { position: usize },

    #[error("expression nested too deeply at position {position}")]
    TooDeep { position: usize },

    #[error("expression does not form a complete tree")]
    Incomplete,

    #[error("division by zero")]
    DivisionByZero,
}
