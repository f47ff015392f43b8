//! Error types for Lox evaluation

use thiserror::Error;

use crate::token::Token;

/// A failed operand type check, attributed to the operator that made it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}\n[line {}]", .message, .token.line)]
pub struct RuntimeError {
    /// Operator token that triggered the failure
    pub token: Token,
    /// Human-readable message
    pub message: String,
}

impl RuntimeError {
    /// Create a runtime error for `token`.
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        Self {
            token: token.clone(),
            message: message.into(),
        }
    }
}

/// Main error type for evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Operand type check failed
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// Expression nesting exceeded the configured limit
    #[error("Expression nesting exceeds maximum depth of {max}")]
    DepthExceeded {
        /// Configured maximum depth
        max: usize,
    },
}

impl EvalError {
    /// The runtime error inside, if this is one.
    pub fn as_runtime(&self) -> Option<&RuntimeError> {
        match self {
            EvalError::Runtime(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_runtime_error_display() {
        let token = Token::new(TokenKind::Minus, "-", 4);
        let err = RuntimeError::new(&token, "Operand must be a number.");
        assert_eq!(err.to_string(), "Operand must be a number.\n[line 4]");
    }

    #[test]
    fn test_eval_error_is_transparent() {
        let token = Token::new(TokenKind::Plus, "+", 1);
        let err: EvalError = RuntimeError::new(&token, "boom").into();
        assert_eq!(err.to_string(), "boom\n[line 1]");
        assert_eq!(err.as_runtime().map(|e| e.token.kind), Some(TokenKind::Plus));
    }

    #[test]
    fn test_depth_exceeded_display() {
        let err = EvalError::DepthExceeded { max: 3 };
        assert_eq!(
            err.to_string(),
            "Expression nesting exceeds maximum depth of 3"
        );
        assert!(err.as_runtime().is_none());
    }
}
