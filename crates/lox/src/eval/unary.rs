//! Unary operation evaluation

use crate::ast::ExprUnary;
use crate::token::{Token, TokenKind};
use crate::{EvalContext, EvalError, RuntimeError, Value};

use super::Evaluate;

impl Evaluate for ExprUnary {
    fn eval(&self, ctx: &EvalContext, depth: usize) -> Result<Value, EvalError> {
        let operand = self.right.eval(ctx, depth + 1)?;

        match self.operator.kind {
            TokenKind::Bang => Ok(eval_not(&operand)),
            TokenKind::Minus => eval_neg(operand, &self.operator),
            _ => Err(RuntimeError::new(
                &self.operator,
                format!("Unsupported unary operator '{}'.", self.operator.lexeme),
            )
            .into()),
        }
    }
}

/// Evaluate arithmetic negation (`-x`).
pub(crate) fn eval_neg(operand: Value, op: &Token) -> Result<Value, EvalError> {
    match operand {
        Value::Number(n) => Ok(Value::Number(-n)),
        _ => Err(RuntimeError::new(op, "Operand must be a number.").into()),
    }
}

/// Evaluate logical negation (`!x`) of the operand's truthiness.
fn eval_not(operand: &Value) -> Value {
    Value::Bool(!operand.is_truthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minus() -> Token {
        Token::new(TokenKind::Minus, "-", 1)
    }

    #[test]
    fn test_neg_number() {
        let result = eval_neg(Value::Number(42.0), &minus()).unwrap();
        assert_eq!(result, Value::Number(-42.0));
    }

    #[test]
    fn test_neg_zero_is_negative_zero() {
        let result = eval_neg(Value::Number(0.0), &minus()).unwrap();
        assert!(result.as_number().unwrap().is_sign_negative());
    }

    #[test]
    fn test_neg_string_fails() {
        let result = eval_neg(Value::string("a"), &minus());
        let err = result.unwrap_err();
        let err = err.as_runtime().unwrap();
        assert_eq!(err.message, "Operand must be a number.");
        assert_eq!(err.token, minus());
    }

    #[test]
    fn test_neg_nil_fails() {
        assert!(eval_neg(Value::Nil, &minus()).is_err());
    }

    #[test]
    fn test_not_values() {
        assert_eq!(eval_not(&Value::Nil), Value::Bool(true));
        assert_eq!(eval_not(&Value::Bool(true)), Value::Bool(false));
        assert_eq!(eval_not(&Value::Number(0.0)), Value::Bool(false));
        assert_eq!(eval_not(&Value::string("")), Value::Bool(false));
    }
}
