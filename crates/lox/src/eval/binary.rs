//! Binary operation evaluation

use crate::ast::ExprBinary;
use crate::token::{Token, TokenKind};
use crate::{EvalContext, EvalError, RuntimeError, Value};

use super::Evaluate;

impl Evaluate for ExprBinary {
    fn eval(&self, ctx: &EvalContext, depth: usize) -> Result<Value, EvalError> {
        // Both operands are always evaluated, left first; no short-circuit.
        let left = self.left.eval(ctx, depth + 1)?;
        let right = self.right.eval(ctx, depth + 1)?;
        let op = &self.operator;

        match op.kind {
            // Arithmetic
            TokenKind::Plus => eval_add(left, right, op),
            TokenKind::Minus => eval_sub(left, right, op),
            TokenKind::Star => eval_mul(left, right, op),
            TokenKind::Slash => eval_div(left, right, op),

            // Comparison
            TokenKind::Greater => eval_gt(left, right, op),
            TokenKind::GreaterEqual => eval_ge(left, right, op),
            TokenKind::Less => eval_lt(left, right, op),
            TokenKind::LessEqual => eval_le(left, right, op),

            // Equality
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),

            _ => Err(RuntimeError::new(
                op,
                format!("Unsupported binary operator '{}'.", op.lexeme),
            )
            .into()),
        }
    }
}

/// Require a number operand of `op`.
fn number_operand(op: &Token, operand: &Value) -> Result<f64, EvalError> {
    match operand {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeError::new(op, "Operand must be a number.").into()),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Operations
// ═══════════════════════════════════════════════════════════════════════

fn eval_add(left: Value, right: Value, op: &Token) -> Result<Value, EvalError> {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),

        // String concatenation
        (Value::String(a), Value::String(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }

        _ => Err(RuntimeError::new(op, "Operands must be two numbers or two strings.").into()),
    }
}

// Division by zero follows IEEE-754 and yields an infinity or NaN.
macro_rules! impl_arithmetic {
    ($name:ident, $op:tt) => {
        fn $name(left: Value, right: Value, op: &Token) -> Result<Value, EvalError> {
            let a = number_operand(op, &left)?;
            let b = number_operand(op, &right)?;
            Ok(Value::Number(a $op b))
        }
    };
}

impl_arithmetic!(eval_sub, -);
impl_arithmetic!(eval_mul, *);
impl_arithmetic!(eval_div, /);

// ═══════════════════════════════════════════════════════════════════════
// Comparison Operations
// ═══════════════════════════════════════════════════════════════════════

macro_rules! impl_comparison {
    ($name:ident, $op:tt) => {
        fn $name(left: Value, right: Value, op: &Token) -> Result<Value, EvalError> {
            let a = number_operand(op, &left)?;
            let b = number_operand(op, &right)?;
            Ok(Value::Bool(a $op b))
        }
    };
}

impl_comparison!(eval_gt, >);
impl_comparison!(eval_ge, >=);
impl_comparison!(eval_lt, <);
impl_comparison!(eval_le, <=);
