//! Literal evaluation

use crate::ast::ExprLiteral;
use crate::{EvalContext, EvalError, Value};

use super::Evaluate;

impl Evaluate for ExprLiteral {
    fn eval(&self, _ctx: &EvalContext, _depth: usize) -> Result<Value, EvalError> {
        Ok(self.value.clone())
    }
}
