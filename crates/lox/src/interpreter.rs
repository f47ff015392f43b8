//! Tree-walking interpreter for expression trees

use crate::eval::eval_expr;
use crate::{EvalContext, Expr, Result, Value};

/// Evaluates expression trees under a fixed [`EvalContext`].
///
/// The interpreter keeps no state between calls, so evaluating the same
/// tree twice yields the same result and one instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    ctx: EvalContext,
}

impl Interpreter {
    /// Create an interpreter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpreter with a custom context.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self { ctx }
    }

    /// The context this interpreter evaluates under.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// Evaluate `expr` to a value, stopping at the first runtime error.
    pub fn interpret(&self, expr: &Expr) -> Result<Value> {
        eval_expr(expr, &self.ctx)
    }
}
