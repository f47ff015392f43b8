//! Expression evaluation

pub mod binary;
pub mod literal;
pub mod unary;

use crate::{EvalContext, EvalError, Expr, Value};

/// Trait for evaluating AST nodes to values.
///
/// This is the core abstraction for the tree-walking interpreter.
/// Each expression node type implements this trait. `depth` is the nesting
/// depth of `self`, starting at 1 for the root.
pub trait Evaluate {
    /// Evaluate this AST node under the given context.
    fn eval(&self, ctx: &EvalContext, depth: usize) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expr {
    fn eval(&self, ctx: &EvalContext, depth: usize) -> Result<Value, EvalError> {
        if depth > ctx.max_depth {
            return Err(EvalError::DepthExceeded { max: ctx.max_depth });
        }

        let value = match self {
            Expr::Literal(expr) => expr.eval(ctx, depth),
            Expr::Unary(expr) => expr.eval(ctx, depth),
            Expr::Binary(expr) => expr.eval(ctx, depth),

            // Parentheses are transparent
            Expr::Grouping(expr) => expr.expression.eval(ctx, depth + 1),
        }?;

        if ctx.trace {
            eprintln!("{}", trace_line(self, &value, depth));
        }

        Ok(value)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Format one trace entry: `expr => value`, indented two spaces per level
/// below the root.
pub fn trace_line(expr: &Expr, value: &Value, depth: usize) -> String {
    format!(
        "{:indent$}{} => {:?}",
        "",
        expr,
        value,
        indent = depth.saturating_sub(1) * 2
    )
}

/// Evaluate an expression tree from its root.
pub fn eval_expr(expr: &Expr, ctx: &EvalContext) -> Result<Value, EvalError> {
    expr.eval(ctx, 1)
}
