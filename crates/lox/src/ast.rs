//! Expression syntax tree
//!
//! Trees are built by a parser outside this crate and consumed read-only by
//! the evaluator. Each node owns its children, so a tree is acyclic and has
//! no shared sub-trees.
//!
//! Trees can also be exchanged as JSON, tagged by `"type"`:
//!
//! ```json
//! {"type": "unary",
//!  "operator": {"kind": "MINUS", "lexeme": "-", "line": 1},
//!  "right": {"type": "literal", "value": 3}}
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::Token;
use crate::Value;

/// An expression node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expr {
    /// A constant: `1`, `"s"`, `true`, `nil`
    Literal(ExprLiteral),
    /// A parenthesized expression
    Grouping(ExprGrouping),
    /// A prefix operator applied to one operand
    Unary(ExprUnary),
    /// An infix operator applied to two operands
    Binary(ExprBinary),
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprLiteral {
    /// The constant
    pub value: Value,
}

/// A parenthesized expression: `(expr)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprGrouping {
    /// Inner expression
    pub expression: Box<Expr>,
}

/// A prefix operation: `!x`, `-x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprUnary {
    /// `BANG` or `MINUS`
    pub operator: Token,
    /// Operand
    pub right: Box<Expr>,
}

/// An infix operation: `a + b`, `a == b`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprBinary {
    /// Left operand, evaluated first
    pub left: Box<Expr>,
    /// Arithmetic, comparison or equality operator
    pub operator: Token,
    /// Right operand
    pub right: Box<Expr>,
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════════

impl Expr {
    /// Create a literal node
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(ExprLiteral {
            value: value.into(),
        })
    }

    /// Create a `nil` literal node
    pub fn nil() -> Self {
        Expr::Literal(ExprLiteral { value: Value::Nil })
    }

    /// Create a grouping node
    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping(ExprGrouping {
            expression: Box::new(expression),
        })
    }

    /// Create a unary node
    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary(ExprUnary {
            operator,
            right: Box::new(right),
        })
    }

    /// Create a binary node
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(ExprBinary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }
}

/// Prints the tree in fully parenthesized prefix form, e.g.
/// `(* (- 123) (group 45.67))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{:?}", lit.value),
            Expr::Grouping(group) => write!(f, "(group {})", group.expression),
            Expr::Unary(unary) => write!(f, "({} {})", unary.operator.lexeme, unary.right),
            Expr::Binary(binary) => write!(
                f,
                "({} {} {})",
                binary.operator.lexeme, binary.left, binary.right
            ),
        }
    }
}
