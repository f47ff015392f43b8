//! # Lox
//!
//! Scanner and tree-walking expression evaluator for the Lox language.
//!
//! Source text is turned into tokens by the [`Scanner`]; an expression tree
//! built from those tokens by an external parser is evaluated by the
//! [`Interpreter`].
//!
//! ## Architecture
//!
//! - **Token model**: [`Token`], [`TokenKind`], [`Literal`]
//! - **Scanner**: one pass over the source, diagnostics to a [`Reporter`]
//! - **Expression tree**: the closed [`Expr`] sum type
//! - **Interpreter**: evaluates an [`Expr`] to a [`Value`] or a
//!   [`RuntimeError`]
//!
//! ```
//! use lox::{scan, Expr, Interpreter, Token, TokenKind, Value};
//!
//! let out = scan("1 + 2");
//! assert_eq!(out.tokens.len(), 4);
//!
//! let expr = Expr::binary(
//!     Expr::literal(1.0),
//!     Token::new(TokenKind::Plus, "+", 1),
//!     Expr::literal(2.0),
//! );
//! assert_eq!(Interpreter::new().interpret(&expr).unwrap(), Value::Number(3.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod eval;
pub mod interpreter;
pub mod scanner;
pub mod token;
pub mod value;

// Re-export main types
pub use ast::{Expr, ExprBinary, ExprGrouping, ExprLiteral, ExprUnary};
pub use context::EvalContext;
pub use diagnostics::{Diagnostic, Reporter, Silent};
pub use error::{EvalError, Result, RuntimeError};
pub use eval::{eval_expr, Evaluate};
pub use interpreter::Interpreter;
pub use scanner::{scan, ScanOutput, Scanner};
pub use token::{Literal, Token, TokenKind};
pub use value::Value;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
