//! Batch commands: scan a file, evaluate or print a JSON expression tree

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use lox::{scan, Expr, Interpreter};

/// Exit status for malformed input (lexical errors).
pub const EX_DATAERR: u8 = 65;

/// Exit status for a runtime error during evaluation.
pub const EX_SOFTWARE: u8 = 70;

pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn load_expr(path: &Path) -> Result<Expr> {
    let text = read_source(path)?;
    parse_expr(&text).with_context(|| format!("{} is not a valid expression tree", path.display()))
}

pub fn parse_expr(text: &str) -> Result<Expr> {
    Ok(serde_json::from_str(text)?)
}

/// Print one token per line; diagnostics go to `err`.
pub fn tokens(source: &str, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<u8> {
    let output = scan(source);
    for token in &output.tokens {
        writeln!(out, "{}", token)?;
    }
    for diagnostic in &output.diagnostics {
        writeln!(err, "{}", diagnostic)?;
    }
    Ok(if output.has_errors() { EX_DATAERR } else { 0 })
}

pub fn eval(
    expr: &Expr,
    interpreter: &Interpreter,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<u8> {
    match interpreter.interpret(expr) {
        Ok(value) => {
            writeln!(out, "{}", value)?;
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "{}", e)?;
            Ok(EX_SOFTWARE)
        }
    }
}

pub fn print(expr: &Expr, out: &mut dyn Write) -> io::Result<u8> {
    writeln!(out, "{}", expr)?;
    Ok(0)
}
