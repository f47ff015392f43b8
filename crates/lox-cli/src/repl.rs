//! Interactive session
//!
//! Each line is scanned and its tokens printed. A line that starts with `{`
//! is read as a JSON expression tree and evaluated instead.

use std::io::{self, Write};

use anyhow::Result;
use lox::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands;

const PROMPT: &str = "> ";

pub fn run(interpreter: &Interpreter) -> Result<u8> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;
                let mut stdout = io::stdout().lock();
                let mut stderr = io::stderr().lock();
                handle_line(&line, interpreter, &mut stdout, &mut stderr)?;
                stdout.flush()?;
            }
            // Ctrl-C abandons the current line only
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(0)
}

/// Errors in one line are reported and the session carries on.
fn handle_line(
    line: &str,
    interpreter: &Interpreter,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    if line.trim_start().starts_with('{') {
        match commands::parse_expr(line) {
            Ok(expr) => {
                commands::eval(&expr, interpreter, out, err)?;
            }
            Err(e) => writeln!(err, "Invalid expression tree: {}", e)?,
        }
    } else {
        commands::tokens(line, out, err)?;
    }
    Ok(())
}
