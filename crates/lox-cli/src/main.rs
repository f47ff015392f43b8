//! `loxi`: scan Lox source, evaluate expression trees, or start a REPL.

mod commands;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lox::context::DEFAULT_MAX_DEPTH;
use lox::{EvalContext, Interpreter};

#[derive(Parser, Debug)]
#[command(name = "loxi", version, about = "Lox scanner and expression evaluator")]
struct Cli {
    /// Trace every evaluated node to stderr
    #[arg(long, global = true)]
    trace: bool,

    /// Maximum expression nesting depth (trees are read from JSON, whose
    /// reader rejects nesting past about 128 levels first)
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Scan a source file and print its tokens
    Tokens {
        /// Lox source file
        file: PathBuf,
    },
    /// Evaluate an expression tree stored as JSON
    Eval {
        /// JSON expression tree
        file: PathBuf,
    },
    /// Print an expression tree stored as JSON in prefix form
    Print {
        /// JSON expression tree
        file: PathBuf,
    },
    /// Start an interactive session (the default)
    Repl,
}

impl Cli {
    fn context(&self) -> EvalContext {
        EvalContext::with_max_depth(self.max_depth).with_trace(self.trace)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let interpreter = Interpreter::with_context(cli.context());

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    let status = match cli.command.unwrap_or(Command::Repl) {
        Command::Tokens { file } => {
            let source = commands::read_source(&file)?;
            commands::tokens(&source, &mut stdout, &mut stderr)?
        }
        Command::Eval { file } => {
            let expr = commands::load_expr(&file)?;
            commands::eval(&expr, &interpreter, &mut stdout, &mut stderr)?
        }
        Command::Print { file } => {
            let expr = commands::load_expr(&file)?;
            commands::print(&expr, &mut stdout)?
        }
        Command::Repl => {
            drop(stdout);
            drop(stderr);
            repl::run(&interpreter)?
        }
    };

    Ok(ExitCode::from(status))
}
