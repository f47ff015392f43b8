//! Lexical diagnostics and the sink they are reported to

use std::fmt;

/// A non-fatal, line-attributed problem found while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line
    pub line: usize,
    /// Human-readable description
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic for the given line.
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// Sink for lexical diagnostics.
///
/// The scanner reports each malformed lexeme as soon as it is found and
/// carries on; what happens to the report is up to the implementor.
pub trait Reporter {
    /// Receive one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let d = Diagnostic::new(3, "Unexpected character: @");
        assert_eq!(d.to_string(), "[line 3] Error: Unexpected character: @");
    }

    #[test]
    fn test_vec_collects() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::new(1, "a"));
        sink.report(Diagnostic::new(2, "b"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].line, 2);
    }
}
