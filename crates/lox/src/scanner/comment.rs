//! Line and nested block comments

use super::Scanner;
use crate::diagnostics::{Diagnostic, Reporter};

impl Scanner<'_> {
    /// Skip to the end of the line. The newline itself is left for the
    /// main loop so the line counter advances in one place.
    pub(super) fn line_comment(&mut self) {
        while self.peek() != '\n' && !self.is_at_end() {
            self.advance();
        }
    }

    /// Skip a `/* ... */` comment, honouring nested pairs.
    ///
    /// The opening `/*` has already been consumed. At each position `/*` is
    /// tested before `*/`, and a matched pair consumes both characters, so no
    /// character takes part in two pairs.
    pub(super) fn block_comment(&mut self, reporter: &mut dyn Reporter) {
        let mut depth = 1usize;

        while depth > 0 {
            if self.is_at_end() {
                reporter.report(Diagnostic::new(self.line, "Unterminated block comment."));
                return;
            }

            match (self.peek(), self.peek_next()) {
                ('/', '*') => {
                    self.advance();
                    self.advance();
                    depth += 1;
                }
                ('*', '/') => {
                    self.advance();
                    self.advance();
                    depth -= 1;
                }
                ('\n', _) => {
                    self.line += 1;
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }
    }
}
