//! Strings, numbers and identifiers

use super::{is_alpha_numeric, is_digit, keyword, Scanner};
use crate::diagnostics::{Diagnostic, Reporter};
use crate::token::{Literal, TokenKind};

impl Scanner<'_> {
    /// Scan a string literal; the opening quote has been consumed.
    ///
    /// No escape sequences are decoded and the literal may span lines.
    pub(super) fn string(&mut self, reporter: &mut dyn Reporter) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            reporter.report(Diagnostic::new(self.line, "Unterminated string."));
            return;
        }

        // closing quote
        self.advance();

        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.add_literal_token(TokenKind::String, Literal::String(value));
    }

    /// Scan a number literal; the first digit has been consumed.
    pub(super) fn number(&mut self, reporter: &mut dyn Reporter) {
        while is_digit(self.peek()) {
            self.advance();
        }

        // A `.` only belongs to the number when a digit follows it.
        if self.peek() == '.' && is_digit(self.peek_next()) {
            self.advance();
            while is_digit(self.peek()) {
                self.advance();
            }
        }

        match self.lexeme().parse::<f64>() {
            Ok(n) => self.add_literal_token(TokenKind::Number, Literal::Number(n)),
            Err(e) => reporter.report(Diagnostic::new(
                self.start_line,
                format!("Invalid number literal '{}': {}", self.lexeme(), e),
            )),
        }
    }

    /// Scan an identifier or keyword; the first character has been consumed.
    pub(super) fn identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let kind = keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}
