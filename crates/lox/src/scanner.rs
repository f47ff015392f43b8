//! Lexical scanner
//!
//! Turns source text into a token sequence in a single left-to-right pass.
//! Malformed lexemes are reported to a [`Reporter`] and skipped, so a scan
//! always produces a complete sequence ending in exactly one `EOF` token.

mod comment;
mod keywords;
mod literal;

pub use keywords::keyword;

use crate::diagnostics::{Diagnostic, Reporter};
use crate::token::{Literal, Token, TokenKind};

/// Tokens and diagnostics collected from one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    /// Token sequence, always terminated by `EOF`
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanOutput {
    /// Check if any diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Scan `source`, collecting diagnostics alongside the tokens.
pub fn scan(source: &str) -> ScanOutput {
    let mut diagnostics = Vec::new();
    let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
    ScanOutput {
        tokens,
        diagnostics,
    }
}

/// Cursor state for scanning one source string.
///
/// `start` and `current` are byte offsets into `source`; `line` counts
/// newlines consumed so far and `start_line` is the line the current lexeme
/// began on.
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    start_line: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Consume the whole source and return its tokens.
    pub fn scan_tokens(mut self, reporter: &mut dyn Reporter) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token(reporter);
        }

        self.tokens.push(Token::eof(self.line));
        self.tokens
    }

    fn scan_token(&mut self, reporter: &mut dyn Reporter) {
        let c = self.advance();

        match c {
            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,

            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),

            '/' => {
                if self.match_char('/') {
                    self.line_comment();
                } else if self.match_char('*') {
                    self.block_comment(reporter);
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            '"' => self.string(reporter),
            c if is_digit(c) => self.number(reporter),
            c if is_alpha(c) => self.identifier(),

            c => reporter.report(Diagnostic::new(
                self.line,
                format!("Unexpected character: {}", c),
            )),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Cursor
    // ═══════════════════════════════════════════════════════════════════

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        match self.source[self.current..].chars().next() {
            Some(c) => {
                self.current += c.len_utf8();
                c
            }
            None => '\0',
        }
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    // ═══════════════════════════════════════════════════════════════════
    // Emission
    // ═══════════════════════════════════════════════════════════════════

    fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.lexeme(), self.start_line);
        self.tokens.push(token);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        let token = Token::with_literal(kind, self.lexeme(), literal, self.start_line);
        self.tokens.push(token);
    }

    /// Emit `wide` if the next character is `second`, otherwise `narrow`.
    fn add_either(&mut self, second: char, wide: TokenKind, narrow: TokenKind) {
        let kind = if self.match_char(second) { wide } else { narrow };
        self.add_token(kind);
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}
