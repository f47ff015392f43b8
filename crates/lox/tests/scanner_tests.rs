use lox::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).tokens.iter().map(|t| t.kind).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Sequence Shape
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_exactly_one_eof_at_end() {
    for source in [
        "",
        "   ",
        "1 + 2",
        "\"open",
        "/* open",
        "@#$",
        "var x = 1;\nprint x;",
    ] {
        let tokens = scan(source).tokens;
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eofs, 1, "source: {:?}", source);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(tokens.last().map(|t| t.lexeme.as_str()), Some(""));
    }
}

#[test]
fn test_lexemes_cover_source_without_whitespace() {
    let source = "(a>=1.5)!=!b;\"s\"/c*-2";
    let out = scan(source);
    assert!(!out.has_errors());
    let joined: String = out.tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(joined, source);
}

#[test]
fn test_eof_line_is_final_line() {
    let out = scan("1\n2\n\n");
    assert_eq!(out.tokens.last().unwrap().line, 4);
}

// ═══════════════════════════════════════════════════════════════════════
// Comments
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_line_comment_then_number() {
    let out = scan("// comment\n1");
    assert_eq!(
        out.tokens,
        vec![
            Token::with_literal(TokenKind::Number, "1", Literal::Number(1.0), 2),
            Token::eof(2),
        ]
    );
}

#[test]
fn test_nested_block_comment() {
    let out = scan("/* a /* b */ c */ 2");
    assert_eq!(
        out.tokens,
        vec![
            Token::with_literal(TokenKind::Number, "2", Literal::Number(2.0), 1),
            Token::eof(1),
        ]
    );
    assert!(!out.has_errors());
}

#[test]
fn test_unterminated_block_comment_reports_and_emits_nothing() {
    let out = scan("1 /* never closed\n");
    assert_eq!(kinds("1 /* never closed\n"), vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(
        out.diagnostics,
        vec![Diagnostic::new(2, "Unterminated block comment.")]
    );
}

#[test]
fn test_slash_is_division_when_not_a_comment() {
    assert_eq!(
        kinds("6 / 3"),
        vec![
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::Eof
        ]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Strings
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unterminated_string() {
    let out = scan("\"unterminated");
    assert_eq!(out.tokens, vec![Token::eof(1)]);
    assert_eq!(
        out.diagnostics,
        vec![Diagnostic::new(1, "Unterminated string.")]
    );
}

#[test]
fn test_empty_string() {
    let out = scan("\"\"");
    assert_eq!(out.tokens[0].literal, Some(Literal::String(String::new())));
}

#[test]
fn test_comment_markers_inside_string_are_text() {
    let out = scan("\"// not /* a comment\"");
    assert_eq!(
        out.tokens[0].literal,
        Some(Literal::String("// not /* a comment".into()))
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Keywords and Identifiers
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_all_keywords() {
    assert_eq!(
        kinds("and class else false for fun if nil or print return super this true var while"),
        vec![
            TokenKind::And,
            TokenKind::Class,
            TokenKind::Else,
            TokenKind::False,
            TokenKind::For,
            TokenKind::Fun,
            TokenKind::If,
            TokenKind::Nil,
            TokenKind::Or,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::Super,
            TokenKind::This,
            TokenKind::True,
            TokenKind::Var,
            TokenKind::While,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(
        kinds("classy variable nil_"),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Error Recovery
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_scanning_continues_after_errors() {
    let out = scan("a # b\n$ c");
    assert_eq!(
        out.diagnostics,
        vec![
            Diagnostic::new(1, "Unexpected character: #"),
            Diagnostic::new(2, "Unexpected character: $"),
        ]
    );
    let names: Vec<_> = out
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Identifier)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_custom_reporter() {
    struct Counter(usize);
    impl Reporter for Counter {
        fn report(&mut self, _diagnostic: Diagnostic) {
            self.0 += 1;
        }
    }

    let mut counter = Counter(0);
    let tokens = Scanner::new("@ @ @").scan_tokens(&mut counter);
    assert_eq!(counter.0, 3);
    assert_eq!(tokens.len(), 1);
}

#[test]
fn test_silent_reporter() {
    let tokens = Scanner::new("\"x").scan_tokens(&mut Silent);
    assert_eq!(tokens, vec![Token::eof(1)]);
}

#[test]
fn test_token_lines() {
    let out = scan("a\nb\n\nc");
    let lines: Vec<_> = out.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}
