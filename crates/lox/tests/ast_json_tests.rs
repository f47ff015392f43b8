//! Expression trees exchanged as JSON

use lox::*;

#[test]
fn test_deserialize_and_evaluate() {
    let json = r#"{
        "type": "binary",
        "left": {"type": "literal", "value": 1},
        "operator": {"kind": "PLUS", "lexeme": "+", "line": 1},
        "right": {
            "type": "grouping",
            "expression": {
                "type": "binary",
                "left": {"type": "literal", "value": 2},
                "operator": {"kind": "STAR", "lexeme": "*", "line": 1},
                "right": {"type": "literal", "value": 3}
            }
        }
    }"#;

    let expr: Expr = serde_json::from_str(json).unwrap();
    assert_eq!(expr.to_string(), "(+ 1 (group (* 2 3)))");
    assert_eq!(Interpreter::new().interpret(&expr).unwrap(), Value::Number(7.0));
}

#[test]
fn test_literal_values_map_to_json_scalars() {
    let cases = [
        (r#"{"type":"literal","value":null}"#, Value::Nil),
        (r#"{"type":"literal","value":true}"#, Value::Bool(true)),
        (r#"{"type":"literal","value":2.5}"#, Value::Number(2.5)),
        (r#"{"type":"literal","value":"hi"}"#, Value::string("hi")),
    ];
    for (json, expected) in cases {
        let expr: Expr = serde_json::from_str(json).unwrap();
        assert_eq!(expr, Expr::literal(expected));
    }
}

#[test]
fn test_serialize_unary() {
    let expr = Expr::unary(Token::new(TokenKind::Bang, "!", 2), Expr::nil());
    let json = serde_json::to_value(&expr).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "unary",
            "operator": {"kind": "BANG", "lexeme": "!", "line": 2},
            "right": {"type": "literal", "value": null}
        })
    );
}

#[test]
fn test_scanned_tokens_serialize_with_literals() {
    let tokens = scan("\"a\" 4").tokens;
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"kind": "STRING", "lexeme": "\"a\"", "literal": "a", "line": 1},
            {"kind": "NUMBER", "lexeme": "4", "literal": 4.0, "line": 1},
            {"kind": "EOF", "lexeme": "", "line": 1}
        ])
    );
}

#[test]
fn test_unknown_node_type_is_rejected() {
    let result: std::result::Result<Expr, _> = serde_json::from_str(r#"{"type":"call"}"#);
    assert!(result.is_err());
}

#[test]
fn test_non_finite_numbers_do_not_serialize() {
    for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = serde_json::to_string(&Expr::literal(n)).unwrap_err();
        assert!(err.to_string().contains("non-finite number"), "{}", err);
    }
}

#[test]
fn test_overlong_number_literal_does_not_serialize_as_null() {
    let source = "1".repeat(400);
    let tokens = scan(&source).tokens;
    assert_eq!(tokens[0].literal, Some(Literal::Number(f64::INFINITY)));
    assert!(serde_json::to_string(&tokens).is_err());
}

#[test]
fn test_finite_number_round_trips() {
    let expr = Expr::literal(-0.125);
    let json = serde_json::to_string(&expr).unwrap();
    assert_eq!(json, r#"{"type":"literal","value":-0.125}"#);
    let back: Expr = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expr);
}
