use ryx::{
    ast::{BinaryOperator, Expr, Statement},
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::produce_ast,
    },
};

fn assert_parse_failure(src: &str) {
    if produce_ast(src).is_ok() {
        panic!("Source parsed but was expected to fail: {src}")
    }
}

#[test]
fn token_stream_ends_with_end_of_input() {
    let tokens = tokenize("val x = 5;").unwrap();

    assert_eq!(tokens.last().map(|(t, _)| t), Some(&Token::EndOfInput));
    assert_eq!(tokens.iter()
                     .filter(|(t, _)| *t == Token::EndOfInput)
                     .count(),
               1);

    let empty = tokenize("").unwrap();
    assert_eq!(empty, vec![(Token::EndOfInput, 1)]);
}

#[test]
fn line_numbers_follow_newlines() {
    let tokens = tokenize("val x\n= 1\n").unwrap();

    assert_eq!(tokens,
               vec![(Token::Val, 1),
                    (Token::Identifier("x".to_string()), 1),
                    (Token::Equals, 2),
                    (Token::Number("1".to_string()), 2),
                    (Token::EndOfInput, 3)]);
}

#[test]
fn keywords_need_an_exact_match() {
    assert_eq!(tokenize("val").unwrap()[0].0, Token::Val);
    assert_eq!(tokenize("value").unwrap()[0].0,
               Token::Identifier("value".to_string()));
    assert_eq!(tokenize("cvalx").unwrap()[0].0,
               Token::Identifier("cvalx".to_string()));
}

#[test]
fn numbers_keep_their_raw_lexeme() {
    let tokens = tokenize("0042").unwrap();

    assert_eq!(tokens[0].0, Token::Number("0042".to_string()));
}

#[test]
fn unrecognized_character_reports_its_code_point() {
    let error = tokenize("5 @ 3").unwrap_err();
    let message = error.to_string();

    assert!(message.contains('@'), "Message: {message}");
    assert!(message.contains("code point 64"), "Message: {message}");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let program = produce_ast("2 + 3 * 4").unwrap();

    let expected = Expr::Binary {
        left: Box::new(Expr::NumericLiteral { value: 2.0, line: 1 }),
        op: BinaryOperator::Add,
        right: Box::new(Expr::Binary {
            left: Box::new(Expr::NumericLiteral { value: 3.0, line: 1 }),
            op: BinaryOperator::Mul,
            right: Box::new(Expr::NumericLiteral { value: 4.0, line: 1 }),
            line: 1,
        }),
        line: 1,
    };

    assert_eq!(program.body,
               vec![Statement::Expression { expr: expected,
                                            line: 1 }]);
}

#[test]
fn assignment_is_right_associative() {
    let program = produce_ast("a = b = 1").unwrap();

    let Statement::Expression { expr: Expr::Assignment { target, value, .. },
                                .. } = &program.body[0]
    else {
        panic!("Expected an assignment statement")
    };

    assert_eq!(**target,
               Expr::Identifier { symbol: "a".to_string(),
                                  line:   1, });
    assert!(matches!(**value, Expr::Assignment { .. }));
}

#[test]
fn member_chains_nest_leftward() {
    let program = produce_ast("a.b.c").unwrap();

    let Statement::Expression { expr: Expr::Member { object,
                                                     property,
                                                     computed,
                                                     .. },
                                .. } = &program.body[0]
    else {
        panic!("Expected a member expression")
    };

    assert!(!computed);
    assert_eq!(**property,
               Expr::Identifier { symbol: "c".to_string(),
                                  line:   1, });
    assert!(matches!(**object, Expr::Member { computed: false, .. }));
}

#[test]
fn bracket_access_is_computed() {
    let program = produce_ast("a[1 + 2]").unwrap();

    let Statement::Expression { expr: Expr::Member { computed, property, .. },
                                .. } = &program.body[0]
    else {
        panic!("Expected a member expression")
    };

    assert!(computed);
    assert!(matches!(**property, Expr::Binary { .. }));
}

#[test]
fn calls_chain_through_their_results() {
    let program = produce_ast("f(1)(2, 3)").unwrap();

    let Statement::Expression { expr: Expr::Call { caller, args, .. },
                                .. } = &program.body[0]
    else {
        panic!("Expected a call expression")
    };

    assert_eq!(args.len(), 2);
    assert!(matches!(**caller, Expr::Call { .. }));
}

#[test]
fn stray_semicolons_are_skipped() {
    let program = produce_ast(";;val x = 1;;x;;").unwrap();

    assert_eq!(program.body.len(), 2);
}

#[test]
fn declarations_require_their_semicolon() {
    assert_parse_failure("val x = 1");
    assert_parse_failure("cval x = 1 x");
}

#[test]
fn constant_declarations_require_a_value() {
    let error = produce_ast("cval x;").unwrap_err();

    assert!(error.to_string().contains("constant 'x'"), "Error: {error}");
}

#[test]
fn reserved_keywords_are_rejected() {
    assert_parse_failure("fun f");
    assert_parse_failure("forLoop");
    assert_parse_failure("val a = lval;");
    assert_parse_failure("gval x = 1;");
}

#[test]
fn malformed_expressions_are_rejected() {
    assert_parse_failure("(1 + 2");
    assert_parse_failure("1 +");
    assert_parse_failure("a.1");
    assert_parse_failure("a[1");
    assert_parse_failure("f(1,");
}

#[test]
fn malformed_object_literals_are_rejected() {
    assert_parse_failure("{ 1: 2 }");
    assert_parse_failure("{ a: 1");
    assert_parse_failure("{ a 1 }");
    assert_parse_failure("{ a: }");
}
