use pretty_assertions::assert_eq;
use quill::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::lexer::TokenKind,
    parse,
};

fn assert_prints(src: &str, expected: &str) {
    let (program, errors) = parse(src);
    assert!(errors.is_empty(), "unexpected errors for {src:?}: {errors:?}");
    assert_eq!(program.to_string(), expected, "source: {src}");
}

fn error_messages(src: &str) -> Vec<String> {
    parse(src).1.iter().map(ToString::to_string).collect()
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4); ((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))")];

    for (src, expected) in cases {
        assert_prints(src, expected);
    }
}

#[test]
fn let_and_return_statements() {
    assert_prints("let x = 5; let y = true; let foobar = y;",
                  "let x = 5; let y = true; let foobar = y;");
    assert_prints("return 5; return; return x + 1", "return 5; return; return (x + 1);");
    assert_prints("let x = 5", "let x = 5;");
}

#[test]
fn let_statement_structure() {
    let (program, errors) = parse("let answer = 42;");
    assert!(errors.is_empty());

    match program.statements.as_slice() {
        [Statement::Let { token, name, value }] => {
            assert_eq!(token.literal, "let");
            assert_eq!(name.value, "answer");
            assert!(matches!(value, Expr::Integer { value: 42, .. }));
        },
        other => panic!("expected one let statement, got {other:?}"),
    }
}

#[test]
fn if_expressions() {
    assert_prints("if (x < y) { x }", "if (x < y) { x }");
    assert_prints("if (x < y) { x } else { y }", "if (x < y) { x } else { y }");
    assert_prints("if (x) { }", "if (x) { }");
    assert_prints("if (!x) { let a = 1; a }", "if (!x) { let a = 1; a }");
}

#[test]
fn function_literals_and_calls() {
    assert_prints("fn(x, y) { x + y; }", "fn(x, y) { (x + y) }");
    assert_prints("fn() {}", "fn() { }");
    assert_prints("fn(x) { x }(5)", "fn(x) { x }(5)");
    assert_prints("add()", "add()");

    let (program, _) = parse("fn(x, y, z) {}");
    let [Statement::Expression { expr: Expr::Function { parameters, .. }, .. }] =
        program.statements.as_slice()
    else {
        panic!("expected a function literal");
    };
    let names = parameters.iter().map(|p| p.value.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["x", "y", "z"]);
}

#[test]
fn comments_and_newlines_are_ignored() {
    assert_prints("let a = 1; // first\n// second\na", "let a = 1; a");
}

#[test]
fn let_statement_errors() {
    assert_eq!(error_messages("let x 5;\nlet = 10;\nlet 838383;"),
               ["line 1: expected next token to be =, got INT instead",
                "line 2: expected next token to be IDENT, got = instead",
                "line 3: expected next token to be IDENT, got INT instead"]);
}

#[test]
fn missing_prefix_handler_is_reported() {
    assert_eq!(error_messages("+5"), ["line 1: no prefix parse function for + found"]);
    assert_eq!(error_messages("1 @ 2"),
               ["line 1: no prefix parse function for ILLEGAL found"]);
}

#[test]
fn integer_literals_out_of_range() {
    let (_, errors) = parse("99999999999999999999");

    assert_eq!(errors,
               [ParseError::InvalidInteger { literal: "99999999999999999999".to_string(),
                                             line:    1, }]);
}

#[test]
fn unterminated_block_is_reported() {
    assert_eq!(error_messages("if (x) { x"),
               ["line 1: expected next token to be }, got EOF instead"]);
}

#[test]
fn missing_closing_paren_is_reported() {
    let (_, errors) = parse("add(1, 2");

    assert_eq!(errors,
               [ParseError::UnexpectedToken { expected: TokenKind::RParen,
                                              found:    TokenKind::Eof,
                                              line:     1, }]);
}

#[test]
fn parsing_recovers_after_a_bad_statement() {
    let (program, errors) = parse("let = 1; let y = 2; y");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "let y = 2; y");
}

#[test]
fn recovery_stops_at_the_end_of_a_block() {
    let (program, errors) = parse("fn() { let x }; 7");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "fn() { }; 7");
}

#[test]
fn tokens_remember_their_line() {
    let (program, _) = parse("1;\n\nlet b = 2;");

    assert_eq!(program.statements[1].token_literal(), "let");
    let Statement::Let { token, .. } = &program.statements[1] else {
        panic!("expected a let statement");
    };
    assert_eq!(token.line, 3);
}
