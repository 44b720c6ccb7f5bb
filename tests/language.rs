use std::fs;

use dartish::{
    ast::{BinaryOperator, Expr},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        Interpreter,
        environment::Environment,
        lexer::{Location, Token, tokenize},
    },
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Runs `src` with captured output, returning what was printed and the result.
fn run_captured(src: &str) -> (String, Result<(), Error>) {
    let mut interpreter = Interpreter::buffered();
    let result = interpreter.run(src);
    (interpreter.output().to_string(), result)
}

fn assert_output(src: &str, expected: &str) {
    let (output, result) = run_captured(src);
    if let Err(e) = result {
        panic!("Script failed: {e}\n{src}");
    }
    assert_eq!(output, expected);
}

fn assert_failure(src: &str) -> Error {
    match run_captured(src).1 {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

fn parse_failure(src: &str) -> ParseError {
    match assert_failure(src) {
        Error::Parse(e) => e,
        Error::Runtime(e) => panic!("Expected a parse error, got runtime error: {e}"),
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match assert_failure(src) {
        Error::Runtime(e) => e,
        Error::Parse(e) => panic!("Expected a runtime error, got parse error: {e}"),
    }
}

#[test]
fn sample_programs_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "dl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        let (mut output, result) = run_captured(&source);
        if let Err(e) = result {
            output.push_str(&format!("Error: {e}\n"));
        }

        count += 1;
        assert_eq!(output, expected, "output of {path:?} differs");
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

#[test]
fn tokenizer_drops_whitespace() {
    let tokens: Vec<Token> = tokenize("  var   x\t=\n1 ;  ").unwrap()
                                                          .into_iter()
                                                          .map(|(token, _)| token)
                                                          .collect();

    assert_eq!(tokens,
               vec![Token::Var,
                    Token::Identifier("x".to_string()),
                    Token::Equals,
                    Token::Number("1".to_string()),
                    Token::Semicolon]);
}

#[test]
fn tokenizer_drops_unicode_whitespace() {
    let tokens = tokenize("var\u{a0}x\u{b}=\u{2003}1;\r\nprint(x);").unwrap();
    let kinds: Vec<Token> = tokens.iter().map(|(token, _)| token.clone()).collect();

    assert_eq!(kinds[..5],
               [Token::Var,
                Token::Identifier("x".to_string()),
                Token::Equals,
                Token::Number("1".to_string()),
                Token::Semicolon]);
    assert_eq!(tokens[5].1, Location { position: 5, line: 2 });
}

#[test]
fn tokenizer_records_positions_and_lines() {
    let tokens = tokenize("var x = 1;\nprint(x);").unwrap();

    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[4].1, Location { position: 4, line: 1 });
    assert_eq!(tokens[5], (Token::Print, Location { position: 5, line: 2 }));
    assert_eq!(tokens[9].1, Location { position: 9, line: 2 });
}

#[test]
fn keywords_are_whole_words() {
    let tokens: Vec<Token> = tokenize("variable printer var_ print").unwrap()
                                                                  .into_iter()
                                                                  .map(|(token, _)| token)
                                                                  .collect();

    assert_eq!(tokens,
               vec![Token::Identifier("variable".to_string()),
                    Token::Identifier("printer".to_string()),
                    Token::Identifier("var_".to_string()),
                    Token::Print]);
}

#[test]
fn tokenizer_covers_every_token_kind() {
    let tokens: Vec<String> = tokenize("var print x = , ; 7 ( ) + - * /").unwrap()
                                                                      .into_iter()
                                                                      .map(|(token, _)| {
                                                                          token.to_string()
                                                                      })
                                                                      .collect();

    assert_eq!(tokens,
               vec!["var", "print", "x", "=", ",", ";", "7", "(", ")", "+", "-", "*", "/"]);
}

#[test]
fn unrecognized_character_is_error() {
    assert_eq!(tokenize("var x = 1;\nvar y = 2 $ 3;"),
               Err(ParseError::UnrecognizedCharacter { text: "$".to_string(),
                                                       line: 2, }));
}

#[test]
fn declaration_and_print() {
    assert_output("var x = 5; print(x);", "x: 5\n");
    assert_output("var a = 2; var b = 1; var c = a + b; print(c);", "c: 3\n");
}

#[test]
fn operators_fold_left_without_precedence() {
    assert_output("print(2 + 3 * 4);", "2 + 3 * 4: 20\n");
    assert_output("print(2 * 3 + 4);", "2 * 3 + 4: 10\n");
    assert_output("print(20 - 5 - 5);", "20 - 5 - 5: 10\n");
    assert_output("print(100 / 10 / 5);", "100 / 10 / 5: 2\n");
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("print(7 / 2);", "7 / 2: 3\n");
    assert_output("print(0 - 7 / 2);", "0 - 7 / 2: -3\n");
    assert_output("print(6 / 3);", "6 / 3: 2\n");
}

#[test]
fn print_renders_the_expression() {
    assert_output("var flour = 2; var sugar = 1; print(flour + sugar);",
                  "flour + sugar: 3\n");
    assert_output("print(42);", "42: 42\n");
}

#[test]
fn right_nested_operands_are_parenthesized() {
    let nested = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 3, line: 1 }),
                                  op:    BinaryOperator::Sub,
                                  right: Box::new(Expr::Literal { value: 2, line: 1 }),
                                  line:  1, };
    let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 1, line: 1 }),
                                op:    BinaryOperator::Sub,
                                right: Box::new(nested),
                                line:  1, };

    assert_eq!(expr.to_string(), "1 - (3 - 2)");
}

#[test]
fn long_chains_do_not_exhaust_the_stack() {
    let chain = vec!["1"; 100_000].join(" + ");
    let (output, result) = run_captured(&format!("print({chain});"));

    assert!(result.is_ok());
    assert!(output.starts_with("1 + 1 + 1 + "));
    assert!(output.ends_with(" + 1: 100000\n"));
    assert_eq!(output.len(), chain.len() + ": 100000\n".len());
}

#[test]
fn long_chain_errors_are_reported() {
    let chain = vec!["x"; 150_000].join(" * ");

    assert_eq!(runtime_failure(&format!("var x = 1;\nvar y = {chain} / 0;")),
               RuntimeError::DivisionByZero { line: 2 });
}

#[test]
fn redeclaration_overwrites() {
    assert_output("var x = 1; var x = 2; print(x);", "x: 2\n");
}

#[test]
fn statements_may_span_lines() {
    assert_output("var x\n  =\n  4 *\n  2\n;\nprint(\n  x\n);", "x: 8\n");
}

#[test]
fn empty_program_prints_nothing() {
    assert_output("", "");
    assert_output("  \n\t\n", "");
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(runtime_failure("print(10 / 0);"),
               RuntimeError::DivisionByZero { line: 1 });
    assert_eq!(runtime_failure("var zero = 0;\nvar x = 5 / zero;"),
               RuntimeError::DivisionByZero { line: 2 });
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let (output, result) = run_captured("print(1); print(2 / 0); print(3);");

    assert_eq!(output, "1: 1\n");
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn parse_errors_stop_before_execution() {
    let (output, result) = run_captured("print(1); var = 2;");

    assert_eq!(output, "");
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn unknown_variable_is_error() {
    assert_eq!(runtime_failure("print(undefinedVar);"),
               RuntimeError::UnknownVariable { name: "undefinedVar".to_string(),
                                               line: 1, });
    assert_eq!(runtime_failure("var y = x + 1;"),
               RuntimeError::UnknownVariable { name: "x".to_string(),
                                               line: 1, });
}

#[test]
fn overflow_is_error() {
    assert_eq!(runtime_failure("var big = 9223372036854775807; print(big + 1);"),
               RuntimeError::Overflow { line: 1 });
    assert_eq!(runtime_failure("var min = 0 - 9223372036854775807 - 1;\nvar m = 0 - 1;\nprint(min / m);"),
               RuntimeError::Overflow { line: 3 });
}

#[test]
fn literal_too_large_is_error() {
    assert_eq!(parse_failure("print(9223372036854775808);"),
               ParseError::LiteralTooLarge { text: "9223372036854775808".to_string(),
                                             at:   Location { position: 2, line: 1 }, });
}

#[test]
fn missing_identifier_after_var() {
    assert_eq!(parse_failure("var = 5;"),
               ParseError::Expected { expected: "identifier after 'var'".to_string(),
                                      found:    "=".to_string(),
                                      at:       Location { position: 1, line: 1 }, });
}

#[test]
fn missing_equals_after_identifier() {
    assert_eq!(parse_failure("var x 5;"),
               ParseError::Expected { expected: "'=' after 'x'".to_string(),
                                      found:    "5".to_string(),
                                      at:       Location { position: 2, line: 1 }, });
}

#[test]
fn missing_paren_after_print() {
    assert_eq!(parse_failure("print x;"),
               ParseError::Expected { expected: "'(' after 'print'".to_string(),
                                      found:    "x".to_string(),
                                      at:       Location { position: 1, line: 1 }, });
}

#[test]
fn unexpected_statement_start() {
    assert_eq!(parse_failure("var x = 1;\nx = 5;"),
               ParseError::UnexpectedToken { token: "x".to_string(),
                                             at:    Location { position: 5, line: 2 }, });
    assert!(matches!(parse_failure("; print(1);"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn malformed_expression_start() {
    assert_eq!(parse_failure("var x = ;"),
               ParseError::Expected { expected: "number or identifier".to_string(),
                                      found:    ";".to_string(),
                                      at:       Location { position: 3, line: 1 }, });
    assert!(matches!(parse_failure("print(-1);"), ParseError::Expected { .. }));
}

#[test]
fn missing_operand_after_operator() {
    assert_eq!(parse_failure("print(1 + );"),
               ParseError::Expected { expected: "number or identifier after operator '+'".to_string(),
                                      found:    ")".to_string(),
                                      at:       Location { position: 4, line: 1 }, });
}

#[test]
fn statement_terminators_are_required() {
    assert_eq!(parse_failure("var x = 1 2;"),
               ParseError::Expected { expected: "';' after variable declaration".to_string(),
                                      found:    "2".to_string(),
                                      at:       Location { position: 4, line: 1 }, });
    assert_eq!(parse_failure("print(1;"),
               ParseError::Expected { expected: "')' after print argument".to_string(),
                                      found:    ";".to_string(),
                                      at:       Location { position: 3, line: 1 }, });
    assert_eq!(parse_failure("print(1, 2);"),
               ParseError::Expected { expected: "')' after print argument".to_string(),
                                      found:    ",".to_string(),
                                      at:       Location { position: 3, line: 1 }, });
    assert_eq!(parse_failure("print(1) var x = 1;"),
               ParseError::Expected { expected: "';' after print statement".to_string(),
                                      found:    "var".to_string(),
                                      at:       Location { position: 4, line: 1 }, });
}

#[test]
fn end_of_input_inside_statement_is_error() {
    assert_eq!(parse_failure("var x = 1"),
               ParseError::UnexpectedEndOfInput { expected: "';' after variable declaration".to_string(),
                                                  line:     1, });
    assert_eq!(parse_failure("\nvar"),
               ParseError::UnexpectedEndOfInput { expected: "identifier after 'var'".to_string(),
                                                  line:     2, });
    assert_eq!(parse_failure("print(2 *"),
               ParseError::UnexpectedEndOfInput { expected: "number or identifier after operator '*'".to_string(),
                                                  line:     1, });
}

#[test]
fn reruns_are_independent() {
    let source = "var x = 3; var y = x * x; print(y);";
    let mut interpreter = Interpreter::buffered();

    interpreter.run(source).unwrap();
    let first = interpreter.output().to_string();
    interpreter.clear_output();
    interpreter.run(source).unwrap();

    assert_eq!(first, "y: 9\n");
    assert_eq!(interpreter.output(), first);

    interpreter.run("var kept = 1;").unwrap();
    assert!(matches!(interpreter.run("print(kept);"),
                     Err(Error::Runtime(RuntimeError::UnknownVariable { .. }))));
}

#[test]
fn environment_reports_absent_names() {
    let mut env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.get("x"), None);

    env.set("x", 7);
    assert_eq!(env.get("x"), Some(7));
    assert_eq!(env.get("y"), None);
}

#[test]
fn error_messages() {
    let cases = [("print(10 / 0);", "Division by zero on line 1."),
                 ("print(nope);", "Unknown variable 'nope' on line 1."),
                 ("var 1 = 2;",
                  "Expected identifier after 'var', found '1' at position 1 (line 1)."),
                 ("print(1);\n)", "Unexpected token ')' at position 5 (line 2)."),
                 ("var x = #;", "Unrecognized character '#' on line 1."),
                 ("print(1)", "Expected ';' after print statement on line 1, but reached the end of input.")];

    for (src, message) in cases {
        assert_eq!(assert_failure(src).to_string(), message, "for {src:?}");
    }
}
