use std::fs;

use reckon::{error::Error, get_result, interpreter::value::core::Value};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_reckon_blocks(&content).into_iter().enumerate() {
            count += 1;
            let value = get_result(&code).unwrap_or_else(|e| {
                                             panic!("Example {} in {:?} failed:\n{}\nError: {}",
                                                    i + 1,
                                                    path,
                                                    code,
                                                    e)
                                         });
            if let Some(expected) = expected_output(&code) {
                assert_eq!(value.to_string(), expected, "Example {} in {:?}", i + 1, path);
            }
        }
    }

    assert!(count > 0, "No reckon examples found in book/src");
}

fn extract_reckon_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// The text after a `# =>` comment, if the block has one.
fn expected_output(code: &str) -> Option<String> {
    code.lines()
        .find_map(|line| line.split_once("# =>"))
        .map(|(_, expected)| expected.trim().to_string())
}

fn assert_value(src: &str, expected: Value) {
    match get_result(src) {
        Ok(number) => assert_eq!(number.value, expected, "for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_syntax_error(src: &str, message: &str) {
    match get_result(src) {
        Err(Error::Syntax(e)) => {
            let rendered = e.to_string();
            assert!(rendered.contains(message),
                    "for {src:?}: expected {message:?} in {rendered:?}");
        },
        Err(e) => panic!("Expected a syntax error for {src:?}, got {e}"),
        Ok(v) => panic!("Expression {src:?} succeeded with {v} but was expected to fail"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("2+3*4", Value::Integer(14));
    assert_value("(2+3)*4", Value::Integer(20));
    assert_value("2*3+4*5", Value::Integer(26));
    assert_value("((7))", Value::Integer(7));
    assert_value("2 * (3 + (4 - 1)) / 4", Value::Real(3.0));
}

#[test]
fn left_associativity() {
    assert_value("10 - 4 - 3", Value::Integer(3));
    assert_value("100 / 10 / 5", Value::Real(2.0));
    assert_value("2 - 3 + 4", Value::Integer(3));
}

#[test]
fn unary_chains() {
    assert_value("--5", Value::Integer(5));
    assert_value("-+5", Value::Integer(-5));
    assert_value("+5", Value::Integer(5));
    assert_value("---5", Value::Integer(-5));
    assert_value("-2 * -3", Value::Integer(6));
    assert_value("-(2 + 3)", Value::Integer(-5));
    assert_value("-2.5", Value::Real(-2.5));
}

#[test]
fn integer_and_real_arithmetic() {
    assert_value("7 / 2", Value::Real(3.5));
    assert_value("6 / 3", Value::Real(2.0));
    assert_value("1.5 + 1", Value::Real(2.5));
    assert_value("0.1 * 10", Value::Real(1.0));
    assert_value("9223372036854775807 + 1", Value::Real(9_223_372_036_854_775_808.0));
}

#[test]
fn printed_results() {
    assert_eq!(get_result("2 + 3").unwrap().to_string(), "5");
    assert_eq!(get_result("5 / 2").unwrap().to_string(), "2.5");
    assert_eq!(get_result("4 / 2").unwrap().to_string(), "2");
    assert_eq!(get_result("-1.25").unwrap().to_string(), "-1.25");
}

#[test]
fn whitespace_and_comments_are_skipped() {
    assert_value("1 # comment\n+ 2", Value::Integer(3));
    assert_value("\t1\r\n*\n\n3   ", Value::Integer(3));
    assert_value("# leading comment\n4", Value::Integer(4));
    assert_value("4 # trailing comment without newline", Value::Integer(4));
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    match get_result("5/0") {
        Err(Error::Runtime(e)) => {
            assert_eq!(e.position().offset, 2);
            assert_eq!(e.to_string(),
                       "at position 1:3 Division by zero, context trace: <program>");
        },
        other => panic!("Expected a runtime error, got {other:?}"),
    }

    assert!(matches!(get_result("1 / 0.0"), Err(Error::Runtime(_))));
    assert!(matches!(get_result("1 / (2 - 2)"), Err(Error::Runtime(_))));
    assert!(matches!(get_result("1 / -0.0"), Err(Error::Runtime(_))));
}

#[test]
fn division_by_zero_points_at_the_divisor_expression() {
    match get_result("8 / (3 - 3)") {
        Err(Error::Runtime(e)) => assert_eq!(e.position().offset, 5),
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn left_error_wins_over_right_error() {
    match get_result("1/0 + 2/0") {
        Err(Error::Runtime(e)) => assert_eq!(e.position().offset, 2),
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn unmatched_parentheses() {
    assert_syntax_error("(1+2", "Expected ')'");
    assert_syntax_error("(1+2", "got EOF");
    assert_syntax_error("1+2)", "Expected end of input, got RPAREN");
    assert_syntax_error("((1)", "Expected ')'");
    assert_syntax_error("()", "Expected number, '+', '-' or '(', got RPAREN");
}

#[test]
fn trailing_garbage() {
    assert_syntax_error("1+2 3", "Expected end of input");
    assert_syntax_error("1+2 3", "at position 1:5");
}

#[test]
fn missing_operands() {
    assert_syntax_error("", "Expected number, '+', '-' or '(', got EOF");
    assert_syntax_error("   # only a comment", "got EOF");
    assert_syntax_error("1 +", "at position 1:4 Expected number");
    assert_syntax_error("* 2", "at position 1:1 Expected number, '+', '-' or '(', got MULTIPLY");
    assert_syntax_error("-", "got EOF");
}

#[test]
fn invalid_characters_become_syntax_errors() {
    assert_syntax_error("2 $ 3", "at position 1:3 Expected end of input, got INVALID");
    assert_syntax_error("x", "Expected number, '+', '-' or '(', got INVALID");
    assert_syntax_error("1 +\n  ?", "at position 2:3");
}

#[test]
fn trailing_dot_is_not_part_of_a_number() {
    assert_syntax_error("3.", "at position 1:2 Expected end of input, got INVALID");
    assert_syntax_error(".5", "got INVALID");
    assert_syntax_error("1 + 3.", "got INVALID");
}

#[test]
fn oversized_integer_literals_become_reals() {
    assert_value("99999999999999999999", Value::Real(1e20));
    assert_value("99999999999999999999 - 1", Value::Real(1e20));
    assert_value("-9223372036854775808", Value::Real(-9_223_372_036_854_775_808.0));
    assert_value("9223372036854775808 / 2", Value::Real(4_611_686_018_427_387_904.0));
    assert_eq!(get_result("-9223372036854775808").unwrap().to_string(), "-9223372036854775808");
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let parens = 100_000;
    let src = format!("{}1{}", "(".repeat(parens), ")".repeat(parens));
    assert_syntax_error(&src, "at position 1:129 Expression is nested too deeply");

    let src = format!("{}1", "-".repeat(parens));
    assert_syntax_error(&src, "at position 1:129 Expression is nested too deeply");

    let src = vec!["1"; parens].join(" + ");
    assert_syntax_error(&src, "Expression is nested too deeply");

    assert_value("1 + 1", Value::Integer(2));
}

#[test]
fn nesting_up_to_the_limit_evaluates() {
    let src = format!("{}1{}", "(".repeat(128), ")".repeat(128));
    assert_value(&src, Value::Integer(1));

    let src = format!("{}1", "-".repeat(128));
    assert_value(&src, Value::Integer(1));

    let src = vec!["1"; 1000].join(" + ");
    assert_value(&src, Value::Integer(1000));
}

#[test]
fn requests_are_independent() {
    assert!(get_result("1/0").is_err());
    assert_value("1/1", Value::Real(1.0));
    assert!(get_result("(").is_err());
    assert_value("2", Value::Integer(2));
}

#[test]
fn error_kinds_are_named_in_the_diagnostic() {
    let syntax = get_result("(").unwrap_err().to_string();
    assert!(syntax.starts_with("Syntax error at position 1:2"), "{syntax}");

    let runtime = get_result("1 / 0").unwrap_err().to_string();
    assert!(runtime.starts_with("Runtime error at position 1:5"), "{runtime}");
}
