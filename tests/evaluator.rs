use std::rc::Rc;

use reckon::{
    ast::{BinaryOperator, UnaryOperator},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::context::EvaluationContext,
        lexer::{Position, tokenize},
        parser::core::parse,
        value::core::{Number, Value},
    },
    run,
};

fn at(offset: usize) -> Position {
    Position { offset,
               line: 1,
               column: offset + 1 }
}

fn eval_in(context: &Rc<EvaluationContext>, source: &str) -> Result<Number, RuntimeError> {
    let expr = parse(&tokenize(source)).unwrap_or_else(|e| panic!("{source:?}: {e}"));
    context.eval(&expr)
}

#[test]
fn results_carry_the_evaluating_context() {
    let root = EvaluationContext::root("<program>");
    let inner = root.child("inner", at(0));

    let number = eval_in(&inner, "1 + 2").unwrap();
    assert!(Rc::ptr_eq(&number.context, &inner));
    assert_eq!(number.value, Value::Integer(3));
}

#[test]
fn results_carry_the_start_of_their_expression() {
    let root = EvaluationContext::root("<program>");

    assert_eq!(eval_in(&root, "  4 * 5").unwrap().position.offset, 2);
    assert_eq!(eval_in(&root, "-3").unwrap().position.offset, 0);
    assert_eq!(eval_in(&root, "(1 + 2)").unwrap().position.offset, 1);
}

#[test]
fn evaluation_does_not_change_the_tree() {
    let expr = parse(&tokenize("-(1 + 2) * 3 / 4")).unwrap();
    let before = expr.clone();

    let root = EvaluationContext::root("<program>");
    let first = root.eval(&expr).unwrap();
    let second = root.eval(&expr).unwrap();

    assert_eq!(expr, before);
    assert_eq!(first.value, second.value);
    assert_eq!(first.value, Value::Real(-2.25));
}

#[test]
fn division_by_zero_carries_position_and_context() {
    let root = EvaluationContext::root("<program>");
    let inner = root.child("inner", at(3));

    let RuntimeError::DivisionByZero { position, context } = eval_in(&inner, "10 / 0").unwrap_err();

    assert_eq!(position, at(5));
    assert!(Rc::ptr_eq(&context, &inner));
}

#[test]
fn trace_lists_innermost_frame_first() {
    let root = EvaluationContext::root("<program>");
    let middle = root.child("middle", at(2));
    let inner = middle.child("inner", at(7));

    let names: Vec<&str> = inner.frames().map(EvaluationContext::name).collect();
    assert_eq!(names, ["inner", "middle", "<program>"]);
    assert_eq!(inner.trace(), "inner (entered at 1:8) <- middle (entered at 1:3) <- <program>");

    let e = eval_in(&inner, "1 / 0").unwrap_err();
    assert_eq!(e.to_string(),
               "at position 1:5 Division by zero, context trace: inner (entered at 1:8) <- \
                middle (entered at 1:3) <- <program>");
}

#[test]
fn child_frames_keep_their_parent_alive() {
    let inner = {
        let root = EvaluationContext::root("<program>");
        root.child("inner", at(0))
    };

    assert_eq!(inner.parent().map(|parent| parent.name()), Some("<program>"));
    assert_eq!(inner.entry_position(), Some(at(0)));
}

#[test]
fn source_name_names_the_root_frame() {
    match run("input.txt", "1 + 2 / 0") {
        Err(Error::Runtime(e)) => {
            assert_eq!(e.context().name(), "input.txt");
            assert_eq!(e.position(), at(8));
        },
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn negation_reuses_multiplication() {
    let root = EvaluationContext::root("<program>");
    let big = Number::new(Value::Integer(i64::MIN), at(0), Rc::clone(&root));

    let negated = root.eval_unary(UnaryOperator::Negate, &big).unwrap();
    assert_eq!(negated.value, Value::Real(9_223_372_036_854_775_808.0));

    let product = root.eval_binary(BinaryOperator::Mul, &big, &Number::new(Value::Integer(-1),
                                                                          at(0),
                                                                          Rc::clone(&root)))
                      .unwrap();
    assert_eq!(product.value, negated.value);
}

#[test]
fn real_operand_promotes_the_operation() {
    let root = EvaluationContext::root("<program>");
    let two = Number::new(Value::Integer(2), at(0), Rc::clone(&root));
    let half = Number::new(Value::Real(0.5), at(4), Rc::clone(&root));

    let sum = root.eval_scalar_op(BinaryOperator::Add, &two, &half).unwrap();
    assert_eq!(sum.value, Value::Real(2.5));
    assert_eq!(sum.position, at(0));

    let difference = root.eval_scalar_op(BinaryOperator::Sub, &two, &two).unwrap();
    assert_eq!(difference.value, Value::Integer(0));
}

#[test]
fn zero_divisor_in_any_form_fails() {
    let root = EvaluationContext::root("<program>");
    let one = Number::new(Value::Integer(1), at(0), Rc::clone(&root));

    for zero in [Value::Integer(0), Value::Real(0.0), Value::Real(-0.0)] {
        let divisor = Number::new(zero, at(4), Rc::clone(&root));
        let result = root.eval_binary(BinaryOperator::Div, &one, &divisor);
        assert!(matches!(result, Err(RuntimeError::DivisionByZero { position, .. }) if position == at(4)),
                "{zero} did not fail");
    }
}
