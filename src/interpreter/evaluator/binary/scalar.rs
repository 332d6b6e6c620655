use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{context::EvaluationContext, core::EvalResult},
        value::core::{Number, Value},
    },
};

impl EvaluationContext {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers stay integers for `+`, `-` and `*`; if the integer result
    /// overflows the operation is redone on reals instead. A real operand
    /// promotes the other one. Division always produces a real and fails when
    /// the divisor is zero.
    ///
    /// The result is attributed to the left operand's position and to this
    /// context.
    ///
    /// # Errors
    /// `RuntimeError::DivisionByZero` carrying the divisor's position and this
    /// context.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         evaluator::context::EvaluationContext,
    ///         lexer::Position,
    ///         value::core::{Number, Value},
    ///     },
    /// };
    ///
    /// let context = EvaluationContext::root("<program>");
    /// let x = Number::new(Value::Integer(5), Position::START, context.clone());
    /// let y = Number::new(Value::Integer(2), Position::START, context.clone());
    ///
    /// let result = context.eval_scalar_op(BinaryOperator::Div, &x, &y).unwrap();
    /// assert_eq!(result.value, Value::Real(2.5));
    /// ```
    pub fn eval_scalar_op(self: &Rc<Self>,
                          op: BinaryOperator,
                          left: &Number,
                          right: &Number)
                          -> EvalResult<Number> {
        let value = match op {
            BinaryOperator::Add => addition(left.value, right.value),
            BinaryOperator::Sub => subtraction(left.value, right.value),
            BinaryOperator::Mul => multiply(left.value, right.value),
            BinaryOperator::Div => {
                if right.value.is_zero() {
                    return Err(RuntimeError::DivisionByZero { position: right.position,
                                                              context:  Rc::clone(self), });
                }
                division(left.value, right.value)
            },
        };

        Ok(Number::new(value, left.position, Rc::clone(self)))
    }
}

fn addition(left: Value, right: Value) -> Value {
    integer_or_real(left, right, i64::checked_add, |a, b| a + b)
}

fn subtraction(left: Value, right: Value) -> Value {
    integer_or_real(left, right, i64::checked_sub, |a, b| a - b)
}

fn multiply(left: Value, right: Value) -> Value {
    integer_or_real(left, right, i64::checked_mul, |a, b| a * b)
}

/// The caller has already rejected a zero divisor.
fn division(left: Value, right: Value) -> Value {
    Value::Real(left.as_real() / right.as_real())
}

fn integer_or_real(left: Value,
                   right: Value,
                   integer_op: fn(i64, i64) -> Option<i64>,
                   real_op: fn(f64, f64) -> f64)
                   -> Value {
    if let (Value::Integer(a), Value::Integer(b)) = (left, right)
       && let Some(n) = integer_op(a, b)
    {
        return Value::Integer(n);
    }
    Value::Real(real_op(left.as_real(), right.as_real()))
}
