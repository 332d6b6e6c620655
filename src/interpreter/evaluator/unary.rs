use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        evaluator::{context::EvaluationContext, core::EvalResult},
        lexer::Position,
        value::core::{Number, Value},
    },
};

impl EvaluationContext {
    /// Evaluates the operand of a unary node and applies the operator.
    ///
    /// The result is attributed to `position`, the operator token.
    pub(crate) fn eval_unary_op(self: &Rc<Self>,
                                op: UnaryOperator,
                                expr: &Expr,
                                position: Position)
                                -> EvalResult<Number> {
        let operand = self.eval(expr)?;
        let result = self.eval_unary(op, &operand)?;
        Ok(Number { position, ..result })
    }

    /// Applies a unary operator to a number.
    ///
    /// - `Plus` returns the operand unchanged.
    /// - `Negate` multiplies the operand by `-1` through
    ///   [`eval_scalar_op`](Self::eval_scalar_op), so negation follows the
    ///   same integer/real rules as every other product.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::UnaryOperator,
    ///     interpreter::{
    ///         evaluator::context::EvaluationContext,
    ///         lexer::Position,
    ///         value::core::{Number, Value},
    ///     },
    /// };
    ///
    /// let context = EvaluationContext::root("<program>");
    /// let five = Number::new(Value::Integer(5), Position::START, context.clone());
    ///
    /// let v = context.eval_unary(UnaryOperator::Negate, &five).unwrap();
    /// assert_eq!(v.value, Value::Integer(-5));
    ///
    /// let v = context.eval_unary(UnaryOperator::Plus, &five).unwrap();
    /// assert_eq!(v.value, Value::Integer(5));
    /// ```
    pub fn eval_unary(self: &Rc<Self>, op: UnaryOperator, operand: &Number) -> EvalResult<Number> {
        match op {
            UnaryOperator::Plus => Ok(operand.clone()),
            UnaryOperator::Negate => {
                let minus_one = Number::new(Value::Integer(-1), operand.position, Rc::clone(self));
                self.eval_scalar_op(BinaryOperator::Mul, operand, &minus_one)
            },
        }
    }
}
