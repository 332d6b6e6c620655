use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{context::EvaluationContext, core::EvalResult},
        value::core::Number,
    },
};

impl EvaluationContext {
    /// Evaluates both operands of a binary node and combines them.
    ///
    /// The left operand is evaluated completely first. If it fails, the
    /// right operand is never evaluated and the left error is returned.
    pub(crate) fn eval_binary_op(self: &Rc<Self>,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<Number> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        self.eval_binary(op, &left, &right)
    }

    /// Evaluates a binary operation between two numbers.
    ///
    /// Routes `+`, `-`, `*` and `/` to the matching arithmetic operation.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Number>` containing the evaluated result.
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
    /// let left = Number::new(Value::Integer(3), Position::START, context.clone());
    /// let right = Number::new(Value::Integer(4), Position::START, context.clone());
    ///
    /// let result = context.eval_binary(BinaryOperator::Add, &left, &right);
    /// assert_eq!(result.unwrap().value, Value::Integer(7));
    /// ```
    pub fn eval_binary(self: &Rc<Self>,
                       op: BinaryOperator,
                       left: &Number,
                       right: &Number)
                       -> EvalResult<Number> {
        self.eval_scalar_op(op, left, right)
    }
}
