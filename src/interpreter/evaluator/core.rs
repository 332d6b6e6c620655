use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::context::EvaluationContext,
        value::core::{Number, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl EvaluationContext {
    /// Evaluates an expression in this context.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the node variant: literals become numbers, unary and
    /// binary operations evaluate their operands and apply the operator. The
    /// tree is only read.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The resulting [`Number`], attributed to this context.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{
    ///     evaluator::context::EvaluationContext, lexer::tokenize, parser::core::parse,
    ///     value::core::Value,
    /// };
    ///
    /// let expr = parse(&tokenize("(2 + 3) * 4")).unwrap();
    /// let context = EvaluationContext::root("<program>");
    ///
    /// assert_eq!(context.eval(&expr).unwrap().value, Value::Integer(20));
    /// ```
    pub fn eval(self: &Rc<Self>, expr: &Expr) -> EvalResult<Number> {
        match expr {
            Expr::Number { value, token } => {
                Ok(Number::new(Value::from(*value), token.position, Rc::clone(self)))
            },
            Expr::UnaryOp { op, token, expr } => self.eval_unary_op(*op, expr, token.position),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
        }
    }
}
