use std::rc::Rc;

use crate::{
    ast::LiteralValue,
    interpreter::{evaluator::context::EvaluationContext, lexer::Position},
};

/// A numeric runtime value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond 2^53 lose precision.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for `0`, `0.0` and `-0.0`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

/// The result of evaluating a (sub)expression.
///
/// Besides the value it remembers where the expression started and which
/// context produced it. Both are used only to attribute diagnostics.
#[derive(Debug, Clone)]
pub struct Number {
    /// The computed value.
    pub value:    Value,
    /// Start of the expression that produced the value.
    pub position: Position,
    /// The context the value was computed in.
    pub context:  Rc<EvaluationContext>,
}

impl Number {
    /// Creates a number attributed to `position` within `context`.
    #[must_use]
    pub fn new(value: Value, position: Position, context: Rc<EvaluationContext>) -> Self {
        Self { value,
               position,
               context }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
