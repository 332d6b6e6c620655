use std::rc::Rc;

use crate::interpreter::{evaluator::context::EvaluationContext, lexer::Position};

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Where the divisor starts in the source.
        position: Position,
        /// The context that was evaluating the division.
        context:  Rc<EvaluationContext>,
    },
}

impl RuntimeError {
    /// Where the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::DivisionByZero { position, .. } => *position,
        }
    }

    /// The evaluation context active when the error was raised.
    #[must_use]
    pub const fn context(&self) -> &Rc<EvaluationContext> {
        match self {
            Self::DivisionByZero { context, .. } => context,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position, context } => write!(f,
                                                                 "at position {position} Division by zero, context trace: {}",
                                                                 context.trace()),
        }
    }
}

impl std::error::Error for RuntimeError {}
