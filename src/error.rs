/// Parsing errors.
///
/// Defines the errors the parser reports: unexpected tokens (missing
/// operands, unbalanced parentheses, trailing input), literals that do not
/// fit their type, and token streams that end without `EOF`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised during evaluation. Division by zero is the only
/// one; it carries the evaluation context trace for diagnostics.
pub mod runtime_error;

pub use parse_error::{Expected, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure of the lex, parse and evaluate pipeline.
///
/// Lexing never fails, so this is either a syntax error from the parser or a
/// runtime error from the evaluator.
#[derive(Debug)]
pub enum Error {
    /// The source is not a well-formed expression.
    Syntax(ParseError),
    /// The expression is well-formed but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "Syntax error {e}"),
            Self::Runtime(e) => write!(f, "Runtime error {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
