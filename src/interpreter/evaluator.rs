/// Binary operator evaluation logic.
///
/// Evaluates both operands, left first, and applies `+`, `-`, `*` or `/`
/// with integer/real promotion and the division-by-zero check.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements `+x` and `-x`; negation goes through the binary
/// multiplication path.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `EvalResult` alias and the dispatch over expression nodes.
pub mod core;

/// Evaluation contexts.
///
/// Named frames, optionally linked to a parent, that make up the trace
/// printed with runtime errors.
pub mod context;
