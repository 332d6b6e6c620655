/// Operand evaluation and operator dispatch.
pub mod core;
/// Integer and real arithmetic.
pub mod scalar;
