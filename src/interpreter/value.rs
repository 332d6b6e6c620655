/// Runtime numbers.
///
/// Defines [`core::Value`], the integer-or-real payload, and
/// [`core::Number`], which pairs a value with the source position and the
/// evaluation context that produced it.
pub mod core;
