/// Entry points and the top of the grammar.
///
/// Holds the `ParseResult` alias, [`core::parse`] and
/// [`core::parse_expression`].
pub mod core;

/// Left-associative binary operator levels (`+ -` and `* /`).
pub mod binary;

/// Unary signs, literals and parenthesized groups.
pub mod unary;
