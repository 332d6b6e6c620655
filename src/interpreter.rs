/// The evaluator module walks the AST and computes results.
///
/// The evaluator traverses the expression tree, performs the arithmetic and
/// produces a [`value::core::Number`]. Every evaluation runs inside an
/// [`evaluator::context::EvaluationContext`] that names where the work is
/// happening, so runtime errors can print a trace.
///
/// # Responsibilities
/// - Evaluates literal, unary and binary nodes.
/// - Applies integer and floating-point arithmetic with promotion.
/// - Reports division by zero with the divisor's position.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each carrying its kind, its lexeme and its starting position. Layout and
/// `#` comments are skipped. Lexing never fails: characters outside the
/// language become `INVALID` tokens that the parser reports.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Tracks line and column across newlines.
/// - Terminates every sequence with exactly one `EOF` token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level. It
/// stops at the first syntax error and reports the offending token.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] trees.
/// - Enforces precedence and left associativity.
/// - Verifies the whole token sequence was consumed.
pub mod parser;
/// The value module defines the runtime numeric types.
pub mod value;
