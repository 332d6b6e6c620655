use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{Expected, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many groups and unary signs may enclose an operand.
pub const MAX_NESTING: usize = 128;

/// The tallest expression tree the parser builds, see [`Expr::height`].
pub const MAX_HEIGHT: usize = 1024;

/// Parses a complete token sequence.
///
/// Parses one expression and then requires the next token to be `EOF`.
/// Anything left over is reported as `Expected end of input`. Input nested
/// beyond [`MAX_NESTING`] or [`MAX_HEIGHT`] is rejected with
/// [`ParseError::NestingTooDeep`].
///
/// # Parameters
/// - `tokens`: A token sequence as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The expression tree.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let expr = parse(&tokenize("1 - 2 - 3")).unwrap();
/// assert_eq!(expr.to_string(), "((1 - 2) - 3)");
///
/// let err = parse(&tokenize("1 + 2 3")).unwrap_err();
/// assert_eq!(err.to_string(), "at position 1:7 Expected end of input, got INTEGER");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.peek() {
        Some(token) if token.kind == TokenKind::Eof => Ok(expr),
        Some(token) => Err(ParseError::unexpected(Expected::EndOfInput, token)),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level and recursively descends through the hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Number of groups and signs already open around this expression.
///
/// # Returns
/// The parsed expression node. Tokens after the expression are left in the
/// iterator.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens, depth)
}
