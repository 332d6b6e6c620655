use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{MAX_HEIGHT, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Enclosing groups and signs.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           depth,
                           parse_multiplicative,
                           &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           depth,
                           parse_unary,
                           &[BinaryOperator::Mul, BinaryOperator::Div])
}

/// Folds `operand (op operand)*` to the left for the given operators.
///
/// Every fold pushes the chain so far one level down, so the chain is cut
/// off with [`ParseError::NestingTooDeep`] at the operator that would make
/// the tree taller than [`MAX_HEIGHT`].
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 parse_operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                                 operators: &[BinaryOperator])
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_operand(tokens, depth)?;
    let mut height = left.height();
    while let Some(&token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind)
          && operators.contains(&op)
    {
        tokens.next();
        let right = parse_operand(tokens, depth)?;
        height = 1 + height.max(right.height());
        if height > MAX_HEIGHT {
            return Err(ParseError::NestingTooDeep { position: token.position });
        }
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                token: token.clone(),
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Division), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Addition => Some(BinaryOperator::Add),
        TokenKind::Subtraction => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Division => Some(BinaryOperator::Div),
        _ => None,
    }
}
