use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::{Expected, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_HEIGHT, MAX_NESTING, ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` and `-`. Unary operators are
/// right-associative and bind tighter than any binary operator, so `--5` is
/// parsed as `-(-5)` and `-2 * 3` as `(-2) * 3`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Number of groups and signs already open around this operand.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
///
/// # Errors
/// Returns [`ParseError::NestingTooDeep`] at the sign that would open more
/// than [`MAX_NESTING`] levels.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let &token = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    let op = match token.kind {
        TokenKind::Addition => UnaryOperator::Plus,
        TokenKind::Subtraction => UnaryOperator::Negate,
        _ => return parse_primary(tokens, depth),
    };

    let depth = open_level(token, depth)?;
    tokens.next();
    let expr = parse_unary(tokens, depth)?;
    if expr.height() >= MAX_HEIGHT {
        return Err(ParseError::NestingTooDeep { position: token.position });
    }
    Ok(Expr::UnaryOp { op,
                       token: token.clone(),
                       expr: Box::new(expr) })
}

/// Parses a primary (atomic) expression: a number or a parenthesized group.
///
/// Grammar:
/// ```text
///     primary := INTEGER | FLOAT
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Number of groups and signs already open around this operand.
///
/// # Errors
/// Returns `Expected number, '+', '-' or '('` when the current token cannot
/// start an operand. The offending token is not consumed.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let &token = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token.kind {
        TokenKind::Integer | TokenKind::Float => {
            tokens.next();
            parse_literal(token)
        },
        TokenKind::LParen => {
            let depth = open_level(token, depth)?;
            tokens.next();
            parse_grouping(tokens, depth)
        },
        _ => Err(ParseError::unexpected(Expected::Operand, token)),
    }
}

/// Checks that `token` may open one more level below `depth` and returns
/// the depth inside it.
fn open_level(token: &Token, depth: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { position: token.position });
    }
    Ok(depth + 1)
}

/// Converts an `INTEGER` or `FLOAT` token into an [`Expr::Number`].
///
/// An integer that does not fit in an `i64` becomes a real literal, the same
/// promotion integer arithmetic applies on overflow.
fn parse_literal(token: &Token) -> ParseResult<Expr> {
    let integer = match token.kind {
        TokenKind::Integer => token.lexeme.parse::<i64>().ok(),
        _ => None,
    };
    let value = match integer {
        Some(n) => LiteralValue::Integer(n),
        None => token.lexeme
                     .parse::<f64>()
                     .map(LiteralValue::Real)
                     .map_err(|_| ParseError::unexpected(Expected::Operand, token))?,
    };

    Ok(Expr::Number { value,
                      token: token.clone() })
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// The closing `)` is required; anything else yields `Expected ')'` at the
/// offending token. The group itself leaves no node in the tree.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens, depth)?;

    match tokens.peek() {
        Some(&token) if token.kind == TokenKind::RParen => {
            tokens.next();
            Ok(expr)
        },
        Some(&token) => Err(ParseError::unexpected(Expected::ClosingParen, token)),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
