use crate::interpreter::lexer::{Position, Token};

/// A numeric literal as written in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

/// An abstract syntax tree node.
///
/// Every node keeps the token it was built from so later stages can point at
/// the exact source location. Children are owned by their parent; the tree is
/// never modified after the parser returns it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The parsed value.
        value: LiteralValue,
        /// The `INTEGER` or `FLOAT` token.
        token: Token,
    },
    /// A prefix operator applied to an operand (e.g. `-x`).
    UnaryOp {
        /// The operator.
        op:    UnaryOperator,
        /// The operator token.
        token: Token,
        /// The operand.
        expr:  Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// The operator token.
        token: Token,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Where the expression starts in the source.
    ///
    /// For a binary operation this is the start of its left operand.
    ///
    /// ## Example
    /// ```
    /// use reckon::interpreter::{lexer::tokenize, parser::core::parse};
    ///
    /// let expr = parse(&tokenize("  12 * 3")).unwrap();
    ///
    /// assert_eq!(expr.position().offset, 2);
    /// ```
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Number { token, .. } | Self::UnaryOp { token, .. } => token.position,
            Self::BinaryOp { left, .. } => left.position(),
        }
    }

    /// The number of nodes on the longest path from this node to a literal.
    ///
    /// ## Example
    /// ```
    /// use reckon::interpreter::{lexer::tokenize, parser::core::parse};
    ///
    /// assert_eq!(parse(&tokenize("7")).unwrap().height(), 1);
    /// assert_eq!(parse(&tokenize("1 + 2 * -3")).unwrap().height(), 4);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::UnaryOp { expr, .. } => 1 + expr.height(),
            Self::BinaryOp { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}

/// Renders the tree fully parenthesized, e.g. `((1 - 2) - 3)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
