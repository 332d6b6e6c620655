use crate::interpreter::lexer::{Position, Token, TokenKind};

/// What the parser was looking for when it hit an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A number, a unary sign or an opening parenthesis.
    Operand,
    /// The `)` closing a group.
    ClosingParen,
    /// Nothing more: the expression was complete.
    EndOfInput,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand => write!(f, "number, '+', '-' or '('"),
            Self::ClosingParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot appear here.
    UnexpectedToken {
        /// What would have been accepted.
        expected: Expected,
        /// The kind of the token encountered.
        found:    TokenKind,
        /// The source text of the token encountered.
        lexeme:   String,
        /// Where the token starts.
        position: Position,
    },
    /// The token sequence ran out before an `EOF` token was seen.
    UnexpectedEndOfInput,
    /// Groups, signs or operator chains are nested deeper than the parser
    /// allows.
    NestingTooDeep {
        /// The token that would have opened the next level.
        position: Position,
    },
}

impl ParseError {
    /// Builds a [`ParseError::UnexpectedToken`] for `token`.
    #[must_use]
    pub fn unexpected(expected: Expected, token: &Token) -> Self {
        Self::UnexpectedToken { expected,
                                found: token.kind,
                                lexeme: token.lexeme.clone(),
                                position: token.position }
    }

    /// Where the error was detected, if known.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::NestingTooDeep { position } => Some(*position),
            Self::UnexpectedEndOfInput => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position,
                                    .. } => {
                write!(f, "at position {position} Expected {expected}, got {found}")
            },
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of token stream."),
            Self::NestingTooDeep { position } => {
                write!(f, "at position {position} Expression is nested too deeply")
            },
        }
    }
}

impl std::error::Error for ParseError {}
