use std::iter::FusedIterator;

use logos::Logos;

/// Raw lexemes recognised by the logos state machine.
///
/// This is the pattern table only. [`Lexer`] turns these into [`Token`]s,
/// maps logos errors to [`TokenKind::Invalid`] and appends the final
/// [`TokenKind::Eof`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    /// Float literals such as `3.14`. The dot joins the number only when a
    /// digit follows it.
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    /// Integer literals such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `# comments` up to the end of the line.
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// Layout: every character up to and including the space.
    #[regex(r"[\x00-\x20]+", skip_layout)]
    Layout,
}

/// Line bookkeeping carried by the logos lexer.
#[derive(Debug, Clone, Copy)]
struct LexerExtras {
    /// The current line number, starting at 1.
    line:       usize,
    /// Byte offset where the current line starts.
    line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Skips layout and records every newline it contains.
fn skip_layout(lex: &mut logos::Lexer<'_, Lexeme>) -> logos::Skip {
    let start = lex.span().start;
    let layout = lex.slice();
    let newlines = layout.matches('\n').count();
    if let Some(last) = layout.rfind('\n') {
        lex.extras.line += newlines;
        lex.extras.line_start = start + last + 1;
    }
    logos::Skip
}

/// A location in the source text.
///
/// `offset` is a byte offset; `line` and `column` are 1-based and the column
/// counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset into the source.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// The position of the first character of any source.
    pub const START: Self = Self { offset: 0,
                                   line:   1,
                                   column: 1, };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of digits, such as `42`.
    Integer,
    /// Digits, a dot and more digits, such as `2.5`.
    Float,
    /// `+`
    Addition,
    /// `-`
    Subtraction,
    /// `*`
    Multiply,
    /// `/`
    Division,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input. Always the last token of a sequence.
    Eof,
    /// Any character the language does not know.
    Invalid,
}

/// Maps a recognised lexeme to the public token kind.
const fn token_kind(lexeme: Lexeme) -> TokenKind {
    match lexeme {
        Lexeme::Float => TokenKind::Float,
        Lexeme::Integer => TokenKind::Integer,
        Lexeme::Plus => TokenKind::Addition,
        Lexeme::Minus => TokenKind::Subtraction,
        Lexeme::Star => TokenKind::Multiply,
        Lexeme::Slash => TokenKind::Division,
        Lexeme::LParen => TokenKind::LParen,
        Lexeme::RParen => TokenKind::RParen,
        // Skipped by logos before they ever reach us.
        Lexeme::Comment | Lexeme::Layout => TokenKind::Invalid,
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Addition => "ADDITION",
            Self::Subtraction => "SUBTRACTION",
            Self::Multiply => "MULTIPLY",
            Self::Division => "DIVISION",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Eof => "EOF",
            Self::Invalid => "INVALID",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: its kind, the exact source text it came from and where
/// that text starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The source slice the token was read from. Empty for `EOF`.
    pub lexeme:   String,
    /// Start of the lexeme.
    pub position: Position,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' at {}", self.kind, self.lexeme, self.position)
    }
}

/// Turns source text into [`Token`]s.
///
/// As an iterator the lexer yields every token followed by exactly one
/// `EOF` token and then stops. [`Lexer::next_token`] keeps returning `EOF`
/// once the input is exhausted, and [`Lexer::reset`] starts over from the
/// beginning of the same text.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("1 + 2.5").map(|token| token.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Integer, TokenKind::Addition, TokenKind::Float, TokenKind::Eof]);
/// ```
pub struct Lexer<'src> {
    source:   &'src str,
    inner:    logos::Lexer<'src, Lexeme>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: Lexeme::lexer_with_extras(source, LexerExtras::default()),
               finished: false }
    }

    /// Rewinds to the start of the source.
    pub fn reset(&mut self) {
        self.inner = Lexeme::lexer_with_extras(self.source, LexerExtras::default());
        self.finished = false;
    }

    /// Returns the next token.
    ///
    /// Unknown characters come back as [`TokenKind::Invalid`]. After the
    /// input is exhausted every call returns an `EOF` token at the end of the
    /// source.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return self.eof_token();
        }

        match self.inner.next() {
            Some(result) => {
                let kind = result.map_or(TokenKind::Invalid, token_kind);
                Token { kind,
                        lexeme: self.inner.slice().to_string(),
                        position: self.position_at(self.inner.span().start) }
            },
            None => {
                self.finished = true;
                self.eof_token()
            },
        }
    }

    fn eof_token(&self) -> Token {
        Token { kind:     TokenKind::Eof,
                lexeme:   String::new(),
                position: self.position_at(self.source.len()), }
    }

    fn position_at(&self, offset: usize) -> Position {
        let LexerExtras { line, line_start } = self.inner.extras;
        let column = self.source[line_start..offset].chars().count() + 1;
        Position { offset,
                   line,
                   column }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

impl FusedIterator for Lexer<'_> {}

/// Lexes `source` into a complete token sequence ending in `EOF`.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("");
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind, TokenKind::Eof);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
