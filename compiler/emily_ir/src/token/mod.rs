//! Token types produced by the scanner.
//!
//! A [`Token`] borrows its raw text from the [`SourceBuffer`](crate::SourceBuffer)
//! it was scanned from. Semantic payloads live in [`TokenValue`]; callers
//! match on [`TokenKind`] to know which variant, if any, is populated.

use std::fmt;

use crate::Span;

/// Every kind of token the scanner produces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Character the scanner could not place, or a lone `!`.
    Unknown,
    Whitespace,
    IntegerLiteral,
    StringLiteral,
    Identifier,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Assignment and comparison
    Assign,
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,

    // Delimiters
    LeftParenthesis,
    RightParenthesis,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Dot,
}

impl TokenKind {
    /// Human-readable name, used in messages and debug output.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Unknown => "unknown",
            TokenKind::Whitespace => "whitespace",
            TokenKind::IntegerLiteral => "integer",
            TokenKind::StringLiteral => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterThanEqual => ">=",
            TokenKind::LessThan => "<",
            TokenKind::LessThanEqual => "<=",
            TokenKind::LeftParenthesis => "(",
            TokenKind::RightParenthesis => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Dot => ".",
        }
    }

    /// Whitespace carries no meaning for a parser.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Kinds that carry a [`TokenValue`].
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral | TokenKind::StringLiteral | TokenKind::Identifier
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Semantic payload of a token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenValue<'src> {
    /// Value of an integer literal, sign included.
    Integer(i64),
    /// Decoded content of a string literal (escapes resolved, quotes removed).
    Str(String),
    /// Raw identifier text.
    Symbol(&'src str),
}

impl<'src> TokenValue<'src> {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TokenValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&'src str> {
        match self {
            TokenValue::Symbol(s) => Some(*s),
            _ => None,
        }
    }
}

/// A scanned token.
///
/// `text` is exactly `source[start..end]`. Immutable once produced.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: Option<TokenValue<'src>>,
    pub text: &'src str,
    pub start: u32,
    pub end: u32,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(
        kind: TokenKind,
        value: Option<TokenValue<'src>>,
        text: &'src str,
        start: u32,
        end: u32,
    ) -> Self {
        Token {
            kind,
            value,
            text,
            start,
            end,
        }
    }

    /// Byte range of the token.
    #[inline]
    pub fn span(&self) -> Span {
        Span::from_bounds(self.start, self.end)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}..{}", self.kind, self.text, self.start, self.end)?;
        if let Some(value) = &self.value {
            write!(f, " = {value:?}")?;
        }
        Ok(())
    }
}
