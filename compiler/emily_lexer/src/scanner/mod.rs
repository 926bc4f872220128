//! The tokenizer.
//!
//! [`Scanner`] turns a [`SourceBuffer`] into a stream of [`Token`]s with one
//! token of lookahead. Each token comes from a single dispatch on its first
//! character, consuming the longest lexeme that fits.
//!
//! Malformed input never stops the scan. The problem goes into the
//! scanner's [`DiagnosticLog`] and a best-effort token is still returned.

use std::iter::FusedIterator;

use emily_diagnostic::{catalog, DiagnosticDescriptor, DiagnosticLog};
use emily_ir::{Location, SourceBuffer, Span, Token, TokenKind, TokenValue};
use emily_lexer_core::char_class::{
    is_digit, is_ident_continue, is_ident_start, is_number_continue, is_whitespace,
};
use emily_lexer_core::ScanCursor;
use tracing::trace;

use crate::escape::resolve_escape;
use crate::numeric::parse_int_skip_underscores;

/// Tokenizer over one source buffer.
///
/// `peek()` scans and caches the next token; iterating hands it out and
/// clears the cache. After the last token the scanner yields `None` forever.
pub struct Scanner<'src> {
    cursor: ScanCursor<'src>,
    diagnostics: DiagnosticLog<'src>,
    /// `Some(None)` caches end of input.
    peeked: Option<Option<Token<'src>>>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src SourceBuffer) -> Self {
        Scanner {
            cursor: ScanCursor::new(source),
            diagnostics: DiagnosticLog::new(),
            peeked: None,
        }
    }

    pub fn source(&self) -> &'src SourceBuffer {
        self.cursor.source()
    }

    /// The next token, without consuming it.
    ///
    /// Repeated calls return the same token until it is consumed.
    pub fn peek(&mut self) -> Option<&Token<'src>> {
        let next = match self.peeked.take() {
            Some(cached) => cached,
            None => self.scan(),
        };
        self.peeked.insert(next).as_ref()
    }

    /// Diagnostics recorded so far, in scan order.
    pub fn diagnostics(&self) -> &DiagnosticLog<'src> {
        &self.diagnostics
    }

    /// Give up the scanner and keep its diagnostics.
    pub fn into_diagnostics(self) -> DiagnosticLog<'src> {
        self.diagnostics
    }

    /// Scan one token. `None` at end of input.
    fn scan(&mut self) -> Option<Token<'src>> {
        let Some(first) = self.cursor.next() else {
            trace!(offset = self.cursor.start(), "end of input");
            return None;
        };

        let token = match first {
            '"' => self.string_literal(),
            c if is_ident_start(c) => self.identifier(),

            '*' => self.complete(TokenKind::Star, None),
            '/' => self.complete(TokenKind::Slash, None),
            '%' => self.complete(TokenKind::Percent, None),
            '(' => self.complete(TokenKind::LeftParenthesis, None),
            ')' => self.complete(TokenKind::RightParenthesis, None),
            '[' => self.complete(TokenKind::LeftBracket, None),
            ']' => self.complete(TokenKind::RightBracket, None),
            '{' => self.complete(TokenKind::LeftBrace, None),
            '}' => self.complete(TokenKind::RightBrace, None),
            '.' => self.complete(TokenKind::Dot, None),

            '=' => self.with_optional_equals(TokenKind::Assign, TokenKind::Equal),
            '<' => self.with_optional_equals(TokenKind::LessThan, TokenKind::LessThanEqual),
            '>' => self.with_optional_equals(TokenKind::GreaterThan, TokenKind::GreaterThanEqual),
            // A lone `!` has no meaning but is not reported.
            '!' => self.with_optional_equals(TokenKind::Unknown, TokenKind::NotEqual),

            '-' => self.sign_or_number(TokenKind::Minus),
            '+' => self.sign_or_number(TokenKind::Plus),
            c if is_digit(c) => self.integer_literal(),

            c if is_whitespace(c) => {
                self.cursor.next_while(is_whitespace);
                self.complete(TokenKind::Whitespace, None)
            }

            c => {
                let mut buf = [0u8; 4];
                let text: &str = c.encode_utf8(&mut buf);
                self.report(&catalog::UNEXPECTED_CHARACTER, self.cursor.span(), &[text]);
                self.complete(TokenKind::Unknown, None)
            }
        };
        Some(token)
    }

    /// The first character is consumed. A following `=` selects `with_equals`.
    fn with_optional_equals(&mut self, alone: TokenKind, with_equals: TokenKind) -> Token<'src> {
        if self.cursor.peek() == Some('=') {
            self.cursor.extend(1);
            self.complete(with_equals, None)
        } else {
            self.complete(alone, None)
        }
    }

    /// The sign is consumed. It joins the literal only if a digit follows directly.
    fn sign_or_number(&mut self, operator: TokenKind) -> Token<'src> {
        if self.cursor.peek().is_some_and(is_digit) {
            self.integer_literal()
        } else {
            self.complete(operator, None)
        }
    }

    fn identifier(&mut self) -> Token<'src> {
        self.cursor.next_while(is_ident_continue);
        let name = self.cursor.content();
        self.complete(TokenKind::Identifier, Some(TokenValue::Symbol(name)))
    }

    /// Sign (if any) and first digit are consumed.
    ///
    /// Values past the `i64` range are reported and clamped to `i64::MAX`.
    fn integer_literal(&mut self) -> Token<'src> {
        self.cursor.next_while(is_number_continue);
        let text = self.cursor.content();
        let value = parse_int_skip_underscores(text).unwrap_or_else(|| {
            self.report(
                &catalog::INTEGER_LITERAL_TOO_LARGE,
                self.cursor.span(),
                &[text],
            );
            i64::MAX
        });
        self.complete(TokenKind::IntegerLiteral, Some(TokenValue::Integer(value)))
    }

    /// Opening quote is consumed.
    fn string_literal(&mut self) -> Token<'src> {
        let mut value = String::new();
        loop {
            match self.cursor.next() {
                Some('"') => {
                    return self.complete(TokenKind::StringLiteral, Some(TokenValue::Str(value)));
                }
                Some('\\') => {
                    let escape_start = self.cursor.end() - 1;
                    let Some(escaped) = self.cursor.next() else {
                        break;
                    };
                    match resolve_escape(escaped) {
                        Some(resolved) => value.push(resolved),
                        None => {
                            let span = Span::from_bounds(escape_start, self.cursor.end());
                            let sequence = self.source().location(span).text();
                            self.report(&catalog::INVALID_ESCAPE_SEQUENCE, span, &[sequence]);
                        }
                    }
                }
                Some(c) => value.push(c),
                None => break,
            }
        }

        self.report(&catalog::UNTERMINATED_STRING_LITERAL, self.cursor.span(), &[]);
        self.complete(TokenKind::StringLiteral, Some(TokenValue::Str(value)))
    }

    fn report(&mut self, descriptor: &'static DiagnosticDescriptor, span: Span, args: &[&str]) {
        let location = Location::new(self.cursor.source(), span);
        self.diagnostics.emit(descriptor, location, args);
    }

    /// Turn the window into a token and commit it.
    fn complete(&mut self, kind: TokenKind, value: Option<TokenValue<'src>>) -> Token<'src> {
        let token = Token::new(
            kind,
            value,
            self.cursor.content(),
            self.cursor.start(),
            self.cursor.end(),
        );
        trace!(kind = ?token.kind, start = token.start, end = token.end, "token");
        self.cursor.advance();
        token
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    /// Consume the next token, reusing a peeked one if present.
    fn next(&mut self) -> Option<Token<'src>> {
        match self.peeked.take() {
            Some(cached) => cached,
            None => self.scan(),
        }
    }
}

impl FusedIterator for Scanner<'_> {}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
