//! Lexer for Emily.
//!
//! [`Scanner`] produces tokens one at a time with a single token of
//! lookahead, recording problems in a
//! [`DiagnosticLog`](emily_diagnostic::DiagnosticLog) as it goes.
//! [`lex()`] drains a scanner in one call.
//!
//! ```
//! use emily_ir::{SourceBuffer, TokenKind};
//!
//! let source = SourceBuffer::anonymous("x >= -5");
//! let output = emily_lexer::lex(&source);
//!
//! let kinds: Vec<_> = output.significant().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Identifier, TokenKind::GreaterThanEqual, TokenKind::IntegerLiteral]
//! );
//! assert!(output.diagnostics.is_empty());
//! ```

mod escape;
mod numeric;
mod scanner;

use std::sync::Once;

use emily_diagnostic::DiagnosticLog;
use emily_ir::{SourceBuffer, Token};

pub use scanner::Scanner;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set;
/// `RUST_LOG=emily_lexer=trace` logs every token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Every token of a source buffer, plus the diagnostics recorded on the way.
#[derive(Debug)]
pub struct LexOutput<'src> {
    pub tokens: Vec<Token<'src>>,
    pub diagnostics: DiagnosticLog<'src>,
}

impl<'src> LexOutput<'src> {
    /// Tokens other than whitespace.
    pub fn significant(&self) -> impl Iterator<Item = &Token<'src>> {
        self.tokens.iter().filter(|t| !t.kind.is_trivia())
    }
}

/// Scan all of `source`.
pub fn lex(source: &SourceBuffer) -> LexOutput<'_> {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.by_ref().collect();
    LexOutput {
        tokens,
        diagnostics: scanner.into_diagnostics(),
    }
}
