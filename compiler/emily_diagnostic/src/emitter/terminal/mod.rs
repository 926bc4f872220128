//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support:
//!
//! ```text
//! error[E0001]: Invalid Escape Sequence '\y'
//!  --> main.em:1:17
//!   |
//! 1 | "invalid escape \y sequence"
//!   |                 ^^ Invalid Escape Sequence
//! ```

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const LINT: &str = "\x1b[1;35m"; // Bold magenta
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => colors::ERROR,
        Severity::Warning => colors::WARNING,
        Severity::Lint => colors::LINT,
        Severity::Note => colors::NOTE,
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean.
    ///
    /// `is_tty` only matters for `Auto`; the caller detects it.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Write errors are ignored: diagnostics output is best effort.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self, diagnostic: &Diagnostic<'_>) {
        let severity = diagnostic.severity();
        self.write_colored(&severity.to_string(), severity_color(severity));
        self.write_colored(&format!("[{}]", diagnostic.id()), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message());
    }

    /// The `-->` line, the source line, and the underline.
    fn write_snippet(&mut self, diagnostic: &Diagnostic<'_>) {
        let location = diagnostic.location();
        let source = location.source.text();
        let table = LineOffsetTable::build(source);
        let span = location.span;
        let (line, col) = table.offset_to_line_col(source, span.start);

        let gutter = " ".repeat(line.to_string().len());
        let _ = write!(self.writer, "{gutter}");
        self.write_colored("-->", colors::GUTTER);
        let _ = writeln!(self.writer, " {}:{line}:{col}", location.source.name());

        let Some(line_text) = table.line_text(source, line) else {
            return;
        };

        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{line} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {line_text}");

        // Underline the part of the span on this line; at least one caret.
        let line_chars = line_text.chars().count();
        let first = (col as usize - 1).min(line_chars);
        let (_, end_col) = table.offset_to_line_col(source, span.end());
        let last = if table.line_from_offset(span.end()) == line {
            (end_col as usize - 1).min(line_chars)
        } else {
            line_chars
        };
        let carets = "^".repeat(last.saturating_sub(first).max(1));

        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = write!(self.writer, " {}", " ".repeat(first));
        self.write_colored(
            &format!("{carets} {}", diagnostic.title()),
            severity_color(diagnostic.severity()),
        );
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic<'_>) {
        self.write_header(diagnostic);
        self.write_snippet(diagnostic);
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);

            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };

            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
