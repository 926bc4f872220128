//! Static descriptions of diagnostics.

use crate::{ErrorCode, Severity};

/// Immutable description of one kind of diagnostic.
///
/// `message_format` may contain positional placeholders `{0}`, `{1}`, ...
/// which [`format_message`] fills from a diagnostic's arguments.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct DiagnosticDescriptor {
    pub code: ErrorCode,
    pub severity: Severity,
    pub title: &'static str,
    pub message_format: &'static str,
}

impl DiagnosticDescriptor {
    pub const fn new(
        code: ErrorCode,
        severity: Severity,
        title: &'static str,
        message_format: &'static str,
    ) -> Self {
        DiagnosticDescriptor {
            code,
            severity,
            title,
            message_format,
        }
    }

    /// Stable identifier, e.g. `"E0001"`.
    #[inline]
    pub fn id(&self) -> &'static str {
        self.code.as_str()
    }

    /// The message template with `args` substituted.
    pub fn format<S: AsRef<str>>(&self, args: &[S]) -> String {
        format_message(self.message_format, args)
    }
}

/// Substitute positional arguments into a message template.
///
/// `{N}` is replaced by `args[N]`. `{{` and `}}` produce literal braces.
/// A placeholder with no matching argument, or one that is not a plain
/// index, is copied through unchanged.
pub fn format_message<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
        } else if let Some(close) = tail.find('}') {
            let placeholder = &tail[..=close];
            match tail[1..close].parse::<usize>().ok().and_then(|i| args.get(i)) {
                Some(arg) => out.push_str(arg.as_ref()),
                None => out.push_str(placeholder),
            }
            rest = &tail[close + 1..];
        } else {
            // Unclosed `{`: the remainder is literal text.
            out.push_str(tail);
            rest = "";
        }
    }

    out.push_str(rest);
    out
}
