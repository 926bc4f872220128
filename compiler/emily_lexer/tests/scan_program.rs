//! End-to-end: scan a small program and render its diagnostics.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use emily_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use emily_diagnostic::ErrorCode;
use emily_ir::{SourceBuffer, TokenKind, TokenValue};
use emily_lexer::{lex, Scanner};
use pretty_assertions::assert_eq;

const PROGRAM: &str = "\
count = 10
greeting = \"hello\\tworld\"
limit = 99999999999999999999
if (count >= -3) { count != limit } @
";

#[test]
fn significant_tokens_of_a_program() {
    let source = SourceBuffer::new("demo.em", PROGRAM);
    let output = lex(&source);

    let first_line: Vec<_> = output
        .significant()
        .take(3)
        .map(|t| (t.kind, t.value.clone()))
        .collect();
    assert_eq!(
        first_line,
        [
            (TokenKind::Identifier, Some(TokenValue::Symbol("count"))),
            (TokenKind::Assign, None),
            (TokenKind::IntegerLiteral, Some(TokenValue::Integer(10))),
        ]
    );

    let greeting = output
        .tokens
        .iter()
        .find(|t| t.kind == TokenKind::StringLiteral)
        .unwrap();
    assert_eq!(greeting.value, Some(TokenValue::Str("helloworld".into())));

    let integers = output
        .tokens
        .iter()
        .filter_map(|t| t.value.as_ref()?.as_integer())
        .collect::<Vec<_>>();
    assert_eq!(integers, [10, i64::MAX, -3]);
}

#[test]
fn tokens_cover_the_whole_program() {
    let source = SourceBuffer::anonymous(PROGRAM);
    let rebuilt: String = Scanner::new(&source).map(|t| t.text).collect();
    assert_eq!(rebuilt, PROGRAM);
}

#[test]
fn diagnostics_render_with_line_numbers() {
    let source = SourceBuffer::new("demo.em", PROGRAM);
    let output = lex(&source);

    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code()).collect();
    assert_eq!(codes, [ErrorCode::E0001, ErrorCode::E0003, ErrorCode::E0004]);

    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_all(output.diagnostics.as_slice());
    emitter.emit_summary(
        output.diagnostics.error_count(),
        output.diagnostics.warning_count(),
    );
    emitter.flush();
    let rendered = String::from_utf8(emitter.into_inner()).unwrap();

    assert!(rendered.contains("error[E0001]: Invalid Escape Sequence '\\t'\n"));
    assert!(rendered.contains(" --> demo.em:2:18\n"));
    assert!(rendered.contains("error[E0003]: The Integer literal 99999999999999999999 is too large\n"));
    assert!(rendered.contains(" --> demo.em:3:9\n"));
    assert!(rendered.contains("error[E0004]: Unexpected '@'\n"));
    assert!(rendered.contains(" --> demo.em:4:37\n"));
    assert!(rendered.ends_with("error: aborting due to 3 previous errors\n"));
}

#[test]
fn error_guarantee_from_log() {
    let clean = SourceBuffer::anonymous("a = 1");
    assert!(lex(&clean).diagnostics.error_guaranteed().is_none());

    let broken = SourceBuffer::anonymous("\"open");
    assert!(lex(&broken).diagnostics.error_guaranteed().is_some());
}
