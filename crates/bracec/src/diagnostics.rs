//! Ariadne-based rendering of lexer errors.
//!
//! Errors carry a line number and a character offset within that line; the
//! report is drawn against the whole source unit so surrounding lines give
//! context.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use brace_common::{LexError, LexErrorKind};

/// How diagnostics are printed.
pub struct DiagnosticOptions {
    pub color: bool,
    pub json: bool,
}

/// Print `error` to stderr, as JSON or as a rendered report.
pub fn report(error: &LexError, file: &str, lines: &[&str], options: &DiagnosticOptions) {
    if options.json {
        eprintln!("{}", json_diagnostic(error, file));
    } else {
        eprint!("{}", render_diagnostic(error, file, lines, options.color));
    }
}

/// JSON form of a diagnostic, one object per error.
pub fn json_diagnostic(error: &LexError, file: &str) -> serde_json::Value {
    serde_json::json!({
        "code": error.kind.code(),
        "severity": "error",
        "message": error.kind.to_string(),
        "file": file,
        "line": error.line,
        "offset": error.offset,
        "spans": [{
            "start": error.offset,
            "end": error.offset + 1,
            "label": label(&error.kind),
        }],
    })
}

/// Render `error` into a formatted report string.
pub fn render_diagnostic(error: &LexError, file: &str, lines: &[&str], color: bool) -> String {
    let config = if color {
        Config::default()
    } else {
        Config::default().with_color(false)
    };
    let source = lines.join("\n");
    let span = error_range(error, lines);

    let mut builder = Report::build(ReportKind::Error, span.clone())
        .with_code(error.kind.code())
        .with_message(format!("{}: {}", file, error))
        .with_config(config)
        .with_label(
            Label::new(span)
                .with_message(label(&error.kind))
                .with_color(Color::Red),
        );
    if let Some(help) = help(&error.kind) {
        builder.set_help(help);
    }
    let report = builder.finish();

    let mut buf = Vec::new();
    if report.write(Source::from(source), &mut buf).is_err() {
        return format!("error: {}: {}\n", file, error);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn label(kind: &LexErrorKind) -> String {
    match kind {
        LexErrorKind::StringNotEnded => "string starts here".to_string(),
        LexErrorKind::NotInString => "interpolation outside of a string".to_string(),
        LexErrorKind::NotInInterpolationString { delimiter } => {
            format!("inside a {delimiter}-delimited string")
        }
        LexErrorKind::InterpolationNotEnded => "interpolation starts here".to_string(),
    }
}

fn help(kind: &LexErrorKind) -> Option<&'static str> {
    match kind {
        LexErrorKind::StringNotEnded => Some("strings must be closed on the line they start"),
        LexErrorKind::NotInString => Some("escape it as \\` to use it as text"),
        LexErrorKind::NotInInterpolationString { .. } => {
            Some("interpolate in a double-quoted string or escape it as \\`")
        }
        LexErrorKind::InterpolationNotEnded => None,
    }
}

/// Character range of the error within `lines` joined by newlines.
///
/// The range is one character wide when the offset points at a character
/// of the line, and clamped to the line otherwise.
fn error_range(error: &LexError, lines: &[&str]) -> Range<usize> {
    let index = error.line.map_or(0, |line| line.saturating_sub(1) as usize);
    let line_start: usize = lines
        .iter()
        .take(index)
        .map(|line| line.chars().count() + 1)
        .sum();
    let line_len = lines.get(index).map_or(0, |line| line.chars().count());

    let start = line_start + (error.offset as usize).min(line_len);
    let end = (start + 1).min(line_start + line_len).max(start);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_range_maps_line_and_offset() {
        let lines = ["a := 1", "b := \"x"];
        let err = LexError::new(LexErrorKind::StringNotEnded, 5).at_line(2);
        // "a := 1\n" is 7 chars.
        assert_eq!(error_range(&err, &lines), 12..13);
    }

    #[test]
    fn error_range_without_line_uses_first_line() {
        let lines = ["`"];
        let err = LexError::new(LexErrorKind::NotInString, 0);
        assert_eq!(error_range(&err, &lines), 0..1);
    }

    #[test]
    fn render_contains_code_and_message() {
        let lines = ["x = \"open"];
        let err = LexError::new(LexErrorKind::StringNotEnded, 4).at_line(1);
        let rendered = render_diagnostic(&err, "test.brace", &lines, false);
        assert!(rendered.contains("STRING_NOT_ENDED"), "{rendered}");
        assert!(
            rendered.contains("no closing delimiter found for this string"),
            "{rendered}"
        );
        assert!(rendered.contains("string starts here"), "{rendered}");
        assert!(!rendered.contains("\x1b["), "no ANSI codes when color is off");
    }

    #[test]
    fn json_diagnostic_fields() {
        let err = LexError::new(LexErrorKind::NotInInterpolationString { delimiter: '\'' }, 2)
            .at_line(3);
        let json = json_diagnostic(&err, "a.brace");
        assert_eq!(json["code"], "NOT_IN_INTERPOLATION_STRING");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["file"], "a.brace");
        assert_eq!(json["line"], 3);
        assert_eq!(json["offset"], 2);
        assert_eq!(json["spans"][0]["start"], 2);
        assert_eq!(json["spans"][0]["end"], 3);
    }
}
