use brace_common::{LexErrorKind, TokenKind};
use brace_lexer::{tokenize_lines, Lexer, LexerConfig};
use insta::assert_yaml_snapshot;
use serde::Serialize;

/// A human-readable representation of a token for snapshot testing.
#[derive(Serialize)]
struct TokenSnapshot {
    line: u32,
    kind: String,
    start: u32,
    end: u32,
    content: Option<String>,
}

/// Tokenize every line of `source` with one lexer, remembering which line
/// each token came from.
fn tokenize_snapshot(source: &str) -> Vec<TokenSnapshot> {
    let mut lexer = Lexer::new();
    let mut snapshots = Vec::new();
    for (index, text) in source.lines().enumerate() {
        let line = index as u32 + 1;
        let before = lexer.tokens().len();
        lexer.scan_line(text, line).unwrap();
        snapshots.extend(lexer.tokens()[before..].iter().map(|tok| TokenSnapshot {
            line,
            kind: format!("{:?}", tok.kind),
            start: tok.span.start,
            end: tok.span.end,
            content: tok.content.clone(),
        }));
    }
    snapshots
}

// ── Fixture-based tests ──────────────────────────────────────────────────

#[test]
fn test_program() {
    let source = include_str!("../../../tests/fixtures/program.brace");
    let tokens = tokenize_snapshot(source);
    assert_yaml_snapshot!("program", tokens);
}

// ── Inline tests ─────────────────────────────────────────────────────────

#[test]
fn test_keyword_boundaries() {
    let tokens = tokenize_snapshot("if iffy try trying");
    assert_yaml_snapshot!("keyword_boundaries", tokens);
}

#[test]
fn test_independent_lexers_concatenate() {
    let a = "x := ?{ a }";
    let b = "y = \"b`x`\"";

    let mut first = Lexer::new();
    first.scan_line(a, 1).unwrap();
    let mut second = Lexer::new();
    second.scan_line(b, 2).unwrap();
    let mut separate = first.into_tokens();
    separate.extend(second.into_tokens());

    let together = tokenize_lines([a, b]).unwrap();
    assert_eq!(separate, together);
}

#[test]
fn test_interpolation_offsets_stay_in_line() {
    let line = "say \"x`1+1`y\" now";
    let tokens = tokenize_lines([line]).unwrap();
    let len = line.chars().count() as u32;

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Word, TokenKind::String, TokenKind::Word, TokenKind::Word]
    );
    assert_eq!(tokens[1].content(), Some("xy"));
    assert_eq!(tokens[2].content(), Some("1+1"));

    for token in &tokens {
        assert!(token.span.end <= len, "{token:?} escapes the line");
    }
    // Tokens other than the enclosing string do not overlap.
    let inner: Vec<_> = tokens.iter().filter(|t| t.kind != TokenKind::String).collect();
    for pair in inner.windows(2) {
        assert!(pair[0].span.end <= pair[1].span.start);
    }
    assert!(tokens[1].span.contains(tokens[2].span));
}

#[test]
fn test_error_keeps_earlier_lines() {
    let mut lexer = Lexer::new();
    lexer.scan_line("a := 1", 1).unwrap();
    let err = lexer.scan_line("\"abc", 2).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::StringNotEnded);
    assert_eq!(err.line, Some(2));
    assert_eq!(err.offset, 0);
    assert_eq!(
        err.to_string(),
        "line 2, character 0: no closing delimiter found for this string"
    );

    // Later lines still scan normally.
    lexer.scan_line("b", 3).unwrap();
    assert_eq!(lexer.tokens().len(), 4);
}

#[test]
fn test_strings_never_span_lines() {
    let err = tokenize_lines(["x = \"open", "close\""]).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::StringNotEnded);
    assert_eq!(err.line, Some(1));
    assert_eq!(err.offset, 4);
}

#[test]
fn test_config_enables_single_quote_interpolation() {
    let config = LexerConfig::default().with_interpolation_delimiters(['"', '\'']);
    let mut lexer = Lexer::with_config(config);
    lexer.scan_line("'a`b`'", 1).unwrap();
    assert_eq!(lexer.tokens().len(), 2);

    let err = Lexer::new().scan_line("'a`b`'", 1).unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::NotInInterpolationString { delimiter: '\'' }
    );
}

#[test]
fn test_lexers_run_in_parallel() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let line = format!("v{i} := ??{{ \"n`v{i}`\" }}");
                tokenize_lines([line.as_str()]).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let tokens = handle.join().unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::CreateVar,
                TokenKind::OpenBlockFunc,
                TokenKind::String,
                TokenKind::Word,
                TokenKind::CloseBlock,
            ]
        );
    }
}
