//! Token stream printing.

use brace_common::{Token, TokenKind};
use serde::Serialize;

/// One token as printed in `--json` mode.
#[derive(Serialize)]
struct TokenRecord<'a> {
    line: u32,
    kind: TokenKind,
    start: u32,
    end: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

/// Render a token from line `line` as a single output line.
///
/// Human format is `line:start..end  Kind  "content"`.
pub fn format_token(line: u32, token: &Token, json: bool) -> String {
    if json {
        let record = TokenRecord {
            line,
            kind: token.kind,
            start: token.span.start,
            end: token.span.end,
            content: token.content(),
        };
        return serde_json::to_string(&record).unwrap_or_default();
    }

    let location = format!("{}:{}..{}", line, token.span.start, token.span.end);
    match token.content() {
        Some(content) => format!("{location}  {:?}  {content:?}", token.kind),
        None => format!("{location}  {:?}", token.kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_format() {
        let token = Token::new(TokenKind::CreateVar, 2, 4);
        assert_eq!(format_token(3, &token, false), "3:2..4  CreateVar");

        let token = Token::string("a\nb", 0, 6);
        assert_eq!(format_token(1, &token, false), "1:0..6  String  \"a\\nb\"");
    }

    #[test]
    fn json_format() {
        let token = Token::word("greet", 0, 5);
        let value: serde_json::Value =
            serde_json::from_str(&format_token(1, &token, true)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "line": 1,
                "kind": "Word",
                "start": 0,
                "end": 5,
                "content": "greet",
            })
        );

        let token = Token::new(TokenKind::If, 0, 2);
        let value: serde_json::Value =
            serde_json::from_str(&format_token(2, &token, true)).unwrap();
        assert!(value.get("content").is_none());
    }
}
