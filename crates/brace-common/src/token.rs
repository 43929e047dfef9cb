use serde::Serialize;

use crate::span::Span;

/// A token produced by the Brace lexer.
///
/// `content` is only present for [`TokenKind::String`] (the decoded body,
/// escapes resolved) and [`TokenKind::Word`] (the raw spelling).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Token {
    /// Create a new content-less token from a kind and character offsets.
    pub fn new(kind: TokenKind, start: u32, end: u32) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
            content: None,
        }
    }

    /// A `Word` token holding its raw spelling.
    pub fn word(text: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            kind: TokenKind::Word,
            span: Span::new(start, end),
            content: Some(text.into()),
        }
    }

    /// A `String` token holding its decoded body.
    pub fn string(body: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            kind: TokenKind::String,
            span: Span::new(start, end),
            content: Some(body.into()),
        }
    }

    /// The same token with its span moved right by `offset` characters.
    pub fn shifted(mut self, offset: u32) -> Self {
        self.span = self.span.shifted(offset);
        self
    }

    /// Shorthand for `self.content.as_deref()`.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// Every kind of token in the Brace language.
///
/// The interpolation backtick and the quote characters are not listed here:
/// they are structural punctuation consumed while scanning strings (see
/// [`crate::symbol::SymbolKind`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // ── Blocks ─────────────────────────────────────────────────────────
    /// `{`
    OpenBlock,
    /// `?{` -- block evaluated lazily.
    OpenBlockLazy,
    /// `??{` -- block used as a function body.
    OpenBlockFunc,
    /// `}`
    CloseBlock,
    /// `}&` -- closes a block and runs it asynchronously.
    CloseBlockAsync,

    // ── Brackets ───────────────────────────────────────────────────────
    /// `[`
    OpenSubscript,
    /// `]`
    CloseSubscript,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,

    // ── Operators ──────────────────────────────────────────────────────
    /// `:`
    KeyValSeparator,
    /// `:=`
    CreateVar,
    /// `=`
    SetVar,
    /// `==`
    Equals,
    /// `!`
    Reverse,
    /// `!=`
    NotEquals,
    /// `?`
    QuestionMark,

    // ── Keywords ───────────────────────────────────────────────────────
    If,
    Try,

    // ── Literals ───────────────────────────────────────────────────────
    /// A quoted string; `content` holds the decoded body.
    String,
    /// Any run of characters that matched no symbol.
    Word,
}

impl TokenKind {
    /// Whether tokens of this kind carry `content`.
    pub fn has_content(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Word)
    }
}
