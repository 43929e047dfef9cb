//! The symbol table: every literal spelling the lexer recognizes.
//!
//! The table is a `const` slice, so it is shared read-only by every lexer
//! instance on every thread. [`symbols_starting_with`] adds a first-character
//! index on top of it, built once on first use.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// What a recognized spelling means to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Emitted directly as a token of this kind.
    Token(TokenKind),
    /// A string delimiter (`"` or `'`). Opens a string literal closed by
    /// the same character.
    Quote(char),
    /// The interpolation delimiter `` ` ``. Only meaningful inside a string.
    Interpolate,
    /// A backslash-escaped delimiter outside of a string (`\"`, `\'`,
    /// `` \` ``). Recognized so the delimiter does not take effect, then kept
    /// as plain word text.
    Escaped,
}

/// One entry of the symbol table.
#[derive(Debug, PartialEq, Eq)]
pub struct Symbol {
    pub spelling: &'static str,
    pub kind: SymbolKind,
}

impl Symbol {
    const fn new(spelling: &'static str, kind: SymbolKind) -> Self {
        Self { spelling, kind }
    }

    /// Keyword-type entries start with a word character. They only match
    /// when neither the preceding nor the following character is a word
    /// character.
    pub fn is_keyword(&self) -> bool {
        self.spelling.chars().next().is_some_and(is_word_char)
    }

    /// Number of characters in the spelling.
    pub fn len(&self) -> usize {
        self.spelling.chars().count()
    }

    /// Spellings are never empty; provided for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.spelling.is_empty()
    }

    /// The `index`-th character of the spelling, if any.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.spelling.chars().nth(index)
    }
}

use SymbolKind::{Escaped, Interpolate, Quote, Token as Tok};

/// The complete symbol table.
pub const SYMBOLS: &[Symbol] = &[
    Symbol::new("{", Tok(TokenKind::OpenBlock)),
    Symbol::new("?{", Tok(TokenKind::OpenBlockLazy)),
    Symbol::new("??{", Tok(TokenKind::OpenBlockFunc)),
    Symbol::new("}", Tok(TokenKind::CloseBlock)),
    Symbol::new("}&", Tok(TokenKind::CloseBlockAsync)),
    Symbol::new("[", Tok(TokenKind::OpenSubscript)),
    Symbol::new("]", Tok(TokenKind::CloseSubscript)),
    Symbol::new("(", Tok(TokenKind::OpenParen)),
    Symbol::new(")", Tok(TokenKind::CloseParen)),
    Symbol::new("\"", Quote('"')),
    Symbol::new("'", Quote('\'')),
    Symbol::new(":", Tok(TokenKind::KeyValSeparator)),
    Symbol::new(":=", Tok(TokenKind::CreateVar)),
    Symbol::new("=", Tok(TokenKind::SetVar)),
    Symbol::new("==", Tok(TokenKind::Equals)),
    Symbol::new("!", Tok(TokenKind::Reverse)),
    Symbol::new("!=", Tok(TokenKind::NotEquals)),
    Symbol::new("?", Tok(TokenKind::QuestionMark)),
    Symbol::new("if", Tok(TokenKind::If)),
    Symbol::new("try", Tok(TokenKind::Try)),
    Symbol::new("`", Interpolate),
    Symbol::new("\\'", Escaped),
    Symbol::new("\\\"", Escaped),
    Symbol::new("\\`", Escaped),
];

/// Look up the entry whose spelling is exactly `s`.
pub fn symbol_from_str(s: &str) -> Option<&'static Symbol> {
    SYMBOLS.iter().find(|symbol| symbol.spelling == s)
}

/// All entries whose spelling starts with `c`, in table order.
pub fn symbols_starting_with(c: char) -> &'static [&'static Symbol] {
    static BY_FIRST_CHAR: OnceLock<FxHashMap<char, Vec<&'static Symbol>>> = OnceLock::new();

    let index = BY_FIRST_CHAR.get_or_init(|| {
        let mut index: FxHashMap<char, Vec<&'static Symbol>> = FxHashMap::default();
        for symbol in SYMBOLS {
            if let Some(first) = symbol.char_at(0) {
                index.entry(first).or_default().push(symbol);
            }
        }
        index
    });

    index.get(&c).map(Vec::as_slice).unwrap_or(&[])
}

/// Whether `c` counts as a word character for keyword boundaries.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
