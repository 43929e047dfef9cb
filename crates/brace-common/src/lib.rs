//! Shared types for the Brace tokenizer: spans, tokens, the symbol table and
//! lexer errors.

pub mod error;
pub mod span;
pub mod symbol;
pub mod token;

pub use error::{LexError, LexErrorKind};
pub use span::Span;
pub use symbol::{Symbol, SymbolKind, SYMBOLS};
pub use token::{Token, TokenKind};
