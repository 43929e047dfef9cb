// Brace lexer -- tokenizer for the Brace programming language.

mod config;
mod cursor;
mod string;
mod walk;

use brace_common::{LexError, LexErrorKind, Symbol, SymbolKind, Token};
use tracing::{debug, trace};

pub use config::LexerConfig;
use cursor::Cursor;
use string::{OpenString, Segment, StringEvent};
use walk::{Step, Walk};

/// The Brace lexer. Converts source lines into a flat stream of tokens.
///
/// Lines are fed one at a time with [`Lexer::scan_line`]; tokens accumulate
/// across calls in call order. Token spans are character offsets into the
/// line they came from. Nothing but the accumulated tokens survives a call:
/// a string or interpolation left open at end of line is an error.
#[derive(Debug, Default)]
pub struct Lexer {
    config: LexerConfig,
    tokens: Vec<Token>,
}

impl Lexer {
    /// Create a lexer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LexerConfig) -> Self {
        Self {
            config,
            tokens: Vec::new(),
        }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Tokenize one line and append its tokens.
    ///
    /// `line` is the 1-based line number attached to any error. On error
    /// nothing from this line is appended; tokens from earlier calls are
    /// left untouched.
    pub fn scan_line(&mut self, text: &str, line: u32) -> Result<(), LexError> {
        debug!(line, chars = text.chars().count(), "scanning line");
        let tokens = tokenize_segment(text, &self.config).map_err(|err| err.at_line(line))?;
        trace!(line, count = tokens.len(), "line scanned");
        self.tokens.extend(tokens);
        Ok(())
    }

    /// All tokens produced so far.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Convenience: tokenize `lines` with a fresh default lexer, numbering them
/// from 1.
pub fn tokenize_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new();
    for (index, line) in lines.into_iter().enumerate() {
        lexer.scan_line(line, index as u32 + 1)?;
    }
    Ok(lexer.into_tokens())
}

/// Tokenize a single line or interpolation segment in isolation.
///
/// Spans and error offsets are relative to the start of `text`; callers
/// embedding the result elsewhere translate them.
pub fn tokenize_segment(text: &str, config: &LexerConfig) -> Result<Vec<Token>, LexError> {
    LineScanner::new(text, config).run()
}

/// A run of unmatched characters waiting for a delimiter.
#[derive(Debug)]
struct PendingWord {
    start: u32,
    text: String,
}

/// Scan state for one line. Dropped when the line is done.
struct LineScanner<'src, 'cfg> {
    cursor: Cursor<'src>,
    config: &'cfg LexerConfig,
    walk: Walk,
    word: Option<PendingWord>,
    string: Option<OpenString>,
    tokens: Vec<Token>,
}

impl<'src, 'cfg> LineScanner<'src, 'cfg> {
    fn new(text: &'src str, config: &'cfg LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(text),
            config,
            walk: Walk::Idle,
            word: None,
            string: None,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.cursor.peek() {
            if self.string.is_some() {
                self.scan_string()?;
                continue;
            }

            if self.walk.is_idle() && c.is_whitespace() {
                self.flush_word();
                self.cursor.advance();
                continue;
            }

            let pos = self.cursor.pos();
            let (walk, step) = std::mem::take(&mut self.walk).feed(c, self.cursor.prev(), pos);
            self.walk = walk;
            self.apply(step)?;
        }

        let end = self.cursor.pos();
        if let Some(step) = std::mem::take(&mut self.walk).finish(end) {
            self.apply(step)?;
        }
        if let Some(string) = self.string.take() {
            return Err(string.unterminated());
        }
        self.flush_word();

        debug_assert!(self
            .tokens
            .windows(2)
            .all(|pair| pair[0].span.start <= pair[1].span.start));
        Ok(self.tokens)
    }

    // ── Symbols and words ────────────────────────────────────────────────

    fn apply(&mut self, step: Step) -> Result<(), LexError> {
        match step {
            Step::Pending => {
                self.cursor.advance();
            }
            Step::Matched {
                symbol,
                start,
                end,
                consumed,
            } => {
                if consumed {
                    self.cursor.advance();
                }
                self.emit_symbol(symbol, start, end)?;
            }
            Step::Unknown {
                text,
                start,
                consumed,
            } => {
                if consumed {
                    self.cursor.advance();
                }
                self.push_word(&text, start);
            }
        }
        Ok(())
    }

    fn emit_symbol(&mut self, symbol: &'static Symbol, start: u32, end: u32) -> Result<(), LexError> {
        match symbol.kind {
            SymbolKind::Token(kind) => {
                self.flush_word();
                trace!(?kind, start, end, "symbol");
                self.tokens.push(Token::new(kind, start, end));
            }
            SymbolKind::Quote(delimiter) => {
                self.flush_word();
                trace!(start, ?delimiter, "string opened");
                self.string = Some(OpenString::new(delimiter, start, self.tokens.len()));
            }
            SymbolKind::Interpolate => {
                return Err(LexError::new(LexErrorKind::NotInString, start));
            }
            SymbolKind::Escaped => self.push_word(symbol.spelling, start),
        }
        Ok(())
    }

    fn push_word(&mut self, text: &str, start: u32) {
        match &mut self.word {
            Some(word) => {
                debug_assert_eq!(word.start + word.text.chars().count() as u32, start);
                word.text.push_str(text);
            }
            None => {
                self.word = Some(PendingWord {
                    start,
                    text: text.to_string(),
                });
            }
        }
    }

    fn flush_word(&mut self) {
        if let Some(PendingWord { start, text }) = self.word.take() {
            let end = start + text.chars().count() as u32;
            trace!(start, end, %text, "word");
            self.tokens.push(Token::word(text, start, end));
        }
    }

    // ── Strings and interpolation ────────────────────────────────────────

    fn scan_string(&mut self) -> Result<(), LexError> {
        let Some(string) = self.string.as_mut() else {
            return Ok(());
        };

        let pos = self.cursor.pos();
        match string.scan(&mut self.cursor, self.config)? {
            StringEvent::Continue => {}
            StringEvent::Closed => {
                if let Some(string) = self.string.take() {
                    trace!(start = string.start, end = pos + 1, "string closed");
                    let index = string.insert_at;
                    self.tokens.insert(index, string.into_token(pos + 1));
                }
            }
            StringEvent::SegmentClosed(segment) => self.interpolate(segment)?,
        }
        Ok(())
    }

    /// Tokenize a closed interpolation segment with a fresh scanner and
    /// splice its tokens in, translated to line coordinates.
    fn interpolate(&mut self, segment: Segment) -> Result<(), LexError> {
        let offset = segment.text_offset();
        debug!(offset, raw = %segment.raw, "tokenizing interpolation");
        let tokens = tokenize_segment(&segment.raw, self.config).map_err(|err| err.shifted(offset))?;
        self.tokens
            .extend(tokens.into_iter().map(|token| token.shifted(offset)));
        Ok(())
    }
}
