//! String literal scanning: escape decoding and interpolation segments.

use brace_common::{LexError, LexErrorKind, Token};
use tracing::trace;

use crate::config::LexerConfig;
use crate::cursor::Cursor;

/// Opens and closes an interpolation segment inside an eligible string.
pub const INTERPOLATION_DELIMITER: char = '`';

/// A string literal opened on the current line and not yet closed.
#[derive(Debug)]
pub struct OpenString {
    pub delimiter: char,
    /// Offset of the opening delimiter.
    pub start: u32,
    /// Decoded body so far. Interpolation segments are not part of it.
    pub content: String,
    /// Index in the line's output where the finished token is inserted, so
    /// it precedes the tokens of its interpolation segments.
    pub insert_at: usize,
    pub segment: Option<Segment>,
}

/// Raw text of an interpolation segment being buffered.
#[derive(Debug, PartialEq, Eq)]
pub struct Segment {
    /// Offset of the opening interpolation delimiter.
    pub start: u32,
    pub raw: String,
}

impl Segment {
    /// Offset of the first character of the segment's text.
    pub fn text_offset(&self) -> u32 {
        self.start + 1
    }
}

/// What consuming one character inside a string produced.
#[derive(Debug, PartialEq, Eq)]
pub enum StringEvent {
    Continue,
    /// The closing delimiter was consumed.
    Closed,
    /// An interpolation segment was closed and is ready to be tokenized.
    SegmentClosed(Segment),
}

impl OpenString {
    pub fn new(delimiter: char, start: u32, insert_at: usize) -> Self {
        Self {
            delimiter,
            start,
            content: String::new(),
            insert_at,
            segment: None,
        }
    }

    /// Consume the next character(s) of the string body from `cursor`.
    pub fn scan(&mut self, cursor: &mut Cursor<'_>, config: &LexerConfig) -> Result<StringEvent, LexError> {
        let pos = cursor.pos();
        let Some(c) = cursor.advance() else {
            return Err(self.unterminated());
        };

        if let Some(segment) = self.segment.as_mut() {
            if c != INTERPOLATION_DELIMITER {
                segment.raw.push(c);
                return Ok(StringEvent::Continue);
            }
            trace!(start = segment.start, end = pos, "interpolation closed");
            return Ok(self
                .segment
                .take()
                .map_or(StringEvent::Continue, StringEvent::SegmentClosed));
        }

        match c {
            '\\' => {
                // Unknown escapes drop the backslash and keep the character.
                if let Some(decoded) = cursor.peek().and_then(decode_escape) {
                    cursor.advance();
                    self.content.push(decoded);
                }
                Ok(StringEvent::Continue)
            }
            c if c == self.delimiter => Ok(StringEvent::Closed),
            INTERPOLATION_DELIMITER => {
                if !config.interpolates_in(self.delimiter) {
                    let kind = LexErrorKind::NotInInterpolationString {
                        delimiter: self.delimiter,
                    };
                    return Err(LexError::new(kind, pos));
                }
                trace!(start = pos, "interpolation opened");
                self.segment = Some(Segment {
                    start: pos,
                    raw: String::new(),
                });
                Ok(StringEvent::Continue)
            }
            c => {
                self.content.push(c);
                Ok(StringEvent::Continue)
            }
        }
    }

    /// The error for a line that ends while this string is still open.
    pub fn unterminated(&self) -> LexError {
        match &self.segment {
            Some(segment) => LexError::new(LexErrorKind::InterpolationNotEnded, segment.start),
            None => LexError::new(LexErrorKind::StringNotEnded, self.start),
        }
    }

    /// The finished `String` token; `end` is one past the closing delimiter.
    pub fn into_token(self, end: u32) -> Token {
        Token::string(self.content, self.start, end)
    }
}

/// Decode the character following a backslash inside a string.
pub fn decode_escape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '`' => Some('`'),
        _ => None,
    }
}
