use serde::Serialize;

/// Character-offset span into a single source line. Start is inclusive, end
/// is exclusive.
///
/// Offsets count `char`s, not bytes, so they line up with what an editor
/// shows as the column of a character. Spans never cross a line boundary;
/// the line itself is carried by whoever fed the line to the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span from character offsets.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start ({start}) must be <= end ({end})");
        Self { start, end }
    }

    /// Length of the span in characters.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span is empty (zero-length).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Move the span right by `offset` characters.
    ///
    /// Used to translate spans produced while tokenizing an interpolation
    /// segment back into the coordinates of the enclosing line.
    pub fn shifted(self, offset: u32) -> Span {
        Span {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Whether `other` lies entirely inside this span.
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
