/// Character-level iterator over a single source line.
///
/// Positions are character offsets into the line, matching the offsets
/// carried by [`brace_common::Span`]. The cursor also remembers the last
/// consumed character, which the symbol matcher needs for keyword
/// boundaries.
pub struct Cursor<'src> {
    chars: std::str::Chars<'src>,
    pos: u32,
    prev: Option<char>,
}

impl<'src> Cursor<'src> {
    /// Create a new cursor at the start of the line.
    pub fn new(line: &'src str) -> Self {
        Self {
            chars: line.chars(),
            pos: 0,
            prev: None,
        }
    }

    /// Look at the current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Consume the current character and advance the position.
    ///
    /// Returns the consumed character, or `None` at end of line.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos += 1;
        self.prev = Some(c);
        Some(c)
    }

    /// Current character position in the line.
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// The most recently consumed character, `None` at start of line.
    pub fn prev(&self) -> Option<char> {
        self.prev
    }

    /// Whether there are no more characters to consume.
    pub fn is_eof(&self) -> bool {
        self.peek().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cursor_starts_at_zero() {
        let cursor = Cursor::new("hello");
        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.prev(), None);
        assert!(!cursor.is_eof());
    }

    #[test]
    fn peek_does_not_advance() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn advance_moves_position_and_remembers_prev() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.prev(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), Some('c'));
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.prev(), Some('c'));
        assert!(cursor.is_eof());
    }

    #[test]
    fn positions_count_chars_not_bytes() {
        // U+00E9 (e with accent) is 2 bytes in UTF-8 but one position.
        let mut cursor = Cursor::new("\u{00E9}a");
        assert_eq!(cursor.advance(), Some('\u{00E9}'));
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn empty_line() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
    }
}
