use crate::token::TextPosition;

/// Traversal pointer over a borrowed text buffer.
///
/// Tracks the byte offset together with line and column, and caches the
/// character under the cursor (`None` at end of input). The cursor is
/// [`Copy`], but rolling back should go through [`checkpoint`](Self::checkpoint)
/// and [`reset`](Self::reset).
///
/// CR, LF and CRLF each count as a single line break. For CRLF the break
/// is taken on the LF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    buffer: &'a str,
    position: TextPosition,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    pub fn new(buffer: &'a str) -> Self {
        Self {
            buffer,
            position: TextPosition::START,
            current: buffer.chars().next(),
        }
    }

    pub const fn buffer(&self) -> &'a str {
        self.buffer
    }

    pub const fn position(&self) -> TextPosition {
        self.position
    }

    pub const fn offset(&self) -> usize {
        self.position.offset
    }

    /// Character under the cursor, `None` at end of input.
    #[inline]
    pub const fn current(&self) -> Option<char> {
        self.current
    }

    /// Character after the current one.
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.remaining().chars();
        chars.next()?;
        chars.next()
    }

    #[inline]
    pub const fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Unconsumed input.
    pub fn remaining(&self) -> &'a str {
        &self.buffer[self.position.offset..]
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buffer[start..end]
    }

    /// Move one character forward. Does nothing at end of input.
    pub fn advance(&mut self) {
        let Some(ch) = self.current else {
            return;
        };

        self.position.offset += ch.len_utf8();
        let next = self.buffer[self.position.offset..].chars().next();

        match ch {
            '\n' => self.break_line(),
            // CR followed by LF: the LF carries the break
            '\r' if next != Some('\n') => self.break_line(),
            _ => self.position.column += 1,
        }

        self.current = next;
        debug_assert_eq!(
            self.current.is_none(),
            self.position.offset == self.buffer.len(),
            "eof flag out of sync with offset"
        );
    }

    /// Advance until the cursor sits at `offset`.
    ///
    /// `offset` must lie ahead of the cursor, inside the buffer, on a char
    /// boundary.
    pub fn advance_to(&mut self, offset: usize) {
        debug_assert!(
            offset >= self.position.offset && offset <= self.buffer.len(),
            "advance target {offset} outside {}..={}",
            self.position.offset,
            self.buffer.len()
        );
        debug_assert!(
            self.buffer.is_char_boundary(offset),
            "advance target {offset} is not a char boundary"
        );

        while self.position.offset < offset && self.current.is_some() {
            self.advance();
        }
    }

    /// Whether the current character is `ch`. Never consumes.
    #[inline]
    pub fn match_char(&self, ch: char) -> bool {
        self.current == Some(ch)
    }

    /// Whether the remaining input starts with `text`. Never consumes.
    pub fn match_text(&self, text: &str) -> bool {
        self.remaining().starts_with(text)
    }

    /// Like [`match_text`](Self::match_text), ignoring ASCII case.
    pub fn match_text_ignore_ascii_case(&self, text: &str) -> bool {
        self.remaining()
            .as_bytes()
            .get(..text.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(text.as_bytes()))
    }

    pub const fn checkpoint(&self) -> TextPosition {
        self.position
    }

    /// Restore a position previously returned by [`checkpoint`](Self::checkpoint).
    pub fn reset(&mut self, position: TextPosition) {
        debug_assert!(
            position.offset <= self.buffer.len(),
            "reset offset {} outside buffer of {} bytes",
            position.offset,
            self.buffer.len()
        );
        debug_assert!(
            self.buffer.is_char_boundary(position.offset),
            "reset offset {} is not a char boundary",
            position.offset
        );

        self.position = position;
        self.current = self.buffer[position.offset..].chars().next();
    }

    const fn break_line(&mut self) {
        self.position.line += 1;
        self.position.column = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_character() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(cursor.position(), TextPosition::START);
        assert!(!cursor.is_eof());
    }

    #[test]
    fn empty_buffer_is_eof() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn advance_saturates_at_eof() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        assert!(cursor.is_eof());
        let at_end = cursor.checkpoint();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.checkpoint(), at_end);
    }

    #[test]
    fn multibyte_characters_advance_by_width() {
        let mut cursor = Cursor::new("é中x");
        cursor.advance();
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.current(), Some('中'));
        cursor.advance();
        assert_eq!(cursor.offset(), 5);
        assert_eq!(cursor.position().column, 3);
        assert_eq!(cursor.current(), Some('x'));
    }

    #[test]
    fn crlf_is_one_line_break() {
        let mut cursor = Cursor::new("a\r\nb");
        cursor.advance();
        cursor.advance();
        // between CR and LF: still on line 1
        assert_eq!(cursor.position().line, 1);
        cursor.advance();
        assert_eq!(cursor.position(), TextPosition::new(3, 2, 1));
        assert_eq!(cursor.current(), Some('b'));
    }

    #[test]
    fn lone_cr_breaks_line() {
        let mut cursor = Cursor::new("a\rb");
        cursor.advance_to(2);
        assert_eq!(cursor.position(), TextPosition::new(2, 2, 1));
    }

    #[test]
    fn reset_restores_current_character() {
        let mut cursor = Cursor::new("xyz");
        let start = cursor.checkpoint();
        cursor.advance_to(3);
        assert!(cursor.is_eof());
        cursor.reset(start);
        assert_eq!(cursor.current(), Some('x'));
        assert_eq!(cursor.position(), start);
    }

    #[test]
    fn match_text_needs_whole_literal() {
        let cursor = Cursor::new("ab");
        assert!(cursor.match_text("ab"));
        assert!(!cursor.match_text("abc"));
        assert!(cursor.match_char('a'));
        assert!(!cursor.match_char('b'));
    }

    #[test]
    fn match_text_ignore_case() {
        let cursor = Cursor::new("SELECT *");
        assert!(cursor.match_text_ignore_ascii_case("select"));
        assert!(!cursor.match_text_ignore_ascii_case("selects *x"));
    }

    #[test]
    fn peek_looks_one_past_current() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(Cursor::new("a").peek(), None);
        assert_eq!(Cursor::new("").peek(), None);
    }
}
