use crate::chars;
use crate::cursor::Cursor;
use crate::token::{TextPosition, Token};

/// Why a quoted-string read did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteFailure {
    /// The cursor is not on an accepted quote character.
    NoOpeningQuote,
    /// No closing quote before end of input.
    Unterminated,
    /// Malformed escape; the position is the backslash.
    InvalidEscape(TextPosition),
}

/// Read operations over a single buffer.
///
/// Every read either consumes a whole match and returns its span, or
/// returns `None`/`false` and leaves the cursor where it was before the
/// call. The one exception is [`read_decimal`](Self::read_decimal), which
/// keeps the integer part when a trailing `.` has no digits after it.
///
/// # Example
///
/// ```
/// use textscan_rs::Scanner;
///
/// let mut scanner = Scanner::new("price = 12.50");
/// let name = scanner.read_identifier().unwrap();
/// assert_eq!(name.text(), "price");
/// assert!(scanner.skip_white_space());
/// assert!(scanner.read_char('=').is_some());
/// scanner.skip_white_space();
/// assert_eq!(scanner.read_decimal().unwrap().text(), "12.50");
/// assert!(scanner.cursor().is_eof());
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    buffer: &'a str,
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(buffer: &'a str) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(buffer),
        }
    }

    pub const fn buffer(&self) -> &'a str {
        self.buffer
    }

    pub const fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Direct cursor access for callers that compose their own reads.
    pub const fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    /// Skip spaces and tabs (see [`chars::is_white_space`]).
    /// Returns `false` without moving when nothing matched.
    pub fn skip_white_space(&mut self) -> bool {
        self.skip_while(chars::is_white_space)
    }

    /// Skip whitespace and line terminators.
    /// Returns `false` without moving when nothing matched.
    pub fn skip_white_space_or_new_line(&mut self) -> bool {
        self.skip_while(chars::is_white_space_or_new_line)
    }

    /// Maximal run of characters satisfying `predicate`, at least one.
    pub fn read_while(&mut self, predicate: impl Fn(char) -> bool) -> Option<Token<'a>> {
        let start = self.cursor.checkpoint();
        self.skip_while(predicate).then(|| self.token_from(start))
    }

    /// One character satisfying `first`, then a maximal run of `other`.
    pub fn read_first_then_others(
        &mut self,
        first: impl Fn(char) -> bool,
        other: impl Fn(char) -> bool,
    ) -> Option<Token<'a>> {
        let start = self.cursor.checkpoint();
        if !self.cursor.current().is_some_and(first) {
            return None;
        }
        self.cursor.advance();
        self.skip_while(other);
        Some(self.token_from(start))
    }

    /// Identifier shape: [`chars::is_identifier_start`] followed by any
    /// number of [`chars::is_identifier_part`].
    pub fn read_identifier(&mut self) -> Option<Token<'a>> {
        self.read_first_then_others(chars::is_identifier_start, chars::is_identifier_part)
    }

    /// Exactly the character `expected`.
    pub fn read_char(&mut self, expected: char) -> Option<Token<'a>> {
        if !self.cursor.match_char(expected) {
            return None;
        }
        let start = self.cursor.checkpoint();
        self.cursor.advance();
        Some(self.token_from(start))
    }

    /// The whole of `literal` or nothing. An empty literal never matches.
    pub fn read_text(&mut self, literal: &str) -> Option<Token<'a>> {
        if literal.is_empty() || !self.cursor.match_text(literal) {
            return None;
        }
        Some(self.consume_bytes(literal.len()))
    }

    /// [`read_text`](Self::read_text) ignoring ASCII case. The span keeps
    /// the spelling found in the buffer.
    pub fn read_text_ignore_ascii_case(&mut self, literal: &str) -> Option<Token<'a>> {
        if literal.is_empty() || !self.cursor.match_text_ignore_ascii_case(literal) {
            return None;
        }
        Some(self.consume_bytes(literal.len()))
    }

    /// One or more ASCII digits.
    pub fn read_integer(&mut self) -> Option<Token<'a>> {
        self.read_while(chars::is_decimal_digit)
    }

    /// Digits with an optional `.digits` fraction. No sign, no exponent.
    ///
    /// A `.` without a digit after it is left in place and the read
    /// succeeds with the integer part only.
    pub fn read_decimal(&mut self) -> Option<Token<'a>> {
        let start = self.cursor.checkpoint();
        if !self.skip_while(chars::is_decimal_digit) {
            return None;
        }

        let before_fraction = self.cursor.checkpoint();
        if self.cursor.match_char('.') {
            self.cursor.advance();
            if !self.skip_while(chars::is_decimal_digit) {
                self.cursor.reset(before_fraction);
            }
        }

        Some(self.token_from(start))
    }

    /// Maximal run of anything but whitespace. Line terminators are
    /// included in the run.
    pub fn read_non_white_space(&mut self) -> Option<Token<'a>> {
        self.read_while(|ch| !chars::is_white_space(ch))
    }

    /// Maximal run of anything but whitespace and line terminators.
    pub fn read_non_white_space_or_new_line(&mut self) -> Option<Token<'a>> {
        self.read_while(|ch| !chars::is_white_space_or_new_line(ch))
    }

    /// String delimited by `'` or `"`.
    ///
    /// The span covers both delimiters and keeps escapes as written;
    /// escapes are validated, never decoded. Accepted escapes are
    /// `\0 \' \" \\ \b \f \n \r \t \v`, `\u` with four hex digits and
    /// `\x` with two. On failure the cursor stays on the opening quote.
    pub fn read_quoted_string(&mut self) -> Option<Token<'a>> {
        self.scan_quoted(None).ok()
    }

    /// [`read_quoted_string`](Self::read_quoted_string) restricted to `'`.
    pub fn read_single_quoted_string(&mut self) -> Option<Token<'a>> {
        self.scan_quoted(Some('\'')).ok()
    }

    /// [`read_quoted_string`](Self::read_quoted_string) restricted to `"`.
    pub fn read_double_quoted_string(&mut self) -> Option<Token<'a>> {
        self.scan_quoted(Some('"')).ok()
    }

    /// Quoted-string engine shared by the public reads and the lexer.
    ///
    /// `expected` pins the quote character; `None` accepts either.
    pub(crate) fn scan_quoted(
        &mut self,
        expected: Option<char>,
    ) -> Result<Token<'a>, QuoteFailure> {
        let quote = match (self.cursor.current(), expected) {
            (Some(q @ ('\'' | '"')), None) => q,
            (Some(q), Some(e)) if q == e => q,
            _ => return Err(QuoteFailure::NoOpeningQuote),
        };

        let start = self.cursor.checkpoint();
        let body_start = start.offset + 1;
        let body = &self.buffer.as_bytes()[body_start..];

        let needle = if quote == '"' { b'"' } else { b'\'' };

        // Lookahead only: the cursor has not moved yet.
        let Some(close) = memchr::memchr(needle, body) else {
            return Err(QuoteFailure::Unterminated);
        };

        if memchr::memchr(b'\\', &body[..close]).is_none() {
            self.cursor.advance_to(body_start + close + 1);
            return Ok(self.token_from(start));
        }

        match self.walk_escaped(quote) {
            Ok(()) => Ok(self.token_from(start)),
            Err(failure) => {
                self.cursor.reset(start);
                Err(failure)
            }
        }
    }

    /// Slow path: character walk from the opening quote with escape checks.
    fn walk_escaped(&mut self, quote: char) -> Result<(), QuoteFailure> {
        self.cursor.advance();
        loop {
            match self.cursor.current() {
                None => return Err(QuoteFailure::Unterminated),
                Some(ch) if ch == quote => {
                    self.cursor.advance();
                    return Ok(());
                }
                Some('\\') => {
                    let escape = self.cursor.checkpoint();
                    self.cursor.advance();
                    if !self.skip_escape_body() {
                        return Err(QuoteFailure::InvalidEscape(escape));
                    }
                }
                Some(_) => self.cursor.advance(),
            }
        }
    }

    /// Consume what follows a backslash. `false` when it is not a legal escape.
    fn skip_escape_body(&mut self) -> bool {
        let hex_digits = match self.cursor.current() {
            Some('0' | '\'' | '"' | '\\' | 'b' | 'f' | 'n' | 'r' | 't' | 'v') => 0,
            Some('u') => 4,
            Some('x') => 2,
            _ => return false,
        };
        self.cursor.advance();

        for _ in 0..hex_digits {
            if !self.cursor.current().is_some_and(chars::is_hex_digit) {
                return false;
            }
            self.cursor.advance();
        }
        true
    }

    fn skip_while(&mut self, predicate: impl Fn(char) -> bool) -> bool {
        let start = self.cursor.offset();
        while self.cursor.current().is_some_and(&predicate) {
            self.cursor.advance();
        }
        self.cursor.offset() > start
    }

    fn consume_bytes(&mut self, len: usize) -> Token<'a> {
        let start = self.cursor.checkpoint();
        self.cursor.advance_to(start.offset + len);
        self.token_from(start)
    }

    fn token_from(&self, start: TextPosition) -> Token<'a> {
        Token::new(self.buffer, start, self.cursor.checkpoint())
    }
}
