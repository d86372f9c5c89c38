use std::fmt;

/// Location in a text buffer.
///
/// `offset` is a byte offset that always lies on a char boundary.
/// `line` and `column` are 1-based; columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextPosition {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl TextPosition {
    /// Position of the first character of any buffer.
    pub const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };

    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl Default for TextPosition {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A recognized piece of the buffer.
///
/// The text is never copied: [`Token::text`] slices the borrowed buffer
/// between `start` and `end`. Scanner reads produce untagged tokens
/// (`K = ()`); callers label them with [`Token::with_kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a, K = ()> {
    kind: K,
    buffer: &'a str,
    start: TextPosition,
    end: TextPosition,
}

impl<'a> Token<'a> {
    pub(crate) fn new(buffer: &'a str, start: TextPosition, end: TextPosition) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "token start {} past end {}",
            start.offset,
            end.offset
        );
        debug_assert!(end.offset <= buffer.len(), "token end outside buffer");
        Self {
            kind: (),
            buffer,
            start,
            end,
        }
    }
}

impl<'a, K> Token<'a, K> {
    /// Relabel the span, keeping its location.
    pub fn with_kind<T>(self, kind: T) -> Token<'a, T> {
        Token {
            kind,
            buffer: self.buffer,
            start: self.start,
            end: self.end,
        }
    }

    pub const fn kind(&self) -> &K {
        &self.kind
    }

    /// Whole buffer the span was cut from.
    pub const fn buffer(&self) -> &'a str {
        self.buffer
    }

    pub const fn start(&self) -> TextPosition {
        self.start
    }

    pub const fn end(&self) -> TextPosition {
        self.end
    }

    /// Source text covered by the span, delimiters and escapes included.
    pub fn text(&self) -> &'a str {
        &self.buffer[self.start.offset..self.end.offset]
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
