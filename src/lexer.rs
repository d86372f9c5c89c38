use std::fmt;

use crate::chars;
use crate::scanner::{QuoteFailure, Scanner};
use crate::token::{TextPosition, Token};

/// Primitive token shapes produced by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of spaces, tabs and other horizontal whitespace.
    WhiteSpace,
    /// Run of line terminators.
    NewLine,
    Identifier,
    /// Decimal number (`12`, `3.25`).
    Number,
    /// Quoted string, delimiters and escapes included.
    String,
    /// Any other single character.
    Symbol,
}

impl TokenKind {
    /// Whitespace and newlines.
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::WhiteSpace | Self::NewLine)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WhiteSpace => "whitespace",
            Self::NewLine => "newline",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Quoted string without a closing quote.
    UnterminatedString,
    /// Backslash followed by something other than a legal escape.
    InvalidEscape,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => {
                write!(f, "unterminated quoted string")
            }
            Self::InvalidEscape => {
                write!(f, "invalid escape sequence")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", position.line, position.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Opening quote for unterminated strings, the backslash for bad escapes.
    pub position: TextPosition,
}

/// Lexer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOptions {
    /// Emit whitespace and newline tokens. When set, the token texts
    /// concatenate back to the input.
    pub keep_trivia: bool,
}

impl LexOptions {
    #[must_use]
    pub const fn keep_trivia(mut self, keep: bool) -> Self {
        self.keep_trivia = keep;
        self
    }
}

impl Default for LexOptions {
    fn default() -> Self {
        Self { keep_trivia: true }
    }
}

/// Split `input` into primitive tokens, trivia included.
///
/// # Errors
///
/// Returns `LexError` on unterminated quoted strings or malformed escapes.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_, TokenKind>>, LexError> {
    tokenize_with(input, &LexOptions::default())
}

/// [`tokenize`] with explicit options.
///
/// # Errors
///
/// Returns `LexError` on unterminated quoted strings or malformed escapes.
pub fn tokenize_with<'a>(
    input: &'a str,
    options: &LexOptions,
) -> Result<Vec<Token<'a, TokenKind>>, LexError> {
    Lexer::new(input, options).tokenize()
}

struct Lexer<'a, 'o> {
    scanner: Scanner<'a>,
    options: &'o LexOptions,
}

impl<'a, 'o> Lexer<'a, 'o> {
    fn new(input: &'a str, options: &'o LexOptions) -> Self {
        Self {
            scanner: Scanner::new(input),
            options,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token<'a, TokenKind>>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.scanner.cursor().current() {
            let token = self.next_token(ch)?;
            tracing::trace!(
                kind = %token.kind(),
                at = %token.start(),
                text = token.text(),
                "token"
            );
            if self.options.keep_trivia || !token.kind().is_trivia() {
                tokens.push(token);
            }
        }

        tracing::debug!(
            count = tokens.len(),
            bytes = self.scanner.buffer().len(),
            "tokenized input"
        );
        Ok(tokens)
    }

    fn next_token(&mut self, ch: char) -> Result<Token<'a, TokenKind>, LexError> {
        if ch == '"' || ch == '\'' {
            return self.read_string();
        }

        let scanner = &mut self.scanner;
        if let Some(token) = scanner.read_while(chars::is_white_space) {
            return Ok(token.with_kind(TokenKind::WhiteSpace));
        }
        if let Some(token) = scanner.read_while(chars::is_new_line) {
            return Ok(token.with_kind(TokenKind::NewLine));
        }
        if let Some(token) = scanner.read_identifier() {
            return Ok(token.with_kind(TokenKind::Identifier));
        }
        if let Some(token) = scanner.read_decimal() {
            return Ok(token.with_kind(TokenKind::Number));
        }

        // anything else is a one-character symbol
        let start = scanner.cursor().checkpoint();
        scanner.cursor_mut().advance();
        let end = scanner.cursor().checkpoint();
        Ok(Token::new(scanner.buffer(), start, end).with_kind(TokenKind::Symbol))
    }

    fn read_string(&mut self) -> Result<Token<'a, TokenKind>, LexError> {
        let start = self.scanner.cursor().checkpoint();
        match self.scanner.scan_quoted(None) {
            Ok(token) => Ok(token.with_kind(TokenKind::String)),
            Err(QuoteFailure::InvalidEscape(position)) => Err(LexError {
                kind: LexErrorKind::InvalidEscape,
                position,
            }),
            Err(QuoteFailure::Unterminated | QuoteFailure::NoOpeningQuote) => Err(LexError {
                kind: LexErrorKind::UnterminatedString,
                position: start,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .expect("should tokenize")
            .iter()
            .map(|t| *t.kind())
            .collect()
    }

    #[test]
    fn simple_assignment() {
        assert_eq!(
            kinds("x = 1.5"),
            vec![
                TokenKind::Identifier,
                TokenKind::WhiteSpace,
                TokenKind::Symbol,
                TokenKind::WhiteSpace,
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn quoted_string() {
        let tokens = tokenize(r#"say "hi \"there\"""#).expect("should tokenize");
        assert_eq!(tokens.len(), 3);
        assert_eq!(*tokens[2].kind(), TokenKind::String);
        assert_eq!(tokens[2].text(), r#""hi \"there\"""#);
    }

    #[test]
    fn unterminated_quote() {
        let err = tokenize("a \"unclosed").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.position, TextPosition::new(2, 1, 3));
    }

    #[test]
    fn invalid_escape_points_at_backslash() {
        let err = tokenize("\n'ab\\q'").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidEscape);
        assert_eq!(err.position, TextPosition::new(4, 2, 4));
        assert_eq!(err.to_string(), "invalid escape sequence at line 2, column 4");
    }

    #[test]
    fn dangling_dot_becomes_symbol() {
        assert_eq!(kinds("7."), vec![TokenKind::Number, TokenKind::Symbol]);
    }

    #[test]
    fn identifier_with_digits() {
        let tokens = tokenize("x1 1x").expect("should tokenize");
        let texts: Vec<_> = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(texts, ["x1", " ", "1", "x"]);
    }

    #[test]
    fn drop_trivia() {
        let options = LexOptions::default().keep_trivia(false);
        let tokens = tokenize_with("a \r\n b", &options).expect("should tokenize");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| *t.kind() == TokenKind::Identifier));
        assert_eq!(tokens[1].start(), TextPosition::new(5, 2, 2));
    }
}
