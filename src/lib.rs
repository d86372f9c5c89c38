//! Allocation-free text scanning primitives.
//!
//! A [`Cursor`] walks a borrowed `&str` while tracking line and column.
//! A [`Scanner`] builds read operations on top of it (whitespace,
//! identifiers, decimals, literals, quoted strings) that return
//! position-tagged [`Token`] spans sliced from the buffer. A failed read
//! leaves the cursor where it was, so grammar layers can try
//! alternatives without saving state themselves.
//!
//! # Quick start
//!
//! ## Drive the scanner by hand
//!
//! ```
//! use textscan_rs::Scanner;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind {
//!     Key,
//!     Value,
//! }
//!
//! let mut scanner = Scanner::new(r#"greeting: "hi\tthere""#);
//! let key = scanner.read_identifier().unwrap().with_kind(Kind::Key);
//! assert!(scanner.read_char(':').is_some());
//! scanner.skip_white_space();
//! let value = scanner.read_quoted_string().unwrap().with_kind(Kind::Value);
//!
//! assert_eq!(key.text(), "greeting");
//! assert_eq!(*value.kind(), Kind::Value);
//! assert_eq!(value.text(), r#""hi\tthere""#);
//! ```
//!
//! ## Tokenize a whole buffer
//!
//! ```
//! use textscan_rs::{tokenize, TokenKind};
//!
//! let tokens = tokenize("total = 42.5").unwrap();
//! let text: String = tokens.iter().map(|t| t.text()).collect();
//! assert_eq!(text, "total = 42.5");
//! assert_eq!(*tokens[4].kind(), TokenKind::Number);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod scanner;
pub mod token;

pub use cursor::Cursor;
pub use lexer::{LexError, LexErrorKind, LexOptions, TokenKind, tokenize, tokenize_with};
pub use scanner::Scanner;
pub use token::{TextPosition, Token};
