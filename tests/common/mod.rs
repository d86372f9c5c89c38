#![allow(dead_code)]

use textscan_rs::{Scanner, TextPosition, Token};

/// Run one read on a fresh scanner and return the matched text.
pub fn read_all<'a>(
    input: &'a str,
    read: impl FnOnce(&mut Scanner<'a>) -> Option<Token<'a>>,
) -> Option<&'a str> {
    let mut scanner = Scanner::new(input);
    read(&mut scanner).map(|t| t.text())
}

/// Helper: assert a failed read left the cursor at the very start.
pub fn assert_untouched(scanner: &Scanner<'_>) {
    let cursor = scanner.cursor();
    assert_eq!(
        cursor.position(),
        TextPosition::START,
        "cursor moved to {} (offset {})",
        cursor.position(),
        cursor.offset()
    );
    assert_eq!(cursor.current(), scanner.buffer().chars().next());
}

/// Helper: concatenate token texts.
pub fn concat<K>(tokens: &[Token<'_, K>]) -> String {
    tokens.iter().map(|t| t.text()).collect()
}
