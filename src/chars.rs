//! Character classification used by the scanner.
//!
//! Every predicate is a pure function of one `char`. The accepted sets
//! are part of the public contract: grammar layers built on top of the
//! scanner rely on them staying stable.

/// Horizontal whitespace.
///
/// Accepts tab (U+0009), vertical tab (U+000B), form feed (U+000C),
/// space (U+0020), no-break space (U+00A0), ogham space mark (U+1680),
/// the en quad to hair space block (U+2000..=U+200A), narrow no-break
/// space (U+202F), medium mathematical space (U+205F), ideographic
/// space (U+3000) and the byte order mark (U+FEFF).
///
/// Line terminators are not whitespace here, see [`is_new_line`].
#[inline]
pub const fn is_white_space(ch: char) -> bool {
    if matches!(ch, '\t' | '\u{0B}' | '\u{0C}' | ' ' | '\u{A0}' | '\u{FEFF}') {
        return true;
    }
    // nothing else below U+1680
    (ch as u32) >= 0x1680
        && matches!(
            ch,
            '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
        )
}

/// Line terminator: LF, CR, next line (U+0085), line separator (U+2028)
/// or paragraph separator (U+2029).
#[inline]
pub const fn is_new_line(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Union of [`is_white_space`] and [`is_new_line`].
#[inline]
pub const fn is_white_space_or_new_line(ch: char) -> bool {
    is_new_line(ch) || is_white_space(ch)
}

/// First character of an identifier: `$`, `_`, an ASCII letter, or any
/// non-ASCII alphabetic scalar.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    match ch {
        '$' | '_' | 'a'..='z' | 'A'..='Z' => true,
        c if c.is_ascii() => false,
        c => c.is_alphabetic(),
    }
}

/// Identifier continuation: everything [`is_identifier_start`] accepts
/// plus the ASCII digits.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    is_decimal_digit(ch) || is_identifier_start(ch)
}

/// ASCII `0-9`.
#[inline]
pub const fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// ASCII `0-9`, `a-f`, `A-F`.
#[inline]
pub const fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_space_set() {
        for ch in ['\t', '\u{0B}', '\u{0C}', ' ', '\u{A0}', '\u{2003}', '\u{3000}', '\u{FEFF}'] {
            assert!(is_white_space(ch), "{ch:?} should be whitespace");
        }
        for ch in ['\n', '\r', 'a', '0', '\u{1F}', '\u{200B}'] {
            assert!(!is_white_space(ch), "{ch:?} should not be whitespace");
        }
    }

    #[test]
    fn new_line_is_not_white_space() {
        for ch in ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'] {
            assert!(is_new_line(ch));
            assert!(!is_white_space(ch));
            assert!(is_white_space_or_new_line(ch));
        }
    }

    #[test]
    fn identifier_start_rejects_digits() {
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('Z'));
        assert!(is_identifier_start('_'));
        assert!(is_identifier_start('$'));
        assert!(is_identifier_start('é'));
        assert!(!is_identifier_start('7'));
        assert!(!is_identifier_start('-'));
        assert!(!is_identifier_start(' '));
    }

    #[test]
    fn identifier_part_is_superset_of_start() {
        for ch in ['a', 'Z', '_', '$', 'é', '\u{4E2D}'] {
            assert!(is_identifier_start(ch));
            assert!(is_identifier_part(ch));
        }
        assert!(is_identifier_part('7'));
        assert!(!is_identifier_part('-'));
    }

    #[test]
    fn digits() {
        assert!(is_decimal_digit('0'));
        assert!(is_decimal_digit('9'));
        assert!(!is_decimal_digit('a'));
        assert!(!is_decimal_digit('\u{0663}'));
        assert!(is_hex_digit('f'));
        assert!(is_hex_digit('F'));
        assert!(is_hex_digit('9'));
        assert!(!is_hex_digit('g'));
    }
}
