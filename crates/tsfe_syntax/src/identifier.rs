//! Character classification: identifier shape, whitespace, line breaks.
//!
//! Pure and stateless, as the spec requires — every function here takes a
//! `char` (already decoded from UTF-8/UTF-16 by the scanner) and returns a
//! fact about it, with no access to scanner or parser state.

/// `$` and `_` are identifier-start in every ECMAScript target; beyond that
/// we defer to the `ID_Start` unicode property.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    if c.is_ascii() {
        return c == '$' || c == '_' || c.is_ascii_alphabetic();
    }
    unicode_id_start::is_id_start(c)
}

/// Identifier-continue characters additionally include ASCII digits and the
/// zero-width joiner/non-joiner (U+200C, U+200D), which `ID_Continue` does
/// not cover but ECMA-262 explicitly allows inside identifiers.
#[inline]
pub fn is_identifier_part(c: char) -> bool {
    if c.is_ascii() {
        return c == '$' || c == '_' || c.is_ascii_alphanumeric();
    }
    if c == '\u{200c}' || c == '\u{200d}' {
        return true;
    }
    unicode_id_start::is_id_continue(c)
}

/// ECMA-262 `LineTerminator`: LF, CR, LS (U+2028), PS (U+2029).
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// ECMA-262 `WhiteSpace`, excluding line terminators (those are handled
/// separately so the scanner can set `PrecedingLineBreak`).
#[inline]
pub fn is_whitespace_single_line(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{b}'
            | '\u{c}'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Is `c` whitespace or a line terminator?
#[inline]
pub fn is_whitespace(c: char) -> bool {
    is_whitespace_single_line(c) || is_line_terminator(c)
}

/// Numeric value of `c` as a digit in `base` (2, 8, 10 or 16), or `None` if
/// `c` is not a valid digit in that base.
#[inline]
pub fn digit_value(c: char, base: u32) -> Option<u32> {
    c.to_digit(base)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dollar_and_underscore_start_identifiers() {
        assert!(is_identifier_start('$'));
        assert!(is_identifier_start('_'));
        assert!(is_identifier_start('a'));
        assert!(!is_identifier_start('1'));
    }

    #[test]
    fn digits_continue_but_not_start() {
        assert!(!is_identifier_start('5'));
        assert!(is_identifier_part('5'));
    }

    #[test]
    fn line_terminators() {
        for c in ['\n', '\r', '\u{2028}', '\u{2029}'] {
            assert!(is_line_terminator(c));
        }
        assert!(!is_line_terminator(' '));
    }

    #[test]
    fn zero_width_joiners_continue_identifiers() {
        assert!(is_identifier_part('\u{200c}'));
        assert!(is_identifier_part('\u{200d}'));
    }

    #[test]
    fn digit_value_respects_base() {
        assert_eq!(digit_value('7', 8), Some(7));
        assert_eq!(digit_value('8', 8), None);
        assert_eq!(digit_value('f', 16), Some(15));
        assert_eq!(digit_value('g', 16), None);
    }
}
