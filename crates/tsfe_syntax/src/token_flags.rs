use bitflags::bitflags;

bitflags! {
    /// Per-token metadata the scanner records alongside a `Kind`, cheap
    /// enough to stash inline on every token rather than re-deriving from
    /// the source text on demand.
    #[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
    pub struct TokenFlags: u16 {
        /// A line terminator occurred between this token and the previous
        /// one (including inside a skipped block comment). Drives
        /// automatic semicolon insertion and restricted productions
        /// (`return`, `throw`, postfix `++`/`--`, arrow-function heads).
        const PRECEDING_LINE_BREAK = 1 << 0;
        /// The token text contains a `\uXXXX` escape, so it cannot be
        /// compared against a keyword spelling by byte-slice equality
        /// alone (`if` is not the identifier `if`... except where the
        /// grammar says an escaped reserved word is still an error).
        const UNICODE_ESCAPE = 1 << 1;
        /// Contains `\u{XXXXXX}` (the ES2015 code-point escape), a
        /// strict-mode-only extension of `UNICODE_ESCAPE`.
        const EXTENDED_UNICODE_ESCAPE = 1 << 2;
        /// Scanning ran off the end of input or hit a line terminator
        /// before a closing quote/backtick/`*/`: the token is a best-effort
        /// recovery, not a well-formed one.
        const UNTERMINATED = 1 << 3;
        /// A legacy octal escape (`\0`–`\7` outside `\0` itself, or a
        /// leading-zero numeric literal like `0755`), forbidden in strict
        /// mode and in template literals.
        const CONTAINS_LEGACY_OCTAL_ESCAPE = 1 << 4;
        /// A numeric separator (`1_000`) appeared in the literal.
        const CONTAINS_SEPARATOR = 1 << 5;
        /// A `BigInt` suffix (`123n`) terminated the numeric literal.
        const BIGINT = 1 << 6;
        /// An invalid escape sequence was scanned and replaced with a
        /// placeholder; the token carries an attached diagnostic.
        const CONTAINS_INVALID_ESCAPE = 1 << 7;
    }
}

impl TokenFlags {
    #[inline]
    pub fn has_preceding_line_break(self) -> bool {
        self.contains(Self::PRECEDING_LINE_BREAK)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert_eq!(TokenFlags::default(), TokenFlags::empty());
    }

    #[test]
    fn preceding_line_break_accessor() {
        let flags = TokenFlags::PRECEDING_LINE_BREAK | TokenFlags::BIGINT;
        assert!(flags.has_preceding_line_break());
        assert!(flags.contains(TokenFlags::BIGINT));
    }
}
