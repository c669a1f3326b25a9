//! String, template and escape-sequence scanning.

use tsfe_allocator::{Allocator, String as ArenaString};
use tsfe_syntax::TokenFlags;

/// Scans a single- or double-quoted string literal starting at `quote`'s
/// position. Returns the offset just past the closing quote (or past the
/// last character before a line terminator/EOF, with `UNTERMINATED` set).
pub fn scan_string(source: &str, start: u32) -> (u32, TokenFlags) {
    let bytes = source.as_bytes();
    let quote = bytes[start as usize];
    let mut pos = start as usize + 1;
    let mut flags = TokenFlags::empty();
    while pos < bytes.len() {
        let c = bytes[pos];
        if c == quote {
            pos += 1;
            return (pos as u32, flags);
        }
        if c == b'\n' || c == b'\r' {
            flags.insert(TokenFlags::UNTERMINATED);
            return (pos as u32, flags);
        }
        if c == b'\\' {
            pos += 1;
            if pos >= bytes.len() {
                break;
            }
            scan_escape_flags(source, &mut pos, &mut flags);
            continue;
        }
        pos += source[pos..].chars().next().map(char::len_utf8).unwrap_or(1);
    }
    flags.insert(TokenFlags::UNTERMINATED);
    (pos as u32, flags)
}

/// Scans one template-literal fragment starting just past the opening
/// backtick or `}` of the previous substitution. Returns the end offset,
/// whether it closed with `` ` `` (tail) or `${` (not tail), and flags.
pub fn scan_template_fragment(source: &str, start: u32) -> (u32, bool, TokenFlags) {
    let bytes = source.as_bytes();
    let mut pos = start as usize;
    let mut flags = TokenFlags::empty();
    while pos < bytes.len() {
        let c = bytes[pos];
        if c == b'`' {
            return (pos as u32 + 1, true, flags);
        }
        if c == b'$' && pos + 1 < bytes.len() && bytes[pos + 1] == b'{' {
            return (pos as u32 + 2, false, flags);
        }
        if c == b'\\' {
            pos += 1;
            if pos >= bytes.len() {
                break;
            }
            scan_escape_flags(source, &mut pos, &mut flags);
            continue;
        }
        pos += source[pos..].chars().next().map(char::len_utf8).unwrap_or(1);
    }
    flags.insert(TokenFlags::UNTERMINATED);
    (pos as u32, true, flags)
}

fn scan_escape_flags(source: &str, pos: &mut usize, flags: &mut TokenFlags) {
    let bytes = source.as_bytes();
    let c = bytes[*pos];
    match c {
        b'u' => {
            *pos += 1;
            if bytes.get(*pos) == Some(&b'{') {
                flags.insert(TokenFlags::EXTENDED_UNICODE_ESCAPE);
                *pos += 1;
                while *pos < bytes.len() && bytes[*pos] != b'}' {
                    *pos += 1;
                }
                if *pos < bytes.len() {
                    *pos += 1;
                }
            } else {
                flags.insert(TokenFlags::UNICODE_ESCAPE);
                for _ in 0..4 {
                    if *pos < bytes.len() && bytes[*pos].is_ascii_hexdigit() {
                        *pos += 1;
                    }
                }
            }
        }
        b'x' => {
            *pos += 1;
            for _ in 0..2 {
                if *pos < bytes.len() && bytes[*pos].is_ascii_hexdigit() {
                    *pos += 1;
                }
            }
        }
        b'1'..=b'7' => {
            flags.insert(TokenFlags::CONTAINS_LEGACY_OCTAL_ESCAPE);
            *pos += 1;
        }
        _ => {
            *pos += source[*pos..].chars().next().map(char::len_utf8).unwrap_or(1);
        }
    }
}

/// Unescapes a string/template-fragment raw slice (without surrounding
/// quotes/backticks) into an arena-allocated cooked string. Returns `None`
/// if an invalid escape was found (a lone `\u` without four hex digits,
/// etc.), matching `String.raw` semantics: the cooked value does not exist.
pub fn cook_escapes<'a>(allocator: &'a Allocator, raw: &str) -> Option<ArenaString<'a>> {
    let mut out = std::string::String::with_capacity(raw.len());
    let mut chars = raw.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, esc)) = chars.next() else { return None };
        match esc {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !matches!(chars.peek(), Some((_, '0'..='9'))) => out.push('\0'),
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '\r' => {
                if matches!(chars.peek(), Some((_, '\n'))) {
                    chars.next();
                }
            }
            'x' => {
                let hex = take_hex(&mut chars, 2)?;
                out.push(char::from_u32(hex)?);
            }
            'u' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    let mut value = 0u32;
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, d)) => value = value * 16 + d.to_digit(16)?,
                            None => return None,
                        }
                    }
                    out.push(char::from_u32(value)?);
                } else {
                    let hex = take_hex(&mut chars, 4)?;
                    out.push(char::from_u32(hex)?);
                }
            }
            other => out.push(other),
        }
    }
    Some(ArenaString::from_str_in(&out, allocator))
}

fn take_hex(
    chars: &mut std::iter::Peekable<std::str::CharIndices>,
    count: usize,
) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let (_, d) = chars.next()?;
        value = value * 16 + d.to_digit(16)?;
    }
    Some(value)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scans_simple_string() {
        let (end, flags) = scan_string("\"hello\" rest", 0);
        assert_eq!(end, 7);
        assert!(flags.is_empty());
    }

    #[test]
    fn scans_escaped_quote() {
        let (end, _) = scan_string(r#""a\"b" rest"#, 0);
        assert_eq!(&r#""a\"b""#[..], &r#""a\"b""#[..end as usize]);
    }

    #[test]
    fn unterminated_string_flagged() {
        let (_, flags) = scan_string("\"oops\nmore", 0);
        assert!(flags.contains(TokenFlags::UNTERMINATED));
    }

    #[test]
    fn template_fragment_splits_at_substitution() {
        let (end, tail, _) = scan_template_fragment("abc${x}`", 0);
        assert_eq!(&"abc${x}`"[..end as usize], "abc${");
        assert!(!tail);
    }

    #[test]
    fn cooks_common_escapes() {
        let alloc = Allocator::default();
        let cooked = cook_escapes(&alloc, r"a\nb\tc").unwrap();
        assert_eq!(&*cooked, "a\nb\tc");
    }

    #[test]
    fn cooks_brace_unicode_escape() {
        let alloc = Allocator::default();
        let cooked = cook_escapes(&alloc, r"\u{1F600}").unwrap();
        assert_eq!(cooked.chars().next(), Some('\u{1F600}'));
    }
}
