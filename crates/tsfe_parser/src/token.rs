use tsfe_span::Span;
use tsfe_syntax::TokenFlags;

use crate::kind::Kind;

/// One scanned token: its category, position, and the scanner facts that
/// don't fit into `kind` alone (preceding line break, unicode escapes,
/// numeric base hints live on the literal node instead).
#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub kind: Kind,
    pub span: Span,
    pub flags: TokenFlags,
}

impl Token {
    pub fn new(kind: Kind, span: Span) -> Self {
        Self { kind, span, flags: TokenFlags::empty() }
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.span.end
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.has_preceding_line_break()
    }
}

impl Default for Token {
    fn default() -> Self {
        Self { kind: Kind::Undetermined, span: Span::empty(0), flags: TokenFlags::empty() }
    }
}
