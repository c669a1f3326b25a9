use tsfe_span::Span;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CommentKind {
    Line,
    Block,
}

/// Where a comment attaches relative to the token it was found next to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CommentPosition {
    /// Attaches to the following token: nothing but whitespace/other
    /// leading comments separate it from that token.
    Leading,
    /// Attaches to the preceding token: found on the same line, not
    /// preceded by a newline.
    Trailing,
}

/// A single `//` or `/* */` comment, kept out of the AST proper (it is
/// trivia, per the spec's glossary) but retrievable by source position for
/// tools that want it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Comment {
    pub span: Span,
    pub kind: CommentKind,
    pub position: CommentPosition,
    /// Start position of the token this comment attaches to.
    pub attached_to: u32,
}

impl Comment {
    pub fn new(start: u32, end: u32, kind: CommentKind) -> Self {
        Self { span: Span::new(start, end), kind, position: CommentPosition::Trailing, attached_to: 0 }
    }

    pub fn is_line(&self) -> bool {
        self.kind == CommentKind::Line
    }

    pub fn is_block(&self) -> bool {
        self.kind == CommentKind::Block
    }
}

/// A recognized `//@ts-expect-error` / `//@ts-ignore` single-line directive,
/// collected separately from ordinary comments because the parser consults
/// them when deciding whether to suppress a diagnostic on the following
/// line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CommentDirectiveKind {
    ExpectError,
    Ignore,
}

#[derive(Debug, Clone, Copy)]
pub struct CommentDirective {
    pub span: Span,
    pub kind: CommentDirectiveKind,
}

/// A JSDoc comment attached to the lexically following node. JSDoc parsing
/// itself is a stub: the scanner recognizes `/** ... */` block comments as
/// candidates and records their span, but does not parse tag syntax. A
/// fuller JSDoc subsystem would consume this span and produce a structured
/// comment plus diagnostics into `js_doc_diagnostics`.
#[derive(Debug, Clone, Copy)]
pub struct JsDocComment {
    pub span: Span,
}
