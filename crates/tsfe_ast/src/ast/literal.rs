use tsfe_allocator::String;
use tsfe_span::{GetSpan, Span};
use tsfe_syntax::NumberBase;

#[derive(Debug, Clone, Copy)]
pub struct BooleanLiteral {
    pub span: Span,
    pub value: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct NullLiteral {
    pub span: Span,
}

/// `value` is the cooked numeric text (decimal rendering of the literal,
/// separators stripped); `raw` is the exact source slice so printers can
/// reproduce `1_000` rather than `1000`.
#[derive(Debug, Clone, Copy)]
pub struct NumericLiteral<'a> {
    pub span: Span,
    pub value: f64,
    pub raw: &'a str,
    pub base: NumberBase,
}

#[derive(Debug, Clone, Copy)]
pub struct BigIntLiteral<'a> {
    pub span: Span,
    pub raw: &'a str,
    pub base: NumberBase,
}

#[derive(Debug, Clone)]
pub struct StringLiteral<'a> {
    pub span: Span,
    pub value: String<'a>,
    pub raw: &'a str,
}

#[derive(Debug, Clone)]
pub struct RegExpLiteral<'a> {
    pub span: Span,
    pub pattern: &'a str,
    pub flags: &'a str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TemplateElementTail {
    /// No further substitution follows: either `` `text` `` (no
    /// substitutions at all) or `` }text` `` (closes the last one).
    Tail,
    /// A `${` substitution follows.
    NotTail,
}

/// One literal run of a template literal, between two `${ }` substitutions
/// (or between backtick and the first/last substitution).
#[derive(Debug, Clone)]
pub struct TemplateElement<'a> {
    pub span: Span,
    /// `None` when the raw text contained an invalid escape: a cooked value
    /// cannot be produced, matching `String.raw` semantics for tagged
    /// templates.
    pub cooked: Option<String<'a>>,
    pub raw: &'a str,
    pub tail: TemplateElementTail,
}

macro_rules! impl_span {
    ($($ty:ident $(<$lt:lifetime>)? ),* $(,)?) => {
        $(
            impl$(<$lt>)? GetSpan for $ty$(<$lt>)? {
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

impl_span!(
    BooleanLiteral,
    NullLiteral,
    NumericLiteral<'a>,
    BigIntLiteral<'a>,
    StringLiteral<'a>,
    RegExpLiteral<'a>,
    TemplateElement<'a>,
);
