use tsfe_span::{GetSpan, Span};

/// A plain identifier reference, the most common leaf node in the tree.
/// `name` is the post-escape-decoding text (so `a` and `a` produce the
/// same `name`), matching the classifier's contract in 4.1.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierReference<'a> {
    pub span: Span,
    pub name: &'a str,
}

/// An identifier used as a declared name (binding target), kept as a
/// distinct type from [`IdentifierReference`] so grammar positions that
/// only accept a binding name are statically distinguishable.
#[derive(Debug, Clone, Copy)]
pub struct BindingIdentifier<'a> {
    pub span: Span,
    pub name: &'a str,
}

/// An identifier used in a position where any name is legal, including
/// reserved words (property names, import/export specifiers, JSX names).
#[derive(Debug, Clone, Copy)]
pub struct IdentifierName<'a> {
    pub span: Span,
    pub name: &'a str,
}

/// `#name` — a private class field/method name, legal only as the right
/// operand of `.` and never after `?.`.
#[derive(Debug, Clone, Copy)]
pub struct PrivateIdentifier<'a> {
    pub span: Span,
    pub name: &'a str,
}

/// `this` used as a binding-free reference.
#[derive(Debug, Clone, Copy)]
pub struct ThisExpression {
    pub span: Span,
}

/// `super` used as the object of a property access or call.
#[derive(Debug, Clone, Copy)]
pub struct Super {
    pub span: Span,
}

macro_rules! impl_span {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a> GetSpan for $ty<'a> {
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

impl_span!(IdentifierReference, BindingIdentifier, IdentifierName, PrivateIdentifier);

impl GetSpan for ThisExpression {
    fn span(&self) -> Span {
        self.span
    }
}

impl GetSpan for Super {
    fn span(&self) -> Span {
        self.span
    }
}
