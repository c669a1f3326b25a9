use tsfe_span::{GetSpan, Span};

use crate::ast::expression::Expression;
use crate::ast::identifier::IdentifierName;
use crate::ast::ts::TsTypeArguments;
use crate::node_array::NodeArray;

/// A (possibly dotted, possibly namespaced) JSX tag or attribute name:
/// `Foo`, `Foo.Bar`, `foo-bar`, `svg:rect`.
#[derive(Debug, Clone)]
pub enum JsxName<'a> {
    Identifier(IdentifierName<'a>),
    Member(JsxMemberName<'a>),
    Namespaced(JsxNamespacedName<'a>),
}

impl<'a> GetSpan for JsxName<'a> {
    fn span(&self) -> Span {
        match self {
            Self::Identifier(n) => n.span,
            Self::Member(n) => n.span,
            Self::Namespaced(n) => n.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsxMemberName<'a> {
    pub span: Span,
    pub object: tsfe_allocator::Box<'a, JsxName<'a>>,
    pub property: IdentifierName<'a>,
}

#[derive(Debug, Clone)]
pub struct JsxNamespacedName<'a> {
    pub span: Span,
    pub namespace: IdentifierName<'a>,
    pub name: IdentifierName<'a>,
}

#[derive(Debug, Clone)]
pub enum JsxAttributeValue<'a> {
    StringLiteral(crate::ast::literal::StringLiteral<'a>),
    ExpressionContainer(JsxExpressionContainer<'a>),
    Element(JsxElement<'a>),
    Fragment(JsxFragment<'a>),
}

#[derive(Debug, Clone)]
pub struct JsxAttribute<'a> {
    pub span: Span,
    pub name: JsxName<'a>,
    pub value: Option<JsxAttributeValue<'a>>,
}

#[derive(Debug, Clone)]
pub struct JsxSpreadAttribute<'a> {
    pub span: Span,
    pub argument: Expression<'a>,
}

#[derive(Debug, Clone)]
pub enum JsxAttributeItem<'a> {
    Attribute(JsxAttribute<'a>),
    Spread(JsxSpreadAttribute<'a>),
}

#[derive(Debug, Clone)]
pub struct JsxOpeningElement<'a> {
    pub span: Span,
    pub name: JsxName<'a>,
    pub type_arguments: Option<TsTypeArguments<'a>>,
    pub attributes: NodeArray<'a, JsxAttributeItem<'a>>,
    pub self_closing: bool,
}

#[derive(Debug, Clone)]
pub struct JsxClosingElement<'a> {
    pub span: Span,
    pub name: JsxName<'a>,
}

/// An expression embedded in JSX children or an attribute value via
/// `{ ... }`. `expression` is `None` for a bare comment placeholder
/// (`{/* comment */}`), which is legal and carries no value.
#[derive(Debug, Clone)]
pub struct JsxExpressionContainer<'a> {
    pub span: Span,
    pub expression: Option<Expression<'a>>,
}

/// A run of literal text between JSX tags, scanned as a single token by
/// `scan_jsx_token` per §4.2.
#[derive(Debug, Clone)]
pub struct JsxText<'a> {
    pub span: Span,
    pub value: &'a str,
}

#[derive(Debug, Clone)]
pub enum JsxChild<'a> {
    Text(JsxText<'a>),
    Element(JsxElement<'a>),
    Fragment(JsxFragment<'a>),
    ExpressionContainer(JsxExpressionContainer<'a>),
}

impl<'a> GetSpan for JsxChild<'a> {
    fn span(&self) -> Span {
        match self {
            Self::Text(n) => n.span,
            Self::Element(n) => n.span,
            Self::Fragment(n) => n.span,
            Self::ExpressionContainer(n) => n.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsxElement<'a> {
    pub span: Span,
    pub opening_element: JsxOpeningElement<'a>,
    pub children: NodeArray<'a, JsxChild<'a>>,
    pub closing_element: Option<JsxClosingElement<'a>>,
}

#[derive(Debug, Clone)]
pub struct JsxFragment<'a> {
    pub span: Span,
    pub children: NodeArray<'a, JsxChild<'a>>,
}

macro_rules! impl_span_field {
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

impl_span_field!(
    JsxMemberName,
    JsxNamespacedName,
    JsxAttribute,
    JsxSpreadAttribute,
    JsxOpeningElement,
    JsxClosingElement,
    JsxExpressionContainer,
    JsxText,
    JsxElement,
    JsxFragment,
);
