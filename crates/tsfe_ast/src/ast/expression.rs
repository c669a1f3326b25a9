use tsfe_allocator::{Box, Vec};
use tsfe_span::{GetSpan, Span};

use crate::ast::function::{ArrowFunction, Function};
use crate::ast::identifier::{IdentifierReference, PrivateIdentifier, Super, ThisExpression};
use crate::ast::jsx::{JsxElement, JsxFragment};
use crate::ast::literal::{
    BigIntLiteral, BooleanLiteral, NullLiteral, NumericLiteral, RegExpLiteral, StringLiteral,
    TemplateElement,
};
use crate::ast::pattern::BindingPattern;
use crate::ast::ts::{TsType, TsTypeArguments, TsTypeAssertion};
use crate::node_array::NodeArray;

/// ≈40 expression forms, grouped below by family. `Expression` is the
/// entry point every expression-typed field in the tree holds.
#[derive(Debug, Clone)]
pub enum Expression<'a> {
    BooleanLiteral(Box<'a, BooleanLiteral>),
    NullLiteral(Box<'a, NullLiteral>),
    NumericLiteral(Box<'a, NumericLiteral<'a>>),
    BigIntLiteral(Box<'a, BigIntLiteral<'a>>),
    StringLiteral(Box<'a, StringLiteral<'a>>),
    RegExpLiteral(Box<'a, RegExpLiteral<'a>>),
    TemplateLiteral(Box<'a, TemplateLiteral<'a>>),
    TaggedTemplateExpression(Box<'a, TaggedTemplateExpression<'a>>),

    Identifier(Box<'a, IdentifierReference<'a>>),
    ThisExpression(Box<'a, ThisExpression>),
    Super(Box<'a, Super>),
    PrivateFieldExpression(Box<'a, PrivateFieldExpression<'a>>),

    ArrayExpression(Box<'a, ArrayExpression<'a>>),
    ObjectExpression(Box<'a, ObjectExpression<'a>>),

    Function(Box<'a, Function<'a>>),
    ArrowFunction(Box<'a, ArrowFunction<'a>>),
    ClassExpression(Box<'a, crate::ast::class::Class<'a>>),

    UnaryExpression(Box<'a, UnaryExpression<'a>>),
    UpdateExpression(Box<'a, UpdateExpression<'a>>),
    BinaryExpression(Box<'a, BinaryExpression<'a>>),
    LogicalExpression(Box<'a, LogicalExpression<'a>>),
    ConditionalExpression(Box<'a, ConditionalExpression<'a>>),
    AssignmentExpression(Box<'a, AssignmentExpression<'a>>),
    SequenceExpression(Box<'a, SequenceExpression<'a>>),

    MemberExpression(Box<'a, MemberExpression<'a>>),
    CallExpression(Box<'a, CallExpression<'a>>),
    NewExpression(Box<'a, NewExpression<'a>>),
    ChainExpression(Box<'a, ChainExpression<'a>>),

    SpreadElement(Box<'a, SpreadElement<'a>>),
    YieldExpression(Box<'a, YieldExpression<'a>>),
    AwaitExpression(Box<'a, AwaitExpression<'a>>),
    ParenthesizedExpression(Box<'a, ParenthesizedExpression<'a>>),

    TsAsExpression(Box<'a, TsAsExpression<'a>>),
    TsSatisfiesExpression(Box<'a, TsSatisfiesExpression<'a>>),
    TsTypeAssertion(Box<'a, TsTypeAssertion<'a>>),
    TsNonNullExpression(Box<'a, TsNonNullExpression<'a>>),
    TsInstantiationExpression(Box<'a, TsInstantiationExpression<'a>>),

    JsxElement(Box<'a, JsxElement<'a>>),
    JsxFragment(Box<'a, JsxFragment<'a>>),

    ImportExpression(Box<'a, ImportExpression<'a>>),
    MetaProperty(Box<'a, MetaProperty<'a>>),

    /// `#x in obj`, the brand-check form: a dedicated node (rather than a
    /// `BinaryExpression` with a private name on the left) since
    /// `BinaryExpression.left` is a plain `Expression` and a private name is
    /// never one outside this single position.
    PrivateInExpression(Box<'a, PrivateInExpression<'a>>),

    /// A synthesized placeholder for an expression position the grammar
    /// required but found absent (e.g. `(1 +)`).
    Missing(Span),
}

impl<'a> GetSpan for Expression<'a> {
    fn span(&self) -> Span {
        match self {
            Self::BooleanLiteral(n) => n.span,
            Self::NullLiteral(n) => n.span,
            Self::NumericLiteral(n) => n.span,
            Self::BigIntLiteral(n) => n.span,
            Self::StringLiteral(n) => n.span,
            Self::RegExpLiteral(n) => n.span,
            Self::TemplateLiteral(n) => n.span,
            Self::TaggedTemplateExpression(n) => n.span,
            Self::Identifier(n) => n.span,
            Self::ThisExpression(n) => n.span,
            Self::Super(n) => n.span,
            Self::PrivateFieldExpression(n) => n.span,
            Self::ArrayExpression(n) => n.span,
            Self::ObjectExpression(n) => n.span,
            Self::Function(n) => n.span,
            Self::ArrowFunction(n) => n.span,
            Self::ClassExpression(n) => n.span,
            Self::UnaryExpression(n) => n.span,
            Self::UpdateExpression(n) => n.span,
            Self::BinaryExpression(n) => n.span,
            Self::LogicalExpression(n) => n.span,
            Self::ConditionalExpression(n) => n.span,
            Self::AssignmentExpression(n) => n.span,
            Self::SequenceExpression(n) => n.span,
            Self::MemberExpression(n) => n.span(),
            Self::CallExpression(n) => n.span,
            Self::NewExpression(n) => n.span,
            Self::ChainExpression(n) => n.span,
            Self::SpreadElement(n) => n.span,
            Self::YieldExpression(n) => n.span,
            Self::AwaitExpression(n) => n.span,
            Self::ParenthesizedExpression(n) => n.span,
            Self::TsAsExpression(n) => n.span,
            Self::TsSatisfiesExpression(n) => n.span,
            Self::TsTypeAssertion(n) => n.span,
            Self::TsNonNullExpression(n) => n.span,
            Self::TsInstantiationExpression(n) => n.span,
            Self::JsxElement(n) => n.span,
            Self::JsxFragment(n) => n.span,
            Self::ImportExpression(n) => n.span,
            Self::MetaProperty(n) => n.span,
            Self::PrivateInExpression(n) => n.span,
            Self::Missing(span) => *span,
        }
    }
}

impl<'a> Expression<'a> {
    /// `true` once this expression, or any expression it wraps non-optionally
    /// (parenthesization only — member/call chains carry their own flag via
    /// [`ChainExpression`]), is an assignment target shape.
    pub fn is_identifier_reference(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }
}

#[derive(Debug, Clone)]
pub struct TemplateLiteral<'a> {
    pub span: Span,
    pub quasis: Vec<'a, TemplateElement<'a>>,
    pub expressions: Vec<'a, Expression<'a>>,
}

#[derive(Debug, Clone)]
pub struct TaggedTemplateExpression<'a> {
    pub span: Span,
    pub tag: Expression<'a>,
    pub type_arguments: Option<TsTypeArguments<'a>>,
    pub quasi: TemplateLiteral<'a>,
}

#[derive(Debug, Clone)]
pub struct PrivateFieldExpression<'a> {
    pub span: Span,
    pub object: Expression<'a>,
    pub field: PrivateIdentifier<'a>,
    pub optional: bool,
}

#[derive(Debug, Clone)]
pub struct PrivateInExpression<'a> {
    pub span: Span,
    pub left: PrivateIdentifier<'a>,
    pub right: Expression<'a>,
}

#[derive(Debug, Clone)]
pub enum ArrayExpressionElement<'a> {
    Expression(Expression<'a>),
    Spread(SpreadElement<'a>),
    /// An elided element of a sparse array: `[1, , 3]`.
    Elision(Span),
}

#[derive(Debug, Clone)]
pub struct ArrayExpression<'a> {
    pub span: Span,
    pub elements: NodeArray<'a, ArrayExpressionElement<'a>>,
}

#[derive(Debug, Clone)]
pub struct SpreadElement<'a> {
    pub span: Span,
    pub argument: Expression<'a>,
}

#[derive(Debug, Clone)]
pub enum ObjectPropertyKind<'a> {
    Property(ObjectProperty<'a>),
    Spread(SpreadElement<'a>),
}

#[derive(Debug, Clone)]
pub struct ObjectExpression<'a> {
    pub span: Span,
    pub properties: NodeArray<'a, ObjectPropertyKind<'a>>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

#[derive(Debug, Clone)]
pub enum PropertyKey<'a> {
    Identifier(crate::ast::identifier::IdentifierName<'a>),
    StringLiteral(StringLiteral<'a>),
    NumericLiteral(NumericLiteral<'a>),
    Computed(Expression<'a>),
}

#[derive(Debug, Clone)]
pub struct ObjectProperty<'a> {
    pub span: Span,
    pub kind: PropertyKind,
    pub key: PropertyKey<'a>,
    pub value: Expression<'a>,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UnaryOperator {
    Plus,
    Minus,
    BitwiseNot,
    LogicalNot,
    Typeof,
    Void,
    Delete,
}

#[derive(Debug, Clone)]
pub struct UnaryExpression<'a> {
    pub span: Span,
    pub operator: UnaryOperator,
    pub argument: Expression<'a>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

#[derive(Debug, Clone)]
pub struct UpdateExpression<'a> {
    pub span: Span,
    pub operator: UpdateOperator,
    pub prefix: bool,
    pub argument: Expression<'a>,
}

/// Binary operators, including the TypeScript-specific `in` (type guard
/// narrowing form is identical in AST shape, distinguished only in a later
/// checker phase).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BinaryOperator {
    Equality,
    Inequality,
    StrictEquality,
    StrictInequality,
    LessThan,
    LessEqualThan,
    GreaterThan,
    GreaterEqualThan,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
    Exponential,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    In,
    Instanceof,
}

impl BinaryOperator {
    /// `**` is the only right-associative binary operator.
    pub fn is_right_associative(self) -> bool {
        matches!(self, Self::Exponential)
    }
}

#[derive(Debug, Clone)]
pub struct BinaryExpression<'a> {
    pub span: Span,
    pub operator: BinaryOperator,
    pub left: Expression<'a>,
    pub right: Expression<'a>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LogicalOperator {
    Or,
    And,
    NullishCoalescing,
}

#[derive(Debug, Clone)]
pub struct LogicalExpression<'a> {
    pub span: Span,
    pub operator: LogicalOperator,
    pub left: Expression<'a>,
    pub right: Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct ConditionalExpression<'a> {
    pub span: Span,
    pub test: Expression<'a>,
    pub consequent: Expression<'a>,
    pub alternate: Expression<'a>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AssignmentOperator {
    Assign,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
    Exponential,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    LogicalAnd,
    LogicalOr,
    NullishCoalescing,
}

#[derive(Debug, Clone)]
pub enum AssignmentTarget<'a> {
    Expression(Expression<'a>),
    Pattern(BindingPattern<'a>),
}

#[derive(Debug, Clone)]
pub struct AssignmentExpression<'a> {
    pub span: Span,
    pub operator: AssignmentOperator,
    pub left: AssignmentTarget<'a>,
    pub right: Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct SequenceExpression<'a> {
    pub span: Span,
    pub expressions: Vec<'a, Expression<'a>>,
}

#[derive(Debug, Clone)]
pub enum MemberExpression<'a> {
    Static(StaticMemberExpression<'a>),
    Computed(ComputedMemberExpression<'a>),
}

impl<'a> MemberExpression<'a> {
    pub fn span(&self) -> Span {
        match self {
            Self::Static(n) => n.span,
            Self::Computed(n) => n.span,
        }
    }

    pub fn optional(&self) -> bool {
        match self {
            Self::Static(n) => n.optional,
            Self::Computed(n) => n.optional,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StaticMemberExpression<'a> {
    pub span: Span,
    pub object: Expression<'a>,
    pub property: crate::ast::identifier::IdentifierName<'a>,
    pub optional: bool,
}

#[derive(Debug, Clone)]
pub struct ComputedMemberExpression<'a> {
    pub span: Span,
    pub object: Expression<'a>,
    pub expression: Expression<'a>,
    pub optional: bool,
}

#[derive(Debug, Clone)]
pub enum Argument<'a> {
    Expression(Expression<'a>),
    Spread(SpreadElement<'a>),
}

#[derive(Debug, Clone)]
pub struct CallExpression<'a> {
    pub span: Span,
    pub callee: Expression<'a>,
    pub type_arguments: Option<TsTypeArguments<'a>>,
    pub arguments: NodeArray<'a, Argument<'a>>,
    pub optional: bool,
}

#[derive(Debug, Clone)]
pub struct NewExpression<'a> {
    pub span: Span,
    pub callee: Expression<'a>,
    pub type_arguments: Option<TsTypeArguments<'a>>,
    pub arguments: Option<NodeArray<'a, Argument<'a>>>,
}

/// Wraps a member/call chain that began with `?.`, per the spec: once a
/// `?.` is seen, every subsequent link inherits `OptionalChain`; this node
/// marks the whole chain's root so consumers can tell `a?.b.c` apart from
/// `a.b.c` without inspecting every link.
#[derive(Debug, Clone)]
pub struct ChainExpression<'a> {
    pub span: Span,
    pub expression: Expression<'a>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum YieldDelegate {
    Yes,
    No,
}

#[derive(Debug, Clone)]
pub struct YieldExpression<'a> {
    pub span: Span,
    pub argument: Option<Expression<'a>>,
    pub delegate: YieldDelegate,
}

#[derive(Debug, Clone)]
pub struct AwaitExpression<'a> {
    pub span: Span,
    pub argument: Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct ParenthesizedExpression<'a> {
    pub span: Span,
    pub expression: Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct TsAsExpression<'a> {
    pub span: Span,
    pub expression: Expression<'a>,
    pub type_annotation: TsType<'a>,
}

#[derive(Debug, Clone)]
pub struct TsSatisfiesExpression<'a> {
    pub span: Span,
    pub expression: Expression<'a>,
    pub type_annotation: TsType<'a>,
}

#[derive(Debug, Clone)]
pub struct TsNonNullExpression<'a> {
    pub span: Span,
    pub expression: Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct TsInstantiationExpression<'a> {
    pub span: Span,
    pub expression: Expression<'a>,
    pub type_arguments: TsTypeArguments<'a>,
}

#[derive(Debug, Clone)]
pub struct ImportExpression<'a> {
    pub span: Span,
    pub source: Expression<'a>,
    pub options: Option<Expression<'a>>,
}

#[derive(Debug, Clone)]
pub struct MetaProperty<'a> {
    pub span: Span,
    pub meta: crate::ast::identifier::IdentifierName<'a>,
    pub property: crate::ast::identifier::IdentifierName<'a>,
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
    TemplateLiteral,
    TaggedTemplateExpression,
    PrivateFieldExpression,
    PrivateInExpression,
    ArrayExpression,
    SpreadElement,
    ObjectExpression,
    ObjectProperty,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    LogicalExpression,
    ConditionalExpression,
    AssignmentExpression,
    SequenceExpression,
    StaticMemberExpression,
    ComputedMemberExpression,
    CallExpression,
    NewExpression,
    ChainExpression,
    YieldExpression,
    AwaitExpression,
    ParenthesizedExpression,
    TsAsExpression,
    TsSatisfiesExpression,
    TsNonNullExpression,
    TsInstantiationExpression,
    ImportExpression,
    MetaProperty,
);

impl<'a> GetSpan for MemberExpression<'a> {
    fn span(&self) -> Span {
        match self {
            Self::Static(n) => n.span,
            Self::Computed(n) => n.span,
        }
    }
}

impl<'a> GetSpan for PropertyKey<'a> {
    fn span(&self) -> Span {
        match self {
            Self::Identifier(n) => n.span,
            Self::StringLiteral(n) => n.span,
            Self::NumericLiteral(n) => n.span,
            Self::Computed(n) => n.span(),
        }
    }
}
