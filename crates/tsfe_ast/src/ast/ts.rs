use tsfe_allocator::Box;
use tsfe_span::{GetSpan, Span};

use crate::ast::expression::Expression;
use crate::ast::identifier::{BindingIdentifier, IdentifierName, IdentifierReference};
use crate::ast::pattern::BindingPattern;
use crate::node_array::NodeArray;

/// `parse_type()`'s precedence ladder, §4.4: function/constructor →
/// conditional → union → intersection → type-operator → postfix →
/// primary. ≈20 variants total across that ladder.
#[derive(Debug, Clone)]
pub enum TsType<'a> {
    TypeReference(Box<'a, TsTypeReference<'a>>),
    FunctionType(Box<'a, TsFunctionType<'a>>),
    ConstructorType(Box<'a, TsConstructorType<'a>>),
    ConditionalType(Box<'a, TsConditionalType<'a>>),
    UnionType(Box<'a, TsUnionType<'a>>),
    IntersectionType(Box<'a, TsIntersectionType<'a>>),
    TypeOperator(Box<'a, TsTypeOperator<'a>>),
    InferType(Box<'a, TsInferType<'a>>),
    ArrayType(Box<'a, TsArrayType<'a>>),
    IndexedAccessType(Box<'a, TsIndexedAccessType<'a>>),
    TupleType(Box<'a, TsTupleType<'a>>),
    NamedTupleMember(Box<'a, TsNamedTupleMember<'a>>),
    OptionalType(Box<'a, TsOptionalType<'a>>),
    RestType(Box<'a, TsRestType<'a>>),
    ParenthesizedType(Box<'a, TsParenthesizedType<'a>>),
    MappedType(Box<'a, TsMappedType<'a>>),
    LiteralType(Box<'a, TsLiteralType<'a>>),
    TemplateLiteralType(Box<'a, TsTemplateLiteralType<'a>>),
    TypeQuery(Box<'a, TsTypeQuery<'a>>),
    ImportType(Box<'a, TsImportType<'a>>),
    TypePredicate(Box<'a, TsTypePredicate<'a>>),
    TypeLiteral(Box<'a, TsTypeLiteral<'a>>),
    ThisType(Box<'a, TsThisType>),
    KeywordType(Box<'a, TsKeywordType>),
    /// A type position the grammar required but found absent.
    Missing(Span),
}

impl<'a> GetSpan for TsType<'a> {
    fn span(&self) -> Span {
        match self {
            Self::TypeReference(n) => n.span,
            Self::FunctionType(n) => n.span,
            Self::ConstructorType(n) => n.span,
            Self::ConditionalType(n) => n.span,
            Self::UnionType(n) => n.span,
            Self::IntersectionType(n) => n.span,
            Self::TypeOperator(n) => n.span,
            Self::InferType(n) => n.span,
            Self::ArrayType(n) => n.span,
            Self::IndexedAccessType(n) => n.span,
            Self::TupleType(n) => n.span,
            Self::NamedTupleMember(n) => n.span,
            Self::OptionalType(n) => n.span,
            Self::RestType(n) => n.span,
            Self::ParenthesizedType(n) => n.span,
            Self::MappedType(n) => n.span,
            Self::LiteralType(n) => n.span,
            Self::TemplateLiteralType(n) => n.span,
            Self::TypeQuery(n) => n.span,
            Self::ImportType(n) => n.span,
            Self::TypePredicate(n) => n.span,
            Self::TypeLiteral(n) => n.span,
            Self::ThisType(n) => n.span,
            Self::KeywordType(n) => n.span,
            Self::Missing(span) => *span,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TsKeywordTypeKind {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Symbol,
    BigInt,
    Object,
    Intrinsic,
}

#[derive(Debug, Clone, Copy)]
pub struct TsKeywordType {
    pub span: Span,
    pub kind: TsKeywordTypeKind,
}

#[derive(Debug, Clone, Copy)]
pub struct TsThisType {
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TsTypeReference<'a> {
    pub span: Span,
    pub type_name: TsEntityName<'a>,
    pub type_arguments: Option<TsTypeArguments<'a>>,
}

/// A dotted name in type position, e.g. `A.B.C`.
#[derive(Debug, Clone)]
pub enum TsEntityName<'a> {
    Identifier(IdentifierReference<'a>),
    Qualified(Box<'a, TsQualifiedName<'a>>),
}

#[derive(Debug, Clone)]
pub struct TsQualifiedName<'a> {
    pub span: Span,
    pub left: TsEntityName<'a>,
    pub right: IdentifierName<'a>,
}

#[derive(Debug, Clone)]
pub struct TsTypeArguments<'a> {
    pub span: Span,
    pub params: NodeArray<'a, TsType<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsTypeParameter<'a> {
    pub span: Span,
    pub name: BindingIdentifier<'a>,
    pub constraint: Option<TsType<'a>>,
    pub default: Option<TsType<'a>>,
    pub modifiers: TsTypeParameterModifiers,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TsTypeParameterModifiers {
    pub is_const: bool,
    pub is_in: bool,
    pub is_out: bool,
}

#[derive(Debug, Clone)]
pub struct TsTypeParameterDeclaration<'a> {
    pub span: Span,
    pub params: NodeArray<'a, TsTypeParameter<'a>>,
}

/// Modifiers legal on a constructor parameter only: `constructor(private x:
/// number)` makes `x` both a parameter and a declared property, the one
/// place the grammar lets a parameter carry accessibility/`readonly`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TsParameterModifiers {
    pub accessibility: Option<crate::ast::class::Accessibility>,
    pub is_readonly: bool,
    pub is_override: bool,
}

#[derive(Debug, Clone)]
pub struct TsParameter<'a> {
    pub span: Span,
    pub decorators: NodeArray<'a, crate::ast::class::Decorator<'a>>,
    pub modifiers: TsParameterModifiers,
    pub pattern: BindingPattern<'a>,
    pub type_annotation: Option<TsType<'a>>,
    pub optional: bool,
    pub dotdotdot: bool,
}

#[derive(Debug, Clone)]
pub struct TsFunctionType<'a> {
    pub span: Span,
    pub type_parameters: Option<TsTypeParameterDeclaration<'a>>,
    pub params: NodeArray<'a, TsParameter<'a>>,
    pub return_type: TsType<'a>,
}

#[derive(Debug, Clone)]
pub struct TsConstructorType<'a> {
    pub span: Span,
    pub is_abstract: bool,
    pub type_parameters: Option<TsTypeParameterDeclaration<'a>>,
    pub params: NodeArray<'a, TsParameter<'a>>,
    pub return_type: TsType<'a>,
}

/// `check_type extends extends_type ? true_type : false_type`. The
/// `extends_type` arm is parsed with `DisallowConditionalTypes` set, per
/// §4.3.
#[derive(Debug, Clone)]
pub struct TsConditionalType<'a> {
    pub span: Span,
    pub check_type: TsType<'a>,
    pub extends_type: TsType<'a>,
    pub true_type: TsType<'a>,
    pub false_type: TsType<'a>,
}

#[derive(Debug, Clone)]
pub struct TsUnionType<'a> {
    pub span: Span,
    pub types: NodeArray<'a, TsType<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsIntersectionType<'a> {
    pub span: Span,
    pub types: NodeArray<'a, TsType<'a>>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TsTypeOperatorKind {
    Keyof,
    Unique,
    Readonly,
}

#[derive(Debug, Clone)]
pub struct TsTypeOperator<'a> {
    pub span: Span,
    pub operator: TsTypeOperatorKind,
    pub type_annotation: TsType<'a>,
}

#[derive(Debug, Clone)]
pub struct TsInferType<'a> {
    pub span: Span,
    pub type_parameter: TsTypeParameter<'a>,
}

#[derive(Debug, Clone)]
pub struct TsArrayType<'a> {
    pub span: Span,
    pub element_type: TsType<'a>,
}

#[derive(Debug, Clone)]
pub struct TsIndexedAccessType<'a> {
    pub span: Span,
    pub object_type: TsType<'a>,
    pub index_type: TsType<'a>,
}

#[derive(Debug, Clone)]
pub enum TsTupleElement<'a> {
    Type(TsType<'a>),
    Named(TsNamedTupleMember<'a>),
    Optional(TsOptionalType<'a>),
    Rest(TsRestType<'a>),
}

#[derive(Debug, Clone)]
pub struct TsTupleType<'a> {
    pub span: Span,
    pub elements: NodeArray<'a, TsTupleElement<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsNamedTupleMember<'a> {
    pub span: Span,
    pub label: IdentifierName<'a>,
    pub optional: bool,
    pub element_type: TsType<'a>,
}

#[derive(Debug, Clone)]
pub struct TsOptionalType<'a> {
    pub span: Span,
    pub type_annotation: TsType<'a>,
}

#[derive(Debug, Clone)]
pub struct TsRestType<'a> {
    pub span: Span,
    pub type_annotation: TsType<'a>,
}

#[derive(Debug, Clone)]
pub struct TsParenthesizedType<'a> {
    pub span: Span,
    pub type_annotation: TsType<'a>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TsMappedTypeModifier {
    None,
    Add,
    Remove,
}

#[derive(Debug, Clone)]
pub struct TsMappedType<'a> {
    pub span: Span,
    pub type_parameter: TsTypeParameter<'a>,
    pub name_type: Option<TsType<'a>>,
    pub readonly: TsMappedTypeModifier,
    pub optional: TsMappedTypeModifier,
    pub type_annotation: Option<TsType<'a>>,
}

#[derive(Debug, Clone)]
pub enum TsLiteral<'a> {
    String(crate::ast::literal::StringLiteral<'a>),
    Numeric(crate::ast::literal::NumericLiteral<'a>),
    BigInt(crate::ast::literal::BigIntLiteral<'a>),
    Boolean(crate::ast::literal::BooleanLiteral),
    /// A unary-minus numeric literal, e.g. the `-1` in `type X = -1;`.
    NegativeNumeric(crate::ast::literal::NumericLiteral<'a>),
}

#[derive(Debug, Clone)]
pub struct TsLiteralType<'a> {
    pub span: Span,
    pub literal: TsLiteral<'a>,
}

#[derive(Debug, Clone)]
pub struct TsTemplateLiteralType<'a> {
    pub span: Span,
    pub quasis: NodeArray<'a, crate::ast::literal::TemplateElement<'a>>,
    pub types: NodeArray<'a, TsType<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsTypeQuery<'a> {
    pub span: Span,
    pub expr_name: TsEntityName<'a>,
    pub type_arguments: Option<TsTypeArguments<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsImportType<'a> {
    pub span: Span,
    pub argument: crate::ast::literal::StringLiteral<'a>,
    pub qualifier: Option<TsEntityName<'a>>,
    pub type_arguments: Option<TsTypeArguments<'a>>,
}

#[derive(Debug, Clone)]
pub enum TsTypePredicateParameter<'a> {
    Identifier(IdentifierName<'a>),
    This(crate::ast::identifier::ThisExpression),
}

#[derive(Debug, Clone)]
pub struct TsTypePredicate<'a> {
    pub span: Span,
    pub asserts: bool,
    pub parameter_name: TsTypePredicateParameter<'a>,
    pub type_annotation: Option<TsType<'a>>,
}

#[derive(Debug, Clone)]
pub enum TsTypeMember<'a> {
    PropertySignature(TsPropertySignature<'a>),
    MethodSignature(TsMethodSignature<'a>),
    CallSignature(TsCallSignature<'a>),
    ConstructSignature(TsConstructSignature<'a>),
    IndexSignature(TsIndexSignature<'a>),
}

impl<'a> GetSpan for TsTypeMember<'a> {
    fn span(&self) -> Span {
        match self {
            Self::PropertySignature(n) => n.span,
            Self::MethodSignature(n) => n.span,
            Self::CallSignature(n) => n.span,
            Self::ConstructSignature(n) => n.span,
            Self::IndexSignature(n) => n.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TsPropertySignature<'a> {
    pub span: Span,
    pub key: crate::ast::expression::PropertyKey<'a>,
    pub optional: bool,
    pub readonly: bool,
    pub type_annotation: Option<TsType<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsMethodSignature<'a> {
    pub span: Span,
    pub key: crate::ast::expression::PropertyKey<'a>,
    pub optional: bool,
    pub type_parameters: Option<TsTypeParameterDeclaration<'a>>,
    pub params: NodeArray<'a, TsParameter<'a>>,
    pub return_type: Option<TsType<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsCallSignature<'a> {
    pub span: Span,
    pub type_parameters: Option<TsTypeParameterDeclaration<'a>>,
    pub params: NodeArray<'a, TsParameter<'a>>,
    pub return_type: Option<TsType<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsConstructSignature<'a> {
    pub span: Span,
    pub type_parameters: Option<TsTypeParameterDeclaration<'a>>,
    pub params: NodeArray<'a, TsParameter<'a>>,
    pub return_type: Option<TsType<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsIndexSignature<'a> {
    pub span: Span,
    pub parameter_name: BindingIdentifier<'a>,
    pub parameter_type: TsType<'a>,
    pub type_annotation: TsType<'a>,
    pub readonly: bool,
}

#[derive(Debug, Clone)]
pub struct TsTypeLiteral<'a> {
    pub span: Span,
    pub members: NodeArray<'a, TsTypeMember<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsTypeAssertion<'a> {
    pub span: Span,
    pub type_annotation: TsType<'a>,
    pub expression: Expression<'a>,
}

macro_rules! impl_span_field {
    ($($ty:ident $(<$lt:lifetime>)?),* $(,)?) => {
        $(
            impl$(<$lt>)? GetSpan for $ty$(<$lt>)? {
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

impl_span_field!(
    TsTypeReference<'a>,
    TsQualifiedName<'a>,
    TsTypeArguments<'a>,
    TsTypeParameter<'a>,
    TsTypeParameterDeclaration<'a>,
    TsParameter<'a>,
    TsFunctionType<'a>,
    TsConstructorType<'a>,
    TsConditionalType<'a>,
    TsUnionType<'a>,
    TsIntersectionType<'a>,
    TsTypeOperator<'a>,
    TsInferType<'a>,
    TsArrayType<'a>,
    TsIndexedAccessType<'a>,
    TsTupleType<'a>,
    TsNamedTupleMember<'a>,
    TsOptionalType<'a>,
    TsRestType<'a>,
    TsParenthesizedType<'a>,
    TsMappedType<'a>,
    TsLiteralType<'a>,
    TsTemplateLiteralType<'a>,
    TsTypeQuery<'a>,
    TsImportType<'a>,
    TsTypePredicate<'a>,
    TsPropertySignature<'a>,
    TsMethodSignature<'a>,
    TsCallSignature<'a>,
    TsConstructSignature<'a>,
    TsIndexSignature<'a>,
    TsTypeLiteral<'a>,
    TsTypeAssertion<'a>,
    TsKeywordType,
    TsThisType,
);

impl<'a> GetSpan for TsEntityName<'a> {
    fn span(&self) -> Span {
        match self {
            Self::Identifier(n) => n.span,
            Self::Qualified(n) => n.span,
        }
    }
}
