use tsfe_span::{GetSpan, Span};

use crate::ast::expression::{Expression, PropertyKey};
use crate::ast::identifier::{BindingIdentifier, PrivateIdentifier};
use crate::ast::statement::BlockStatement;
use crate::ast::ts::{TsParameter, TsType, TsTypeArguments, TsTypeParameterDeclaration};
use crate::node_array::NodeArray;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ClassModifiers {
    pub is_abstract: bool,
    pub is_declare: bool,
}

#[derive(Debug, Clone)]
pub struct HeritageClause<'a> {
    pub span: Span,
    pub expression: Expression<'a>,
    pub type_arguments: Option<TsTypeArguments<'a>>,
}

#[derive(Debug, Clone)]
pub struct Decorator<'a> {
    pub span: Span,
    pub expression: Expression<'a>,
}

/// The one `extends` clause (at most one superclass) plus zero or more
/// `implements` clauses.
#[derive(Debug, Clone)]
pub struct Class<'a> {
    pub span: Span,
    pub id: Option<BindingIdentifier<'a>>,
    pub modifiers: ClassModifiers,
    pub decorators: NodeArray<'a, Decorator<'a>>,
    pub type_parameters: Option<TsTypeParameterDeclaration<'a>>,
    pub super_class: Option<HeritageClause<'a>>,
    pub implements: NodeArray<'a, HeritageClause<'a>>,
    pub body: ClassBody<'a>,
}

impl<'a> GetSpan for Class<'a> {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Debug, Clone)]
pub struct ClassBody<'a> {
    pub span: Span,
    pub body: NodeArray<'a, ClassElement<'a>>,
}

impl<'a> GetSpan for ClassBody<'a> {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Debug, Clone)]
pub enum ClassElement<'a> {
    PropertyDefinition(PropertyDefinition<'a>),
    MethodDefinition(MethodDefinition<'a>),
    StaticBlock(StaticBlock<'a>),
    IndexSignature(crate::ast::ts::TsIndexSignature<'a>),
}

impl<'a> GetSpan for ClassElement<'a> {
    fn span(&self) -> Span {
        match self {
            Self::PropertyDefinition(n) => n.span,
            Self::MethodDefinition(n) => n.span,
            Self::StaticBlock(n) => n.span,
            Self::IndexSignature(n) => n.span,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Accessibility {
    Public,
    Protected,
    Private,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct MemberModifiers {
    pub accessibility: Option<Accessibility>,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_readonly: bool,
    pub is_override: bool,
    pub is_declare: bool,
    pub is_optional: bool,
    pub is_definite: bool,
}

#[derive(Debug, Clone)]
pub enum ClassPropertyKey<'a> {
    Named(PropertyKey<'a>),
    Private(PrivateIdentifier<'a>),
}

#[derive(Debug, Clone)]
pub struct PropertyDefinition<'a> {
    pub span: Span,
    pub decorators: NodeArray<'a, Decorator<'a>>,
    pub modifiers: MemberModifiers,
    pub key: ClassPropertyKey<'a>,
    pub type_annotation: Option<TsType<'a>>,
    pub value: Option<Expression<'a>>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MethodKind {
    Method,
    Get,
    Set,
    Constructor,
}

#[derive(Debug, Clone)]
pub struct MethodDefinition<'a> {
    pub span: Span,
    pub decorators: NodeArray<'a, Decorator<'a>>,
    pub modifiers: MemberModifiers,
    pub kind: MethodKind,
    pub key: ClassPropertyKey<'a>,
    pub is_async: bool,
    pub is_generator: bool,
    pub type_parameters: Option<TsTypeParameterDeclaration<'a>>,
    pub params: NodeArray<'a, TsParameter<'a>>,
    pub return_type: Option<TsType<'a>>,
    pub body: Option<BlockStatement<'a>>,
}

#[derive(Debug, Clone)]
pub struct StaticBlock<'a> {
    pub span: Span,
    pub body: NodeArray<'a, crate::ast::statement::Statement<'a>>,
}
