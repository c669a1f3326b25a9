use tsfe_allocator::Box;
use tsfe_span::{GetSpan, Span};

use crate::ast::expression::Expression;
use crate::ast::identifier::{BindingIdentifier, IdentifierName};
use crate::ast::statement::Statement;
use crate::ast::ts::{TsType, TsTypeMember, TsTypeParameterDeclaration};
use crate::node_array::NodeArray;

/// Declarations that are also statements (a `Statement::Declaration`
/// wraps one of these), plus the module-level `import`/`export` forms
/// that only ever occur at the top of a `SourceFile` or inside a
/// `ModuleBlock`.
#[derive(Debug, Clone)]
pub enum Declaration<'a> {
    TsTypeAliasDeclaration(Box<'a, TsTypeAliasDeclaration<'a>>),
    TsInterfaceDeclaration(Box<'a, TsInterfaceDeclaration<'a>>),
    TsEnumDeclaration(Box<'a, TsEnumDeclaration<'a>>),
    TsModuleDeclaration(Box<'a, TsModuleDeclaration<'a>>),
    TsImportEqualsDeclaration(Box<'a, TsImportEqualsDeclaration<'a>>),
    ImportDeclaration(Box<'a, ImportDeclaration<'a>>),
    ExportNamedDeclaration(Box<'a, ExportNamedDeclaration<'a>>),
    ExportDefaultDeclaration(Box<'a, ExportDefaultDeclaration<'a>>),
    ExportAllDeclaration(Box<'a, ExportAllDeclaration<'a>>),
    TsExportAssignment(Box<'a, TsExportAssignment<'a>>),
}

impl<'a> GetSpan for Declaration<'a> {
    fn span(&self) -> Span {
        match self {
            Self::TsTypeAliasDeclaration(n) => n.span,
            Self::TsInterfaceDeclaration(n) => n.span,
            Self::TsEnumDeclaration(n) => n.span,
            Self::TsModuleDeclaration(n) => n.span,
            Self::TsImportEqualsDeclaration(n) => n.span,
            Self::ImportDeclaration(n) => n.span,
            Self::ExportNamedDeclaration(n) => n.span,
            Self::ExportDefaultDeclaration(n) => n.span,
            Self::ExportAllDeclaration(n) => n.span,
            Self::TsExportAssignment(n) => n.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TsTypeAliasDeclaration<'a> {
    pub span: Span,
    pub id: BindingIdentifier<'a>,
    pub type_parameters: Option<TsTypeParameterDeclaration<'a>>,
    pub type_annotation: TsType<'a>,
    pub declare: bool,
}

#[derive(Debug, Clone)]
pub struct TsInterfaceDeclaration<'a> {
    pub span: Span,
    pub id: BindingIdentifier<'a>,
    pub type_parameters: Option<TsTypeParameterDeclaration<'a>>,
    pub extends: NodeArray<'a, crate::ast::class::HeritageClause<'a>>,
    pub body: NodeArray<'a, TsTypeMember<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsEnumMember<'a> {
    pub span: Span,
    pub id: crate::ast::expression::PropertyKey<'a>,
    pub initializer: Option<Expression<'a>>,
}

#[derive(Debug, Clone)]
pub struct TsEnumDeclaration<'a> {
    pub span: Span,
    pub id: BindingIdentifier<'a>,
    pub is_const: bool,
    pub members: NodeArray<'a, TsEnumMember<'a>>,
    pub declare: bool,
}

/// `namespace`/`module` declaration. `id` may be a dotted string
/// (`module "foo"` uses [`TsModuleName::StringLiteral`]) or a dotted
/// identifier chain flattened during parse (`namespace A.B.C {}` parses
/// as nested `TsModuleDeclaration`s, matching the grammar's actual
/// nesting rather than a flat dotted name).
#[derive(Debug, Clone)]
pub enum TsModuleName<'a> {
    Identifier(BindingIdentifier<'a>),
    StringLiteral(crate::ast::literal::StringLiteral<'a>),
}

#[derive(Debug, Clone)]
pub enum TsModuleBody<'a> {
    Block(NodeArray<'a, Statement<'a>>),
    Nested(Box<'a, TsModuleDeclaration<'a>>),
}

#[derive(Debug, Clone)]
pub struct TsModuleDeclaration<'a> {
    pub span: Span,
    pub id: TsModuleName<'a>,
    pub body: Option<TsModuleBody<'a>>,
    pub declare: bool,
    /// `global` augmentation (`declare global { ... }`).
    pub is_global: bool,
}

#[derive(Debug, Clone)]
pub struct TsImportEqualsDeclaration<'a> {
    pub span: Span,
    pub id: BindingIdentifier<'a>,
    pub is_export: bool,
    pub module_reference: TsModuleReference<'a>,
}

#[derive(Debug, Clone)]
pub enum TsModuleReference<'a> {
    EntityName(crate::ast::ts::TsEntityName<'a>),
    ExternalModuleReference(crate::ast::literal::StringLiteral<'a>),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ImportKind {
    Value,
    Type,
}

#[derive(Debug, Clone)]
pub struct ImportDefaultSpecifier<'a> {
    pub span: Span,
    pub local: BindingIdentifier<'a>,
}

#[derive(Debug, Clone)]
pub struct ImportNamespaceSpecifier<'a> {
    pub span: Span,
    pub local: BindingIdentifier<'a>,
}

#[derive(Debug, Clone)]
pub struct ImportSpecifier<'a> {
    pub span: Span,
    pub imported: IdentifierName<'a>,
    pub local: BindingIdentifier<'a>,
    pub import_kind: ImportKind,
}

#[derive(Debug, Clone)]
pub enum ImportDeclarationSpecifier<'a> {
    Default(ImportDefaultSpecifier<'a>),
    Namespace(ImportNamespaceSpecifier<'a>),
    Named(ImportSpecifier<'a>),
}

#[derive(Debug, Clone)]
pub struct ImportAttribute<'a> {
    pub span: Span,
    pub key: IdentifierName<'a>,
    pub value: crate::ast::literal::StringLiteral<'a>,
}

#[derive(Debug, Clone)]
pub struct ImportDeclaration<'a> {
    pub span: Span,
    pub specifiers: NodeArray<'a, ImportDeclarationSpecifier<'a>>,
    pub source: crate::ast::literal::StringLiteral<'a>,
    pub import_kind: ImportKind,
    pub attributes: NodeArray<'a, ImportAttribute<'a>>,
}

#[derive(Debug, Clone)]
pub struct ExportSpecifier<'a> {
    pub span: Span,
    pub local: IdentifierName<'a>,
    pub exported: IdentifierName<'a>,
    pub export_kind: ImportKind,
}

#[derive(Debug, Clone)]
pub struct ExportNamedDeclaration<'a> {
    pub span: Span,
    pub declaration: Option<Statement<'a>>,
    pub specifiers: NodeArray<'a, ExportSpecifier<'a>>,
    pub source: Option<crate::ast::literal::StringLiteral<'a>>,
    pub export_kind: ImportKind,
}

#[derive(Debug, Clone)]
pub enum ExportDefaultDeclarationKind<'a> {
    Function(crate::ast::function::Function<'a>),
    Class(crate::ast::class::Class<'a>),
    Expression(Expression<'a>),
    TsInterfaceDeclaration(TsInterfaceDeclaration<'a>),
}

#[derive(Debug, Clone)]
pub struct ExportDefaultDeclaration<'a> {
    pub span: Span,
    pub declaration: ExportDefaultDeclarationKind<'a>,
}

#[derive(Debug, Clone)]
pub struct ExportAllDeclaration<'a> {
    pub span: Span,
    pub exported: Option<IdentifierName<'a>>,
    pub source: crate::ast::literal::StringLiteral<'a>,
    pub export_kind: ImportKind,
}

/// `export = expr;`, the CommonJS-interop export form.
#[derive(Debug, Clone)]
pub struct TsExportAssignment<'a> {
    pub span: Span,
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
    TsTypeAliasDeclaration<'a>,
    TsInterfaceDeclaration<'a>,
    TsEnumMember<'a>,
    TsEnumDeclaration<'a>,
    TsModuleDeclaration<'a>,
    TsImportEqualsDeclaration<'a>,
    ImportDefaultSpecifier<'a>,
    ImportNamespaceSpecifier<'a>,
    ImportSpecifier<'a>,
    ImportAttribute<'a>,
    ImportDeclaration<'a>,
    ExportSpecifier<'a>,
    ExportNamedDeclaration<'a>,
    ExportDefaultDeclaration<'a>,
    ExportAllDeclaration<'a>,
    TsExportAssignment<'a>,
);

impl<'a> GetSpan for TsModuleName<'a> {
    fn span(&self) -> Span {
        match self {
            Self::Identifier(n) => n.span,
            Self::StringLiteral(n) => n.span,
        }
    }
}

impl<'a> GetSpan for ImportDeclarationSpecifier<'a> {
    fn span(&self) -> Span {
        match self {
            Self::Default(n) => n.span,
            Self::Namespace(n) => n.span,
            Self::Named(n) => n.span,
        }
    }
}
