use tsfe_span::{GetSpan, Span};

use crate::ast::expression::Expression;
use crate::ast::identifier::BindingIdentifier;
use crate::ast::statement::BlockStatement;
use crate::ast::ts::{TsParameter, TsType, TsTypeParameterDeclaration};
use crate::node_array::NodeArray;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FunctionModifiers {
    pub is_async: bool,
    pub is_generator: bool,
}

/// `function` declarations and expressions share this shape; `id` is
/// `None` for a function expression used anonymously (`export default
/// function () {}`) and for the ambient `declare function` overload form
/// (each overload is its own `Function` with `body: None`).
#[derive(Debug, Clone)]
pub struct Function<'a> {
    pub span: Span,
    pub id: Option<BindingIdentifier<'a>>,
    pub modifiers: FunctionModifiers,
    pub type_parameters: Option<TsTypeParameterDeclaration<'a>>,
    pub params: NodeArray<'a, TsParameter<'a>>,
    pub return_type: Option<TsType<'a>>,
    pub body: Option<BlockStatement<'a>>,
}

impl<'a> GetSpan for Function<'a> {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Debug, Clone)]
pub enum ArrowFunctionBody<'a> {
    Block(BlockStatement<'a>),
    Expression(Expression<'a>),
}

#[derive(Debug, Clone)]
pub struct ArrowFunction<'a> {
    pub span: Span,
    pub is_async: bool,
    pub type_parameters: Option<TsTypeParameterDeclaration<'a>>,
    pub params: NodeArray<'a, TsParameter<'a>>,
    pub return_type: Option<TsType<'a>>,
    pub body: ArrowFunctionBody<'a>,
}

impl<'a> GetSpan for ArrowFunction<'a> {
    fn span(&self) -> Span {
        self.span
    }
}
