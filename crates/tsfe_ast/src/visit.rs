//! `for_each_child`, the node-tree traversal interface consumed by
//! external collaborators (§6). The full tree-walking visitor built on
//! top of this — the one a semantic analyzer would drive — is out of
//! scope here; what must be specified is this interface's contract:
//! children are visited in exact source order, and a visitor that
//! returns `Some` short-circuits the walk and its value is propagated
//! out. `Statement` and `Expression` are implemented as the two
//! dispatch points every other production ultimately bottoms out at;
//! additional node kinds follow the same per-field, source-order pattern.

use crate::ast::*;

/// Walks the direct children of `stmt` in source order, calling `visit`
/// on each until it returns `Some`, in which case that value is returned
/// immediately.
pub fn for_each_child_statement<'a, R>(
    stmt: &Statement<'a>,
    visit: &mut impl FnMut(&Statement<'a>) -> Option<R>,
    visit_expr: &mut impl FnMut(&Expression<'a>) -> Option<R>,
) -> Option<R> {
    match stmt {
        Statement::ExpressionStatement(n) => visit_expr(&n.expression),
        Statement::BlockStatement(n) => n.body.iter().find_map(|s| visit(s)),
        Statement::EmptyStatement(_) => None,
        Statement::VariableStatement(n) => n.declarations.iter().find_map(|d| {
            d.init.as_ref().and_then(|e| visit_expr(e))
        }),
        Statement::IfStatement(n) => visit_expr(&n.test)
            .or_else(|| visit(&n.consequent))
            .or_else(|| n.alternate.as_ref().and_then(|a| visit(a))),
        Statement::DoWhileStatement(n) => visit(&n.body).or_else(|| visit_expr(&n.test)),
        Statement::WhileStatement(n) => visit_expr(&n.test).or_else(|| visit(&n.body)),
        Statement::ForStatement(n) => n
            .test
            .as_ref()
            .and_then(|e| visit_expr(e))
            .or_else(|| n.update.as_ref().and_then(|e| visit_expr(e)))
            .or_else(|| visit(&n.body)),
        Statement::ForInStatement(n) => visit_expr(&n.right).or_else(|| visit(&n.body)),
        Statement::ForOfStatement(n) => visit_expr(&n.right).or_else(|| visit(&n.body)),
        Statement::ContinueStatement(_) | Statement::BreakStatement(_) => None,
        Statement::ReturnStatement(n) => n.argument.as_ref().and_then(|e| visit_expr(e)),
        Statement::WithStatement(n) => visit_expr(&n.object).or_else(|| visit(&n.body)),
        Statement::SwitchStatement(n) => visit_expr(&n.discriminant).or_else(|| {
            n.cases.iter().find_map(|case| {
                case.test
                    .as_ref()
                    .and_then(|e| visit_expr(e))
                    .or_else(|| case.consequent.iter().find_map(|s| visit(s)))
            })
        }),
        Statement::LabeledStatement(n) => visit(&n.body),
        Statement::ThrowStatement(n) => visit_expr(&n.argument),
        Statement::TryStatement(n) => n
            .block
            .body
            .iter()
            .find_map(|s| visit(s))
            .or_else(|| {
                n.handler.as_ref().and_then(|h| h.body.body.iter().find_map(|s| visit(s)))
            })
            .or_else(|| n.finalizer.as_ref().and_then(|b| b.body.iter().find_map(|s| visit(s)))),
        Statement::DebuggerStatement(_) => None,
        Statement::FunctionDeclaration(n) => {
            n.body.as_ref().and_then(|b| b.body.iter().find_map(|s| visit(s)))
        }
        Statement::ClassDeclaration(_) => None,
        Statement::Declaration(_) => None,
    }
}

/// Walks the direct child expressions of `expr` in source order.
pub fn for_each_child_expression<'a, R>(
    expr: &Expression<'a>,
    visit: &mut impl FnMut(&Expression<'a>) -> Option<R>,
) -> Option<R> {
    match expr {
        Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::NumericLiteral(_)
        | Expression::BigIntLiteral(_)
        | Expression::StringLiteral(_)
        | Expression::RegExpLiteral(_)
        | Expression::Identifier(_)
        | Expression::ThisExpression(_)
        | Expression::Super(_)
        | Expression::Missing(_) => None,
        Expression::TemplateLiteral(n) => n.expressions.iter().find_map(visit),
        Expression::TaggedTemplateExpression(n) => {
            visit(&n.tag).or_else(|| n.quasi.expressions.iter().find_map(visit))
        }
        Expression::PrivateFieldExpression(n) => visit(&n.object),
        Expression::ArrayExpression(n) => n.elements.iter().find_map(|el| match el {
            ArrayExpressionElement::Expression(e) => visit(e),
            ArrayExpressionElement::Spread(s) => visit(&s.argument),
            ArrayExpressionElement::Elision(_) => None,
        }),
        Expression::ObjectExpression(n) => n.properties.iter().find_map(|p| match p {
            ObjectPropertyKind::Property(p) => visit(&p.value),
            ObjectPropertyKind::Spread(s) => visit(&s.argument),
        }),
        Expression::Function(_) | Expression::ArrowFunction(_) | Expression::ClassExpression(_) => None,
        Expression::UnaryExpression(n) => visit(&n.argument),
        Expression::UpdateExpression(n) => visit(&n.argument),
        Expression::BinaryExpression(n) => visit(&n.left).or_else(|| visit(&n.right)),
        Expression::LogicalExpression(n) => visit(&n.left).or_else(|| visit(&n.right)),
        Expression::ConditionalExpression(n) => {
            visit(&n.test).or_else(|| visit(&n.consequent)).or_else(|| visit(&n.alternate))
        }
        Expression::AssignmentExpression(n) => {
            let left = match &n.left {
                AssignmentTarget::Expression(e) => visit(e),
                AssignmentTarget::Pattern(_) => None,
            };
            left.or_else(|| visit(&n.right))
        }
        Expression::SequenceExpression(n) => n.expressions.iter().find_map(visit),
        Expression::MemberExpression(n) => match n.as_ref() {
            MemberExpression::Static(n) => visit(&n.object),
            MemberExpression::Computed(n) => visit(&n.object).or_else(|| visit(&n.expression)),
        },
        Expression::CallExpression(n) => visit(&n.callee).or_else(|| {
            n.arguments.iter().find_map(|a| match a {
                Argument::Expression(e) => visit(e),
                Argument::Spread(s) => visit(&s.argument),
            })
        }),
        Expression::NewExpression(n) => visit(&n.callee).or_else(|| {
            n.arguments.as_ref().and_then(|args| {
                args.iter().find_map(|a| match a {
                    Argument::Expression(e) => visit(e),
                    Argument::Spread(s) => visit(&s.argument),
                })
            })
        }),
        Expression::ChainExpression(n) => visit(&n.expression),
        Expression::SpreadElement(n) => visit(&n.argument),
        Expression::YieldExpression(n) => n.argument.as_ref().and_then(visit),
        Expression::AwaitExpression(n) => visit(&n.argument),
        Expression::ParenthesizedExpression(n) => visit(&n.expression),
        Expression::TsAsExpression(n) => visit(&n.expression),
        Expression::TsSatisfiesExpression(n) => visit(&n.expression),
        Expression::TsTypeAssertion(n) => visit(&n.expression),
        Expression::TsNonNullExpression(n) => visit(&n.expression),
        Expression::TsInstantiationExpression(n) => visit(&n.expression),
        Expression::JsxElement(_) | Expression::JsxFragment(_) => None,
        Expression::ImportExpression(n) => visit(&n.source).or_else(|| n.options.as_ref().and_then(visit)),
        Expression::MetaProperty(_) => None,
        Expression::PrivateInExpression(n) => visit(&n.right),
    }
}

impl<'a> MemberExpression<'a> {
    fn as_ref(&self) -> &Self {
        self
    }
}
