//! End-to-end scenarios with literal inputs and their expected shape, a
//! test seed rather than exhaustive coverage: each one pins down a
//! specific grammar decision (ambiguous `<`, conditional-type context,
//! top-level `await` legality, list-recovery) against a concrete input
//! instead of only unit-level component behavior.

use tsfe_allocator::Allocator;
use tsfe_ast::{ArrowFunctionBody, Declaration, Expression, Statement, TsType};
use tsfe_parser::Parser;
use tsfe_span::{GetSpan, ScriptKind, SourceType};

fn parse<'a>(allocator: &'a Allocator, source: &'a str, kind: ScriptKind) -> tsfe_parser::ParserReturn<'a> {
    Parser::new(allocator, source, SourceType::from_script_kind(kind)).parse()
}

#[test]
fn numeric_variable_declaration() {
    let allocator = Allocator::default();
    let ret = parse(&allocator, "const i = 123;", ScriptKind::Ts);
    assert!(ret.errors.is_empty());
    assert_eq!(ret.program.statements.len(), 1);

    let Statement::VariableStatement(stmt) = &ret.program.statements[0] else {
        panic!("expected a variable statement");
    };
    assert_eq!(stmt.declarations.len(), 1);
    let decl = &stmt.declarations[0];
    assert!(decl.type_annotation.is_none());
    let tsfe_ast::BindingPattern::BindingIdentifier(id) = &decl.id else {
        panic!("expected a plain binding identifier");
    };
    assert_eq!(id.name, "i");
    let Some(Expression::NumericLiteral(lit)) = &decl.init else {
        panic!("expected a numeric initializer");
    };
    assert_eq!(lit.raw, "123");
}

#[test]
fn type_alias_body_is_a_conditional_type() {
    let allocator = Allocator::default();
    let ret = parse(&allocator, "type X<T> = T extends U ? A : B;", ScriptKind::Ts);
    assert!(ret.errors.is_empty());
    assert_eq!(ret.program.statements.len(), 1);

    let Statement::Declaration(decl) = &ret.program.statements[0] else {
        panic!("expected a declaration");
    };
    let Declaration::TsTypeAliasDeclaration(alias) = decl.as_ref() else {
        panic!("expected a type alias declaration");
    };
    let type_parameters = alias.type_parameters.as_ref().expect("type parameters");
    assert_eq!(type_parameters.params.len(), 1);
    assert!(matches!(alias.type_annotation, TsType::ConditionalType(_)));
}

#[test]
fn arrow_function_with_an_explicit_type_parameter() {
    let allocator = Allocator::default();
    let ret = parse(&allocator, "const f = <T>(x: T) => x;", ScriptKind::Ts);
    assert!(ret.errors.is_empty());
    assert_eq!(ret.program.statements.len(), 1);

    let Statement::VariableStatement(stmt) = &ret.program.statements[0] else {
        panic!("expected a variable statement");
    };
    let Some(Expression::ArrowFunction(arrow)) = &stmt.declarations[0].init else {
        panic!("expected an arrow function initializer");
    };
    let type_parameters = arrow.type_parameters.as_ref().expect("type parameters");
    assert_eq!(type_parameters.params.len(), 1);
    assert_eq!(type_parameters.params[0].name.name, "T");
    assert_eq!(arrow.params.len(), 1);
}

#[test]
fn optional_chain_propagates_through_member_and_call_and_element_access() {
    let allocator = Allocator::default();
    let ret = parse(&allocator, "a?.b.c?.()?.[0];", ScriptKind::Ts);
    assert!(ret.errors.is_empty());

    let Statement::ExpressionStatement(stmt) = &ret.program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::ChainExpression(chain) = &stmt.expression else {
        panic!("an expression with any `?.` in its chain must be wrapped in a ChainExpression");
    };
    // The outermost node is the final `?.[0]`, a computed member access
    // carrying its own `optional` flag.
    let Expression::MemberExpression(member) = &chain.expression else {
        panic!("expected the chain's head to be a member expression");
    };
    assert!(member.optional());
}

#[test]
fn await_inside_an_async_arrow_is_always_legal() {
    // `await` here belongs to the arrow's own `async`-ness, not to the
    // enclosing file, so it is legal whether or not the file is a module.
    let allocator = Allocator::default();
    let ret = parse(&allocator, "async x => await x;", ScriptKind::Ts);
    assert!(!ret.program.is_module());
    assert!(ret.errors.is_empty());

    let Statement::ExpressionStatement(stmt) = &ret.program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::ArrowFunction(arrow) = &stmt.expression else {
        panic!("expected an arrow function");
    };
    assert!(matches!(arrow.body, ArrowFunctionBody::Expression(Expression::AwaitExpression(_))));
}

#[test]
fn bare_top_level_await_is_a_diagnostic_only_outside_modules() {
    let allocator = Allocator::default();
    let script = parse(&allocator, "await x;", ScriptKind::Ts);
    assert!(!script.program.is_module());
    assert!(!script.errors.is_empty());

    let module = parse(&allocator, "export {};\nawait x;", ScriptKind::Ts);
    assert!(module.program.is_module());
    assert!(module.errors.is_empty());
}

#[test]
fn bare_const_keyword_recovers_with_a_missing_declaration_list() {
    let allocator = Allocator::default();
    let ret = parse(&allocator, "const", ScriptKind::Ts);
    assert!(!ret.errors.is_empty());
    assert_eq!(ret.program.statements.len(), 1);

    let Statement::VariableStatement(stmt) = &ret.program.statements[0] else {
        panic!("expected a variable statement");
    };
    assert!(stmt.declarations.is_missing_list());
    assert!(stmt.declarations.is_empty());
    // Recovery still leaves every node's span inside the program's span.
    assert!(ret.program.span.contains_inclusive(stmt.span()));
}
