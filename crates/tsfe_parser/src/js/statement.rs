//! Statement grammar, spec §5.2-§5.3: the dispatcher every statement list
//! (source elements, block bodies, `switch` clause bodies, labeled-statement
//! bodies, loop bodies, ...) funnels through, plus the forms that only ever
//! occur at statement position (control flow, `var`/`let`/`const`, ambient
//! declarations, labels).
//!
//! `parse_statement` is the only thing standing between
//! [`Parser::parse_program`](crate::Parser::parse_program)'s top-level loop
//! and an infinite loop on malformed input, since that loop has no
//! `is_element_start`/closing-token guard of its own: every arm here either
//! delegates to a production that consumes at least one token or falls
//! through to [`Self::parse_expression_statement`], whose own fallback
//! guarantees forward progress.

use tsfe_span::{GetSpan, Span};
use tsfe_syntax::Context;
use tsfe_ast::{
    BindingIdentifier, BindingPattern, BlockStatement, BreakStatement, CatchClause, CatchParam,
    ContinueStatement, DebuggerStatement, DoWhileStatement, EmptyStatement, Expression,
    ExpressionStatement, ForBinding, ForInStatement, ForInit, ForOfStatement, ForStatement,
    IdentifierReference, IfStatement, LabeledStatement, ReturnStatement, Statement, SwitchCase,
    SwitchStatement, ThrowStatement, TryStatement, VariableDeclarationKind, VariableDeclarator,
    VariableStatement, WhileStatement, WithStatement,
};

use crate::diagnostics;
use crate::kind::Kind;
use crate::list::ParsingContext;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement<'a> {
        let start = self.start_span();
        self.expect(Kind::LCurly);
        let opening = Span::new(start, self.prev_token_end);
        let body_start = self.start_span();
        let body = self.parse_list(ParsingContext::BlockStatements, |_| true, |p| p.parse_statement());
        let body_span = self.end_span(body_start);
        self.expect_closing(Kind::RCurly, opening);
        BlockStatement { span: self.end_span(start), body: self.ast.node_array(body_span, body) }
    }

    pub(crate) fn parse_statement(&mut self) -> Statement<'a> {
        let start = self.start_span();
        match self.cur_kind() {
            Kind::At => {
                let decorators = self.parse_decorator_list();
                return Statement::ClassDeclaration(
                    self.ast.alloc(self.parse_class_declaration(start, decorators, false)),
                );
            }
            Kind::LCurly => return Statement::BlockStatement(self.ast.alloc(self.parse_block_statement())),
            Kind::Semicolon => return self.parse_empty_statement(start),
            Kind::Var => return self.parse_variable_statement(start, VariableDeclarationKind::Var, false),
            Kind::Const if self.at_const_enum_start() => {
                self.bump_any();
                return Statement::Declaration(
                    self.ast.alloc(self.parse_enum_declaration(start, true, false)),
                );
            }
            Kind::Const => return self.parse_variable_statement(start, VariableDeclarationKind::Const, false),
            Kind::Let if self.at_let_declaration_start() => {
                return self.parse_variable_statement(start, VariableDeclarationKind::Let, false);
            }
            Kind::Function => {
                return Statement::FunctionDeclaration(
                    self.ast.alloc(self.parse_function_core(start, false)),
                );
            }
            Kind::Class => {
                let decorators = self.ast.missing_node_array(start);
                return Statement::ClassDeclaration(
                    self.ast.alloc(self.parse_class_declaration(start, decorators, false)),
                );
            }
            Kind::If => return self.parse_if_statement(start),
            Kind::Do => return self.parse_do_while_statement(start),
            Kind::While => return self.parse_while_statement(start),
            Kind::For => return self.parse_for_statement(start),
            Kind::Continue => return self.parse_continue_statement(start),
            Kind::Break => return self.parse_break_statement(start),
            Kind::Return => return self.parse_return_statement(start),
            Kind::With => return self.parse_with_statement(start),
            Kind::Switch => return self.parse_switch_statement(start),
            Kind::Throw => return self.parse_throw_statement(start),
            Kind::Try => return self.parse_try_statement(start),
            Kind::Debugger => return self.parse_debugger_statement(start),
            Kind::Import if self.at_import_declaration_start() => {
                return self.parse_import_declaration_statement(start);
            }
            Kind::Export => return self.parse_export_statement(start),
            Kind::Interface if self.ts_enabled() => {
                return Statement::Declaration(self.ast.alloc(self.parse_interface_declaration(start)));
            }
            Kind::Enum if self.ts_enabled() => {
                return Statement::Declaration(
                    self.ast.alloc(self.parse_enum_declaration(start, false, false)),
                );
            }
            _ => {}
        }

        if self.at_contextual("async")
            && self.lookahead(|p| {
                p.bump_any();
                !p.cur_token().has_preceding_line_break() && p.at(Kind::Function)
            })
        {
            self.bump_any();
            return Statement::FunctionDeclaration(self.ast.alloc(self.parse_function_core(start, true)));
        }

        if self.ts_enabled()
            && self.at_contextual("declare")
            && self.lookahead(|p| {
                p.bump_any();
                !p.cur_token().has_preceding_line_break() && p.at_ambient_declaration_start()
            })
        {
            self.bump_any();
            return self.with_context_added(Context::AMBIENT, |p| p.parse_ambient_declaration(start));
        }

        if self.at_contextual("abstract") && self.lookahead(|p| {
            p.bump_any();
            p.at(Kind::Class)
        }) {
            let decorators = self.ast.missing_node_array(start);
            return Statement::ClassDeclaration(
                self.ast.alloc(self.parse_class_declaration(start, decorators, false)),
            );
        }

        if self.ts_enabled() && self.at_type_alias_start() {
            return Statement::Declaration(
                self.ast.alloc(self.parse_type_alias_declaration(start, false)),
            );
        }

        if self.ts_enabled() && self.at_module_declaration_start() {
            return self.parse_module_declaration_statement(start, false);
        }

        if self.at_labeled_statement_start() {
            return self.parse_labeled_statement(start);
        }

        self.parse_expression_statement(start)
    }

    /// Everything `declare` can prefix: the leading `declare` keyword has
    /// already been consumed and `Context::AMBIENT` is already active.
    fn parse_ambient_declaration(&mut self, start: u32) -> Statement<'a> {
        match self.cur_kind() {
            Kind::Var => self.parse_variable_statement(start, VariableDeclarationKind::Var, true),
            Kind::Const if self.at_const_enum_start() => {
                self.bump_any();
                Statement::Declaration(self.ast.alloc(self.parse_enum_declaration(start, true, true)))
            }
            Kind::Const => self.parse_variable_statement(start, VariableDeclarationKind::Const, true),
            Kind::Let => self.parse_variable_statement(start, VariableDeclarationKind::Let, true),
            Kind::Function => {
                Statement::FunctionDeclaration(self.ast.alloc(self.parse_function_core(start, false)))
            }
            Kind::Class => {
                let decorators = self.ast.missing_node_array(start);
                Statement::ClassDeclaration(
                    self.ast.alloc(self.parse_class_declaration(start, decorators, true)),
                )
            }
            Kind::Interface => {
                Statement::Declaration(self.ast.alloc(self.parse_interface_declaration(start)))
            }
            Kind::Enum => {
                Statement::Declaration(self.ast.alloc(self.parse_enum_declaration(start, false, true)))
            }
            _ if self.at_contextual("abstract")
                && self.lookahead(|p| {
                    p.bump_any();
                    p.at(Kind::Class)
                }) =>
            {
                let decorators = self.ast.missing_node_array(start);
                Statement::ClassDeclaration(
                    self.ast.alloc(self.parse_class_declaration(start, decorators, true)),
                )
            }
            _ if self.at_type_alias_start() => {
                Statement::Declaration(self.ast.alloc(self.parse_type_alias_declaration(start, true)))
            }
            _ if self.at_contextual("global") => {
                Statement::Declaration(self.ast.alloc(self.parse_module_declaration(start, true)))
            }
            _ if self.at_contextual("namespace") || self.at_contextual("module") => {
                Statement::Declaration(self.ast.alloc(self.parse_module_declaration(start, true)))
            }
            _ => {
                self.unexpected();
                self.bump_any();
                Statement::ExpressionStatement(self.ast.alloc(ExpressionStatement {
                    span: self.end_span(start),
                    expression: Expression::Missing(Span::empty(start)),
                }))
            }
        }
    }

    fn at_ambient_declaration_start(&mut self) -> bool {
        matches!(
            self.cur_kind(),
            Kind::Var | Kind::Const | Kind::Let | Kind::Function | Kind::Class | Kind::Interface | Kind::Enum
        ) || self.at_contextual("abstract")
            || self.at_contextual("global")
            || self.at_contextual("namespace")
            || self.at_contextual("module")
            || self.at_type_alias_start()
    }

    fn at_const_enum_start(&mut self) -> bool {
        self.lookahead(|p| {
            p.bump_any();
            p.at(Kind::Enum)
        })
    }

    fn at_let_declaration_start(&mut self) -> bool {
        self.lookahead(|p| {
            p.bump_any();
            p.at_identifier_name() || matches!(p.cur_kind(), Kind::LBracket | Kind::LCurly)
        })
    }

    fn at_type_alias_start(&mut self) -> bool {
        self.at_contextual("type")
            && self.lookahead(|p| {
                p.bump_any();
                !p.cur_token().has_preceding_line_break() && p.at_identifier_name()
            })
    }

    fn at_module_declaration_start(&mut self) -> bool {
        (self.at_contextual("namespace") || self.at_contextual("module"))
            && self.lookahead(|p| {
                p.bump_any();
                !p.cur_token().has_preceding_line_break()
                    && (p.at_identifier_name() || p.at(Kind::StringLiteral))
            })
    }

    /// `parse_module_declaration` consumes the leading `namespace`/`module`
    /// keyword itself, so the token it's called on must still be that
    /// keyword, not the name after it.
    fn parse_module_declaration_statement(&mut self, start: u32, declare: bool) -> Statement<'a> {
        Statement::Declaration(self.ast.alloc(self.parse_module_declaration(start, declare)))
    }

    /// `import` is only a module-level declaration when it's not the start
    /// of an `import(...)`/`import.meta` expression.
    fn at_import_declaration_start(&mut self) -> bool {
        self.lookahead(|p| {
            p.bump_any();
            !matches!(p.cur_kind(), Kind::LParen | Kind::Dot)
        })
    }

    fn at_labeled_statement_start(&mut self) -> bool {
        self.at_identifier_name()
            && self.lookahead(|p| {
                p.bump_any();
                p.at(Kind::Colon)
            })
    }

    fn parse_labeled_statement(&mut self, start: u32) -> Statement<'a> {
        let label = self.parse_binding_identifier();
        self.expect(Kind::Colon);
        let body = self.parse_statement();
        Statement::LabeledStatement(self.ast.alloc(LabeledStatement { span: self.end_span(start), label, body }))
    }

    /// Guarantees forward progress: a token that can't start an expression
    /// is consumed unconditionally rather than handed to `parse_expression`,
    /// whose own `Missing` fallback doesn't consume anything.
    fn parse_expression_statement(&mut self, start: u32) -> Statement<'a> {
        if !self.at_expression_start() {
            self.unexpected();
            self.bump_any();
            return Statement::ExpressionStatement(self.ast.alloc(ExpressionStatement {
                span: self.end_span(start),
                expression: Expression::Missing(Span::empty(start)),
            }));
        }
        let expression = self.parse_expression();
        self.asi();
        Statement::ExpressionStatement(self.ast.alloc(ExpressionStatement { span: self.end_span(start), expression }))
    }

    fn parse_empty_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        Statement::EmptyStatement(self.ast.alloc(EmptyStatement { span: self.end_span(start) }))
    }

    fn parse_variable_statement(
        &mut self,
        start: u32,
        kind: VariableDeclarationKind,
        declare: bool,
    ) -> Statement<'a> {
        self.bump_any();
        let declarations = self.parse_non_empty_delimited_list(
            ParsingContext::VariableDeclarations,
            Kind::Semicolon,
            |p| p.parse_variable_declarator(kind),
        );
        if declarations.is_missing_list() {
            self.error(diagnostics::variable_declaration_expected(Span::empty(self.prev_token_end)));
        }
        self.asi();
        Statement::VariableStatement(self.ast.alloc(VariableStatement {
            span: self.end_span(start),
            kind,
            declarations,
            declare,
        }))
    }

    fn parse_variable_declarator(&mut self, _kind: VariableDeclarationKind) -> VariableDeclarator<'a> {
        let start = self.start_span();
        let id = self.parse_binding_pattern_core();
        let definite = matches!(id, BindingPattern::BindingIdentifier(_)) && self.eat(Kind::Bang);
        let type_annotation = self.parse_optional_type_annotation();
        let init = if self.eat(Kind::Eq) { Some(self.parse_assignment_expression()) } else { None };
        VariableDeclarator { span: self.end_span(start), id, type_annotation, init, definite }
    }

    fn parse_if_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        self.expect(Kind::LParen);
        let test = self.parse_expression();
        self.expect(Kind::RParen);
        let consequent = self.parse_statement();
        let alternate = if self.eat(Kind::Else) { Some(self.parse_statement()) } else { None };
        Statement::IfStatement(self.ast.alloc(IfStatement {
            span: self.end_span(start),
            test,
            consequent,
            alternate,
        }))
    }

    fn parse_do_while_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        let body = self.parse_statement();
        self.expect(Kind::While);
        self.expect(Kind::LParen);
        let test = self.parse_expression();
        self.expect(Kind::RParen);
        // `do ... while (x)` never needs ASI's line-break grace: the
        // trailing `;` is unconditionally optional.
        self.eat(Kind::Semicolon);
        Statement::DoWhileStatement(self.ast.alloc(DoWhileStatement { span: self.end_span(start), body, test }))
    }

    fn parse_while_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        self.expect(Kind::LParen);
        let test = self.parse_expression();
        self.expect(Kind::RParen);
        let body = self.parse_statement();
        Statement::WhileStatement(self.ast.alloc(WhileStatement { span: self.end_span(start), test, body }))
    }

    fn parse_with_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        self.expect(Kind::LParen);
        let object = self.parse_expression();
        self.expect(Kind::RParen);
        let body = self.parse_statement();
        Statement::WithStatement(self.ast.alloc(WithStatement { span: self.end_span(start), object, body }))
    }

    fn parse_optional_same_line_label(&mut self) -> Option<IdentifierReference<'a>> {
        if !self.cur_token().has_preceding_line_break() && self.at_identifier_name() {
            Some(self.parse_identifier_reference())
        } else {
            None
        }
    }

    fn parse_continue_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        let label = self.parse_optional_same_line_label();
        self.asi();
        Statement::ContinueStatement(self.ast.alloc(ContinueStatement { span: self.end_span(start), label }))
    }

    fn parse_break_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        let label = self.parse_optional_same_line_label();
        self.asi();
        Statement::BreakStatement(self.ast.alloc(BreakStatement { span: self.end_span(start), label }))
    }

    fn parse_return_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        if !self.ctx.has_allow_return() && !self.allow_return_outside_function {
            self.error(diagnostics::return_statement_not_allowed_here(Span::new(start, self.prev_token_end)));
        }
        let argument = if !self.cur_token().has_preceding_line_break() && self.at_expression_start() {
            Some(self.parse_expression())
        } else {
            None
        };
        self.asi();
        Statement::ReturnStatement(self.ast.alloc(ReturnStatement { span: self.end_span(start), argument }))
    }

    fn parse_throw_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        if self.cur_token().has_preceding_line_break() {
            self.error(diagnostics::line_break_before_throw_argument(Span::empty(self.prev_token_end)));
        }
        let argument = self.parse_expression();
        self.asi();
        Statement::ThrowStatement(self.ast.alloc(ThrowStatement { span: self.end_span(start), argument }))
    }

    fn parse_try_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        let block = self.parse_block_statement();
        let handler = if self.at(Kind::Catch) { Some(self.parse_catch_clause()) } else { None };
        let finalizer = if self.eat(Kind::Finally) { Some(self.parse_block_statement()) } else { None };
        if handler.is_none() && finalizer.is_none() {
            self.error_expected(Kind::Catch);
        }
        Statement::TryStatement(self.ast.alloc(TryStatement {
            span: self.end_span(start),
            block,
            handler,
            finalizer,
        }))
    }

    fn parse_catch_clause(&mut self) -> CatchClause<'a> {
        let start = self.start_span();
        self.expect(Kind::Catch);
        let param = if self.eat(Kind::LParen) {
            let pattern = self.parse_binding_pattern_core();
            let type_annotation = self.parse_optional_type_annotation();
            self.expect(Kind::RParen);
            Some(CatchParam { pattern, type_annotation })
        } else {
            None
        };
        let body = self.parse_block_statement();
        CatchClause { span: self.end_span(start), param, body }
    }

    fn parse_debugger_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        self.asi();
        Statement::DebuggerStatement(self.ast.alloc(DebuggerStatement { span: self.end_span(start) }))
    }

    fn parse_switch_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        self.expect(Kind::LParen);
        let discriminant = self.parse_expression();
        self.expect(Kind::RParen);
        let lcurly_start = self.start_span();
        self.expect(Kind::LCurly);
        let opening = Span::new(lcurly_start, self.prev_token_end);
        let body_start = self.start_span();
        let cases = self.parse_list(
            ParsingContext::SwitchClauses,
            |p| matches!(p.cur_kind(), Kind::Case | Kind::Default),
            |p| p.parse_switch_case(),
        );
        let cases_span = self.end_span(body_start);
        self.expect_closing(Kind::RCurly, opening);
        Statement::SwitchStatement(self.ast.alloc(SwitchStatement {
            span: self.end_span(start),
            discriminant,
            cases: self.ast.node_array(cases_span, cases),
        }))
    }

    fn parse_switch_case(&mut self) -> SwitchCase<'a> {
        let start = self.start_span();
        let test = if self.eat(Kind::Case) {
            Some(self.parse_expression())
        } else {
            self.expect(Kind::Default);
            None
        };
        self.expect(Kind::Colon);
        let body_start = self.start_span();
        let consequent = self.parse_list(
            ParsingContext::SwitchClauseStatements,
            |p| !matches!(p.cur_kind(), Kind::Case | Kind::Default),
            |p| p.parse_statement(),
        );
        let body_span = self.end_span(body_start);
        SwitchCase {
            span: self.end_span(start),
            test,
            consequent: self.ast.node_array(body_span, consequent),
        }
    }

    fn for_variable_declaration_kind(kind: Kind) -> VariableDeclarationKind {
        match kind {
            Kind::Var => VariableDeclarationKind::Var,
            Kind::Let => VariableDeclarationKind::Let,
            Kind::Const => VariableDeclarationKind::Const,
            _ => unreachable!("only called after matching var/let/const"),
        }
    }

    fn at_for_declaration_start(&mut self) -> bool {
        match self.cur_kind() {
            Kind::Var => true,
            Kind::Const => !self.at_const_enum_start(),
            Kind::Let => self.at_let_declaration_start(),
            _ => false,
        }
    }

    fn parse_for_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();
        let is_await = self.eat_contextual("await");
        self.expect(Kind::LParen);

        if self.eat(Kind::Semicolon) {
            return self.parse_for_statement_rest(start, None);
        }

        if self.at_for_declaration_start() {
            return self.parse_for_with_declaration(start, is_await);
        }

        self.parse_for_with_binding_or_expression(start, is_await)
    }

    fn parse_for_with_declaration(&mut self, start: u32, is_await: bool) -> Statement<'a> {
        let kind = Self::for_variable_declaration_kind(self.cur_kind());
        self.bump_any();
        let decl_start = self.start_span();
        let first = self.with_context_added(Context::DISALLOW_IN, |p| p.parse_variable_declarator(kind));
        if self.at(Kind::In) || self.at_contextual("of") {
            let left = ForBinding::VariableDeclaration { kind, declarator: first };
            return self.parse_for_in_or_of_rest(start, is_await, left);
        }
        let mut declarations = self.ast.new_vec();
        declarations.push(first);
        while self.eat(Kind::Comma) {
            declarations.push(self.with_context_added(Context::DISALLOW_IN, |p| p.parse_variable_declarator(kind)));
        }
        let declarations = self.ast.node_array(self.end_span(decl_start), declarations);
        self.expect(Kind::Semicolon);
        self.parse_for_statement_rest(start, Some(ForInit::VariableDeclaration { kind, declarations }))
    }

    fn parse_for_with_binding_or_expression(&mut self, start: u32, is_await: bool) -> Statement<'a> {
        let for_in_of_target = self.try_parse(|p| {
            let expr = p.with_context_added(Context::DISALLOW_IN, |p| p.parse_assignment_expression());
            if p.at(Kind::In) || p.at_contextual("of") { Some(expr) } else { None }
        });
        if let Some(expr) = for_in_of_target {
            let left = self.expression_to_for_binding(expr);
            return self.parse_for_in_or_of_rest(start, is_await, left);
        }
        let init_expr = self.with_context_added(Context::DISALLOW_IN, |p| p.parse_expression());
        self.expect(Kind::Semicolon);
        self.parse_for_statement_rest(start, Some(ForInit::Expression(init_expr)))
    }

    /// Reinterprets an already-parsed expression as the binding of a
    /// `for-in`/`for-of` loop with no `var`/`let`/`const`, e.g. `for (a of
    /// b)`. Only identifier targets round-trip through
    /// [`Self::expression_to_binding_pattern`] today; anything else (a
    /// member expression, a destructuring literal) degrades to a
    /// placeholder binding with a diagnostic rather than losing the
    /// statement's span coverage.
    fn expression_to_for_binding(&mut self, expr: Expression<'a>) -> ForBinding<'a> {
        if let Some(pattern) = self.expression_to_binding_pattern(&expr) {
            return ForBinding::Pattern(pattern);
        }
        let span = expr.span();
        self.error(diagnostics::identifier_expected(span, Kind::Ident));
        let placeholder = BindingIdentifier { span: Span::empty(span.start), name: "" };
        ForBinding::Pattern(BindingPattern::BindingIdentifier(self.ast.alloc(placeholder)))
    }

    fn parse_for_in_or_of_rest(&mut self, start: u32, is_await: bool, left: ForBinding<'a>) -> Statement<'a> {
        if self.eat(Kind::In) {
            let right = self.parse_expression();
            self.expect(Kind::RParen);
            let body = self.parse_statement();
            return Statement::ForInStatement(self.ast.alloc(ForInStatement {
                span: self.end_span(start),
                left,
                right,
                body,
            }));
        }
        self.eat_contextual("of");
        let right = self.parse_assignment_expression();
        self.expect(Kind::RParen);
        let body = self.parse_statement();
        Statement::ForOfStatement(self.ast.alloc(ForOfStatement {
            span: self.end_span(start),
            is_await,
            left,
            right,
            body,
        }))
    }

    fn parse_for_statement_rest(&mut self, start: u32, init: Option<ForInit<'a>>) -> Statement<'a> {
        let test = if self.at(Kind::Semicolon) { None } else { Some(self.parse_expression()) };
        self.expect(Kind::Semicolon);
        let update = if self.at(Kind::RParen) { None } else { Some(self.parse_expression()) };
        self.expect(Kind::RParen);
        let body = self.parse_statement();
        Statement::ForStatement(self.ast.alloc(ForStatement {
            span: self.end_span(start),
            init,
            test,
            update,
            body,
        }))
    }
}
