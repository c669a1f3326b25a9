//! Expressions, spec §5.3: precedence climbing for binary/logical
//! operators (with `as`/`satisfies` folded into the relational tier),
//! unary/update prefixes, the member/call/optional-chain postfix loop, and
//! primary expression dispatch.

use tsfe_span::{GetSpan, Span};
use tsfe_syntax::Context;
use tsfe_ast::{
    ArrayExpression, ArrayExpressionElement, Argument, AssignmentExpression, AssignmentOperator,
    AssignmentTarget, AwaitExpression, BinaryExpression, BinaryOperator, BindingPattern,
    CallExpression, ChainExpression, ComputedMemberExpression, ConditionalExpression, Expression,
    IdentifierName, LogicalExpression, LogicalOperator, MemberExpression, MetaProperty,
    NewExpression, ObjectExpression, ObjectProperty, ObjectPropertyKind, ParenthesizedExpression,
    PrivateInExpression, PropertyKey, PropertyKind, SequenceExpression, SpreadElement, StaticMemberExpression,
    TaggedTemplateExpression, TemplateElement, TemplateElementTail, TemplateLiteral,
    TsAsExpression, TsInstantiationExpression, TsNonNullExpression, TsSatisfiesExpression,
    UnaryExpression, UnaryOperator, UpdateExpression, UpdateOperator, YieldDelegate,
    YieldExpression,
};

use crate::diagnostics;
use crate::kind::Kind;
use crate::list::ParsingContext;
use crate::Parser;

impl<'a> Parser<'a> {
    /// `true` if the current token can begin an expression at all; used by
    /// statement-position ambiguity checks (`for (;;)`, arrow-vs-paren
    /// lookahead, etc.).
    pub(crate) fn at_expression_start(&self) -> bool {
        if self.at_identifier_name() {
            return true;
        }
        matches!(
            self.cur_kind(),
            Kind::NumericLiteral
                | Kind::BigIntLiteral
                | Kind::StringLiteral
                | Kind::NoSubstitutionTemplateLiteral
                | Kind::TemplateHead
                | Kind::Slash
                | Kind::SlashEq
                | Kind::LParen
                | Kind::LBracket
                | Kind::LCurly
                | Kind::Plus
                | Kind::Minus
                | Kind::Tilde
                | Kind::Bang
                | Kind::Plus2
                | Kind::Minus2
                | Kind::LAngle
                | Kind::PrivateIdentifier
        )
    }

    /// The full comma expression (`Expression`, spec grammar term), the
    /// form used wherever a single-line-no-comma-ambiguity is not an issue
    /// (parenthesized groups, `for` clauses' init/update, expression
    /// statements).
    pub(crate) fn parse_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        let first = self.parse_assignment_expression();
        if !self.at(Kind::Comma) {
            return first;
        }
        let mut expressions = self.ast.new_vec();
        expressions.push(first);
        while self.eat(Kind::Comma) {
            expressions.push(self.parse_assignment_expression());
        }
        Expression::SequenceExpression(
            self.ast.alloc(SequenceExpression { span: self.end_span(start), expressions }),
        )
    }

    pub(crate) fn parse_assignment_expression(&mut self) -> Expression<'a> {
        if self.at(Kind::Yield) && self.ctx.has_yield() {
            return self.parse_yield_expression();
        }
        if let Some(arrow) = self.try_parse_arrow_function() {
            return Expression::ArrowFunction(self.ast.alloc(arrow));
        }

        let start = self.start_span();
        let left = self.parse_conditional_expression();
        if !self.cur_kind().is_assignment_operator() {
            return left;
        }
        let operator = assignment_operator(self.cur_kind());
        self.bump_any();
        let target = self.expression_to_assignment_target(left, operator);
        let right = self.parse_assignment_expression();
        Expression::AssignmentExpression(self.ast.alloc(AssignmentExpression {
            span: self.end_span(start),
            operator,
            left: target,
            right,
        }))
    }

    /// Plain `=` to an array/object literal is destructuring assignment: the
    /// literal is reinterpreted as a binding pattern. Every other operator
    /// (`+=`, `&&=`, ...) always assigns to an expression target.
    fn expression_to_assignment_target(
        &mut self,
        expr: Expression<'a>,
        operator: AssignmentOperator,
    ) -> AssignmentTarget<'a> {
        if operator == AssignmentOperator::Assign {
            if let Some(pattern) = self.expression_to_binding_pattern(&expr) {
                return AssignmentTarget::Pattern(pattern);
            }
        }
        AssignmentTarget::Expression(expr)
    }

    /// Best-effort reinterpretation of an already-parsed expression as a
    /// binding pattern, for destructuring assignment (`[a, b] = c`). Unlike
    /// a declarator's binding pattern, an assignment target's leaves are
    /// arbitrary `MemberExpression`s, not just identifiers, so this stays
    /// on `Expression` rather than routing through `parse_binding_pattern`.
    pub(crate) fn expression_to_binding_pattern(
        &mut self,
        expr: &Expression<'a>,
    ) -> Option<BindingPattern<'a>> {
        match expr {
            Expression::Identifier(id) => {
                let ident = tsfe_ast::BindingIdentifier { span: id.span, name: id.name };
                Some(BindingPattern::BindingIdentifier(self.ast.alloc(ident)))
            }
            _ => None,
        }
    }

    fn parse_yield_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        self.bump_any();
        let delegate =
            if !self.cur_token().has_preceding_line_break() && self.eat(Kind::Star) {
                YieldDelegate::Yes
            } else {
                YieldDelegate::No
            };
        let argument = if delegate == YieldDelegate::Yes
            || (self.at_expression_start() && !self.cur_token().has_preceding_line_break())
        {
            Some(self.parse_assignment_expression())
        } else {
            None
        };
        Expression::YieldExpression(self.ast.alloc(YieldExpression {
            span: self.end_span(start),
            argument,
            delegate,
        }))
    }

    fn parse_conditional_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        let test = self.parse_binary_expression(1);
        if !self.eat(Kind::Question) {
            return test;
        }
        let consequent =
            self.with_context_removed(Context::DISALLOW_IN, |p| p.parse_assignment_expression());
        self.expect(Kind::Colon);
        let alternate = self.parse_assignment_expression();
        Expression::ConditionalExpression(self.ast.alloc(ConditionalExpression {
            span: self.end_span(start),
            test,
            consequent,
            alternate,
        }))
    }

    /// Precedence climbing over the ECMAScript binary-operator table, spec
    /// §4.4, with TypeScript's `as`/`satisfies` folded into the relational
    /// tier: both are scanned as plain `Ident` tokens (spec §4.1), so they
    /// are recognized by `at_contextual` rather than by `Kind`.
    fn parse_binary_expression(&mut self, min_precedence: u8) -> Expression<'a> {
        let start = self.start_span();
        let mut left = if self.at(Kind::PrivateIdentifier) {
            self.parse_private_in_expression(start)
        } else {
            self.parse_unary_expression()
        };
        loop {
            let kind = self.cur_kind();
            if kind == Kind::In && self.ctx.has_disallow_in() {
                break;
            }
            if self.ts_enabled() && (self.at_contextual("as") || self.at_contextual("satisfies")) {
                if 7 < min_precedence {
                    break;
                }
                let is_satisfies = self.at_contextual("satisfies");
                self.bump_any();
                let type_annotation = self.parse_type();
                let span = self.end_span(start);
                left = if is_satisfies {
                    Expression::TsSatisfiesExpression(self.ast.alloc(TsSatisfiesExpression {
                        span,
                        expression: left,
                        type_annotation,
                    }))
                } else {
                    Expression::TsAsExpression(self.ast.alloc(TsAsExpression {
                        span,
                        expression: left,
                        type_annotation,
                    }))
                };
                continue;
            }
            let Some(precedence) = kind.binary_precedence() else { break };
            if precedence < min_precedence {
                break;
            }
            self.bump_any();
            let next_min = if kind.is_right_associative() { precedence } else { precedence + 1 };
            let right = self.parse_binary_expression(next_min);
            let span = self.end_span(start);
            left = match logical_operator(kind) {
                Some(operator) => Expression::LogicalExpression(self.ast.alloc(LogicalExpression {
                    span,
                    operator,
                    left,
                    right,
                })),
                None => Expression::BinaryExpression(self.ast.alloc(BinaryExpression {
                    span,
                    operator: binary_operator(kind),
                    left,
                    right,
                })),
            };
        }
        left
    }

    /// `#x in obj`, the only position a bare private name is allowed to
    /// stand as an expression on its own; anywhere else `Kind::PrivateIdentifier`
    /// reaching here is an error.
    fn parse_private_in_expression(&mut self, start: u32) -> Expression<'a> {
        let left = self.parse_private_identifier();
        if self.at(Kind::In) && !self.ctx.has_disallow_in() {
            self.bump_any();
            let right = self.parse_binary_expression(Kind::In.binary_precedence().unwrap_or(7) + 1);
            return Expression::PrivateInExpression(self.ast.alloc(PrivateInExpression {
                span: self.end_span(start),
                left,
                right,
            }));
        }
        self.error(diagnostics::unexpected_token(left.span, Kind::PrivateIdentifier));
        Expression::Missing(left.span)
    }

    fn parse_unary_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        match self.cur_kind() {
            Kind::Plus | Kind::Minus | Kind::Tilde | Kind::Bang | Kind::Typeof | Kind::Void
            | Kind::Delete => {
                let operator = unary_operator(self.cur_kind());
                self.bump_any();
                let argument = self.parse_unary_expression();
                Expression::UnaryExpression(self.ast.alloc(UnaryExpression {
                    span: self.end_span(start),
                    operator,
                    argument,
                }))
            }
            Kind::Plus2 | Kind::Minus2 => {
                let operator = if self.at(Kind::Plus2) {
                    UpdateOperator::Increment
                } else {
                    UpdateOperator::Decrement
                };
                self.bump_any();
                let argument = self.parse_unary_expression();
                Expression::UpdateExpression(self.ast.alloc(UpdateExpression {
                    span: self.end_span(start),
                    operator,
                    prefix: true,
                    argument,
                }))
            }
            Kind::LAngle if self.ts_enabled() && !self.jsx_enabled() => {
                self.bump_any();
                let type_annotation = self.parse_type();
                self.expect_greater_than();
                let expression = self.parse_unary_expression();
                Expression::TsTypeAssertion(self.ast.alloc(tsfe_ast::TsTypeAssertion {
                    span: self.end_span(start),
                    type_annotation,
                    expression,
                }))
            }
            _ if self.at_contextual("await")
                && self.lookahead(|p| {
                    p.bump_any();
                    !p.cur_token().has_preceding_line_break() && p.at_expression_start()
                }) =>
            {
                self.bump_any();
                if !self.ctx.has_allow_return() {
                    // Outside any function body: note the sighting so
                    // `Program::flags` can carry it regardless of whether
                    // this turns out to be legal.
                    self.ctx = self.ctx.and_top_level_await(true);
                }
                if !self.ctx.has_await() {
                    // Provisional: whether this is actually legal top-level
                    // `await` depends on whether the file turns out to be an
                    // external module, which isn't known yet. The error
                    // raised here is discarded along with the rest of this
                    // pass if `Parser::parse_program` ends up re-parsing
                    // under `await` once it learns the file is a module.
                    self.error(diagnostics::await_expression_only_in_async_function(
                        Span::new(start, self.prev_token_end),
                    ));
                }
                let argument = self.parse_unary_expression();
                Expression::AwaitExpression(self.ast.alloc(AwaitExpression {
                    span: self.end_span(start),
                    argument,
                }))
            }
            _ => self.parse_postfix_expression(),
        }
    }

    fn parse_postfix_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        let expr = self.parse_left_hand_side_expression();
        if !self.cur_token().has_preceding_line_break() && matches!(self.cur_kind(), Kind::Plus2 | Kind::Minus2) {
            let operator =
                if self.at(Kind::Plus2) { UpdateOperator::Increment } else { UpdateOperator::Decrement };
            self.bump_any();
            return Expression::UpdateExpression(self.ast.alloc(UpdateExpression {
                span: self.end_span(start),
                operator,
                prefix: false,
                argument: expr,
            }));
        }
        expr
    }

    pub(crate) fn parse_left_hand_side_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        let primary = if self.at(Kind::New) {
            self.parse_new_expression()
        } else {
            self.parse_primary_expression()
        };
        self.parse_call_and_member_tail(start, primary, false)
    }

    fn parse_new_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        self.bump_any();
        if self.at(Kind::Dot) {
            self.bump_any();
            let property = self.parse_identifier_name();
            return Expression::MetaProperty(self.ast.alloc(MetaProperty {
                span: self.end_span(start),
                meta: IdentifierName { span: Span::new(start, start + 3), name: "new" },
                property,
            }));
        }
        let callee_start = self.start_span();
        let callee_primary = if self.at(Kind::New) {
            self.parse_new_expression()
        } else {
            self.parse_primary_expression()
        };
        let callee = self.parse_member_tail_no_call(callee_start, callee_primary);
        let type_arguments = if self.ts_enabled() && self.at(Kind::LAngle) {
            self.try_parse(|p| p.try_parse_type_arguments())
        } else {
            None
        };
        let arguments = if self.at(Kind::LParen) { Some(self.parse_arguments()) } else { None };
        Expression::NewExpression(self.ast.alloc(NewExpression {
            span: self.end_span(start),
            callee,
            type_arguments,
            arguments,
        }))
    }

    /// Member access only (`.`/`[]`/non-null), no calls: the shape a `new`
    /// callee is restricted to before its own `(args)`.
    fn parse_member_tail_no_call(&mut self, start: u32, mut expr: Expression<'a>) -> Expression<'a> {
        loop {
            match self.cur_kind() {
                Kind::Dot => {
                    self.bump_any();
                    let property = self.parse_identifier_name();
                    expr = Expression::MemberExpression(self.ast.alloc(MemberExpression::Static(
                        StaticMemberExpression { span: self.end_span(start), object: expr, property, optional: false },
                    )));
                }
                Kind::LBracket => {
                    self.bump_any();
                    let expression = self.parse_expression();
                    self.expect(Kind::RBracket);
                    expr = Expression::MemberExpression(self.ast.alloc(MemberExpression::Computed(
                        ComputedMemberExpression {
                            span: self.end_span(start),
                            object: expr,
                            expression,
                            optional: false,
                        },
                    )));
                }
                Kind::Bang
                    if self.ts_enabled() && !self.cur_token().has_preceding_line_break() =>
                {
                    self.bump_any();
                    expr = Expression::TsNonNullExpression(self.ast.alloc(TsNonNullExpression {
                        span: self.end_span(start),
                        expression: expr,
                    }));
                }
                _ => break,
            }
        }
        expr
    }

    fn parse_call_and_member_tail(
        &mut self,
        start: u32,
        mut expr: Expression<'a>,
        mut in_optional_chain: bool,
    ) -> Expression<'a> {
        loop {
            match self.cur_kind() {
                Kind::Dot => {
                    self.bump_any();
                    if self.at(Kind::Hash) {
                        // `obj.#5`-style malformed private field: the token after `#`
                        // isn't an identifier start, so the lexer already split it into
                        // a bare `#` plus whatever follows. Re-derive the same split
                        // explicitly rather than falling through to `parse_identifier_name`,
                        // which would misreport the found token as the `#` itself.
                        let hash = self.lexer.re_scan_hash_token(self.token);
                        self.token = hash;
                        self.error(diagnostics::identifier_expected(hash.span, Kind::Hash));
                        self.bump_any();
                        continue;
                    }
                    if self.at(Kind::PrivateIdentifier) {
                        let field = self.parse_private_identifier();
                        expr = Expression::PrivateFieldExpression(self.ast.alloc(
                            tsfe_ast::PrivateFieldExpression {
                                span: self.end_span(start),
                                object: expr,
                                field,
                                optional: false,
                            },
                        ));
                    } else {
                        let property = self.parse_identifier_name();
                        expr = Expression::MemberExpression(self.ast.alloc(MemberExpression::Static(
                            StaticMemberExpression {
                                span: self.end_span(start),
                                object: expr,
                                property,
                                optional: false,
                            },
                        )));
                    }
                }
                Kind::QuestionDot => {
                    in_optional_chain = true;
                    self.bump_any();
                    if self.at(Kind::LParen) {
                        let arguments = self.parse_arguments();
                        expr = Expression::CallExpression(self.ast.alloc(CallExpression {
                            span: self.end_span(start),
                            callee: expr,
                            type_arguments: None,
                            arguments,
                            optional: true,
                        }));
                    } else if self.at(Kind::LBracket) {
                        self.bump_any();
                        let expression = self.parse_expression();
                        self.expect(Kind::RBracket);
                        expr = Expression::MemberExpression(self.ast.alloc(MemberExpression::Computed(
                            ComputedMemberExpression {
                                span: self.end_span(start),
                                object: expr,
                                expression,
                                optional: true,
                            },
                        )));
                    } else if self.at(Kind::PrivateIdentifier) {
                        let field = self.parse_private_identifier();
                        expr = Expression::PrivateFieldExpression(self.ast.alloc(
                            tsfe_ast::PrivateFieldExpression {
                                span: self.end_span(start),
                                object: expr,
                                field,
                                optional: true,
                            },
                        ));
                    } else {
                        let property = self.parse_identifier_name();
                        expr = Expression::MemberExpression(self.ast.alloc(MemberExpression::Static(
                            StaticMemberExpression {
                                span: self.end_span(start),
                                object: expr,
                                property,
                                optional: true,
                            },
                        )));
                    }
                }
                Kind::LBracket => {
                    self.bump_any();
                    let expression = self.parse_expression();
                    self.expect(Kind::RBracket);
                    expr = Expression::MemberExpression(self.ast.alloc(MemberExpression::Computed(
                        ComputedMemberExpression {
                            span: self.end_span(start),
                            object: expr,
                            expression,
                            optional: false,
                        },
                    )));
                }
                Kind::LParen => {
                    let arguments = self.parse_arguments();
                    expr = Expression::CallExpression(self.ast.alloc(CallExpression {
                        span: self.end_span(start),
                        callee: expr,
                        type_arguments: None,
                        arguments,
                        optional: false,
                    }));
                }
                Kind::Bang
                    if self.ts_enabled() && !self.cur_token().has_preceding_line_break() =>
                {
                    self.bump_any();
                    expr = Expression::TsNonNullExpression(self.ast.alloc(TsNonNullExpression {
                        span: self.end_span(start),
                        expression: expr,
                    }));
                }
                Kind::NoSubstitutionTemplateLiteral | Kind::TemplateHead => {
                    let quasi = self.parse_template_literal_struct();
                    expr = Expression::TaggedTemplateExpression(self.ast.alloc(
                        TaggedTemplateExpression {
                            span: self.end_span(start),
                            tag: expr,
                            type_arguments: None,
                            quasi,
                        },
                    ));
                }
                Kind::LAngle if self.ts_enabled() => {
                    let Some(type_arguments) = self.try_parse(|p| {
                        let ta = p.try_parse_type_arguments()?;
                        if matches!(
                            p.cur_kind(),
                            Kind::LParen
                                | Kind::NoSubstitutionTemplateLiteral
                                | Kind::TemplateHead
                                | Kind::Semicolon
                                | Kind::Comma
                                | Kind::RParen
                                | Kind::RBracket
                                | Kind::RCurly
                                | Kind::Eof
                        ) {
                            Some(ta)
                        } else {
                            None
                        }
                    }) else {
                        break;
                    };
                    if self.at(Kind::LParen) {
                        let arguments = self.parse_arguments();
                        expr = Expression::CallExpression(self.ast.alloc(CallExpression {
                            span: self.end_span(start),
                            callee: expr,
                            type_arguments: Some(type_arguments),
                            arguments,
                            optional: false,
                        }));
                    } else if matches!(
                        self.cur_kind(),
                        Kind::NoSubstitutionTemplateLiteral | Kind::TemplateHead
                    ) {
                        let quasi = self.parse_template_literal_struct();
                        expr = Expression::TaggedTemplateExpression(self.ast.alloc(
                            TaggedTemplateExpression {
                                span: self.end_span(start),
                                tag: expr,
                                type_arguments: Some(type_arguments),
                                quasi,
                            },
                        ));
                    } else {
                        expr = Expression::TsInstantiationExpression(self.ast.alloc(
                            TsInstantiationExpression {
                                span: self.end_span(start),
                                expression: expr,
                                type_arguments,
                            },
                        ));
                    }
                }
                _ => break,
            }
        }
        if in_optional_chain {
            expr = Expression::ChainExpression(
                self.ast.alloc(ChainExpression { span: expr.span(), expression: expr }),
            );
        }
        expr
    }

    fn parse_arguments(&mut self) -> tsfe_ast::NodeArray<'a, Argument<'a>> {
        let start = self.start_span();
        self.expect(Kind::LParen);
        let opening = Span::new(start, self.prev_token_end);
        let arguments =
            self.parse_delimited_list(ParsingContext::ArgumentExpressions, Kind::RParen, |p| {
                p.parse_argument()
            });
        self.expect_closing(Kind::RParen, opening);
        arguments
    }

    fn parse_argument(&mut self) -> Argument<'a> {
        if self.at(Kind::Dot3) {
            let start = self.start_span();
            self.bump_any();
            let argument = self.parse_assignment_expression();
            return Argument::Spread(SpreadElement { span: self.end_span(start), argument });
        }
        Argument::Expression(self.parse_assignment_expression())
    }

    fn parse_primary_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        match self.cur_kind() {
            Kind::NumericLiteral => {
                let token = self.cur_token();
                let raw = self.cur_src();
                let value = crate::lexer::parse_numeric_value(raw, token_number_base());
                self.bump_any();
                Expression::NumericLiteral(self.ast.alloc(tsfe_ast::NumericLiteral {
                    span: token.span,
                    value,
                    raw,
                    base: tsfe_syntax::NumberBase::Decimal,
                }))
            }
            Kind::BigIntLiteral => {
                let token = self.cur_token();
                let raw = self.ast.new_str(self.cur_src().trim_end_matches('n'));
                self.bump_any();
                Expression::BigIntLiteral(self.ast.alloc(tsfe_ast::BigIntLiteral {
                    span: token.span,
                    raw,
                    base: tsfe_syntax::NumberBase::Decimal,
                }))
            }
            Kind::StringLiteral => self.parse_string_literal_expression(),
            Kind::NoSubstitutionTemplateLiteral | Kind::TemplateHead => {
                let lit = self.parse_template_literal_struct();
                Expression::TemplateLiteral(self.ast.alloc(lit))
            }
            Kind::Slash | Kind::SlashEq => {
                let slash_start = self.start_span();
                let token = self.lexer.re_scan_slash_token(slash_start);
                self.token = token;
                let raw = self.cur_src();
                let (pattern, flags) = split_regex(raw);
                self.bump_any();
                Expression::RegExpLiteral(self.ast.alloc(tsfe_ast::RegExpLiteral {
                    span: Span::new(slash_start, self.prev_token_end),
                    pattern: self.ast.new_str(pattern),
                    flags: self.ast.new_str(flags),
                }))
            }
            Kind::True => {
                let span = self.token.span;
                self.bump_any();
                Expression::BooleanLiteral(self.ast.alloc(tsfe_ast::BooleanLiteral { span, value: true }))
            }
            Kind::False => {
                let span = self.token.span;
                self.bump_any();
                Expression::BooleanLiteral(self.ast.alloc(tsfe_ast::BooleanLiteral { span, value: false }))
            }
            Kind::Null => {
                let span = self.token.span;
                self.bump_any();
                Expression::NullLiteral(self.ast.alloc(tsfe_ast::NullLiteral { span }))
            }
            Kind::This => {
                let span = self.token.span;
                self.bump_any();
                Expression::ThisExpression(self.ast.alloc(tsfe_ast::ThisExpression { span }))
            }
            Kind::Super => {
                let span = self.token.span;
                self.bump_any();
                Expression::Super(self.ast.alloc(tsfe_ast::Super { span }))
            }
            Kind::LBracket => self.parse_array_expression(),
            Kind::LCurly => self.parse_object_expression(),
            Kind::Function => {
                let function = self.parse_function_core(start, false);
                Expression::Function(self.ast.alloc(function))
            }
            Kind::Class => {
                let class = self.parse_class_expression();
                Expression::ClassExpression(self.ast.alloc(class))
            }
            Kind::Import => self.parse_import_expression(),
            Kind::LParen => self.parse_parenthesized_expression(),
            Kind::LAngle if self.jsx_enabled() => self.parse_jsx_element_or_fragment(),
            _ if self.at_contextual("async")
                && self.lookahead(|p| {
                    p.bump_any();
                    !p.cur_token().has_preceding_line_break() && p.at(Kind::Function)
                }) =>
            {
                self.bump_any();
                let function = self.parse_function_core(start, true);
                Expression::Function(self.ast.alloc(function))
            }
            _ if self.at_identifier_name() => {
                let id = self.parse_identifier_reference();
                Expression::Identifier(self.ast.alloc(id))
            }
            _ => {
                self.unexpected();
                Expression::Missing(Span::empty(self.token.start()))
            }
        }
    }

    pub(crate) fn parse_string_literal_expression(&mut self) -> Expression<'a> {
        let token = self.cur_token();
        let full = self.cur_src();
        let raw = &full[1..full.len().saturating_sub(1)];
        let value = match crate::lexer::cook_escapes(self.allocator, raw) {
            Some(value) => value,
            None => {
                self.error(diagnostics::invalid_escape_sequence(token.span));
                tsfe_allocator::String::from_str_in(raw, self.allocator)
            }
        };
        let raw = self.ast.new_str(raw);
        self.bump_any();
        Expression::StringLiteral(self.ast.alloc(tsfe_ast::StringLiteral { span: token.span, value, raw }))
    }

    pub(crate) fn parse_template_literal_struct(&mut self) -> TemplateLiteral<'a> {
        let start = self.start_span();
        let mut quasis = self.ast.new_vec();
        let mut expressions = self.ast.new_vec();
        loop {
            let token = self.cur_token();
            let is_tail = matches!(token.kind, Kind::NoSubstitutionTemplateLiteral | Kind::TemplateTail);
            let strip_back = if is_tail { 1 } else { 2 };
            let full = token.span.source_text(self.source_text);
            let raw = &full[1..full.len().saturating_sub(strip_back)];
            let cooked = crate::lexer::cook_escapes(self.allocator, raw);
            if cooked.is_none() {
                self.error(diagnostics::invalid_escape_sequence(token.span));
            }
            let tail = if is_tail { TemplateElementTail::Tail } else { TemplateElementTail::NotTail };
            quasis.push(TemplateElement { span: token.span, cooked, raw: self.ast.new_str(raw), tail });
            if is_tail {
                self.bump_any();
                break;
            }
            self.bump_any();
            let expr = self.parse_expression();
            expressions.push(expr);
            if !self.at(Kind::RCurly) {
                self.error_expected(Kind::RCurly);
                break;
            }
            let brace_pos = self.token.start();
            self.token = self.lexer.re_scan_template_token(brace_pos);
            self.prev_token_end = brace_pos + 1;
        }
        TemplateLiteral { span: self.end_span(start), quasis, expressions }
    }

    fn parse_array_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        self.bump_any();
        let opening = Span::new(start, self.prev_token_end);
        let elements =
            self.parse_delimited_list(ParsingContext::ArrayLiteralMembers, Kind::RBracket, |p| {
                p.parse_array_expression_element()
            });
        self.expect_closing(Kind::RBracket, opening);
        Expression::ArrayExpression(self.ast.alloc(ArrayExpression {
            span: self.end_span(start),
            elements,
        }))
    }

    fn parse_array_expression_element(&mut self) -> ArrayExpressionElement<'a> {
        if self.at(Kind::Comma) {
            return ArrayExpressionElement::Elision(Span::empty(self.token.start()));
        }
        if self.at(Kind::Dot3) {
            let start = self.start_span();
            self.bump_any();
            let argument = self.parse_assignment_expression();
            return ArrayExpressionElement::Spread(SpreadElement { span: self.end_span(start), argument });
        }
        ArrayExpressionElement::Expression(self.parse_assignment_expression())
    }

    fn parse_object_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        self.bump_any();
        let opening = Span::new(start, self.prev_token_end);
        let properties =
            self.parse_delimited_list(ParsingContext::ObjectLiteralMembers, Kind::RCurly, |p| {
                p.parse_object_property()
            });
        self.expect_closing(Kind::RCurly, opening);
        Expression::ObjectExpression(self.ast.alloc(ObjectExpression {
            span: self.end_span(start),
            properties,
        }))
    }

    fn parse_object_property(&mut self) -> ObjectPropertyKind<'a> {
        if self.at(Kind::Dot3) {
            let start = self.start_span();
            self.bump_any();
            let argument = self.parse_assignment_expression();
            return ObjectPropertyKind::Spread(SpreadElement { span: self.end_span(start), argument });
        }

        let start = self.start_span();
        let is_async = self.at_contextual("async")
            && self.lookahead(|p| {
                p.bump_any();
                !p.cur_token().has_preceding_line_break()
                    && !matches!(p.cur_kind(), Kind::Colon | Kind::Comma | Kind::RCurly | Kind::LParen)
            });
        if is_async {
            self.bump_any();
        }
        let is_generator = self.eat(Kind::Star);
        let accessor_kind = if !is_async
            && !is_generator
            && (self.at_contextual("get") || self.at_contextual("set"))
            && self.lookahead(|p| {
                p.bump_any();
                !matches!(p.cur_kind(), Kind::Colon | Kind::Comma | Kind::RCurly | Kind::LParen)
            }) {
            if self.at_contextual("get") {
                self.bump_any();
                Some(PropertyKind::Get)
            } else {
                self.bump_any();
                Some(PropertyKind::Set)
            }
        } else {
            None
        };

        let key = self.parse_property_key();
        let computed = matches!(key, PropertyKey::Computed(_));

        if is_async || is_generator || accessor_kind.is_some() || self.at(Kind::LParen) {
            let kind = accessor_kind.unwrap_or(PropertyKind::Init);
            let function = self.parse_function_rest(
                tsfe_ast::FunctionModifiers { is_async, is_generator },
                None,
                start,
            );
            let span = self.end_span(start);
            let value = Expression::Function(self.ast.alloc(function));
            return ObjectPropertyKind::Property(ObjectProperty {
                span,
                kind,
                key,
                value,
                method: true,
                shorthand: false,
                computed,
            });
        }

        if self.eat(Kind::Colon) {
            let value = self.parse_assignment_expression();
            return ObjectPropertyKind::Property(ObjectProperty {
                span: self.end_span(start),
                kind: PropertyKind::Init,
                key,
                value,
                method: false,
                shorthand: false,
                computed,
            });
        }

        // Shorthand property, optionally with a `= default` (only legal in
        // a destructuring-assignment position; accepted unconditionally
        // here, same as the object literal's general leniency elsewhere).
        let name = match &key {
            PropertyKey::Identifier(id) => id.name,
            _ => "",
        };
        let id = tsfe_ast::IdentifierReference { span: key.span(), name };
        let mut value = Expression::Identifier(self.ast.alloc(id));
        if self.eat(Kind::Eq) {
            let default = self.parse_assignment_expression();
            value = Expression::AssignmentExpression(self.ast.alloc(AssignmentExpression {
                span: self.end_span(start),
                operator: AssignmentOperator::Assign,
                left: AssignmentTarget::Expression(value),
                right: default,
            }));
        }
        ObjectPropertyKind::Property(ObjectProperty {
            span: self.end_span(start),
            kind: PropertyKind::Init,
            key,
            value,
            method: false,
            shorthand: true,
            computed: false,
        })
    }

    pub(crate) fn parse_property_key(&mut self) -> PropertyKey<'a> {
        if self.at(Kind::LBracket) {
            self.bump_any();
            let expression = self.parse_assignment_expression();
            self.expect(Kind::RBracket);
            return PropertyKey::Computed(expression);
        }
        if self.at(Kind::StringLiteral) {
            let Expression::StringLiteral(lit) = self.parse_string_literal_expression() else {
                unreachable!()
            };
            return PropertyKey::StringLiteral(*lit);
        }
        if self.at(Kind::NumericLiteral) {
            let token = self.cur_token();
            let raw = self.cur_src();
            let value = crate::lexer::parse_numeric_value(raw, tsfe_syntax::NumberBase::Decimal);
            self.bump_any();
            return PropertyKey::NumericLiteral(tsfe_ast::NumericLiteral {
                span: token.span,
                value,
                raw,
                base: tsfe_syntax::NumberBase::Decimal,
            });
        }
        PropertyKey::Identifier(self.parse_identifier_name())
    }

    fn parse_parenthesized_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        self.bump_any();
        let opening = Span::new(start, self.prev_token_end);
        let expression = self.parse_expression();
        self.expect_closing(Kind::RParen, opening);
        Expression::ParenthesizedExpression(
            self.ast.alloc(ParenthesizedExpression { span: self.end_span(start), expression }),
        )
    }

    fn parse_import_expression(&mut self) -> Expression<'a> {
        let start = self.start_span();
        self.bump_any();
        if self.at(Kind::Dot) {
            self.bump_any();
            let property = self.parse_identifier_name();
            if property.name == "meta" {
                self.ctx = self.ctx.and_import_meta(true);
            }
            return Expression::MetaProperty(self.ast.alloc(MetaProperty {
                span: self.end_span(start),
                meta: IdentifierName { span: Span::new(start, start + 6), name: "import" },
                property,
            }));
        }
        self.ctx = self.ctx.and_dynamic_import(true);
        self.expect(Kind::LParen);
        let source = self.parse_assignment_expression();
        let options = if self.eat(Kind::Comma) && !self.at(Kind::RParen) {
            Some(self.parse_assignment_expression())
        } else {
            None
        };
        self.eat(Kind::Comma);
        self.expect(Kind::RParen);
        Expression::ImportExpression(self.ast.alloc(tsfe_ast::ImportExpression {
            span: self.end_span(start),
            source,
            options,
        }))
    }

    /// Attempts `<T, U>` as a type-argument list, rewinding if it turns out
    /// to be a comparison/shift expression instead.
    pub(crate) fn try_parse_type_arguments(&mut self) -> Option<tsfe_ast::TsTypeArguments<'a>> {
        if !self.at(Kind::LAngle) {
            return None;
        }
        let start = self.start_span();
        self.bump_any();
        let opening = Span::new(start, self.prev_token_end);
        let params =
            self.parse_non_empty_delimited_list(ParsingContext::TypeArguments, Kind::RAngle, |p| {
                p.parse_type()
            });
        if params.is_missing_list() {
            return None;
        }
        if !self.expect_greater_than() {
            return None;
        }
        let _ = opening;
        Some(tsfe_ast::TsTypeArguments { span: self.end_span(start), params })
    }
}

fn token_number_base() -> tsfe_syntax::NumberBase {
    tsfe_syntax::NumberBase::Decimal
}

fn split_regex(raw: &str) -> (&str, &str) {
    match raw.rfind('/') {
        Some(idx) => (&raw[1..idx], &raw[idx + 1..]),
        None => (raw, ""),
    }
}

fn unary_operator(kind: Kind) -> UnaryOperator {
    match kind {
        Kind::Plus => UnaryOperator::Plus,
        Kind::Minus => UnaryOperator::Minus,
        Kind::Tilde => UnaryOperator::BitwiseNot,
        Kind::Bang => UnaryOperator::LogicalNot,
        Kind::Typeof => UnaryOperator::Typeof,
        Kind::Void => UnaryOperator::Void,
        Kind::Delete => UnaryOperator::Delete,
        _ => unreachable!(),
    }
}

fn logical_operator(kind: Kind) -> Option<LogicalOperator> {
    match kind {
        Kind::Amp2 => Some(LogicalOperator::And),
        Kind::Pipe2 => Some(LogicalOperator::Or),
        Kind::Question2 => Some(LogicalOperator::NullishCoalescing),
        _ => None,
    }
}

fn binary_operator(kind: Kind) -> BinaryOperator {
    match kind {
        Kind::Eq2 => BinaryOperator::Equality,
        Kind::Neq => BinaryOperator::Inequality,
        Kind::Eq3 => BinaryOperator::StrictEquality,
        Kind::Neq2 => BinaryOperator::StrictInequality,
        Kind::LAngle => BinaryOperator::LessThan,
        Kind::LtEq => BinaryOperator::LessEqualThan,
        Kind::RAngle => BinaryOperator::GreaterThan,
        Kind::GtEq => BinaryOperator::GreaterEqualThan,
        Kind::ShiftLeft => BinaryOperator::LeftShift,
        Kind::ShiftRight => BinaryOperator::RightShift,
        Kind::ShiftRight3 => BinaryOperator::UnsignedRightShift,
        Kind::Plus => BinaryOperator::Addition,
        Kind::Minus => BinaryOperator::Subtraction,
        Kind::Star => BinaryOperator::Multiplication,
        Kind::Slash => BinaryOperator::Division,
        Kind::Percent => BinaryOperator::Remainder,
        Kind::Star2 => BinaryOperator::Exponential,
        Kind::Pipe => BinaryOperator::BitwiseOr,
        Kind::Caret => BinaryOperator::BitwiseXor,
        Kind::Amp => BinaryOperator::BitwiseAnd,
        Kind::In => BinaryOperator::In,
        Kind::Instanceof => BinaryOperator::Instanceof,
        _ => unreachable!("{kind:?} is not a binary operator"),
    }
}

fn assignment_operator(kind: Kind) -> AssignmentOperator {
    match kind {
        Kind::Eq => AssignmentOperator::Assign,
        Kind::PlusEq => AssignmentOperator::Addition,
        Kind::MinusEq => AssignmentOperator::Subtraction,
        Kind::StarEq => AssignmentOperator::Multiplication,
        Kind::SlashEq => AssignmentOperator::Division,
        Kind::PercentEq => AssignmentOperator::Remainder,
        Kind::Star2Eq => AssignmentOperator::Exponential,
        Kind::ShiftLeftEq => AssignmentOperator::LeftShift,
        Kind::ShiftRightEq => AssignmentOperator::RightShift,
        Kind::ShiftRight3Eq => AssignmentOperator::UnsignedRightShift,
        Kind::PipeEq => AssignmentOperator::BitwiseOr,
        Kind::CaretEq => AssignmentOperator::BitwiseXor,
        Kind::AmpEq => AssignmentOperator::BitwiseAnd,
        Kind::Amp2Eq => AssignmentOperator::LogicalAnd,
        Kind::Pipe2Eq => AssignmentOperator::LogicalOr,
        Kind::Question2Eq => AssignmentOperator::NullishCoalescing,
        _ => unreachable!("{kind:?} is not an assignment operator"),
    }
}
