//! Parameter lists, function declarations/expressions, and arrow functions,
//! spec §5.4-§5.5.

use tsfe_span::Span;
use tsfe_syntax::Context;
use tsfe_ast::{
    Accessibility, ArrowFunction, ArrowFunctionBody, BindingIdentifier, BindingPattern, Function,
    FunctionModifiers, NodeArray, TsParameter, TsParameterModifiers,
};

use crate::diagnostics;
use crate::kind::Kind;
use crate::list::ParsingContext;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_parameters(&mut self) -> NodeArray<'a, TsParameter<'a>> {
        let start = self.start_span();
        self.expect(Kind::LParen);
        let opening = Span::new(start, self.prev_token_end);
        let params =
            self.parse_delimited_list(ParsingContext::Parameters, Kind::RParen, |p| p.parse_parameter());
        self.validate_parameter_list(&params);
        self.expect_closing(Kind::RParen, opening);
        params
    }

    fn validate_parameter_list(&mut self, params: &NodeArray<'a, TsParameter<'a>>) {
        let last = params.len().saturating_sub(1);
        for (i, param) in params.iter().enumerate() {
            if param.dotdotdot && i != last {
                self.error(diagnostics::a_rest_parameter_must_be_last(param.span));
            }
        }
    }

    fn parse_parameter(&mut self) -> TsParameter<'a> {
        let start = self.start_span();
        let decorators = self.parse_decorator_list();
        let modifiers = self.parse_parameter_modifiers();
        let dotdotdot = self.eat(Kind::Dot3);
        let core = self.parse_binding_pattern_core();
        let optional = self.eat(Kind::Question);
        let type_annotation = self.parse_optional_type_annotation();
        let pattern = self.parse_binding_pattern_default(core);
        let span = self.end_span(start);
        if dotdotdot && matches!(pattern, BindingPattern::AssignmentPattern(_)) {
            self.error(diagnostics::a_rest_parameter_cannot_have_a_default_value(span));
        }
        TsParameter { span, decorators, modifiers, pattern, type_annotation, optional, dotdotdot }
    }

    fn parse_parameter_modifiers(&mut self) -> TsParameterModifiers {
        let mut modifiers = TsParameterModifiers::default();
        loop {
            match self.cur_kind() {
                Kind::Public if modifiers.accessibility.is_none() => {
                    modifiers.accessibility = Some(Accessibility::Public);
                    self.bump_any();
                }
                Kind::Protected if modifiers.accessibility.is_none() => {
                    modifiers.accessibility = Some(Accessibility::Protected);
                    self.bump_any();
                }
                Kind::Private if modifiers.accessibility.is_none() => {
                    modifiers.accessibility = Some(Accessibility::Private);
                    self.bump_any();
                }
                _ if !modifiers.is_readonly && self.at_parameter_modifier("readonly") => {
                    modifiers.is_readonly = true;
                    self.bump_any();
                }
                _ if !modifiers.is_override && self.at_parameter_modifier("override") => {
                    modifiers.is_override = true;
                    self.bump_any();
                }
                _ => break,
            }
        }
        modifiers
    }

    /// A contextual parameter modifier only counts as one if the token
    /// after it can itself start a binding; otherwise the keyword spelling
    /// is the parameter's own name (`function f(readonly) {}` is legal JS).
    fn at_parameter_modifier(&mut self, keyword: &str) -> bool {
        self.at_contextual(keyword)
            && self.lookahead(|p| {
                p.bump_any();
                p.at_identifier_name() || matches!(p.cur_kind(), Kind::LCurly | Kind::LBracket | Kind::Dot3)
            })
    }

    pub(crate) fn parse_function_rest(
        &mut self,
        modifiers: FunctionModifiers,
        id: Option<BindingIdentifier<'a>>,
        start: u32,
    ) -> Function<'a> {
        let preserved = self.ctx & (Context::AMBIENT | Context::JAVASCRIPT_FILE | Context::JSON_FILE);
        let fn_ctx = preserved
            .and_yield(modifiers.is_generator)
            .and_await(modifiers.is_async)
            .and_allow_return(true);
        self.with_context(fn_ctx, |p| {
            let type_parameters = p.parse_optional_type_parameters();
            let params = p.parse_parameters();
            let return_type = p.parse_optional_type_annotation();
            let body = if p.at(Kind::LCurly) {
                Some(p.parse_block_statement())
            } else {
                if !p.ctx.has_ambient() {
                    p.error(diagnostics::function_implementation_missing(p.token.span));
                }
                p.asi();
                None
            };
            Function { span: p.end_span(start), id, modifiers, type_parameters, params, return_type, body }
        })
    }

    /// `async`/`function`/`*` dispatch already consumed by the caller;
    /// parses the rest of a function declaration or expression.
    pub(crate) fn parse_function_core(&mut self, start: u32, is_async: bool) -> Function<'a> {
        self.expect(Kind::Function);
        let is_generator = self.eat(Kind::Star);
        let id = if self.at_identifier_name() && !self.at(Kind::LParen) {
            Some(self.parse_binding_identifier())
        } else {
            None
        };
        self.parse_function_rest(FunctionModifiers { is_async, is_generator }, id, start)
    }

    pub(crate) fn try_parse_arrow_function(&mut self) -> Option<ArrowFunction<'a>> {
        self.try_parse(|p| p.parse_arrow_function_attempt())
    }

    fn parse_arrow_function_attempt(&mut self) -> Option<ArrowFunction<'a>> {
        let start = self.start_span();
        let is_async = self.at_contextual("async")
            && self.lookahead(|p| {
                p.bump_any();
                !p.cur_token().has_preceding_line_break()
                    && (matches!(p.cur_kind(), Kind::LParen | Kind::LAngle) || p.at_identifier_name())
            });
        if is_async {
            self.bump_any();
        }

        let type_parameters =
            if self.ts_enabled() && !self.jsx_enabled() && self.at(Kind::LAngle) {
                self.parse_optional_type_parameters()
            } else {
                None
            };

        let preserved = self.ctx & (Context::AMBIENT | Context::JAVASCRIPT_FILE | Context::JSON_FILE);
        let fn_ctx = preserved.and_await(is_async).and_allow_return(true);

        let params = if self.at(Kind::LParen) {
            self.with_context(fn_ctx, |p| p.parse_parameters())
        } else if self.at_identifier_name() {
            let id = self.parse_binding_identifier();
            let span = id.span;
            let param = TsParameter {
                span,
                decorators: self.ast.missing_node_array(span.start),
                modifiers: TsParameterModifiers::default(),
                pattern: BindingPattern::BindingIdentifier(self.ast.alloc(id)),
                type_annotation: None,
                optional: false,
                dotdotdot: false,
            };
            let mut elements = self.ast.new_vec();
            elements.push(param);
            self.ast.node_array(span, elements)
        } else {
            return None;
        };

        let return_type = self.with_context(fn_ctx, |p| p.parse_optional_type_annotation());

        if self.cur_token().has_preceding_line_break() || !self.eat(Kind::Arrow) {
            return None;
        }

        let body = self.with_context(fn_ctx, |p| p.parse_arrow_function_body());
        Some(ArrowFunction {
            span: self.end_span(start),
            is_async,
            type_parameters,
            params,
            return_type,
            body,
        })
    }

    fn parse_arrow_function_body(&mut self) -> ArrowFunctionBody<'a> {
        if self.at(Kind::LCurly) {
            ArrowFunctionBody::Block(self.parse_block_statement())
        } else {
            ArrowFunctionBody::Expression(self.parse_assignment_expression())
        }
    }
}
