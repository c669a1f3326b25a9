//! Class declarations/expressions and their members, spec §5.6. Also
//! houses `parse_decorator_list` (shared with parameter decorators in
//! `function.rs`) and `parse_heritage_clause_element` (shared with
//! interface `extends` clauses in `ts.rs`).

use tsfe_span::Span;
use tsfe_ast::{
    Accessibility, BindingIdentifier, Class, ClassBody, ClassElement, ClassModifiers,
    ClassPropertyKey, Decorator, HeritageClause, MemberModifiers, MethodDefinition, MethodKind,
    NodeArray, PropertyDefinition, PropertyKey, StaticBlock,
};

use crate::diagnostics;
use crate::kind::Kind;
use crate::list::ParsingContext;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_decorator_list(&mut self) -> NodeArray<'a, Decorator<'a>> {
        let start = self.start_span();
        let mut decorators = self.ast.new_vec();
        while self.at(Kind::At) {
            decorators.push(self.parse_decorator());
        }
        let span = self.end_span(start);
        self.ast.node_array(span, decorators)
    }

    fn parse_decorator(&mut self) -> Decorator<'a> {
        let start = self.start_span();
        self.expect(Kind::At);
        let expression = self.parse_left_hand_side_expression();
        Decorator { span: self.end_span(start), expression }
    }

    pub(crate) fn parse_class_declaration(
        &mut self,
        start: u32,
        decorators: NodeArray<'a, Decorator<'a>>,
        declare: bool,
    ) -> Class<'a> {
        let is_abstract = self.eat_contextual("abstract");
        self.expect(Kind::Class);
        let id = self.parse_optional_class_name();
        self.parse_class_rest(start, decorators, ClassModifiers { is_abstract, is_declare: declare }, id)
    }

    pub(crate) fn parse_class_expression(&mut self) -> Class<'a> {
        let start = self.start_span();
        let decorators = self.ast.missing_node_array(start);
        let is_abstract = self.eat_contextual("abstract");
        self.expect(Kind::Class);
        let id = self.parse_optional_class_name();
        self.parse_class_rest(start, decorators, ClassModifiers { is_abstract, is_declare: false }, id)
    }

    fn parse_optional_class_name(&mut self) -> Option<BindingIdentifier<'a>> {
        if self.at_identifier_name() && !self.at(Kind::Extends) && !self.at(Kind::Implements) {
            Some(self.parse_binding_identifier())
        } else {
            None
        }
    }

    fn parse_class_rest(
        &mut self,
        start: u32,
        decorators: NodeArray<'a, Decorator<'a>>,
        modifiers: ClassModifiers,
        id: Option<BindingIdentifier<'a>>,
    ) -> Class<'a> {
        let type_parameters = self.parse_optional_type_parameters();
        let mut super_class = None;
        let mut implements = self.ast.missing_node_array(self.token.start());
        loop {
            if self.eat(Kind::Extends) {
                super_class = Some(self.parse_heritage_clause_element());
            } else if self.eat(Kind::Implements) {
                implements = self.parse_non_empty_delimited_list(
                    ParsingContext::HeritageClauseElement,
                    Kind::LCurly,
                    |p| p.parse_heritage_clause_element(),
                );
            } else {
                break;
            }
        }
        let body = self.parse_class_body();
        Class {
            span: self.end_span(start),
            id,
            modifiers,
            decorators,
            type_parameters,
            super_class,
            implements,
            body,
        }
    }

    /// Shared by class `extends`/`implements` and interface `extends`: a
    /// left-hand-side expression (so `extends ns.Base` and even
    /// `extends mixin(Base)` parse) with an optional `<...>` type-argument
    /// tail.
    pub(crate) fn parse_heritage_clause_element(&mut self) -> HeritageClause<'a> {
        let start = self.start_span();
        let expression = self.parse_left_hand_side_expression();
        let type_arguments =
            if self.at(Kind::LAngle) { self.try_parse(|p| p.try_parse_type_arguments()) } else { None };
        HeritageClause { span: self.end_span(start), expression, type_arguments }
    }

    fn parse_class_body(&mut self) -> ClassBody<'a> {
        let start = self.start_span();
        self.expect(Kind::LCurly);
        let opening = Span::new(start, self.prev_token_end);
        let mut body = self.ast.new_vec();
        while !self.at_eof() && !self.at(Kind::RCurly) {
            if self.eat(Kind::Semicolon) {
                continue;
            }
            body.push(self.parse_class_element());
        }
        self.expect_closing(Kind::RCurly, opening);
        let span = self.end_span(start);
        ClassBody { span, body: self.ast.node_array(span, body) }
    }

    fn at_class_member_key_start(&self) -> bool {
        matches!(
            self.cur_kind(),
            Kind::LBracket | Kind::StringLiteral | Kind::NumericLiteral | Kind::PrivateIdentifier | Kind::Star
        ) || self.at_identifier_name()
    }

    fn at_contextual_member_modifier(&mut self, keyword: &str) -> bool {
        self.at_contextual(keyword)
            && self.lookahead(|p| {
                p.bump_any();
                !p.cur_token().has_preceding_line_break() && p.at_class_member_key_start()
            })
    }

    fn parse_member_modifiers(&mut self) -> MemberModifiers {
        let mut modifiers = MemberModifiers::default();
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
                Kind::Static
                    if !modifiers.is_static
                        && self.lookahead(|p| {
                            p.bump_any();
                            !p.cur_token().has_preceding_line_break() && p.at_class_member_key_start()
                        }) =>
                {
                    modifiers.is_static = true;
                    self.bump_any();
                }
                _ if !modifiers.is_abstract && self.at_contextual_member_modifier("abstract") => {
                    modifiers.is_abstract = true;
                    self.bump_any();
                }
                _ if !modifiers.is_override && self.at_contextual_member_modifier("override") => {
                    modifiers.is_override = true;
                    self.bump_any();
                }
                _ if !modifiers.is_readonly && self.at_contextual_member_modifier("readonly") => {
                    modifiers.is_readonly = true;
                    self.bump_any();
                }
                _ if !modifiers.is_declare && self.at_contextual_member_modifier("declare") => {
                    modifiers.is_declare = true;
                    self.bump_any();
                }
                _ => break,
            }
        }
        modifiers
    }

    fn parse_class_property_key(&mut self) -> ClassPropertyKey<'a> {
        if self.at(Kind::PrivateIdentifier) {
            return ClassPropertyKey::Private(self.parse_private_identifier());
        }
        ClassPropertyKey::Named(self.parse_property_key())
    }

    fn parse_class_element(&mut self) -> ClassElement<'a> {
        let start = self.start_span();
        let decorators = self.parse_decorator_list();
        if self.at(Kind::Static)
            && self.lookahead(|p| {
                p.bump_any();
                p.at(Kind::LCurly)
            })
        {
            self.bump_any();
            return ClassElement::StaticBlock(self.parse_static_block(start));
        }
        let modifiers = self.parse_member_modifiers();
        if self.is_index_signature_start() {
            return ClassElement::IndexSignature(self.parse_index_signature_member());
        }
        let is_async = self.at_contextual("async")
            && self.lookahead(|p| {
                p.bump_any();
                !p.cur_token().has_preceding_line_break() && p.at_class_member_key_start()
            });
        if is_async {
            self.bump_any();
        }
        let is_generator = self.eat(Kind::Star);
        let accessor_kind = if self.at_contextual("get")
            && self.lookahead(|p| {
                p.bump_any();
                p.at_class_member_key_start()
            }) {
            self.bump_any();
            Some(MethodKind::Get)
        } else if self.at_contextual("set")
            && self.lookahead(|p| {
                p.bump_any();
                p.at_class_member_key_start()
            }) {
            self.bump_any();
            Some(MethodKind::Set)
        } else {
            None
        };
        let key = self.parse_class_property_key();
        let optional = self.eat(Kind::Question);
        let definite = !optional && self.eat(Kind::Bang);
        if self.at(Kind::LParen) || self.at(Kind::LAngle) {
            let type_parameters = self.parse_optional_type_parameters();
            let params = self.parse_parameters();
            let return_type = self.parse_optional_type_annotation();
            let body = if self.at(Kind::LCurly) {
                Some(self.parse_block_statement())
            } else {
                if !modifiers.is_abstract && !self.ctx.has_ambient() {
                    self.error(diagnostics::function_implementation_missing(self.token.span));
                }
                self.asi();
                None
            };
            let method_kind = accessor_kind
                .unwrap_or(if is_constructor_key(&key) { MethodKind::Constructor } else { MethodKind::Method });
            let mut modifiers = modifiers;
            modifiers.is_optional = optional;
            modifiers.is_definite = definite;
            return ClassElement::MethodDefinition(MethodDefinition {
                span: self.end_span(start),
                decorators,
                modifiers,
                kind: method_kind,
                key,
                is_async,
                is_generator,
                type_parameters,
                params,
                return_type,
                body,
            });
        }
        let type_annotation = self.parse_optional_type_annotation();
        let value = if self.eat(Kind::Eq) { Some(self.parse_assignment_expression()) } else { None };
        self.asi();
        let mut modifiers = modifiers;
        modifiers.is_optional = optional;
        modifiers.is_definite = definite;
        ClassElement::PropertyDefinition(PropertyDefinition {
            span: self.end_span(start),
            decorators,
            modifiers,
            key,
            type_annotation,
            value,
        })
    }

    fn parse_static_block(&mut self, start: u32) -> StaticBlock<'a> {
        let lcurly_start = self.start_span();
        self.expect(Kind::LCurly);
        let opening = Span::new(lcurly_start, self.prev_token_end);
        let body = self.parse_list(ParsingContext::BlockStatements, |_| true, |p| p.parse_statement());
        self.expect_closing(Kind::RCurly, opening);
        let span = self.end_span(start);
        StaticBlock { span, body: self.ast.node_array(span, body) }
    }
}

fn is_constructor_key(key: &ClassPropertyKey) -> bool {
    matches!(key, ClassPropertyKey::Named(PropertyKey::Identifier(name)) if name.name == "constructor")
}
