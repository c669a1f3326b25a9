//! TypeScript type grammar and TS-only declarations, spec §6: the
//! function/conditional/union/intersection/operator/postfix/primary
//! precedence ladder `parse_type` climbs, type member lists shared between
//! interface bodies and object type literals, and `type`/`interface`/
//! `enum`/`namespace`/`module` declarations.

use tsfe_span::{GetSpan, Span};
use tsfe_syntax::Context;
use tsfe_ast::{
    BigIntLiteral, BindingIdentifier, BooleanLiteral, Declaration, Expression, IdentifierName,
    NodeArray, NumericLiteral, StringLiteral, TemplateElement, TemplateElementTail,
    ThisExpression, TsArrayType, TsCallSignature, TsConditionalType, TsConstructSignature,
    TsConstructorType, TsEntityName, TsEnumDeclaration, TsEnumMember, TsFunctionType,
    TsImportType, TsIndexSignature, TsIndexedAccessType, TsInferType, TsInterfaceDeclaration,
    TsIntersectionType, TsKeywordType, TsKeywordTypeKind, TsLiteral, TsLiteralType,
    TsMappedType, TsMappedTypeModifier, TsMethodSignature, TsModuleBody, TsModuleDeclaration,
    TsModuleName, TsNamedTupleMember, TsOptionalType, TsParenthesizedType, TsPropertySignature,
    TsQualifiedName, TsRestType, TsTemplateLiteralType, TsThisType, TsTupleElement, TsTupleType,
    TsType, TsTypeAliasDeclaration, TsTypeArguments, TsTypeLiteral, TsTypeMember, TsTypeOperator,
    TsTypeOperatorKind, TsTypeParameter, TsTypeParameterDeclaration, TsTypeParameterModifiers,
    TsTypePredicate, TsTypePredicateParameter, TsTypeQuery, TsTypeReference, TsUnionType,
};

use crate::diagnostics;
use crate::kind::Kind;
use crate::list::ParsingContext;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_type(&mut self) -> TsType<'a> {
        if self.is_start_of_function_type() {
            return self.parse_function_or_constructor_type(false);
        }
        if self.at(Kind::New)
            || (self.at_contextual("abstract")
                && self.lookahead(|p| {
                    p.bump_any();
                    p.at(Kind::New)
                }))
        {
            return self.parse_function_or_constructor_type(true);
        }
        self.parse_conditional_type()
    }

    fn is_start_of_function_type(&mut self) -> bool {
        if self.at(Kind::LAngle) {
            return true;
        }
        self.at(Kind::LParen) && self.lookahead(|p| p.can_follow_parameter_list_with_arrow())
    }

    /// Skips a balanced `(...)` run and reports whether `=>` follows, the
    /// cheapest way to tell a function type's parameter list apart from a
    /// parenthesized type without fully parsing either.
    fn can_follow_parameter_list_with_arrow(&mut self) -> bool {
        self.bump_any();
        let mut depth = 1u32;
        while depth > 0 {
            match self.cur_kind() {
                Kind::Eof => return false,
                Kind::LParen => {
                    depth += 1;
                    self.bump_any();
                }
                Kind::RParen => {
                    depth -= 1;
                    self.bump_any();
                }
                _ => self.bump_any(),
            }
        }
        self.at(Kind::Arrow)
    }

    fn parse_function_or_constructor_type(&mut self, is_constructor: bool) -> TsType<'a> {
        let start = self.start_span();
        let is_abstract = is_constructor && self.eat_contextual("abstract");
        if is_constructor {
            self.expect(Kind::New);
        }
        let type_parameters = self.parse_optional_type_parameters();
        let params = self.parse_parameters();
        self.expect(Kind::Arrow);
        let return_type = self.parse_type();
        if is_constructor {
            TsType::ConstructorType(self.ast.alloc(TsConstructorType {
                span: self.end_span(start),
                is_abstract,
                type_parameters,
                params,
                return_type,
            }))
        } else {
            TsType::FunctionType(self.ast.alloc(TsFunctionType {
                span: self.end_span(start),
                type_parameters,
                params,
                return_type,
            }))
        }
    }

    /// `check extends extends_type ? true_type : false_type`; the
    /// `extends_type` arm parses under `DISALLOW_CONDITIONAL_TYPES` so a
    /// nested bare `extends` is never mistaken for its own conditional.
    fn parse_conditional_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        let check_type = self.parse_union_type();
        if self.ctx.has_disallow_conditional_types() || !self.eat(Kind::Extends) {
            return check_type;
        }
        let extends_type =
            self.with_context_added(Context::DISALLOW_CONDITIONAL_TYPES, |p| p.parse_union_type());
        if !self.eat(Kind::Question) {
            self.error(diagnostics::invalid_conditional_type_extends(self.end_span(start)));
            return check_type;
        }
        let true_type = self.parse_type();
        self.expect(Kind::Colon);
        let false_type = self.parse_type();
        TsType::ConditionalType(self.ast.alloc(TsConditionalType {
            span: self.end_span(start),
            check_type,
            extends_type,
            true_type,
            false_type,
        }))
    }

    fn parse_union_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        self.eat(Kind::Pipe);
        let first = self.parse_intersection_type();
        if !self.at(Kind::Pipe) {
            return first;
        }
        let mut types = self.ast.new_vec();
        types.push(first);
        while self.eat(Kind::Pipe) {
            types.push(self.parse_intersection_type());
        }
        let span = self.end_span(start);
        TsType::UnionType(
            self.ast.alloc(TsUnionType { span, types: self.ast.node_array(span, types) }),
        )
    }

    fn parse_intersection_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        self.eat(Kind::Amp);
        let first = self.parse_type_operator_or_higher();
        if !self.at(Kind::Amp) {
            return first;
        }
        let mut types = self.ast.new_vec();
        types.push(first);
        while self.eat(Kind::Amp) {
            types.push(self.parse_type_operator_or_higher());
        }
        let span = self.end_span(start);
        TsType::IntersectionType(
            self.ast.alloc(TsIntersectionType { span, types: self.ast.node_array(span, types) }),
        )
    }

    fn parse_type_operator_or_higher(&mut self) -> TsType<'a> {
        let operator = if self.at_contextual("keyof") {
            Some(TsTypeOperatorKind::Keyof)
        } else if self.at_contextual("unique") {
            Some(TsTypeOperatorKind::Unique)
        } else if self.at_contextual("readonly") {
            Some(TsTypeOperatorKind::Readonly)
        } else {
            None
        };
        let Some(operator) = operator else {
            return self.parse_postfix_type();
        };
        let start = self.start_span();
        self.bump_any();
        let type_annotation = self.parse_type_operator_or_higher();
        TsType::TypeOperator(self.ast.alloc(TsTypeOperator {
            span: self.end_span(start),
            operator,
            type_annotation,
        }))
    }

    fn parse_postfix_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        let mut ty = self.parse_primary_type();
        loop {
            if self.cur_token().has_preceding_line_break() || !self.at(Kind::LBracket) {
                break;
            }
            self.bump_any();
            if self.eat(Kind::RBracket) {
                ty = TsType::ArrayType(
                    self.ast.alloc(TsArrayType { span: self.end_span(start), element_type: ty }),
                );
                continue;
            }
            let index_type = self.parse_type();
            self.expect(Kind::RBracket);
            ty = TsType::IndexedAccessType(self.ast.alloc(TsIndexedAccessType {
                span: self.end_span(start),
                object_type: ty,
                index_type,
            }));
        }
        ty
    }

    /// Keyword types are recognized purely by spelling: none of `any`,
    /// `string`, `undefined`, etc. are reserved words or dedicated `Kind`
    /// variants, so a type-reference to an identically-spelled identifier
    /// is impossible to distinguish from them and TypeScript doesn't try.
    fn keyword_type_kind(&self) -> Option<TsKeywordTypeKind> {
        match self.cur_kind() {
            Kind::Void => Some(TsKeywordTypeKind::Void),
            Kind::Null => Some(TsKeywordTypeKind::Null),
            _ if self.at_contextual("any") => Some(TsKeywordTypeKind::Any),
            _ if self.at_contextual("unknown") => Some(TsKeywordTypeKind::Unknown),
            _ if self.at_contextual("never") => Some(TsKeywordTypeKind::Never),
            _ if self.at_contextual("undefined") => Some(TsKeywordTypeKind::Undefined),
            _ if self.at_contextual("boolean") => Some(TsKeywordTypeKind::Boolean),
            _ if self.at_contextual("number") => Some(TsKeywordTypeKind::Number),
            _ if self.at_contextual("string") => Some(TsKeywordTypeKind::String),
            _ if self.at_contextual("symbol") => Some(TsKeywordTypeKind::Symbol),
            _ if self.at_contextual("bigint") => Some(TsKeywordTypeKind::BigInt),
            _ if self.at_contextual("object") => Some(TsKeywordTypeKind::Object),
            _ if self.at_contextual("intrinsic") => Some(TsKeywordTypeKind::Intrinsic),
            _ => None,
        }
    }

    fn parse_primary_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        if let Some(kind) = self.keyword_type_kind() {
            self.bump_any();
            return TsType::KeywordType(
                self.ast.alloc(TsKeywordType { span: self.end_span(start), kind }),
            );
        }
        match self.cur_kind() {
            Kind::This => {
                self.bump_any();
                TsType::ThisType(self.ast.alloc(TsThisType { span: self.end_span(start) }))
            }
            Kind::LParen => self.parse_parenthesized_type(),
            Kind::LBracket => self.parse_tuple_type(),
            Kind::LCurly => {
                if self.is_start_of_mapped_type() {
                    self.parse_mapped_type()
                } else {
                    self.parse_type_literal()
                }
            }
            Kind::Typeof => self.parse_type_query(),
            Kind::Import => self.parse_import_type(),
            Kind::StringLiteral | Kind::NumericLiteral | Kind::BigIntLiteral | Kind::True
            | Kind::False => self.parse_literal_type(),
            Kind::Minus => self.parse_negative_numeric_literal_type(),
            Kind::NoSubstitutionTemplateLiteral | Kind::TemplateHead => {
                self.parse_template_literal_type()
            }
            _ if self.at_contextual("infer") => self.parse_infer_type(),
            _ if self.at_identifier_name() => self.parse_type_reference(),
            _ => {
                self.unexpected();
                TsType::Missing(Span::empty(self.token.start()))
            }
        }
    }

    fn parse_type_reference(&mut self) -> TsType<'a> {
        let start = self.start_span();
        let type_name = self.parse_entity_name();
        let type_arguments = if self.at(Kind::LAngle) {
            self.try_parse(|p| p.try_parse_type_arguments())
        } else {
            None
        };
        TsType::TypeReference(self.ast.alloc(TsTypeReference {
            span: self.end_span(start),
            type_name,
            type_arguments,
        }))
    }

    pub(crate) fn parse_entity_name(&mut self) -> TsEntityName<'a> {
        let start = self.start_span();
        let mut name = TsEntityName::Identifier(self.parse_identifier_reference());
        while self.eat(Kind::Dot) {
            let right = self.parse_identifier_name();
            name = TsEntityName::Qualified(self.ast.alloc(TsQualifiedName {
                span: self.end_span(start),
                left: name,
                right,
            }));
        }
        name
    }

    /// `typeof import("x")` is not modeled as a distinct form: `import` is
    /// a reserved word, so `at_identifier_name` already accepts it and
    /// `parse_entity_name` happily takes it as the query's first segment.
    fn parse_type_query(&mut self) -> TsType<'a> {
        let start = self.start_span();
        self.expect(Kind::Typeof);
        let expr_name = self.parse_entity_name();
        let type_arguments = if self.at(Kind::LAngle) {
            self.try_parse(|p| p.try_parse_type_arguments())
        } else {
            None
        };
        TsType::TypeQuery(self.ast.alloc(TsTypeQuery {
            span: self.end_span(start),
            expr_name,
            type_arguments,
        }))
    }

    fn parse_import_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        self.expect(Kind::Import);
        self.expect(Kind::LParen);
        let argument = if self.at(Kind::StringLiteral) {
            let Expression::StringLiteral(lit) = self.parse_string_literal_expression() else {
                unreachable!()
            };
            *lit
        } else {
            self.error(diagnostics::identifier_expected(self.token.span, self.cur_kind()));
            StringLiteral {
                span: Span::empty(self.token.start()),
                value: tsfe_allocator::String::from_str_in("", self.allocator),
                raw: "",
            }
        };
        self.expect(Kind::RParen);
        let qualifier = if self.eat(Kind::Dot) { Some(self.parse_entity_name()) } else { None };
        let type_arguments = if self.at(Kind::LAngle) {
            self.try_parse(|p| p.try_parse_type_arguments())
        } else {
            None
        };
        TsType::ImportType(self.ast.alloc(TsImportType {
            span: self.end_span(start),
            argument,
            qualifier,
            type_arguments,
        }))
    }

    fn parse_literal_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        let literal = match self.cur_kind() {
            Kind::StringLiteral => {
                let Expression::StringLiteral(lit) = self.parse_string_literal_expression() else {
                    unreachable!()
                };
                TsLiteral::String(*lit)
            }
            Kind::NumericLiteral => {
                let token = self.cur_token();
                let raw = self.cur_src();
                let value = crate::lexer::parse_numeric_value(raw, tsfe_syntax::NumberBase::Decimal);
                self.bump_any();
                TsLiteral::Numeric(NumericLiteral {
                    span: token.span,
                    value,
                    raw,
                    base: tsfe_syntax::NumberBase::Decimal,
                })
            }
            Kind::BigIntLiteral => {
                let token = self.cur_token();
                let raw = self.cur_src();
                self.bump_any();
                TsLiteral::BigInt(BigIntLiteral {
                    span: token.span,
                    raw,
                    base: tsfe_syntax::NumberBase::Decimal,
                })
            }
            _ => {
                let token = self.cur_token();
                let value = self.at(Kind::True);
                self.bump_any();
                TsLiteral::Boolean(BooleanLiteral { span: token.span, value })
            }
        };
        TsType::LiteralType(self.ast.alloc(TsLiteralType { span: self.end_span(start), literal }))
    }

    fn parse_negative_numeric_literal_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        self.expect(Kind::Minus);
        let token = self.cur_token();
        let raw = self.cur_src();
        let value = crate::lexer::parse_numeric_value(raw, tsfe_syntax::NumberBase::Decimal);
        self.expect(Kind::NumericLiteral);
        let literal = TsLiteral::NegativeNumeric(NumericLiteral {
            span: token.span,
            value: -value,
            raw,
            base: tsfe_syntax::NumberBase::Decimal,
        });
        TsType::LiteralType(self.ast.alloc(TsLiteralType { span: self.end_span(start), literal }))
    }

    fn parse_template_literal_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        let mut quasis = self.ast.new_vec();
        let mut types = self.ast.new_vec();
        loop {
            let token = self.cur_token();
            let is_tail =
                matches!(token.kind, Kind::NoSubstitutionTemplateLiteral | Kind::TemplateTail);
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
            types.push(self.parse_type());
            if !self.at(Kind::RCurly) {
                self.error_expected(Kind::RCurly);
                break;
            }
            let brace_pos = self.token.start();
            self.token = self.lexer.re_scan_template_token(brace_pos);
            self.prev_token_end = brace_pos + 1;
        }
        let span = self.end_span(start);
        TsType::TemplateLiteralType(self.ast.alloc(TsTemplateLiteralType {
            span,
            quasis: self.ast.node_array(span, quasis),
            types: self.ast.node_array(span, types),
        }))
    }

    fn parse_parenthesized_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        self.bump_any();
        let opening = Span::new(start, self.prev_token_end);
        let type_annotation = self.parse_type();
        self.expect_closing(Kind::RParen, opening);
        TsType::ParenthesizedType(self.ast.alloc(TsParenthesizedType {
            span: self.end_span(start),
            type_annotation,
        }))
    }

    fn parse_tuple_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        self.expect(Kind::LBracket);
        let opening = Span::new(start, self.prev_token_end);
        let elements =
            self.parse_delimited_list(ParsingContext::TupleElementTypes, Kind::RBracket, |p| {
                p.parse_tuple_element()
            });
        self.expect_closing(Kind::RBracket, opening);
        TsType::TupleType(self.ast.alloc(TsTupleType { span: self.end_span(start), elements }))
    }

    fn parse_tuple_element(&mut self) -> TsTupleElement<'a> {
        let start = self.start_span();
        if self.eat(Kind::Dot3) {
            let type_annotation = self.parse_type();
            return TsTupleElement::Rest(TsRestType {
                span: self.end_span(start),
                type_annotation,
            });
        }
        if self.is_start_of_named_tuple_member() {
            let label = self.parse_identifier_name();
            let optional = self.eat(Kind::Question);
            self.expect(Kind::Colon);
            let element_type = self.parse_type();
            return TsTupleElement::Named(TsNamedTupleMember {
                span: self.end_span(start),
                label,
                optional,
                element_type,
            });
        }
        let element_type = self.parse_type();
        if self.eat(Kind::Question) {
            return TsTupleElement::Optional(TsOptionalType {
                span: self.end_span(start),
                type_annotation: element_type,
            });
        }
        TsTupleElement::Type(element_type)
    }

    fn is_start_of_named_tuple_member(&mut self) -> bool {
        self.at_identifier_name()
            && self.lookahead(|p| {
                p.bump_any();
                p.eat(Kind::Question);
                p.at(Kind::Colon)
            })
    }

    fn is_start_of_mapped_type(&mut self) -> bool {
        self.lookahead(|p| {
            p.bump_any();
            if p.eat(Kind::Plus) || p.eat(Kind::Minus) {
                return p.eat_contextual("readonly") && p.eat(Kind::LBracket) && p.at_identifier_name();
            }
            p.eat_contextual("readonly");
            p.eat(Kind::LBracket) && p.at_identifier_name()
        })
    }

    fn parse_mapped_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        self.expect(Kind::LCurly);
        let opening = Span::new(start, self.prev_token_end);
        let readonly = self.parse_mapped_type_readonly_modifier();
        self.expect(Kind::LBracket);
        let name = self.parse_binding_identifier();
        self.expect(Kind::In);
        let constraint = self.parse_type();
        let name_type = if self.eat_contextual("as") { Some(self.parse_type()) } else { None };
        self.expect(Kind::RBracket);
        let optional = self.parse_mapped_type_optional_modifier();
        let type_annotation = if self.eat(Kind::Colon) { Some(self.parse_type()) } else { None };
        self.parse_type_member_separator();
        self.expect_closing(Kind::RCurly, opening);
        let type_parameter = TsTypeParameter {
            span: name.span,
            name,
            constraint: Some(constraint),
            default: None,
            modifiers: TsTypeParameterModifiers::default(),
        };
        TsType::MappedType(self.ast.alloc(TsMappedType {
            span: self.end_span(start),
            type_parameter,
            name_type,
            readonly,
            optional,
            type_annotation,
        }))
    }

    /// A bare `readonly`/`?` with no `+`/`-` sign collapses to `Add`: the
    /// grammar has no fourth state for "present, unsigned" distinct from
    /// "added", so this loses the source spelling of the unsigned form.
    fn parse_mapped_type_readonly_modifier(&mut self) -> TsMappedTypeModifier {
        if self.eat(Kind::Plus) {
            self.eat_contextual("readonly");
            TsMappedTypeModifier::Add
        } else if self.eat(Kind::Minus) {
            self.eat_contextual("readonly");
            TsMappedTypeModifier::Remove
        } else if self.eat_contextual("readonly") {
            TsMappedTypeModifier::Add
        } else {
            TsMappedTypeModifier::None
        }
    }

    fn parse_mapped_type_optional_modifier(&mut self) -> TsMappedTypeModifier {
        if self.eat(Kind::Plus) {
            self.eat(Kind::Question);
            TsMappedTypeModifier::Add
        } else if self.eat(Kind::Minus) {
            self.eat(Kind::Question);
            TsMappedTypeModifier::Remove
        } else if self.eat(Kind::Question) {
            TsMappedTypeModifier::Add
        } else {
            TsMappedTypeModifier::None
        }
    }

    fn parse_infer_type(&mut self) -> TsType<'a> {
        let start = self.start_span();
        self.bump_any();
        let name = self.parse_binding_identifier();
        let constraint = if !self.ctx.has_disallow_conditional_types() && self.eat(Kind::Extends) {
            Some(self.parse_type_operator_or_higher())
        } else {
            None
        };
        let type_parameter = TsTypeParameter {
            span: self.end_span(start),
            name,
            constraint,
            default: None,
            modifiers: TsTypeParameterModifiers::default(),
        };
        TsType::InferType(self.ast.alloc(TsInferType { span: self.end_span(start), type_parameter }))
    }

    fn parse_type_literal(&mut self) -> TsType<'a> {
        let start = self.start_span();
        let members = self.parse_type_member_list();
        TsType::TypeLiteral(self.ast.alloc(TsTypeLiteral { span: self.end_span(start), members }))
    }

    /// Shared between an object type literal and an interface body: both
    /// are just `{` type-member-list `}`.
    pub(crate) fn parse_type_member_list(&mut self) -> NodeArray<'a, TsTypeMember<'a>> {
        let start = self.start_span();
        self.expect(Kind::LCurly);
        let opening = Span::new(start, self.prev_token_end);
        let members =
            self.parse_list(ParsingContext::TypeMembers, |p| p.at_type_member_start(), |p| p.parse_type_member());
        self.expect_closing(Kind::RCurly, opening);
        let span = self.end_span(start);
        self.ast.node_array(span, members)
    }

    fn at_type_member_start(&self) -> bool {
        true
    }

    fn parse_type_member(&mut self) -> TsTypeMember<'a> {
        if self.at(Kind::LParen) || self.at(Kind::LAngle) {
            return TsTypeMember::CallSignature(self.parse_call_signature());
        }
        if self.at(Kind::New)
            && self.lookahead(|p| {
                p.bump_any();
                matches!(p.cur_kind(), Kind::LParen | Kind::LAngle)
            })
        {
            return TsTypeMember::ConstructSignature(self.parse_construct_signature());
        }
        if self.is_index_signature_start() {
            return TsTypeMember::IndexSignature(self.parse_index_signature_member());
        }
        self.parse_property_or_method_signature()
    }

    fn parse_call_signature(&mut self) -> TsCallSignature<'a> {
        let start = self.start_span();
        let type_parameters = self.parse_optional_type_parameters();
        let params = self.parse_parameters();
        let return_type = self.parse_optional_type_annotation();
        self.parse_type_member_separator();
        TsCallSignature { span: self.end_span(start), type_parameters, params, return_type }
    }

    fn parse_construct_signature(&mut self) -> TsConstructSignature<'a> {
        let start = self.start_span();
        self.expect(Kind::New);
        let type_parameters = self.parse_optional_type_parameters();
        let params = self.parse_parameters();
        let return_type = self.parse_optional_type_annotation();
        self.parse_type_member_separator();
        TsConstructSignature { span: self.end_span(start), type_parameters, params, return_type }
    }

    /// `[x: string]: T` vs. `[Symbol.iterator]()`/`['lit']: T`: only the
    /// first is an index signature, distinguished by the bracketed name
    /// being an identifier directly followed by `:`.
    pub(crate) fn is_index_signature_start(&mut self) -> bool {
        self.lookahead(|p| {
            p.eat_contextual("readonly");
            if !p.eat(Kind::LBracket) || !p.at_identifier_name() {
                return false;
            }
            p.bump_any();
            p.at(Kind::Colon)
        })
    }

    pub(crate) fn parse_index_signature_member(&mut self) -> TsIndexSignature<'a> {
        let start = self.start_span();
        let readonly = self.eat_contextual("readonly");
        self.expect(Kind::LBracket);
        let parameter_name = self.parse_binding_identifier();
        self.expect(Kind::Colon);
        let parameter_type = self.parse_type();
        self.expect(Kind::RBracket);
        self.expect(Kind::Colon);
        let type_annotation = self.parse_type();
        self.parse_type_member_separator();
        TsIndexSignature {
            span: self.end_span(start),
            parameter_name,
            parameter_type,
            type_annotation,
            readonly,
        }
    }

    fn at_property_key_start(&self) -> bool {
        matches!(self.cur_kind(), Kind::LBracket | Kind::StringLiteral | Kind::NumericLiteral)
            || self.at_identifier_name()
    }

    fn parse_property_or_method_signature(&mut self) -> TsTypeMember<'a> {
        let start = self.start_span();
        let readonly = self.at_contextual("readonly")
            && self.lookahead(|p| {
                p.bump_any();
                p.at_property_key_start()
            });
        if readonly {
            self.bump_any();
        }
        let key = self.parse_property_key();
        let optional = self.eat(Kind::Question);
        if self.at(Kind::LParen) || self.at(Kind::LAngle) {
            let type_parameters = self.parse_optional_type_parameters();
            let params = self.parse_parameters();
            let return_type = self.parse_optional_type_annotation();
            self.parse_type_member_separator();
            return TsTypeMember::MethodSignature(TsMethodSignature {
                span: self.end_span(start),
                key,
                optional,
                type_parameters,
                params,
                return_type,
            });
        }
        let type_annotation = self.parse_optional_type_annotation();
        self.parse_type_member_separator();
        TsTypeMember::PropertySignature(TsPropertySignature {
            span: self.end_span(start),
            key,
            optional,
            readonly,
            type_annotation,
        })
    }

    /// A type member's trailing `;`/`,` is as optional as ASI makes a
    /// statement's `;`: present, omitted before `}`/EOF, or omitted across
    /// a line break.
    fn parse_type_member_separator(&mut self) {
        if self.eat(Kind::Semicolon) || self.eat(Kind::Comma) {
            return;
        }
        if self.at(Kind::RCurly) || self.at_eof() || self.cur_token().has_preceding_line_break() {
            return;
        }
        self.error_expected(Kind::Semicolon);
    }

    pub(crate) fn parse_optional_type_annotation(&mut self) -> Option<TsType<'a>> {
        if !self.eat(Kind::Colon) {
            return None;
        }
        Some(self.parse_type_or_type_predicate())
    }

    /// A return-type position additionally allows `asserts x`/`asserts x
    /// is T`/`x is T`; every other type position just wants a plain type.
    fn parse_type_or_type_predicate(&mut self) -> TsType<'a> {
        let start = self.start_span();
        let asserts = self.at_contextual("asserts")
            && self.lookahead(|p| {
                p.bump_any();
                p.at_identifier_name() || p.at(Kind::This)
            });
        if asserts {
            self.bump_any();
            let parameter_name = self.parse_type_predicate_parameter();
            let type_annotation =
                if self.eat_contextual("is") { Some(self.parse_type()) } else { None };
            return TsType::TypePredicate(self.ast.alloc(TsTypePredicate {
                span: self.end_span(start),
                asserts: true,
                parameter_name,
                type_annotation,
            }));
        }
        let is_predicate = (self.at_identifier_name() || self.at(Kind::This))
            && self.lookahead(|p| {
                p.bump_any();
                p.at_contextual("is")
            });
        if is_predicate {
            let parameter_name = self.parse_type_predicate_parameter();
            self.bump_any();
            let type_annotation = Some(self.parse_type());
            return TsType::TypePredicate(self.ast.alloc(TsTypePredicate {
                span: self.end_span(start),
                asserts: false,
                parameter_name,
                type_annotation,
            }));
        }
        self.parse_type()
    }

    fn parse_type_predicate_parameter(&mut self) -> TsTypePredicateParameter<'a> {
        if self.at(Kind::This) {
            let span = self.token.span;
            self.bump_any();
            return TsTypePredicateParameter::This(ThisExpression { span });
        }
        TsTypePredicateParameter::Identifier(self.parse_identifier_name())
    }

    pub(crate) fn parse_optional_type_parameters(&mut self) -> Option<TsTypeParameterDeclaration<'a>> {
        if !self.at(Kind::LAngle) {
            return None;
        }
        let start = self.start_span();
        self.bump_any();
        let params = self.parse_non_empty_delimited_list(
            ParsingContext::TypeParameters,
            Kind::RAngle,
            |p| p.parse_type_parameter(),
        );
        self.expect_greater_than();
        Some(TsTypeParameterDeclaration { span: self.end_span(start), params })
    }

    fn parse_type_parameter(&mut self) -> TsTypeParameter<'a> {
        let start = self.start_span();
        let is_const = self.at(Kind::Const)
            && self.lookahead(|p| {
                p.bump_any();
                p.at_identifier_name()
            });
        if is_const {
            self.bump_any();
        }
        let is_in = self.at(Kind::In)
            && self.lookahead(|p| {
                p.bump_any();
                p.at_identifier_name()
            });
        if is_in {
            self.bump_any();
        }
        let is_out = self.at_contextual("out")
            && self.lookahead(|p| {
                p.bump_any();
                p.at_identifier_name()
            });
        if is_out {
            self.bump_any();
        }
        let name = self.parse_binding_identifier();
        let constraint = if self.eat(Kind::Extends) { Some(self.parse_type()) } else { None };
        let default = if self.eat(Kind::Eq) { Some(self.parse_type()) } else { None };
        TsTypeParameter {
            span: self.end_span(start),
            name,
            constraint,
            default,
            modifiers: TsTypeParameterModifiers { is_const, is_in, is_out },
        }
    }

    pub(crate) fn parse_type_alias_declaration(&mut self, start: u32, declare: bool) -> Declaration<'a> {
        self.bump_any();
        let id = self.parse_binding_identifier();
        let type_parameters = self.parse_optional_type_parameters();
        self.expect(Kind::Eq);
        let type_annotation = self.parse_type();
        self.asi();
        Declaration::TsTypeAliasDeclaration(self.ast.alloc(TsTypeAliasDeclaration {
            span: self.end_span(start),
            id,
            type_parameters,
            type_annotation,
            declare,
        }))
    }

    pub(crate) fn parse_interface_declaration(&mut self, start: u32) -> Declaration<'a> {
        self.expect(Kind::Interface);
        let id = self.parse_binding_identifier();
        let type_parameters = self.parse_optional_type_parameters();
        let extends = if self.eat(Kind::Extends) {
            self.parse_non_empty_delimited_list(
                ParsingContext::HeritageClauseElement,
                Kind::LCurly,
                |p| p.parse_heritage_clause_element(),
            )
        } else {
            self.ast.missing_node_array(self.token.start())
        };
        let body = self.parse_type_member_list();
        Declaration::TsInterfaceDeclaration(self.ast.alloc(TsInterfaceDeclaration {
            span: self.end_span(start),
            id,
            type_parameters,
            extends,
            body,
        }))
    }

    pub(crate) fn parse_enum_declaration(
        &mut self,
        start: u32,
        is_const: bool,
        declare: bool,
    ) -> Declaration<'a> {
        self.expect(Kind::Enum);
        let id = self.parse_binding_identifier();
        let lcurly_start = self.start_span();
        self.expect(Kind::LCurly);
        let opening = Span::new(lcurly_start, self.prev_token_end);
        let members =
            self.parse_delimited_list(ParsingContext::EnumMembers, Kind::RCurly, |p| {
                p.parse_enum_member()
            });
        self.expect_closing(Kind::RCurly, opening);
        Declaration::TsEnumDeclaration(self.ast.alloc(TsEnumDeclaration {
            span: self.end_span(start),
            id,
            is_const,
            members,
            declare,
        }))
    }

    fn parse_enum_member(&mut self) -> TsEnumMember<'a> {
        let start = self.start_span();
        let id = self.parse_property_key();
        let initializer = if self.eat(Kind::Eq) { Some(self.parse_assignment_expression()) } else { None };
        TsEnumMember { span: self.end_span(start), id, initializer }
    }

    pub(crate) fn parse_module_declaration(&mut self, start: u32, declare: bool) -> Declaration<'a> {
        if self.at_contextual("global") {
            self.bump_any();
            let body = self.parse_optional_module_body();
            return Declaration::TsModuleDeclaration(self.ast.alloc(TsModuleDeclaration {
                span: self.end_span(start),
                id: TsModuleName::Identifier(BindingIdentifier {
                    span: Span::empty(start),
                    name: "global",
                }),
                body,
                declare,
                is_global: true,
            }));
        }
        self.bump_any();
        if self.at(Kind::StringLiteral) {
            let Expression::StringLiteral(lit) = self.parse_string_literal_expression() else {
                unreachable!()
            };
            let body = self.parse_optional_module_body();
            return Declaration::TsModuleDeclaration(self.ast.alloc(TsModuleDeclaration {
                span: self.end_span(start),
                id: TsModuleName::StringLiteral(*lit),
                body,
                declare,
                is_global: false,
            }));
        }
        let decl = self.parse_module_name_chain(start, declare);
        Declaration::TsModuleDeclaration(self.ast.alloc(decl))
    }

    /// `namespace A.B.C {}` nests as `TsModuleDeclaration`s matching the
    /// grammar's own recursive production, rather than flattening `A.B.C`
    /// into one dotted name.
    fn parse_module_name_chain(&mut self, start: u32, declare: bool) -> TsModuleDeclaration<'a> {
        let id = self.parse_binding_identifier();
        if self.eat(Kind::Dot) {
            let inner_start = self.start_span();
            let inner = self.parse_module_name_chain(inner_start, false);
            return TsModuleDeclaration {
                span: self.end_span(start),
                id: TsModuleName::Identifier(id),
                body: Some(TsModuleBody::Nested(self.ast.alloc(inner))),
                declare,
                is_global: false,
            };
        }
        let body = self.parse_optional_module_body();
        TsModuleDeclaration {
            span: self.end_span(start),
            id: TsModuleName::Identifier(id),
            body,
            declare,
            is_global: false,
        }
    }

    fn parse_optional_module_body(&mut self) -> Option<TsModuleBody<'a>> {
        if !self.at(Kind::LCurly) {
            self.asi();
            return None;
        }
        let block = self.parse_block_statement();
        Some(TsModuleBody::Block(block.body))
    }
}
