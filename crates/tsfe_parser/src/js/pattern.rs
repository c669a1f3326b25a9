//! Identifiers and binding patterns, spec §5.2: the left-hand side shapes
//! shared by variable declarators, parameters, catch clauses and
//! destructuring assignment targets.

use tsfe_span::Span;
use tsfe_ast::{
    ArrayPattern, ArrayPatternElement, BindingIdentifier, BindingPattern, IdentifierName,
    IdentifierReference, ObjectPattern, ObjectPatternProperty, PrivateIdentifier, RestElement,
};

use crate::diagnostics;
use crate::kind::Kind;
use crate::list::ParsingContext;
use crate::Parser;

impl<'a> Parser<'a> {
    /// `true` if the current token may stand for a binding/reference name
    /// at all (its keyword-ness, if any, is the grammar position's problem,
    /// not this check's).
    pub(crate) fn at_identifier_name(&self) -> bool {
        self.at(Kind::Ident) || self.cur_kind().is_any_keyword() || self.cur_kind().is_contextual_keyword()
    }

    /// `yield`/`await` are only reserved as keywords inside the scope that
    /// makes them so; used outside a generator/async scope they're
    /// ordinary identifiers. A use where the flag IS set is a genuine
    /// grammar error, but the token is still consumed as an identifier so
    /// the rest of the production can recover.
    fn check_restricted_identifier(&mut self) {
        if self.at(Kind::Yield) && self.ctx.has_yield() {
            self.error(diagnostics::identifier_expected(self.token.span, Kind::Yield));
        } else if self.at_contextual("await") && self.ctx.has_await() {
            self.error(diagnostics::identifier_expected(self.token.span, Kind::Ident));
        }
    }

    pub(crate) fn parse_identifier_reference(&mut self) -> IdentifierReference<'a> {
        self.check_restricted_identifier();
        let span = self.token.span;
        if !self.at_identifier_name() {
            self.error(diagnostics::identifier_expected(span, self.cur_kind()));
            return IdentifierReference { span: Span::empty(span.start), name: "" };
        }
        let name = self.ast.intern_identifier(self.cur_src());
        self.bump_any();
        IdentifierReference { span, name }
    }

    pub(crate) fn parse_binding_identifier(&mut self) -> BindingIdentifier<'a> {
        self.check_restricted_identifier();
        let span = self.token.span;
        if !self.at_identifier_name() {
            self.error(diagnostics::identifier_expected(span, self.cur_kind()));
            return BindingIdentifier { span: Span::empty(span.start), name: "" };
        }
        let name = self.ast.intern_identifier(self.cur_src());
        self.bump_any();
        BindingIdentifier { span, name }
    }

    /// Any name at all is legal here, keywords included: property keys,
    /// import/export specifiers, JSX tag/attribute names.
    pub(crate) fn parse_identifier_name(&mut self) -> IdentifierName<'a> {
        let span = self.token.span;
        if !self.at_identifier_name() {
            self.error(diagnostics::identifier_expected(span, self.cur_kind()));
            return IdentifierName { span: Span::empty(span.start), name: "" };
        }
        let name = self.ast.new_str(self.cur_src());
        self.bump_any();
        IdentifierName { span, name }
    }

    pub(crate) fn parse_private_identifier(&mut self) -> PrivateIdentifier<'a> {
        let span = self.token.span;
        let name = self.ast.new_str(self.cur_src().trim_start_matches('#'));
        self.expect(Kind::PrivateIdentifier);
        PrivateIdentifier { span, name }
    }

    pub(crate) fn parse_binding_pattern(&mut self) -> BindingPattern<'a> {
        let pattern = self.parse_binding_pattern_core();
        self.parse_binding_pattern_default(pattern)
    }

    /// A binding pattern with no trailing `= default` consumed, for
    /// positions (parameters) where a `?`/type annotation can come between
    /// the pattern and its default value.
    pub(crate) fn parse_binding_pattern_core(&mut self) -> BindingPattern<'a> {
        match self.cur_kind() {
            Kind::LCurly => {
                let object = self.parse_object_binding_pattern();
                BindingPattern::ObjectPattern(self.ast.alloc(object))
            }
            Kind::LBracket => {
                let array = self.parse_array_binding_pattern();
                BindingPattern::ArrayPattern(self.ast.alloc(array))
            }
            _ => {
                let id = self.parse_binding_identifier();
                BindingPattern::BindingIdentifier(self.ast.alloc(id))
            }
        }
    }

    /// Attaches a `= expr` default/initializer to an already-parsed binding
    /// target, if one follows; used both for a whole pattern (`[a] = b`
    /// as a parameter) and for a single destructured property/element.
    pub(crate) fn parse_binding_pattern_default(
        &mut self,
        left: tsfe_ast::BindingPattern<'a>,
    ) -> tsfe_ast::BindingPattern<'a> {
        use tsfe_span::GetSpan;
        if !self.eat(Kind::Eq) {
            return left;
        }
        let start = left.span().start;
        let right = self.parse_assignment_expression();
        let span = self.end_span(start);
        BindingPattern::AssignmentPattern(
            self.ast.alloc(tsfe_ast::AssignmentPattern { span, left, right }),
        )
    }

    fn parse_object_binding_pattern(&mut self) -> ObjectPattern<'a> {
        let start = self.start_span();
        self.expect(Kind::LCurly);
        let opening = Span::new(start, self.prev_token_end);
        let properties = self.parse_delimited_list(ParsingContext::ObjectBindingElements, Kind::RCurly, |p| {
            p.parse_object_binding_property()
        });
        self.expect_closing(Kind::RCurly, opening);
        ObjectPattern { span: self.end_span(start), properties, type_annotation: None }
    }

    fn parse_object_binding_property(&mut self) -> ObjectPatternProperty<'a> {
        if self.at(Kind::Dot3) {
            let start = self.start_span();
            self.bump_any();
            let argument = self.parse_binding_pattern();
            return ObjectPatternProperty::Rest(RestElement { span: self.end_span(start), argument });
        }
        let key = self.parse_identifier_name();
        if self.eat(Kind::Colon) {
            let value = self.parse_binding_pattern();
            ObjectPatternProperty::Property { key, value, shorthand: false }
        } else {
            let ident = BindingIdentifier { span: key.span, name: key.name };
            let value = BindingPattern::BindingIdentifier(self.ast.alloc(ident));
            let value = self.parse_binding_pattern_default(value);
            ObjectPatternProperty::Property { key, value, shorthand: true }
        }
    }

    fn parse_array_binding_pattern(&mut self) -> ArrayPattern<'a> {
        let start = self.start_span();
        self.expect(Kind::LBracket);
        let opening = Span::new(start, self.prev_token_end);
        let elements = self.parse_delimited_list(ParsingContext::ArrayBindingElements, Kind::RBracket, |p| {
            p.parse_array_binding_element()
        });
        self.expect_closing(Kind::RBracket, opening);
        ArrayPattern { span: self.end_span(start), elements, type_annotation: None }
    }

    fn parse_array_binding_element(&mut self) -> Option<ArrayPatternElement<'a>> {
        if self.at(Kind::Comma) {
            return None;
        }
        if self.at(Kind::Dot3) {
            let start = self.start_span();
            self.bump_any();
            let argument = self.parse_binding_pattern();
            return Some(ArrayPatternElement::Rest(RestElement { span: self.end_span(start), argument }));
        }
        Some(ArrayPatternElement::Pattern(self.parse_binding_pattern()))
    }
}
