//! JSX grammar, spec §6: tags, attributes, children, and the mismatched-
//! closing-tag recovery that keeps a malformed element from losing the
//! rest of the file.
//!
//! JSX text runs are not tokenized by the regular scanner at all — `<div>
//! hello</div>`'s ` hello` has to be read as one `JsxText` token spanning
//! everything up to the next `<`/`{`, which only [`Lexer::next_jsx_text_token`]
//! knows how to do. Every production here that crosses from "inside a
//! tag" (regular tokens) to "between tags" (JSX text) has to manually
//! re-seek the lexer to the position it actually needs to resume from,
//! since the one token of regular lookahead the parser keeps around has
//! usually already been scanned past that point by the time the switch is
//! discovered.

use tsfe_span::{GetSpan, Span};
use tsfe_ast::{
    Expression, IdentifierName, JsxAttribute, JsxAttributeItem, JsxAttributeValue, JsxChild,
    JsxClosingElement, JsxElement, JsxExpressionContainer, JsxFragment, JsxMemberName, JsxName,
    JsxNamespacedName, JsxOpeningElement, JsxSpreadAttribute, JsxText, NodeArray, StringLiteral,
};

use crate::diagnostics;
use crate::kind::Kind;
use crate::list::ParsingContext;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_jsx_element_or_fragment(&mut self) -> Expression<'a> {
        let start = self.start_span();
        self.expect(Kind::LAngle);
        if self.eat(Kind::RAngle) {
            return self.parse_jsx_fragment_rest(start);
        }

        let opening = self.parse_jsx_opening_element_rest(start);
        if opening.self_closing {
            let end = opening.span;
            return Expression::JsxElement(self.ast.alloc(JsxElement {
                span: end,
                opening_element: opening,
                children: self.ast.missing_node_array(self.prev_token_end),
                closing_element: None,
            }));
        }

        let opening_text = opening.name.span().source_text(self.source_text);
        self.jsx_tag_stack.push(opening_text);
        let children = self.parse_jsx_children();
        let closing_element = self.parse_jsx_closing_tag(opening_text);
        self.jsx_tag_stack.pop();

        Expression::JsxElement(self.ast.alloc(JsxElement {
            span: self.end_span(start),
            opening_element: opening,
            children,
            closing_element,
        }))
    }

    fn parse_jsx_fragment_rest(&mut self, start: u32) -> Expression<'a> {
        let children = self.parse_jsx_children();
        if self.at(Kind::LAngle) {
            self.bump_any();
            self.expect(Kind::Slash);
            self.expect_greater_than();
        } else {
            self.error(diagnostics::unterminated_jsx_element(Span::empty(self.prev_token_end)));
        }
        Expression::JsxFragment(self.ast.alloc(JsxFragment { span: self.end_span(start), children }))
    }

    fn parse_jsx_opening_element_rest(&mut self, start: u32) -> JsxOpeningElement<'a> {
        let name = self.parse_jsx_name();
        let type_arguments =
            if self.ts_enabled() && self.at(Kind::LAngle) {
                self.try_parse(|p| p.try_parse_type_arguments())
            } else {
                None
            };
        let attrs_start = self.start_span();
        let attributes = self.parse_list(
            ParsingContext::JsxAttributes,
            |p| p.at_jsx_attribute_start(),
            |p| p.parse_jsx_attribute_item(),
        );
        let attributes = self.ast.node_array(self.end_span(attrs_start), attributes);
        let self_closing = self.eat(Kind::Slash);
        self.expect_greater_than();
        JsxOpeningElement { span: self.end_span(start), name, type_arguments, attributes, self_closing }
    }

    /// Consumes a `</name>` as this element's own closing tag, unless it
    /// turns out to belong to an ancestor instead: a name that doesn't
    /// match `opening_text` is checked against every element still open
    /// further up [`Parser::jsx_tag_stack`], not just the immediate parent,
    /// the way the grammar actually reconciles unbalanced tags (`<a><b>x
    /// </a>` leaves `<b>` implicitly unclosed rather than calling `</a>` a
    /// typo of `</b>`).
    fn parse_jsx_closing_tag(&mut self, opening_text: &str) -> Option<JsxClosingElement<'a>> {
        if !self.at(Kind::LAngle) {
            return None;
        }

        let closing_text = self.lookahead(|p| {
            p.bump_any();
            p.expect(Kind::Slash);
            let name = p.parse_jsx_name();
            p.ast.new_str(name.span().source_text(p.source_text))
        });

        if closing_text != opening_text && self.closes_an_ancestor(closing_text) {
            self.error(diagnostics::unterminated_jsx_element(Span::empty(self.prev_token_end)));
            return None;
        }

        let start = self.start_span();
        self.bump_any();
        self.expect(Kind::Slash);
        let name = self.parse_jsx_name();
        self.expect_greater_than();
        let closing = JsxClosingElement { span: self.end_span(start), name };
        if closing_text != opening_text {
            self.error(diagnostics::mismatched_jsx_closing_tag(closing.span, opening_text, closing_text));
        }
        Some(closing)
    }

    /// `true` if `closing_text` matches some element enclosing the one
    /// currently being closed (everything on the stack but its own, still-
    /// on-top entry).
    fn closes_an_ancestor(&self, closing_text: &str) -> bool {
        let without_current = &self.jsx_tag_stack[..self.jsx_tag_stack.len().saturating_sub(1)];
        without_current.iter().rev().any(|&tag| tag == closing_text)
    }

    fn at_jsx_attribute_start(&self) -> bool {
        self.at(Kind::LCurly) || self.at_identifier_name()
    }

    fn at_jsx_closing_tag_start(&mut self) -> bool {
        self.lookahead(|p| {
            p.bump_any();
            p.at(Kind::Slash)
        })
    }

    /// Children run from right after the opening tag's `>` up to (but not
    /// including) the next closing tag, interleaving raw text runs,
    /// `{...}` expression containers, and nested elements/fragments.
    fn parse_jsx_children(&mut self) -> NodeArray<'a, JsxChild<'a>> {
        let start = self.prev_token_end;
        let mut children = self.ast.new_vec();
        loop {
            let text_token = self.lexer.next_jsx_text_token_at(self.prev_token_end);
            if !text_token.span.is_empty() {
                let value = self.ast.new_str(text_token.span.source_text(self.source_text));
                children.push(JsxChild::Text(JsxText { span: text_token.span, value }));
            }
            self.prev_token_end = text_token.end();
            self.token = self.lexer.next_token();

            match self.cur_kind() {
                Kind::LCurly => {
                    children.push(JsxChild::ExpressionContainer(self.parse_jsx_expression_container()));
                }
                Kind::LAngle => {
                    if self.at_jsx_closing_tag_start() {
                        break;
                    }
                    match self.parse_jsx_element_or_fragment() {
                        Expression::JsxElement(element) => {
                            children.push(JsxChild::Element((*element).clone()));
                        }
                        Expression::JsxFragment(fragment) => {
                            children.push(JsxChild::Fragment((*fragment).clone()));
                        }
                        _ => unreachable!("parse_jsx_element_or_fragment only returns JSX nodes"),
                    }
                }
                Kind::Eof => {
                    self.error(diagnostics::unterminated_jsx_element(Span::empty(self.prev_token_end)));
                    break;
                }
                _ => break,
            }
        }
        self.ast.node_array(Span::new(start, self.prev_token_end), children)
    }

    fn parse_jsx_expression_container(&mut self) -> JsxExpressionContainer<'a> {
        let start = self.start_span();
        self.expect(Kind::LCurly);
        let expression = if self.at(Kind::RCurly) { None } else { Some(self.parse_expression()) };
        self.expect(Kind::RCurly);
        JsxExpressionContainer { span: self.end_span(start), expression }
    }

    fn parse_jsx_attribute_item(&mut self) -> JsxAttributeItem<'a> {
        let start = self.start_span();
        if self.at(Kind::LCurly) {
            self.bump_any();
            self.expect(Kind::Dot3);
            let argument = self.parse_assignment_expression();
            self.expect(Kind::RCurly);
            return JsxAttributeItem::Spread(JsxSpreadAttribute { span: self.end_span(start), argument });
        }
        JsxAttributeItem::Attribute(self.parse_jsx_attribute(start))
    }

    fn parse_jsx_attribute(&mut self, start: u32) -> JsxAttribute<'a> {
        let name = self.parse_jsx_name();
        let value = if self.eat(Kind::Eq) { Some(self.parse_jsx_attribute_value()) } else { None };
        JsxAttribute { span: self.end_span(start), name, value }
    }

    fn parse_jsx_attribute_value(&mut self) -> JsxAttributeValue<'a> {
        match self.cur_kind() {
            Kind::StringLiteral => {
                let token_start = self.start_span();
                let token = self.lexer.scan_jsx_attribute_string(token_start);
                self.token = token;
                let full = token.span.source_text(self.source_text);
                let raw = &full[1..full.len().saturating_sub(1)];
                let value = tsfe_allocator::String::from_str_in(raw, self.allocator);
                let raw = self.ast.new_str(raw);
                self.bump_any();
                JsxAttributeValue::StringLiteral(StringLiteral { span: token.span, value, raw })
            }
            Kind::LCurly => JsxAttributeValue::ExpressionContainer(self.parse_jsx_expression_container()),
            Kind::LAngle => match self.parse_jsx_element_or_fragment() {
                Expression::JsxElement(element) => JsxAttributeValue::Element((*element).clone()),
                Expression::JsxFragment(fragment) => JsxAttributeValue::Fragment((*fragment).clone()),
                _ => unreachable!("parse_jsx_element_or_fragment only returns JSX nodes"),
            },
            _ => {
                self.error_expected(Kind::StringLiteral);
                JsxAttributeValue::StringLiteral(StringLiteral {
                    span: Span::empty(self.token.start()),
                    value: tsfe_allocator::String::from_str_in("", self.allocator),
                    raw: "",
                })
            }
        }
    }

    /// `Foo`, `Foo.Bar.Baz`, or `svg:rect`; re-scans each segment under
    /// [`Lexer::scan_jsx_identifier`] since JSX names additionally allow
    /// `-` (`data-foo`), which the regular scanner doesn't.
    fn parse_jsx_name(&mut self) -> JsxName<'a> {
        let start = self.start_span();
        let first = self.scan_jsx_identifier_name();

        if self.eat(Kind::Colon) {
            let name = self.scan_jsx_identifier_name();
            return JsxName::Namespaced(JsxNamespacedName {
                span: self.end_span(start),
                namespace: first,
                name,
            });
        }

        let mut name = JsxName::Identifier(first);
        while self.at(Kind::Dot) {
            self.bump_any();
            let property = self.scan_jsx_identifier_name();
            name = JsxName::Member(JsxMemberName {
                span: self.end_span(start),
                object: self.ast.alloc(name),
                property,
            });
        }
        name
    }

    fn scan_jsx_identifier_name(&mut self) -> IdentifierName<'a> {
        let start = self.start_span();
        let token = self.lexer.scan_jsx_identifier(start);
        self.token = token;
        let name = self.ast.new_str(token.span.source_text(self.source_text));
        self.bump_any();
        IdentifierName { span: token.span, name }
    }
}
