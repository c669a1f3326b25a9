//! Generic list-parsing machinery, spec §4.4: every comma/semicolon
//! separated or juxtaposed run of elements in the grammar (statements,
//! class members, parameters, heritage clauses, JSX children...) goes
//! through one of the two functions here, parameterized by a
//! [`ParsingContext`] that says only which recovery/termination rules apply.

use tsfe_allocator::Vec as ArenaVec;
use tsfe_ast::NodeArray;
use tsfe_span::Span;

use crate::kind::Kind;
use crate::Parser;

/// Which list the parser is currently inside of. Used to decide when a
/// list has ended (an unexpected token might terminate one context's list
/// but be a legal continuation of an enclosing one) and to pick the right
/// per-element recovery behavior. Mirrors the closed set of list kinds the
/// original implementation tracks on a context stack; `JSDocParameters` and
/// the sentinel `Count` entry have no counterpart here since JSDoc type
/// comments are out of scope.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ParsingContext {
    SourceElements,
    BlockStatements,
    SwitchClauses,
    SwitchClauseStatements,
    TypeMembers,
    ClassMembers,
    EnumMembers,
    HeritageClauseElement,
    VariableDeclarations,
    ObjectBindingElements,
    ArrayBindingElements,
    ArgumentExpressions,
    ObjectLiteralMembers,
    JsxAttributes,
    JsxChildren,
    ArrayLiteralMembers,
    Parameters,
    RestProperties,
    TypeParameters,
    TypeArguments,
    TupleElementTypes,
    HeritageClauses,
    ImportOrExportSpecifiers,
    AssertEntries,
}

impl ParsingContext {
    /// Tokens that, seen at the head of an element, mean "this list is
    /// over" rather than "recover and keep parsing elements" for contexts
    /// with no single closing delimiter of their own (statement lists end
    /// at the enclosing `}`, not at a dedicated terminator).
    fn is_closing_token(self, kind: Kind) -> bool {
        matches!(
            (self, kind),
            (Self::BlockStatements | Self::SwitchClauseStatements | Self::ClassMembers | Self::TypeMembers | Self::EnumMembers | Self::ObjectLiteralMembers | Self::ObjectBindingElements, Kind::RCurly)
                | (Self::SwitchClauses, Kind::RCurly)
                | (Self::ArrayBindingElements | Self::ArrayLiteralMembers | Self::TupleElementTypes, Kind::RBracket)
                | (Self::ArgumentExpressions | Self::Parameters | Self::RestProperties, Kind::RParen)
                | (Self::TypeParameters | Self::TypeArguments, Kind::RAngle)
                | (Self::HeritageClauseElement | Self::HeritageClauses, Kind::LCurly)
                | (Self::JsxAttributes, Kind::RAngle | Kind::Slash)
                | (Self::JsxChildren, Kind::LAngle)
        )
    }
}

impl<'a> Parser<'a> {
    /// Parse elements for as long as `is_element_start` holds and we
    /// haven't hit `context`'s closing token or EOF, juxtaposed with no
    /// separator (statement lists, class members, JSX children).
    ///
    /// A token that is neither an element start nor the list's closing
    /// token (a stray token inside a class body, say) is not a silent
    /// reason to give up on the rest of the list: it's reported and skipped
    /// so parsing can keep going from the next token, the same "skip one
    /// token and retry" recovery `parse_delimited_list` and
    /// `parse_non_empty_delimited_list`'s callers get from `expect`/`eat`
    /// elsewhere in the grammar.
    pub(crate) fn parse_list<T>(
        &mut self,
        context: ParsingContext,
        mut is_element_start: impl FnMut(&Self) -> bool,
        mut parse_element: impl FnMut(&mut Self) -> T,
    ) -> ArenaVec<'a, T> {
        let mut elements = self.ast.new_vec();
        while !self.at_eof() && !context.is_closing_token(self.cur_kind()) {
            if !is_element_start(self) {
                self.unexpected();
                self.bump_any();
                continue;
            }
            elements.push(parse_element(self));
        }
        elements
    }

    /// Parse a comma-separated list bracketed by `open`/`close`, allowing a
    /// trailing comma. `close` is consumed by the caller via
    /// `expect_closing`, not here, so the caller can use the opening span
    /// in the error if it's missing.
    pub(crate) fn parse_delimited_list<T>(
        &mut self,
        context: ParsingContext,
        close: Kind,
        mut parse_element: impl FnMut(&mut Self) -> T,
    ) -> NodeArray<'a, T> {
        let start = self.start_span();
        let mut elements = self.ast.new_vec();
        let mut has_trailing_comma = false;
        loop {
            if self.at_eof() || self.at(close) || context.is_closing_token(self.cur_kind()) {
                break;
            }
            elements.push(parse_element(self));
            has_trailing_comma = false;
            if self.eat(Kind::Comma) {
                has_trailing_comma = true;
                continue;
            }
            break;
        }
        let span = self.end_span(start);
        let mut array = self.ast.node_array(span, elements);
        array.has_trailing_comma = has_trailing_comma;
        array
    }

    /// Like [`Self::parse_delimited_list`] but for lists that must contain
    /// at least one element; if none was found, returns a zero-width
    /// `is_missing_list` array at the current position instead of an empty
    /// span, so callers can distinguish "empty by the grammar" (`()`) from
    /// "recovery gave up here".
    pub(crate) fn parse_non_empty_delimited_list<T>(
        &mut self,
        context: ParsingContext,
        close: Kind,
        parse_element: impl FnMut(&mut Self) -> T,
    ) -> NodeArray<'a, T> {
        let pos = self.start_span();
        let array = self.parse_delimited_list(context, close, parse_element);
        if array.is_empty() {
            let mut missing = self.ast.node_array(Span::empty(pos), self.ast.new_vec());
            missing.is_missing_list = true;
            missing
        } else {
            array
        }
    }
}
