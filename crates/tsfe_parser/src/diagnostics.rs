//! Diagnostic constructors, spec §7: one function per message shape, each
//! returning a [`Diagnostic`] the caller attaches to [`Parser::error`].
//! Kept as free functions rather than inherent `Parser` methods so a
//! constructor's signature documents exactly what data a diagnostic needs,
//! independent of parser state.

use tsfe_diagnostics::Diagnostic;
use tsfe_span::Span;

use crate::kind::Kind;
use crate::Parser;

pub fn expected(span: Span, expected: Kind, found: Kind) -> Diagnostic {
    Diagnostic::error(format!("'{expected}' expected"))
        .with_label(span, format!("found '{found}'"))
}

pub fn unexpected_token(span: Span, found: Kind) -> Diagnostic {
    Diagnostic::error(format!("unexpected token '{found}'")).with_span(span)
}

pub fn unterminated_string(span: Span) -> Diagnostic {
    Diagnostic::error("unterminated string literal").with_span(span)
}

pub fn unterminated_template(span: Span) -> Diagnostic {
    Diagnostic::error("unterminated template literal").with_span(span)
}

pub fn unterminated_regex(span: Span) -> Diagnostic {
    Diagnostic::error("unterminated regular expression literal").with_span(span)
}

pub fn invalid_escape_sequence(span: Span) -> Diagnostic {
    Diagnostic::error("invalid escape sequence").with_span(span)
}

pub fn type_syntax_in_javascript_file(span: Span, what: &str) -> Diagnostic {
    Diagnostic::error(format!("{what} is only allowed in TypeScript files"))
        .with_span(span)
        .with_help("rename the file to a `.ts`/`.tsx` extension, or remove the type syntax")
}

pub fn trailing_comma_not_allowed(span: Span) -> Diagnostic {
    Diagnostic::error("trailing comma not allowed").with_span(span)
}

pub fn identifier_expected(span: Span, found: Kind) -> Diagnostic {
    Diagnostic::error("identifier expected").with_label(span, format!("found '{found}'"))
}

pub fn a_rest_parameter_must_be_last(span: Span) -> Diagnostic {
    Diagnostic::error("a rest parameter must be last in a parameter list").with_span(span)
}

pub fn a_rest_parameter_cannot_have_a_default_value(span: Span) -> Diagnostic {
    Diagnostic::error("a rest parameter cannot have a default value").with_span(span)
}

pub fn duplicate_modifier(span: Span, modifier: &str) -> Diagnostic {
    Diagnostic::error(format!("duplicate modifier '{modifier}'")).with_span(span)
}

pub fn function_body_forbidden_in_ambient_context(span: Span) -> Diagnostic {
    Diagnostic::error("an implementation cannot be declared in an ambient context").with_span(span)
}

pub fn function_implementation_missing(span: Span) -> Diagnostic {
    Diagnostic::error("function implementation is missing or not immediately following the declaration")
        .with_span(span)
}

pub fn return_statement_not_allowed_here(span: Span) -> Diagnostic {
    Diagnostic::error("a 'return' statement can only be used within a function body").with_span(span)
}

pub fn await_expression_only_in_async_function(span: Span) -> Diagnostic {
    Diagnostic::error("'await' expressions are only allowed within async functions and at the top level of modules")
        .with_span(span)
}

pub fn yield_expression_only_in_generator(span: Span) -> Diagnostic {
    Diagnostic::error("a 'yield' expression is only allowed in a generator body").with_span(span)
}

pub fn mismatched_jsx_closing_tag(span: Span, opening: &str, closing: &str) -> Diagnostic {
    Diagnostic::error(format!(
        "JSX element '{opening}' has no corresponding closing tag; found '{closing}'"
    ))
    .with_span(span)
}

pub fn unterminated_jsx_element(span: Span) -> Diagnostic {
    Diagnostic::error("JSX element is missing a closing tag").with_span(span)
}

pub fn invalid_conditional_type_extends(span: Span) -> Diagnostic {
    Diagnostic::error("conditional type is not allowed here").with_span(span)
}

pub fn line_break_before_throw_argument(span: Span) -> Diagnostic {
    Diagnostic::error("line break not permitted after 'throw'").with_span(span)
}

pub fn variable_declaration_expected(span: Span) -> Diagnostic {
    Diagnostic::error("variable declaration expected").with_span(span)
}

impl<'a> Parser<'a> {
    /// Records `diagnostic`, unless it starts at the same position as the
    /// last recorded diagnostic (a recovery step that re-derives the same
    /// syntax error from a different angle should not duplicate it,
    /// mirroring the original implementation's `parseErrorAtPosition`
    /// suppression rule).
    ///
    /// While a `lookahead`/`try_parse` attempt is in progress, the
    /// diagnostic is buffered into the innermost level of
    /// [`Parser::speculative_errors`] instead of being committed here: it is
    /// only actually recorded (via this same dedup path) if that attempt
    /// succeeds, per §4.3. See [`crate::speculation::Parser::speculate`].
    pub(crate) fn error(&mut self, diagnostic: Diagnostic) {
        if let Some(buffer) = self.speculative_errors.last_mut() {
            buffer.push(diagnostic);
            return;
        }
        let start = diagnostic.primary_start().map(|p| p as u32);
        if start.is_some() && start == self.last_error_pos {
            return;
        }
        self.last_error_pos = start;
        if diagnostic.is_error() {
            self.panicked = true;
        }
        self.ctx = self.ctx.and_error(true);
        self.errors.push(diagnostic.into());
    }

    pub(crate) fn unexpected(&mut self) {
        let token = self.token;
        self.error(unexpected_token(token.span, token.kind));
    }

    pub(crate) fn error_expected(&mut self, expected_kind: Kind) {
        let token = self.token;
        self.error(expected(token.span, expected_kind, token.kind));
    }
}
