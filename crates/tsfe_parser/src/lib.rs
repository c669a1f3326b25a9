//! Recursive-descent parser for TypeScript/JavaScript/JSX source text,
//! spec §1-§7: a hand-written scanner feeding a single-token-lookahead
//! parser that builds an arena-allocated AST, with speculative parsing for
//! the grammar's genuine ambiguities (arrow-function heads, `<` as either a
//! type-argument list or a relational operator, JSX vs parenthesized
//! expression) and diagnostic collection that never aborts a parse.
//!
//! The crate is organized the way the grammar is: [`kind`]/[`token`]/
//! `lexer` are the scanning layer; `cursor`/`list`/`speculation` are the
//! token-navigation and ambiguity-resolution layer every production is
//! built on; `js`/`ts`/`jsx` hold the grammar productions themselves,
//! grouped by the part of the language they parse.

mod cursor;
pub mod diagnostics;
mod js;
mod jsx;
mod kind;
mod lexer;
mod list;
mod speculation;
mod state;
mod token;
mod ts;

pub use kind::Kind;
pub use token::Token;

use tsfe_allocator::{Allocator, Vec as ArenaVec};
use tsfe_ast::comment::{Comment, CommentDirective};
use tsfe_ast::{AstBuilder, Directive, EndOfFileToken, Program, Statement};
use tsfe_diagnostics::{Diagnostic, Error};
use tsfe_span::{GetSpan, LanguageVariant, SourceType, Span};
use tsfe_syntax::Context;

use lexer::Lexer;
use list::ParsingContext;

/// Everything a finished parse produces: the tree itself, any diagnostics
/// raised along the way (a non-empty list does not necessarily mean parsing
/// failed outright — most productions recover and keep going), and the
/// comments/directives the scanner collected as trivia.
pub struct ParserReturn<'a> {
    pub program: Program<'a>,
    pub errors: std::vec::Vec<Error>,
    pub comments: std::vec::Vec<Comment>,
    pub comment_directives: std::vec::Vec<CommentDirective>,
    /// `true` if any error was unrecoverable enough that the tree contains
    /// `Missing` placeholders standing in for entire productions.
    pub panicked: bool,
}

pub struct Parser<'a> {
    pub(crate) allocator: &'a Allocator,
    pub(crate) ast: AstBuilder<'a>,
    pub(crate) lexer: Lexer<'a>,
    pub(crate) source_text: &'a str,
    pub(crate) source_type: SourceType,
    pub(crate) file_name: &'a str,

    pub(crate) token: Token,
    pub(crate) prev_token_end: u32,
    pub(crate) ctx: Context,
    pub(crate) parsing_context_stack: std::vec::Vec<ParsingContext>,
    /// CLI-level relaxation, not part of the grammar's own context flags:
    /// a `return` at the top of a script is ordinarily a parse error, but
    /// some embedders (REPLs, code-action snippets) want to allow it.
    pub(crate) allow_return_outside_function: bool,
    pub(crate) errors: std::vec::Vec<Error>,
    /// Start offset of the last diagnostic actually recorded, so a cascade
    /// of diagnostics at the same position (one production's recovery
    /// triggering another's) only surfaces once; mirrors the original
    /// implementation's `parseErrorAtPosition` suppression rule.
    pub(crate) last_error_pos: Option<u32>,
    /// One buffer per active `lookahead`/`try_parse`/`reparse` nesting
    /// level, innermost last. [`Parser::error`] pushes into the top buffer
    /// instead of `errors` while this is non-empty; [`Parser::speculate`]
    /// replays a level's buffer back through `error` (so an enclosing
    /// speculation still gets a chance to discard it) on success, or drops
    /// it on failure.
    pub(crate) speculative_errors: std::vec::Vec<std::vec::Vec<Diagnostic>>,
    pub(crate) panicked: bool,
    /// Names of the JSX elements currently open, outermost first; lets
    /// [`crate::jsx`]'s closing-tag recovery tell "this closes an
    /// enclosing element, so I was left open" apart from "this is a typo
    /// of my own closing tag" instead of only ever comparing against the
    /// immediately enclosing opening tag.
    pub(crate) jsx_tag_stack: std::vec::Vec<&'a str>,
}

impl<'a> Parser<'a> {
    pub fn new(allocator: &'a Allocator, source_text: &'a str, source_type: SourceType) -> Self {
        Self::with_file_name(allocator, source_text, source_type, "<source>")
    }

    pub fn with_file_name(
        allocator: &'a Allocator,
        source_text: &'a str,
        source_type: SourceType,
        file_name: &str,
    ) -> Self {
        let ctx = default_context(source_type);
        Self {
            allocator,
            ast: AstBuilder::new(allocator),
            lexer: Lexer::new(source_text),
            source_text,
            source_type,
            file_name: allocator.new_str(file_name),
            token: Token::default(),
            prev_token_end: 0,
            ctx,
            parsing_context_stack: std::vec::Vec::new(),
            allow_return_outside_function: false,
            errors: std::vec::Vec::new(),
            last_error_pos: None,
            speculative_errors: std::vec::Vec::new(),
            panicked: false,
            jsx_tag_stack: std::vec::Vec::new(),
        }
    }

    #[must_use]
    pub fn allow_return_outside_function(mut self, allow: bool) -> Self {
        self.allow_return_outside_function = allow;
        self
    }

    #[inline]
    pub(crate) fn ts_enabled(&self) -> bool {
        self.source_type.is_typescript()
    }

    #[inline]
    pub(crate) fn jsx_enabled(&self) -> bool {
        self.source_type.language_variant() == LanguageVariant::Jsx
    }

    pub fn parse(mut self) -> ParserReturn<'a> {
        let hashbang_span = self.lexer.skip_hashbang();
        self.token = self.lexer.next_token();
        let program = self.parse_program(hashbang_span);
        ParserReturn {
            program,
            errors: self.errors,
            comments: self.lexer.trivia.comments.clone(),
            comment_directives: self.lexer.trivia.directives.clone(),
            panicked: self.panicked,
        }
    }

    fn parse_program(&mut self, hashbang_span: Option<Span>) -> Program<'a> {
        let start = hashbang_span.map_or(self.token.start(), |s| s.start - 2);
        let hashbang = hashbang_span.map(|span| tsfe_ast::Hashbang {
            span,
            value: self.ast.new_str(span.source_text(self.source_text)),
        });

        let start_checkpoint = self.checkpoint();
        let (mut directives, mut statements, mut external_module_indicator, mut end) =
            self.parse_top_level_statements();

        // Top-level `await` is only legal once the file turns out to be an
        // external module, but module-ness itself is only known once the
        // whole file has been scanned for `import`/`export` syntax - which
        // may appear after the `await` that prompted the question. The pass
        // above runs with `await` disallowed at the top level and merely
        // records a sighting (see the `await` arm in `js::expression`)
        // instead of raising a diagnostic; if that sighting turns out to
        // coincide with a module indicator, the file is re-parsed from the
        // top with `await` enabled, and the re-parse's diagnostics - a real
        // parse under the now-known-correct grammar, not a guess - replace
        // the first pass's entirely.
        if external_module_indicator.is_some() && self.ctx.has_top_level_await() {
            self.restore(start_checkpoint);
            self.ctx = self.ctx.and_await(true).and_top_level_await(false);
            (directives, statements, external_module_indicator, end) =
                self.reparse(|p| p.parse_top_level_statements());
        }

        let end_of_file_token = EndOfFileToken { span: Span::empty(end) };
        let mut flags = tsfe_syntax::NodeFlags::empty();
        tsfe_syntax::finish_node(&mut self.ctx, &mut flags);

        let span = Span::new(start, end.max(start));
        self.ast.program(
            span,
            self.file_name,
            self.source_type.target(),
            self.source_type.language_variant(),
            self.source_type.script_kind(),
            self.source_type.is_typescript_definition(),
            hashbang,
            self.ast.node_array(Span::new(start, start), directives),
            self.ast.node_array(span, statements),
            external_module_indicator,
            end_of_file_token,
            std::vec::Vec::new(),
            flags,
        )
    }

    /// Parses the statement list making up a program's (or a re-parse
    /// attempt's) body: the directive prologue, then every top-level
    /// statement, tracking whichever one first makes the file an external
    /// module. Returns the end offset reached, captured before any
    /// enclosing [`Parser::reparse`] call rewinds the cursor.
    fn parse_top_level_statements(
        &mut self,
    ) -> (ArenaVec<'a, Directive<'a>>, ArenaVec<'a, Statement<'a>>, Option<Span>, u32) {
        let mut directives = self.ast.new_vec();
        while self.token.kind != Kind::Eof {
            match self.try_parse_directive() {
                Some(directive) => directives.push(directive),
                None => break,
            }
        }

        let mut external_module_indicator = None;
        let statements = self.parse_list(ParsingContext::SourceElements, |_| true, |p| {
            let stmt = p.parse_statement();
            if external_module_indicator.is_none() {
                if let Some(span) = module_indicator_span(&stmt) {
                    external_module_indicator = Some(span);
                }
            }
            stmt
        });

        (directives, statements, external_module_indicator, self.prev_token_end)
    }

    /// A directive prologue entry is a bare string-literal expression
    /// statement (`"use strict";`) at the top of a program or function
    /// body; recognized specially because it must not be mistaken for an
    /// ordinary expression statement once later statements appear.
    fn try_parse_directive(&mut self) -> Option<tsfe_ast::Directive<'a>> {
        if self.token.kind != Kind::StringLiteral {
            return None;
        }
        let start = self.token.start();
        let raw = self.token.span.source_text(self.source_text);
        let end_of_literal = self.token.end();
        let checkpoint = self.checkpoint();
        self.bump_any();
        let terminated = matches!(self.token.kind, Kind::Semicolon | Kind::Eof | Kind::RCurly)
            || self.token.has_preceding_line_break();
        if !terminated {
            self.restore(checkpoint);
            return None;
        }
        self.eat(Kind::Semicolon);
        let value = self.ast.new_str(raw.trim_matches(|c| c == '"' || c == '\''));
        Some(tsfe_ast::Directive { span: Span::new(start, end_of_literal), directive: value })
    }
}

fn module_indicator_span(stmt: &tsfe_ast::Statement<'_>) -> Option<Span> {
    use tsfe_ast::{Declaration, Statement};
    match stmt {
        Statement::Declaration(decl) => match decl.as_ref() {
            Declaration::ImportDeclaration(_)
            | Declaration::ExportNamedDeclaration(_)
            | Declaration::ExportDefaultDeclaration(_)
            | Declaration::ExportAllDeclaration(_)
            | Declaration::TsExportAssignment(_) => Some(decl.as_ref().span()),
            _ => None,
        },
        _ => None,
    }
}

/// Default context for a fresh parse, derived from the file kind alone
/// (before any source text has been read): ambient mode for `.d.ts`. Whether
/// top-level `await` is available is NOT decided here - it depends on
/// whether the file turns out to be an external module, which can only be
/// known once the whole file has been scanned, so `Parser::parse_program`
/// discovers and re-parses for it instead.
fn default_context(source_type: SourceType) -> Context {
    let mut ctx = Context::default();
    ctx = ctx.and_ambient(source_type.is_typescript_definition());
    if source_type.is_javascript() {
        ctx |= Context::JAVASCRIPT_FILE;
    }
    if source_type.is_json() {
        ctx |= Context::JSON_FILE;
    }
    ctx
}

#[cfg(test)]
mod test {
    use super::*;
    use tsfe_span::ScriptKind;

    fn parse<'a>(allocator: &'a Allocator, source: &'a str, kind: ScriptKind) -> ParserReturn<'a> {
        Parser::new(allocator, source, SourceType::from_script_kind(kind)).parse()
    }

    #[test]
    fn smoke_test() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "const x = 1;", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
        assert_eq!(ret.program.statements.len(), 1);
    }

    #[test]
    fn hashbang_is_parsed_and_skipped() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "#!/usr/bin/env node\nconst x = 1;", ScriptKind::Ts);
        assert!(ret.program.hashbang.is_some());
        assert_eq!(ret.program.statements.len(), 1);
    }

    #[test]
    fn directive_prologue_is_recognized() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "\"use strict\";\nconst x = 1;", ScriptKind::Js);
        assert_eq!(ret.program.directives.len(), 1);
        assert_eq!(ret.program.statements.len(), 1);
    }

    #[test]
    fn import_sets_external_module_indicator() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "import { x } from 'y';", ScriptKind::Ts);
        assert!(ret.program.is_module());
    }

    #[test]
    fn script_without_import_export_is_not_a_module() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "const x = 1;", ScriptKind::Ts);
        assert!(!ret.program.is_module());
    }

    #[test]
    fn for_of_with_declaration_parses_clean() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "for (const x of xs) { y(x); }", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
        assert_eq!(ret.program.statements.len(), 1);
    }

    #[test]
    fn for_in_without_declaration_reinterprets_identifier_target() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "for (k in obj) { use(k); }", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn classic_for_loop_with_empty_clauses() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "for (;;) { break; }", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn labeled_statement_is_not_confused_with_ambient_declaration() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "declare: while (true) { break declare; }", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn try_catch_finally_all_present() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "try { a(); } catch (e) { b(); } finally { c(); }", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn switch_with_multiple_cases_and_default() {
        let allocator = Allocator::default();
        let ret = parse(
            &allocator,
            "switch (x) { case 1: a(); break; case 2: b(); break; default: c(); }",
            ScriptKind::Ts,
        );
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn lone_closing_paren_does_not_infinite_loop() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, ")", ScriptKind::Ts);
        assert!(!ret.errors.is_empty());
        assert_eq!(ret.program.statements.len(), 1);
    }

    #[test]
    fn ambient_namespace_declaration() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "declare namespace A.B { const x: number; }", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn default_import_with_named_specifiers() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "import Foo, { bar, baz as qux } from 'mod';", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
        assert!(ret.program.is_module());
    }

    #[test]
    fn namespace_import() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "import * as ns from 'mod';", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn import_equals_require_form() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "import fs = require('fs');", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn export_default_function() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "export default function foo() {}", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
        assert!(ret.program.is_module());
    }

    #[test]
    fn top_level_await_in_a_module_is_not_an_error() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "import { x } from 'y';\nawait x;", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
        assert!(ret.program.flags.contains(tsfe_syntax::NodeFlags::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT));
    }

    #[test]
    fn top_level_await_in_a_script_is_an_error() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "await x;", ScriptKind::Ts);
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn export_named_with_re_export_source() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "export { a, b as c } from 'mod';", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn export_all_with_alias() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "export * as ns from 'mod';", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn export_assignment() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "export = Foo;", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn export_wraps_a_class_declaration() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "export class Foo {}", ScriptKind::Ts);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn jsx_element_with_attributes_and_children() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "const el = <div id=\"x\" {...rest}>hi {name}</div>;", ScriptKind::Tsx);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn jsx_self_closing_element() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "const el = <Foo.Bar baz />;", ScriptKind::Tsx);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn jsx_fragment_with_nested_element() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "const el = <>text <span>a</span></>;", ScriptKind::Tsx);
        assert!(ret.errors.is_empty());
    }

    #[test]
    fn jsx_mismatched_closing_tag_reports_diagnostic() {
        let allocator = Allocator::default();
        let ret = parse(&allocator, "const el = <div>x</span>;", ScriptKind::Tsx);
        assert!(!ret.errors.is_empty());
    }

    #[test]
    fn jsx_closing_tag_matching_an_ancestor_leaves_inner_element_open() {
        let allocator = Allocator::default();
        // `<b>` has no closing tag of its own; `</a>` belongs to the outer
        // element, so `<b>` should be reported unterminated rather than
        // `</a>` being reported as a typo of `</b>`.
        let ret = parse(&allocator, "const el = <a><b>x</a>;", ScriptKind::Tsx);
        assert!(!ret.errors.is_empty());
        assert!(!ret.errors.iter().any(|e| e.to_string().contains("has no corresponding closing tag")));
    }
}
