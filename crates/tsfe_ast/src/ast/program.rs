use tsfe_diagnostics::Diagnostic;
use tsfe_span::{GetSpan, LanguageVariant, ScriptKind, ScriptTarget, Span};
use tsfe_syntax::NodeFlags;

use crate::ast::statement::Statement;
use crate::intern::InternTable;
use crate::node_array::NodeArray;

/// Zero-width marker node at the very end of the source text, the spec's
/// `SourceFile.endOfFileToken`: lets a consumer that walks every node
/// (including trivia attached past the last real token) find the tail of
/// the file without special-casing "there's no next node".
#[derive(Debug, Clone, Copy)]
pub struct EndOfFileToken {
    pub span: Span,
}

/// A single-line `#!/usr/bin/env node` hashbang, if the file starts with
/// one. Only legal at offset 0.
#[derive(Debug, Clone, Copy)]
pub struct Hashbang<'a> {
    pub span: Span,
    pub value: &'a str,
}

/// A string-literal expression statement in prologue position (`"use
/// strict";`), kept distinct from an ordinary `ExpressionStatement`
/// because directive prologues are syntactically significant and must be
/// recognized before any other statement in the body.
#[derive(Debug, Clone)]
pub struct Directive<'a> {
    pub span: Span,
    pub directive: &'a str,
}

/// The root node, corresponding to the spec's `SourceFile`: owns the
/// statement list, the hashbang and directive prologue, and the metadata
/// the parser was configured with.
#[derive(Debug, Clone)]
pub struct Program<'a> {
    pub span: Span,
    pub file_name: &'a str,
    pub language_version: ScriptTarget,
    pub language_variant: LanguageVariant,
    pub script_kind: ScriptKind,
    pub is_declaration_file: bool,
    pub hashbang: Option<Hashbang<'a>>,
    pub directives: NodeArray<'a, Directive<'a>>,
    pub statements: NodeArray<'a, Statement<'a>>,
    /// Set by the caller's `set_external_module_indicator` callback to the
    /// start position of the first node that makes the file an external
    /// module (any `import`/`export` declaration, or a detected top-level
    /// `import.meta`); `None` for a script file.
    pub external_module_indicator: Option<Span>,
    pub end_of_file_token: EndOfFileToken,
    /// Diagnostics raised while parsing JSDoc comments. Always empty in
    /// this crate: JSDoc parsing is a stub, not implemented (spec §0), but
    /// the field is part of the `SourceFile` interface a future JSDoc
    /// subsystem would populate.
    pub js_doc_diagnostics: std::vec::Vec<Diagnostic>,
    /// Bookkeeping bits folded up from every node finished while parsing
    /// this file (error seen, top-level `await`/dynamic `import`/
    /// `import.meta` sighted) via [`tsfe_syntax::finish_node`].
    pub flags: NodeFlags,
    pub identifier_count: u32,
    pub node_count: u32,
    pub identifiers: InternTable<'a>,
}

impl<'a> Program<'a> {
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.statements.is_empty()
    }

    pub fn is_module(&self) -> bool {
        self.external_module_indicator.is_some()
    }

    pub fn source_text(&self, text: &'a str) -> &'a str {
        self.span.source_text(text)
    }
}

impl<'a> GetSpan for Program<'a> {
    fn span(&self) -> Span {
        self.span
    }
}
