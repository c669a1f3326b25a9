use std::cell::{Cell, RefCell};

use tsfe_allocator::{Allocator, Box, Vec};
use tsfe_span::Span;

use crate::ast::*;
use crate::intern::InternTable;
use crate::node_array::NodeArray;

/// Where arena allocation happens: a parser production builds most nodes as
/// plain struct literals (they're just data, spans included), then routes
/// anything that needs to live in the bump arena - a `Box`, a `Vec`, an
/// interned `&str` - through one of these methods rather than touching
/// `Box::new_in` directly.
///
/// `node_count`/`identifiers` track the `SourceFile`-level bookkeeping spec
/// §6 asks for; both live behind `Cell`/`RefCell` rather than requiring
/// `&mut self` so every existing `self.ast.alloc(...)`/`self.ast.new_str(...)`
/// call site keeps working unchanged.
pub struct AstBuilder<'a> {
    pub allocator: &'a Allocator,
    node_count: Cell<u32>,
    identifiers: RefCell<InternTable<'a>>,
}

impl<'a> AstBuilder<'a> {
    pub fn new(allocator: &'a Allocator) -> Self {
        Self { allocator, node_count: Cell::new(0), identifiers: RefCell::new(InternTable::new()) }
    }

    pub fn alloc<T>(&self, value: T) -> Box<'a, T> {
        self.node_count.set(self.node_count.get() + 1);
        Box::new_in(value, self.allocator)
    }

    /// Interns an identifier's text, deduplicating repeated names the way
    /// the original implementation's `internIdentifier` does. Only
    /// identifier-producing productions call this (not every string), so
    /// `identifier_count`/`identifiers.len()` tracks identifiers
    /// specifically, not every interned string in the file.
    pub fn intern_identifier(&self, value: &str) -> &'a str {
        self.identifiers.borrow_mut().intern(self.allocator, value)
    }

    pub fn node_count(&self) -> u32 {
        self.node_count.get()
    }

    pub fn identifier_count(&self) -> u32 {
        self.identifiers.borrow().len() as u32
    }

    /// Hands over the accumulated identifier table, leaving an empty one
    /// behind; called once, when [`Program`] is assembled at the end of a
    /// parse.
    pub fn take_identifiers(&self) -> InternTable<'a> {
        self.identifiers.replace(InternTable::new())
    }

    pub fn new_vec<T>(&self) -> Vec<'a, T> {
        self.allocator.new_vec()
    }

    pub fn new_vec_with_capacity<T>(&self, capacity: usize) -> Vec<'a, T> {
        self.allocator.new_vec_with_capacity(capacity)
    }

    pub fn new_str(&self, value: &str) -> &'a str {
        self.allocator.new_str(value)
    }

    pub fn node_array<T>(&self, span: Span, elements: Vec<'a, T>) -> NodeArray<'a, T> {
        NodeArray::new(span, elements)
    }

    pub fn missing_node_array<T>(&self, pos: u32) -> NodeArray<'a, T> {
        let mut array = NodeArray::new(Span::empty(pos), self.new_vec());
        array.is_missing_list = true;
        array
    }

    #[allow(clippy::too_many_arguments)]
    pub fn program(
        &self,
        span: Span,
        file_name: &'a str,
        language_version: tsfe_span::ScriptTarget,
        language_variant: tsfe_span::LanguageVariant,
        script_kind: tsfe_span::ScriptKind,
        is_declaration_file: bool,
        hashbang: Option<Hashbang<'a>>,
        directives: NodeArray<'a, Directive<'a>>,
        statements: NodeArray<'a, Statement<'a>>,
        external_module_indicator: Option<Span>,
        end_of_file_token: EndOfFileToken,
        js_doc_diagnostics: std::vec::Vec<tsfe_diagnostics::Diagnostic>,
        flags: tsfe_syntax::NodeFlags,
    ) -> Program<'a> {
        Program {
            span,
            file_name,
            language_version,
            language_variant,
            script_kind,
            is_declaration_file,
            hashbang,
            directives,
            statements,
            external_module_indicator,
            end_of_file_token,
            js_doc_diagnostics,
            flags,
            identifier_count: self.identifier_count(),
            node_count: self.node_count(),
            identifiers: self.take_identifiers(),
        }
    }

    pub fn expression_missing(&self, span: Span) -> Expression<'a> {
        Expression::Missing(span)
    }

    pub fn type_missing(&self, span: Span) -> TsType<'a> {
        TsType::Missing(span)
    }
}
