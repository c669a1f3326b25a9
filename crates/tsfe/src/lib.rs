//! Aggregator crate: re-exports the scanner, parser, AST, and diagnostics
//! crates under one name, for an embedder that wants `tsfe::Parser` rather
//! than depending on `tsfe_parser` directly. The `tsfe` binary (see
//! `src/bin/tsfe.rs`) is the ad-hoc CLI built on top of this surface.

pub use tsfe_allocator::Allocator;
pub use tsfe_ast::{self as ast, AstBuilder, NodeArray, Program};
pub use tsfe_diagnostics::{self as diagnostics, Diagnostic, Error, Result};
pub use tsfe_parser::{Kind, Parser, ParserReturn, Token};
pub use tsfe_span::{
    self as span, LanguageVariant, ModuleKind, ScriptKind, ScriptTarget, SourceType,
};
pub use tsfe_syntax as syntax;
