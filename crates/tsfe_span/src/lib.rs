//! Span and source-type primitives shared by every other `tsfe` crate.

mod source_type;
mod span;

pub use source_type::{LanguageVariant, ModuleKind, ScriptKind, ScriptTarget, SourceType};
pub use span::{GetSpan, GetSpanMut, Span};
