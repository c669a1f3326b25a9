//! The ECMAScript grammar layer, spec §5: expressions, statements, binding
//! patterns, classes and the `import`/`export` module forms. TypeScript's
//! own additions (types, interfaces, enums, namespaces) live in `ts.rs`
//! instead, alongside the functions these modules call into for type
//! annotations.

mod class;
mod expression;
mod function;
mod module;
mod pattern;
mod statement;
