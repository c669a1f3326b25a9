//! Syntax-level primitives shared between the scanner and the parser:
//! character classification, the parser context bitset, per-token
//! scanning flags, and numeric-literal base tracking.
//!
//! Deliberately small: anything that needs to know about `Kind` (the
//! closed token-kind enum) or the AST lives in `tsfe_parser`/`tsfe_ast`
//! instead, so this crate stays reusable by a future standalone scanner.

mod context;
mod identifier;
mod node_flags;
mod number;
mod token_flags;

pub use context::Context;
pub use identifier::{
    digit_value, is_identifier_part, is_identifier_start, is_line_terminator, is_whitespace,
    is_whitespace_single_line,
};
pub use node_flags::{finish_node, NodeFlags};
pub use number::NumberBase;
pub use token_flags::TokenFlags;
