//! AST node definitions, one module per grammar family. Everything here
//! is a plain data type; construction goes through [`crate::AstBuilder`]
//! so every node is born through `finish_node`-equivalent bookkeeping.

pub mod class;
pub mod declaration;
pub mod expression;
pub mod function;
pub mod identifier;
pub mod jsx;
pub mod literal;
pub mod pattern;
pub mod program;
pub mod statement;
pub mod ts;

pub use class::*;
pub use declaration::*;
pub use expression::*;
pub use function::*;
pub use identifier::*;
pub use jsx::*;
pub use literal::*;
pub use pattern::*;
pub use program::*;
pub use statement::*;
pub use ts::*;
