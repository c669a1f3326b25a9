//! Checkpoint/restore state used by speculative parsing (§4.3): a snapshot
//! cheap enough to take before every ambiguous construct and restore from
//! without re-scanning.

use tsfe_syntax::Context;

use crate::lexer::Checkpoint as LexerCheckpoint;
use crate::token::Token;

#[derive(Clone, Copy)]
pub struct ParserCheckpoint {
    pub lexer: LexerCheckpoint,
    pub token: Token,
    pub prev_token_end: u32,
    pub ctx: Context,
    pub error_count: usize,
}
