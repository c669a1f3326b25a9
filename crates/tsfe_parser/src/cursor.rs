//! Token navigation: the layer every grammar production is built on.
//! Nothing below this module knows about productions; nothing above it
//! pokes at the lexer directly.

use tsfe_span::{GetSpan, Span};
use tsfe_syntax::Context;

use crate::diagnostics;
use crate::kind::Kind;
use crate::state::ParserCheckpoint;
use crate::token::Token;
use crate::Parser;

impl<'a> Parser<'a> {
    #[inline]
    pub(crate) fn start_span(&self) -> u32 {
        self.token.start()
    }

    #[inline]
    pub(crate) fn end_span(&self, start: u32) -> Span {
        Span::new(start, self.prev_token_end)
    }

    #[inline]
    pub(crate) fn cur_kind(&self) -> Kind {
        self.token.kind
    }

    #[inline]
    pub(crate) fn cur_token(&self) -> Token {
        self.token
    }

    #[inline]
    pub(crate) fn cur_src(&self) -> &'a str {
        self.token.span.source_text(self.source_text)
    }

    #[inline]
    pub(crate) fn at(&self, kind: Kind) -> bool {
        self.token.kind == kind
    }

    #[inline]
    pub(crate) fn at_eof(&self) -> bool {
        self.token.kind == Kind::Eof
    }

    /// Advance to the next token, replaying the lexer's trailing context
    /// (whether we just left JSX-child mode) is the caller's job, not this
    /// one: `bump_any`/`eat`/`bump_remap` always use `LexerContext::Regular`.
    #[inline]
    fn advance(&mut self) {
        self.prev_token_end = self.token.end();
        self.token = self.lexer.next_token();
    }

    /// Advance unconditionally, whatever the current token is.
    #[inline]
    pub(crate) fn bump_any(&mut self) {
        self.advance();
    }

    /// Advance and reinterpret the just-consumed token as `kind`, used to
    /// turn a keyword token into a plain identifier once the grammar has
    /// decided it's being used as a binding name.
    #[inline]
    pub(crate) fn bump_remap(&mut self, _kind: Kind) {
        self.advance();
    }

    /// Advance and return `true` if the current token is `kind`, otherwise
    /// leave the cursor untouched and return `false`.
    #[inline]
    #[must_use = "use `bump_any` instead of `eat` if the return value is unused"]
    pub(crate) fn eat(&mut self, kind: Kind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require `kind`, recording a diagnostic and leaving the cursor in
    /// place if it's missing so the caller can still build a `Missing` node
    /// from the current span without desynchronizing from the token stream.
    pub(crate) fn expect(&mut self, kind: Kind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error_expected(kind);
            false
        }
    }

    /// Like [`Self::expect`] but labels the diagnostic with the span of the
    /// opening delimiter this token is meant to close, e.g. the `(` a
    /// missing `)` belongs to.
    pub(crate) fn expect_closing(&mut self, kind: Kind, opening_span: Span) -> bool {
        if self.eat(kind) {
            true
        } else {
            let span = self.token.span;
            self.error(
                diagnostics::expected(span, kind, self.token.kind)
                    .with_label(opening_span, "unmatched delimiter opened here"),
            );
            false
        }
    }

    /// Contextual keywords (`async`, `of`, `type`, `as`, ...) are scanned as
    /// plain `Ident` tokens, spec §4.1: the grammar position decides whether
    /// the spelling means anything, so every check is by text, not `Kind`.
    #[inline]
    pub(crate) fn at_contextual(&self, keyword: &str) -> bool {
        self.at(Kind::Ident) && self.cur_src() == keyword
    }

    #[inline]
    #[must_use = "use `bump_any` instead if the return value is unused"]
    pub(crate) fn eat_contextual(&mut self, keyword: &str) -> bool {
        if self.at_contextual(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Closes a type-argument/parameter list's `>`, splitting it out of a
    /// `>=`/`>>`/`>>=`/`>>>`/`>>>=` token the lexer scanned greedily; the
    /// unconsumed remainder is re-tokenized normally on the next advance.
    pub(crate) fn expect_greater_than(&mut self) -> bool {
        let tok = self.cur_token();
        if tok.kind == Kind::RAngle {
            self.bump_any();
            return true;
        }
        if matches!(
            tok.kind,
            Kind::GtEq | Kind::ShiftRight | Kind::ShiftRightEq | Kind::ShiftRight3 | Kind::ShiftRight3Eq
        ) {
            self.token = self.lexer.re_scan_greater_token(tok);
            self.prev_token_end = tok.start() + 1;
            return true;
        }
        self.error_expected(Kind::RAngle);
        false
    }

    /// Checks `kind` without consuming: used right before a context switch
    /// (e.g. entering JSX-child mode) needs to inspect what's ahead before
    /// deciding how to advance.
    pub(crate) fn expect_without_advance(&mut self, kind: Kind) -> bool {
        if self.at(kind) {
            true
        } else {
            self.error_expected(kind);
            false
        }
    }

    /// [Automatic Semicolon Insertion](https://tc39.es/ecma262/#sec-automatic-semicolon-insertion):
    /// consumes a `;` if present, otherwise accepts the omission when the
    /// next token is `}`, EOF, or begins a new line, and raises a
    /// diagnostic only in the remaining (genuinely invalid) case.
    pub(crate) fn asi(&mut self) {
        if self.eat(Kind::Semicolon) {
            return;
        }
        if self.can_insert_semicolon() {
            return;
        }
        let span = Span::empty(self.prev_token_end);
        self.error(diagnostics::expected(span, Kind::Semicolon, self.token.kind));
    }

    #[inline]
    pub(crate) fn can_insert_semicolon(&self) -> bool {
        let token = self.token;
        matches!(token.kind, Kind::Semicolon | Kind::RCurly | Kind::Eof)
            || token.has_preceding_line_break()
    }

    /// Snapshot everything a speculative parse might touch: lexer position,
    /// current token, end-of-previous-token, context flags, and how many
    /// diagnostics have been recorded so a failed attempt can roll those
    /// back too.
    pub(crate) fn checkpoint(&self) -> ParserCheckpoint {
        ParserCheckpoint {
            lexer: self.lexer.checkpoint(),
            token: self.token,
            prev_token_end: self.prev_token_end,
            ctx: self.ctx,
            error_count: self.errors.len(),
        }
    }

    pub(crate) fn restore(&mut self, checkpoint: ParserCheckpoint) {
        self.lexer.rewind(checkpoint.lexer);
        self.token = checkpoint.token;
        self.prev_token_end = checkpoint.prev_token_end;
        self.ctx = checkpoint.ctx;
        self.errors.truncate(checkpoint.error_count);
        self.last_error_pos = None;
    }

    /// Run `f` with `ctx` temporarily replacing the current context flags,
    /// restoring whatever was active beforehand once `f` returns. The usual
    /// way a production enters `[In]`/`[Yield]`/`[Await]`/ambient scopes for
    /// exactly its own subtree.
    ///
    /// The bookkeeping bits (error-seen, top-level-await/dynamic-import/
    /// import-meta sightings) are the one part of `ctx` this does not
    /// discard wholesale: whatever `f` set is merged onto the restored
    /// context so a sighting inside, say, a function body still reaches the
    /// enclosing [`tsfe_syntax::finish_node`] call that eventually folds it
    /// onto the nearest node carrying a `flags` field.
    pub(crate) fn with_context<T>(&mut self, ctx: Context, f: impl FnOnce(&mut Self) -> T) -> T {
        let prev = self.ctx;
        self.ctx = ctx;
        let result = f(self);
        self.ctx = prev | self.ctx.bookkeeping_bits();
        result
    }

    /// Like [`Self::with_context`] but adds flags to the current context
    /// instead of replacing it wholesale.
    pub(crate) fn with_context_added<T>(
        &mut self,
        flags: Context,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.with_context(self.ctx | flags, f)
    }

    /// Like [`Self::with_context`] but removes flags instead of adding them.
    pub(crate) fn with_context_removed<T>(
        &mut self,
        flags: Context,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.with_context(self.ctx - flags, f)
    }
}
