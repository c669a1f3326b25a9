//! Speculative parsing, spec §4.3: the three ways the parser tries a
//! production it isn't sure applies yet and rolls back the token stream (and
//! optionally the diagnostics) if it guessed wrong.
//!
//! Context flags never need to be saved here the way the token stream and
//! diagnostics do: they already unwind naturally via plain recursive-descent
//! call/return, the same invariant the original implementation's
//! `speculationHelper` comment notes and asserts rather than restores.

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum SpeculationKind {
    /// Always rewinds, whatever `f` returns; used to peek ahead without
    /// committing to anything, e.g. "is the token after this `<` a type
    /// argument list or a relational operator?".
    Lookahead,
    /// Rewinds only if `f` returns `None`; the ordinary "attempt this
    /// production, fall back to another one if it doesn't apply" tool, e.g.
    /// distinguishing an arrow function head from a parenthesized
    /// expression.
    TryParse,
    /// Like `TryParse`, but on success keeps whatever diagnostics were
    /// raised during the attempt instead of discarding them: used when
    /// re-parsing a span under a different grammar is not a guess, it's
    /// known to be correct and any errors found are real.
    Reparse,
}

impl<'a> crate::Parser<'a> {
    /// Always restores parser state once `f` returns, regardless of its
    /// result; useful for one-token-ahead decisions that shouldn't consume
    /// anything no matter the answer.
    pub(crate) fn lookahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.speculate(SpeculationKind::Lookahead, |p| Some(f(p))).unwrap()
    }

    /// Runs `f`; if it returns `None`, rewinds as though `f` was never
    /// called. Diagnostics raised during a failed attempt are discarded
    /// along with the token-stream rewind.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        self.speculate(SpeculationKind::TryParse, f)
    }

    /// Runs `f` under a grammar known to apply (e.g. re-parsing an
    /// already-scanned type-argument-looking `<...>` run once the parser
    /// has committed to treating it as one); diagnostics raised while `f`
    /// runs are kept, since this isn't a guess.
    pub(crate) fn reparse<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let checkpoint = self.checkpoint();
        let result = f(self);
        self.restore_token_stream_only(checkpoint);
        result
    }

    /// `Lookahead`/`TryParse` both buffer diagnostics raised while `f` runs
    /// into a fresh level of [`Parser::speculative_errors`] (see
    /// [`Parser::error`]) rather than committing them directly, and rewind
    /// the token stream unless `f` succeeded under `TryParse`. On success,
    /// the buffered diagnostics are real: they're replayed back through
    /// [`Parser::error`] so they land in `self.errors`, or, if this attempt
    /// is itself nested inside another speculation, in that enclosing
    /// level's buffer instead. On failure (or always, for `Lookahead`), the
    /// buffer is simply dropped along with the rest of the attempt's state.
    fn speculate<T>(
        &mut self,
        kind: SpeculationKind,
        f: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let checkpoint = self.checkpoint();
        self.speculative_errors.push(std::vec::Vec::new());
        let result = f(self);
        let buffered = self.speculative_errors.pop().unwrap_or_default();
        let keep = kind == SpeculationKind::TryParse && result.is_some();
        if keep {
            for diagnostic in buffered {
                self.error(diagnostic);
            }
        } else {
            self.restore(checkpoint);
        }
        result
    }

    /// Rewinds the lexer and current token but leaves the recorded
    /// diagnostics alone, used by [`Self::reparse`] where the attempt's
    /// errors are genuine rather than a guess that might be discarded.
    ///
    /// Bookkeeping bits accumulated while `f` ran are kept (merged onto the
    /// restored context) the same way [`Self::with_context`] keeps them:
    /// the token-stream rewind undoes the attempt's *position*, not
    /// whatever it learned about the file (an error seen, a top-level
    /// `await`/dynamic `import`/`import.meta` sighted).
    fn restore_token_stream_only(&mut self, checkpoint: crate::state::ParserCheckpoint) {
        let bookkeeping = self.ctx.bookkeeping_bits();
        self.lexer.rewind(checkpoint.lexer);
        self.token = checkpoint.token;
        self.prev_token_end = checkpoint.prev_token_end;
        self.ctx = checkpoint.ctx | bookkeeping;
    }
}

#[cfg(test)]
mod test {
    use tsfe_allocator::Allocator;
    use tsfe_span::SourceType;

    use crate::kind::Kind;
    use crate::Parser;

    #[test]
    fn lookahead_never_consumes() {
        let allocator = Allocator::default();
        let mut parser = Parser::new(&allocator, "const", SourceType::default());
        parser.token = parser.lexer.next_token();
        let before = parser.token.kind;
        let peeked = parser.lookahead(|p| {
            p.bump_any();
            p.cur_kind()
        });
        assert_eq!(peeked, Kind::Eof);
        assert_eq!(parser.token.kind, before);
    }

    #[test]
    fn try_parse_commits_on_success() {
        let allocator = Allocator::default();
        let mut parser = Parser::new(&allocator, "const x", SourceType::default());
        parser.token = parser.lexer.next_token();
        let committed = parser.try_parse(|p| {
            p.bump_any();
            Some(())
        });
        assert!(committed.is_some());
        assert_eq!(parser.token.kind, Kind::Ident);
    }

    #[test]
    fn try_parse_rolls_back_on_failure() {
        let allocator = Allocator::default();
        let mut parser = Parser::new(&allocator, "const x", SourceType::default());
        parser.token = parser.lexer.next_token();
        let before = parser.token.kind;
        let committed = parser.try_parse(|p| {
            p.bump_any();
            None::<()>
        });
        assert!(committed.is_none());
        assert_eq!(parser.token.kind, before);
    }
}
