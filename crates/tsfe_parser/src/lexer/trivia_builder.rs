//! Collects comments and `//@ts-expect-error` / `//@ts-ignore` directives
//! as the scanner runs past them. Kept separate from token production
//! itself (per §4.1: comments are trivia, never tokens) so the rest of the
//! scanner doesn't need to know the directive grammar.

use tsfe_ast::comment::{Comment, CommentDirective, CommentDirectiveKind, CommentKind, CommentPosition};
use tsfe_span::Span;

#[derive(Default)]
pub struct TriviaBuilder {
    pub comments: std::vec::Vec<Comment>,
    pub directives: std::vec::Vec<CommentDirective>,
}

impl TriviaBuilder {
    pub fn add_line_comment(&mut self, start: u32, end: u32) {
        self.push_comment(start, end, CommentKind::Line);
    }

    pub fn add_block_comment(&mut self, start: u32, end: u32, _closed: bool) {
        self.push_comment(start, end, CommentKind::Block);
    }

    fn push_comment(&mut self, start: u32, end: u32, kind: CommentKind) {
        self.comments.push(Comment {
            span: Span::new(start, end),
            kind,
            position: CommentPosition::Trailing,
            attached_to: 0,
        });
    }

    /// Scans a just-recorded comment's text for `@ts-expect-error` or
    /// `@ts-ignore` and records a directive at its position if found. Called
    /// by the parser with the comment's source text once a comment has been
    /// added, since the builder itself doesn't hold the source string.
    pub fn scan_directive(&mut self, comment: Comment, text: &str) {
        let body = text.trim_start_matches("//").trim_start_matches("/*").trim();
        let kind = if body.starts_with("@ts-expect-error") {
            Some(CommentDirectiveKind::ExpectError)
        } else if body.starts_with("@ts-ignore") {
            Some(CommentDirectiveKind::Ignore)
        } else {
            None
        };
        if let Some(kind) = kind {
            self.directives.push(CommentDirective { span: comment.span, kind });
        }
    }

    /// Marks every comment starting in `[previous_token_end, token_start)`
    /// as trailing the previous token if it's a line comment or shares a
    /// line with it, leading the upcoming token otherwise. Called once per
    /// finished token by the parser.
    pub fn attach(&mut self, previous_token_end: u32, token_start: u32, same_line_as_previous: bool) {
        for comment in self.comments.iter_mut() {
            if comment.span.start < previous_token_end || comment.span.start >= token_start {
                continue;
            }
            comment.position = if comment.is_line() || same_line_as_previous {
                CommentPosition::Trailing
            } else {
                CommentPosition::Leading
            };
            comment.attached_to = token_start;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn records_line_comment() {
        let mut tb = TriviaBuilder::default();
        tb.add_line_comment(0, 10);
        assert_eq!(tb.comments.len(), 1);
        assert!(tb.comments[0].is_line());
    }

    #[test]
    fn recognizes_ts_expect_error_directive() {
        let mut tb = TriviaBuilder::default();
        tb.add_line_comment(0, 20);
        let comment = tb.comments[0];
        tb.scan_directive(comment, "// @ts-expect-error");
        assert_eq!(tb.directives.len(), 1);
        assert_eq!(tb.directives[0].kind, CommentDirectiveKind::ExpectError);
    }

    #[test]
    fn ignores_plain_comments() {
        let mut tb = TriviaBuilder::default();
        tb.add_line_comment(0, 20);
        let comment = tb.comments[0];
        tb.scan_directive(comment, "// just a note");
        assert!(tb.directives.is_empty());
    }
}
