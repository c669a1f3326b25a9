//! Diagnostic collection and rendering.
//!
//! A [`Diagnostic`] is the `{file, start, length, message_id, args,
//! related[]}` record the spec calls for, expressed as a `miette` value so
//! a CLI can pretty-print it with source context for free. Diagnostics are
//! cheap to construct and clone; the scanner and parser build them eagerly
//! and let the caller decide whether to render, log, or discard them.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};
use owo_colors::OwoColorize;

/// Severity of a [`Diagnostic`]. Every diagnostic the scanner or parser
/// raises today is an `Error`; `Warning` exists for the rare case
/// (`//@ts-ignore` on a line with no following error, unreachable code under
/// `declare`) that should be surfaced without tainting `ThisNodeHasError`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Severity {
    Error,
    Warning,
    Advice,
}

impl Severity {
    fn miette_severity(self) -> miette::Severity {
        match self {
            Self::Error => miette::Severity::Error,
            Self::Warning => miette::Severity::Warning,
            Self::Advice => miette::Severity::Advice,
        }
    }
}

/// A single labeled location attached to a diagnostic: either the primary
/// span or a `related[]` entry pointing at, say, the opening brace a
/// missing-close-brace error is complaining about.
#[derive(Debug, Clone)]
pub struct Label {
    pub span: SourceSpan,
    pub message: Option<String>,
}

/// One diagnostic: a message, its primary span, zero or more related spans,
/// and optional help text. This is the type every `tsfe_parser::diagnostics`
/// constructor function returns.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
    code: Option<&'static str>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            labels: Vec::new(),
            help: None,
            code: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            labels: Vec::new(),
            help: None,
            code: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, span: impl Into<SourceSpan>, message: impl Into<String>) -> Self {
        self.labels.push(Label { span: span.into(), message: Some(message.into()) });
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: impl Into<SourceSpan>) -> Self {
        self.labels.push(Label { span: span.into(), message: None });
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Start offset of the primary label, if any; used for the "suppress
    /// duplicate diagnostics at the same start position" rule.
    pub fn primary_start(&self) -> Option<usize> {
        self.labels.first().map(|l| l.span.offset())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

impl MietteDiagnostic for Diagnostic {
    fn severity(&self) -> Option<miette::Severity> {
        Some(self.severity.miette_severity())
    }

    fn help<'a>(&'a self) -> Option<std::boxed::Box<dyn fmt::Display + 'a>> {
        self.help.as_ref().map(|h| std::boxed::Box::new(h) as std::boxed::Box<dyn fmt::Display>)
    }

    fn code<'a>(&'a self) -> Option<std::boxed::Box<dyn fmt::Display + 'a>> {
        self.code.map(|c| std::boxed::Box::new(c) as std::boxed::Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<std::boxed::Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.labels.is_empty() {
            return None;
        }
        let labels = self
            .labels
            .iter()
            .map(|l| LabeledSpan::new_with_span(l.message.clone(), l.span))
            .collect::<std::vec::Vec<_>>();
        Some(std::boxed::Box::new(labels.into_iter()))
    }
}

/// Type-erased diagnostic, the element type of `ParserReturn::errors`.
pub type Error = miette::Error;

/// `Result` alias used throughout the parser for operations that can fail
/// with a single [`Diagnostic`] (most productions instead push to an error
/// list and keep going — see `tsfe_parser`'s recovery policy — but a few
/// entry points, like an unrecoverable scan, need to short-circuit).
pub type Result<T> = std::result::Result<T, Error>;

impl From<Diagnostic> for Error {
    fn from(diagnostic: Diagnostic) -> Self {
        miette::Error::new(diagnostic)
    }
}

/// Render `errors` against `source_text` to a plain string, one diagnostic
/// per paragraph, the way the `tsfe` CLI prints a failed parse to stderr.
pub fn render_errors(file_name: &str, source_text: &str, errors: &[Error]) -> String {
    let mut out = std::string::String::new();
    for error in errors {
        let report = error.clone().with_source_code(format!("{source_text}"));
        out.push_str(&format!("{}: {:?}\n", file_name.bold(), report));
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builds_labeled_diagnostic() {
        let d = Diagnostic::error("'{' expected")
            .with_label((0, 1), "expected here")
            .with_help("insert a `{`");
        assert!(d.is_error());
        assert_eq!(d.primary_start(), Some(0));
        assert_eq!(d.to_string(), "'{' expected");
    }

    #[test]
    fn warning_is_not_error() {
        let d = Diagnostic::warning("unreachable code");
        assert!(!d.is_error());
    }
}
