//! Diagnostics for the scanner and the parser
//!
//! Two independent channels exist:
//!
//! - [`LexWarning`]: lexical conditions the scanner heals on its own (illegal
//!   escapes, unterminated strings and comments). They are logged and collected,
//!   never fatal.
//! - [`ErrorReporter`]: receives the single syntax error of a parse. The parser
//!   calls it at most once per pass and then unwinds with [`SyntaxError`].

use crate::parser::token::SourcePos;
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

/// Self-healing lexical conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexWarning {
    #[error("illegal escape sequence '\\{ch}' at {pos}")]
    IllegalEscape { ch: char, pos: SourcePos },

    #[error("unterminated string literal at {pos}")]
    UnterminatedString { pos: SourcePos },

    #[error("unterminated multi-line comment at {pos}")]
    UnterminatedComment { pos: SourcePos },
}

impl LexWarning {
    pub fn pos(&self) -> SourcePos {
        match self {
            LexWarning::IllegalEscape { pos, .. }
            | LexWarning::UnterminatedString { pos }
            | LexWarning::UnterminatedComment { pos } => *pos,
        }
    }
}

/// A formatted syntax diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub pos: SourcePos,
}

impl Diagnostic {
    /// Substitute `token` for every `%` in `template`.
    pub fn render(template: &str, token: &str, pos: SourcePos) -> Self {
        Self {
            message: template.replace('%', token),
            pos,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR: {} at line {}, column {}",
            self.message, self.pos.start_line, self.pos.start_col
        )
    }
}

/// The syntax error that aborts a recognition pass.
///
/// By the time this value exists the diagnostic has already been handed to the
/// [`ErrorReporter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{diagnostic}")]
pub struct SyntaxError {
    pub diagnostic: Diagnostic,
}

/// Receives one call per detected syntax defect.
pub trait ErrorReporter {
    /// `template` contains a single `%` placeholder that stands for `token`.
    fn report_error(&mut self, template: &str, token: &str, pos: SourcePos);
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    fn report_error(&mut self, template: &str, token: &str, pos: SourcePos) {
        (**self).report_error(template, token, pos)
    }
}

/// Writes each diagnostic to a stream (stderr by default) and counts them.
pub struct ConsoleReporter<W: Write = io::Stderr> {
    out: W,
    num_errors: usize,
}

impl ConsoleReporter {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, num_errors: 0 }
    }

    pub fn num_errors(&self) -> usize {
        self.num_errors
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorReporter for ConsoleReporter<W> {
    fn report_error(&mut self, template: &str, token: &str, pos: SourcePos) {
        self.num_errors += 1;
        let diagnostic = Diagnostic::render(template, token, pos);
        if let Err(e) = writeln!(self.out, "{diagnostic}") {
            tracing::error!("failed to write diagnostic: {e}");
        }
    }
}

/// Keeps diagnostics in memory.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn first(&self) -> Option<&Diagnostic> {
        self.diagnostics.first()
    }
}

impl ErrorReporter for CollectingReporter {
    fn report_error(&mut self, template: &str, token: &str, pos: SourcePos) {
        self.diagnostics.push(Diagnostic::render(template, token, pos));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_placeholder() {
        let diag = Diagnostic::render("\"%\" expected here", ";", SourcePos::new(2, 7, 2, 8));
        assert_eq!(diag.message, "\";\" expected here");
        assert_eq!(diag.to_string(), "ERROR: \";\" expected here at line 2, column 7");
    }

    #[test]
    fn test_console_reporter_counts_and_writes() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.report_error("\"%\" expected here", ")", SourcePos::new(1, 4, 1, 5));
        assert_eq!(reporter.num_errors(), 1);

        let written = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(written, "ERROR: \")\" expected here at line 1, column 4\n");
    }

    #[test]
    fn test_reporter_through_mutable_reference() {
        fn report_once<R: ErrorReporter>(mut reporter: R) {
            reporter.report_error("% here", "x", SourcePos::point(1, 1));
        }

        let mut collecting = CollectingReporter::new();
        report_once(&mut collecting);
        assert_eq!(collecting.len(), 1);
        assert_eq!(collecting.first().unwrap().message, "x here");
    }

    #[test]
    fn test_warning_messages() {
        let warning = LexWarning::IllegalEscape {
            ch: 't',
            pos: SourcePos::new(1, 3, 1, 5),
        };
        assert_eq!(warning.to_string(), "illegal escape sequence '\\t' at 1:3..5");
        assert_eq!(warning.pos().start_col, 3);
    }
}
