//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and its core recognition
//! infrastructure: the single lookahead register, `accept`/`accept_it`, the
//! diagnostic hook, and the top-level entry points.
//!
//! # Parser Architecture
//!
//! The Parser is a predictive recursive-descent recognizer, one procedure per
//! nonterminal, organized as:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: program, function and variable declarations, initializers
//! - `statements`: compound, control-flow, assignment and call statements
//! - `expressions`: expressions, unary operators and primaries
//!
//! # Failure Model
//!
//! Every grammar procedure returns `Result<(), SyntaxError>`. The first mismatch
//! reports exactly one diagnostic to the [`ErrorReporter`] and unwinds through
//! `?` to [`Parser::recognize`]. There is no resynchronization.

use crate::parser::errors::{Diagnostic, ErrorReporter, LexWarning, SyntaxError};
use crate::parser::lexer::Scanner;
use crate::parser::source::{CharSource, StrSource};
use crate::parser::token::{SourcePos, Token, TokenKind};

/// Recursive descent recognizer for MiniC
pub struct Parser<S: CharSource, R: ErrorReporter> {
    pub(crate) scanner: Scanner<S>,
    pub(crate) reporter: R,
    pub(crate) current_token: Token,
}

impl<R: ErrorReporter> Parser<StrSource, R> {
    /// Parser over an in-memory string.
    pub fn from_source(source: &str, reporter: R) -> Self {
        Self::new(Scanner::from_text(source), reporter)
    }
}

impl<S: CharSource, R: ErrorReporter> Parser<S, R> {
    pub fn new(scanner: Scanner<S>, reporter: R) -> Self {
        Self {
            scanner,
            reporter,
            current_token: Token::new(TokenKind::Eof, "", SourcePos::default()),
        }
    }

    /// Recognize the whole token stream.
    ///
    /// Acceptance is signalled by zero reporter calls, rejection by exactly one.
    pub fn parse(&mut self) {
        if let Err(e) = self.recognize() {
            tracing::debug!(pos = %e.diagnostic.pos, "rejected: {}", e.diagnostic.message);
        }
    }

    /// Like [`parse`](Parser::parse), but hands the outcome back to the caller.
    pub fn recognize(&mut self) -> Result<(), SyntaxError> {
        self.current_token = self.scanner.scan();

        self.parse_program()?;

        if self.current_token.kind != TokenKind::Eof {
            let text = self.current_token.text().to_string();
            return Err(self.syntax_error("\"%\" not expected after end of program", &text));
        }

        Ok(())
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Lexical warnings the scanner collected while feeding this parser.
    pub fn take_lexical_warnings(&mut self) -> Vec<LexWarning> {
        self.scanner.take_warnings()
    }

    // ===== Helper methods =====

    pub(crate) fn kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Consume the lookahead if it has the expected kind, otherwise fail.
    pub(crate) fn accept(&mut self, expected: TokenKind) -> Result<(), SyntaxError> {
        if self.kind() == expected {
            self.accept_it();
            Ok(())
        } else {
            Err(self.syntax_error("\"%\" expected here", expected.spelling()))
        }
    }

    /// Advance without checking; the caller has already branched on the kind.
    pub(crate) fn accept_it(&mut self) {
        self.current_token = self.scanner.scan();
    }

    /// Report a diagnostic at the lookahead position and build the error to unwind with.
    pub(crate) fn syntax_error(&mut self, template: &str, token: &str) -> SyntaxError {
        let pos = self.current_token.pos;
        self.reporter.report_error(template, token, pos);
        SyntaxError {
            diagnostic: Diagnostic::render(template, token, pos),
        }
    }

    /// Fail naming the current token as the thing that does not fit.
    pub(crate) fn unexpected(&mut self, template: &str) -> SyntaxError {
        let text = self.current_token.text().to_string();
        self.syntax_error(template, &text)
    }
}
