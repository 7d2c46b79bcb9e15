// Recorded scan/parse sessions for stepping through a source

use crate::parser::errors::{CollectingReporter, Diagnostic, LexWarning};
use crate::parser::lexer::Scanner;
use crate::parser::parse::Parser;
use crate::parser::token::{Token, TokenKind};

/// One scanned token plus the lexical warnings raised while scanning it
#[derive(Debug, Clone)]
pub struct ScanStep {
    pub token: Token,
    pub warnings: Vec<LexWarning>,
}

/// Verdict of the recognition pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected(Diagnostic),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Outcome::Accepted => None,
            Outcome::Rejected(diagnostic) => Some(diagnostic),
        }
    }
}

/// Every token of a source up to and including EOF, with the parse verdict
#[derive(Debug)]
pub struct ScanHistory {
    steps: Vec<ScanStep>,
    outcome: Outcome,
}

impl ScanHistory {
    pub fn record(source: &str) -> Self {
        Self::record_with(source, false)
    }

    /// `verbose` turns on per-token debug events for the token pass.
    pub fn record_with(source: &str, verbose: bool) -> Self {
        let mut scanner = Scanner::from_text(source);
        if verbose {
            scanner.enable_debugging();
        }

        let mut steps = Vec::new();
        loop {
            let token = scanner.scan();
            let warnings = scanner.take_warnings();
            let at_end = token.kind == TokenKind::Eof;
            steps.push(ScanStep { token, warnings });
            if at_end {
                break;
            }
        }

        // Separate pass; the parser pulls its own tokens
        let mut parser = Parser::from_source(source, CollectingReporter::new());
        parser.parse();
        let outcome = match parser.into_reporter().diagnostics.into_iter().next() {
            Some(diagnostic) => Outcome::Rejected(diagnostic),
            None => Outcome::Accepted,
        };

        tracing::debug!(tokens = steps.len(), accepted = outcome.is_accepted(), "recorded scan history");
        ScanHistory { steps, outcome }
    }

    pub fn get(&self, index: usize) -> Option<&ScanStep> {
        self.steps.get(index)
    }

    /// Number of recorded steps; never zero since EOF is always recorded
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[ScanStep] {
        &self.steps
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.steps.iter().map(|step| &step.token)
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Index of the token the syntax error was reported at
    pub fn failure_index(&self) -> Option<usize> {
        let diagnostic = self.outcome.diagnostic()?;
        self.steps
            .iter()
            .position(|step| step.token.pos == diagnostic.pos)
    }

    /// Warnings raised while scanning steps `0..=index`
    pub fn warnings_until(&self, index: usize) -> impl Iterator<Item = &LexWarning> {
        self.steps
            .iter()
            .take(index.saturating_add(1))
            .flat_map(|step| step.warnings.iter())
    }

    pub fn warning_count(&self) -> usize {
        self.steps.iter().map(|step| step.warnings.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::SourcePos;

    #[test]
    fn test_records_every_token_through_eof() {
        let history = ScanHistory::record("int x;");
        let kinds: Vec<TokenKind> = history.tokens().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Int, TokenKind::Id, TokenKind::Semicolon, TokenKind::Eof]
        );
        assert!(history.outcome().is_accepted());
        assert_eq!(history.failure_index(), None);
    }

    #[test]
    fn test_empty_source_records_eof() {
        let history = ScanHistory::record("");
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).unwrap().token.kind, TokenKind::Eof);
        assert!(history.outcome().is_accepted());
    }

    #[test]
    fn test_rejection_points_at_failing_token() {
        let history = ScanHistory::record("int main() { return 0 }");
        let diagnostic = history.outcome().diagnostic().unwrap();
        assert_eq!(diagnostic.message, "\";\" expected here");
        assert_eq!(diagnostic.pos, SourcePos::new(1, 23, 1, 24));

        let index = history.failure_index().unwrap();
        assert_eq!(history.get(index).unwrap().token.kind, TokenKind::RightBrace);
    }

    #[test]
    fn test_tokens_after_the_error_are_still_recorded() {
        let history = ScanHistory::record("int ; int y;");
        assert_eq!(history.failure_index(), Some(1));
        assert_eq!(history.len(), 6);
    }

    #[test]
    fn test_warnings_attach_to_their_token() {
        let history = ScanHistory::record("int x; /* open");
        assert_eq!(history.warning_count(), 1);
        assert_eq!(history.warnings_until(2).count(), 0);

        let last = history.len() - 1;
        assert_eq!(history.get(last).unwrap().warnings.len(), 1);
        assert_eq!(history.warnings_until(last).count(), 1);
        assert!(history.outcome().is_accepted());
    }
}
