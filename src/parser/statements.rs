//! Statement recognition
//!
//! This module handles all MiniC statement forms:
//!
//! - Compound statements with leading variable definitions: `{ int x; ... }`
//! - Control flow: `if`/`else`, `while`, `for`
//! - `return` with an optional value
//! - Statements that begin with an identifier: assignment, indexed assignment, call
//!
//! # Grammar
//!
//! ```text
//! compoundStmt ::= "{" (typeSpec ID varPart)* stmt* "}"
//! stmt         ::= compoundStmt | ifStmt | whileStmt | forStmt
//!                | "return" expr? ";"
//!                | ID "=" expr ";"
//!                | ID "[" expr "]" "=" expr ";"
//!                | ID arglist ";"
//! ifStmt       ::= "if" "(" expr ")" stmt ("else" stmt)*
//! whileStmt    ::= "while" "(" expr ")" stmt
//! forStmt      ::= "for" "(" (ID "=" expr)? ";" expr? ";" (ID "=" expr)? ")" stmt
//! arglist      ::= "(" (expr ("," expr)*)? ")"
//! ```
//!
//! All recognition methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::errors::{ErrorReporter, SyntaxError};
use crate::parser::parse::Parser;
use crate::parser::source::CharSource;
use crate::parser::token::TokenKind;

impl<S: CharSource, R: ErrorReporter> Parser<S, R> {
    pub(crate) fn parse_compound_stmt(&mut self) -> Result<(), SyntaxError> {
        self.accept(TokenKind::LeftBrace)?;

        while self.kind().is_type_specifier() {
            self.accept_it();
            self.accept(TokenKind::Id)?;
            self.parse_var_part()?;
        }

        while self.kind().starts_stmt() {
            self.parse_stmt()?;
        }

        self.accept(TokenKind::RightBrace)
    }

    pub(crate) fn parse_stmt(&mut self) -> Result<(), SyntaxError> {
        match self.kind() {
            TokenKind::LeftBrace => self.parse_compound_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::Return => {
                self.accept_it();
                if self.kind().starts_expr() {
                    self.parse_expr()?;
                }
                self.accept(TokenKind::Semicolon)
            }
            TokenKind::Id => {
                self.accept_it();
                match self.kind() {
                    TokenKind::Assign => {
                        self.accept_it();
                        self.parse_expr()?;
                    }
                    TokenKind::LeftBracket => {
                        self.accept_it();
                        self.parse_expr()?;
                        self.accept(TokenKind::RightBracket)?;
                        self.accept(TokenKind::Assign)?;
                        self.parse_expr()?;
                    }
                    _ => self.parse_arglist()?,
                }
                self.accept(TokenKind::Semicolon)
            }
            _ => Err(self.unexpected("statement expected here, found \"%\"")),
        }
    }

    /// Each `else` attaches to the innermost open `if`, as many as follow.
    pub(crate) fn parse_if_stmt(&mut self) -> Result<(), SyntaxError> {
        self.accept_it();
        self.accept(TokenKind::LeftParen)?;
        self.parse_expr()?;
        self.accept(TokenKind::RightParen)?;
        self.parse_stmt()?;

        while self.kind() == TokenKind::Else {
            self.accept_it();
            self.parse_stmt()?;
        }
        Ok(())
    }

    pub(crate) fn parse_while_stmt(&mut self) -> Result<(), SyntaxError> {
        self.accept_it();
        self.accept(TokenKind::LeftParen)?;
        self.parse_expr()?;
        self.accept(TokenKind::RightParen)?;
        self.parse_stmt()
    }

    pub(crate) fn parse_for_stmt(&mut self) -> Result<(), SyntaxError> {
        self.accept_it();
        self.accept(TokenKind::LeftParen)?;

        self.parse_for_assignment()?;
        self.accept(TokenKind::Semicolon)?;

        if self.kind().starts_expr() {
            self.parse_expr()?;
        }
        self.accept(TokenKind::Semicolon)?;

        self.parse_for_assignment()?;
        self.accept(TokenKind::RightParen)?;

        self.parse_stmt()
    }

    /// Optional `ID "=" expr` in a for-loop header; an ID selects it.
    fn parse_for_assignment(&mut self) -> Result<(), SyntaxError> {
        if self.kind() == TokenKind::Id {
            self.accept_it();
            self.accept(TokenKind::Assign)?;
            self.parse_expr()?;
        }
        Ok(())
    }

    pub(crate) fn parse_arglist(&mut self) -> Result<(), SyntaxError> {
        self.accept(TokenKind::LeftParen)?;

        if self.kind().starts_expr() {
            self.parse_expr()?;
            while self.kind() == TokenKind::Comma {
                self.accept_it();
                self.parse_expr()?;
            }
        }

        self.accept(TokenKind::RightParen)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::errors::{CollectingReporter, Diagnostic};
    use crate::parser::parse::Parser;

    fn diagnostics(body: &str) -> Vec<Diagnostic> {
        let source = format!("void f() {{ {body} }}");
        let mut parser = Parser::from_source(&source, CollectingReporter::new());
        parser.parse();
        parser.into_reporter().diagnostics
    }

    fn accepts(body: &str) -> bool {
        diagnostics(body).is_empty()
    }

    fn error_message(body: &str) -> String {
        let diags = diagnostics(body);
        assert_eq!(diags.len(), 1, "{body:?}: {diags:?}");
        diags[0].message.clone()
    }

    #[test]
    fn test_local_definitions_precede_statements() {
        assert!(accepts("int x; float y[3] = {1.0, 2.0, 3.0}; x = 1;"));
        // a definition after a statement is not part of the compound statement
        assert_eq!(error_message("x = 1; int y;"), "\"}\" expected here");
    }

    #[test]
    fn test_assignment_forms() {
        assert!(accepts("x = 1;"));
        assert!(accepts("a[i + 1] = a[i] * 2;"));
        assert!(accepts("s = \"text\";"));
        assert_eq!(error_message("a[1] 2;"), "\"=\" expected here");
        assert_eq!(error_message("a[1 = 2;"), "\"]\" expected here");
    }

    #[test]
    fn test_call_statements() {
        assert!(accepts("f();"));
        assert!(accepts("print(1, x, \"s\", g(y), a[0]);"));
        assert_eq!(error_message("f;"), "\"(\" expected here");
        assert_eq!(error_message("f(1,);"), "expression expected here, found \")\"");
        assert_eq!(error_message("f(1 2);"), "\")\" expected here");
    }

    #[test]
    fn test_return_statement() {
        assert!(accepts("return;"));
        assert!(accepts("return x + 1;"));
        assert!(accepts("return -x;"));
        assert_eq!(error_message("return x"), "\";\" expected here");
    }

    #[test]
    fn test_if_else() {
        assert!(accepts("if (x) y = 1;"));
        assert!(accepts("if (x < 1) { y = 1; } else { y = 2; }"));
        assert!(accepts("if (a) if (b) x = 1; else x = 2; else x = 3;"));
        assert!(accepts("if (a) x = 1; else x = 2; else x = 3;"));
        assert_eq!(error_message("if x) y = 1;"), "\"(\" expected here");
        assert_eq!(error_message("if (x) else y = 1;"), "statement expected here, found \"else\"");
    }

    #[test]
    fn test_while() {
        assert!(accepts("while (i < n) i = i + 1;"));
        assert!(accepts("while (true) {}"));
        assert_eq!(error_message("while (i < n) ;"), "statement expected here, found \";\"");
    }

    #[test]
    fn test_for() {
        assert!(accepts("for (i = 0; i < n; i = i + 1) s = s + i;"));
        assert!(accepts("for (;;) {}"));
        assert!(accepts("for (; i;) f();"));
        assert_eq!(error_message("for (i; i < n;) {}"), "\"=\" expected here");
        assert_eq!(error_message("for (i = 0 i < n;) {}"), "\";\" expected here");
        assert_eq!(error_message("for (;; i = i + 1 {}"), "\")\" expected here");
    }

    #[test]
    fn test_nested_compound() {
        assert!(accepts("{ int x; { x = 1; } }"));
        assert_eq!(error_message("{ x = 1;"), "\"}\" expected here");
    }

    #[test]
    fn test_statement_cannot_start_with_literal() {
        assert_eq!(error_message("1;"), "\"}\" expected here");
    }
}
