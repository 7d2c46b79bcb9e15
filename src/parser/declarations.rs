//! Declaration recognition
//!
//! This module handles the declaration side of the MiniC grammar:
//!
//! - Top-level sequence of function and variable definitions
//! - Function parameter lists
//! - Variable parts with array sizes, initializers and further declarators
//!
//! # Grammar
//!
//! ```text
//! program     ::= (typeSpec ID (funPart | varPart))*
//! funPart     ::= "(" paramsList? ")" compoundStmt
//! paramsList  ::= paramDecl ("," paramDecl)*
//! paramDecl   ::= typeSpec declarator
//! declarator  ::= ID ("[" INTLITERAL "]")?
//! varPart     ::= ("[" INTLITERAL "]")? ("=" initializer)? ("," initDecl)* ";"
//! initializer ::= expr | "{" expr ("," expr)* "}"
//! initDecl    ::= declarator ("=" initializer)?
//! ```
//!
//! All recognition methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::errors::{ErrorReporter, SyntaxError};
use crate::parser::parse::Parser;
use crate::parser::source::CharSource;
use crate::parser::token::TokenKind;

impl<S: CharSource, R: ErrorReporter> Parser<S, R> {
    /// Sequence of definitions; `(` after `typeSpec ID` selects a function.
    pub(crate) fn parse_program(&mut self) -> Result<(), SyntaxError> {
        while self.kind().is_type_specifier() {
            self.accept_it();
            self.accept(TokenKind::Id)?;

            if self.kind() == TokenKind::LeftParen {
                self.parse_fun_part()?;
            } else {
                self.parse_var_part()?;
            }
        }
        Ok(())
    }

    pub(crate) fn parse_fun_part(&mut self) -> Result<(), SyntaxError> {
        // Caller saw the "("
        self.accept_it();

        if self.kind().is_type_specifier() {
            self.parse_params_list()?;
        }

        self.accept(TokenKind::RightParen)?;
        self.parse_compound_stmt()
    }

    pub(crate) fn parse_params_list(&mut self) -> Result<(), SyntaxError> {
        self.parse_param_decl()?;

        while self.kind() == TokenKind::Comma {
            self.accept_it();
            self.parse_param_decl()?;
        }
        Ok(())
    }

    pub(crate) fn parse_param_decl(&mut self) -> Result<(), SyntaxError> {
        if !self.kind().is_type_specifier() {
            return Err(self.unexpected("type specifier expected here, found \"%\""));
        }
        self.accept_it();
        self.parse_declarator()
    }

    pub(crate) fn parse_declarator(&mut self) -> Result<(), SyntaxError> {
        self.accept(TokenKind::Id)?;
        self.parse_array_size()
    }

    /// Optional `[ INTLITERAL ]`.
    fn parse_array_size(&mut self) -> Result<(), SyntaxError> {
        if self.kind() == TokenKind::LeftBracket {
            self.accept_it();
            self.accept(TokenKind::IntLiteral)?;
            self.accept(TokenKind::RightBracket)?;
        }
        Ok(())
    }

    /// Everything after `typeSpec ID` in a variable definition.
    pub(crate) fn parse_var_part(&mut self) -> Result<(), SyntaxError> {
        self.parse_array_size()?;

        if self.kind() == TokenKind::Assign {
            self.accept_it();
            self.parse_initializer()?;
        }

        while self.kind() == TokenKind::Comma {
            self.accept_it();
            self.parse_init_decl()?;
        }

        self.accept(TokenKind::Semicolon)
    }

    pub(crate) fn parse_initializer(&mut self) -> Result<(), SyntaxError> {
        if self.kind().starts_expr() {
            return self.parse_expr();
        }

        if self.kind() != TokenKind::LeftBrace {
            return Err(self.unexpected("initializer expected here, found \"%\""));
        }

        // { expr ("," expr)* }
        self.accept_it();
        self.parse_expr()?;
        while self.kind() == TokenKind::Comma {
            self.accept_it();
            self.parse_expr()?;
        }
        self.accept(TokenKind::RightBrace)
    }

    pub(crate) fn parse_init_decl(&mut self) -> Result<(), SyntaxError> {
        self.parse_declarator()?;

        if self.kind() == TokenKind::Assign {
            self.accept_it();
            self.parse_initializer()?;
        }
        Ok(())
    }
}
