//! Expression recognition
//!
//! MiniC expressions have a single relational level wrapped around flat runs of
//! additive, multiplicative and logical operators. No precedence tiers exist
//! below it: any correctly-shaped operator/operand alternation is accepted.
//!
//! # Grammar
//!
//! ```text
//! expr    ::= unary (binOp unary)* (relOp expr (binOp unary)*)?
//! unary   ::= unaryOp* primary
//! primary ::= ID arglist? | ID "[" expr "]" | "(" expr ")" | literal
//! binOp   ::= "+" | "-" | "*" | "/" | "&&" | "||"
//! relOp   ::= "==" | "!=" | "<" | "<=" | ">" | ">="
//! unaryOp ::= "+" | "-" | "!"
//! ```
//!
//! All recognition methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::errors::{ErrorReporter, SyntaxError};
use crate::parser::parse::Parser;
use crate::parser::source::CharSource;
use crate::parser::token::TokenKind;

impl<S: CharSource, R: ErrorReporter> Parser<S, R> {
    pub(crate) fn parse_expr(&mut self) -> Result<(), SyntaxError> {
        self.parse_unary()?;
        self.parse_bin_op_run()?;

        if self.kind().is_rel_op() {
            self.accept_it();
            self.parse_expr()?;
            self.parse_bin_op_run()?;
        }
        Ok(())
    }

    /// `(binOp unary)*`
    fn parse_bin_op_run(&mut self) -> Result<(), SyntaxError> {
        while self.kind().is_bin_op() {
            self.accept_it();
            self.parse_unary()?;
        }
        Ok(())
    }

    pub(crate) fn parse_unary(&mut self) -> Result<(), SyntaxError> {
        while self.kind().is_unary_op() {
            self.accept_it();
        }
        self.parse_primary()
    }

    pub(crate) fn parse_primary(&mut self) -> Result<(), SyntaxError> {
        match self.kind() {
            TokenKind::Id => {
                self.accept_it();
                match self.kind() {
                    TokenKind::LeftParen => self.parse_arglist(),
                    TokenKind::LeftBracket => {
                        self.accept_it();
                        self.parse_expr()?;
                        self.accept(TokenKind::RightBracket)
                    }
                    _ => Ok(()),
                }
            }
            TokenKind::LeftParen => {
                self.accept_it();
                self.parse_expr()?;
                self.accept(TokenKind::RightParen)
            }
            kind if kind.is_literal() => {
                self.accept_it();
                Ok(())
            }
            _ => Err(self.unexpected("expression expected here, found \"%\"")),
        }
    }
}
