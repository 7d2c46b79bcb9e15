//! Token model shared by the scanner and the parser
//!
//! A [`Token`] is produced exactly once by [`Scanner::scan`] and dropped by the
//! parser as soon as its lookahead moves past it.
//!
//! [`Scanner::scan`]: crate::parser::lexer::Scanner::scan

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// The closed set of MiniC token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Void,
    Int,
    Bool,
    Float,
    If,
    Else,
    While,
    For,
    Return,

    // Literals
    IntLiteral,
    FloatLiteral,
    BoolLiteral,
    StringLiteral,

    Id,

    // Operators
    Plus,      // +
    Minus,     // -
    Times,     // *
    Div,       // /
    Assign,    // =
    Eq,        // ==
    NotEq,     // !=
    Less,      // <
    LessEq,    // <=
    Greater,   // >
    GreaterEq, // >=
    And,       // &&
    Or,        // ||
    Not,       // !

    // Punctuation
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    LeftParen,    // (
    RightParen,   // )
    Comma,        // ,
    Semicolon,    // ;

    Eof,
    Error,
}

impl TokenKind {
    /// Canonical spelling used when a diagnostic names this kind.
    pub fn spelling(self) -> &'static str {
        match self {
            TokenKind::Void => "void",
            TokenKind::Int => "int",
            TokenKind::Bool => "bool",
            TokenKind::Float => "float",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Return => "return",
            TokenKind::IntLiteral => "<int-literal>",
            TokenKind::FloatLiteral => "<float-literal>",
            TokenKind::BoolLiteral => "<bool-literal>",
            TokenKind::StringLiteral => "<string-literal>",
            TokenKind::Id => "<id>",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Div => "/",
            TokenKind::Assign => "=",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEq => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEq => ">=",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Not => "!",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Eof => "<EOF>",
            TokenKind::Error => "<ERROR>",
        }
    }

    /// `void`, `int`, `bool` or `float`.
    pub fn is_type_specifier(self) -> bool {
        matches!(
            self,
            TokenKind::Void | TokenKind::Int | TokenKind::Bool | TokenKind::Float
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::BoolLiteral
                | TokenKind::StringLiteral
        )
    }

    pub fn is_unary_op(self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus | TokenKind::Not)
    }

    /// Operators that chain unary expressions inside one relational operand.
    pub fn is_bin_op(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Times
                | TokenKind::Div
                | TokenKind::And
                | TokenKind::Or
        )
    }

    pub fn is_rel_op(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Less
                | TokenKind::LessEq
                | TokenKind::Greater
                | TokenKind::GreaterEq
        )
    }

    /// FIRST set of `expr`.
    pub fn starts_expr(self) -> bool {
        self.is_unary_op() || self.is_literal() || matches!(self, TokenKind::Id | TokenKind::LeftParen)
    }

    /// FIRST set of `stmt`.
    pub fn starts_stmt(self) -> bool {
        matches!(
            self,
            TokenKind::LeftBrace
                | TokenKind::If
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Return
                | TokenKind::Id
        )
    }

    /// Look up an identifier-shaped word in the keyword table.
    ///
    /// `true` and `false` map to [`TokenKind::BoolLiteral`].
    pub fn keyword(word: &str) -> Option<TokenKind> {
        static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
        KEYWORDS
            .get_or_init(|| {
                let mut table = FxHashMap::default();
                table.insert("void", TokenKind::Void);
                table.insert("int", TokenKind::Int);
                table.insert("bool", TokenKind::Bool);
                table.insert("float", TokenKind::Float);
                table.insert("if", TokenKind::If);
                table.insert("else", TokenKind::Else);
                table.insert("while", TokenKind::While);
                table.insert("for", TokenKind::For);
                table.insert("return", TokenKind::Return);
                table.insert("true", TokenKind::BoolLiteral);
                table.insert("false", TokenKind::BoolLiteral);
                table
            })
            .get(word)
            .copied()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// Character range a token occupies.
///
/// Lines and columns are 1-based; `end_col` is one past the last consumed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourcePos {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl SourcePos {
    pub fn new(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Zero-width position at `(line, col)`.
    pub fn point(line: usize, col: usize) -> Self {
        Self::new(line, col, line, col)
    }

    pub fn is_empty(&self) -> bool {
        self.start_line == self.end_line && self.start_col == self.end_col
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_line == self.end_line {
            write!(f, "{}:{}..{}", self.start_line, self.start_col, self.end_col)
        } else {
            write!(
                f,
                "{}:{}..{}:{}",
                self.start_line, self.start_col, self.end_line, self.end_col
            )
        }
    }
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Captured source text. Empty for fixed-spelling operators, punctuation and EOF.
    pub lexeme: String,
    pub pos: SourcePos,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            pos,
        }
    }

    /// The lexeme, or the kind's spelling when nothing was captured.
    pub fn text(&self) -> &str {
        if self.lexeme.is_empty() {
            self.kind.spelling()
        } else {
            &self.lexeme
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::StringLiteral => write!(f, "{} \"{}\"", self.kind, self.lexeme),
            TokenKind::Id
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::BoolLiteral
            | TokenKind::Error => write!(f, "{} '{}'", self.kind, self.lexeme),
            _ => write!(f, "'{}'", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::keyword("true"), Some(TokenKind::BoolLiteral));
        assert_eq!(TokenKind::keyword("false"), Some(TokenKind::BoolLiteral));
        assert_eq!(TokenKind::keyword("main"), None);
        assert_eq!(TokenKind::keyword("While"), None);
    }

    #[test]
    fn test_text_falls_back_to_spelling() {
        let semi = Token::new(TokenKind::Semicolon, "", SourcePos::point(1, 1));
        assert_eq!(semi.text(), ";");

        let id = Token::new(TokenKind::Id, "x", SourcePos::new(1, 1, 1, 2));
        assert_eq!(id.text(), "x");
    }

    #[test]
    fn test_first_sets() {
        assert!(TokenKind::Not.starts_expr());
        assert!(TokenKind::StringLiteral.starts_expr());
        assert!(!TokenKind::Times.starts_expr());
        assert!(TokenKind::Return.starts_stmt());
        assert!(!TokenKind::Int.starts_stmt());
        assert!(TokenKind::Or.is_bin_op());
        assert!(!TokenKind::Less.is_bin_op());
        assert!(TokenKind::GreaterEq.is_rel_op());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(SourcePos::new(3, 5, 3, 8).to_string(), "3:5..8");
        assert_eq!(SourcePos::new(1, 2, 2, 1).to_string(), "1:2..2:1");
        assert!(SourcePos::point(4, 1).is_empty());
    }
}
