//! Scanner (lexer) for MiniC source code
//!
//! Pulls characters from a [`CharSource`] and hands out one [`Token`] per call to
//! [`Scanner::scan`]. Whitespace and comments between tokens are discarded.
//!
//! Lexical problems fall into two groups:
//!
//! - self-healing conditions (illegal escape, unterminated string or comment) are
//!   logged through `tracing`, collected as [`LexWarning`]s, and scanning goes on;
//! - characters that cannot start any token, a lone `&`/`|`/`.`, and end of input
//!   inside a string produce a [`TokenKind::Error`] token for the parser to reject.
//!
//! Numeric literals with a dangling exponent (`123e`, `1.5E+`) are handled by
//! backtracking: a [`ScanSnapshot`] is taken before the exponent marker and restored
//! if no digit follows, leaving a floating literal bounded by the mantissa.

use crate::parser::errors::LexWarning;
use crate::parser::source::{CharSource, StrSource, EOT};
use crate::parser::token::{SourcePos, Token, TokenKind};

/// Saved cursor state for exponent backtracking.
#[derive(Debug, Clone, Copy)]
struct ScanSnapshot {
    mark: usize,
    current_char: char,
    previous_char: char,
    lexeme_len: usize,
    line: usize,
    col: usize,
}

/// Scanner for MiniC source code
pub struct Scanner<S: CharSource> {
    source: S,
    current_char: char,
    previous_char: char,
    lexeme: String,
    /// Characters are appended to `lexeme` only while a token is being scanned.
    scanning_token: bool,
    line: usize,
    col: usize,
    start_line: usize,
    start_col: usize,
    verbose: bool,
    warnings: Vec<LexWarning>,
}

impl Scanner<StrSource> {
    /// Scanner over an in-memory string.
    pub fn from_text(input: &str) -> Self {
        Self::new(StrSource::new(input))
    }
}

impl<S: CharSource> Scanner<S> {
    pub fn new(mut source: S) -> Self {
        let current_char = source.next_char();
        Self {
            source,
            current_char,
            previous_char: EOT,
            lexeme: String::new(),
            scanning_token: false,
            line: 1,
            col: 1,
            start_line: 1,
            start_col: 1,
            verbose: false,
            warnings: Vec::new(),
        }
    }

    /// Log every produced token at `debug` level.
    pub fn enable_debugging(&mut self) {
        self.verbose = true;
    }

    /// Drain the lexical warnings collected so far.
    pub fn take_warnings(&mut self) -> Vec<LexWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Return the next token. Once input is exhausted, every call yields EOF.
    pub fn scan(&mut self) -> Token {
        let kind = loop {
            self.scanning_token = false;
            self.skip_whitespace();

            self.scanning_token = true;
            self.lexeme.clear();
            self.start_line = self.line;
            self.start_col = self.col;

            if let Some(kind) = self.scan_token() {
                break kind;
            }
        };
        self.scanning_token = false;

        let pos = if kind == TokenKind::Eof {
            SourcePos::point(self.line, 1)
        } else {
            SourcePos::new(self.start_line, self.start_col, self.line, self.col)
        };

        let lexeme = if keeps_lexeme(kind) {
            std::mem::take(&mut self.lexeme)
        } else {
            self.lexeme.clear();
            String::new()
        };

        let token = Token::new(kind, lexeme, pos);
        if self.verbose {
            tracing::debug!(kind = ?token.kind, lexeme = %token.lexeme, pos = %token.pos, "scanned token");
        }
        token
    }

    // ===== Cursor primitives =====

    fn advance(&mut self, keep: bool) {
        if keep && self.scanning_token {
            self.lexeme.push(self.current_char);
        }
        self.previous_char = self.current_char;
        self.current_char = self.source.next_char();
        if self.previous_char == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }

    /// Append the current character to the lexeme and move on.
    fn take(&mut self) {
        self.advance(true);
    }

    /// Move on without recording the current character.
    fn skip(&mut self) {
        self.advance(false);
    }

    fn take_digits(&mut self) {
        while self.current_char.is_ascii_digit() {
            self.take();
        }
    }

    fn snapshot(&self) -> ScanSnapshot {
        ScanSnapshot {
            mark: self.source.mark(),
            current_char: self.current_char,
            previous_char: self.previous_char,
            lexeme_len: self.lexeme.len(),
            line: self.line,
            col: self.col,
        }
    }

    fn rollback(&mut self, snapshot: ScanSnapshot) {
        self.source.reset(snapshot.mark);
        self.current_char = snapshot.current_char;
        self.previous_char = snapshot.previous_char;
        self.lexeme.truncate(snapshot.lexeme_len);
        self.line = snapshot.line;
        self.col = snapshot.col;
    }

    fn pos_from_start(&self) -> SourcePos {
        SourcePos::new(self.start_line, self.start_col, self.line, self.col)
    }

    fn warn(&mut self, warning: LexWarning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char, ' ' | '\t' | '\x0c' | '\r' | '\n') {
            self.skip();
        }
    }

    // ===== Token classification =====

    /// Scan one token starting at the current character.
    ///
    /// Returns `None` when a comment was consumed instead; the caller restarts.
    fn scan_token(&mut self) -> Option<TokenKind> {
        let kind = match self.current_char {
            EOT => TokenKind::Eof,

            '0'..='9' => self.number_literal(),
            '.' => self.fraction_literal(),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(),
            '"' => self.string_literal(),

            '/' => {
                self.take();
                match self.current_char {
                    '/' => {
                        self.skip_line_comment();
                        return None;
                    }
                    '*' => {
                        self.skip_block_comment();
                        return None;
                    }
                    _ => TokenKind::Div,
                }
            }

            '=' => self.one_or_two('=', TokenKind::Assign, TokenKind::Eq),
            '!' => self.one_or_two('=', TokenKind::Not, TokenKind::NotEq),
            '<' => self.one_or_two('=', TokenKind::Less, TokenKind::LessEq),
            '>' => self.one_or_two('=', TokenKind::Greater, TokenKind::GreaterEq),
            '&' => self.one_or_two('&', TokenKind::Error, TokenKind::And),
            '|' => self.one_or_two('|', TokenKind::Error, TokenKind::Or),

            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Times),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            '[' => self.single(TokenKind::LeftBracket),
            ']' => self.single(TokenKind::RightBracket),
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),

            _ => self.single(TokenKind::Error),
        };
        Some(kind)
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.take();
        kind
    }

    /// Greedy second-character check: `one` alone, `two` when followed by `second`.
    fn one_or_two(&mut self, second: char, one: TokenKind, two: TokenKind) -> TokenKind {
        self.take();
        if self.current_char == second {
            self.take();
            two
        } else {
            one
        }
    }

    /// `digits` [`.` digits?] [exponent]
    fn number_literal(&mut self) -> TokenKind {
        self.take_digits();

        match self.current_char {
            '.' => {
                self.take();
                if !self.current_char.is_ascii_digit() {
                    // `123.` ends right after the dot
                    return TokenKind::FloatLiteral;
                }
                self.take_digits();
                self.exponent();
                TokenKind::FloatLiteral
            }
            'e' | 'E' => {
                self.exponent();
                TokenKind::FloatLiteral
            }
            _ => TokenKind::IntLiteral,
        }
    }

    /// `.` digits [exponent]; a dot without digits is an error token.
    fn fraction_literal(&mut self) -> TokenKind {
        self.take();
        if !self.current_char.is_ascii_digit() {
            return TokenKind::Error;
        }
        self.take_digits();
        self.exponent();
        TokenKind::FloatLiteral
    }

    /// Consume `(e|E) (+|-)? digits` if complete, otherwise leave the cursor as it was.
    fn exponent(&mut self) {
        if !matches!(self.current_char, 'e' | 'E') {
            return;
        }

        let snapshot = self.snapshot();
        self.take();
        if matches!(self.current_char, '+' | '-') {
            self.take();
        }

        if self.current_char.is_ascii_digit() {
            self.take_digits();
        } else {
            self.rollback(snapshot);
        }
    }

    fn identifier_or_keyword(&mut self) -> TokenKind {
        while self.current_char.is_ascii_alphanumeric() || self.current_char == '_' {
            self.take();
        }
        TokenKind::keyword(&self.lexeme).unwrap_or(TokenKind::Id)
    }

    /// String body without the quotes; escapes are kept verbatim in the lexeme.
    fn string_literal(&mut self) -> TokenKind {
        self.skip(); // opening quote

        loop {
            match self.current_char {
                '"' => {
                    self.skip();
                    return TokenKind::StringLiteral;
                }
                '\n' => {
                    // The newline stays in the input and is skipped as whitespace.
                    let pos = self.pos_from_start();
                    self.warn(LexWarning::UnterminatedString { pos });
                    return TokenKind::StringLiteral;
                }
                EOT => return TokenKind::Error,
                '\\' => {
                    let (line, col) = (self.line, self.col);
                    self.take();
                    match self.current_char {
                        'n' => self.take(),
                        EOT => {}
                        ch => {
                            self.take();
                            let pos = SourcePos::new(line, col, self.line, self.col);
                            self.warn(LexWarning::IllegalEscape { ch, pos });
                        }
                    }
                }
                _ => self.take(),
            }
        }
    }

    /// Current character is the second `/`. Discards through the end of line.
    fn skip_line_comment(&mut self) {
        while self.current_char != '\n' && self.current_char != EOT {
            self.skip();
        }
        if self.current_char == '\n' {
            self.skip();
        }
    }

    /// Current character is the `*` after `/`. Discards through the closing `*/`.
    fn skip_block_comment(&mut self) {
        self.skip();

        let mut in_body = false;
        loop {
            if self.current_char == EOT {
                let pos = self.pos_from_start();
                self.warn(LexWarning::UnterminatedComment { pos });
                return;
            }

            let closes = in_body && self.previous_char == '*' && self.current_char == '/';
            self.skip();
            in_body = true;
            if closes {
                return;
            }
        }
    }
}

/// Whether a token of this kind carries its source text.
///
/// Fixed-spelling operators, punctuation and EOF are identified by kind alone.
fn keeps_lexeme(kind: TokenKind) -> bool {
    !(kind.is_bin_op()
        || kind.is_rel_op()
        || matches!(
            kind,
            TokenKind::Assign
                | TokenKind::Not
                | TokenKind::LeftBrace
                | TokenKind::RightBrace
                | TokenKind::LeftBracket
                | TokenKind::RightBracket
                | TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Eof
        ))
}

/// Scan `input` through EOF, returning every token (EOF included) and all warnings.
pub fn tokenize(input: &str) -> (Vec<Token>, Vec<LexWarning>) {
    let mut scanner = Scanner::from_text(input);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.scan();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    (tokens, scanner.take_warnings())
}
