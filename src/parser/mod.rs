//! MiniC scanner and recognizer
//!
//! This module turns MiniC source text into an accept/reject verdict:
//! - [`source`]: character sources with mark/reset for scanner lookahead
//! - [`token`]: token kinds, source positions and the keyword table
//! - [`lexer`]: the [`Scanner`] (characters → tokens)
//! - [`parse`]: the [`Parser`] (tokens → verdict), split across
//!   `declarations`, `statements` and `expressions`
//! - [`errors`]: lexical warnings, syntax diagnostics and reporters
//!
//! # Recognized Language
//!
//! - Types: `void`, `int`, `bool`, `float`, one-dimensional arrays
//! - Statements: compound, `if`/`else`, `while`, `for`, `return`, assignment, call
//! - Expressions: one relational level over flat operator runs
//! - Comments: `// ...` and `/* ... */`, no preprocessor
//!
//! # Parser Implementation
//!
//! Hand-written scanner with one-token lookahead feeding a predictive
//! recursive-descent recognizer. No AST is built and the first syntax error
//! ends the pass.

mod declarations;
mod expressions;
mod statements;

pub mod errors;
pub mod lexer;
pub mod parse;
pub mod source;
pub mod token;

pub use errors::{
    CollectingReporter, ConsoleReporter, Diagnostic, ErrorReporter, LexWarning, SyntaxError,
};
pub use lexer::{Scanner, tokenize};
pub use parse::Parser;
pub use source::{CharSource, EOT, StrSource};
pub use token::{SourcePos, Token, TokenKind};
