//! # Introduction
//!
//! minic scans and recognizes MiniC, a small C-like teaching language. The
//! scanner turns source text into tokens, and a recursive-descent recognizer
//! decides whether the token stream is a syntactically valid program. No tree
//! is built: the result of a parse is either silence or exactly one diagnostic.
//!
//! ## Pipeline
//!
//! ```text
//! Source → CharSource → Scanner → Token → Parser → ErrorReporter
//! ```
//!
//! 1. [`parser`] — character sources, tokens, the scanner and the recognizer.
//! 2. [`history`] — records a whole token stream plus the parse verdict so a
//!    driver can step through it.
//! 3. [`config`] — command-line arguments and logging setup.
//! 4. [`ui`] — ratatui-based token stepper; not part of the stable library API.
//!
//! ## Quick start
//!
//! ```
//! use minic::parser::{CollectingReporter, Parser};
//!
//! let mut parser = Parser::from_source("int main() { return 0; }", CollectingReporter::new());
//! parser.parse();
//! assert!(parser.reporter().is_empty());
//! ```

pub mod config;
pub mod history;
pub mod parser;
pub mod ui;
