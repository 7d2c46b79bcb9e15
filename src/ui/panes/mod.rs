//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text colored from the token stream, current token marked
//! - [`tokens`]: The recorded token list with positions and lexemes
//! - [`diagnostics`]: Lexical warnings reached so far and the parse verdict
//! - [`status`]: Status bar with keybindings and stepping state
//! - `utils`: Shared border, token color and scrolling helpers
//!
//! Each pane module exports a `render_*` function; panes hold no state of their
//! own beyond the scroll offsets passed in by the app.

mod utils;

pub mod diagnostics;
pub mod source;
pub mod status;
pub mod tokens;

pub use diagnostics::render_diagnostics_pane;
pub use source::{SourceRenderData, SourceScrollState, render_source_pane};
pub use status::{StatusRenderData, render_status_bar};
pub use tokens::render_tokens_pane;
