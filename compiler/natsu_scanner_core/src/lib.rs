//! Low-level tag scanner for Natsuzora templates.
//!
//! Natsuzora tags that open with `{[!` (or the whitespace-trimming `{[-!`)
//! are ambiguous: the same prefix introduces a comment, an `include`
//! directive, or an `unsecure` directive. This crate decides, byte by byte,
//! whether such a prefix begins a comment. When it begins a directive
//! keyword instead, the scanner declines and the grammar's own rules lex
//! the tag.
//!
//! # Layers
//!
//! - [`SourceBuffer`] / [`Cursor`]: sentinel-terminated input with a
//!   forward-only cursor.
//! - [`ScanLexer`]: the peek/advance capability a host runtime hands to the
//!   scanner.
//! - [`TagScanner`]: the zero-sized scanner and its [`ExternalScanner`]
//!   lifecycle (create, destroy, serialize, deserialize, scan).

mod cursor;
mod lifecycle;
mod scanner;
mod source_buffer;
mod symbol;

pub use cursor::{Cursor, ScanLexer};
pub use lifecycle::{ExternalScanner, TagScanner, SERIALIZATION_BUFFER_SIZE};
pub use scanner::{probe_tag, scan_comment, DirectiveKeyword, ScanOutcome, TagProbe};
pub use source_buffer::SourceBuffer;
pub use symbol::{ExternalToken, Span, ValidSymbols};
