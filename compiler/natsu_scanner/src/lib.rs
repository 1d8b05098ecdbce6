//! Host-side integration for the Natsuzora tag scanner.
//!
//! `natsu_scanner_core` decides whether a `{[!` tag is a comment. This crate
//! plays the part of the parsing runtime around it:
//!
//! - [`Host`] owns the cursor, offers positions to an
//!   [`ExternalScanner`], resets on decline, and takes checkpoints of the
//!   scanner's serialized state.
//! - [`comments`] / [`lex_comments`] extract every comment token from a
//!   template, reporting unterminated comments as [`LexError`]s.

mod comments;
mod error;
mod host;
mod token;

use std::sync::Once;

pub use comments::{comments, lex_comments, Comments};
pub use error::{HostError, LexError};
pub use host::{Checkpoint, Host};
pub use token::Token;

pub use natsu_scanner_core::{
    DirectiveKeyword, ExternalScanner, ExternalToken, ScanOutcome, SourceBuffer, Span, TagProbe,
    TagScanner, ValidSymbols, SERIALIZATION_BUFFER_SIZE,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times; only the first call installs a subscriber.
/// Enable with `RUST_LOG=natsu_scanner=debug` or `RUST_LOG=natsu_scanner=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // An embedding application's subscriber wins over ours.
            if tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
                .is_err()
            {
                tracing::debug!("global subscriber already installed; keeping it");
            }
        }
    });
}
