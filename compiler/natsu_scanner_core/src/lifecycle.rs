//! Scanner instance lifecycle required by checkpointing host runtimes.
//!
//! An incremental host creates one scanner instance per parse, serializes
//! its state at every checkpoint, and deserializes a saved state before
//! re-lexing from that checkpoint. [`TagScanner`] carries no state, so its
//! state is zero bytes, but it still goes through every step.

use crate::scanner::{probe_tag, TagProbe};
use crate::{ScanLexer, ScanOutcome, ValidSymbols};

/// Capacity of the buffer a host offers to [`ExternalScanner::serialize`].
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// An external scanner as seen by the host runtime.
pub trait ExternalScanner: Sized {
    /// Allocate the scanner's persistent state.
    fn create() -> Self;

    /// Release the scanner's state. Consumes the instance, so it runs at
    /// most once per created scanner.
    fn destroy(self) {}

    /// Write the current state into `buffer`, returning the bytes written.
    ///
    /// `buffer` holds [`SERIALIZATION_BUFFER_SIZE`] bytes when called by a
    /// conforming host.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restore state from bytes previously produced by [`serialize`].
    ///
    /// [`serialize`]: ExternalScanner::serialize
    fn deserialize(&mut self, buffer: &[u8]);

    /// Try to recognize one external token at the lexer's position.
    fn scan<L: ScanLexer + ?Sized>(&mut self, lexer: &mut L, valid: ValidSymbols) -> ScanOutcome;
}

/// The Natsuzora comment scanner.
///
/// Zero-sized: every scan is a pure function of the input from the
/// lexer's position onward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TagScanner;

const _: () = assert!(std::mem::size_of::<TagScanner>() == 0);

impl TagScanner {
    /// Like [`ExternalScanner::scan`], but reports why a scan declined.
    pub fn probe<L: ScanLexer + ?Sized>(&self, lexer: &mut L, valid: ValidSymbols) -> TagProbe {
        probe_tag(lexer, valid)
    }
}

impl ExternalScanner for TagScanner {
    fn create() -> Self {
        TagScanner
    }

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(&mut self, _buffer: &[u8]) {}

    fn scan<L: ScanLexer + ?Sized>(&mut self, lexer: &mut L, valid: ValidSymbols) -> ScanOutcome {
        self.probe(lexer, valid).outcome()
    }
}
