//! Host side of the external scanner contract.
//!
//! A [`Host`] owns the read position over a template and drives one
//! [`ExternalScanner`] instance the way an incremental parsing runtime does:
//!
//! - **Offer**: hand the scanner a *copy* of the cursor plus the set of
//!   acceptable token kinds. A match commits the copy; a decline drops it,
//!   so the host position is exactly where it was before the scan no matter
//!   how far the scanner probed.
//! - **Checkpoint / restore**: serialize the scanner's state next to the
//!   position, and later deserialize it before re-lexing from there.

use natsu_scanner_core::{
    Cursor, ExternalScanner, ScanOutcome, SourceBuffer, TagProbe, TagScanner, ValidSymbols,
    SERIALIZATION_BUFFER_SIZE,
};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{HostError, Token};

/// Scanner state saved together with the position it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pos: u32,
    state: SmallVec<[u8; 16]>,
}

impl Checkpoint {
    /// Template offset the checkpoint was taken at.
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// Serialized scanner state (empty for [`TagScanner`]).
    pub fn state(&self) -> &[u8] {
        &self.state
    }
}

/// Parsing-runtime stand-in that owns the cursor and one scanner instance.
pub struct Host<'src, S: ExternalScanner = TagScanner> {
    source: &'src SourceBuffer,
    cursor: Cursor<'src>,
    scanner: S,
}

impl<'src, S: ExternalScanner> Host<'src, S> {
    /// Create a host positioned at the start of `source`, creating a fresh
    /// scanner instance.
    pub fn new(source: &'src SourceBuffer) -> Self {
        Host {
            source,
            cursor: source.cursor(),
            scanner: S::create(),
        }
    }

    /// The template this host reads.
    pub fn source(&self) -> &'src SourceBuffer {
        self.source
    }

    /// Current read position.
    pub fn position(&self) -> u32 {
        self.cursor.pos()
    }

    /// Returns `true` once the read position reaches the end of the template.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Move the read position to `pos`, as the grammar does after lexing
    /// tokens of its own.
    pub fn seek(&mut self, pos: u32) -> Result<(), HostError> {
        self.cursor = self
            .source
            .cursor_at(pos)
            .ok_or(HostError::PositionOutOfRange {
                pos,
                len: self.source.len(),
            })?;
        Ok(())
    }

    /// Offer the current position to the scanner.
    ///
    /// On a match the position moves to the end of the token. On a decline
    /// it stays where it was, whatever the scanner consumed while probing.
    pub fn offer(&mut self, valid: ValidSymbols) -> Option<Token> {
        let start = self.cursor.pos();
        let mut probe = self.cursor;
        match self.scanner.scan(&mut probe, valid) {
            ScanOutcome::Matched(span) => {
                debug_assert_eq!(span.start, start, "token must start at the offered position");
                debug_assert_eq!(span.end, probe.pos(), "token must end at the cursor");
                trace!(pos = start, end = span.end, outcome = "matched", "scan");
                self.cursor = probe;
                Some(Token::comment(span))
            }
            ScanOutcome::Declined => {
                trace!(
                    pos = start,
                    probed = probe.pos() - start,
                    outcome = "declined",
                    "scan"
                );
                None
            }
        }
    }

    /// Save the scanner state at the current position.
    pub fn checkpoint(&self) -> Result<Checkpoint, HostError> {
        let mut buffer = [0u8; SERIALIZATION_BUFFER_SIZE];
        let written = self.scanner.serialize(&mut buffer);
        let state = buffer.get(..written).ok_or(HostError::StateOverflow {
            written,
            capacity: SERIALIZATION_BUFFER_SIZE,
        })?;
        let pos = self.cursor.pos();
        debug!(pos, bytes = written, "checkpoint");
        Ok(Checkpoint {
            pos,
            state: SmallVec::from_slice(state),
        })
    }

    /// Return to a checkpoint: reposition and deserialize the saved state.
    pub fn restore(&mut self, checkpoint: &Checkpoint) -> Result<(), HostError> {
        let cursor =
            self.source
                .cursor_at(checkpoint.pos)
                .ok_or(HostError::CheckpointMismatch {
                    pos: checkpoint.pos,
                    len: self.source.len(),
                })?;
        self.scanner.deserialize(&checkpoint.state);
        self.cursor = cursor;
        debug!(pos = checkpoint.pos, bytes = checkpoint.state.len(), "restore");
        Ok(())
    }

    /// Release the scanner instance.
    pub fn destroy(self) {
        self.scanner.destroy();
    }
}

impl Host<'_, TagScanner> {
    /// Like [`offer`](Self::offer), but reports why the scanner declined.
    ///
    /// Commits only on [`TagProbe::Comment`].
    pub fn probe(&mut self, valid: ValidSymbols) -> TagProbe {
        let start = self.cursor.pos();
        let mut probe = self.cursor;
        let result = self.scanner.probe(&mut probe, valid);
        trace!(pos = start, ?result, "probe");
        if let TagProbe::Comment(_) = result {
            self.cursor = probe;
        }
        result
    }
}

#[cfg(test)]
mod tests;
