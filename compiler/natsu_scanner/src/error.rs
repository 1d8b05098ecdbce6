//! Error types for the host integration layer.
//!
//! The scanner itself never fails: every outcome is `Matched` or `Declined`.
//! These errors come from the host's side of the contract (positions and
//! checkpoints) and from surfacing unterminated comments.

use natsu_scanner_core::Span;
use thiserror::Error;

/// Misuse of the host's cursor or checkpoint machinery.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum HostError {
    /// Seek target lies past the end of the template.
    #[error("position {pos} is past the end of the template (length {len})")]
    PositionOutOfRange { pos: u32, len: u32 },

    /// The scanner reported writing more bytes than the state buffer holds.
    #[error("scanner wrote {written} bytes of state into a {capacity}-byte buffer")]
    StateOverflow { written: usize, capacity: usize },

    /// A checkpoint taken over a longer template was restored into this one.
    #[error("checkpoint at {pos} does not fit a template of length {len}")]
    CheckpointMismatch { pos: u32, len: u32 },
}

/// A template construct the comment scanner could not close.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// `{[!` / `{[-!` opened a comment that never reached `]}` or `-]}`.
    #[error("unterminated comment at {span}: expected `]}}` or `-]}}` before end of template")]
    UnterminatedComment { span: Span },
}

impl LexError {
    /// Where in the template the error occurred.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedComment { span } => *span,
        }
    }
}
