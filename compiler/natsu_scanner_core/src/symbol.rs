//! External token kinds, acceptable-kind sets, and byte spans.

use std::fmt;
use std::ops::Range;

use bitflags::bitflags;

/// Token kinds produced by the external tag scanner.
///
/// The discriminant is the index the grammar assigns to the token in its
/// external token list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExternalToken {
    /// `{[! ... ]}` or `{[-! ... -]}` that is not a directive.
    Comment = 0,
}

impl ExternalToken {
    /// Grammar-facing name of the token kind.
    pub const fn name(self) -> &'static str {
        match self {
            ExternalToken::Comment => "comment",
        }
    }

    /// The single-kind set containing this token.
    pub const fn symbol(self) -> ValidSymbols {
        match self {
            ExternalToken::Comment => ValidSymbols::COMMENT,
        }
    }
}

impl fmt::Display for ExternalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// External token kinds the grammar accepts at the current position.
    ///
    /// During error recovery a host typically marks every kind acceptable
    /// (`ValidSymbols::all()`).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ValidSymbols: u8 {
        /// A comment tag may start here.
        const COMMENT = 1 << ExternalToken::Comment as u8;
    }
}

impl ValidSymbols {
    /// Returns `true` if `token` is acceptable at this position.
    #[inline]
    pub const fn accepts(self, token: ExternalToken) -> bool {
        self.contains(token.symbol())
    }
}

/// Half-open byte range `start..end` within a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span from `start` to `end`; `start` must not exceed `end`.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The span as a `usize` range, for slicing the template text.
    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
