//! Comment-vs-directive disambiguation for `{[!` tags.
//!
//! A scan runs three stages over a forward-only [`ScanLexer`]:
//!
//! 1. **Delimiter**: `{`, `[`, optional `-`, then `!`, with no whitespace in
//!    between. Any whitespace after `!` is skipped.
//! 2. **Keyword**: if the next byte is `i` or `u`, probe for `include` or
//!    `unsecure` followed by a boundary byte. A boundary-respecting keyword
//!    means the tag is a directive, and the scan declines.
//! 3. **Body**: consume through the first `]}` or `-]}`. Running out of
//!    input first declines.
//!
//! # Declines and the cursor
//!
//! The lexer cannot rewind, so a declined scan may leave it anywhere past
//! the starting position. A decline means "nothing was consumed": the host
//! resets its cursor to where the scan started before trying other rules.

use crate::{ExternalToken, ScanLexer, Span, ValidSymbols};

/// Result of offering one position to the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A comment token covering `span`, delimiters included.
    Matched(Span),
    /// Not a comment here; the host resets and lets grammar rules try.
    Declined,
}

impl ScanOutcome {
    /// The matched span, if any.
    pub fn span(self) -> Option<Span> {
        match self {
            ScanOutcome::Matched(span) => Some(span),
            ScanOutcome::Declined => None,
        }
    }

    /// The token kind produced, if any.
    pub fn token(self) -> Option<ExternalToken> {
        self.span().map(|_| ExternalToken::Comment)
    }

    pub fn is_matched(self) -> bool {
        matches!(self, ScanOutcome::Matched(_))
    }
}

/// Directive keywords that share the `{[!` prefix with comments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKeyword {
    /// `{[!include path ]}`
    Include,
    /// `{[!unsecure expr ]}`
    Unsecure,
}

impl DirectiveKeyword {
    /// The keyword's literal text.
    pub const fn as_str(self) -> &'static str {
        match self {
            DirectiveKeyword::Include => "include",
            DirectiveKeyword::Unsecure => "unsecure",
        }
    }

    /// The keyword whose text starts with `first`.
    const fn starting_with(first: u8) -> Option<Self> {
        match first {
            b'i' => Some(DirectiveKeyword::Include),
            b'u' => Some(DirectiveKeyword::Unsecure),
            _ => None,
        }
    }
}

/// Detailed classification of one scan attempt.
///
/// [`ScanOutcome`] is what the host runtime sees; `TagProbe` additionally
/// says why a scan declined, which the integration layer uses for
/// diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagProbe {
    /// A complete comment tag.
    Comment(Span),
    /// `COMMENT` was not among the acceptable kinds; nothing was read.
    NotAcceptable,
    /// The input does not start with `{[!` or `{[-!`.
    NoDelimiter,
    /// The tag is a directive introduced by this keyword.
    Directive(DirectiveKeyword),
    /// A comment body was opened but input ended before `]}` / `-]}`.
    /// The span runs from the opening `{` to end of input.
    Unterminated(Span),
}

impl TagProbe {
    /// Collapse the classification to the host-facing outcome.
    pub fn outcome(self) -> ScanOutcome {
        match self {
            TagProbe::Comment(span) => ScanOutcome::Matched(span),
            TagProbe::NotAcceptable
            | TagProbe::NoDelimiter
            | TagProbe::Directive(_)
            | TagProbe::Unterminated(_) => ScanOutcome::Declined,
        }
    }
}

/// Classify the tag starting at the lexer's current position.
pub fn probe_tag<L: ScanLexer + ?Sized>(lexer: &mut L, valid: ValidSymbols) -> TagProbe {
    if !valid.accepts(ExternalToken::Comment) {
        return TagProbe::NotAcceptable;
    }

    let start = lexer.position();
    if !eat_open_delimiter(lexer) {
        return TagProbe::NoDelimiter;
    }
    skip_whitespace(lexer);

    if let Some(keyword) = eat_directive_keyword(lexer) {
        return TagProbe::Directive(keyword);
    }

    if eat_comment_body(lexer) {
        TagProbe::Comment(Span::new(start, lexer.position()))
    } else {
        TagProbe::Unterminated(Span::new(start, lexer.position()))
    }
}

/// Scan for a comment token at the lexer's current position.
#[inline]
pub fn scan_comment<L: ScanLexer + ?Sized>(lexer: &mut L, valid: ValidSymbols) -> ScanOutcome {
    probe_tag(lexer, valid).outcome()
}

// ─── Delimiter ──────────────────────────────────────────────────────

#[inline]
fn eat<L: ScanLexer + ?Sized>(lexer: &mut L, byte: u8) -> bool {
    if !lexer.is_eof() && lexer.lookahead() == byte {
        lexer.advance();
        true
    } else {
        false
    }
}

/// `{[!` or `{[-!`.
fn eat_open_delimiter<L: ScanLexer + ?Sized>(lexer: &mut L) -> bool {
    if !eat(lexer, b'{') || !eat(lexer, b'[') {
        return false;
    }
    // Optional whitespace-trim marker.
    eat(lexer, b'-');
    eat(lexer, b'!')
}

#[inline]
fn is_tag_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

fn skip_whitespace<L: ScanLexer + ?Sized>(lexer: &mut L) {
    while !lexer.is_eof() && is_tag_whitespace(lexer.lookahead()) {
        lexer.advance();
    }
}

// ─── Keyword ────────────────────────────────────────────────────────

/// Probe for a directive keyword ending at a boundary.
///
/// Consumes the matching prefix of the keyword either way; on a failed
/// probe those bytes are ordinary comment body.
fn eat_directive_keyword<L: ScanLexer + ?Sized>(lexer: &mut L) -> Option<DirectiveKeyword> {
    let keyword = DirectiveKeyword::starting_with(lexer.lookahead())?;
    for &expected in keyword.as_str().as_bytes() {
        if !eat(lexer, expected) {
            return None;
        }
    }
    at_keyword_boundary(lexer).then_some(keyword)
}

/// Whitespace, `-`, `]`, or end of input.
fn at_keyword_boundary<L: ScanLexer + ?Sized>(lexer: &L) -> bool {
    lexer.is_eof() || matches!(lexer.lookahead(), b' ' | b'\t' | b'\r' | b'\n' | b'-' | b']')
}

// ─── Body ───────────────────────────────────────────────────────────

/// Consume through the first `]}` or `-]}`.
///
/// Returns `false` if input ends first. A `-` or `]` that does not start a
/// complete close sequence is body content; nothing is given back.
fn eat_comment_body<L: ScanLexer + ?Sized>(lexer: &mut L) -> bool {
    loop {
        lexer.skip_until_either(b'-', b']');
        if lexer.is_eof() {
            return false;
        }
        // `-` only matters when `]}` follows; either way it is consumed.
        eat(lexer, b'-');
        if eat(lexer, b']') && eat(lexer, b'}') {
            return true;
        }
    }
}
