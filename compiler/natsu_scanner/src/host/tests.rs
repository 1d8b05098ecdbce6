use super::*;
use natsu_scanner_core::{DirectiveKeyword, ScanLexer, Span};
use pretty_assertions::assert_eq;

/// Scanner with real state: counts the scans it has seen.
#[derive(Debug, Default)]
struct CountingScanner {
    scans: u32,
}

impl ExternalScanner for CountingScanner {
    fn create() -> Self {
        CountingScanner::default()
    }

    fn serialize(&self, buffer: &mut [u8]) -> usize {
        buffer[..4].copy_from_slice(&self.scans.to_le_bytes());
        4
    }

    fn deserialize(&mut self, buffer: &[u8]) {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&buffer[..4]);
        self.scans = u32::from_le_bytes(bytes);
    }

    fn scan<L: ScanLexer + ?Sized>(&mut self, lexer: &mut L, valid: ValidSymbols) -> ScanOutcome {
        self.scans += 1;
        TagScanner.scan(lexer, valid)
    }
}

/// Scanner that claims to have written more than the host offered.
struct OverflowingScanner;

impl ExternalScanner for OverflowingScanner {
    fn create() -> Self {
        OverflowingScanner
    }

    fn serialize(&self, buffer: &mut [u8]) -> usize {
        buffer.len() + 1
    }

    fn deserialize(&mut self, _buffer: &[u8]) {}

    fn scan<L: ScanLexer + ?Sized>(&mut self, _lexer: &mut L, _valid: ValidSymbols) -> ScanOutcome {
        ScanOutcome::Declined
    }
}

// === Offer ===

#[test]
fn offer_matches_and_advances() {
    let buf = SourceBuffer::new("{[! note ]}rest");
    let mut host: Host = Host::new(&buf);
    let token = host.offer(ValidSymbols::COMMENT);
    assert_eq!(token, Some(Token::comment(Span::new(0, 11))));
    assert_eq!(host.position(), 11);
}

#[test]
fn declined_directive_resets_position() {
    let buf = SourceBuffer::new("{[!include /partials/nav ]}");
    let mut host: Host = Host::new(&buf);
    assert_eq!(host.offer(ValidSymbols::COMMENT), None);
    assert_eq!(host.position(), 0);
}

#[test]
fn declined_unterminated_resets_position() {
    let buf = SourceBuffer::new("abc {[! never closed");
    let mut host: Host = Host::new(&buf);
    host.seek(4).expect("seek within source");
    assert_eq!(host.offer(ValidSymbols::COMMENT), None);
    assert_eq!(host.position(), 4);
    assert!(!host.is_at_end());
}

#[test]
fn comment_not_valid_declines() {
    let buf = SourceBuffer::new("{[! note ]}");
    let mut host: Host = Host::new(&buf);
    assert_eq!(host.offer(ValidSymbols::empty()), None);
    assert_eq!(host.position(), 0);
}

#[test]
fn retry_after_decline_is_identical() {
    let buf = SourceBuffer::new("{[!unsecure html ]}");
    let mut host: Host = Host::new(&buf);
    let first = host.probe(ValidSymbols::COMMENT);
    let second = host.probe(ValidSymbols::COMMENT);
    assert_eq!(first, TagProbe::Directive(DirectiveKeyword::Unsecure));
    assert_eq!(first, second);
    assert_eq!(host.position(), 0);
}

#[test]
fn probe_commits_only_comments() {
    let buf = SourceBuffer::new("{[-! trimmed -]}{[!include x]}");
    let mut host: Host = Host::new(&buf);
    assert_eq!(
        host.probe(ValidSymbols::COMMENT),
        TagProbe::Comment(Span::new(0, 16))
    );
    assert_eq!(host.position(), 16);
    assert_eq!(
        host.probe(ValidSymbols::COMMENT),
        TagProbe::Directive(DirectiveKeyword::Include)
    );
    assert_eq!(host.position(), 16);
}

#[test]
fn offer_at_end_declines() {
    let buf = SourceBuffer::new("{[!]}");
    let mut host: Host = Host::new(&buf);
    host.seek(5).expect("end position is valid");
    assert!(host.is_at_end());
    assert_eq!(host.offer(ValidSymbols::COMMENT), None);
}

#[test]
fn host_reads_the_given_template() {
    let buf = SourceBuffer::new("{[! c ]}");
    let host: Host = Host::new(&buf);
    assert_eq!(host.source().as_bytes(), b"{[! c ]}");
    assert_eq!(host.source().len(), 8);
}

// === Seek ===

#[test]
fn seek_past_end_fails() {
    let buf = SourceBuffer::new("abc");
    let mut host: Host = Host::new(&buf);
    assert_eq!(
        host.seek(4),
        Err(HostError::PositionOutOfRange { pos: 4, len: 3 })
    );
    assert_eq!(host.position(), 0);
}

// === Checkpoints ===

#[test]
fn tag_scanner_checkpoint_is_empty() {
    let buf = SourceBuffer::new("x {[! c ]}");
    let mut host: Host = Host::new(&buf);
    host.seek(2).expect("seek within source");
    let checkpoint = host.checkpoint().expect("empty state fits");
    assert_eq!(checkpoint.position(), 2);
    assert!(checkpoint.state().is_empty());
}

#[test]
fn restore_returns_to_checkpoint() {
    let buf = SourceBuffer::new("x {[! c ]} y");
    let mut host: Host = Host::new(&buf);
    host.seek(2).expect("seek within source");
    let checkpoint = host.checkpoint().expect("empty state fits");

    assert!(host.offer(ValidSymbols::COMMENT).is_some());
    assert_eq!(host.position(), 10);

    host.restore(&checkpoint).expect("checkpoint fits source");
    assert_eq!(host.position(), 2);
    assert_eq!(
        host.offer(ValidSymbols::COMMENT),
        Some(Token::comment(Span::new(2, 10)))
    );
}

#[test]
fn stateful_scanner_round_trips_state() {
    let buf = SourceBuffer::new("{[! a ]}{[! b ]}");
    let mut host: Host<'_, CountingScanner> = Host::new(&buf);
    assert!(host.offer(ValidSymbols::COMMENT).is_some());
    let checkpoint = host.checkpoint().expect("four bytes fit");
    assert_eq!(checkpoint.state(), &1u32.to_le_bytes());

    assert!(host.offer(ValidSymbols::COMMENT).is_some());
    assert_eq!(host.scanner.scans, 2);

    host.restore(&checkpoint).expect("checkpoint fits source");
    assert_eq!(host.scanner.scans, 1);
    assert_eq!(host.position(), 8);
    host.destroy();
}

#[test]
fn oversized_state_is_rejected() {
    let buf = SourceBuffer::new("");
    let host: Host<'_, OverflowingScanner> = Host::new(&buf);
    assert_eq!(
        host.checkpoint(),
        Err(HostError::StateOverflow {
            written: SERIALIZATION_BUFFER_SIZE + 1,
            capacity: SERIALIZATION_BUFFER_SIZE,
        })
    );
}

#[test]
fn checkpoint_from_longer_source_is_rejected() {
    let long = SourceBuffer::new("0123456789");
    let mut long_host: Host = Host::new(&long);
    long_host.seek(9).expect("seek within source");
    let checkpoint = long_host.checkpoint().expect("empty state fits");

    let short = SourceBuffer::new("0123");
    let mut short_host: Host = Host::new(&short);
    assert_eq!(
        short_host.restore(&checkpoint),
        Err(HostError::CheckpointMismatch { pos: 9, len: 4 })
    );
    assert_eq!(short_host.position(), 0);
}
