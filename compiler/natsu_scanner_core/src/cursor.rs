//! Forward-only cursor over a sentinel-terminated template buffer.
//!
//! The cursor advances byte-by-byte. End of input is detected when the
//! current byte equals the sentinel (`0x00`) and the position has reached
//! the template length. A `0x00` inside the template is ordinary content:
//! the cursor tells the two apart by comparing `pos` against `source_len`.
//!
//! # The scanner capability
//!
//! [`ScanLexer`] is the only view of the input the tag scanner gets. It can
//! look at the current byte and step past it; it can never step back. Hosts
//! that need to undo a speculative scan keep their own copy of the starting
//! position (a [`Cursor`] is [`Copy`]) and discard the probing copy.

/// Peek/advance capability handed to the tag scanner by its host.
///
/// Implementations must be forward-only: nothing on this trait moves the
/// read position backward.
pub trait ScanLexer {
    /// The byte at the current position, or `0` at end of input.
    fn lookahead(&self) -> u8;

    /// Step past the current byte. A no-op at end of input.
    fn advance(&mut self);

    /// Returns `true` once every byte of input has been consumed.
    fn is_eof(&self) -> bool;

    /// Current byte offset from the start of input.
    fn position(&self) -> u32;

    /// Advance until the current byte is `a` or `b`, or input runs out.
    ///
    /// The default steps one byte at a time; implementations with direct
    /// buffer access may jump ahead in a single step.
    fn skip_until_either(&mut self, a: u8, b: u8) {
        while !self.is_eof() {
            let current = self.lookahead();
            if current == a || current == b {
                return;
            }
            self.advance();
        }
    }
}

/// Forward-only cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a host can snapshot it before a speculative
/// scan and restore the snapshot on decline.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00` (cache-line padding). This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual template content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at end of input (the sentinel). Interior null bytes
    /// also return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Advance the cursor by one byte, stopping at the sentinel.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Advance the cursor by `n` bytes, clamped to the end of input.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Returns `true` if the cursor has reached end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the template.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance to the next `a` or `b` byte, or to end of input.
    ///
    /// Uses `memchr2` over the remaining template content only (never the
    /// sentinel or padding). Returns the byte found, or `0` at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_either(&mut self, a: u8, b: u8) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr2(a, b, remaining) {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }
}

impl ScanLexer for Cursor<'_> {
    #[inline]
    fn lookahead(&self) -> u8 {
        self.current()
    }

    #[inline]
    fn advance(&mut self) {
        Cursor::advance(self);
    }

    #[inline]
    fn is_eof(&self) -> bool {
        Cursor::is_eof(self)
    }

    #[inline]
    fn position(&self) -> u32 {
        self.pos
    }

    fn skip_until_either(&mut self, a: u8, b: u8) {
        self.eat_until_either(a, b);
    }
}
