//! Sentinel-terminated template buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the template content,
//! so the cursor can report "no more input" through `lookahead() == 0`
//! without a bounds check. The total buffer size is rounded up to the next
//! 64-byte boundary.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated template buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the template content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from template source.
    ///
    /// Templates larger than `u32::MAX` bytes are truncated to the first
    /// `u32::MAX` bytes; offsets throughout the scanner are `u32`.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = u32::try_from(source_bytes.len()).unwrap_or(u32::MAX);
        let content = &source_bytes[..source_len as usize];

        // Round up to next 64-byte boundary (minimum: source + sentinel).
        let padded_len = (content.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..content.len()].copy_from_slice(content);

        Self { buf, source_len }
    }

    /// Returns the template bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Create a [`Cursor`] positioned at `pos`.
    ///
    /// Returns `None` when `pos` lies past the end of the template. A cursor
    /// at exactly `len()` is valid and reports end of input.
    pub fn cursor_at(&self, pos: u32) -> Option<Cursor<'_>> {
        if pos > self.source_len {
            return None;
        }
        let mut cursor = self.cursor();
        cursor.advance_n(pos);
        Some(cursor)
    }

    /// Length of the template content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the template is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
