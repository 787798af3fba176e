//! Sentinel-terminated source snapshot with line index and byte classes.
//!
//! A [`SourceBuffer`] is an immutable copy of the host's text taken at one
//! moment. Everything a navigator needs is computed once at construction:
//!
//! - a `0x00` sentinel after the content, so the classification cursor can
//!   peek past the end without bounds checks,
//! - the offset of every line start, for line/column queries,
//! - the [`ByteClass`] of every byte.
//!
//! The host must build a new snapshot after every edit. There is no
//! incremental re-synchronization.

use crate::class::{classify, ByteClass};
use crate::Cursor;

/// Padding granularity for the sentinel region.
const CACHE_LINE: usize = 64;

/// Line delimiters recognized by the snapshot, longest first.
///
/// Hosts use this set to decide whether an inserted text ends a line.
pub const LINE_DELIMITERS: [&str; 3] = ["\r\n", "\n", "\r"];

/// Immutable, classified snapshot of a text buffer.
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
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Byte offset of the first byte of every line. Always starts with `0`.
    line_starts: Vec<u32>,
    /// One class per source byte.
    classes: Vec<ByteClass>,
}

impl SourceBuffer {
    /// Snapshot `source` and classify it.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to `u32::MAX`;
    /// editor buffers never approach that size.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len().min(u32::MAX as usize);

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(&source_bytes[..source_len]);

        let source_len_u32 = u32::try_from(source_len).unwrap_or(u32::MAX);
        let line_starts = compute_line_starts(&buf[..source_len]);
        let classes = classify(Cursor::new(&buf, source_len_u32));

        tracing::debug!(
            len = source_len_u32,
            lines = line_starts.len(),
            "classified source snapshot"
        );

        Self {
            buf,
            source_len: source_len_u32,
            line_starts,
            classes,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Byte at `offset`, or `0` at and past the end.
    #[inline]
    pub fn byte_at(&self, offset: u32) -> u8 {
        self.buf.get(offset as usize).copied().unwrap_or(0)
    }

    /// Per-byte classification of the whole source.
    pub fn classes(&self) -> &[ByteClass] {
        &self.classes
    }

    /// Class of the byte at `offset`, or `None` past the end.
    pub fn class_at(&self, offset: u32) -> Option<ByteClass> {
        self.classes.get(offset as usize).copied()
    }

    /// Text between two offsets.
    ///
    /// Offsets are clamped to the source. Returns `""` when the range does
    /// not fall on character boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &str {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        std::str::from_utf8(&self.buf[start..end]).unwrap_or("")
    }

    /// Number of lines. An empty source has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Zero-based line index containing `offset`.
    pub fn line_of(&self, offset: u32) -> usize {
        let offset = offset.min(self.source_len);
        // line_starts[0] == 0, so the partition point is at least 1.
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    /// Offset of the first byte of the line containing `offset`.
    pub fn line_start(&self, offset: u32) -> u32 {
        self.line_starts[self.line_of(offset)]
    }

    /// Offset of the first byte of line `line`, if it exists.
    pub fn line_start_of(&self, line: usize) -> Option<u32> {
        self.line_starts.get(line).copied()
    }

    /// Offset just past the last content byte of the line containing
    /// `offset` (before its delimiter).
    pub fn line_end(&self, offset: u32) -> u32 {
        let line = self.line_of(offset);
        let Some(&next) = self.line_starts.get(line + 1) else {
            return self.source_len;
        };
        let mut end = next;
        if end > 0 && self.byte_at(end - 1) == b'\n' {
            end -= 1;
        }
        if end > 0 && self.byte_at(end - 1) == b'\r' {
            end -= 1;
        }
        end.max(self.line_starts[line])
    }

    /// Content of the line containing `offset`, without its delimiter.
    pub fn line_text(&self, offset: u32) -> &str {
        self.slice(self.line_start(offset), self.line_end(offset))
    }
}

/// Size assertion: the snapshot header stays small; the payload is on the heap.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 80);

/// Offsets of every line start. `\r\n`, `\n` and lone `\r` all end a line.
#[allow(
    clippy::cast_possible_truncation,
    reason = "source length is capped at u32::MAX"
)]
fn compute_line_starts(source: &[u8]) -> Vec<u32> {
    let mut starts = vec![0];
    for pos in memchr::memchr2_iter(b'\n', b'\r', source) {
        if source[pos] == b'\r' && source.get(pos + 1) == Some(&b'\n') {
            continue;
        }
        starts.push((pos + 1) as u32);
    }
    starts
}
