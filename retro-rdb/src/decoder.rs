//! Field-level decoding of the RDB byte stream.
//!
//! [`FieldDecoder`] walks the buffer one tag at a time and hands back raw
//! payload slices. It knows nothing about keys, values or records; pairing is
//! the job of [`crate::assembler`].

use crate::format::{HEADER_SIZE, TagKind};

/// One step of decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// A map header: the next field starts a new record.
    MapStart,
    /// A fixarray header, skipped without producing a field.
    Marker,
    /// The payload of a string, binary or integer field.
    Value(&'a [u8]),
    /// A nil terminator or the end of the buffer.
    End,
    /// A length or payload extends past the end of the buffer.
    Truncated { offset: usize },
    /// A tag outside the supported subset.
    Unsupported { tag: u8, offset: usize },
}

impl Field<'_> {
    /// Whether decoding cannot continue past this field.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::End | Self::Truncated { .. } | Self::Unsupported { .. }
        )
    }
}

/// Cursor over an RDB buffer.
#[derive(Debug, Clone)]
pub struct FieldDecoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FieldDecoder<'a> {
    /// Start decoding right after the file header.
    pub fn new(data: &'a [u8]) -> Self {
        Self::at(data, HEADER_SIZE)
    }

    /// Start decoding at an arbitrary offset.
    pub fn at(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    /// Current cursor offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Decode the field at the cursor and advance past it.
    ///
    /// Terminal results ([`Field::is_terminal`]) leave the cursor where the
    /// problem was found; calling again returns the same result.
    pub fn next_field(&mut self) -> Field<'a> {
        let start = self.pos;
        let Some(&tag) = self.data.get(start) else {
            return Field::End;
        };

        match TagKind::classify(tag) {
            TagKind::Nil => Field::End,
            TagKind::FixMap => {
                self.pos = start + 1;
                Field::MapStart
            }
            TagKind::Map(count_width) => match self.take(start + 1, count_width) {
                Some(_) => Field::MapStart,
                None => Field::Truncated { offset: start },
            },
            TagKind::FixArray => {
                self.pos = start + 1;
                Field::Marker
            }
            TagKind::FixStr(len) => self.value(start, start + 1, len),
            TagKind::Uint(width) => self.value(start, start + 1, width),
            TagKind::Bin => match self.data.get(start + 1) {
                Some(&len) => self.value(start, start + 2, usize::from(len)),
                None => Field::Truncated { offset: start },
            },
            TagKind::Str(len_width) => {
                let Some(len_bytes) = self.data.get(start + 1..start + 1 + len_width) else {
                    return Field::Truncated { offset: start };
                };
                let len = len_bytes
                    .iter()
                    .fold(0usize, |acc, &b| (acc << 8) | usize::from(b));
                self.value(start, start + 1 + len_width, len)
            }
            TagKind::PositiveFixInt(tag) | TagKind::Other(tag) => Field::Unsupported {
                tag,
                offset: start,
            },
        }
    }

    /// Take `len` payload bytes at `payload_start`, or report truncation of
    /// the field that began at `start`.
    fn value(&mut self, start: usize, payload_start: usize, len: usize) -> Field<'a> {
        match self.take(payload_start, len) {
            Some(payload) => Field::Value(payload),
            None => Field::Truncated { offset: start },
        }
    }

    fn take(&mut self, from: usize, len: usize) -> Option<&'a [u8]> {
        let end = from.checked_add(len)?;
        let slice = self.data.get(from..end)?;
        self.pos = end;
        Some(slice)
    }
}

#[cfg(test)]
#[path = "tests/decoder_tests.rs"]
mod tests;
