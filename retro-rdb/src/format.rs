//! Type tags used by the RDB encoding.
//!
//! RDB files use a subset of MessagePack. Only the tags the libretro database
//! tooling actually emits are recognized; everything else classifies as
//! [`TagKind::Other`].

/// Size of the opaque file header that precedes the first record.
pub const HEADER_SIZE: usize = 0x10;

pub const FIXMAP: u8 = 0x80;
pub const FIXARRAY: u8 = 0x90;
pub const FIXSTR: u8 = 0xa0;
pub const NIL: u8 = 0xc0;
pub const BIN8: u8 = 0xc4;
pub const BIN16: u8 = 0xc5;
pub const BIN32: u8 = 0xc6;
pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;
pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;
pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

/// Classification of a single tag byte.
///
/// Each variant carries whatever the tag itself encodes about the layout of
/// the bytes that follow it, so the decoder never has to re-inspect the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `0x00..=0x7f`. Never emitted by RDB writers; not decodable here.
    PositiveFixInt(u8),
    /// `0x80..=0x8f`. Starts a record. The embedded entry count is unused.
    FixMap,
    /// `0x90..=0x9f`. Skipped as a boundary marker.
    FixArray,
    /// `0xa0..=0xbf`. Inline string of the given length.
    FixStr(usize),
    /// `0xc0`. Ends the stream.
    Nil,
    /// `0xc4..=0xc6`. Binary blob. All three sub-tags carry one length byte.
    Bin,
    /// `0xcc..=0xcf`. Big-endian unsigned integer of the given byte width.
    Uint(usize),
    /// `0xd9..=0xdb`. String whose big-endian length field is the given
    /// number of bytes (1, 2 or 3).
    Str(usize),
    /// `0xde`/`0xdf`. Starts a record. The entry count field of the given
    /// width is read past and discarded.
    Map(usize),
    /// Any tag outside the supported subset.
    Other(u8),
}

impl TagKind {
    /// Classify a tag byte.
    pub fn classify(tag: u8) -> Self {
        match tag {
            0x00..=0x7f => Self::PositiveFixInt(tag),
            0x80..=0x8f => Self::FixMap,
            0x90..=0x9f => Self::FixArray,
            0xa0..=0xbf => Self::FixStr(usize::from(tag - FIXSTR)),
            NIL => Self::Nil,
            BIN8 | BIN16 | BIN32 => Self::Bin,
            // 2^(tag - 0xc9) bits: 1, 2, 4, 8 bytes
            UINT8..=UINT64 => Self::Uint((1usize << (tag - 0xc9)) / 8),
            STR8..=STR32 => Self::Str(usize::from(tag - STR8) + 1),
            MAP16 => Self::Map(2),
            MAP32 => Self::Map(4),
            _ => Self::Other(tag),
        }
    }

    /// Whether this tag opens a new record.
    pub fn is_map_start(self) -> bool {
        matches!(self, Self::FixMap | Self::Map(_))
    }
}
