//! Mapping of decoded `(key, value)` pairs onto [`GameRecord`] fields.

use crate::game::GameRecord;

/// Assign a decoded value to the record field named by `key`.
///
/// Text fields are copied (invalid UTF-8 is replaced). Numeric fields are the
/// raw payload read as a big-endian unsigned integer. `md5` is stored as raw
/// bytes in the file and rendered as lowercase hex. Unknown keys are ignored.
pub fn apply_field(game: &mut GameRecord, key: &str, value: &[u8]) {
    match key {
        "name" => game.name = text(value),
        "description" => game.description = text(value),
        "genre" => game.genre = text(value),
        "developer" => game.developer = text(value),
        "publisher" => game.publisher = text(value),
        "franchise" => game.franchise = text(value),
        "esrb_rating" => game.esrb_rating = text(value),
        "serial" => game.serial = text(value),
        "rom_name" => game.rom_name = text(value),
        "size" => game.size = be_uint(value),
        "releasemonth" => game.release_month = be_uint32(value),
        "releaseyear" => game.release_year = be_uint32(value),
        "crc" => game.crc32 = be_uint32(value),
        "md5" => game.md5 = hex_lower(value),
        _ => {}
    }
}

fn text(value: &[u8]) -> String {
    String::from_utf8_lossy(value).into_owned()
}

/// Fold bytes into an unsigned integer, most significant byte first.
///
/// Saturates at `u64::MAX` when the value does not fit in 64 bits. An empty
/// payload is zero.
pub fn be_uint(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .try_fold(0u64, |acc, &b| acc.checked_mul(256).map(|v| v | u64::from(b)))
        .unwrap_or(u64::MAX)
}

/// [`be_uint`] narrowed to 32 bits, saturating at `u32::MAX`.
pub fn be_uint32(bytes: &[u8]) -> u32 {
    u32::try_from(be_uint(bytes)).unwrap_or(u32::MAX)
}

/// Render bytes as lowercase hex.
pub fn hex_lower(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
#[path = "tests/fields_tests.rs"]
mod tests;
