//! Streaming CRC32/MD5 hashing of ROM data.

use std::io::Read;

use crate::error::MetadataError;

const CHUNK_SIZE: usize = 64 * 1024; // 64 KB

/// Hash results for a ROM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomHashes {
    pub crc32: u32,
    /// MD5 (lowercase hex), when requested
    pub md5: Option<String>,
    /// Number of bytes hashed
    pub data_size: u64,
}

impl RomHashes {
    /// CRC32 as 8 lowercase hex digits, the form library entries are keyed by.
    pub fn crc32_hex(&self) -> String {
        format!("{:08x}", self.crc32)
    }
}

/// Compute the CRC32 of everything `reader` yields, in 64KB chunks.
pub fn compute_crc32<R: Read>(reader: &mut R) -> Result<RomHashes, MetadataError> {
    let mut hasher = crc32fast::Hasher::new();
    let data_size = for_each_chunk(reader, |chunk| hasher.update(chunk))?;

    Ok(RomHashes {
        crc32: hasher.finalize(),
        md5: None,
        data_size,
    })
}

/// Compute CRC32 and MD5 in a single pass.
pub fn compute_crc32_md5<R: Read>(reader: &mut R) -> Result<RomHashes, MetadataError> {
    let mut crc = crc32fast::Hasher::new();
    let mut md5 = md5::Context::new();
    let data_size = for_each_chunk(reader, |chunk| {
        crc.update(chunk);
        md5.consume(chunk);
    })?;

    Ok(RomHashes {
        crc32: crc.finalize(),
        md5: Some(format!("{:x}", md5.compute())),
        data_size,
    })
}

fn for_each_chunk<R: Read>(
    reader: &mut R,
    mut f: impl FnMut(&[u8]),
) -> Result<u64, MetadataError> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        f(&buf[..n]);
        total += n as u64;
    }

    Ok(total)
}

#[cfg(test)]
#[path = "tests/hasher_tests.rs"]
mod tests;
