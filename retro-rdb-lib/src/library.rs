//! Library entries: scanned ROM files enriched with RDB metadata.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use retro_rdb::{GameRecord, display_name, region_hint};

use crate::error::MetadataError;
use crate::hasher::{RomHashes, compute_crc32, compute_crc32_md5};
use crate::metadata::MetadataStore;

/// Options for [`identify_file`] and [`identify_bytes`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifyOptions {
    /// Also hash MD5 in the same pass. The database MD5 is still preferred
    /// when the checksum is known.
    pub compute_md5: bool,
}

/// A ROM file in the user's library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// CRC32 as 8 lowercase hex digits
    pub crc32: String,
    pub file: PathBuf,
    /// Full No-Intro name, or the file stem when unmatched
    pub name: String,
    pub display_name: String,
    /// `"us"`, `"eu"`, `"jp"` or empty
    pub region: String,
    pub developer: String,
    pub publisher: String,
    pub genre: String,
    pub franchise: String,
    pub esrb_rating: String,
    /// e.g. `"June 1991"` or `"1991"`
    pub release_date: String,
    /// MD5 (lowercase hex), empty when unknown
    pub md5: String,
    /// Whether RDB metadata was found for this file
    pub matched: bool,
}

impl LibraryEntry {
    pub fn new(crc32: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            crc32: crc32.into(),
            file: file.into(),
            ..Default::default()
        }
    }

    /// Fill empty fields from an RDB record. Fields that already hold a value
    /// are left alone so user edits survive a rescan.
    pub fn apply_metadata(&mut self, game: &GameRecord) {
        fill(&mut self.name, &game.name);
        fill(&mut self.display_name, display_name(&game.name));
        fill(&mut self.region, region_hint(&game.name));
        fill(&mut self.developer, &game.developer);
        fill(&mut self.publisher, &game.publisher);
        fill(&mut self.genre, &game.genre);
        fill(&mut self.franchise, &game.franchise);
        fill(&mut self.esrb_rating, &game.esrb_rating);
        if let Some(date) = game.release_date() {
            fill(&mut self.release_date, &date);
        }
        fill(&mut self.md5, &game.md5);
        self.matched = true;
    }

    /// Derive names from the file name when no metadata supplied them.
    pub fn apply_filename_fallback(&mut self, filename: &str) {
        fill(&mut self.name, file_stem(filename));
        fill(&mut self.display_name, clean_display_name(filename));
    }
}

fn fill(field: &mut String, value: &str) {
    if field.is_empty() && !value.is_empty() {
        *field = value.to_string();
    }
}

fn file_stem(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
}

/// Display name for a bare file name: extension removed, then region and
/// version groups stripped.
pub fn clean_display_name(filename: &str) -> &str {
    display_name(file_stem(filename))
}

/// Hash a ROM file and look it up in the metadata store.
pub fn identify_file(
    path: &Path,
    store: &MetadataStore,
    options: IdentifyOptions,
) -> Result<LibraryEntry, MetadataError> {
    let mut reader = BufReader::new(File::open(path)?);
    let hashes = hash(&mut reader, options)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string();
    Ok(build_entry(path.to_path_buf(), &filename, &hashes, store))
}

/// Like [`identify_file`], for ROM data already in memory.
pub fn identify_bytes(
    data: &[u8],
    filename: &str,
    store: &MetadataStore,
    options: IdentifyOptions,
) -> Result<LibraryEntry, MetadataError> {
    let hashes = hash(&mut Cursor::new(data), options)?;
    Ok(build_entry(PathBuf::from(filename), filename, &hashes, store))
}

fn hash<R: Read>(reader: &mut R, options: IdentifyOptions) -> Result<RomHashes, MetadataError> {
    if options.compute_md5 {
        compute_crc32_md5(reader)
    } else {
        compute_crc32(reader)
    }
}

fn build_entry(
    file: PathBuf,
    filename: &str,
    hashes: &RomHashes,
    store: &MetadataStore,
) -> LibraryEntry {
    let mut entry = LibraryEntry::new(hashes.crc32_hex(), file);

    match store.lookup_by_crc32(hashes.crc32) {
        Some(game) => entry.apply_metadata(game),
        None => log::debug!("No RDB match for {} ({})", filename, entry.crc32),
    }
    if let Some(md5) = &hashes.md5 {
        fill(&mut entry.md5, md5);
    }
    entry.apply_filename_fallback(filename);
    entry
}

#[cfg(test)]
#[path = "tests/library_tests.rs"]
mod tests;
