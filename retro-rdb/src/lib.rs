//! Decoder for libretro-style RDB game metadata databases.
//!
//! An RDB file is a 16-byte header followed by a MessagePack-like stream of
//! per-game maps (name, publisher, CRC32, MD5, release info, ...). This crate
//! decodes that stream into [`GameRecord`]s and indexes them by CRC32 and MD5
//! so front-ends can identify ROMs without network access.

pub mod assembler;
pub mod database;
pub mod decoder;
pub mod error;
pub mod fields;
pub mod format;
pub mod game;
pub mod names;

pub use database::Database;
pub use error::RdbError;
pub use game::GameRecord;
pub use names::{display_name, region_hint};

use std::path::Path;

/// Read an RDB file fully into memory and parse it.
pub fn load(path: &Path) -> Result<Database, RdbError> {
    Database::load(path)
}

/// Parse RDB content. Never fails: damaged input yields fewer records.
pub fn parse(data: &[u8]) -> Database {
    Database::parse(data)
}

#[cfg(test)]
#[path = "tests/fixtures.rs"]
mod test_fixtures;
