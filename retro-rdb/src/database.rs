//! Parsed RDB database with CRC32 and MD5 indexes.

use std::collections::HashMap;
use std::path::Path;

use crate::assembler::assemble;
use crate::error::RdbError;
use crate::game::GameRecord;

/// All games from an RDB file, indexed for fast lookups.
///
/// Immutable once built. Index entries point into the owned game list, so a
/// lookup always returns the same record that appears in [`Database::games`].
#[derive(Debug, Clone, Default)]
pub struct Database {
    games: Vec<GameRecord>,
    by_crc32: HashMap<u32, usize>,
    by_md5: HashMap<String, usize>,
}

impl Database {
    /// Read an RDB file fully into memory and parse it.
    pub fn load(path: &Path) -> Result<Self, RdbError> {
        let data = std::fs::read(path)?;
        let db = Self::parse(&data);
        log::debug!(
            "Loaded {} games from {} ({} bytes)",
            db.len(),
            path.display(),
            data.len()
        );
        Ok(db)
    }

    /// Parse RDB content.
    ///
    /// Never fails. Truncated or corrupt input yields the records decoded
    /// before the damage, possibly none.
    pub fn parse(data: &[u8]) -> Self {
        Self::from_games(assemble(data))
    }

    /// Build the indexes over a finished list of games.
    ///
    /// Games with a zero CRC32 or empty MD5 are left out of the respective
    /// index. When several games share a key the later one wins.
    pub fn from_games(games: Vec<GameRecord>) -> Self {
        let mut by_crc32 = HashMap::with_capacity(games.len());
        let mut by_md5 = HashMap::with_capacity(games.len());

        for (i, game) in games.iter().enumerate() {
            if game.crc32 != 0 {
                by_crc32.insert(game.crc32, i);
            }
            if !game.md5.is_empty() {
                by_md5.insert(game.md5.clone(), i);
            }
        }

        Self {
            games,
            by_crc32,
            by_md5,
        }
    }

    /// Look up a game by CRC32.
    pub fn find_by_crc32(&self, crc32: u32) -> Option<&GameRecord> {
        self.by_crc32.get(&crc32).map(|&i| &self.games[i])
    }

    /// Look up a game by MD5 hex string (case-insensitive).
    pub fn find_by_md5(&self, md5: &str) -> Option<&GameRecord> {
        let md5_lower = md5.to_lowercase();
        self.by_md5.get(&md5_lower).map(|&i| &self.games[i])
    }

    /// MD5 of the game with the given CRC32, or `""` if there is no such
    /// game or it has no MD5.
    pub fn md5_for_crc32(&self, crc32: u32) -> &str {
        self.find_by_crc32(crc32)
            .map(|game| game.md5.as_str())
            .unwrap_or("")
    }

    /// Number of games, duplicates included.
    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// All games in source order.
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> {
        self.games.iter()
    }

    /// Number of distinct CRC32 keys in the index.
    pub fn crc32_count(&self) -> usize {
        self.by_crc32.len()
    }

    /// Number of distinct MD5 keys in the index.
    pub fn md5_count(&self) -> usize {
        self.by_md5.len()
    }
}

impl<'a> IntoIterator for &'a Database {
    type Item = &'a GameRecord;
    type IntoIter = std::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}

#[cfg(test)]
#[path = "tests/database_tests.rs"]
mod tests;
