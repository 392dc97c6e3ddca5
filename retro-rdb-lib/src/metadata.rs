//! The RDB database as seen by the rest of the application: a file that may or
//! may not be present, loaded once and queried by checksum.

use std::path::{Path, PathBuf};

use retro_rdb::{Database, GameRecord};

/// An RDB file location plus its parsed contents, if any.
#[derive(Debug, Clone)]
pub struct MetadataStore {
    path: PathBuf,
    db: Option<Database>,
}

impl MetadataStore {
    /// Open the database at `path`.
    ///
    /// A missing file leaves the store unloaded. So does a file that cannot
    /// be read: that is logged and treated the same as no metadata.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        if !path.exists() {
            log::debug!("No RDB at {}, metadata disabled", path.display());
            return Self { path, db: None };
        }

        let db = match Database::load(&path) {
            Ok(db) => {
                log::debug!("RDB {}: {} games", path.display(), db.len());
                Some(db)
            }
            Err(e) => {
                log::warn!("Failed to load RDB {}: {}", path.display(), e);
                None
            }
        };

        Self { path, db }
    }

    /// Wrap an already-parsed database.
    pub fn from_database(path: impl Into<PathBuf>, db: Database) -> Self {
        Self {
            path: path.into(),
            db: Some(db),
        }
    }

    /// A store with no database behind it.
    pub fn unloaded(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            db: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.db.is_some()
    }

    pub fn database(&self) -> Option<&Database> {
        self.db.as_ref()
    }

    /// Look up a game by CRC32. `None` if not found or nothing is loaded.
    pub fn lookup_by_crc32(&self, crc32: u32) -> Option<&GameRecord> {
        self.db.as_ref()?.find_by_crc32(crc32)
    }

    /// MD5 for a CRC32, or `""` if unknown or nothing is loaded.
    pub fn md5_for_crc32(&self, crc32: u32) -> &str {
        self.db
            .as_ref()
            .map(|db| db.md5_for_crc32(crc32))
            .unwrap_or("")
    }
}
