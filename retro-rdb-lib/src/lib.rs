//! Application layer around the RDB decoder: where the database lives, how
//! ROM files are hashed, and how a scanned file picks up metadata.

pub mod error;
pub mod hasher;
pub mod library;
pub mod metadata;
pub mod settings;

pub use error::MetadataError;
pub use hasher::RomHashes;
pub use library::{IdentifyOptions, LibraryEntry, identify_bytes, identify_file};
pub use metadata::MetadataStore;
pub use settings::AppSettings;

pub use retro_rdb::{Database, GameRecord, display_name, region_hint};
