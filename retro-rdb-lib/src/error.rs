use thiserror::Error;

/// Errors from the metadata layer.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// I/O error while reading a ROM or settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The RDB file could not be loaded
    #[error("RDB error: {0}")]
    Rdb(#[from] retro_rdb::RdbError),

    /// Settings could not be serialized
    #[error("Settings error: {0}")]
    Settings(String),

    /// No usable location for the database
    #[error("Path error: {0}")]
    Path(String),
}

impl MetadataError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    pub fn path(msg: impl Into<String>) -> Self {
        Self::Path(msg.into())
    }
}
