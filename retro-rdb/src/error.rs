/// Errors that can occur while loading an RDB file.
///
/// Only reading the file can fail. Truncated or corrupt content is not an
/// error: parsing stops early and returns the records decoded so far.
#[derive(Debug, thiserror::Error)]
pub enum RdbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
