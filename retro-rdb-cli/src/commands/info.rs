use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_rdb_lib::MetadataStore;

use super::format_bytes;
use crate::error::CliError;

/// Show where the database lives and how much it holds.
pub(crate) fn run_info(store: &MetadataStore) -> Result<(), CliError> {
    let path = store.path();
    log::info!(
        "{} {}",
        "RDB:".if_supports_color(Stdout, |t| t.bold()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let Some(db) = store.database() else {
        return Err(CliError::database(format!(
            "nothing loaded from {}",
            path.display()
        )));
    };

    let size = std::fs::metadata(path)?.len();
    log::info!("  File size:   {}", format_bytes(size));
    log::info!("  Games:       {}", db.count());
    log::info!("  CRC32 keys:  {}", db.crc32_count());
    log::info!("  MD5 keys:    {}", db.md5_count());

    let shadowed = db.count().saturating_sub(db.crc32_count());
    if shadowed > 0 {
        log::info!(
            "  {}",
            format!("{shadowed} games share a CRC32 with a later entry")
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
