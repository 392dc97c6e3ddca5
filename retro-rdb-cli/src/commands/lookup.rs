use retro_rdb_lib::Database;

use super::print_game;
use crate::error::CliError;

/// Find one game by CRC32 or MD5 and print it.
pub(crate) fn run_lookup(
    db: &Database,
    crc: Option<u32>,
    md5: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let (game, key) = match (crc, md5) {
        (Some(crc), _) => (db.find_by_crc32(crc), format!("CRC32 {crc:08x}")),
        (None, Some(md5)) => (db.find_by_md5(md5.trim()), format!("MD5 {}", md5.trim())),
        (None, None) => return Err(CliError::other("lookup needs --crc or --md5")),
    };

    let game = game.ok_or_else(|| CliError::not_found(key))?;
    if json {
        println!("{}", serde_json::to_string_pretty(game)?);
    } else {
        print_game(game);
    }
    Ok(())
}
