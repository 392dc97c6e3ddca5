use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_rdb_lib::{Database, GameRecord};

use crate::error::CliError;

/// List games in file order, optionally capped at `limit`.
pub(crate) fn run_dump(db: &Database, limit: Option<usize>, json: bool) -> Result<(), CliError> {
    let games: Vec<&GameRecord> = db.iter().take(limit.unwrap_or(usize::MAX)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&games)?);
        return Ok(());
    }

    for (i, game) in games.iter().enumerate() {
        let md5 = if game.md5.is_empty() { "-" } else { &game.md5 };
        log::info!(
            "{:>6}  {}  {}  {}",
            i,
            format!("{:08x}", game.crc32).if_supports_color(Stdout, |t| t.cyan()),
            md5.if_supports_color(Stdout, |t| t.dimmed()),
            game.name,
        );
    }

    if games.len() < db.count() {
        log::info!(
            "{}",
            format!("... {} of {} games shown", games.len(), db.count())
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
