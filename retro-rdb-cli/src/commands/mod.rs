pub(crate) mod config;
pub(crate) mod dump;
pub(crate) mod identify;
pub(crate) mod info;
pub(crate) mod lookup;
pub(crate) mod name;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_rdb_lib::GameRecord;

/// Print one record as an indented block of labelled lines.
pub(crate) fn print_game(game: &GameRecord) {
    log::info!("{}", game.name.if_supports_color(Stdout, |t| t.bold()));
    print_field("Description", &game.description);
    print_field("Genre", &game.genre);
    print_field("Developer", &game.developer);
    print_field("Publisher", &game.publisher);
    print_field("Franchise", &game.franchise);
    print_field("ESRB", &game.esrb_rating);
    print_field("Serial", &game.serial);
    print_field("ROM name", &game.rom_name);
    if let Some(date) = game.release_date() {
        print_field("Released", &date);
    }
    if game.size > 0 {
        print_field("Size", &format_bytes(game.size));
    }
    print_field("CRC32", &format!("{:08x}", game.crc32));
    print_field("MD5", &game.md5);
}

/// Print `label: value`, skipping empty values.
pub(crate) fn print_field(label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let label = format!("{:<12}", format!("{label}:"));
    log::info!(
        "  {} {}",
        label.if_supports_color(Stdout, |t| t.cyan()),
        value
    );
}

pub(crate) fn format_bytes(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{} MB", bytes / (1024 * 1024))
    } else if bytes >= 1024 {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}
