use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_rdb_lib::settings::{self, load_settings, resolve_rdb_path_with, save_settings};

use crate::error::CliError;

/// Show the settings file and where the RDB will be read from.
pub(crate) fn run_config_show(rdb_override: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings::settings_path();
    let current = load_settings();

    log::info!(
        "{}",
        "retro-rdb Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    let status = if path.exists() { "(exists)" } else { "(not found)" };
    log::info!(
        "  Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status.if_supports_color(Stdout, |t| t.dimmed()),
    );

    match &current.database.path {
        Some(p) => log::info!(
            "  Saved RDB:     {}",
            p.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "  Saved RDB:     {}",
            "(not set)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }

    let source = if rdb_override.is_some() {
        "--rdb"
    } else if current
        .database
        .path
        .as_ref()
        .is_some_and(|p| !p.as_os_str().is_empty())
    {
        "settings"
    } else {
        "default"
    };
    let resolved = resolve_rdb_path_with(rdb_override, &current)?;
    if resolved.is_file() {
        log::info!(
            "  Using RDB:     {} {}",
            resolved.display().if_supports_color(Stdout, |t| t.cyan()),
            format!("({source})").if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Using RDB:     {} {}",
            resolved.display().if_supports_color(Stdout, |t| t.cyan()),
            format!("({source}, missing)").if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings::settings_path().display());
    Ok(())
}

/// Save an RDB location to the settings file.
pub(crate) fn run_config_set_rdb(path: PathBuf) -> Result<(), CliError> {
    let path = std::path::absolute(&path)?;
    if !path.is_file() {
        log::warn!("{} does not exist yet", path.display());
    }

    let mut current = load_settings();
    current.database.path = Some(path.clone());
    save_settings(&current)?;

    log::info!(
        "{} RDB path set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Remove the saved RDB location.
pub(crate) fn run_config_clear_rdb() -> Result<(), CliError> {
    let mut current = load_settings();
    if current.database.path.take().is_none() {
        log::info!("No RDB path saved");
        return Ok(());
    }
    save_settings(&current)?;

    log::info!(
        "{} RDB path cleared",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}
