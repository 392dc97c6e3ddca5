mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use retro_rdb_lib::settings::resolve_rdb_path;
use retro_rdb_lib::{Database, MetadataStore};

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let quiet = cli.quiet;
    let rdb = cli.rdb;

    match cli.command {
        Commands::Info => commands::info::run_info(&open_store(rdb)?),
        Commands::Lookup { crc, md5, json } => {
            let store = open_store(rdb)?;
            commands::lookup::run_lookup(require_db(&store)?, crc, md5.as_deref(), json)
        }
        Commands::Identify { files, md5, json } => {
            let store = open_store(rdb)?;
            commands::identify::run_identify(&store, &files, md5, json, quiet)
        }
        Commands::Name { names } => {
            commands::name::run_name(&names);
            Ok(())
        }
        Commands::Dump { limit, json } => {
            let store = open_store(rdb)?;
            commands::dump::run_dump(require_db(&store)?, limit, json)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(rdb),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetRdb { path } => commands::config::run_config_set_rdb(path),
            ConfigAction::ClearRdb => commands::config::run_config_clear_rdb(),
        },
    }
}

/// Resolve the RDB location and load it. A missing or unreadable file yields
/// an unloaded store.
fn open_store(rdb: Option<std::path::PathBuf>) -> Result<MetadataStore, CliError> {
    let path = resolve_rdb_path(rdb)?;
    Ok(MetadataStore::open(path))
}

fn require_db(store: &MetadataStore) -> Result<&Database, CliError> {
    store.database().ok_or_else(|| {
        CliError::database(format!(
            "No RDB loaded from {} (use --rdb or `retro-rdb config set-rdb`)",
            store.path().display()
        ))
    })
}
