//! Logger setup. Normal command output goes through `log::info!`, so the
//! default format prints info lines bare and prefixes only problems.

use std::io::Write;

use log::{Level, LevelFilter};

/// Install the global logger. `RUST_LOG` overrides the level chosen here.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis().format_target(true);
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(buf, "warning: {}", record.args()),
            Level::Error => writeln!(buf, "error: {}", record.args()),
            _ => writeln!(buf, "[{}] {}", record.level(), record.args()),
        });
    }

    // A second init (tests) is harmless.
    let _ = builder.try_init();
}
