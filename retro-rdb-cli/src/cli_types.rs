//! CLI type definitions: command enums and argument parsers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "retro-rdb")]
#[command(about = "Decode and query RDB game metadata databases", long_about = None)]
pub(crate) struct Cli {
    /// RDB file to use (defaults to the configured location)
    #[arg(long, global = true)]
    pub rdb: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show database location and index statistics
    Info,

    /// Look up a game by CRC32 or MD5
    Lookup {
        /// CRC32 as hex (e.g., 12345678 or 0x12345678)
        #[arg(long, value_parser = parse_crc32, required_unless_present = "md5", conflicts_with = "md5")]
        crc: Option<u32>,

        /// MD5 as 32 hex digits
        #[arg(long)]
        md5: Option<String>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Identify ROM files by checksum
    Identify {
        /// ROM files to identify
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Also hash MD5 when the database doesn't know it
        #[arg(long)]
        md5: bool,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show display name and region for No-Intro names
    Name {
        /// Names such as "Sonic the Hedgehog (USA, Europe)"
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List games in file order
    Dump {
        /// Maximum number of games to list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show settings and the resolved RDB path
    Show,

    /// Print the settings file path
    Path,

    /// Remember an RDB file location
    SetRdb {
        /// Path to the .rdb file
        path: PathBuf,
    },

    /// Forget the saved RDB location
    ClearRdb,
}

/// Parse a CRC32 given as hex, with or without a `0x` prefix.
pub(crate) fn parse_crc32(s: &str) -> Result<u32, String> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() || digits.len() > 8 {
        return Err(format!("'{s}' is not a CRC32 (expected up to 8 hex digits)"));
    }
    u32::from_str_radix(digits, 16).map_err(|e| format!("'{s}' is not a CRC32: {e}"))
}
