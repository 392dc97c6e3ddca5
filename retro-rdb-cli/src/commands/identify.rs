use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_rdb_lib::{IdentifyOptions, LibraryEntry, MetadataStore, identify_file};

use super::print_field;
use crate::error::CliError;

/// Hash each file, look it up, and print what was found.
pub(crate) fn run_identify(
    store: &MetadataStore,
    files: &[PathBuf],
    md5: bool,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    if !store.is_loaded() {
        log::warn!(
            "No RDB loaded from {}, names will come from file names only",
            store.path().display()
        );
    }

    let options = IdentifyOptions { compute_md5: md5 };
    let pb = (files.len() > 1 && !quiet).then(|| {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
                .expect("static pattern")
                .progress_chars("=> "),
        );
        pb
    });

    let mut entries = Vec::with_capacity(files.len());
    let mut failed = 0usize;
    for path in files {
        if let Some(pb) = &pb {
            let file_name = path.file_name().unwrap_or_default().to_string_lossy();
            pb.set_message(format!("Hashing {file_name}"));
        }
        match identify_file(path, store, options) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                failed += 1;
                let warn = || log::warn!("{}: {}", path.display(), e);
                match &pb {
                    Some(pb) => pb.suspend(warn),
                    None => warn(),
                }
            }
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            print_entry(entry);
        }
        let matched = entries.iter().filter(|e| e.matched).count();
        log::info!("");
        log::info!(
            "{} matched, {} unmatched",
            matched.if_supports_color(Stdout, |t| t.green()),
            (entries.len() - matched).if_supports_color(Stdout, |t| t.yellow()),
        );
    }

    if failed > 0 {
        return Err(CliError::other(format!(
            "{failed} of {} files could not be read",
            files.len()
        )));
    }
    Ok(())
}

fn print_entry(entry: &LibraryEntry) {
    if entry.matched {
        log::info!(
            "{} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            entry.display_name.if_supports_color(Stdout, |t| t.bold()),
        );
    } else {
        log::info!(
            "{} {}",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            entry.display_name,
        );
    }
    print_field("File", &entry.file.display().to_string());
    if entry.name != entry.display_name {
        print_field("Name", &entry.name);
    }
    print_field("Region", &entry.region);
    print_field("Publisher", &entry.publisher);
    print_field("Released", &entry.release_date);
    print_field("CRC32", &entry.crc32);
    print_field("MD5", &entry.md5);
}
