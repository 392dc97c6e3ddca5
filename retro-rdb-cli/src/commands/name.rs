use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_rdb_lib::{display_name, region_hint};

/// Show the display name and region derived from each No-Intro name.
pub(crate) fn run_name(names: &[String]) {
    for name in names {
        let region = region_hint(name);
        log::info!(
            "{} \u{2192} {} {}",
            name.if_supports_color(Stdout, |t| t.dimmed()),
            display_name(name).if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", if region.is_empty() { "-" } else { region })
                .if_supports_color(Stdout, |t| t.cyan()),
        );
    }
}
