//! Helpers for No-Intro style game names.

/// Strip region/version groups from a No-Intro name.
///
/// Everything from the first `" ("` onward is removed, as long as some text
/// precedes it. `"Zillion (Japan) (Rev 2)"` becomes `"Zillion"`; a name that
/// starts with a parenthesis is returned unchanged.
pub fn display_name(name: &str) -> &str {
    match name.find(" (") {
        Some(pos) if pos > 0 => name[..pos].trim_end(),
        _ => name,
    }
}

/// Guess a region code (`"us"`, `"eu"`, `"jp"`) from a No-Intro name.
///
/// Checks run in a fixed order: USA, then Europe, then Japan, then
/// multi-region/world markers. A name tagged `(Europe, Japan)` therefore
/// resolves to `"eu"`. Returns `""` when nothing matches.
pub fn region_hint(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    let has_any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if has_any(&["(usa", "(us)", ", usa)"]) {
        "us"
    } else if has_any(&["(europe", "(eu)", ", europe)"]) {
        "eu"
    } else if has_any(&["(japan", "(jp)", ", japan)"]) {
        "jp"
    } else if has_any(&["(usa, europe)", "(world)"]) {
        "us"
    } else {
        ""
    }
}

#[cfg(test)]
#[path = "tests/names_tests.rs"]
mod tests;
