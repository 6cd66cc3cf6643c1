//! Reply sanitizing: drop repeated lines

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static ENUMERATION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.\s*").unwrap());

/// Removes blank lines and lines repeating an earlier one.
///
/// Lines are compared with any leading `N.` enumeration stripped and surrounding
/// whitespace trimmed; the first occurrence is kept verbatim. Empty or
/// whitespace-only input is returned unchanged.
pub fn dedupe_lines(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if seen.insert(comparison_key(line)) {
            kept.push(line);
        }
    }

    kept.join("\n")
}

fn comparison_key(line: &str) -> String {
    ENUMERATION_PREFIX.replace(line, "").trim().to_string()
}
