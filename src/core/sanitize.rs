// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Collapse any run of blank lines down to exactly one.
pub fn collapse_blank_lines(s: &str) -> String {
    BLANK_RUNS.replace_all(s, "\n\n").into_owned()
}
