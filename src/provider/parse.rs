//! Parser for `gulp --tasks-simple` output
//!
//! Gulp prints one task name per line. Anything else that ends up on stdout
//! (timestamped gulp-cli log lines, node and npm warnings, colour codes) is
//! dropped. Task names may contain spaces, so a line is only rejected when
//! it matches a known noise pattern.

use once_cell::sync::Lazy;
use regex::Regex;

/// ANSI colour/style escape sequences
static ANSI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").unwrap());

/// Lines that are never task names
///
/// - `[12:00:00] Using gulpfile ...` gulp-cli log lines
/// - `(node:1234) DeprecationWarning: ...`
/// - `npm WARN ...`, `npm notice ...`, `npm ERR! ...`
/// - `--tasks` tree output (`├── build`, `└─┬ default`)
static NOISE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\[\d{1,2}:\d{2}:\d{2}\]|\(node:\d+\)|npm (?:WARN|notice|ERR!)|[├└│┌┬─])")
        .unwrap()
});

/// Extract task names from gulp's task listing, in the order gulp printed them
pub fn parse_tasks(output: &str) -> Vec<String> {
    let mut tasks = Vec::new();

    for raw in output.lines() {
        let line = ANSI_RE.replace_all(raw, "");
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if NOISE_RE.is_match(line) {
            tracing::debug!("Skipping non-task line: {}", line);
            continue;
        }

        tasks.push(line.to_string());
    }

    tasks
}
