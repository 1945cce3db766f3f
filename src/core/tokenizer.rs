//! Word normalization and tokenization.
//!
//! Text is lowercased, trimmed, every run of characters outside
//! `[a-z-\n ]` becomes a single space, and whitespace is collapsed until the
//! string stops shrinking. The result is split on single spaces.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of anything that is not a lowercase ASCII letter, a hyphen,
/// a newline or a space.
static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z\-\n ]+").expect("valid separator regex"));

/// Split raw text into normalized word tokens.
///
/// Every returned token matches `[a-z-]*`. Input that normalizes to nothing
/// yields a single empty token, which callers count like any other word.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let replaced = SEPARATOR_RUN.replace_all(lowered.trim(), " ");
    let collapsed = collapse_spaces(replaced.into_owned());

    collapsed
        .trim_matches(' ')
        .split(' ')
        .map(str::to_owned)
        .collect()
}

/// Fold newlines into spaces and halve double spaces, pass after pass, until a
/// pass no longer shortens the string.
fn collapse_spaces(mut text: String) -> String {
    loop {
        let before = text.len();
        text = text.replace('\n', " ").replace("  ", " ");
        if text.len() >= before {
            return text;
        }
    }
}
