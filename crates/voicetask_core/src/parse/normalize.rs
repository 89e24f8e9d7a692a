//! Phrase cleanup for task titles.
//!
//! # Responsibility
//! - Turn a raw transcript span into a display-ready task phrase.
//!
//! # Invariants
//! - `normalize_phrase(normalize_phrase(x)) == normalize_phrase(x)`.
//! - Output has no leading/trailing whitespace and never starts with
//!   `,` or `;`.
//! - Internal whitespace runs are collapsed to one space.

use crate::parse::lexicon::{bare_word, is_conjunction, FILLER_PREFIXES};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const EDGE_SEPARATORS: &[char] = &[',', ';'];

/// Normalizes one phrase.
///
/// Strip steps (leading/trailing conjunction, filler prefix, edge
/// separators) and first-character capitalization are applied together
/// until nothing changes.
pub fn normalize_phrase(phrase: &str) -> String {
    let mut current = collapse_whitespace(phrase);
    loop {
        // Uppercasing can turn a non-ASCII first letter into an ASCII one
        // that completes a filler prefix, so it runs inside the loop.
        let next = capitalize_first(&strip_pass(&current));
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Collapses whitespace runs and trims both ends.
pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}

fn strip_pass(value: &str) -> String {
    let value = strip_leading_conjunction(value);
    let value = strip_trailing_conjunction(value);
    let value = strip_filler_prefix(value);
    value
        .trim_start_matches(EDGE_SEPARATORS)
        .trim_end_matches(EDGE_SEPARATORS)
        .trim()
        .to_string()
}

fn strip_leading_conjunction(value: &str) -> &str {
    let (first, rest) = value.split_once(' ').unwrap_or((value, ""));
    if is_conjunction(&bare_word(first)) {
        rest
    } else {
        value
    }
}

fn strip_trailing_conjunction(value: &str) -> &str {
    let (rest, last) = value.rsplit_once(' ').unwrap_or(("", value));
    if is_conjunction(&bare_word(last)) {
        rest
    } else {
        value
    }
}

fn strip_filler_prefix(value: &str) -> &str {
    for prefix in FILLER_PREFIXES {
        let len = prefix.len();
        if value.len() > len
            && value.is_char_boundary(len)
            && value[..len].eq_ignore_ascii_case(prefix)
            && value[len..].starts_with(' ')
        {
            return &value[len + 1..];
        }
    }
    value
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
