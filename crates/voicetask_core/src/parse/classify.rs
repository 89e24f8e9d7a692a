//! Task-likelihood heuristic for normalized phrases.
//!
//! # Responsibility
//! - Decide whether a phrase reads as an independent, actionable item.
//!
//! # Invariants
//! - Pure and total: every string input yields a boolean.
//! - Rules are evaluated in a fixed order; the first match wins.

use crate::parse::lexicon::{bare_word, is_action_verb, is_fragment_connector, is_subject_pronoun};

/// Phrases shorter than this (in characters) are never tasks.
pub const MIN_TASK_CHARS: usize = 3;

/// Returns whether `phrase` looks like an independently actionable task.
///
/// Rule order:
/// 1. fewer than [`MIN_TASK_CHARS`] characters -> `false`
/// 2. first word is an action verb -> `true`
/// 3. first word starts with a digit, or the second word is a connector
///    such as `for`/`from`/`with` -> `false` (address or noun fragment)
/// 4. three or more words -> `true`
/// 5. two or more words and the first word is not a subject pronoun -> `true`
/// 6. otherwise -> `false`
pub fn is_likely_task(phrase: &str) -> bool {
    let phrase = phrase.trim();
    if phrase.chars().count() < MIN_TASK_CHARS {
        return false;
    }

    let words: Vec<&str> = phrase.split_whitespace().collect();
    let Some(first_token) = words.first() else {
        return false;
    };
    let first = bare_word(first_token);

    if is_action_verb(&first) {
        return true;
    }

    if looks_like_fragment(first_token, words.get(1).copied()) {
        return false;
    }

    if words.len() >= 3 {
        return true;
    }

    words.len() >= 2 && !is_subject_pronoun(&first)
}

fn looks_like_fragment(first_token: &str, second_token: Option<&str>) -> bool {
    if first_token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return true;
    }
    second_token.is_some_and(|token| is_fragment_connector(&bare_word(token)))
}
