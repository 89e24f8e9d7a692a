//! Closed word tables used by the transcript pipeline.
//!
//! # Responsibility
//! - Keep every word list used by normalization, classification and date
//!   resolution in one enumerable place.
//!
//! # Invariants
//! - All entries are lowercase ASCII (except apostrophe variants).
//! - Multi-word entries use single spaces.

use chrono::Weekday;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Imperative verbs that mark the start of an independent task.
pub const ACTION_VERBS: &[&str] = &[
    "add", "apply", "arrange", "ask", "backup", "bake", "book", "bring", "buy", "call", "cancel",
    "change", "charge", "check", "clean", "clear", "collect", "complete", "confirm", "contact",
    "cook", "create", "deliver", "deploy", "do", "download", "draft", "drop", "email", "feed",
    "file", "finish", "fix", "follow", "get", "go", "grab", "install", "invite", "make", "meet",
    "message", "move", "order", "organize", "pack", "pay", "pick", "plan", "post", "prepare",
    "print", "read", "register", "remind", "renew", "reply", "research", "reserve", "respond",
    "return", "review", "schedule", "send", "set", "ship", "sign", "start", "study", "submit",
    "take", "tell", "test", "text", "update", "upload", "visit", "walk", "wash", "water", "write",
];

/// Subject pronouns; a two-word phrase led by one is rarely a command.
pub const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];

/// Words that join two task spans inside one sentence.
pub const CONJUNCTIONS: &[&str] = &["and", "also", "plus", "then"];

/// Spoken lead-ins that carry no task content.
///
/// Longer entries come first so the most specific prefix wins.
pub const FILLER_PREFIXES: &[&str] = &[
    "don't forget to",
    "don’t forget to",
    "dont forget to",
    "i need to",
    "i have to",
    "i want to",
    "i should",
    "i must",
    "remember to",
    "please",
];

/// Second-word connectors that mark a noun-phrase fragment
/// ("oranges for the trip", "milk from the store").
pub const FRAGMENT_CONNECTORS: &[&str] = &[
    "about", "at", "by", "for", "from", "in", "of", "on", "with", "without",
];

/// Weekday keywords in calendar order starting on Sunday.
pub const WEEKDAY_NAMES: &[(&str, Weekday)] = &[
    ("sunday", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
];

static ACTION_VERB_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ACTION_VERBS.iter().copied().collect());
static PRONOUN_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SUBJECT_PRONOUNS.iter().copied().collect());
static CONJUNCTION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CONJUNCTIONS.iter().copied().collect());
static CONNECTOR_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FRAGMENT_CONNECTORS.iter().copied().collect());

/// Returns whether a lowercase bare word is a known action verb.
pub fn is_action_verb(word: &str) -> bool {
    ACTION_VERB_SET.contains(word)
}

pub fn is_subject_pronoun(word: &str) -> bool {
    PRONOUN_SET.contains(word)
}

pub fn is_conjunction(word: &str) -> bool {
    CONJUNCTION_SET.contains(word)
}

pub fn is_fragment_connector(word: &str) -> bool {
    CONNECTOR_SET.contains(word)
}

/// Lowercases a token and drops surrounding punctuation.
///
/// Apostrophes inside the word are kept (`don't`).
pub fn bare_word(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '’')
        .to_lowercase()
}
