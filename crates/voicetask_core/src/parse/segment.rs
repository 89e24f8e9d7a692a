//! Transcript segmentation into task phrases.
//!
//! # Responsibility
//! - Split one free-form transcript into ordered, independent task phrases.
//! - Decide merge-vs-split for conjunction and comma separated spans.
//!
//! # Invariants
//! - Output entries are normalized, non-empty and unique (first wins).
//! - No state survives between calls; every stage returns a new sequence.
//!
//! # Pipeline
//! sentence split -> conjunction split -> merge fold -> comma expansion
//! -> finalize (normalize, drop empty, dedupe)

use crate::parse::classify::is_likely_task;
use crate::parse::lexicon::CONJUNCTIONS;
use crate::parse::normalize::normalize_phrase;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static SENTENCE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!;]+").expect("valid sentence regex"));
static CONJUNCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\s+(?:{})\s+", CONJUNCTIONS.join("|")))
        .expect("valid conjunction regex")
});

/// Joiner used when a non-task span is folded into the previous candidate.
const MERGE_JOINER: &str = " and ";

/// A span under evaluation; never leaves this module.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    text: String,
    looks_like_task: bool,
}

impl Candidate {
    fn new(text: impl Into<String>, looks_like_task: bool) -> Self {
        Self {
            text: text.into(),
            looks_like_task,
        }
    }
}

/// Splits a transcript into ordered task phrases.
///
/// Blank input yields an empty list. Input without separators yields the
/// whole normalized transcript as a single phrase.
pub fn segment_transcript(transcript: &str) -> Vec<String> {
    let candidates = split_sentences(transcript)
        .into_iter()
        .flat_map(|sentence| fold_conjunction_spans(split_conjunctions(sentence)))
        .flat_map(expand_commas)
        .collect::<Vec<_>>();
    finalize(candidates)
}

/// Same as [`segment_transcript`], treating a missing transcript as empty.
pub fn segment_optional(transcript: Option<&str>) -> Vec<String> {
    transcript.map(segment_transcript).unwrap_or_default()
}

fn split_sentences(transcript: &str) -> Vec<&str> {
    SENTENCE_BREAK_RE
        .split(transcript)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

fn split_conjunctions(sentence: &str) -> Vec<&str> {
    CONJUNCTION_RE
        .split(sentence)
        .map(str::trim)
        .filter(|span| !span.is_empty())
        .collect()
}

/// Folds conjunction spans of one sentence into candidates.
///
/// A span that does not classify as a task is appended onto the previous
/// candidate; with no previous candidate it opens the list.
fn fold_conjunction_spans(spans: Vec<&str>) -> Vec<Candidate> {
    if let [only] = spans.as_slice() {
        return vec![Candidate::new(*only, true)];
    }

    spans.into_iter().fold(Vec::new(), |mut acc, span| {
        let normalized = normalize_phrase(span);
        if normalized.is_empty() {
            return acc;
        }
        let looks_like_task = is_likely_task(&normalized);
        if !looks_like_task {
            if let Some(previous) = acc.last_mut() {
                previous.text.push_str(MERGE_JOINER);
                previous.text.push_str(span);
                return acc;
            }
        }
        acc.push(Candidate::new(span, looks_like_task));
        acc
    })
}

/// Replaces a candidate with its comma pieces when at least two pieces
/// classify as tasks on their own ("call Ann, email Bob"); otherwise keeps
/// it intact ("123 Main St, Suite 4").
fn expand_commas(candidate: Candidate) -> Vec<Candidate> {
    let pieces = candidate
        .text
        .split(',')
        .map(normalize_phrase)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let looks_like_task = is_likely_task(&piece);
            Candidate::new(piece, looks_like_task)
        })
        .collect::<Vec<_>>();

    let task_pieces = pieces.iter().filter(|piece| piece.looks_like_task).count();
    if pieces.len() > 1 && task_pieces >= 2 {
        pieces
    } else {
        vec![candidate]
    }
}

fn finalize(candidates: Vec<Candidate>) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .map(|candidate| normalize_phrase(&candidate.text))
        .filter(|phrase| !phrase.is_empty())
        .filter(|phrase| seen.insert(phrase.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{expand_commas, fold_conjunction_spans, split_conjunctions, Candidate};

    #[test]
    fn conjunction_split_drops_separators_case_insensitively() {
        assert_eq!(
            split_conjunctions("wash the car AND walk the dog Then sleep"),
            vec!["wash the car", "walk the dog", "sleep"]
        );
    }

    #[test]
    fn fold_keeps_leading_non_task_span() {
        let candidates = fold_conjunction_spans(vec!["it", "call mom"]);
        assert_eq!(
            candidates,
            vec![
                Candidate::new("it", false),
                Candidate::new("call mom", true),
            ]
        );
    }

    #[test]
    fn fold_merges_fragment_onto_previous() {
        let candidates = fold_conjunction_spans(vec!["buy apples", "oranges"]);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "buy apples and oranges");
    }

    #[test]
    fn comma_expansion_needs_two_task_pieces() {
        let kept = expand_commas(Candidate::new("123 Main St, Suite 4", true));
        assert_eq!(kept.len(), 1);

        let split = expand_commas(Candidate::new("call Ann, email Bob", true));
        let texts = split.into_iter().map(|c| c.text).collect::<Vec<_>>();
        assert_eq!(texts, vec!["Call Ann", "Email Bob"]);
    }
}
