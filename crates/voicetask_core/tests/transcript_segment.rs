use std::collections::HashSet;
use voicetask_core::{normalize_phrase, segment_optional, segment_transcript};

#[test]
fn splits_on_action_verbs() {
    assert_eq!(
        segment_transcript("Buy groceries and call mom then finish the report."),
        vec!["Buy groceries", "Call mom", "Finish the report"]
    );
}

#[test]
fn keeps_conjunction_inside_single_task() {
    assert_eq!(
        segment_transcript("Pack apples and oranges for the trip."),
        vec!["Pack apples and oranges for the trip"]
    );
    assert_eq!(
        segment_transcript("Buy bread and milk and call the bank"),
        vec!["Buy bread and milk", "Call the bank"]
    );
}

#[test]
fn blank_transcripts_yield_nothing() {
    assert!(segment_transcript("").is_empty());
    assert!(segment_transcript("   \n\t").is_empty());
    assert!(segment_transcript("  ... !! ; ").is_empty());
    assert!(segment_optional(None).is_empty());
}

#[test]
fn transcript_without_separators_is_one_phrase() {
    assert_eq!(segment_transcript("walk   the dog"), vec!["Walk the dog"]);
    assert_eq!(
        segment_optional(Some("walk the dog")),
        vec!["Walk the dog"]
    );
}

#[test]
fn sentences_are_processed_in_order() {
    assert_eq!(
        segment_transcript("Email the landlord; book flights! Pay rent tomorrow."),
        vec!["Email the landlord", "Book flights", "Pay rent tomorrow"]
    );
}

#[test]
fn duplicates_keep_first_occurrence() {
    assert_eq!(
        segment_transcript("buy milk. call Ann. Buy milk!"),
        vec!["Buy milk", "Call Ann"]
    );
}

#[test]
fn first_non_task_span_opens_the_list() {
    assert_eq!(
        segment_transcript("groceries and call mom"),
        vec!["Groceries", "Call mom"]
    );
}

#[test]
fn separators_are_case_insensitive() {
    assert_eq!(
        segment_transcript("Wash the car AND walk the dog PLUS feed the cat"),
        vec!["Wash the car", "Walk the dog", "Feed the cat"]
    );
}

#[test]
fn comma_lists_of_tasks_are_expanded() {
    assert_eq!(
        segment_transcript("call Ann, email Bob and then pay rent"),
        vec!["Call Ann", "Email Bob", "Pay rent"]
    );
}

#[test]
fn comma_inside_address_is_kept() {
    assert_eq!(
        segment_transcript("123 Main St, Suite 4"),
        vec!["123 Main St, Suite 4"]
    );
    assert_eq!(
        segment_transcript("Buy milk, eggs, and bread"),
        vec!["Buy milk, eggs, and bread"]
    );
}

#[test]
fn filler_prefixes_do_not_block_splitting() {
    assert_eq!(
        segment_transcript("I need to call the vet and don't forget to pay rent"),
        vec!["Call the vet", "Pay rent"]
    );
}

#[test]
fn output_is_normalized_non_empty_and_unique() {
    let transcripts = [
        "and. then! plus; also",
        "buy milk and buy milk and BUY MILK",
        ", , call Ann , , email Bob ,",
        "he said and she said then they left",
        "Fix the sink and and and call the plumber.",
        "Review the PR, merge it; deploy, then celebrate!",
    ];

    for transcript in transcripts {
        let phrases = segment_transcript(transcript);
        let unique = phrases.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), phrases.len(), "duplicates in {phrases:?}");
        for phrase in &phrases {
            assert!(!phrase.trim().is_empty());
            assert_eq!(&normalize_phrase(phrase), phrase);
        }
    }
}

#[test]
fn segmentation_is_restartable() {
    let transcript = "Buy groceries and call mom then finish the report.";
    assert_eq!(segment_transcript(transcript), segment_transcript(transcript));
}
