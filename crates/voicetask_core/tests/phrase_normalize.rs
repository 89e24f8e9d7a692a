use voicetask_core::normalize_phrase;

#[test]
fn collapses_whitespace_and_capitalizes() {
    assert_eq!(normalize_phrase("  buy   milk  "), "Buy milk");
    assert_eq!(normalize_phrase("buy\tmilk\n"), "Buy milk");
}

#[test]
fn strips_edge_conjunctions() {
    assert_eq!(normalize_phrase("and call mom"), "Call mom");
    assert_eq!(normalize_phrase("call mom and"), "Call mom");
    assert_eq!(normalize_phrase("THEN finish the report"), "Finish the report");
    assert_eq!(normalize_phrase("then"), "");
}

#[test]
fn strips_edge_separators() {
    assert_eq!(normalize_phrase(", email boss;"), "Email boss");
    assert_eq!(normalize_phrase(";; plus book flights ,"), "Book flights");
}

#[test]
fn strips_spoken_filler_prefixes() {
    assert_eq!(normalize_phrase("I need to pay rent"), "Pay rent");
    assert_eq!(
        normalize_phrase("don't forget to water the plants"),
        "Water the plants"
    );
    assert_eq!(normalize_phrase("please please send it"), "Send it");
    assert_eq!(normalize_phrase("Remember to"), "Remember to");
}

#[test]
fn filler_prefix_revealed_by_capitalization_is_stripped() {
    // Dotless i uppercases to ASCII `I`.
    assert_eq!(normalize_phrase("\u{131} need to pay rent"), "Pay rent");
}

#[test]
fn keeps_inner_words_untouched() {
    assert_eq!(
        normalize_phrase("pack apples and oranges for the trip"),
        "Pack apples and oranges for the trip"
    );
    assert_eq!(normalize_phrase("andrew's birthday"), "Andrew's birthday");
}

#[test]
fn normalize_is_idempotent() {
    let inputs = [
        "",
        "   ",
        "and and buy",
        ", and buy",
        "also, ; then",
        "  ;plus call Ann then ",
        "i need to",
        "i need to and, pay rent",
        "buy milk ,",
        "then and",
        "é",
        "straße fegen",
        "Call 555-0100, ext 4",
        "\u{131} need to pay rent",
        "\u{131} need to \u{131} need to",
    ];

    for input in inputs {
        let once = normalize_phrase(input);
        let twice = normalize_phrase(&once);
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

#[test]
fn output_never_has_edge_whitespace_or_separator() {
    let inputs = [" ,a", "; ; b ", "and ,c", "  d and ", "\n, e"];
    for input in inputs {
        let output = normalize_phrase(input);
        assert_eq!(output, output.trim());
        assert!(!output.starts_with([',', ';']), "{output:?}");
    }
}
