use answerdoc_core::filename::{DEFAULT_FILENAME, MAX_FILENAME_CHARS, derive_filename};

#[test]
fn title_is_preferred() {
    assert_eq!(derive_filename("# My Title\nbody"), "My_Title");
}

#[test]
fn title_anywhere_wins_over_first_line() {
    assert_eq!(derive_filename("Intro line\n\n# Real Title"), "Real_Title");
}

#[test]
fn first_line_when_no_title() {
    assert_eq!(derive_filename("no heading here"), "no_heading_here");
    assert_eq!(derive_filename("\n\n  first line\nsecond"), "first_line");
}

#[test]
fn runs_of_non_word_characters_collapse() {
    assert_eq!(derive_filename("What's up?? (2024)"), "What_s_up_2024_");
    assert_eq!(derive_filename("keep_under_scores"), "keep_under_scores");
}

#[test]
fn subheading_is_not_a_title() {
    assert_eq!(derive_filename("## Section\ntext"), "_Section");
}

#[test]
fn capped_at_fifty_characters() {
    let long = "a".repeat(80);
    let name = derive_filename(&long);
    assert_eq!(name.chars().count(), MAX_FILENAME_CHARS);
}

#[test]
fn empty_or_symbol_only_falls_back() {
    assert_eq!(derive_filename(""), DEFAULT_FILENAME);
    assert_eq!(derive_filename("   \n  "), DEFAULT_FILENAME);
    assert_eq!(derive_filename("# "), "_");
}
