//! Sentence segmentation.

use std::sync::LazyLock;

use regex::Regex;

/// A terminator followed by the whitespace run that ends the sentence.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("static pattern"));

/// Split text into trimmed sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace; the terminator
/// stays with its sentence. Text without terminators is one sentence.
pub fn segment(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // terminators are single-byte ASCII
        push_trimmed(&mut sentences, &text[start..m.start() + 1]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_each_terminator() {
        assert_eq!(
            segment("First one. Second one! Third one? Fourth"),
            vec!["First one.", "Second one!", "Third one?", "Fourth"]
        );
    }

    #[test]
    fn needs_whitespace_after_terminator() {
        assert_eq!(segment("Version 1.2 is out. Yes"), vec!["Version 1.2 is out.", "Yes"]);
        assert_eq!(segment("e.g.this stays"), vec!["e.g.this stays"]);
    }

    #[test]
    fn newlines_break_after_terminators() {
        assert_eq!(
            segment("okay so.\nnext line\nstill same sentence!\n\nDone."),
            vec!["okay so.", "next line\nstill same sentence!", "Done."]
        );
    }

    #[test]
    fn repeated_terminators_stay_together() {
        assert_eq!(segment("Wait... what?! Fine."), vec!["Wait...", "what?!", "Fine."]);
    }

    #[test]
    fn no_terminator_is_single_sentence() {
        assert_eq!(segment("  just some words  "), vec!["just some words"]);
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(segment("").is_empty());
        assert!(segment(" \n\t ").is_empty());
    }
}
