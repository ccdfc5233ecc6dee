//! Word tokenization for frequency counting.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::stopwords::is_stopword;

/// Anything that is not an ASCII letter, digit, apostrophe or whitespace.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\s']").expect("static pattern"));

/// Split text into significant, lowercased word tokens.
///
/// Punctuation and non-ASCII characters become word breaks, apostrophes are
/// stripped from the token edges, and empty, all-digit or stopword tokens
/// are dropped. Input order is preserved and duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned = NON_WORD.replace_all(text, " ");

    cleaned
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .map(|word| word.trim_matches('\'').to_string())
        .filter(|word| is_significant(word))
        .collect()
}

fn is_significant(word: &str) -> bool {
    !word.is_empty() && !word.chars().all(|c| c.is_ascii_digit()) && !is_stopword(word)
}

/// Number of distinct significant tokens in the text.
pub fn unique_tokens(text: &str) -> usize {
    tokenize(text).into_iter().collect::<HashSet<_>>().len()
}

/// Raw whitespace-separated word count, before any filtering.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
