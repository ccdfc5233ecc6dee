//! English stopwords excluded from frequency analysis.

use std::collections::HashSet;
use std::sync::LazyLock;

const ENGLISH: &[&str] = &[
    "a", "an", "and", "the", "this", "that", "those", "these", "to", "of", "for", "from", "on",
    "in", "with", "as", "at", "by", "it", "its", "be", "is", "are", "was", "were", "am", "been",
    "being", "do", "does", "did", "doing", "have", "has", "had", "having", "i", "you", "he",
    "she", "they", "we", "him", "her", "them", "us", "our", "your", "their", "my", "mine",
    "yours", "his", "hers", "theirs", "myself", "yourself", "themselves", "itself", "ourselves",
    "about", "above", "after", "again", "against", "all", "also", "among", "around", "because",
    "before", "below", "between", "both", "but", "can", "cannot", "could", "down", "during",
    "each", "few", "further", "here", "how", "if", "into", "more", "most", "no", "nor", "not",
    "only", "other", "out", "over", "own", "same", "should", "so", "some", "such", "than",
    "then", "there", "through", "too", "under", "until", "up", "very", "what", "when", "where",
    "which", "who", "whom", "why", "will", "would",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH.iter().copied().collect());

/// Check if a word is a stopword, ignoring case.
pub fn is_stopword(word: &str) -> bool {
    if word.chars().any(char::is_uppercase) {
        STOP_WORDS.contains(word.to_lowercase().as_str())
    } else {
        STOP_WORDS.contains(word)
    }
}
