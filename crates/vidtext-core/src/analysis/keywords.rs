//! Keyword frequency ranking.

use std::collections::HashMap;

use super::tokenizer::tokenize;
use crate::types::Keyword;

/// Token counts in order of first occurrence.
pub(crate) fn frequency_table(tokens: &[String]) -> Vec<(&str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for token in tokens {
        match index.get(token.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push((token.as_str(), 1));
            }
        }
    }

    counts
}

/// The `n` most frequent tokens in `text`.
///
/// Sorted by count descending; equal counts keep first-seen order.
pub fn top_keywords(text: &str, n: usize) -> Vec<Keyword> {
    if n == 0 {
        return Vec::new();
    }

    let tokens = tokenize(text);
    let mut counts = frequency_table(&tokens);
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(n)
        .map(|(word, count)| Keyword {
            word: word.to_string(),
            count,
        })
        .collect()
}
