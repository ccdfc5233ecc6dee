//! Frequency-weighted sentence scoring.

use std::collections::HashMap;

use super::tokenizer::tokenize;

/// Damps the length penalty so keyword-dense longer sentences can outrank
/// short ones carrying a single common word.
const LENGTH_EXPONENT: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSentence<'a> {
    pub text: &'a str,
    pub score: f64,
}

/// Score sentences by the global frequency of their tokens.
///
/// Returns sentences sorted by score, highest first; equal scores keep their
/// original order. Sentences without any significant token are left out.
pub fn score<'a>(sentences: &[&'a str]) -> Vec<ScoredSentence<'a>> {
    let all_tokens = tokenize(&sentences.join(" "));
    if all_tokens.is_empty() {
        return Vec::new();
    }

    let mut freqs: HashMap<String, usize> = HashMap::new();
    for token in all_tokens {
        *freqs.entry(token).or_insert(0) += 1;
    }

    let mut scored: Vec<ScoredSentence<'a>> = sentences
        .iter()
        .filter_map(|&text| {
            let tokens = tokenize(text);
            if tokens.is_empty() {
                return None;
            }
            let weight: usize = tokens
                .iter()
                .map(|t| freqs.get(t).copied().unwrap_or(0))
                .sum();
            let score = weight as f64 / (tokens.len() as f64).powf(LENGTH_EXPONENT);
            Some(ScoredSentence { text, score })
        })
        .collect();

    // sort_by is stable: ties keep sentence order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
