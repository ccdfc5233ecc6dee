//! Extractive summary selection.

use std::collections::HashSet;

use tracing::debug;

use super::scoring::score;
use super::sentences::segment;
use crate::config::SummaryConfig;

/// Prefix carried by every summary bullet.
pub const BULLET: &str = "• ";

/// Characters of a sentence compared when skipping near-duplicates.
const SIGNATURE_CHARS: usize = 40;

/// Pick up to `k` of the highest scoring sentences as bullets.
///
/// Sentences shorter than `min_len` or longer than `max_len` characters are
/// skipped, as is any sentence whose lowercased first 40 characters match an
/// already chosen bullet. If that filtering leaves nothing, the first `k`
/// sentences are returned unfiltered instead.
pub fn select_bullets(text: &str, k: usize, min_len: usize, max_len: usize) -> Vec<String> {
    debug_assert!(min_len <= max_len, "min_len must not exceed max_len");

    let sentences = segment(text);
    let ranked = score(&sentences);

    let mut bullets = Vec::new();
    let mut used = HashSet::new();

    for scored in &ranked {
        if bullets.len() >= k {
            break;
        }
        let len = scored.text.chars().count();
        if len < min_len || len > max_len {
            continue;
        }
        if !used.insert(signature(scored.text)) {
            continue;
        }
        bullets.push(format!("{BULLET}{}", scored.text));
    }

    if bullets.is_empty() && !sentences.is_empty() {
        debug!(
            sentences = sentences.len(),
            "no sentence passed the length filter, using leading sentences"
        );
        bullets = sentences
            .iter()
            .take(k)
            .map(|s| format!("{BULLET}{s}"))
            .collect();
    }

    debug!(
        sentences = sentences.len(),
        scored = ranked.len(),
        bullets = bullets.len(),
        "selected summary bullets"
    );
    bullets
}

/// [`select_bullets`] with bounds taken from a [`SummaryConfig`].
pub fn summarize(text: &str, config: &SummaryConfig) -> Vec<String> {
    select_bullets(text, config.bullets, config.min_len, config.max_len)
}

fn signature(sentence: &str) -> String {
    sentence
        .chars()
        .take(SIGNATURE_CHARS)
        .collect::<String>()
        .to_lowercase()
}
