use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::{
    analysis::{summarize, top_keywords, unique_tokens, word_count},
    config::ReportConfig,
    error::Result,
    types::{QuickReport, Transcript, VideoMeta},
};

/// Run keyword ranking and summary selection over a transcript
pub fn build_report(
    transcript: &Transcript,
    video_id: Option<String>,
    meta: Option<VideoMeta>,
    config: &ReportConfig,
) -> QuickReport {
    let text = transcript.plain_text();

    let report = QuickReport {
        video_id,
        meta,
        language: transcript.language.clone(),
        word_count: word_count(&text),
        unique_words: unique_tokens(&text),
        segment_count: transcript.segments.len(),
        keywords: top_keywords(&text, config.top_keywords),
        bullets: summarize(&text, &config.summary),
    };

    debug!(
        words = report.word_count,
        unique = report.unique_words,
        keywords = report.keywords.len(),
        bullets = report.bullets.len(),
        "built report"
    );
    report
}

/// Save a report to a file as JSON
pub async fn save_report(report: &QuickReport, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(report)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}
