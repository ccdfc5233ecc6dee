use crate::{
    config::ReportConfig,
    types::{Keyword, QuickReport},
};

/// Placeholder printed when a section has nothing to show
const EMPTY: &str = "—";

/// Format seconds as H:MM:SS, or M:SS for videos under an hour
pub fn seconds_to_hms(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Format an integer with comma thousands separators
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }
    output
}

/// Format the first `shown` keywords as `word (count)`, comma separated
pub fn format_keywords(keywords: &[Keyword], shown: usize) -> String {
    if keywords.is_empty() || shown == 0 {
        return EMPTY.to_string();
    }
    keywords
        .iter()
        .take(shown)
        .map(|k| format!("{} ({})", k.word, k.count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a quick report as human-readable markdown
pub fn format_report_readable(report: &QuickReport, config: &ReportConfig) -> String {
    let mut output = String::new();

    // Header and video meta
    match &report.meta {
        Some(meta) => {
            output.push_str(&format!("### {}\n\n", meta.title));
            output.push_str(&format!("**Channel:** {}\n", meta.author));
            if let Some(length) = meta.length_s {
                output.push_str(&format!("**Length:** {}\n", seconds_to_hms(length)));
            }
            if let Some(views) = meta.views {
                output.push_str(&format!("**Views:** {}\n", format_thousands(views)));
            }
            if let Some(date) = &meta.publish_date {
                let day: String = date.chars().take(10).collect();
                output.push_str(&format!("**Published:** {}\n", day));
            }
            output.push('\n');
        }
        None => output.push_str("### Video\n\n"),
    }

    if let Some(id) = &report.video_id {
        output.push_str(&format!("Video id: {} | language: {}\n\n", id, report.language));
    } else {
        output.push_str(&format!("Language: {}\n\n", report.language));
    }

    // Statistics
    output.push_str("## Quick Report\n\n");
    output.push_str(&format!(
        "- **Transcript length:** {} words\n",
        format_thousands(report.word_count as u64)
    ));
    output.push_str(&format!(
        "- **Unique words (filtered):** {}\n",
        format_thousands(report.unique_words as u64)
    ));
    output.push_str(&format!(
        "- **Segments:** {}\n\n",
        format_thousands(report.segment_count as u64)
    ));

    // Keywords
    output.push_str("**Top keywords**\n\n");
    output.push_str(&format_keywords(&report.keywords, config.keywords_shown));
    output.push_str("\n\n");

    // Summary
    output.push_str("**Auto-summary (extractive)**\n\n");
    if report.bullets.is_empty() {
        output.push_str(EMPTY);
        output.push('\n');
    } else {
        for bullet in &report.bullets {
            output.push_str(bullet);
            output.push('\n');
        }
    }

    output
}
