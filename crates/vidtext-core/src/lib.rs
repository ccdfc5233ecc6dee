//! VidText Core Library
//!
//! Keyword ranking and extractive summarization of video transcripts, plus
//! the glue around it: video id parsing, metadata lookup, transcript files
//! and report rendering.

pub mod analysis;
pub mod config;
pub mod error;
pub mod format;
pub mod meta;
pub mod report;
pub mod transcript;
pub mod types;

// Re-export commonly used items at crate root
pub use analysis::{
    BULLET, ScoredSentence, is_stopword, score, segment, select_bullets, summarize, tokenize,
    top_keywords, unique_tokens, word_count,
};
pub use config::{ReportConfig, SummaryConfig};
pub use error::{Result, VidtextError};
pub use format::{format_keywords, format_report_readable, format_thousands, seconds_to_hms};
pub use meta::{fetch_video_meta, video_id};
pub use report::{build_report, save_report};
pub use transcript::{load_transcript, save_transcript_json, save_transcript_text};
pub use types::{Keyword, QuickReport, Segment, Transcript, VideoMeta};
