use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default = "unknown_language")]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    pub text: String,
}

fn unknown_language() -> String {
    "unknown".to_string()
}

impl Transcript {
    /// Build a transcript from bare segment texts, one segment per line.
    ///
    /// Only empty lines are dropped; segment text is kept as written.
    pub fn from_lines(text: &str) -> Self {
        let segments = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| Segment {
                start: 0.0,
                end: 0.0,
                text: line.to_string(),
            })
            .collect();

        Self {
            text: text.to_string(),
            segments,
            language: unknown_language(),
        }
    }

    /// The text handed to analysis: segment texts joined by newlines.
    ///
    /// Segments with empty text are skipped. A transcript without segments
    /// falls back to its `text` field.
    pub fn plain_text(&self) -> String {
        if self.segments.is_empty() {
            return self.text.trim().to_string();
        }

        self.segments
            .iter()
            .filter(|seg| !seg.text.is_empty())
            .map(|seg| seg.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn duration_seconds(&self) -> f64 {
        self.segments.last().map(|s| s.end).unwrap_or(0.0)
    }
}

/// A ranked keyword and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMeta {
    pub title: String,
    pub author: String,
    pub thumbnail_url: Option<String>,
    pub length_s: Option<u64>,
    pub views: Option<u64>,
    pub publish_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickReport {
    pub video_id: Option<String>,
    pub meta: Option<VideoMeta>,
    pub language: String,
    pub word_count: usize,
    pub unique_words: usize,
    pub segment_count: usize,
    pub keywords: Vec<Keyword>,
    pub bullets: Vec<String>,
}
