use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{Result, VidtextError};

/// Bounds for extractive summary selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Maximum number of bullets
    pub bullets: usize,
    /// Shortest accepted sentence, in characters
    pub min_len: usize,
    /// Longest accepted sentence, in characters
    pub max_len: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            bullets: 5,
            min_len: 40,
            max_len: 220,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub summary: SummaryConfig,
    /// How many keywords to rank
    pub top_keywords: usize,
    /// How many of the ranked keywords the readable report prints
    pub keywords_shown: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            summary: SummaryConfig::default(),
            top_keywords: 20,
            keywords_shown: 15,
        }
    }
}

impl ReportConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub async fn load(path: &Path) -> Result<Self> {
        let json_content = fs::read_to_string(path).await?;
        let config: ReportConfig = serde_json::from_str(&json_content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rank `n` keywords, printing at least that many in the readable report.
    pub fn with_top_keywords(mut self, n: usize) -> Self {
        self.top_keywords = n;
        self.keywords_shown = self.keywords_shown.max(n);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.summary.min_len > self.summary.max_len {
            return Err(VidtextError::ConfigInvalid {
                reason: format!(
                    "min_len ({}) is greater than max_len ({})",
                    self.summary.min_len, self.summary.max_len
                ),
            });
        }
        Ok(())
    }
}
