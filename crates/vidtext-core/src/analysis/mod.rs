//! Statistical transcript analysis: keyword ranking and extractive summaries.

pub mod keywords;
pub mod scoring;
pub mod sentences;
pub mod stopwords;
pub mod summary;
pub mod tokenizer;

pub use keywords::top_keywords;
pub use scoring::{ScoredSentence, score};
pub use sentences::segment;
pub use stopwords::is_stopword;
pub use summary::{BULLET, select_bullets, summarize};
pub use tokenizer::{tokenize, unique_tokens, word_count};
