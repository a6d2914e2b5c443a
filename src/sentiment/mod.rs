//! Sentiment result model, display mapping, line splitting and stats.

mod descriptor;
mod lines;
mod stats;
mod types;

pub use descriptor::{
    SentimentDescriptor, SentimentIcon, SentimentTone, format_confidence, format_percent, total_caption,
};
pub use lines::{DecodedText, decode_text, split_lines};
pub use stats::SentimentStats;
pub use types::{AnalysisMode, AnalysisOutcome, Language, LineResult, Sentiment, SentimentResult};
