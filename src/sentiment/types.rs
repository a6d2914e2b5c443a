use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Polarity label assigned by the analysis service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All variants in display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Wire representation used by the service.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment for one line of an analyzed file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineResult {
    pub line: String,
    pub sentiment: Sentiment,
    /// Service certainty in `[0, 1]`.
    pub confidence: f64,
}

/// Sentiment for a single block of free text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Service certainty in `[0, 1]`.
    pub confidence: f64,
}

/// Which input the analyzer collects and which request shape it sends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMode {
    /// A picked file, split into non-empty lines, analyzed line by line.
    #[default]
    #[serde(rename = "batch-by-lines")]
    Lines,
    /// One freeform text block analyzed as a whole.
    #[serde(rename = "single-text")]
    Text,
}

impl AnalysisMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lines => "batch-by-lines",
            Self::Text => "single-text",
        }
    }

    /// Short caption for mode switches.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Lines => "File, line by line",
            Self::Text => "Free text",
        }
    }
}

/// Result of one successful analysis call.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOutcome {
    Lines(Vec<LineResult>),
    Text(SentimentResult),
}

/// Language of sentiment labels and window captions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            other => Err(format!("Unknown language: {other} (expected en or ru)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_uses_lowercase_wire_names() {
        let parsed: Sentiment = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(parsed, Sentiment::Negative);
        assert_eq!(serde_json::to_string(&Sentiment::Neutral).unwrap(), "\"neutral\"");
    }

    #[test]
    fn unknown_sentiment_label_is_rejected() {
        let err = serde_json::from_str::<Sentiment>("\"mixed\"").unwrap_err();
        assert!(err.to_string().contains("mixed"));
    }

    #[test]
    fn mode_serializes_with_kebab_names() {
        assert_eq!(
            serde_json::to_string(&AnalysisMode::Lines).unwrap(),
            "\"batch-by-lines\""
        );
        let parsed: AnalysisMode = serde_json::from_str("\"single-text\"").unwrap();
        assert_eq!(parsed, AnalysisMode::Text);
        assert_eq!(parsed.as_str(), "single-text");
    }

    #[test]
    fn language_parses_case_insensitively() {
        assert_eq!("RU".parse::<Language>().unwrap(), Language::Ru);
        assert!("de".parse::<Language>().is_err());
    }
}
