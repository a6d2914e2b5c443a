//! Display descriptors for sentiment labels.
//!
//! The table is an exhaustive `match`, so a new [`Sentiment`] variant does not
//! compile until it has a label, icon and color.

use super::types::{Language, Sentiment};

/// Icon shown next to a sentiment label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentimentIcon {
    SmilePlus,
    Frown,
    Minus,
}

impl SentimentIcon {
    /// Glyph available in the default egui fonts.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::SmilePlus => "☺",
            Self::Frown => "☹",
            Self::Minus => "➖",
        }
    }
}

/// Color family used for a sentiment label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentimentTone {
    Green,
    Red,
    Gray,
}

/// Everything needed to render one sentiment label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentimentDescriptor {
    pub label: &'static str,
    pub icon: SentimentIcon,
    pub tone: SentimentTone,
}

impl Sentiment {
    /// Map the sentiment to its display descriptor.
    pub fn descriptor(self, language: Language) -> SentimentDescriptor {
        let (icon, tone) = match self {
            Self::Positive => (SentimentIcon::SmilePlus, SentimentTone::Green),
            Self::Negative => (SentimentIcon::Frown, SentimentTone::Red),
            Self::Neutral => (SentimentIcon::Minus, SentimentTone::Gray),
        };
        SentimentDescriptor {
            label: self.label(language),
            icon,
            tone,
        }
    }

    /// Localized label for a single result.
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Positive, Language::En) => "Positive",
            (Self::Negative, Language::En) => "Negative",
            (Self::Neutral, Language::En) => "Neutral",
            (Self::Positive, Language::Ru) => "Позитивный",
            (Self::Negative, Language::Ru) => "Негативный",
            (Self::Neutral, Language::Ru) => "Нейтральный",
        }
    }

    /// Localized plural caption used by the stats summary.
    pub fn count_caption(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Positive, Language::En) => "Positive",
            (Self::Negative, Language::En) => "Negative",
            (Self::Neutral, Language::En) => "Neutral",
            (Self::Positive, Language::Ru) => "Позитивных",
            (Self::Negative, Language::Ru) => "Негативных",
            (Self::Neutral, Language::Ru) => "Нейтральных",
        }
    }
}

/// Caption for the total line count in the stats summary.
pub fn total_caption(language: Language) -> &'static str {
    match language {
        Language::En => "Total lines",
        Language::Ru => "Всего строк",
    }
}

/// Format a confidence in `[0, 1]` as a whole percentage, e.g. `0.873` -> `87%`.
pub fn format_confidence(confidence: f64) -> String {
    format_percent(confidence)
}

/// Format a fraction as a whole percentage.
///
/// Adding `0.0` folds a negative zero into `0.0` so it never prints as `-0%`.
pub fn format_percent(fraction: f64) -> String {
    let percent = (fraction * 100.0).round() + 0.0;
    format!("{percent:.0}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_stable_across_calls() {
        for sentiment in Sentiment::ALL {
            for language in Language::ALL {
                assert_eq!(
                    sentiment.descriptor(language),
                    sentiment.descriptor(language)
                );
            }
        }
    }

    #[test]
    fn descriptor_colors_follow_polarity() {
        assert_eq!(Sentiment::Positive.descriptor(Language::En).tone, SentimentTone::Green);
        assert_eq!(Sentiment::Negative.descriptor(Language::En).tone, SentimentTone::Red);
        assert_eq!(Sentiment::Neutral.descriptor(Language::En).tone, SentimentTone::Gray);
    }

    #[test]
    fn russian_labels_and_captions() {
        let descriptor = Sentiment::Negative.descriptor(Language::Ru);
        assert_eq!(descriptor.label, "Негативный");
        assert_eq!(descriptor.icon, SentimentIcon::Frown);
        assert_eq!(Sentiment::Neutral.count_caption(Language::Ru), "Нейтральных");
    }

    #[test]
    fn confidence_rounds_to_whole_percent() {
        assert_eq!(format_confidence(0.873), "87%");
        assert_eq!(format_confidence(0.875), "88%");
        assert_eq!(format_confidence(-0.0), "0%");
        assert_eq!(format_confidence(-0.004), "0%");
        assert_eq!(format_percent(2.0 / 3.0), "67%");
        assert_eq!(format_confidence(0.0), "0%");
        assert_eq!(format_confidence(1.0), "100%");
    }
}
