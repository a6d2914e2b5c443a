//! Helpers to convert analysis results into egui-facing view structs.

use crate::egui_app::state::ResultsUiState;
use crate::sentiment::{
    AnalysisOutcome, Language, LineResult, Sentiment, SentimentResult, SentimentStats,
    SentimentTone, format_confidence, format_percent, total_caption,
};

/// One row of the per-line results table.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRowView {
    /// 1-based position in the analyzed file.
    pub number: usize,
    pub line: String,
    pub label: &'static str,
    pub glyph: &'static str,
    pub tone: SentimentTone,
    pub confidence: String,
}

/// The result card shown in text mode.
#[derive(Clone, Debug, PartialEq)]
pub struct SingleResultView {
    pub label: &'static str,
    pub glyph: &'static str,
    pub tone: SentimentTone,
    pub confidence: String,
}

/// One count card above the results table.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCardView {
    pub caption: &'static str,
    pub value: usize,
    /// Share of all lines, e.g. `40%`; `None` on the total card.
    pub share: Option<String>,
    /// Label color; `None` on the total card.
    pub tone: Option<SentimentTone>,
}

/// Total card followed by one card per sentiment.
pub fn stat_cards(stats: &SentimentStats, language: Language) -> Vec<StatCardView> {
    let total = StatCardView {
        caption: total_caption(language),
        value: stats.total,
        share: None,
        tone: None,
    };
    std::iter::once(total)
        .chain(Sentiment::ALL.into_iter().map(|sentiment| StatCardView {
            caption: sentiment.count_caption(language),
            value: stats.count(sentiment),
            share: Some(format_percent(stats.share(sentiment))),
            tone: Some(sentiment.descriptor(language).tone),
        }))
        .collect()
}

pub fn result_rows(results: &[LineResult], language: Language) -> Vec<ResultRowView> {
    results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            let descriptor = result.sentiment.descriptor(language);
            ResultRowView {
                number: index + 1,
                line: result.line.clone(),
                label: descriptor.label,
                glyph: descriptor.icon.glyph(),
                tone: descriptor.tone,
                confidence: format_confidence(result.confidence),
            }
        })
        .collect()
}

pub fn single_result(result: &SentimentResult, language: Language) -> SingleResultView {
    let descriptor = result.sentiment.descriptor(language);
    SingleResultView {
        label: descriptor.label,
        glyph: descriptor.icon.glyph(),
        tone: descriptor.tone,
        confidence: format_confidence(result.confidence),
    }
}

/// Build the full results state for an outcome.
pub fn results_state(outcome: &AnalysisOutcome, language: Language) -> ResultsUiState {
    match outcome {
        AnalysisOutcome::Lines(results) => ResultsUiState {
            rows: result_rows(results, language),
            stats: Some(SentimentStats::from_results(results)),
            single: None,
        },
        AnalysisOutcome::Text(result) => ResultsUiState {
            rows: Vec::new(),
            stats: None,
            single: Some(single_result(result, language)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_numbered_from_one_with_percent_confidence() {
        let results = vec![
            LineResult {
                line: "good".into(),
                sentiment: Sentiment::Positive,
                confidence: 0.873,
            },
            LineResult {
                line: "meh".into(),
                sentiment: Sentiment::Neutral,
                confidence: 0.5,
            },
        ];
        let rows = result_rows(&results, Language::En);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].confidence, "87%");
        assert_eq!(rows[0].tone, SentimentTone::Green);
        assert_eq!(rows[1].number, 2);
        assert_eq!(rows[1].label, "Neutral");
    }

    #[test]
    fn text_outcome_has_no_rows_or_stats() {
        let outcome = AnalysisOutcome::Text(SentimentResult {
            sentiment: Sentiment::Negative,
            confidence: 0.8,
        });
        let state = results_state(&outcome, Language::Ru);
        assert!(state.rows.is_empty());
        assert!(state.stats.is_none());
        let single = state.single.unwrap();
        assert_eq!(single.label, "Негативный");
        assert_eq!(single.confidence, "80%");
    }

    #[test]
    fn stat_cards_show_counts_with_shares() {
        let stats = SentimentStats {
            total: 5,
            positive: 2,
            negative: 1,
            neutral: 2,
        };
        let cards = stat_cards(&stats, Language::En);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].caption, "Total lines");
        assert_eq!(cards[0].value, 5);
        assert_eq!(cards[0].share, None);
        let shares: Vec<_> = cards[1..]
            .iter()
            .map(|card| (card.value, card.share.clone().unwrap(), card.tone.unwrap()))
            .collect();
        assert_eq!(
            shares,
            vec![
                (2, "40%".to_string(), SentimentTone::Green),
                (1, "20%".to_string(), SentimentTone::Red),
                (2, "40%".to_string(), SentimentTone::Gray),
            ]
        );
    }

    #[test]
    fn stat_cards_of_empty_results_show_zero_shares() {
        let cards = stat_cards(&SentimentStats::default(), Language::Ru);
        assert_eq!(cards[0].caption, "Всего строк");
        assert!(cards[1..].iter().all(|card| card.share.as_deref() == Some("0%")));
    }

    #[test]
    fn empty_line_outcome_counts_as_empty_results() {
        let state = results_state(&AnalysisOutcome::Lines(Vec::new()), Language::En);
        assert!(state.is_empty());
        assert_eq!(state.stats, Some(SentimentStats::default()));
    }
}
